//! Curated exercise catalog, grouped by body region.

use crate::models::{Difficulty, ExerciseTemplate};

/// One concrete catalog pool. Compound regions like "upper body" are aliases
/// resolved by the selector, not pools of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogGroup {
    LowerBody,
    Abs,
    Back,
    Shoulders,
    Chest,
    Glutes,
    Hamstrings,
}

impl CatalogGroup {
    pub fn templates(self) -> &'static [ExerciseTemplate] {
        match self {
            CatalogGroup::LowerBody => LOWER_BODY,
            CatalogGroup::Abs => ABS,
            CatalogGroup::Back => BACK,
            CatalogGroup::Shoulders => SHOULDERS,
            CatalogGroup::Chest => CHEST,
            CatalogGroup::Glutes => GLUTES,
            CatalogGroup::Hamstrings => HAMSTRINGS,
        }
    }

    pub fn all() -> &'static [CatalogGroup] {
        &[
            CatalogGroup::LowerBody,
            CatalogGroup::Abs,
            CatalogGroup::Back,
            CatalogGroup::Shoulders,
            CatalogGroup::Chest,
            CatalogGroup::Glutes,
            CatalogGroup::Hamstrings,
        ]
    }
}

pub const LOWER_BODY: &[ExerciseTemplate] = &[
    ExerciseTemplate {
        name: "Squats",
        description: "Stand with feet shoulder-width apart. Lower body as if sitting back into a chair.",
        target_areas: &["quads", "glutes"],
        work_friendly: true,
        difficulty: Difficulty::Beginner,
    },
    ExerciseTemplate {
        name: "Lunges",
        description: "Step forward with one leg, lowering until both knees are bent at 90 degrees.",
        target_areas: &["quads", "hamstrings", "glutes"],
        work_friendly: true,
        difficulty: Difficulty::Beginner,
    },
    ExerciseTemplate {
        name: "Calf Raises",
        description: "Stand on edge of step, raise heels up and lower back down.",
        target_areas: &["calves"],
        work_friendly: true,
        difficulty: Difficulty::Beginner,
    },
    ExerciseTemplate {
        name: "Glute Bridges",
        description: "Lie on back, feet flat, lift hips toward ceiling.",
        target_areas: &["glutes", "hamstrings"],
        work_friendly: false,
        difficulty: Difficulty::Beginner,
    },
    ExerciseTemplate {
        name: "Jump Squats",
        description: "Perform a squat, then explosively jump up. Land softly and repeat.",
        target_areas: &["quads", "glutes", "calves"],
        work_friendly: false,
        difficulty: Difficulty::Advanced,
    },
    ExerciseTemplate {
        name: "Wall Sits",
        description: "Lean against wall, slide down until thighs are parallel to ground.",
        target_areas: &["quads", "glutes"],
        work_friendly: true,
        difficulty: Difficulty::Beginner,
    },
    ExerciseTemplate {
        name: "Step-Ups",
        description: "Using a sturdy platform, step up with one leg, then the other.",
        target_areas: &["quads", "glutes", "calves"],
        work_friendly: true,
        difficulty: Difficulty::Beginner,
    },
    ExerciseTemplate {
        name: "Bulgarian Split Squats",
        description: "Place one foot behind on elevated surface, lower into a lunge.",
        target_areas: &["quads", "glutes", "balance"],
        work_friendly: false,
        difficulty: Difficulty::Beginner,
    },
];

pub const ABS: &[ExerciseTemplate] = &[
    ExerciseTemplate {
        name: "Crunches",
        description: "Lie on back, lift shoulders off ground engaging core.",
        target_areas: &["abs", "core"],
        work_friendly: false,
        difficulty: Difficulty::Beginner,
    },
    ExerciseTemplate {
        name: "Plank",
        description: "Hold straight-arm plank position, maintaining straight body.",
        target_areas: &["core", "abs"],
        work_friendly: true,
        difficulty: Difficulty::Beginner,
    },
    ExerciseTemplate {
        name: "Russian Twists",
        description: "Sit with knees bent, rotate torso side to side.",
        target_areas: &["obliques", "core"],
        work_friendly: false,
        difficulty: Difficulty::Beginner,
    },
    ExerciseTemplate {
        name: "Mountain Climbers",
        description: "In plank position, alternate bringing knees to chest.",
        target_areas: &["core", "cardio"],
        work_friendly: true,
        difficulty: Difficulty::Beginner,
    },
    ExerciseTemplate {
        name: "Bicycle Crunches",
        description: "Lie on back, alternate elbow to opposite knee.",
        target_areas: &["obliques", "core"],
        work_friendly: false,
        difficulty: Difficulty::Beginner,
    },
    ExerciseTemplate {
        name: "Dead Bug",
        description: "Lie on back, alternate extending opposite arm and leg.",
        target_areas: &["core", "stability"],
        work_friendly: false,
        difficulty: Difficulty::Beginner,
    },
    ExerciseTemplate {
        name: "Bird Dog",
        description: "On hands and knees, extend opposite arm and leg.",
        target_areas: &["core", "balance"],
        work_friendly: false,
        difficulty: Difficulty::Beginner,
    },
    ExerciseTemplate {
        name: "Side Plank",
        description: "Hold plank position on one side, supporting with forearm.",
        target_areas: &["obliques", "core"],
        work_friendly: true,
        difficulty: Difficulty::Beginner,
    },
];

pub const BACK: &[ExerciseTemplate] = &[
    ExerciseTemplate {
        name: "Pull-Ups",
        description: "Hang from bar, pull body up until chin is over bar.",
        target_areas: &["back", "lats"],
        work_friendly: false,
        difficulty: Difficulty::Beginner,
    },
    ExerciseTemplate {
        name: "Inverted Rows",
        description: "Using a sturdy table or bar at waist height, pull chest to bar while body is straight.",
        target_areas: &["back", "rhomboids"],
        work_friendly: true,
        difficulty: Difficulty::Beginner,
    },
    ExerciseTemplate {
        name: "Superman Holds",
        description: "Lie face down, lift arms and legs off ground, hold position.",
        target_areas: &["lower back", "core"],
        work_friendly: false,
        difficulty: Difficulty::Beginner,
    },
    ExerciseTemplate {
        name: "Band Pull-Aparts",
        description: "Hold resistance band in front, pull apart engaging shoulder blades.",
        target_areas: &["upper back", "rear deltoids"],
        work_friendly: true,
        difficulty: Difficulty::Beginner,
    },
    ExerciseTemplate {
        name: "Good Morning",
        description: "Stand with feet shoulder-width, hinge at hips keeping back straight.",
        target_areas: &["lower back", "hamstrings"],
        work_friendly: true,
        difficulty: Difficulty::Beginner,
    },
];

pub const SHOULDERS: &[ExerciseTemplate] = &[
    ExerciseTemplate {
        name: "Pike Push-Ups",
        description: "Push-ups with hips raised, forming an inverted V shape.",
        target_areas: &["shoulders", "triceps"],
        work_friendly: true,
        difficulty: Difficulty::Beginner,
    },
    ExerciseTemplate {
        name: "Lateral Raises",
        description: "Raise arms out to sides until parallel with ground.",
        target_areas: &["lateral deltoids"],
        work_friendly: true,
        difficulty: Difficulty::Beginner,
    },
    ExerciseTemplate {
        name: "Front Raises",
        description: "Raise arms straight in front until parallel with ground.",
        target_areas: &["front deltoids"],
        work_friendly: true,
        difficulty: Difficulty::Beginner,
    },
    ExerciseTemplate {
        name: "Reverse Flies",
        description: "Bend forward, raise arms out to sides engaging rear shoulders.",
        target_areas: &["rear deltoids", "upper back"],
        work_friendly: true,
        difficulty: Difficulty::Beginner,
    },
];

pub const CHEST: &[ExerciseTemplate] = &[
    ExerciseTemplate {
        name: "Push-Ups",
        description: "Start in plank position. Lower chest to ground and push back up.",
        target_areas: &["chest", "shoulders", "triceps"],
        work_friendly: true,
        difficulty: Difficulty::Beginner,
    },
    ExerciseTemplate {
        name: "Incline Push-Ups",
        description: "Push-ups with hands elevated on stable surface.",
        target_areas: &["lower chest", "shoulders"],
        work_friendly: true,
        difficulty: Difficulty::Beginner,
    },
    ExerciseTemplate {
        name: "Decline Push-Ups",
        description: "Push-ups with feet elevated on stable surface.",
        target_areas: &["upper chest", "shoulders"],
        work_friendly: true,
        difficulty: Difficulty::Beginner,
    },
];

pub const GLUTES: &[ExerciseTemplate] = &[
    ExerciseTemplate {
        name: "Hip Thrusts",
        description: "Sit with upper back against bench, roll bar over hips, thrust upward.",
        target_areas: &["glutes", "hamstrings"],
        work_friendly: false,
        difficulty: Difficulty::Beginner,
    },
    ExerciseTemplate {
        name: "Glute Bridges",
        description: "Lie on back, feet flat, lift hips toward ceiling.",
        target_areas: &["glutes", "hamstrings"],
        work_friendly: false,
        difficulty: Difficulty::Beginner,
    },
    ExerciseTemplate {
        name: "Fire Hydrants",
        description: "On hands and knees, lift leg out to side while keeping knee bent.",
        target_areas: &["glutes", "hip abductors"],
        work_friendly: false,
        difficulty: Difficulty::Beginner,
    },
    ExerciseTemplate {
        name: "Donkey Kicks",
        description: "On hands and knees, kick one leg back and up toward ceiling.",
        target_areas: &["glutes", "lower back"],
        work_friendly: false,
        difficulty: Difficulty::Beginner,
    },
    ExerciseTemplate {
        name: "Single-Leg Glute Bridge",
        description: "Perform glute bridge with one leg extended.",
        target_areas: &["glutes", "core", "balance"],
        work_friendly: false,
        difficulty: Difficulty::Beginner,
    },
    ExerciseTemplate {
        name: "Frog Pumps",
        description: "Lie on back, soles of feet together, lift hips.",
        target_areas: &["glutes", "inner thighs"],
        work_friendly: false,
        difficulty: Difficulty::Beginner,
    },
];

pub const HAMSTRINGS: &[ExerciseTemplate] = &[
    ExerciseTemplate {
        name: "Romanian Deadlifts",
        description: "Stand tall, hinge at hips while keeping back straight.",
        target_areas: &["hamstrings", "lower back", "glutes"],
        work_friendly: false,
        difficulty: Difficulty::Beginner,
    },
    ExerciseTemplate {
        name: "Leg Curls",
        description: "Lie face down, curl legs toward buttocks.",
        target_areas: &["hamstrings"],
        work_friendly: false,
        difficulty: Difficulty::Beginner,
    },
];
