//! Profession reference set: known professions with workplace risk profiles
//! and recommended exercises.

use crate::models::{
    CommonIssue, ProfessionProfile, RecommendedExercise, Severity, WorkplaceEnvironment,
};

pub static PROFESSIONS: &[ProfessionProfile] = &[
    ProfessionProfile {
        name: "Office Worker",
        category: "Desk Work",
        physical_demands: &["sitting", "typing", "screen viewing"],
        workplace_environment: WorkplaceEnvironment::Sedentary,
        common_issues: &[
            CommonIssue { issue: "lower back pain", severity: Severity::High },
            CommonIssue { issue: "eye strain", severity: Severity::High },
            CommonIssue { issue: "carpal tunnel", severity: Severity::Medium },
            CommonIssue { issue: "poor posture", severity: Severity::High },
        ],
        recommended_exercises: &[
            RecommendedExercise {
                name: "Desk Stretches",
                description: "Simple stretches you can do at your desk",
                duration: "5 minutes",
                frequency: "every hour",
                target_areas: &["back", "neck", "shoulders"],
                focus_areas: &["posture", "flexibility"],
            },
            RecommendedExercise {
                name: "Eye Relief",
                description: "Eye exercises to reduce strain",
                duration: "2 minutes",
                frequency: "every 30 minutes",
                target_areas: &["eyes"],
                focus_areas: &["eye health"],
            },
        ],
    },
    ProfessionProfile {
        name: "Doctor",
        category: "Healthcare",
        physical_demands: &["standing", "walking", "lifting"],
        workplace_environment: WorkplaceEnvironment::Active,
        common_issues: &[
            CommonIssue { issue: "back strain", severity: Severity::High },
            CommonIssue { issue: "foot fatigue", severity: Severity::High },
            CommonIssue { issue: "stress", severity: Severity::High },
        ],
        recommended_exercises: &[
            RecommendedExercise {
                name: "Quick Stretches",
                description: "Simple stretches between patients",
                duration: "5 minutes",
                frequency: "every 2 hours",
                target_areas: &["back", "neck", "shoulders"],
                focus_areas: &["back", "neck", "shoulders"],
            },
            RecommendedExercise {
                name: "Posture Reset",
                description: "Alignment exercises for better posture",
                duration: "2 minutes",
                frequency: "hourly",
                target_areas: &["spine", "core"],
                focus_areas: &["posture", "core"],
            },
        ],
    },
    ProfessionProfile {
        name: "Teacher",
        category: "Education",
        physical_demands: &["standing", "speaking", "writing"],
        workplace_environment: WorkplaceEnvironment::Active,
        common_issues: &[
            CommonIssue { issue: "voice strain", severity: Severity::High },
            CommonIssue { issue: "back pain", severity: Severity::Medium },
            CommonIssue { issue: "foot fatigue", severity: Severity::Medium },
        ],
        recommended_exercises: &[
            RecommendedExercise {
                name: "Voice Rest",
                description: "Vocal rest and hydration breaks",
                duration: "5 minutes",
                frequency: "hourly",
                target_areas: &["throat", "neck"],
                focus_areas: &["voice", "neck"],
            },
            RecommendedExercise {
                name: "Classroom Stretches",
                description: "Stretches while supervising students",
                duration: "3 minutes",
                frequency: "every 2 hours",
                target_areas: &["back", "legs"],
                focus_areas: &["back", "legs"],
            },
        ],
    },
    ProfessionProfile {
        name: "Nurse",
        category: "Healthcare",
        physical_demands: &["walking", "lifting", "bending"],
        workplace_environment: WorkplaceEnvironment::Active,
        common_issues: &[
            CommonIssue { issue: "back strain", severity: Severity::High },
            CommonIssue { issue: "foot pain", severity: Severity::High },
            CommonIssue { issue: "fatigue", severity: Severity::High },
        ],
        recommended_exercises: &[
            RecommendedExercise {
                name: "Quick Recovery",
                description: "Brief exercises between rounds",
                duration: "3 minutes",
                frequency: "every 2 hours",
                target_areas: &["back", "legs"],
                focus_areas: &["recovery", "strength"],
            },
        ],
    },
    ProfessionProfile {
        name: "Chef",
        category: "Food Service",
        physical_demands: &["standing", "lifting", "repetitive motions"],
        workplace_environment: WorkplaceEnvironment::Active,
        common_issues: &[
            CommonIssue { issue: "foot pain", severity: Severity::High },
            CommonIssue { issue: "wrist strain", severity: Severity::Medium },
            CommonIssue { issue: "back pain", severity: Severity::High },
        ],
        recommended_exercises: &[
            RecommendedExercise {
                name: "Kitchen Stretches",
                description: "Quick stretches during prep time",
                duration: "3 minutes",
                frequency: "every hour",
                target_areas: &["legs", "back", "wrists"],
                focus_areas: &["flexibility", "relief"],
            },
        ],
    },
    ProfessionProfile {
        name: "Driver",
        category: "Transportation",
        physical_demands: &["sitting", "concentration", "repetitive movements"],
        workplace_environment: WorkplaceEnvironment::Sedentary,
        common_issues: &[
            CommonIssue { issue: "lower back pain", severity: Severity::High },
            CommonIssue { issue: "neck strain", severity: Severity::Medium },
            CommonIssue { issue: "leg cramps", severity: Severity::Medium },
        ],
        recommended_exercises: &[
            RecommendedExercise {
                name: "Driver's Relief",
                description: "Exercises during breaks",
                duration: "5 minutes",
                frequency: "every 2 hours",
                target_areas: &["back", "neck", "legs"],
                focus_areas: &["mobility", "circulation"],
            },
        ],
    },
    ProfessionProfile {
        name: "Retail Worker",
        category: "Sales",
        physical_demands: &["standing", "lifting", "walking"],
        workplace_environment: WorkplaceEnvironment::Active,
        common_issues: &[
            CommonIssue { issue: "foot fatigue", severity: Severity::High },
            CommonIssue { issue: "back strain", severity: Severity::Medium },
            CommonIssue { issue: "leg fatigue", severity: Severity::Medium },
        ],
        recommended_exercises: &[
            RecommendedExercise {
                name: "Register Relief",
                description: "Quick exercises during quiet times",
                duration: "2 minutes",
                frequency: "every hour",
                target_areas: &["feet", "legs", "back"],
                focus_areas: &["relief", "circulation"],
            },
        ],
    },
    ProfessionProfile {
        name: "Construction Worker",
        category: "Construction",
        physical_demands: &["heavy lifting", "climbing", "bending"],
        workplace_environment: WorkplaceEnvironment::VeryActive,
        common_issues: &[
            CommonIssue { issue: "back strain", severity: Severity::High },
            CommonIssue { issue: "joint stress", severity: Severity::High },
            CommonIssue { issue: "muscle fatigue", severity: Severity::High },
        ],
        recommended_exercises: &[
            RecommendedExercise {
                name: "Site Stretches",
                description: "Stretches to prevent injury",
                duration: "5 minutes",
                frequency: "every 2 hours",
                target_areas: &["back", "shoulders", "legs"],
                focus_areas: &["flexibility", "strength"],
            },
        ],
    },
    ProfessionProfile {
        name: "Software Developer",
        category: "Technology",
        physical_demands: &["sitting", "typing", "screen viewing"],
        workplace_environment: WorkplaceEnvironment::Sedentary,
        common_issues: &[
            CommonIssue { issue: "eye strain", severity: Severity::High },
            CommonIssue { issue: "wrist pain", severity: Severity::High },
            CommonIssue { issue: "poor posture", severity: Severity::High },
        ],
        recommended_exercises: &[
            RecommendedExercise {
                name: "Coding Break",
                description: "Screen break exercises",
                duration: "5 minutes",
                frequency: "every hour",
                target_areas: &["eyes", "wrists", "back"],
                focus_areas: &["eye health", "ergonomics"],
            },
        ],
    },
];

/// Case-insensitive lookup: exact name match first, then substring.
pub fn find_profession(search: &str) -> Option<&'static ProfessionProfile> {
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }
    PROFESSIONS
        .iter()
        .find(|p| p.name.to_lowercase() == needle)
        .or_else(|| {
            PROFESSIONS
                .iter()
                .find(|p| p.name.to_lowercase().contains(&needle))
        })
}
