use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Difficulty tag carried by catalog templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

/// Fitness tier controlling difficulty filtering and volume parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitnessLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl FitnessLevel {
    /// Nominal exercise count per plan for this tier.
    pub fn exercise_count(self) -> usize {
        match self {
            FitnessLevel::Beginner => 4,
            FitnessLevel::Intermediate => 6,
            FitnessLevel::Advanced => 8,
        }
    }

    pub fn sets(self) -> u32 {
        match self {
            FitnessLevel::Beginner => 3,
            _ => 4,
        }
    }

    pub fn reps(self) -> u32 {
        match self {
            FitnessLevel::Beginner => 10,
            _ => 15,
        }
    }

    /// Difficulty ceiling: only advanced users draw advanced templates.
    pub fn allows(self, difficulty: Difficulty) -> bool {
        match self {
            FitnessLevel::Advanced => true,
            _ => difficulty != Difficulty::Advanced,
        }
    }
}

/// Per-exercise minutes assigned at selection time. Fixed for every tier;
/// downstream screens expect this value, so it is not derived from the level.
pub const EXERCISE_DURATION_MINUTES: u32 = 5;

/// Immutable catalog entry. Owned by the static exercise catalog.
#[derive(Debug, Clone)]
pub struct ExerciseTemplate {
    pub name: &'static str,
    pub description: &'static str,
    pub target_areas: &'static [&'static str],
    pub work_friendly: bool,
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutType {
    Work,
    Exercise,
}

/// One exercise inside a finished plan, whether drawn from the catalog or
/// reconciled from generated text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanExercise {
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sets: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reps: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    #[serde(default)]
    pub target_areas: Vec<String>,
    #[serde(default)]
    pub is_work_friendly: bool,
    #[serde(default)]
    pub equipment_needed: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
}

impl PlanExercise {
    /// Catalog draw with volume parameters attached per the level policy.
    pub fn from_template(template: &ExerciseTemplate, level: FitnessLevel) -> Self {
        Self {
            name: template.name.to_string(),
            description: template.description.to_string(),
            sets: Some(level.sets()),
            reps: Some(level.reps()),
            duration_minutes: Some(EXERCISE_DURATION_MINUTES),
            target_areas: template.target_areas.iter().map(|s| s.to_string()).collect(),
            is_work_friendly: template.work_friendly,
            equipment_needed: Vec::new(),
            difficulty: Some(template.difficulty),
        }
    }

    /// Work-break variant: timed, no sets or reps.
    pub fn work_break(template: &ExerciseTemplate) -> Self {
        Self {
            name: template.name.to_string(),
            description: template.description.to_string(),
            sets: None,
            reps: None,
            duration_minutes: Some(EXERCISE_DURATION_MINUTES),
            target_areas: template.target_areas.iter().map(|s| s.to_string()).collect(),
            is_work_friendly: true,
            equipment_needed: Vec::new(),
            difficulty: Some(template.difficulty),
        }
    }
}

/// A finished plan, handed to the persistence collaborator.
///
/// Invariant: `exercises` is never empty when a plan is returned
/// successfully; a draw that would end up empty escalates to the full-body
/// fallback instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutPlan {
    pub id: Uuid,
    pub title: String,
    #[serde(rename = "type")]
    pub plan_type: WorkoutType,
    pub exercises: Vec<PlanExercise>,
    pub created_at: DateTime<Utc>,
}

impl WorkoutPlan {
    pub fn new(title: String, plan_type: WorkoutType, exercises: Vec<PlanExercise>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            plan_type,
            exercises,
            created_at: Utc::now(),
        }
    }
}
