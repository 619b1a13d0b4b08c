use serde::{Deserialize, Serialize};

/// How much a workplace keeps the body moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkplaceEnvironment {
    #[serde(rename = "sedentary")]
    Sedentary,
    #[serde(rename = "active")]
    Active,
    #[serde(rename = "very active")]
    VeryActive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// A workplace health issue commonly seen in a profession.
#[derive(Debug, Clone, Serialize)]
pub struct CommonIssue {
    pub issue: &'static str,
    pub severity: Severity,
}

/// An exercise recommended for a profession's risk profile.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendedExercise {
    pub name: &'static str,
    pub description: &'static str,
    pub duration: &'static str,
    pub frequency: &'static str,
    pub target_areas: &'static [&'static str],
    pub focus_areas: &'static [&'static str],
}

/// Reference set entry. Immutable, initialized at startup, never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct ProfessionProfile {
    pub name: &'static str,
    pub category: &'static str,
    pub physical_demands: &'static [&'static str],
    pub workplace_environment: WorkplaceEnvironment,
    pub common_issues: &'static [CommonIssue],
    pub recommended_exercises: &'static [RecommendedExercise],
}

/// Classification produced for professions outside the reference set.
/// Reconciled from generated text against this exact schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfessionAnalysis {
    pub category: String,
    pub characteristics: ProfessionCharacteristics,
    pub health_risks: Vec<String>,
    pub exercise_recommendations: ExerciseRecommendations,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfessionCharacteristics {
    pub physical_demands: Vec<String>,
    pub workplace: Vec<String>,
    pub movements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseRecommendations {
    pub types: Vec<String>,
    pub frequency: String,
    pub focus_areas: Vec<String>,
}

impl ProfessionAnalysis {
    /// Structural fallback used when neither the reference set nor the
    /// generator can classify a profession. Always succeeds.
    pub fn sentinel() -> Self {
        Self {
            category: "custom".to_string(),
            characteristics: ProfessionCharacteristics {
                physical_demands: vec!["unknown".to_string()],
                workplace: vec!["unknown".to_string()],
                movements: vec!["unknown".to_string()],
            },
            health_risks: vec!["unknown".to_string()],
            exercise_recommendations: ExerciseRecommendations {
                types: vec!["general exercise".to_string()],
                frequency: "regular breaks".to_string(),
                focus_areas: vec!["general health".to_string()],
            },
        }
    }
}

/// Analyzer output: a reference profile for known professions, a synthesized
/// analysis otherwise. Serializes as the bare inner shape either way.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ProfessionReport {
    Known(&'static ProfessionProfile),
    Analyzed(ProfessionAnalysis),
}

impl ProfessionReport {
    pub fn is_known(&self) -> bool {
        matches!(self, ProfessionReport::Known(_))
    }
}

/// A targeted exercise generated for a profession's characteristics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfessionExercise {
    pub name: String,
    pub description: String,
    pub duration_minutes: u32,
    #[serde(default)]
    pub target_areas: Vec<String>,
    #[serde(default)]
    pub frequency: String,
    #[serde(default)]
    pub reason: String,
}
