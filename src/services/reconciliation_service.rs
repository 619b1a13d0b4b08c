//! Extraction and validation of JSON embedded in freeform generator output.
//!
//! Generated text is an untrusted input boundary: everything here returns
//! `Option` and never panics, so a malformed payload can only ever route the
//! caller onto the deterministic path.

use serde::Deserialize;
use tracing::debug;

use crate::models::{
    FitnessLevel, PlanExercise, ProfessionAnalysis, ProfessionExercise, WorkoutPlan, WorkoutType,
    EXERCISE_DURATION_MINUTES,
};

/// Plan shape the generator is instructed to produce.
#[derive(Debug, Deserialize)]
struct RawPlan {
    title: String,
    exercises: Vec<RawExercise>,
}

#[derive(Debug, Deserialize)]
struct RawExercise {
    name: String,
    description: String,
    sets: Option<u32>,
    reps: Option<u32>,
    duration_minutes: Option<u32>,
    #[serde(default)]
    target_areas: Vec<String>,
    #[serde(default)]
    equipment_needed: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawExerciseList {
    exercises: Vec<ProfessionExercise>,
}

/// Strip the Markdown code fences and bold markers generators tend to wrap
/// JSON in.
fn strip_markup(content: &str) -> String {
    content
        .trim()
        .replace("```json", "")
        .replace("```", "")
        .replace("**", "")
}

/// Greedy brace matching: first `{` to last `}`.
fn extract_json_span(content: &str) -> Option<&str> {
    let start = content.find('{')?;
    let end = content.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&content[start..=end])
}

/// Extract and validate a workout plan from generated text.
///
/// Requires a `title` and a non-empty `exercises` list where every entry
/// carries a name and description. Missing volume fields are defaulted from
/// the level policy. The plan's type comes from the caller; the generator's
/// own type claims are not trusted. Returns `None` on any failure.
pub fn reconcile_workout_plan(
    content: &str,
    plan_type: WorkoutType,
    level: FitnessLevel,
) -> Option<WorkoutPlan> {
    let cleaned = strip_markup(content);
    let span = extract_json_span(&cleaned)?;

    let raw: RawPlan = match serde_json::from_str(span) {
        Ok(raw) => raw,
        Err(err) => {
            debug!(%err, "generated plan failed to parse");
            return None;
        }
    };

    if raw.exercises.is_empty() {
        debug!("generated plan has no exercises");
        return None;
    }

    let exercises = raw
        .exercises
        .into_iter()
        .map(|ex| {
            let (sets, reps) = match plan_type {
                // Work breaks are timed, not rep-counted; keep whatever the
                // generator supplied but do not invent volume.
                WorkoutType::Work => (ex.sets, ex.reps),
                WorkoutType::Exercise => (
                    Some(ex.sets.unwrap_or_else(|| level.sets())),
                    Some(ex.reps.unwrap_or_else(|| level.reps())),
                ),
            };

            PlanExercise {
                name: ex.name,
                description: ex.description.trim().to_string(),
                sets,
                reps,
                duration_minutes: Some(
                    ex.duration_minutes.unwrap_or(EXERCISE_DURATION_MINUTES),
                ),
                target_areas: if ex.target_areas.is_empty() {
                    vec!["general".to_string()]
                } else {
                    ex.target_areas
                },
                is_work_friendly: plan_type == WorkoutType::Work,
                equipment_needed: ex.equipment_needed,
                difficulty: None,
            }
        })
        .collect();

    Some(WorkoutPlan::new(raw.title, plan_type, exercises))
}

/// Extract and validate a profession classification. The schema is strict:
/// every section must be present.
pub fn reconcile_profession_analysis(content: &str) -> Option<ProfessionAnalysis> {
    let cleaned = strip_markup(content);
    let span = extract_json_span(&cleaned)?;

    match serde_json::from_str(span) {
        Ok(analysis) => Some(analysis),
        Err(err) => {
            debug!(%err, "profession analysis failed to parse");
            None
        }
    }
}

/// Extract a non-empty list of profession-targeted exercises.
pub fn reconcile_profession_exercises(content: &str) -> Option<Vec<ProfessionExercise>> {
    let cleaned = strip_markup(content);
    let span = extract_json_span(&cleaned)?;

    let raw: RawExerciseList = match serde_json::from_str(span) {
        Ok(raw) => raw,
        Err(err) => {
            debug!(%err, "profession exercises failed to parse");
            return None;
        }
    };

    if raw.exercises.is_empty() {
        None
    } else {
        Some(raw.exercises)
    }
}
