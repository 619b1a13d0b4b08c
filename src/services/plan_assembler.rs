//! Deterministic plan composition: the guaranteed fallback terminus.

use rand::Rng;
use tracing::{debug, warn};

use crate::data::catalog::CatalogGroup;
use crate::models::{FitnessLevel, PlanExercise, WorkoutPlan, WorkoutType};
use crate::services::exercise_selector::{resolve_groups, select_exercises};
use crate::services::intent_classifier::WorkoutIntent;

/// Groups composing the full-body fallback, drawn evenly.
const FULL_BODY_GROUPS: [CatalogGroup; 4] = [
    CatalogGroup::Chest,
    CatalogGroup::Back,
    CatalogGroup::LowerBody,
    CatalogGroup::Abs,
];

pub const FULL_BODY_TITLE: &str = "Full Body Workout";
pub const WORK_PLAN_TITLE: &str = "Office Workout";

/// Compose a plan from a classified intent. Total: any request produces a
/// non-empty plan, escalating to the full-body composition when the
/// requested groups yield nothing.
pub fn assemble<R: Rng>(rng: &mut R, intent: &WorkoutIntent) -> WorkoutPlan {
    let count = intent.level.exercise_count();

    if intent.groups.is_empty() {
        return full_body_plan(rng, intent.level, count);
    }

    let title = intent
        .groups
        .iter()
        .map(|g| g.display_name())
        .collect::<Vec<_>>()
        .join(" & ")
        + " Workout";

    let mut exercises = Vec::new();
    for group in &intent.groups {
        let sub_groups = resolve_groups(*group);
        // Ceil split so compound regions never under-fill a sub-group. The
        // aggregate may exceed the nominal per-level count; accepted.
        let per_sub_group = count.div_ceil(sub_groups.len());
        debug!(?group, ?sub_groups, per_sub_group, "drawing exercises");
        for sub_group in sub_groups {
            exercises.extend(select_exercises(rng, *sub_group, per_sub_group, intent.level));
        }
    }

    if exercises.is_empty() {
        warn!("requested groups yielded no exercises, composing full body instead");
        return full_body_plan(rng, intent.level, count);
    }

    WorkoutPlan::new(title, WorkoutType::Exercise, exercises)
}

fn full_body_plan<R: Rng>(rng: &mut R, level: FitnessLevel, count: usize) -> WorkoutPlan {
    let per_group = count / FULL_BODY_GROUPS.len();
    let exercises = FULL_BODY_GROUPS
        .iter()
        .flat_map(|group| select_exercises(rng, *group, per_group, level))
        .collect();

    WorkoutPlan::new(FULL_BODY_TITLE.to_string(), WorkoutType::Exercise, exercises)
}

/// Fixed-template office plan: work-friendly movements in catalog order,
/// timed rather than rep-counted. No selection logic on purpose.
pub fn assemble_work_plan(count: usize) -> WorkoutPlan {
    let exercises: Vec<PlanExercise> = FULL_BODY_GROUPS
        .iter()
        .flat_map(|group| group.templates().iter())
        .filter(|t| t.work_friendly)
        .take(count.max(1))
        .map(PlanExercise::work_break)
        .collect();

    WorkoutPlan::new(WORK_PLAN_TITLE.to_string(), WorkoutType::Work, exercises)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::intent_classifier::classify;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn single_group_title_and_count() {
        let mut rng = StdRng::seed_from_u64(11);
        let plan = assemble(&mut rng, &classify("abs please, advanced"));
        assert_eq!(plan.title, "Abs Workout");
        assert_eq!(plan.plan_type, WorkoutType::Exercise);
        // Advanced asks for 8 and the abs pool holds exactly 8.
        assert_eq!(plan.exercises.len(), 8);
    }

    #[test]
    fn compound_group_over_allocates_by_design() {
        let mut rng = StdRng::seed_from_u64(11);
        let plan = assemble(&mut rng, &classify("upper body, advanced"));
        assert_eq!(plan.title, "Upper Body Workout");
        // ceil(8 / 3) = 3 per sub-group; chest holds 3, back 5, shoulders 4,
        // so the draw lands at 9 rather than the nominal 8.
        assert_eq!(plan.exercises.len(), 9);
    }

    #[test]
    fn multi_group_title_joins_with_ampersand() {
        let mut rng = StdRng::seed_from_u64(2);
        let plan = assemble(&mut rng, &classify("chest and shoulders"));
        assert_eq!(plan.title, "Shoulders & Chest Workout");
    }

    #[test]
    fn full_body_fallback_for_unrecognized_input() {
        let mut rng = StdRng::seed_from_u64(2);
        let plan = assemble(&mut rng, &classify("stretch please"));
        assert_eq!(plan.title, FULL_BODY_TITLE);
        // Beginner: floor(4 / 4) = 1 per group across four groups.
        assert_eq!(plan.exercises.len(), 4);
        assert!(!plan.exercises.is_empty());
    }

    #[test]
    fn assembled_plans_are_never_empty() {
        let mut rng = StdRng::seed_from_u64(9);
        for input in [
            "hamstrings",
            "glutes advanced",
            "whatever",
            "upper body intermediate",
            "full body",
        ] {
            let plan = assemble(&mut rng, &classify(input));
            assert!(!plan.exercises.is_empty(), "empty plan for {input:?}");
        }
    }

    #[test]
    fn work_plan_is_timed_and_work_friendly() {
        let plan = assemble_work_plan(4);
        assert_eq!(plan.title, WORK_PLAN_TITLE);
        assert_eq!(plan.plan_type, WorkoutType::Work);
        assert_eq!(plan.exercises.len(), 4);
        for exercise in &plan.exercises {
            assert!(exercise.is_work_friendly);
            assert_eq!(exercise.duration_minutes, Some(5));
            assert_eq!(exercise.sets, None);
            assert_eq!(exercise.reps, None);
        }
    }

    #[test]
    fn duration_is_five_minutes_for_every_level() {
        // Fixed duration regardless of level; preserved from the shipped
        // policy even though it looks like an oversight.
        let mut rng = StdRng::seed_from_u64(4);
        for input in ["abs", "abs intermediate", "abs advanced"] {
            let plan = assemble(&mut rng, &classify(input));
            assert!(plan
                .exercises
                .iter()
                .all(|e| e.duration_minutes == Some(5)));
        }
    }
}
