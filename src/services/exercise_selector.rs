//! Bounded, non-repeating exercise draws from the catalog.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::data::catalog::CatalogGroup;
use crate::models::{ExerciseTemplate, FitnessLevel, PlanExercise};
use crate::services::intent_classifier::RequestedGroup;

/// Catalog pools a requested group draws from. Compound regions alias to
/// their sub-groups; everything else maps one-to-one.
pub fn resolve_groups(group: RequestedGroup) -> &'static [CatalogGroup] {
    match group {
        RequestedGroup::UpperBody => &[
            CatalogGroup::Chest,
            CatalogGroup::Back,
            CatalogGroup::Shoulders,
        ],
        RequestedGroup::LowerBody => &[
            CatalogGroup::LowerBody,
            CatalogGroup::Glutes,
            CatalogGroup::Hamstrings,
        ],
        RequestedGroup::Abs => &[CatalogGroup::Abs],
        RequestedGroup::Back => &[CatalogGroup::Back],
        RequestedGroup::Shoulders => &[CatalogGroup::Shoulders],
        RequestedGroup::Chest => &[CatalogGroup::Chest],
        RequestedGroup::Glutes => &[CatalogGroup::Glutes],
        RequestedGroup::Hamstrings => &[CatalogGroup::Hamstrings],
    }
}

/// Draw up to `count` exercises from one catalog group: filter by the
/// level's difficulty ceiling, shuffle, take from the front. Selection is
/// without replacement, so a single draw never repeats a template. An empty
/// eligible pool yields an empty draw; the caller aggregates across
/// sub-groups and decides whether that is fatal.
pub fn select_exercises<R: Rng>(
    rng: &mut R,
    group: CatalogGroup,
    count: usize,
    level: FitnessLevel,
) -> Vec<PlanExercise> {
    let mut eligible: Vec<&ExerciseTemplate> = group
        .templates()
        .iter()
        .filter(|t| level.allows(t.difficulty))
        .collect();

    eligible.shuffle(rng);

    eligible
        .into_iter()
        .take(count)
        .map(|t| PlanExercise::from_template(t, level))
        .collect()
}
