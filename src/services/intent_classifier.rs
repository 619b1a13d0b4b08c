//! Free-text classification into requested muscle groups and a fitness level.

use serde::{Deserialize, Serialize};

use crate::models::FitnessLevel;

/// Muscle groups a user can ask for by name. Compound regions fan out to
/// catalog sub-groups at selection time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RequestedGroup {
    Abs,
    LowerBody,
    UpperBody,
    Back,
    Shoulders,
    Chest,
    Glutes,
    Hamstrings,
}

impl RequestedGroup {
    /// Display name used when deriving plan titles.
    pub fn display_name(self) -> &'static str {
        match self {
            RequestedGroup::Abs => "Abs",
            RequestedGroup::LowerBody => "Lower Body",
            RequestedGroup::UpperBody => "Upper Body",
            RequestedGroup::Back => "Back",
            RequestedGroup::Shoulders => "Shoulders",
            RequestedGroup::Chest => "Chest",
            RequestedGroup::Glutes => "Glutes",
            RequestedGroup::Hamstrings => "Hamstrings",
        }
    }
}

/// Keyword table, checked in declaration order. The order also fixes how
/// groups appear in a derived plan title.
const GROUP_KEYWORDS: &[(RequestedGroup, &[&str])] = &[
    (RequestedGroup::Abs, &["abs", "core", "stomach"]),
    (RequestedGroup::LowerBody, &["lower", "leg", "thigh"]),
    (RequestedGroup::UpperBody, &["upper", "arm"]),
    (RequestedGroup::Back, &["back", "lats"]),
    (RequestedGroup::Shoulders, &["shoulder", "delt"]),
    (RequestedGroup::Chest, &["chest", "pec"]),
    (RequestedGroup::Glutes, &["glute", "butt", "booty"]),
    (RequestedGroup::Hamstrings, &["hamstring", "ham"]),
];

/// Classified request: which groups were asked for, and at what level.
/// An empty `groups` set means the caller composes a full-body plan; there
/// is no separate full-body marker, since explicit phrasings like "full
/// body" match no group keyword and land here anyway.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutIntent {
    pub groups: Vec<RequestedGroup>,
    pub level: FitnessLevel,
}

impl WorkoutIntent {
    pub fn is_full_body(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Pure, case-insensitive substring classification. Multiple groups may
/// match at once; the level resolves advanced > intermediate > beginner,
/// first match wins.
pub fn classify(input: &str) -> WorkoutIntent {
    let lowered = input.to_lowercase();

    let groups = GROUP_KEYWORDS
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|k| lowered.contains(k)))
        .map(|(group, _)| *group)
        .collect();

    let level = if lowered.contains("advanced") {
        FitnessLevel::Advanced
    } else if lowered.contains("intermediate") {
        FitnessLevel::Intermediate
    } else {
        FitnessLevel::Beginner
    };

    WorkoutIntent { groups, level }
}
