//! Exercise registry
//!
//! Maps the free-text exercise names found in workout plans onto the fixed
//! set of exercises that have a detector. Names are normalized (lowercase,
//! letters and digits only) before lookup, so "Push-ups", "pushups" and
//! "PushUp" all resolve to the same detector.

use serde::Serialize;

use super::state::DetectorState;

/// Exercises with a detector
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseKind {
    Pushup,
    Squat,
    Lunge,
    Plank,
    RussianTwist,
}

/// Normalized name → kind
const EXERCISE_TABLE: [(&str, ExerciseKind); 14] = [
    ("pushup", ExerciseKind::Pushup),
    ("pushups", ExerciseKind::Pushup),
    ("pressup", ExerciseKind::Pushup),
    ("pressups", ExerciseKind::Pushup),
    ("squat", ExerciseKind::Squat),
    ("squats", ExerciseKind::Squat),
    ("bodyweightsquat", ExerciseKind::Squat),
    ("bodyweightsquats", ExerciseKind::Squat),
    ("lunge", ExerciseKind::Lunge),
    ("lunges", ExerciseKind::Lunge),
    ("plank", ExerciseKind::Plank),
    ("planks", ExerciseKind::Plank),
    ("russiantwist", ExerciseKind::RussianTwist),
    ("russiantwists", ExerciseKind::RussianTwist),
];

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl ExerciseKind {
    pub const ALL: [ExerciseKind; 5] = [
        ExerciseKind::Pushup,
        ExerciseKind::Squat,
        ExerciseKind::Lunge,
        ExerciseKind::Plank,
        ExerciseKind::RussianTwist,
    ];

    /// Look up a plan name, `None` if no detector exists for it
    pub fn from_name(name: &str) -> Option<Self> {
        let key = normalize(name);
        EXERCISE_TABLE
            .iter()
            .find(|(entry, _)| *entry == key)
            .map(|(_, kind)| *kind)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExerciseKind::Pushup => "pushup",
            ExerciseKind::Squat => "squat",
            ExerciseKind::Lunge => "lunge",
            ExerciseKind::Plank => "plank",
            ExerciseKind::RussianTwist => "russian_twist",
        }
    }

    /// Timed exercises complete a set by hold time instead of reps
    pub fn is_timed(&self) -> bool {
        matches!(self, ExerciseKind::Plank)
    }
}

/// Resolve a name straight to a fresh detector
pub fn resolve(name: &str) -> Option<DetectorState> {
    ExerciseKind::from_name(name).map(DetectorState::new)
}
