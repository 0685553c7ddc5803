//! Workout plan parsing
//!
//! Plans arrive as JSON produced by the plan generator. Counts are loosely
//! typed there ("8-10", 3, "30 seconds"), so every count is reduced to the
//! first integer it contains, defaulting to 1.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::detection::ExerciseKind;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("plan is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("plan has no exercises (rest day?)")]
    Empty,
}

impl From<PlanError> for JsValue {
    fn from(err: PlanError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// What finishes one set
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "unit", content = "value", rename_all = "snake_case")]
pub enum Target {
    Reps(u32),
    Seconds(u32),
}

/// One prescribed exercise, resolved against the registry
#[derive(Clone, Debug, PartialEq)]
pub struct ExerciseDescriptor {
    pub name: String,
    /// `None` when no detector exists; the exercise is then tracked manually
    pub kind: Option<ExerciseKind>,
    pub sets: u32,
    pub target: Target,
}

#[derive(Clone, Debug, PartialEq)]
pub struct WorkoutPlan {
    pub exercises: Vec<ExerciseDescriptor>,
}

// ============================================================================
// RAW JSON SHAPES
// ============================================================================

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCount {
    Number(f64),
    Text(String),
}

#[derive(Deserialize)]
struct RawExercise {
    name: Option<String>,
    exercise: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
    sets: Option<RawCount>,
    reps: Option<RawCount>,
    duration: Option<RawCount>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPlan {
    Day { exercises: Vec<RawExercise> },
    List(Vec<RawExercise>),
}

// ============================================================================
// PARSING
// ============================================================================

/// First integer in `text`, or 1 when there is none
///
/// Zero is raised to 1 since a set of zero reps could never be completed.
/// Values past `u32::MAX` saturate.
pub fn parse_count(text: &str) -> u32 {
    text.chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .filter_map(|c| c.to_digit(10))
        .map(u64::from)
        .reduce(|acc, d| acc.saturating_mul(10).saturating_add(d))
        .map_or(1, |n| n.clamp(1, u64::from(u32::MAX)) as u32)
}

fn count(raw: Option<&RawCount>) -> u32 {
    match raw {
        Some(RawCount::Number(n)) if n.is_finite() && *n >= 1.0 => n.min(u32::MAX as f64) as u32,
        Some(RawCount::Text(text)) => parse_count(text),
        _ => 1,
    }
}

impl ExerciseDescriptor {
    fn from_raw(raw: RawExercise) -> Self {
        let name = raw
            .exercise
            .or(raw.name)
            .unwrap_or_else(|| "Exercise".to_string());

        // The type tag wins; fall back to the display name
        let kind = raw
            .kind
            .as_deref()
            .and_then(ExerciseKind::from_name)
            .or_else(|| ExerciseKind::from_name(&name));

        // A detector decides how sets finish. Only untracked exercises fall
        // back to the shape of the plan entry.
        let timed = match kind {
            Some(kind) => kind.is_timed(),
            None => raw.reps.is_none() && raw.duration.is_some(),
        };
        let target = if timed {
            Target::Seconds(count(raw.duration.as_ref().or(raw.reps.as_ref())))
        } else {
            Target::Reps(count(raw.reps.as_ref().or(raw.duration.as_ref())))
        };

        Self {
            name,
            kind,
            sets: count(raw.sets.as_ref()),
            target,
        }
    }
}

impl WorkoutPlan {
    /// Parse a day's plan: either `{ "exercises": [...] }` or a bare array
    pub fn from_json(json: &str) -> Result<Self, PlanError> {
        let raw: RawPlan = serde_json::from_str(json)?;
        let exercises = match raw {
            RawPlan::Day { exercises } | RawPlan::List(exercises) => exercises,
        };
        if exercises.is_empty() {
            return Err(PlanError::Empty);
        }
        Ok(Self {
            exercises: exercises.into_iter().map(ExerciseDescriptor::from_raw).collect(),
        })
    }

    /// Exercises that will run without a detector
    pub fn untracked(&self) -> impl Iterator<Item = &ExerciseDescriptor> {
        self.exercises.iter().filter(|e| e.kind.is_none())
    }
}
