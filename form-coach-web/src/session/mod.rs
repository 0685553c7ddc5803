//! Session module - workout plan and the exercise/set/rep driver
//!
//! Re-exports only. All logic in submodules.

mod plan;
mod tracker;

pub use plan::{ExerciseDescriptor, WorkoutPlan, PlanError, Target, parse_count};
pub use tracker::{WorkoutSession, SessionEvent, SessionStatus, FrameReport};
