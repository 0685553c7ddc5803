//! Detection module - per-exercise rep counting and form tips
//!
//! Re-exports only. All logic in submodules.

mod config;
mod result;
mod registry;
mod state;
mod pushup;
mod squat;
mod lunge;
mod plank;
mod twist;

pub use config::{
    DetectionConfig, ConfigError,
    PushupConfig, SquatConfig, LungeConfig, PlankConfig, TwistConfig,
};
pub use result::{Detection, Progress, Tip};
pub use registry::{ExerciseKind, resolve};
pub use state::{DetectorState, DetectionResult};
pub use pushup::{PushupState, Stage};
pub use squat::SquatState;
pub use lunge::LungeState;
pub use plank::PlankState;
pub use twist::TwistState;
