//! Per-frame detector output

use serde::Serialize;

/// Fixed coaching tips
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tip {
    LowerChest,
    ExtendArms,
    GoLower,
    LowerLeftKnee,
    LowerRightKnee,
    StraightenBack,
    GoodTwist,
    NiceRep,
}

impl Tip {
    pub fn text(&self) -> &'static str {
        match self {
            Tip::LowerChest => "⬇️ Lower your chest closer to the floor.",
            Tip::ExtendArms => "⬆️ Fully extend your arms at the top.",
            Tip::GoLower => "⬇️ Go lower in squat.",
            Tip::LowerLeftKnee => "⬇️ Lower left knee more.",
            Tip::LowerRightKnee => "⬇️ Lower right knee more.",
            Tip::StraightenBack => "⬇️ Keep your back straighter!",
            Tip::GoodTwist => "Good twist!",
            Tip::NiceRep => "Nice rep!",
        }
    }
}

/// Completion percentages for the progress bars (0-100)
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Progress {
    /// Exercise has no percent signal
    None,
    Single { percent: f32 },
    Bilateral { left: f32, right: f32 },
}

impl Progress {
    pub const fn single(percent: f32) -> Self {
        Progress::Single { percent }
    }

    pub const fn bilateral(left: f32, right: f32) -> Self {
        Progress::Bilateral { left, right }
    }
}

/// What one detector call produced
#[derive(Clone, Debug, PartialEq)]
pub struct Detection<S> {
    /// Repetitions completed by this frame alone (not a running total)
    pub reps: u32,
    pub progress: Progress,
    pub tip: Option<Tip>,
    /// Accumulated in-form hold time, for timed exercises
    pub held_seconds: Option<f64>,
    /// State to pass into the next call
    pub state: S,
}

impl<S> Detection<S> {
    /// No progress this frame; state passes through untouched
    pub fn idle(progress: Progress, state: S) -> Self {
        Self {
            reps: 0,
            progress,
            tip: None,
            held_seconds: None,
            state,
        }
    }

    pub fn map_state<T>(self, f: impl FnOnce(S) -> T) -> Detection<T> {
        Detection {
            reps: self.reps,
            progress: self.progress,
            tip: self.tip,
            held_seconds: self.held_seconds,
            state: f(self.state),
        }
    }
}
