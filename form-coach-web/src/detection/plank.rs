//! Plank hold timing from the shoulder-hip-ankle line
//!
//! Time accumulates only while the body line stays straight. Drifting out
//! of form pauses the clock (the running total is kept).

use super::config::DetectionConfig;
use super::result::{Detection, Progress, Tip};
use crate::pose::{
    percent_ramp, preferred_chain, PoseFrame, LEFT_BODY_LINE, RIGHT_BODY_LINE,
};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlankState {
    /// Timestamp (s) of the previous in-form frame, if the hold is running
    pub interval_start: Option<f64>,
    pub held_seconds: f64,
    pub body_angle: Option<f32>,
}

/// `now` is a monotonic timestamp in seconds supplied by the caller.
pub fn detect(
    frame: Option<&PoseFrame>,
    now: f64,
    mut state: PlankState,
    config: &DetectionConfig,
) -> Detection<PlankState> {
    let idle = Progress::single(0.0);
    let Some(frame) = frame else {
        return Detection::idle(idle, state);
    };
    let line = preferred_chain(frame, RIGHT_BODY_LINE, LEFT_BODY_LINE, config.min_visibility);
    let Some(angle) = line.angle(frame) else {
        return Detection::idle(idle, state);
    };
    let cfg = &config.plank;

    let mut tip = None;
    if angle > cfg.aligned_angle {
        let start = state.interval_start.unwrap_or(now);
        // max() also drops NaN deltas
        state.held_seconds += (now - start).max(0.0);
        state.interval_start = Some(now);
    } else {
        state.interval_start = None;
        if angle < cfg.sagging_angle {
            tip = Some(Tip::StraightenBack);
        }
    }

    state.body_angle = Some(angle);

    let percent = percent_ramp(angle, cfg.percent_zero_angle, cfg.percent_full_angle);

    Detection {
        reps: 0,
        progress: Progress::single(percent),
        tip,
        held_seconds: Some(state.held_seconds),
        state,
    }
}
