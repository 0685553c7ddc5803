//! Russian twist detection from torso rotation
//!
//! Rotation is read as the horizontal offset between the shoulder midpoint
//! and the hip midpoint. No joint angle is involved, so there is no percent
//! signal for this exercise.

use super::config::DetectionConfig;
use super::result::{Detection, Progress, Tip};
use crate::pose::{midpoint_x, PoseFrame, LEFT_HIP, LEFT_SHOULDER, RIGHT_HIP, RIGHT_SHOULDER};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TwistState {
    pub twisting: bool,
    pub offset: Option<f32>,
}

pub fn detect(
    frame: Option<&PoseFrame>,
    _now: f64,
    mut state: TwistState,
    config: &DetectionConfig,
) -> Detection<TwistState> {
    let Some(frame) = frame else {
        return Detection::idle(Progress::None, state);
    };
    let cfg = &config.twist;

    let shoulders = midpoint_x(frame.position(LEFT_SHOULDER), frame.position(RIGHT_SHOULDER));
    let hips = midpoint_x(frame.position(LEFT_HIP), frame.position(RIGHT_HIP));
    let offset = shoulders - hips;

    let mut reps = 0;
    let mut tip = None;
    if !state.twisting && offset.abs() > cfg.engage_offset {
        state.twisting = true;
        tip = Some(Tip::GoodTwist);
    }
    if state.twisting && offset.abs() < cfg.release_offset {
        state.twisting = false;
        reps = 1;
        tip = Some(Tip::NiceRep);
    }

    state.offset = Some(offset);

    Detection {
        reps,
        progress: Progress::None,
        tip,
        held_seconds: None,
        state,
    }
}
