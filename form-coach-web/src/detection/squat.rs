//! Squat detection from one knee angle
//!
//! Standing tall arms the rep; dropping below the bottom threshold while
//! armed counts it. The first frame can never count on its own.

use super::config::DetectionConfig;
use super::result::{Detection, Progress, Tip};
use crate::pose::{percent_ramp, preferred_chain, PoseFrame, LEFT_LEG, RIGHT_LEG};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SquatState {
    /// Set once the user has stood up since the last counted rep
    pub standing: bool,
    pub knee_angle: Option<f32>,
}

pub fn detect(
    frame: Option<&PoseFrame>,
    _now: f64,
    mut state: SquatState,
    config: &DetectionConfig,
) -> Detection<SquatState> {
    let idle = Progress::single(0.0);
    let Some(frame) = frame else {
        return Detection::idle(idle, state);
    };
    let leg = preferred_chain(frame, RIGHT_LEG, LEFT_LEG, config.min_visibility);
    let Some(angle) = leg.angle(frame) else {
        return Detection::idle(idle, state);
    };
    let cfg = &config.squat;

    let mut reps = 0;
    if angle > cfg.standing_angle {
        state.standing = true;
    }
    if angle < cfg.bottom_angle && state.standing {
        reps = 1;
        state.standing = false;
    }

    let percent = percent_ramp(angle, cfg.percent_zero_angle, cfg.percent_full_angle);
    let tip = (percent < cfg.shallow_percent).then_some(Tip::GoLower);
    state.knee_angle = Some(angle);

    Detection {
        reps,
        progress: Progress::single(percent),
        tip,
        held_seconds: None,
        state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::synthetic::PoseBuilder;
    use crate::pose::{Landmark, RIGHT_KNEE};
    use approx::assert_relative_eq;

    fn knee(angle: f32) -> PoseFrame {
        PoseBuilder::new().angle(RIGHT_LEG, angle).angle(LEFT_LEG, 175.0).build()
    }

    fn count(angles: &[f32]) -> u32 {
        let config = DetectionConfig::default();
        angles
            .iter()
            .fold((0, SquatState::default()), |(total, state), &a| {
                let result = detect(Some(&knee(a)), 0.0, state, &config);
                (total + result.reps, result.state)
            })
            .0
    }

    #[test]
    fn test_full_squat_counts_once() {
        assert_eq!(count(&[170.0, 140.0, 90.0, 85.0, 90.0, 140.0, 170.0]), 1);
    }

    #[test]
    fn test_starting_at_bottom_needs_arming() {
        assert_eq!(count(&[90.0, 85.0, 95.0]), 0);
        assert_eq!(count(&[90.0, 85.0, 165.0, 120.0, 90.0]), 1);
    }

    #[test]
    fn test_two_squats() {
        assert_eq!(count(&[170.0, 90.0, 170.0, 90.0]), 2);
    }

    #[test]
    fn test_partial_squat_does_not_count() {
        assert_eq!(count(&[170.0, 110.0, 170.0, 105.0]), 0);
    }

    #[test]
    fn test_percent_and_tip() {
        let config = DetectionConfig::default();
        let deep = detect(Some(&knee(95.0)), 0.0, SquatState::default(), &config);
        assert_eq!(deep.progress, Progress::single(100.0));
        assert_eq!(deep.tip, None);

        let shallow = detect(Some(&knee(160.0)), 0.0, SquatState::default(), &config);
        match shallow.progress {
            Progress::Single { percent } => assert_relative_eq!(percent, 25.0, epsilon = 0.1),
            other => panic!("unexpected progress {:?}", other),
        }
        assert_eq!(shallow.tip, Some(Tip::GoLower));
    }

    #[test]
    fn test_uses_left_leg_when_right_hidden() {
        let frame = PoseBuilder::new()
            .angle(RIGHT_LEG, 175.0)
            .angle(LEFT_LEG, 90.0)
            .build();
        let hidden = *frame.landmark(RIGHT_KNEE);
        let frame = frame.with_landmark(RIGHT_KNEE, Landmark { visibility: 0.1, ..hidden });

        let armed = SquatState { standing: true, knee_angle: None };
        let result = detect(Some(&frame), 0.0, armed, &DetectionConfig::default());
        assert_eq!(result.reps, 1);
    }

    #[test]
    fn test_absent_frame() {
        let state = SquatState { standing: true, knee_angle: Some(150.0) };
        let result = detect(None, 0.0, state.clone(), &DetectionConfig::default());
        assert_eq!(result.reps, 0);
        assert_eq!(result.state, state);
    }
}
