//! Push-up detection from both elbow angles
//!
//! A rep is the arms going from locked out, down past the bottom
//! threshold on either side, and back up past the lockout threshold on
//! both sides. Lingering at the bottom never counts twice.

use super::config::DetectionConfig;
use super::result::{Detection, Progress, Tip};
use crate::pose::{percent_ramp, PoseFrame, LEFT_ARM, RIGHT_ARM};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Stage {
    #[default]
    Up,
    Down,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PushupState {
    pub stage: Stage,
    /// Last measured elbow angles (°), for angle labels
    pub left_angle: Option<f32>,
    pub right_angle: Option<f32>,
}

pub fn detect(
    frame: Option<&PoseFrame>,
    _now: f64,
    mut state: PushupState,
    config: &DetectionConfig,
) -> Detection<PushupState> {
    let idle = Progress::bilateral(0.0, 0.0);
    let Some(frame) = frame else {
        return Detection::idle(idle, state);
    };
    let (Some(left), Some(right)) = (LEFT_ARM.angle(frame), RIGHT_ARM.angle(frame)) else {
        return Detection::idle(idle, state);
    };
    let cfg = &config.pushup;

    let mut reps = 0;
    if left < cfg.down_angle || right < cfg.down_angle {
        state.stage = Stage::Down;
    }
    if left > cfg.up_angle && right > cfg.up_angle && state.stage == Stage::Down {
        state.stage = Stage::Up;
        reps = 1;
    }

    let percent_left = percent_ramp(left, cfg.down_angle, cfg.up_angle);
    let percent_right = percent_ramp(right, cfg.down_angle, cfg.up_angle);

    let mut tip = None;
    if percent_left < cfg.shallow_percent || percent_right < cfg.shallow_percent {
        tip = Some(Tip::LowerChest);
    }
    if percent_left > cfg.lockout_percent && percent_right > cfg.lockout_percent {
        tip = Some(Tip::ExtendArms);
    }

    state.left_angle = Some(left);
    state.right_angle = Some(right);

    Detection {
        reps,
        progress: Progress::bilateral(percent_left, percent_right),
        tip,
        held_seconds: None,
        state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::synthetic::PoseBuilder;
    use approx::assert_relative_eq;

    fn arms(left: f32, right: f32) -> PoseFrame {
        PoseBuilder::new().angle(LEFT_ARM, left).angle(RIGHT_ARM, right).build()
    }

    fn run(angles: &[(f32, f32)]) -> (u32, PushupState) {
        let config = DetectionConfig::default();
        angles.iter().fold((0, PushupState::default()), |(total, state), &(l, r)| {
            let result = detect(Some(&arms(l, r)), 0.0, state, &config);
            assert!(result.reps <= 1);
            (total + result.reps, result.state)
        })
    }

    #[test]
    fn test_single_rep_despite_lingering() {
        let mut sequence = vec![(175.0, 175.0)];
        sequence.extend(std::iter::repeat((80.0, 80.0)).take(20));
        sequence.extend(std::iter::repeat((175.0, 175.0)).take(20));
        let (reps, state) = run(&sequence);
        assert_eq!(reps, 1);
        assert_eq!(state.stage, Stage::Up);
    }

    #[test]
    fn test_one_arm_down_is_enough() {
        let (reps, _) = run(&[(175.0, 175.0), (85.0, 120.0), (175.0, 175.0)]);
        assert_eq!(reps, 1);
    }

    #[test]
    fn test_both_arms_must_lock_out() {
        let (reps, state) = run(&[(80.0, 80.0), (175.0, 160.0)]);
        assert_eq!(reps, 0);
        assert_eq!(state.stage, Stage::Down);
    }

    #[test]
    fn test_no_rep_without_bottom() {
        let (reps, _) = run(&[(175.0, 175.0), (120.0, 120.0), (175.0, 175.0)]);
        assert_eq!(reps, 0);
    }

    #[test]
    fn test_percent_per_side() {
        let config = DetectionConfig::default();
        let result = detect(Some(&arms(130.0, 170.0)), 0.0, PushupState::default(), &config);
        match result.progress {
            Progress::Bilateral { left, right } => {
                assert_relative_eq!(left, 50.0, epsilon = 0.1);
                assert_relative_eq!(right, 100.0, epsilon = 0.1);
            }
            other => panic!("unexpected progress {:?}", other),
        }
    }

    #[test]
    fn test_tips() {
        let config = DetectionConfig::default();
        let shallow = detect(Some(&arms(100.0, 170.0)), 0.0, PushupState::default(), &config);
        assert_eq!(shallow.tip, Some(Tip::LowerChest));

        let locked = detect(Some(&arms(179.0, 179.0)), 0.0, PushupState::default(), &config);
        assert_eq!(locked.tip, Some(Tip::ExtendArms));

        let mid = detect(Some(&arms(140.0, 140.0)), 0.0, PushupState::default(), &config);
        assert_eq!(mid.tip, None);
    }

    #[test]
    fn test_records_elbow_angles() {
        let config = DetectionConfig::default();
        let result = detect(Some(&arms(120.0, 150.0)), 0.0, PushupState::default(), &config);
        assert_relative_eq!(result.state.left_angle.unwrap(), 120.0, epsilon = 0.05);
        assert_relative_eq!(result.state.right_angle.unwrap(), 150.0, epsilon = 0.05);
    }

    #[test]
    fn test_absent_frame_passes_state_through() {
        let state = PushupState { stage: Stage::Down, left_angle: Some(85.0), right_angle: None };
        let result = detect(None, 0.0, state.clone(), &DetectionConfig::default());
        assert_eq!(result.reps, 0);
        assert_eq!(result.tip, None);
        assert_eq!(result.progress, Progress::bilateral(0.0, 0.0));
        assert_eq!(result.state, state);
    }

    #[test]
    fn test_degenerate_arm_skips_frame() {
        let frame = PoseBuilder::new().angle(LEFT_ARM, 175.0).collapsed(RIGHT_ARM).build();
        let state = PushupState { stage: Stage::Down, ..PushupState::default() };
        let result = detect(Some(&frame), 0.0, state.clone(), &DetectionConfig::default());
        assert_eq!(result.reps, 0);
        assert_eq!(result.state, state);
    }
}
