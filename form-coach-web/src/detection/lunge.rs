//! Lunge detection, each leg counted independently
//!
//! The first frames after the exercise starts are a warm-up while the user
//! gets into position; nothing counts until the warm-up has passed.

use super::config::DetectionConfig;
use super::result::{Detection, Progress, Tip};
use crate::pose::{percent_ramp, PoseFrame, LEFT_LEG, RIGHT_LEG};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LungeState {
    /// Frames with a measurable body seen so far
    pub frames_seen: u32,
    pub left_bent: bool,
    pub right_bent: bool,
    /// Running per-leg totals for display
    pub left_reps: u32,
    pub right_reps: u32,
}

/// Returns true when the leg completes a lunge this frame
fn step_leg(angle: f32, bent: &mut bool, bent_angle: f32, straight_angle: f32) -> bool {
    if angle < bent_angle {
        *bent = true;
    }
    if angle > straight_angle && *bent {
        *bent = false;
        return true;
    }
    false
}

pub fn detect(
    frame: Option<&PoseFrame>,
    _now: f64,
    mut state: LungeState,
    config: &DetectionConfig,
) -> Detection<LungeState> {
    let idle = Progress::bilateral(0.0, 0.0);
    let Some(frame) = frame else {
        return Detection::idle(idle, state);
    };
    let (Some(left), Some(right)) = (LEFT_LEG.angle(frame), RIGHT_LEG.angle(frame)) else {
        return Detection::idle(idle, state);
    };
    let cfg = &config.lunge;

    state.frames_seen = state.frames_seen.saturating_add(1);

    let mut reps = 0;
    if state.frames_seen > cfg.warmup_frames {
        if step_leg(left, &mut state.left_bent, cfg.bent_angle, cfg.straight_angle) {
            state.left_reps += 1;
            reps += 1;
        }
        if step_leg(right, &mut state.right_bent, cfg.bent_angle, cfg.straight_angle) {
            state.right_reps += 1;
            reps += 1;
        }
    }

    let percent_left = percent_ramp(left, cfg.percent_zero_angle, cfg.percent_full_angle);
    let percent_right = percent_ramp(right, cfg.percent_zero_angle, cfg.percent_full_angle);

    let mut tip = None;
    if percent_left < cfg.shallow_percent {
        tip = Some(Tip::LowerLeftKnee);
    }
    if percent_right < cfg.shallow_percent {
        tip = Some(Tip::LowerRightKnee);
    }

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

    fn legs(left: f32, right: f32) -> PoseFrame {
        PoseBuilder::new().angle(LEFT_LEG, left).angle(RIGHT_LEG, right).build()
    }

    fn feed(state: LungeState, frames: &[(f32, f32)]) -> (u32, LungeState) {
        let config = DetectionConfig::default();
        frames.iter().fold((0, state), |(total, state), &(l, r)| {
            let result = detect(Some(&legs(l, r)), 0.0, state, &config);
            (total + result.reps, result.state)
        })
    }

    #[test]
    fn test_warmup_frames_never_count() {
        // 30 frames alternating deep and straight on both legs
        let frames: Vec<_> = (0..30)
            .map(|i| if i % 2 == 0 { (90.0, 90.0) } else { (170.0, 170.0) })
            .collect();
        let (reps, state) = feed(LungeState::default(), &frames);
        assert_eq!(reps, 0);
        assert_eq!(state.frames_seen, 30);
        assert!(!state.left_bent && !state.right_bent);
    }

    #[test]
    fn test_counts_after_warmup() {
        let warmup = vec![(170.0, 170.0); 30];
        let (_, state) = feed(LungeState::default(), &warmup);

        // Frame 31 arms the left leg, frame 32 releases it
        let (reps, state) = feed(state, &[(90.0, 170.0), (160.0, 170.0)]);
        assert_eq!(reps, 1);
        assert_eq!((state.left_reps, state.right_reps), (1, 0));
    }

    #[test]
    fn test_legs_are_independent() {
        let state = LungeState { frames_seen: 30, ..LungeState::default() };
        let (reps, state) = feed(
            state,
            &[(90.0, 170.0), (160.0, 95.0), (170.0, 160.0), (90.0, 90.0), (160.0, 160.0)],
        );
        assert_eq!(reps, 4);
        assert_eq!((state.left_reps, state.right_reps), (2, 2));
    }

    #[test]
    fn test_both_legs_in_one_frame() {
        let state = LungeState {
            frames_seen: 40,
            left_bent: true,
            right_bent: true,
            ..LungeState::default()
        };
        let result = detect(Some(&legs(160.0, 160.0)), 0.0, state, &DetectionConfig::default());
        assert_eq!(result.reps, 2);
    }

    #[test]
    fn test_last_tip_wins() {
        let config = DetectionConfig::default();
        let both_shallow = detect(Some(&legs(170.0, 170.0)), 0.0, LungeState::default(), &config);
        assert_eq!(both_shallow.tip, Some(Tip::LowerRightKnee));

        let left_shallow = detect(Some(&legs(170.0, 110.0)), 0.0, LungeState::default(), &config);
        assert_eq!(left_shallow.tip, Some(Tip::LowerLeftKnee));
    }

    #[test]
    fn test_skipped_frames_do_not_advance_warmup() {
        let config = DetectionConfig::default();
        let result = detect(None, 0.0, LungeState::default(), &config);
        assert_eq!(result.state.frames_seen, 0);

        let frame = PoseBuilder::new().angle(LEFT_LEG, 90.0).collapsed(RIGHT_LEG).build();
        let result = detect(Some(&frame), 0.0, LungeState::default(), &config);
        assert_eq!(result.state, LungeState::default());
    }
}
