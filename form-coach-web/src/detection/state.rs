//! Detector state, one variant per exercise
//!
//! The variant doubles as the dispatch key: a state can only ever be fed
//! back into the detector that produced it.

use super::config::DetectionConfig;
use super::lunge::{self, LungeState};
use super::plank::{self, PlankState};
use super::pushup::{self, PushupState};
use super::registry::ExerciseKind;
use super::result::Detection;
use super::squat::{self, SquatState};
use super::twist::{self, TwistState};
use crate::pose::PoseFrame;

#[derive(Clone, Debug, PartialEq)]
pub enum DetectorState {
    Pushup(PushupState),
    Squat(SquatState),
    Lunge(LungeState),
    Plank(PlankState),
    RussianTwist(TwistState),
}

/// One frame of output from whichever detector is active
pub type DetectionResult = Detection<DetectorState>;

impl DetectorState {
    /// Fresh state for `kind`
    pub fn new(kind: ExerciseKind) -> Self {
        match kind {
            ExerciseKind::Pushup => DetectorState::Pushup(PushupState::default()),
            ExerciseKind::Squat => DetectorState::Squat(SquatState::default()),
            ExerciseKind::Lunge => DetectorState::Lunge(LungeState::default()),
            ExerciseKind::Plank => DetectorState::Plank(PlankState::default()),
            ExerciseKind::RussianTwist => DetectorState::RussianTwist(TwistState::default()),
        }
    }

    pub fn kind(&self) -> ExerciseKind {
        match self {
            DetectorState::Pushup(_) => ExerciseKind::Pushup,
            DetectorState::Squat(_) => ExerciseKind::Squat,
            DetectorState::Lunge(_) => ExerciseKind::Lunge,
            DetectorState::Plank(_) => ExerciseKind::Plank,
            DetectorState::RussianTwist(_) => ExerciseKind::RussianTwist,
        }
    }

    /// Run this state's detector on one frame
    ///
    /// `now` is a monotonic timestamp in seconds; only the plank reads it.
    pub fn detect(
        self,
        frame: Option<&PoseFrame>,
        now: f64,
        config: &DetectionConfig,
    ) -> DetectionResult {
        use DetectorState::*;
        match self {
            Pushup(s) => pushup::detect(frame, now, s, config).map_state(Pushup),
            Squat(s) => squat::detect(frame, now, s, config).map_state(Squat),
            Lunge(s) => lunge::detect(frame, now, s, config).map_state(Lunge),
            Plank(s) => plank::detect(frame, now, s, config).map_state(Plank),
            RussianTwist(s) => twist::detect(frame, now, s, config).map_state(RussianTwist),
        }
    }

    /// Accumulated hold time; zero for rep-based exercises
    pub fn held_seconds(&self) -> f64 {
        match self {
            DetectorState::Plank(s) => s.held_seconds,
            _ => 0.0,
        }
    }

    /// Last measured (left, right) elbow angles, push-up only
    pub fn elbow_angles(&self) -> Option<(Option<f32>, Option<f32>)> {
        match self {
            DetectorState::Pushup(s) => Some((s.left_angle, s.right_angle)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::result::Progress;
    use crate::pose::synthetic::PoseBuilder;
    use crate::pose::{LEFT_ARM, RIGHT_ARM};

    #[test]
    fn test_new_matches_kind() {
        for kind in ExerciseKind::ALL {
            assert_eq!(DetectorState::new(kind).kind(), kind);
        }
    }

    #[test]
    fn test_dispatch_keeps_variant() {
        let config = DetectionConfig::default();
        let frame = PoseBuilder::new().angle(LEFT_ARM, 80.0).angle(RIGHT_ARM, 80.0).build();
        for kind in ExerciseKind::ALL {
            let result = DetectorState::new(kind).detect(Some(&frame), 1.0, &config);
            assert_eq!(result.state.kind(), kind);
        }
    }

    #[test]
    fn test_absent_frame_for_every_kind() {
        let config = DetectionConfig::default();
        for kind in ExerciseKind::ALL {
            let state = DetectorState::new(kind);
            let result = state.clone().detect(None, 1.0, &config);
            assert_eq!(result.reps, 0);
            assert_eq!(result.tip, None);
            assert_eq!(result.state, state);
            match result.progress {
                Progress::None => {}
                Progress::Single { percent } => assert_eq!(percent, 0.0),
                Progress::Bilateral { left, right } => assert_eq!((left, right), (0.0, 0.0)),
            }
        }
    }

    #[test]
    fn test_pushup_angles_exposed() {
        let config = DetectionConfig::default();
        let frame = PoseBuilder::new().angle(LEFT_ARM, 100.0).angle(RIGHT_ARM, 120.0).build();
        let result = DetectorState::new(ExerciseKind::Pushup).detect(Some(&frame), 0.0, &config);
        let (left, right) = result.state.elbow_angles().unwrap();
        assert!(left.is_some() && right.is_some());
        assert!(DetectorState::new(ExerciseKind::Squat).elbow_angles().is_none());
    }
}
