//! Workout session driver
//!
//! Walks the plan exercise → set → rep. Each frame goes to the active
//! exercise's detector; the returned state is carried to the next frame and
//! thrown away at every set or exercise boundary so hysteresis starts fresh.

use serde::Serialize;

use super::plan::{ExerciseDescriptor, Target, WorkoutPlan};
use crate::detection::{DetectionConfig, DetectorState, ExerciseKind, Progress};
use crate::pose::PoseFrame;

/// Progress milestones reached during one call
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SessionEvent {
    RepCompleted { rep: u32 },
    SetCompleted { set: u32 },
    ExerciseCompleted { index: usize },
    WorkoutCompleted,
}

/// Where the session currently stands
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SessionStatus {
    pub exercise_index: usize,
    pub exercise_count: usize,
    pub exercise_name: Option<String>,
    pub kind: Option<ExerciseKind>,
    /// False when the exercise has no detector (manual mode)
    pub tracking: bool,
    pub set_number: u32,
    pub total_sets: u32,
    pub rep_number: u32,
    pub target: Option<Target>,
    pub held_seconds: f64,
    pub finished: bool,
}

/// Everything the UI needs after one frame
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FrameReport {
    pub reps: u32,
    pub progress: Progress,
    pub tip: Option<&'static str>,
    pub held_seconds: Option<f64>,
    /// (left, right) elbow angles for on-screen labels
    pub elbow_angles: Option<(Option<f32>, Option<f32>)>,
    pub events: Vec<SessionEvent>,
    pub status: SessionStatus,
}

pub struct WorkoutSession {
    plan: WorkoutPlan,
    config: DetectionConfig,
    exercise_index: usize,
    set_number: u32,
    rep_number: u32,
    detector: Option<DetectorState>,
}

impl WorkoutSession {
    pub fn new(plan: WorkoutPlan, config: DetectionConfig) -> Self {
        let detector = Self::fresh_detector(plan.exercises.first());
        Self {
            plan,
            config,
            exercise_index: 0,
            set_number: 1,
            rep_number: 0,
            detector,
        }
    }

    fn fresh_detector(exercise: Option<&ExerciseDescriptor>) -> Option<DetectorState> {
        exercise.and_then(|e| e.kind).map(DetectorState::new)
    }

    pub fn current_exercise(&self) -> Option<&ExerciseDescriptor> {
        self.plan.exercises.get(self.exercise_index)
    }

    pub fn is_finished(&self) -> bool {
        self.exercise_index >= self.plan.exercises.len()
    }

    pub fn config(&self) -> &DetectionConfig {
        &self.config
    }

    /// Swap thresholds; running hysteresis state is kept
    pub fn set_config(&mut self, config: DetectionConfig) {
        self.config = config;
    }

    pub fn status(&self) -> SessionStatus {
        let exercise = self.current_exercise();
        SessionStatus {
            exercise_index: self.exercise_index,
            exercise_count: self.plan.exercises.len(),
            exercise_name: exercise.map(|e| e.name.clone()),
            kind: exercise.and_then(|e| e.kind),
            tracking: self.detector.is_some(),
            set_number: self.set_number,
            total_sets: exercise.map_or(0, |e| e.sets),
            rep_number: self.rep_number,
            target: exercise.map(|e| e.target),
            held_seconds: self.detector.as_ref().map_or(0.0, DetectorState::held_seconds),
            finished: self.is_finished(),
        }
    }

    /// Run one frame through the active detector and advance progress
    ///
    /// `now` is a monotonic timestamp in seconds. In manual mode or after
    /// the workout is complete the frame is ignored.
    pub fn process(&mut self, frame: Option<&PoseFrame>, now: f64) -> FrameReport {
        let Some(state) = self.detector.take() else {
            return self.idle_report();
        };

        let result = state.detect(frame, now, &self.config);
        let report_angles = result.state.elbow_angles();
        let held = result.state.held_seconds();
        self.detector = Some(result.state);

        let mut events = Vec::new();
        match self.current_exercise().map(|e| e.target) {
            Some(Target::Reps(_)) => {
                for _ in 0..result.reps {
                    if self.advance_rep(&mut events) {
                        // New set: leftover reps from this frame don't carry over
                        break;
                    }
                }
            }
            Some(Target::Seconds(seconds)) => {
                if held >= f64::from(seconds) {
                    self.complete_set(&mut events);
                }
            }
            None => {}
        }

        FrameReport {
            reps: result.reps,
            progress: result.progress,
            tip: result.tip.map(|t| t.text()),
            held_seconds: result.held_seconds,
            elbow_angles: report_angles,
            events,
            status: self.status(),
        }
    }

    /// Count a rep (or finish a timed set) by hand, for untracked exercises
    pub fn manual_rep(&mut self) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        match self.current_exercise().map(|e| e.target) {
            Some(Target::Reps(_)) => {
                self.advance_rep(&mut events);
            }
            Some(Target::Seconds(_)) => self.complete_set(&mut events),
            None => {}
        }
        events
    }

    /// Back to the first exercise, first set
    pub fn reset(&mut self) {
        self.exercise_index = 0;
        self.set_number = 1;
        self.rep_number = 0;
        self.detector = Self::fresh_detector(self.plan.exercises.first());
    }

    fn idle_report(&self) -> FrameReport {
        FrameReport {
            reps: 0,
            progress: Progress::None,
            tip: None,
            held_seconds: None,
            elbow_angles: None,
            events: Vec::new(),
            status: self.status(),
        }
    }

    /// Returns true when the rep finished the set
    fn advance_rep(&mut self, events: &mut Vec<SessionEvent>) -> bool {
        let Some(Target::Reps(target)) = self.current_exercise().map(|e| e.target) else {
            return false;
        };
        self.rep_number += 1;
        events.push(SessionEvent::RepCompleted { rep: self.rep_number });
        if self.rep_number >= target {
            self.complete_set(events);
            return true;
        }
        false
    }

    fn complete_set(&mut self, events: &mut Vec<SessionEvent>) {
        let Some(sets) = self.current_exercise().map(|e| e.sets) else {
            return;
        };
        events.push(SessionEvent::SetCompleted { set: self.set_number });
        self.rep_number = 0;
        if self.set_number >= sets {
            self.advance_exercise(events);
        } else {
            self.set_number += 1;
            self.detector = Self::fresh_detector(self.current_exercise());
        }
    }

    fn advance_exercise(&mut self, events: &mut Vec<SessionEvent>) {
        events.push(SessionEvent::ExerciseCompleted { index: self.exercise_index });
        self.exercise_index += 1;
        self.set_number = 1;
        self.rep_number = 0;
        self.detector = Self::fresh_detector(self.current_exercise());
        if self.is_finished() {
            events.push(SessionEvent::WorkoutCompleted);
        }
    }
}
