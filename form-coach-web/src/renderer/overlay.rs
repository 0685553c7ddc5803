//! Progress overlay model
//!
//! Turns a frame report into drawable pieces: vertical progress bars, the
//! set/rep status line, the hold timer and elbow angle labels. JS draws
//! them on the canvas over the video.

use serde::Serialize;

use crate::detection::Progress;
use crate::pose::{PoseFrame, LEFT_ELBOW, RIGHT_ELBOW};
use crate::session::{FrameReport, SessionStatus, Target};

// ============================================================================
// BAR LAYOUT (canvas pixels)
// ============================================================================

const BAR_Y: f32 = 50.0;
const BAR_WIDTH: f32 = 20.0;
const BAR_HEIGHT: f32 = 200.0;
const LEFT_BAR_X: f32 = 50.0;
const SINGLE_BAR_X: f32 = 75.0;
const RIGHT_BAR_X: f32 = 100.0;

/// One vertical progress bar, filled from the bottom
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProgressBar {
    pub label: &'static str,
    pub color: &'static str,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub percent: f32,
    /// Filled height in pixels
    pub fill: f32,
}

impl ProgressBar {
    fn new(label: &'static str, color: &'static str, x: f32, percent: f32) -> Self {
        let percent = percent.clamp(0.0, 100.0);
        Self {
            label,
            color,
            x,
            y: BAR_Y,
            width: BAR_WIDTH,
            height: BAR_HEIGHT,
            percent,
            fill: percent / 100.0 * BAR_HEIGHT,
        }
    }

    /// Top edge of the filled part
    pub fn fill_top(&self) -> f32 {
        self.y + self.height - self.fill
    }
}

/// Angle text anchored at a landmark (normalized coordinates)
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct JointLabel {
    pub landmark: usize,
    pub x: f32,
    pub y: f32,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Overlay {
    pub bars: Vec<ProgressBar>,
    pub status_line: String,
    pub timer: Option<String>,
    pub tip: Option<&'static str>,
    pub joint_labels: Vec<JointLabel>,
}

fn bars(progress: Progress) -> Vec<ProgressBar> {
    match progress {
        Progress::None => Vec::new(),
        Progress::Single { percent } => {
            vec![ProgressBar::new("form", "orange", SINGLE_BAR_X, percent)]
        }
        Progress::Bilateral { left, right } => vec![
            ProgressBar::new("left", "lime", LEFT_BAR_X, left),
            ProgressBar::new("right", "cyan", RIGHT_BAR_X, right),
        ],
    }
}

/// "Set: 2 / 3 | Rep: 4 / 8"
pub fn status_line(status: &SessionStatus) -> String {
    if status.finished {
        return "🎉 Workout complete!".to_string();
    }
    let progress = match status.target {
        Some(Target::Reps(reps)) => format!("Rep: {} / {}", status.rep_number, reps),
        Some(Target::Seconds(seconds)) => {
            format!("Hold: {:.0} / {}s", status.held_seconds.floor(), seconds)
        }
        None => String::new(),
    };
    let mut line = format!("Set: {} / {} | {}", status.set_number, status.total_sets, progress);
    if !status.tracking {
        line.push_str(" (manual)");
    }
    line
}

fn joint_labels(report: &FrameReport, frame: Option<&PoseFrame>) -> Vec<JointLabel> {
    let (Some((left, right)), Some(frame)) = (report.elbow_angles, frame) else {
        return Vec::new();
    };
    [(LEFT_ELBOW, left), (RIGHT_ELBOW, right)]
        .into_iter()
        .filter_map(|(landmark, angle)| {
            let angle = angle?;
            let (x, y) = frame.position(landmark);
            Some(JointLabel {
                landmark,
                x,
                y,
                text: format!("{}°", angle.round()),
            })
        })
        .collect()
}

pub fn build_overlay(report: &FrameReport, frame: Option<&PoseFrame>) -> Overlay {
    Overlay {
        bars: bars(report.progress),
        status_line: status_line(&report.status),
        timer: report.held_seconds.map(|s| format!("Time: {:.1}s", s)),
        tip: report.tip,
        joint_labels: joint_labels(report, frame),
    }
}
