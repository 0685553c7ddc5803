//! Joint chains and visibility gating
//!
//! A chain is three landmarks meeting at a joint (shoulder-elbow-wrist,
//! hip-knee-ankle, ...). When the preferred side of the body is poorly
//! visible, the mirrored chain on the other side is used instead.

use super::angles::joint_angle;
use super::landmarks::*;

/// Three landmark indices with the measured joint in the middle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Chain {
    pub start: usize,
    pub joint: usize,
    pub end: usize,
}

pub const LEFT_ARM: Chain = Chain::new(LEFT_SHOULDER, LEFT_ELBOW, LEFT_WRIST);
pub const RIGHT_ARM: Chain = Chain::new(RIGHT_SHOULDER, RIGHT_ELBOW, RIGHT_WRIST);
pub const LEFT_LEG: Chain = Chain::new(LEFT_HIP, LEFT_KNEE, LEFT_ANKLE);
pub const RIGHT_LEG: Chain = Chain::new(RIGHT_HIP, RIGHT_KNEE, RIGHT_ANKLE);
/// Shoulder-hip-ankle line used for plank alignment
pub const LEFT_BODY_LINE: Chain = Chain::new(LEFT_SHOULDER, LEFT_HIP, LEFT_ANKLE);
pub const RIGHT_BODY_LINE: Chain = Chain::new(RIGHT_SHOULDER, RIGHT_HIP, RIGHT_ANKLE);

impl Chain {
    pub const fn new(start: usize, joint: usize, end: usize) -> Self {
        Self { start, joint, end }
    }

    /// Angle at the middle landmark, `None` if the geometry is degenerate
    pub fn angle(&self, frame: &PoseFrame) -> Option<f32> {
        joint_angle(
            frame.position(self.start),
            frame.position(self.joint),
            frame.position(self.end),
        )
    }

    /// Weakest visibility along the chain
    pub fn visibility(&self, frame: &PoseFrame) -> f32 {
        [self.start, self.joint, self.end]
            .iter()
            .map(|&i| frame.landmark(i).visibility)
            .fold(f32::INFINITY, f32::min)
    }
}

/// Pick `primary` unless it is below `min_visibility` and `fallback` is not
pub fn preferred_chain(
    frame: &PoseFrame,
    primary: Chain,
    fallback: Chain,
    min_visibility: f32,
) -> Chain {
    if primary.visibility(frame) >= min_visibility {
        return primary;
    }
    if fallback.visibility(frame) >= min_visibility {
        fallback
    } else {
        primary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame_with_visibility(indices: &[usize], visibility: f32) -> PoseFrame {
        indices.iter().fold(PoseFrame::default(), |frame, &i| {
            frame.with_landmark(i, Landmark { visibility, ..Landmark::default() })
        })
    }

    #[test]
    fn test_visible_primary_wins() {
        let frame = PoseFrame::default();
        assert_eq!(preferred_chain(&frame, RIGHT_LEG, LEFT_LEG, 0.5), RIGHT_LEG);
    }

    #[test]
    fn test_falls_back_when_primary_hidden() {
        let frame = frame_with_visibility(&[RIGHT_KNEE], 0.1);
        assert_eq!(preferred_chain(&frame, RIGHT_LEG, LEFT_LEG, 0.5), LEFT_LEG);
    }

    #[test]
    fn test_keeps_primary_when_both_hidden() {
        let frame = frame_with_visibility(&[RIGHT_HIP, LEFT_ANKLE], 0.2);
        assert_eq!(preferred_chain(&frame, RIGHT_LEG, LEFT_LEG, 0.5), RIGHT_LEG);
    }

    #[test]
    fn test_chain_visibility_is_minimum() {
        let frame = frame_with_visibility(&[LEFT_ELBOW], 0.3);
        assert_eq!(LEFT_ARM.visibility(&frame), 0.3);
    }
}
