//! Synthetic pose frames for detector tests

use super::chains::Chain;
use super::landmarks::*;

const SEGMENT: f32 = 0.2;

/// Builds frames with chosen joint angles
pub struct PoseBuilder {
    frame: PoseFrame,
}

impl PoseBuilder {
    pub fn new() -> Self {
        Self {
            frame: PoseFrame::default(),
        }
    }

    /// Place `chain` so the angle at its joint is `degrees`
    pub fn angle(mut self, chain: Chain, degrees: f32) -> Self {
        let joint = (0.5, 0.5);
        let radians = degrees.to_radians();
        self.frame = self
            .frame
            .with_landmark(chain.joint, Landmark::new(joint.0, joint.1))
            .with_landmark(chain.start, Landmark::new(joint.0, joint.1 - SEGMENT))
            .with_landmark(
                chain.end,
                Landmark::new(joint.0 + SEGMENT * radians.sin(), joint.1 - SEGMENT * radians.cos()),
            );
        self
    }

    /// Put every landmark of `chain` on the same point
    pub fn collapsed(mut self, chain: Chain) -> Self {
        for index in [chain.start, chain.joint, chain.end] {
            self.frame = self.frame.with_landmark(index, Landmark::new(0.5, 0.5));
        }
        self
    }

    /// Shift the shoulder midpoint horizontally by `offset` from the hip midpoint
    pub fn torso_offset(mut self, offset: f32) -> Self {
        self.frame = self
            .frame
            .with_landmark(LEFT_SHOULDER, Landmark::new(0.4 + offset, 0.3))
            .with_landmark(RIGHT_SHOULDER, Landmark::new(0.6 + offset, 0.3))
            .with_landmark(LEFT_HIP, Landmark::new(0.42, 0.6))
            .with_landmark(RIGHT_HIP, Landmark::new(0.58, 0.6));
        self
    }

    pub fn build(self) -> PoseFrame {
        self.frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::chains::{LEFT_ARM, RIGHT_LEG};
    use approx::assert_relative_eq;

    #[test]
    fn test_builder_places_requested_angle() {
        for degrees in [0.5, 45.0, 90.0, 140.0, 179.5] {
            let frame = PoseBuilder::new().angle(RIGHT_LEG, degrees).build();
            assert_relative_eq!(RIGHT_LEG.angle(&frame).unwrap(), degrees, epsilon = 0.05);
        }
    }

    #[test]
    fn test_collapsed_chain_has_no_angle() {
        let frame = PoseBuilder::new().collapsed(LEFT_ARM).build();
        assert_eq!(LEFT_ARM.angle(&frame), None);
    }
}
