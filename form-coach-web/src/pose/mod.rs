//! Pose module - landmark frames and joint geometry
//!
//! Re-exports only. All logic in submodules.

mod landmarks;
mod angles;
mod chains;
#[cfg(test)]
pub(crate) mod synthetic;

pub use landmarks::{
    Landmark, PoseFrame, FrameError,
    LANDMARK_COUNT, NOSE,
    LEFT_SHOULDER, RIGHT_SHOULDER, LEFT_ELBOW, RIGHT_ELBOW, LEFT_WRIST, RIGHT_WRIST,
    LEFT_HIP, RIGHT_HIP, LEFT_KNEE, RIGHT_KNEE, LEFT_ANKLE, RIGHT_ANKLE,
};
pub use angles::{joint_angle, midpoint_x, percent_ramp};
pub use chains::{
    Chain, preferred_chain,
    LEFT_ARM, RIGHT_ARM, LEFT_LEG, RIGHT_LEG, LEFT_BODY_LINE, RIGHT_BODY_LINE,
};
