//! Landmark intake from JavaScript
//!
//! MediaPipe results arrive as a flat Float32Array. An empty array means
//! no body was detected this frame.

use crate::pose::PoseFrame;

/// Convert the JS buffer into a frame, warning about (and dropping) bad data
pub fn frame_from_js(data: &[f32]) -> Option<PoseFrame> {
    if data.is_empty() {
        return None;
    }
    match PoseFrame::from_flat(data) {
        Ok(frame) => Some(frame),
        Err(err) => {
            web_sys::console::warn_1(&format!("⚠️ Ignoring landmarks: {}", err).into());
            None
        }
    }
}
