//! Pose landmark frame
//!
//! One frame of MediaPipe Pose output: 33 landmarks in normalized image
//! coordinates, each with a visibility score. Frames are immutable once
//! built and are consumed by a single detector call.

use thiserror::Error;
use wasm_bindgen::JsValue;

// ============================================================================
// LANDMARK INDICES (MediaPipe Pose - 33 total)
// ============================================================================

pub const LANDMARK_COUNT: usize = 33;

pub const NOSE: usize = 0;
pub const LEFT_SHOULDER: usize = 11;
pub const RIGHT_SHOULDER: usize = 12;
pub const LEFT_ELBOW: usize = 13;
pub const RIGHT_ELBOW: usize = 14;
pub const LEFT_WRIST: usize = 15;
pub const RIGHT_WRIST: usize = 16;
pub const LEFT_HIP: usize = 23;
pub const RIGHT_HIP: usize = 24;
pub const LEFT_KNEE: usize = 25;
pub const RIGHT_KNEE: usize = 26;
pub const LEFT_ANKLE: usize = 27;
pub const RIGHT_ANKLE: usize = 28;

/// Values per landmark when JS sends x, y, z only
pub const XYZ_STRIDE: usize = 3;
/// Values per landmark when JS also sends visibility
pub const XYZV_STRIDE: usize = 4;

// ============================================================================
// ERRORS
// ============================================================================

/// Reasons a flat landmark buffer cannot be turned into a frame
#[derive(Debug, Error, PartialEq)]
pub enum FrameError {
    #[error("invalid landmark data length: {0} (expected 99 or 132)")]
    InvalidLength(usize),

    #[error("landmark {index} has a non-finite coordinate")]
    NonFinite { index: usize },
}

impl From<FrameError> for JsValue {
    fn from(err: FrameError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// A single landmark (normalized coordinates)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Landmark {
    pub x: f32,          // 0-1 normalized
    pub y: f32,          // 0-1 normalized
    pub z: f32,          // Relative depth
    pub visibility: f32, // 0-1 confidence
}

impl Landmark {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            ..Self::default()
        }
    }

    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }
}

impl Default for Landmark {
    fn default() -> Self {
        // Sources without a visibility channel are treated as fully visible
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            visibility: 1.0,
        }
    }
}

/// All 33 landmarks of one detected body
#[derive(Clone, Debug, PartialEq)]
pub struct PoseFrame {
    landmarks: [Landmark; LANDMARK_COUNT],
}

impl PoseFrame {
    pub fn new(landmarks: [Landmark; LANDMARK_COUNT]) -> Self {
        Self { landmarks }
    }

    /// Parse a flat `Float32Array` from JS.
    ///
    /// Accepts 99 values (x, y, z per landmark) or 132 values
    /// (x, y, z, visibility per landmark).
    pub fn from_flat(data: &[f32]) -> Result<Self, FrameError> {
        let stride = match data.len() {
            n if n == LANDMARK_COUNT * XYZ_STRIDE => XYZ_STRIDE,
            n if n == LANDMARK_COUNT * XYZV_STRIDE => XYZV_STRIDE,
            n => return Err(FrameError::InvalidLength(n)),
        };

        let mut landmarks = [Landmark::default(); LANDMARK_COUNT];
        let chunks = landmarks.iter_mut().zip(data.chunks_exact(stride));
        for (index, (slot, chunk)) in chunks.enumerate() {
            if chunk.iter().any(|v| !v.is_finite()) {
                return Err(FrameError::NonFinite { index });
            }
            *slot = Landmark {
                x: chunk[0],
                y: chunk[1],
                z: chunk[2],
                visibility: if stride == XYZV_STRIDE { chunk[3] } else { 1.0 },
            };
        }

        Ok(Self { landmarks })
    }

    pub fn landmark(&self, index: usize) -> &Landmark {
        &self.landmarks[index]
    }

    pub fn position(&self, index: usize) -> (f32, f32) {
        self.landmarks[index].position()
    }

    pub fn landmarks(&self) -> &[Landmark; LANDMARK_COUNT] {
        &self.landmarks
    }

    /// Replace one landmark, returning the updated frame
    pub fn with_landmark(mut self, index: usize, landmark: Landmark) -> Self {
        self.landmarks[index] = landmark;
        self
    }
}

impl Default for PoseFrame {
    fn default() -> Self {
        Self::new([Landmark::default(); LANDMARK_COUNT])
    }
}
