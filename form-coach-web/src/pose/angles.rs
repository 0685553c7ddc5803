//! Joint angle calculation using dot product
//!
//! Calculates the angle at a joint from the two segments that meet there,
//! e.g. shoulder→elbow and elbow→wrist for the elbow.

use nalgebra::Vector2;

/// Segments shorter than this (normalized units) make the angle undefined
const MIN_SEGMENT_LENGTH: f32 = 1e-4;

/// Calculate the angle at `joint` in degrees
///
/// Uses dot product formula: cos(θ) = (v1 · v2) / (|v1| × |v2|)
///
/// Returns a value in [0, 180]:
/// - 90° = bent at a right angle
/// - 180° = fully straight
///
/// Returns `None` when either segment has (near) zero length.
pub fn joint_angle(a: (f32, f32), joint: (f32, f32), c: (f32, f32)) -> Option<f32> {
    let v1 = Vector2::new(a.0 - joint.0, a.1 - joint.1);
    let v2 = Vector2::new(c.0 - joint.0, c.1 - joint.1);

    let mag1 = v1.norm();
    let mag2 = v2.norm();
    if mag1 < MIN_SEGMENT_LENGTH || mag2 < MIN_SEGMENT_LENGTH {
        return None;
    }

    let cos_angle = (v1.dot(&v2) / (mag1 * mag2)).clamp(-1.0, 1.0);
    let degrees = cos_angle.acos().to_degrees();

    degrees.is_finite().then_some(degrees)
}

/// Horizontal midpoint of two landmarks
pub fn midpoint_x(a: (f32, f32), b: (f32, f32)) -> f32 {
    (a.0 + b.0) / 2.0
}

/// Map `value` linearly onto 0-100, where `zero_at` gives 0 and `full_at`
/// gives 100. Either end may be the larger one.
pub fn percent_ramp(value: f32, zero_at: f32, full_at: f32) -> f32 {
    ((value - zero_at) / (full_at - zero_at) * 100.0).clamp(0.0, 100.0)
}
