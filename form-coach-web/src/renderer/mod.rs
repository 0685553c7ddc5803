//! Renderer module - overlay model for progress bars and tips
//!
//! Re-exports only. All logic in submodules.

mod overlay;

pub use overlay::{build_overlay, status_line, Overlay, ProgressBar, JointLabel};
