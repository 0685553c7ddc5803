//! Form Coach Web - exercise rep counting and form feedback
//!
//! Consumes MediaPipe Pose landmarks one frame at a time, counts reps,
//! times holds and produces short coaching tips.
//!
//! Entry point for WASM module. Only contains:
//! - Module declarations
//! - wasm_bindgen entry points that delegate to submodules

use wasm_bindgen::prelude::*;

// ============================================================================
// CONSOLE LOGGING
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

macro_rules! console_log {
    ($($t:tt)*) => (crate::log(&format_args!($($t)*).to_string()))
}

pub mod pose;
pub mod detection;
pub mod session;
pub mod renderer;
mod bridge;

// Re-export wasm_bindgen functions for JS access
pub use bridge::{
    configure_detection, get_detection_config, resolve_exercise, load_workout,
    process_frame, process_frame_now,
    manual_rep, reset_workout, end_workout, get_session_status, get_dropped_frames,
};

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}
