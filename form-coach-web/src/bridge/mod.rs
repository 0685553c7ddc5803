//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod landmarks;
mod session;

pub use session::{
    configure_detection,
    get_detection_config,
    resolve_exercise,
    load_workout,
    process_frame,
    process_frame_now,
    manual_rep,
    reset_workout,
    end_workout,
    get_session_status,
    get_dropped_frames,
};
