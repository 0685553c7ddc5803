//! Workout session entry points
//!
//! Owns the single active session. JS loads a plan, then calls
//! `process_frame` from the MediaPipe `onResults` callback and draws the
//! returned overlay.

use std::cell::{Cell, RefCell};

use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::landmarks::frame_from_js;
use crate::detection::{resolve, DetectionConfig};
use crate::renderer::{build_overlay, Overlay};
use crate::session::{FrameReport, SessionEvent, WorkoutPlan, WorkoutSession};

thread_local! {
    static SESSION: RefCell<Option<WorkoutSession>> = RefCell::new(None);
    static CONFIG: RefCell<DetectionConfig> = RefCell::new(DetectionConfig::default());
    static DROPPED_FRAMES: Cell<u32> = Cell::new(0);
}

/// Serialized result of one frame
#[derive(Serialize)]
struct FrameOutput {
    report: FrameReport,
    overlay: Overlay,
}

fn to_json<T: Serialize>(value: &T) -> Option<String> {
    match serde_json::to_string(value) {
        Ok(json) => Some(json),
        Err(err) => {
            web_sys::console::warn_1(
                &format!("⚠️ Could not serialize output: {}", err).into(),
            );
            None
        }
    }
}

fn log_events(events: &[SessionEvent]) {
    for event in events {
        match event {
            SessionEvent::SetCompleted { set } => console_log!("✅ Set {} complete", set),
            SessionEvent::ExerciseCompleted { index } => {
                console_log!("✅ Exercise {} complete", index + 1)
            }
            SessionEvent::WorkoutCompleted => console_log!("🎉 Workout complete!"),
            SessionEvent::RepCompleted { .. } => {}
        }
    }
}

/// Apply thresholds to the live session and to future sessions.
/// Returns false, changing nothing, when the session is mid-frame.
fn install_config(config: DetectionConfig) -> bool {
    let applied = SESSION.with(|cell| match cell.try_borrow_mut() {
        Ok(mut slot) => {
            if let Some(session) = slot.as_mut() {
                session.set_config(config.clone());
            }
            true
        }
        Err(_) => false,
    });
    if applied {
        CONFIG.with(|c| *c.borrow_mut() = config);
    }
    applied
}

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Override detection thresholds with a (partial) JSON document
#[wasm_bindgen]
pub fn configure_detection(json: &str) -> Result<(), JsValue> {
    let config = DetectionConfig::from_json(json)?;
    if !install_config(config) {
        web_sys::console::warn_1(&"⚠️ Session busy, thresholds not applied".into());
        return Err(JsValue::from_str("session busy, try again"));
    }
    console_log!("⚙️ Detection thresholds updated");
    Ok(())
}

/// Thresholds in effect (the live session's, else the next session's)
#[wasm_bindgen]
pub fn get_detection_config() -> Option<String> {
    let live = SESSION.with(|cell| {
        let slot = cell.try_borrow().ok()?;
        slot.as_ref().map(|session| session.config().clone())
    });
    let config = live.unwrap_or_else(|| CONFIG.with(|c| c.borrow().clone()));
    to_json(&config)
}

/// Detector name for a plan exercise, `None` if it can only be done manually
#[wasm_bindgen]
pub fn resolve_exercise(name: &str) -> Option<String> {
    resolve(name).map(|state| state.kind().as_str().to_string())
}

/// Start a workout from the day's plan JSON. Returns the initial status.
#[wasm_bindgen]
pub fn load_workout(plan_json: &str) -> Result<String, JsValue> {
    let plan = WorkoutPlan::from_json(plan_json)?;
    for exercise in plan.untracked() {
        web_sys::console::warn_1(
            &format!("ℹ️ No tracking for '{}', use manual reps", exercise.name).into(),
        );
    }
    console_log!("🏋️ Workout loaded: {} exercises", plan.exercises.len());

    let config = CONFIG.with(|c| c.borrow().clone());
    let session = WorkoutSession::new(plan, config);
    let status = to_json(&session.status()).unwrap_or_default();

    SESSION.with(|cell| {
        cell.try_borrow_mut()
            .map(|mut slot| *slot = Some(session))
            .map_err(|_| JsValue::from_str("session busy, try again"))
    })?;
    DROPPED_FRAMES.with(|d| d.set(0));
    Ok(status)
}

/// Process one MediaPipe frame
///
/// - `data`: 99 (x, y, z) or 132 (x, y, z, visibility) floats, empty = no body
/// - `timestamp_ms`: monotonic time, e.g. `performance.now()`
///
/// Returns `{ report, overlay }` JSON, or `None` when no session is active
/// or the frame was dropped because another one is still being processed.
#[wasm_bindgen]
pub fn process_frame(data: &[f32], timestamp_ms: f64) -> Option<String> {
    let frame = frame_from_js(data);

    SESSION.with(|cell| {
        let Ok(mut slot) = cell.try_borrow_mut() else {
            DROPPED_FRAMES.with(|d| d.set(d.get().saturating_add(1)));
            return None;
        };
        let session = slot.as_mut()?;

        let report = session.process(frame.as_ref(), timestamp_ms / 1000.0);
        log_events(&report.events);
        let overlay = build_overlay(&report, frame.as_ref());
        to_json(&FrameOutput { report, overlay })
    })
}

/// Same as `process_frame`, stamped with the JS clock
#[wasm_bindgen]
pub fn process_frame_now(data: &[f32]) -> Option<String> {
    process_frame(data, js_sys::Date::now())
}

/// Count a rep by hand (exercises without a detector). Returns events JSON.
#[wasm_bindgen]
pub fn manual_rep() -> Option<String> {
    SESSION.with(|cell| {
        let mut slot = cell.try_borrow_mut().ok()?;
        let events = slot.as_mut()?.manual_rep();
        log_events(&events);
        to_json(&events)
    })
}

/// Restart the loaded workout from the first exercise
#[wasm_bindgen]
pub fn reset_workout() {
    SESSION.with(|cell| {
        if let Ok(mut slot) = cell.try_borrow_mut() {
            if let Some(session) = slot.as_mut() {
                session.reset();
            }
        }
    });
}

/// Stop tracking and discard all detector state
#[wasm_bindgen]
pub fn end_workout() {
    SESSION.with(|cell| {
        if let Ok(mut slot) = cell.try_borrow_mut() {
            *slot = None;
        }
    });
}

/// Current status JSON, `None` when no workout is loaded
#[wasm_bindgen]
pub fn get_session_status() -> Option<String> {
    SESSION.with(|cell| {
        let slot = cell.try_borrow().ok()?;
        to_json(&slot.as_ref()?.status())
    })
}

/// Frames dropped because they arrived mid-processing
#[wasm_bindgen]
pub fn get_dropped_frames() -> u32 {
    DROPPED_FRAMES.with(|d| d.get())
}
