//! Shared helpers for WASM API operations
//!
//! Console logging, serialization and access to the WASM-owned editor.

use super::errors::ApiError;
use crate::notes::NotesEditor;
use lazy_static::lazy_static;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::{Mutex, MutexGuard};
use wasm_bindgen::prelude::*;

// WASM-owned editor storage (canonical source of truth)
lazy_static! {
    static ref EDITOR: Mutex<NotesEditor> = Mutex::new(NotesEditor::new());
}

// ============================================================================
// Console Logging Functions
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn info(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn warn(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn error(s: &str);
}

// ============================================================================
// Logging Macros
// ============================================================================

/// Log a debug message with [WASM] prefix
#[macro_export]
macro_rules! wasm_log {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_debug(&format!($($arg)*))
    };
}

/// Log an info message with [WASM] prefix
#[macro_export]
macro_rules! wasm_info {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_info(&format!($($arg)*))
    };
}

/// Log a warning message with [WASM] ⚠️ prefix
#[macro_export]
macro_rules! wasm_warn {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_warn(&format!($($arg)*))
    };
}

/// Log an error message with [WASM] ❌ prefix
#[macro_export]
macro_rules! wasm_error {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_error(&format!($($arg)*))
    };
}

// ============================================================================
// Logging Helper Functions (called by macros)
// ============================================================================

pub fn log_debug(msg: &str) {
    log(&format!("[WASM] {}", msg));
}

pub fn log_info(msg: &str) {
    info(&format!("[WASM] {}", msg));
}

pub fn log_warn(msg: &str) {
    warn(&format!("[WASM] ⚠️ {}", msg));
}

pub fn log_error(msg: &str) {
    error(&format!("[WASM] ❌ {}", msg));
}

// ============================================================================
// Editor Access
// ============================================================================

/// Lock the WASM-owned editor for the duration of one API call
pub fn lock_editor() -> Result<MutexGuard<'static, NotesEditor>, ApiError> {
    EDITOR.lock().map_err(|_| ApiError::LockPoisoned)
}

// ============================================================================
// Serialization/Deserialization Helpers
// ============================================================================

/// Deserialize a value from JavaScript
pub fn deserialize<T: DeserializeOwned>(value: JsValue, context: &str) -> Result<T, ApiError> {
    serde_wasm_bindgen::from_value(value).map_err(|e| ApiError::Deserialize {
        context: context.to_string(),
        message: e.to_string(),
    })
}

/// Deserialize an optional array; `undefined` and `null` mean empty
pub fn deserialize_list<T: DeserializeOwned>(value: JsValue, context: &str) -> Result<Vec<T>, ApiError> {
    if value.is_undefined() || value.is_null() {
        return Ok(Vec::new());
    }
    deserialize(value, context)
}

/// Serialize a value to JavaScript
pub fn serialize<T: Serialize>(value: &T, context: &str) -> Result<JsValue, ApiError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| ApiError::Serialize {
        context: context.to_string(),
        message: e.to_string(),
    })
}
