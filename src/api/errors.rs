//! Error types for the WASM API
//!
//! The note engine itself never fails; these cover the JS boundary only.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// A JS value did not have the expected shape
    #[error("{context}: {message}")]
    Deserialize { context: String, message: String },

    #[error("{context}: {message}")]
    Serialize { context: String, message: String },

    /// A previous call panicked while holding the editor
    #[error("Failed to lock editor: lock poisoned")]
    LockPoisoned,

    #[error("Invalid font size: {0} (must be greater than zero)")]
    InvalidFontSize(u16),
}

impl From<ApiError> for JsValue {
    fn from(err: ApiError) -> Self {
        let msg = err.to_string();
        crate::wasm_error!("{}", msg);
        JsValue::from_str(&msg)
    }
}
