//! Notes Editor WASM API
//!
//! This module provides the JavaScript-facing API for the notes editor.
//!
//! # Module Structure
//!
//! - `helpers`: Console logging, serialization and the WASM-owned editor
//! - `errors`: Errors raised at the JS boundary
//! - `types`: Result types returned to JavaScript
//! - `core`: The exported functions

pub mod helpers;
pub mod errors;
pub mod types;
pub mod core;

pub use core::*;
pub use errors::ApiError;
pub use types::EditResult;
