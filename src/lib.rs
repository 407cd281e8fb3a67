//! Rich-Text Notes WASM Module
//!
//! Text model for a multi-note editor: plain text with overlapping
//! character-range styles (bold, italic, font size) that stay consistent as
//! text is inserted, deleted and replaced.

pub mod text;
pub mod notes;
pub mod api;

// Re-export commonly used types
pub use notes::{EditorEvent, EditorSnapshot, Note, NoteCollection, NotesEditor, UpdateOutcome};
pub use text::{Facet, FontSize, Selection, SpanStyle, StyleLayer, StyleRange, TextRange, TextValue};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    {
        if let Err(e) = console_log::init_with_level(log::Level::Debug) {
            wasm_warn!("logger already initialized: {}", e);
        }
    }

    log::info!("Notes WASM module initialized");
}
