//! WASM API for the notes editor
//!
//! JavaScript-facing entry points. Each call locks the WASM-owned editor once
//! for its whole read-then-write sequence.

use wasm_bindgen::prelude::*;

use crate::api::errors::ApiError;
use crate::api::helpers::{deserialize_list, lock_editor, serialize};
use crate::api::types::EditResult;
use crate::notes::NotesEditor;
use crate::text::{FontSize, Selection, StyleRange, TextValue};
use crate::{wasm_info, wasm_log, wasm_warn};

// ============================================================================
// Collection
// ============================================================================

/// Replace the editor with a fresh one holding a single empty note
#[wasm_bindgen(js_name = resetEditor)]
pub fn reset_editor() -> Result<(), JsValue> {
    let mut editor = lock_editor()?;
    *editor = NotesEditor::new();
    wasm_info!("resetEditor: fresh editor with 1 note");
    Ok(())
}

#[wasm_bindgen(js_name = addNote)]
pub fn add_note() -> Result<JsValue, JsValue> {
    let mut editor = lock_editor()?;
    let index = editor.add_note();
    wasm_info!("addNote: now {} notes, selected {}", editor.notes().len(), index);
    Ok(serialize(&EditResult::from_editor(&editor, None), "addNote result")?)
}

/// Switch tabs; invalid indices are ignored and reported as unchanged state
#[wasm_bindgen(js_name = selectTab)]
pub fn select_tab(index: usize) -> Result<JsValue, JsValue> {
    let mut editor = lock_editor()?;
    if !editor.select_tab(index) {
        wasm_warn!("selectTab({}) ignored: {} notes", index, editor.notes().len());
    }
    Ok(serialize(&EditResult::from_editor(&editor, None), "selectTab result")?)
}

// ============================================================================
// Text input
// ============================================================================

/// Forward one raw text-input change
///
/// # Parameters
/// - `text`: Full text of the input
/// - `selection_start`, `selection_end`: Caret/selection in UTF-16 code units
/// - `styles_js`: Array of style ranges as the input sees them, also in UTF-16
///   code units (may be `undefined`, `null` or empty)
#[wasm_bindgen(js_name = updateText)]
pub fn update_text(
    text: String,
    selection_start: usize,
    selection_end: usize,
    styles_js: JsValue,
) -> Result<JsValue, JsValue> {
    let styles: Vec<StyleRange> = deserialize_list(styles_js, "Style range deserialization error")?;
    wasm_log!(
        "updateText: {} chars, selection {}..{}, {} style ranges",
        text.chars().count(),
        selection_start,
        selection_end,
        styles.len()
    );

    let value = TextValue::from_utf16_parts(text, styles, Selection::new(selection_start, selection_end));

    let mut editor = lock_editor()?;
    let outcome = editor.update_text(value);
    Ok(serialize(&EditResult::from_editor(&editor, Some(outcome)), "updateText result")?)
}

// ============================================================================
// Formatting
// ============================================================================

#[wasm_bindgen(js_name = toggleBold)]
pub fn toggle_bold() -> Result<JsValue, JsValue> {
    let mut editor = lock_editor()?;
    editor.toggle_bold();
    Ok(serialize(&EditResult::from_editor(&editor, None), "toggleBold result")?)
}

#[wasm_bindgen(js_name = toggleItalic)]
pub fn toggle_italic() -> Result<JsValue, JsValue> {
    let mut editor = lock_editor()?;
    editor.toggle_italic();
    Ok(serialize(&EditResult::from_editor(&editor, None), "toggleItalic result")?)
}

#[wasm_bindgen(js_name = applyFontSize)]
pub fn apply_font_size(size: u16) -> Result<JsValue, JsValue> {
    let size = FontSize::new(size).ok_or(ApiError::InvalidFontSize(size))?;
    let mut editor = lock_editor()?;
    editor.apply_font_size(size);
    wasm_info!("applyFontSize: {}sp", size.sp());
    Ok(serialize(&EditResult::from_editor(&editor, None), "applyFontSize result")?)
}

// ============================================================================
// Read side
// ============================================================================

#[wasm_bindgen(js_name = getSnapshot)]
pub fn get_snapshot() -> Result<JsValue, JsValue> {
    let editor = lock_editor()?;
    Ok(serialize(&editor.snapshot().with_utf16_offsets(), "Snapshot serialization error")?)
}

/// Snapshot as a JSON string, for hosts that diff or log it
#[wasm_bindgen(js_name = getSnapshotJson)]
pub fn get_snapshot_json() -> Result<String, JsValue> {
    let editor = lock_editor()?;
    let json = editor.snapshot().with_utf16_offsets().to_json().map_err(|e| ApiError::Serialize {
        context: "Snapshot JSON error".to_string(),
        message: e.to_string(),
    })?;
    Ok(json)
}

#[wasm_bindgen(js_name = getCurrentNote)]
pub fn get_current_note() -> Result<JsValue, JsValue> {
    let mut editor = lock_editor()?;
    let note = editor.current_note();
    let note = note.with_value(note.value.to_utf16());
    Ok(serialize(&note, "Note serialization error")?)
}

#[wasm_bindgen(js_name = getNoteLabels)]
pub fn get_note_labels() -> Result<js_sys::Array, JsValue> {
    let editor = lock_editor()?;
    let result = js_sys::Array::new();
    for label in editor.notes().labels() {
        result.push(&JsValue::from_str(&label));
    }
    Ok(result)
}

#[wasm_bindgen(js_name = getFontSizePresets)]
pub fn get_font_size_presets() -> js_sys::Array {
    let result = js_sys::Array::new();
    for size in FontSize::presets() {
        result.push(&JsValue::from(size.sp()));
    }
    result
}

#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> Result<f64, JsValue> {
    Ok(lock_editor()?.version() as f64)
}

#[wasm_bindgen(js_name = isBoldActive)]
pub fn is_bold_active() -> Result<bool, JsValue> {
    Ok(lock_editor()?.is_bold_active())
}

#[wasm_bindgen(js_name = isItalicActive)]
pub fn is_italic_active() -> Result<bool, JsValue> {
    Ok(lock_editor()?.is_italic_active())
}
