//! Shared types for the WASM API

use crate::notes::{NotesEditor, UpdateOutcome};
use crate::text::{Selection, Utf16Index};
use serde::{Deserialize, Serialize};

/// Result of an edit or formatting command
///
/// Carries the selection the host must write back into its text input, since
/// formatting commands move the caret. Offsets are UTF-16 code units.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct EditResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcome: Option<UpdateOutcome>,
    pub selected_index: usize,
    pub selection_start: usize,
    pub selection_end: usize,
    pub bold_active: bool,
    pub italic_active: bool,
    pub version: u64,
}

impl EditResult {
    pub fn from_editor(editor: &NotesEditor, outcome: Option<UpdateOutcome>) -> Self {
        let selected_index = editor.notes().display_index();
        let selection = editor
            .notes()
            .get(selected_index)
            .map(|note| {
                let index = Utf16Index::new(note.value.text());
                let selection = note.value.selection();
                Selection::new(index.to_utf16(selection.start()), index.to_utf16(selection.end()))
            })
            .unwrap_or_default();
        let formatting = editor.formatting();

        Self {
            outcome,
            selected_index,
            selection_start: selection.start(),
            selection_end: selection.end(),
            bold_active: formatting.bold,
            italic_active: formatting.italic,
            version: editor.version(),
        }
    }
}
