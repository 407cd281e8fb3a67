//! Read-side snapshots handed to renderers

use crate::text::TextValue;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One tab in the tab row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteSummary {
    pub id: Uuid,
    pub index: usize,
    pub label: String,
}

/// Complete renderable editor state at one version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorSnapshot {
    pub notes: Vec<NoteSummary>,
    pub selected_index: usize,
    pub current: TextValue,
    pub bold_active: bool,
    pub italic_active: bool,
    pub version: u64,
}

impl EditorSnapshot {
    /// Express the current value's offsets in UTF-16 code units for a JS host
    pub fn with_utf16_offsets(self) -> Self {
        Self {
            current: self.current.to_utf16(),
            ..self
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
