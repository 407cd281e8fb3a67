//! Cursor and selection management for note text
//!
//! Positions are character offsets into a single note's text.

use serde::{Deserialize, Serialize};

/// A range of text from start (inclusive) to end (exclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextRange {
    pub start: usize,
    pub end: usize,
}

impl TextRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Check if this range is empty (start >= end)
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Check if two ranges share at least one character
    pub fn overlaps(&self, other: &TextRange) -> bool {
        self.start < other.end && self.end > other.start
    }
}

/// Selection state (anchor + head)
///
/// The head is where the caret sits. A backward selection has `head < anchor`;
/// use [`Selection::start`]/[`Selection::end`] for the ordered bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Selection {
    pub anchor: usize,
    pub head: usize,
}

impl Selection {
    pub fn new(anchor: usize, head: usize) -> Self {
        Self { anchor, head }
    }

    /// Create a collapsed selection (cursor only, no selection)
    pub fn collapsed(pos: usize) -> Self {
        Self {
            anchor: pos,
            head: pos,
        }
    }

    /// Check if selection is collapsed (anchor == head)
    pub fn is_collapsed(&self) -> bool {
        self.anchor == self.head
    }

    /// Start of the selection (min of anchor and head)
    pub fn start(&self) -> usize {
        self.anchor.min(self.head)
    }

    /// End of the selection (max of anchor and head)
    pub fn end(&self) -> usize {
        self.anchor.max(self.head)
    }

    /// Get the range covered by this selection (ordered start to end)
    pub fn range(&self) -> TextRange {
        TextRange::new(self.start(), self.end())
    }

    /// Collapse onto the end point, where editors leave the caret after a
    /// formatting command.
    pub fn collapse_to_end(&self) -> Self {
        Self::collapsed(self.end())
    }

    /// Clamp both endpoints to `len`
    pub fn clamped(&self, len: usize) -> Self {
        Self {
            anchor: self.anchor.min(len),
            head: self.head.min(len),
        }
    }
}
