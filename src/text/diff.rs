//! Single-point edit detection
//!
//! Infers where an edit happened by comparing the old and new text. Assumes
//! exactly one contiguous insert, delete or replace anchored at or before the
//! new cursor. Multi-hunk edits (a paste touching several disjoint places) are
//! not detected; positions after the first difference are simply shifted by the
//! total length change.

use serde::{Deserialize, Serialize};

/// Where an edit began and how much it changed the text length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextChange {
    /// First character offset that may differ between old and new text
    pub offset: usize,
    /// New length minus old length, in characters
    pub length_diff: isize,
    /// Length of the new text, in characters
    pub new_len: usize,
}

impl TextChange {
    /// Detect the edit that turned `old` into `new`, with the caret at `cursor`
    /// in the new text
    pub fn detect(old: &str, new: &str, cursor: usize) -> Self {
        let old_len = old.chars().count();
        let new_len = new.chars().count();

        Self {
            offset: common_prefix_len(old, new, cursor),
            length_diff: new_len as isize - old_len as isize,
            new_len,
        }
    }

    /// Map a position in the old text onto the new text
    ///
    /// Positions before the edit stay put; the rest move by `length_diff` but
    /// never land before the edit point.
    pub fn remap(&self, pos: usize) -> usize {
        if pos < self.offset {
            return pos;
        }
        let shifted = pos as isize + self.length_diff;
        shifted.max(self.offset as isize) as usize
    }
}

/// Common prefix length in characters, never scanned past `limit`
pub fn common_prefix_len(old: &str, new: &str, limit: usize) -> usize {
    old.chars()
        .zip(new.chars())
        .take(limit)
        .take_while(|(a, b)| a == b)
        .count()
}
