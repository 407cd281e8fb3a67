//! Note collection management
//!
//! An ordered list of notes plus the index of the active one. The list is never
//! handed out empty: a fresh collection starts with one note and nothing
//! removes notes.

use crate::text::TextValue;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use uuid::Uuid;

/// A single note: stable identity plus its current text value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: Uuid,
    pub value: TextValue,
}

impl Note {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            value: TextValue::new(),
        }
    }

    /// Same note, new value
    pub fn with_value(&self, value: TextValue) -> Self {
        Self { id: self.id, value }
    }
}

impl Default for Note {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteCollection {
    notes: Vec<Note>,
    selected: usize,
}

impl NoteCollection {
    /// A collection holding one empty, selected note
    pub fn new() -> Self {
        Self {
            notes: vec![Note::new()],
            selected: 0,
        }
    }

    /// Build a collection from existing notes
    ///
    /// `selected` is kept as given; reads clamp it.
    pub fn from_parts(notes: Vec<Note>, selected: usize) -> Self {
        Self { notes, selected }
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Raw selected index, possibly stale
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Clamp the selected index to the last note and return it
    pub fn current_index(&mut self) -> Option<usize> {
        let last = self.notes.len().checked_sub(1)?;
        if self.selected > last {
            log::debug!("selected index {} out of range, clamping to {}", self.selected, last);
            self.selected = last;
        }
        Some(self.selected)
    }

    /// Selected index coerced into range without touching the collection
    pub fn display_index(&self) -> usize {
        self.selected.min(self.notes.len().saturating_sub(1))
    }

    /// The active note
    ///
    /// If the list is somehow empty, an empty note is synthesized and the
    /// collection is left alone.
    pub fn current_note(&mut self) -> Cow<'_, Note> {
        match self.current_index() {
            Some(index) => Cow::Borrowed(&self.notes[index]),
            None => Cow::Owned(Note::new()),
        }
    }

    pub fn get(&self, index: usize) -> Option<&Note> {
        self.notes.get(index)
    }

    /// Append an empty note and select it
    pub fn add_note(&mut self) -> usize {
        self.notes.push(Note::new());
        self.selected = self.notes.len() - 1;
        self.selected
    }

    /// Select the note at `index`; out-of-range indices are ignored
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.notes.len() {
            return false;
        }
        self.selected = index;
        true
    }

    /// Swap in a new value for the note at `index`
    pub fn replace_value(&mut self, index: usize, value: TextValue) -> bool {
        match self.notes.get_mut(index) {
            Some(note) => {
                *note = note.with_value(value);
                true
            }
            None => false,
        }
    }

    /// Tab captions in display order
    pub fn labels(&self) -> Vec<String> {
        (1..=self.notes.len()).map(|n| format!("Note {}", n)).collect()
    }
}

impl Default for NoteCollection {
    fn default() -> Self {
        Self::new()
    }
}
