//! Style-aware text engine
//!
//! `NotesEditor` is the single state container the presentation layer talks
//! to. It owns the note collection and the bold/italic button state, decides
//! what to do with every raw text-input value, and runs the formatting
//! commands against the active note's selection.

use super::collection::{Note, NoteCollection};
use super::events::{EditorEvent, Observers, SubscriptionId};
use super::snapshot::{EditorSnapshot, NoteSummary};
use crate::text::{Facet, FontSize, Selection, SpanStyle, TextValue};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// What `update_text` did with a proposed value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateOutcome {
    /// The input dropped the styles; the previous ranges were carried across the edit
    Reconciled,
    /// Taken as given
    Accepted,
    /// Discarded without touching any state
    Ignored,
}

impl UpdateOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            UpdateOutcome::Reconciled => "reconciled",
            UpdateOutcome::Accepted => "accepted",
            UpdateOutcome::Ignored => "ignored",
        }
    }
}

/// Bold/italic button highlight
///
/// Mirrors the current selection, and doubles as the pending style while the
/// selection is collapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FormattingState {
    pub bold: bool,
    pub italic: bool,
}

#[derive(Debug, Default)]
pub struct NotesEditor {
    notes: NoteCollection,
    formatting: FormattingState,
    observers: Observers,
}

impl NotesEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing collection; both flags start off
    pub fn with_notes(notes: NoteCollection) -> Self {
        Self {
            notes,
            ..Self::default()
        }
    }

    pub fn notes(&self) -> &NoteCollection {
        &self.notes
    }

    pub fn current_note(&mut self) -> Cow<'_, Note> {
        self.notes.current_note()
    }

    pub fn formatting(&self) -> FormattingState {
        self.formatting
    }

    pub fn is_bold_active(&self) -> bool {
        self.formatting.bold
    }

    pub fn is_italic_active(&self) -> bool {
        self.formatting.italic
    }

    pub fn version(&self) -> u64 {
        self.observers.version()
    }

    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&EditorEvent) + Send + 'static,
    {
        self.observers.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    // ========================================================================
    // Note collection
    // ========================================================================

    pub fn add_note(&mut self) -> usize {
        let index = self.notes.add_note();
        log::debug!("added note {} ({} total)", index, self.notes.len());
        self.observers.emit(EditorEvent::NoteAdded { index });
        index
    }

    /// Switch to the note at `index` and re-derive the button state from its
    /// selection. Out-of-range indices are ignored.
    pub fn select_tab(&mut self, index: usize) -> bool {
        if !self.notes.select(index) {
            log::debug!("ignoring selectTab({}) with {} notes", index, self.notes.len());
            return false;
        }
        self.observers.emit(EditorEvent::TabSelected { index });
        self.refresh_style_flags();
        true
    }

    // ========================================================================
    // Text input
    // ========================================================================

    /// Take a raw value from the text input
    ///
    /// Text inputs routinely hand back a value with the style list emptied
    /// after a plain replace, or replay an older value with fewer ranges. The
    /// first case is repaired by remapping the previous ranges across the
    /// edit; the second is dropped.
    pub fn update_text(&mut self, new_value: TextValue) -> UpdateOutcome {
        let Some(index) = self.notes.current_index() else {
            return UpdateOutcome::Ignored;
        };
        let Some(old_value) = self.notes.get(index).map(|note| note.value.clone()) else {
            return UpdateOutcome::Ignored;
        };

        let text_changed = new_value.text() != old_value.text();

        let (final_value, outcome) =
            if text_changed && new_value.styles().is_empty() && !old_value.styles().is_empty() {
                (old_value.reconcile(&new_value), UpdateOutcome::Reconciled)
            } else if !text_changed
                && new_value.selection() == old_value.selection()
                && new_value.styles().len() < old_value.styles().len()
            {
                log::debug!(
                    "ignoring stale update with {} of {} style ranges",
                    new_value.styles().len(),
                    old_value.styles().len()
                );
                return UpdateOutcome::Ignored;
            } else {
                (new_value, UpdateOutcome::Accepted)
            };

        if final_value == old_value {
            return outcome;
        }

        let moved = old_value.differs_in_text_or_selection(&final_value);
        let restyled = old_value.styles() != final_value.styles();

        if !self.notes.replace_value(index, final_value) {
            return UpdateOutcome::Ignored;
        }
        log::trace!("note {} updated ({})", index, outcome.as_str());

        if moved {
            self.observers.emit(EditorEvent::TextChanged { index });
        } else if restyled {
            self.observers.emit(EditorEvent::StylesChanged { index });
        }
        if moved {
            self.refresh_style_flags();
        }
        outcome
    }

    // ========================================================================
    // Formatting commands
    // ========================================================================

    pub fn toggle_bold(&mut self) {
        self.toggle(Facet::Bold);
    }

    pub fn toggle_italic(&mut self) {
        self.toggle(Facet::Italic);
    }

    /// Size the current selection; sizes stack instead of toggling
    pub fn apply_font_size(&mut self, size: FontSize) {
        self.apply_style(SpanStyle::sized(size));
    }

    fn toggle(&mut self, facet: Facet) {
        let selection = self.current_note().value.selection();

        if selection.is_collapsed() {
            match facet {
                Facet::Bold => self.formatting.bold = !self.formatting.bold,
                Facet::Italic => self.formatting.italic = !self.formatting.italic,
                Facet::FontSize => return,
            }
            self.emit_formatting();
            return;
        }

        if self.has_style_in_selection(selection, |style| facet.matches(style)) {
            self.remove_style(selection, |style| facet.matches(style));
        } else if let Some(style) = facet.style() {
            self.apply_style(style);
        }
    }

    /// True if any range overlapping `selection` satisfies `predicate`
    pub fn has_style_in_selection<P>(&mut self, selection: Selection, predicate: P) -> bool
    where
        P: Fn(&SpanStyle) -> bool,
    {
        self.current_note()
            .value
            .styles()
            .any_in(selection.range(), predicate)
    }

    /// Append `style` over the current selection and put the caret at its end
    pub fn apply_style(&mut self, style: SpanStyle) {
        let Some(index) = self.notes.current_index() else {
            return;
        };
        let Some(value) = self.notes.get(index).map(|note| &note.value) else {
            return;
        };
        let selection = value.selection();
        if selection.is_collapsed() {
            return;
        }

        let styles = value.styles().with_style(selection.range(), style);
        let updated = value.restyled(styles, selection.collapse_to_end());
        log::debug!("applied {:?} over {}..{}", style, selection.start(), selection.end());

        if self.notes.replace_value(index, updated) {
            self.observers.emit(EditorEvent::StylesChanged { index });
        }
    }

    /// Cut `selection` out of every range matching `predicate` and put the
    /// caret at the selection end
    pub fn remove_style<P>(&mut self, selection: Selection, predicate: P)
    where
        P: Fn(&SpanStyle) -> bool,
    {
        let Some(index) = self.notes.current_index() else {
            return;
        };
        let Some(value) = self.notes.get(index).map(|note| &note.value) else {
            return;
        };

        let styles = value.styles().without_style(selection.range(), predicate);
        let updated = value.restyled(styles, selection.collapse_to_end());
        log::debug!("removed style over {}..{}", selection.start(), selection.end());

        if self.notes.replace_value(index, updated) {
            self.observers.emit(EditorEvent::StylesChanged { index });
        }
    }

    /// Re-derive the bold/italic flags from the current selection
    ///
    /// A collapsed selection, or one starting at the end of the text, leaves the
    /// flags alone so a pending style survives caret moves.
    pub fn refresh_style_flags(&mut self) {
        let next = {
            let note = self.current_note();
            let value = &note.value;
            let selection = value.selection();
            if selection.is_collapsed() || selection.start() >= value.len() {
                return;
            }
            let range = selection.range();
            FormattingState {
                bold: value.styles().any_in(range, SpanStyle::is_bold),
                italic: value.styles().any_in(range, SpanStyle::is_italic),
            }
        };

        if next != self.formatting {
            self.formatting = next;
            self.emit_formatting();
        }
    }

    fn emit_formatting(&mut self) {
        let FormattingState { bold, italic } = self.formatting;
        self.observers.emit(EditorEvent::FormattingChanged { bold, italic });
    }

    // ========================================================================
    // Read side
    // ========================================================================

    /// Everything a renderer needs, without mutating anything
    pub fn snapshot(&self) -> EditorSnapshot {
        let selected_index = self.notes.display_index();
        let notes = self
            .notes
            .notes()
            .iter()
            .zip(self.notes.labels())
            .enumerate()
            .map(|(index, (note, label))| NoteSummary {
                id: note.id,
                index,
                label,
            })
            .collect();

        EditorSnapshot {
            notes,
            selected_index,
            current: self
                .notes
                .get(selected_index)
                .map(|note| note.value.clone())
                .unwrap_or_default(),
            bold_active: self.formatting.bold,
            italic_active: self.formatting.italic,
            version: self.version(),
        }
    }
}
