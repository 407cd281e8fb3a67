//! The editable value of one note: text, style ranges and selection

use super::annotations::{StyleLayer, StyleRange};
use super::cursor::Selection;
use super::diff::TextChange;
use super::utf16::Utf16Index;
use serde::{Deserialize, Serialize};

/// Text plus its style ranges and selection
///
/// Values are immutable in practice: every edit builds a new one and swaps it
/// in whole, so readers never see a half-updated style list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextValue {
    text: String,
    styles: StyleLayer,
    selection: Selection,
}

impl TextValue {
    /// Empty text, no styles, caret at 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a value from untrusted parts
    ///
    /// Style ranges that do not fit the text are dropped or clamped and the
    /// selection is clamped to the text length.
    pub fn from_parts(
        text: impl Into<String>,
        styles: impl IntoIterator<Item = StyleRange>,
        selection: Selection,
    ) -> Self {
        let text = text.into();
        let len = text.chars().count();
        Self {
            styles: StyleLayer::sanitized(styles, len),
            selection: selection.clamped(len),
            text,
        }
    }

    /// Build a value from parts whose offsets are UTF-16 code units, as a
    /// browser text input reports them
    pub fn from_utf16_parts(
        text: impl Into<String>,
        styles: impl IntoIterator<Item = StyleRange>,
        selection: Selection,
    ) -> Self {
        let text = text.into();
        let index = Utf16Index::new(&text);
        let styles: Vec<StyleRange> = styles
            .into_iter()
            .map(|r| StyleRange::new(index.to_char(r.start), index.to_char(r.end), r.style))
            .collect();
        let selection = Selection::new(index.to_char(selection.anchor), index.to_char(selection.head));
        Self::from_parts(text, styles, selection)
    }

    /// The same value with every offset expressed in UTF-16 code units
    ///
    /// The result is for handing to a host; its offsets no longer count
    /// characters.
    pub fn to_utf16(&self) -> Self {
        let index = Utf16Index::new(&self.text);
        Self {
            text: self.text.clone(),
            styles: self
                .styles
                .iter()
                .map(|r| StyleRange::new(index.to_utf16(r.start), index.to_utf16(r.end), r.style))
                .collect(),
            selection: Selection::new(
                index.to_utf16(self.selection.anchor),
                index.to_utf16(self.selection.head),
            ),
        }
    }

    /// Plain text with the caret at its end
    pub fn plain(text: impl Into<String>) -> Self {
        let text = text.into();
        let len = text.chars().count();
        Self {
            text,
            styles: StyleLayer::new(),
            selection: Selection::collapsed(len),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn styles(&self) -> &StyleLayer {
        &self.styles
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Same text, new styles and selection
    pub fn restyled(&self, styles: StyleLayer, selection: Selection) -> Self {
        let len = self.len();
        Self {
            text: self.text.clone(),
            styles: StyleLayer::sanitized(styles.iter().copied(), len),
            selection: selection.clamped(len),
        }
    }

    /// Take `proposed` text and selection, carrying this value's styles across
    /// the edit between the two texts
    pub fn reconcile(&self, proposed: &TextValue) -> Self {
        let change = TextChange::detect(&self.text, &proposed.text, proposed.selection.start());
        log::trace!(
            "reconciling {} style ranges at offset {} (length diff {})",
            self.styles.len(),
            change.offset,
            change.length_diff
        );

        Self {
            text: proposed.text.clone(),
            styles: self.styles.remapped(&change),
            selection: proposed.selection,
        }
    }

    /// True if the text or the selection differs from `other`
    pub fn differs_in_text_or_selection(&self, other: &TextValue) -> bool {
        self.text != other.text || self.selection != other.selection
    }

    /// True if every style range fits the text
    pub fn is_consistent(&self) -> bool {
        self.styles.fits(self.len()) && self.selection.end() <= self.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::style::SpanStyle;

    #[test]
    fn test_from_parts_sanitizes() {
        let value = TextValue::from_parts(
            "abc",
            [
                StyleRange::new(1, 9, SpanStyle::bold()),
                StyleRange::new(5, 7, SpanStyle::italic()),
            ],
            Selection::new(2, 12),
        );

        assert_eq!(value.styles().ranges(), &[StyleRange::new(1, 3, SpanStyle::bold())]);
        assert_eq!(value.selection(), Selection::new(2, 3));
        assert!(value.is_consistent());
    }

    #[test]
    fn test_reconcile_takes_proposed_text_and_selection() {
        let old = TextValue::from_parts(
            "hello",
            [StyleRange::new(0, 5, SpanStyle::bold())],
            Selection::collapsed(2),
        );
        let proposed = TextValue::from_parts("heXllo", [], Selection::collapsed(3));

        let result = old.reconcile(&proposed);
        assert_eq!(result.text(), "heXllo");
        assert_eq!(result.selection(), Selection::collapsed(3));
        assert_eq!(result.styles().ranges(), &[StyleRange::new(0, 6, SpanStyle::bold())]);
    }

    #[test]
    fn test_reconcile_bounds_edit_by_selection_start() {
        let bold = StyleRange::new(2, 4, SpanStyle::bold());
        let old = TextValue::from_parts("abab", [bold], Selection::collapsed(2));
        // "ab" pasted at 2, left selected backward (anchor after, head before)
        let proposed = TextValue::from_parts("ababab", [], Selection::new(4, 2));

        let result = old.reconcile(&proposed);

        assert_eq!(result.styles().ranges(), &[StyleRange::new(4, 6, SpanStyle::bold())]);
        assert_eq!(result.selection(), Selection::new(4, 2));
    }

    #[test]
    fn test_utf16_offsets_round_trip_through_astral_text() {
        // A browser selects "ab" in "😀ab" as 2..4
        let value = TextValue::from_utf16_parts(
            "😀ab",
            [StyleRange::new(0, 2, SpanStyle::italic())],
            Selection::new(2, 4),
        );

        assert_eq!(value.selection(), Selection::new(1, 3));
        assert_eq!(value.styles().ranges(), &[StyleRange::new(0, 1, SpanStyle::italic())]);

        let host = value.to_utf16();
        assert_eq!(host.selection(), Selection::new(2, 4));
        assert_eq!(host.styles().ranges(), &[StyleRange::new(0, 2, SpanStyle::italic())]);
    }

    #[test]
    fn test_plain_puts_caret_at_end() {
        let value = TextValue::plain("héllo");
        assert_eq!(value.len(), 5);
        assert_eq!(value.selection(), Selection::collapsed(5));
    }
}
