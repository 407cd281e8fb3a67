//! Style annotation layer
//!
//! Stores character styles separately from text, as ranges linked by offset.
//! Ranges may overlap and are never merged, so a span can be bold through one
//! range and italic through another. Every operation builds a new layer instead
//! of editing ranges in place.

use super::cursor::TextRange;
use super::diff::TextChange;
use super::style::SpanStyle;
use serde::{Deserialize, Serialize};

/// A style applied to `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleRange {
    pub start: usize,
    pub end: usize,
    pub style: SpanStyle,
}

impl StyleRange {
    pub fn new(start: usize, end: usize, style: SpanStyle) -> Self {
        Self { start, end, style }
    }

    /// Check if this range is valid (start < end)
    pub fn is_valid(&self) -> bool {
        self.start < self.end
    }

    pub fn range(&self) -> TextRange {
        TextRange::new(self.start, self.end)
    }

    pub fn overlaps(&self, range: TextRange) -> bool {
        self.range().overlaps(&range)
    }
}

/// Ordered list of style ranges over one text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleLayer {
    ranges: Vec<StyleRange>,
}

impl StyleLayer {
    /// Create a new empty layer
    pub fn new() -> Self {
        Self { ranges: Vec::new() }
    }

    /// Build a layer for a text of `text_len` characters, dropping ranges that
    /// are empty or start past the text and clamping ends to the text.
    pub fn sanitized(ranges: impl IntoIterator<Item = StyleRange>, text_len: usize) -> Self {
        let ranges = ranges
            .into_iter()
            .filter(|r| r.is_valid() && r.start < text_len)
            .map(|r| StyleRange::new(r.start, r.end.min(text_len), r.style))
            .collect();
        Self { ranges }
    }

    pub fn ranges(&self) -> &[StyleRange] {
        &self.ranges
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StyleRange> {
        self.ranges.iter()
    }

    /// True if every range satisfies `start < end <= text_len`
    pub fn fits(&self, text_len: usize) -> bool {
        self.ranges.iter().all(|r| r.is_valid() && r.end <= text_len)
    }

    /// Ranges overlapping `range`
    pub fn overlapping(&self, range: TextRange) -> impl Iterator<Item = &StyleRange> {
        self.ranges.iter().filter(move |r| r.overlaps(range))
    }

    /// True if any range overlapping `range` satisfies `predicate`
    pub fn any_in<P>(&self, range: TextRange, predicate: P) -> bool
    where
        P: Fn(&SpanStyle) -> bool,
    {
        self.overlapping(range).any(|r| predicate(&r.style))
    }

    /// Append `style` over `range` after the existing ranges
    ///
    /// Empty ranges are ignored.
    pub fn with_style(&self, range: TextRange, style: SpanStyle) -> Self {
        let mut ranges = self.ranges.clone();
        if !range.is_empty() {
            ranges.push(StyleRange::new(range.start, range.end, style));
        }
        Self { ranges }
    }

    /// Cut `range` out of every range matching `predicate`
    ///
    /// A matching range that overlaps is split into the part before
    /// `range.start` and the part after `range.end`; empty pieces are dropped.
    /// Everything else is kept as is, in order.
    pub fn without_style<P>(&self, range: TextRange, predicate: P) -> Self
    where
        P: Fn(&SpanStyle) -> bool,
    {
        let mut ranges = Vec::with_capacity(self.ranges.len() + 1);

        for r in &self.ranges {
            if !(predicate(&r.style) && r.overlaps(range)) {
                ranges.push(*r);
                continue;
            }
            if r.start < range.start {
                ranges.push(StyleRange::new(r.start, range.start, r.style));
            }
            if r.end > range.end {
                ranges.push(StyleRange::new(range.end, r.end, r.style));
            }
        }

        Self { ranges }
    }

    /// Carry every range across a detected text change
    ///
    /// Endpoints are remapped independently. Ranges that collapse or start at
    /// or past the new end are dropped; ends are clamped to the new length.
    pub fn remapped(&self, change: &TextChange) -> Self {
        let ranges = self
            .ranges
            .iter()
            .filter_map(|r| {
                let start = change.remap(r.start);
                let end = change.remap(r.end);
                if start >= end || start >= change.new_len {
                    log::trace!(
                        "dropping style range {}..{} (remapped to {}..{})",
                        r.start,
                        r.end,
                        start,
                        end
                    );
                    return None;
                }
                Some(StyleRange::new(start, end.min(change.new_len), r.style))
            })
            .collect();

        Self { ranges }
    }
}

impl FromIterator<StyleRange> for StyleLayer {
    fn from_iter<I: IntoIterator<Item = StyleRange>>(iter: I) -> Self {
        Self {
            ranges: iter.into_iter().collect(),
        }
    }
}
