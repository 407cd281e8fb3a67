//! UTF-16 offset translation
//!
//! Hosts such as browsers index strings in UTF-16 code units; the text model
//! indexes characters. Characters outside the Basic Multilingual Plane take two
//! code units, so the two only agree until the first such character.

/// Prefix sums of UTF-16 widths over one text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utf16Index {
    /// `boundaries[i]` is the UTF-16 offset of character `i`; one extra entry
    /// holds the total UTF-16 length
    boundaries: Vec<usize>,
}

impl Utf16Index {
    pub fn new(text: &str) -> Self {
        let mut boundaries = Vec::with_capacity(text.len() + 1);
        let mut offset = 0;
        boundaries.push(offset);
        for ch in text.chars() {
            offset += ch.len_utf16();
            boundaries.push(offset);
        }
        Self { boundaries }
    }

    /// Length of the text in characters
    pub fn char_len(&self) -> usize {
        self.boundaries.len() - 1
    }

    /// Character offset to UTF-16 offset, clamped to the text
    pub fn to_utf16(&self, char_pos: usize) -> usize {
        self.boundaries[char_pos.min(self.char_len())]
    }

    /// UTF-16 offset to character offset, clamped to the text
    ///
    /// An offset between the two halves of a surrogate pair rounds down to the
    /// start of that character.
    pub fn to_char(&self, utf16_pos: usize) -> usize {
        self.boundaries.partition_point(|&b| b <= utf16_pos) - 1
    }
}
