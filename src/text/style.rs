//! Character style facets
//!
//! A [`SpanStyle`] carries any combination of weight, slant and size. Each
//! attribute is an independent [`Facet`]; toggling or removing one facet never
//! touches the others.

use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

/// Font weight, serialized as its CSS numeric weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize_repr, Deserialize_repr)]
#[repr(u16)]
pub enum FontWeight {
    Normal = 400,
    Bold = 700,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum FontStyle {
    Normal = 0,
    Italic = 1,
}

/// Font size in scale-independent pixels (never zero)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct FontSize(u16);

impl FontSize {
    /// Sizes offered by the size picker
    pub const PRESETS: [u16; 4] = [12, 16, 20, 24];

    pub fn new(sp: u16) -> Option<Self> {
        (sp > 0).then_some(Self(sp))
    }

    pub fn sp(&self) -> u16 {
        self.0
    }

    pub fn presets() -> impl Iterator<Item = FontSize> {
        Self::PRESETS.into_iter().map(FontSize)
    }
}

impl TryFrom<u16> for FontSize {
    type Error = String;

    fn try_from(sp: u16) -> Result<Self, Self::Error> {
        FontSize::new(sp).ok_or_else(|| "font size must be greater than zero".to_string())
    }
}

impl From<FontSize> for u16 {
    fn from(size: FontSize) -> u16 {
        size.0
    }
}

/// Style attributes attached to a range of text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SpanStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_style: Option<FontStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<FontSize>,
}

impl SpanStyle {
    pub fn bold() -> Self {
        Self {
            font_weight: Some(FontWeight::Bold),
            ..Self::default()
        }
    }

    pub fn italic() -> Self {
        Self {
            font_style: Some(FontStyle::Italic),
            ..Self::default()
        }
    }

    pub fn sized(size: FontSize) -> Self {
        Self {
            font_size: Some(size),
            ..Self::default()
        }
    }

    pub fn is_bold(&self) -> bool {
        self.font_weight == Some(FontWeight::Bold)
    }

    pub fn is_italic(&self) -> bool {
        self.font_style == Some(FontStyle::Italic)
    }
}

/// One independent style attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Facet {
    Bold,
    Italic,
    FontSize,
}

impl Facet {
    /// Predicate used by the overlap and removal queries
    pub fn matches(&self, style: &SpanStyle) -> bool {
        match self {
            Facet::Bold => style.is_bold(),
            Facet::Italic => style.is_italic(),
            Facet::FontSize => style.font_size.is_some(),
        }
    }

    /// The style applied when this facet is switched on.
    ///
    /// Font size has no single "on" value, so it has none.
    pub fn style(&self) -> Option<SpanStyle> {
        match self {
            Facet::Bold => Some(SpanStyle::bold()),
            Facet::Italic => Some(SpanStyle::italic()),
            Facet::FontSize => None,
        }
    }
}
