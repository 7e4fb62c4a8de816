//! Span types produced by the highlighter
//!
//! A span is a run of text carrying zero or one category. A span list
//! partitions the whole text: lengths are laid end to end with no gaps.

use super::category::Category;

/// Unit in which span lengths are measured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OffsetUnit {
    /// UTF-16 code units (what most rich-text widgets index by)
    #[default]
    Utf16,
    /// Unicode scalar values
    Chars,
    /// UTF-8 bytes
    Bytes,
}

impl OffsetUnit {
    /// Measure a piece of text in this unit
    pub fn measure(&self, text: &str) -> usize {
        match self {
            OffsetUnit::Utf16 => text.encode_utf16().count(),
            OffsetUnit::Chars => text.chars().count(),
            OffsetUnit::Bytes => text.len(),
        }
    }

    /// Width of a single character in this unit
    pub fn char_len(&self, ch: char) -> usize {
        match self {
            OffsetUnit::Utf16 => ch.len_utf16(),
            OffsetUnit::Chars => 1,
            OffsetUnit::Bytes => ch.len_utf8(),
        }
    }

    /// Config/CLI name of this unit
    pub fn name(&self) -> &'static str {
        match self {
            OffsetUnit::Utf16 => "utf16",
            OffsetUnit::Chars => "chars",
            OffsetUnit::Bytes => "bytes",
        }
    }

    /// Parse a unit from its config name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "utf16" => Some(OffsetUnit::Utf16),
            "chars" => Some(OffsetUnit::Chars),
            "bytes" => Some(OffsetUnit::Bytes),
            _ => None,
        }
    }
}

/// A styled run of text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Length of the run, in the highlighter's offset unit
    pub len: usize,
    /// Category of the run (None = plain text)
    pub category: Option<Category>,
}

impl Span {
    /// Create a plain (gap) span
    pub fn gap(len: usize) -> Self {
        Self { len, category: None }
    }

    /// Create a span carrying a category
    pub fn styled(len: usize, category: Category) -> Self {
        Self {
            len,
            category: Some(category),
        }
    }

    /// Check if this span carries no category
    pub fn is_gap(&self) -> bool {
        self.category.is_none()
    }

    /// Style class of this span, if any
    pub fn style_class(&self) -> Option<&'static str> {
        self.category.map(|c| c.style_class())
    }
}

/// Total length covered by a span list
pub fn total_len(spans: &[Span]) -> usize {
    spans.iter().map(|s| s.len).sum()
}
