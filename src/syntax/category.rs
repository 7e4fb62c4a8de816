//! Lexical categories for syntax highlighting
//!
//! This module defines the closed set of categories the grammar
//! recognizes, in precedence order, and their default visual styles.

use super::style::{Color, Style};

/// Lexical category of a token
///
/// Variants are declared in precedence order: when two rules match at
/// the same offset, the one declared first wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Reserved words (class, if, return, etc.)
    Keyword,
    /// Well-known collection type names (List, HashMap, etc.)
    DataStructure,
    /// `(` or `)`
    Paren,
    /// `{` or `}`
    Brace,
    /// `[` or `]`
    Bracket,
    /// `;`
    Semicolon,
    /// Double-quoted string literals
    String,
    /// Line (`//`) and block (`/* */`) comments
    Comment,
    /// Unsigned integer or decimal literals
    Number,
}

impl Category {
    /// All categories, highest precedence first
    pub const ALL: [Category; 9] = [
        Category::Keyword,
        Category::DataStructure,
        Category::Paren,
        Category::Brace,
        Category::Bracket,
        Category::Semicolon,
        Category::String,
        Category::Comment,
        Category::Number,
    ];

    /// Style class name handed to renderers (also the grammar group name)
    pub fn style_class(&self) -> &'static str {
        match self {
            Category::Keyword => "keyword",
            Category::DataStructure => "datastructure",
            Category::Paren => "paren",
            Category::Brace => "brace",
            Category::Bracket => "bracket",
            Category::Semicolon => "semicolon",
            Category::String => "string",
            Category::Comment => "comment",
            Category::Number => "number",
        }
    }

    /// Parse a category from its style class name
    pub fn from_style_class(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.style_class() == name)
    }

    /// Get the default terminal style for this category
    pub fn default_style(&self) -> Style {
        match self {
            Category::Keyword => Style::fg(Color::Magenta).with_bold(),
            Category::DataStructure => Style::fg(Color::Yellow),
            Category::Paren | Category::Brace | Category::Bracket => Style::fg(Color::BrightWhite),
            Category::Semicolon => Style::default(),
            Category::String => Style::fg(Color::Green),
            Category::Comment => Style::fg(Color::BrightBlack).with_italic(),
            Category::Number => Style::fg(Color::Cyan),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precedence_order() {
        // Derived Ord follows declaration order, which is precedence order
        let mut sorted = Category::ALL;
        sorted.sort();
        assert_eq!(sorted, Category::ALL);
        assert!(Category::Keyword < Category::DataStructure);
        assert!(Category::String < Category::Comment);
    }

    #[test]
    fn test_style_class_roundtrip() {
        for category in Category::ALL {
            assert_eq!(Category::from_style_class(category.style_class()), Some(category));
        }
        assert_eq!(Category::from_style_class("Keyword"), None);
        assert_eq!(Category::from_style_class(""), None);
    }

    #[test]
    fn test_default_styles() {
        assert!(!Category::Keyword.default_style().is_default());
        assert!(!Category::Comment.default_style().is_default());
        assert!(Category::Semicolon.default_style().is_default());
    }
}
