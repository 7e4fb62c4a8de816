//! Highlighter entry points
//!
//! Ties a grammar to the offset unit the consumer indexes text by.
//! Holds no per-document state: every call recomputes the full span
//! list from the text it is given.

use std::borrow::Cow;

use super::assembler::{assemble, SpanBuilder};
use super::grammar::{Grammar, StringRecovery, Tokens};
use super::span::{OffsetUnit, Span};
use crate::config::Config;
use crate::error::Result;

/// Text-to-spans highlighter
#[derive(Debug, Clone)]
pub struct Highlighter {
    grammar: Cow<'static, Grammar>,
    unit: OffsetUnit,
}

impl Highlighter {
    /// Highlighter over the shared default grammar
    pub fn new(unit: OffsetUnit) -> Self {
        Self {
            grammar: Cow::Borrowed(Grammar::shared()),
            unit,
        }
    }

    /// Highlighter with its own grammar
    pub fn with_grammar(grammar: Grammar, unit: OffsetUnit) -> Self {
        Self {
            grammar: Cow::Owned(grammar),
            unit,
        }
    }

    /// Build a highlighter from user settings
    pub fn from_config(config: &Config) -> Result<Self> {
        match config.unterminated_string {
            StringRecovery::EndOfInput => Ok(Self::new(config.offset_unit)),
            recovery => Ok(Self::with_grammar(Grammar::java(recovery)?, config.offset_unit)),
        }
    }

    /// Same grammar, different offset unit
    pub fn with_unit(&self, unit: OffsetUnit) -> Self {
        Self {
            grammar: self.grammar.clone(),
            unit,
        }
    }

    /// Unit span lengths are measured in
    pub fn unit(&self) -> OffsetUnit {
        self.unit
    }

    /// The grammar in use
    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    /// Lazy token stream over `text` (byte offsets)
    pub fn tokens<'a>(&'a self, text: &'a str) -> Tokens<'a, 'a> {
        self.grammar.tokens(text)
    }

    /// Compute the full span list for `text`
    pub fn highlight(&self, text: &str) -> Vec<Span> {
        let spans = assemble(text, self.tokens(text), self.unit);
        tracing::trace!(len = text.len(), spans = spans.len(), "highlighted text");
        spans
    }

    /// All-gap span list covering `text`, for when highlighting is off
    pub fn plain(&self, text: &str) -> Vec<Span> {
        let mut builder = SpanBuilder::new();
        builder.push(self.unit.measure(text), None);
        builder.build()
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new(OffsetUnit::default())
    }
}

/// Compute highlighting spans for `text` in UTF-16 units
///
/// Deterministic and total over all inputs. Uses the shared grammar.
pub fn compute_highlighting(text: &str) -> Vec<Span> {
    Highlighter::default().highlight(text)
}

/// Single gap span covering `text` in UTF-16 units (empty for empty text)
pub fn compute_plain_highlighting(text: &str) -> Vec<Span> {
    Highlighter::default().plain(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::category::Category;

    #[test]
    fn test_highlight_simple() {
        let spans = compute_highlighting("class Foo");
        assert_eq!(spans, vec![Span::styled(5, Category::Keyword), Span::gap(4)]);
    }

    #[test]
    fn test_plain() {
        assert_eq!(compute_plain_highlighting("int x;"), vec![Span::gap(6)]);
        assert!(compute_plain_highlighting("").is_empty());
    }

    #[test]
    fn test_from_config() {
        let mut config = Config::default();
        config.offset_unit = OffsetUnit::Bytes;
        config.unterminated_string = StringRecovery::EndOfLine;
        let highlighter = Highlighter::from_config(&config).unwrap();
        assert_eq!(highlighter.unit(), OffsetUnit::Bytes);
        assert_eq!(highlighter.grammar().recovery(), StringRecovery::EndOfLine);

        let spans = highlighter.highlight("\"é\nint");
        assert_eq!(
            spans,
            vec![Span::styled(3, Category::String), Span::gap(1), Span::styled(3, Category::Keyword)]
        );
    }

    #[test]
    fn test_with_unit_keeps_grammar() {
        let base = Highlighter::with_grammar(
            Grammar::java(StringRecovery::EndOfLine).unwrap(),
            OffsetUnit::Utf16,
        );
        let chars = base.with_unit(OffsetUnit::Chars);
        assert_eq!(chars.unit(), OffsetUnit::Chars);
        assert_eq!(chars.grammar().recovery(), StringRecovery::EndOfLine);
    }
}
