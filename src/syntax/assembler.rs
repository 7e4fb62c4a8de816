//! Span assembly
//!
//! Turns an ordered token stream into a gap-filled span list that
//! partitions the whole text.

use super::category::Category;
use super::grammar::Token;
use super::span::{OffsetUnit, Span};

/// Accumulates spans, dropping empty runs and merging adjacent gaps
#[derive(Debug, Default)]
pub struct SpanBuilder {
    spans: Vec<Span>,
    covered: usize,
}

impl SpanBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a run of `len` units
    pub fn push(&mut self, len: usize, category: Option<Category>) {
        if len == 0 {
            return;
        }
        self.covered += len;
        if category.is_none() {
            if let Some(last) = self.spans.last_mut().filter(|s| s.is_gap()) {
                last.len += len;
                return;
            }
        }
        self.spans.push(Span { len, category });
    }

    /// Units covered so far
    pub fn covered(&self) -> usize {
        self.covered
    }

    /// Finish and return the spans
    pub fn build(self) -> Vec<Span> {
        self.spans
    }
}

/// Assemble spans for `text` from tokens carrying byte offsets
///
/// Tokens must be sorted and non-overlapping, as produced by
/// [`Grammar::tokens`](crate::Grammar::tokens).
pub fn assemble<I>(text: &str, tokens: I, unit: OffsetUnit) -> Vec<Span>
where
    I: IntoIterator<Item = Token>,
{
    let mut builder = SpanBuilder::new();
    // Byte offset up to which the text has been covered
    let mut last_end = 0;

    for token in tokens {
        debug_assert!(token.start >= last_end && token.start < token.end);
        if token.start > last_end {
            builder.push(unit.measure(&text[last_end..token.start]), None);
        }
        builder.push(unit.measure(token.text(text)), Some(token.category));
        last_end = token.end;
    }

    if last_end < text.len() {
        builder.push(unit.measure(&text[last_end..]), None);
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(start: usize, end: usize, category: Category) -> Token {
        Token { start, end, category }
    }

    #[test]
    fn test_builder_merges_gaps() {
        let mut builder = SpanBuilder::new();
        builder.push(2, None);
        builder.push(3, None);
        builder.push(0, Some(Category::Keyword));
        builder.push(1, Some(Category::Paren));
        builder.push(1, Some(Category::Paren));
        assert_eq!(builder.covered(), 7);
        assert_eq!(
            builder.build(),
            vec![Span::gap(5), Span::styled(1, Category::Paren), Span::styled(1, Category::Paren)]
        );
    }

    #[test]
    fn test_gaps_before_between_after() {
        let text = "  class X;  ";
        let tokens = [token(2, 7, Category::Keyword), token(9, 10, Category::Semicolon)];
        assert_eq!(
            assemble(text, tokens, OffsetUnit::Bytes),
            vec![
                Span::gap(2),
                Span::styled(5, Category::Keyword),
                Span::gap(2),
                Span::styled(1, Category::Semicolon),
                Span::gap(2),
            ]
        );
    }

    #[test]
    fn test_no_trailing_gap_when_fully_covered() {
        let spans = assemble("int", [token(0, 3, Category::Keyword)], OffsetUnit::Utf16);
        assert_eq!(spans, vec![Span::styled(3, Category::Keyword)]);
    }

    #[test]
    fn test_empty_and_unmatched_text() {
        assert!(assemble("", Vec::<Token>::new(), OffsetUnit::Utf16).is_empty());
        assert_eq!(assemble("foo", Vec::<Token>::new(), OffsetUnit::Utf16), vec![Span::gap(3)]);
    }

    #[test]
    fn test_lengths_use_unit() {
        // "é" is 2 bytes, "\u{1F600}" is 4 bytes and 2 UTF-16 units
        let text = "é\u{1F600};";
        let tokens = [token(6, 7, Category::Semicolon)];
        assert_eq!(
            assemble(text, tokens, OffsetUnit::Utf16),
            vec![Span::gap(3), Span::styled(1, Category::Semicolon)]
        );
        assert_eq!(
            assemble(text, tokens, OffsetUnit::Chars),
            vec![Span::gap(2), Span::styled(1, Category::Semicolon)]
        );
    }
}
