//! Applying spans back onto text
//!
//! Renderers hold the text and a span list measured in some offset
//! unit. This walks both in step and hands back string slices, checking
//! that the spans partition the text exactly.

use super::category::Category;
use super::span::{OffsetUnit, Span};
use crate::error::{Error, Result};

/// A slice of the source text with its category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'t> {
    pub text: &'t str,
    pub category: Option<Category>,
}

/// Split `text` into segments according to `spans`
pub fn segments<'t>(text: &'t str, spans: &[Span], unit: OffsetUnit) -> Result<Vec<Segment<'t>>> {
    let mut out = Vec::with_capacity(spans.len());
    let mut chars = text.char_indices().peekable();
    // Position of the current span start, as (byte, unit) offsets
    let mut byte_pos = 0;
    let mut unit_pos = 0;

    for span in spans {
        let target = unit_pos + span.len;
        while unit_pos < target {
            let Some((_, ch)) = chars.next() else {
                return Err(Error::SpanOverrun {
                    covered: target,
                    len: unit_pos,
                });
            };
            unit_pos += unit.char_len(ch);
        }
        if unit_pos != target {
            return Err(Error::Misaligned { offset: target });
        }
        let end = chars.peek().map_or(text.len(), |&(i, _)| i);
        out.push(Segment {
            text: &text[byte_pos..end],
            category: span.category,
        });
        byte_pos = end;
    }

    if byte_pos < text.len() {
        return Err(Error::Uncovered {
            covered: unit_pos,
            len: unit_pos + unit.measure(&text[byte_pos..]),
        });
    }

    Ok(out)
}
