//! Syntax highlighting engine
//!
//! Text flows one way through this module:
//! - [`Grammar`] scans the text into a lazy stream of [`Token`]s
//! - the assembler fills the gaps and emits one [`Span`] per token
//! - [`segments`] lets a renderer map spans back onto the text

mod assembler;
mod category;
mod grammar;
mod highlighter;
mod java;
mod segments;
mod span;
mod style;

pub use assembler::{assemble, SpanBuilder};
pub use category::Category;
pub use grammar::{Grammar, StringRecovery, Token, Tokens};
pub use highlighter::{compute_highlighting, compute_plain_highlighting, Highlighter};
pub use java::{DATA_STRUCTURES, KEYWORDS};
pub use segments::{segments, Segment};
pub use span::{total_len, OffsetUnit, Span};
pub use style::{Color, Style};
