//! synspan - lexical highlighting for editor buffers
//!
//! Scans the full text of a document and returns a list of styled
//! spans that partition it, ready to be applied to a display buffer
//! after every edit.
//!
//! ```
//! use synspan::{compute_highlighting, Category, Span};
//!
//! let spans = compute_highlighting("class Foo;");
//! assert_eq!(spans[0], Span::styled(5, Category::Keyword));
//! ```

pub mod config;
pub mod error;
pub mod syntax;

pub use config::Config;
pub use error::{Error, Result};
pub use syntax::{
    compute_highlighting, compute_plain_highlighting, segments, Category, Grammar, Highlighter,
    OffsetUnit, Segment, Span, Token,
};
