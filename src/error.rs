//! Error types for synspan

use thiserror::Error;

/// Result type alias for synspan operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised outside the (total) highlighting engine itself
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid grammar pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("config syntax error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("invalid value for `{key}`: {value}")]
    InvalidSetting { key: String, value: String },

    #[error("spans cover {covered} units but the text ends after {len}")]
    SpanOverrun { covered: usize, len: usize },

    #[error("span boundary at unit {offset} falls inside a character")]
    Misaligned { offset: usize },

    #[error("spans cover {covered} units of a {len}-unit text")]
    Uncovered { covered: usize, len: usize },

    #[error("{0}")]
    Usage(String),
}
