//! Combined lexical grammar
//!
//! All category rules are joined into one alternation of named groups,
//! in precedence order, and compiled once. The regex engine resolves
//! alternations leftmost-first and matches in linear time, so a single
//! left-to-right scan gives "earliest start wins, ties go to the rule
//! declared first" without any backtracking hazard on long comments or
//! strings.

use std::sync::OnceLock;

use regex::{CaptureMatches, Regex};

use super::category::Category;
use super::java;
use crate::error::Result;

/// How an unterminated string literal is recovered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StringRecovery {
    /// The literal runs to the end of the input
    #[default]
    EndOfInput,
    /// The literal stops before the first raw newline
    EndOfLine,
}

impl StringRecovery {
    /// Config name of this policy
    pub fn name(&self) -> &'static str {
        match self {
            StringRecovery::EndOfInput => "end-of-input",
            StringRecovery::EndOfLine => "end-of-line",
        }
    }

    /// Parse a policy from its config name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "end-of-input" => Some(StringRecovery::EndOfInput),
            "end-of-line" => Some(StringRecovery::EndOfLine),
            _ => None,
        }
    }
}

/// A single lexical match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    /// Byte offset where the match starts (inclusive)
    pub start: usize,
    /// Byte offset where the match ends (exclusive)
    pub end: usize,
    /// Category of the matching rule
    pub category: Category,
}

impl Token {
    /// Length of the match in bytes
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Tokens are never empty; provided for API symmetry
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// The matched text
    pub fn text<'t>(&self, source: &'t str) -> &'t str {
        &source[self.start..self.end]
    }
}

/// Compiled, immutable highlighting grammar
#[derive(Debug, Clone)]
pub struct Grammar {
    pattern: Regex,
    recovery: StringRecovery,
}

static SHARED: OnceLock<Grammar> = OnceLock::new();

impl Grammar {
    /// Compile the Java grammar with the given string recovery policy
    pub fn java(recovery: StringRecovery) -> Result<Self> {
        let alternatives: Vec<String> = Category::ALL
            .iter()
            .map(|&c| format!("(?P<{}>{})", c.style_class(), java::rule(c, recovery)))
            .collect();
        let pattern = Regex::new(&alternatives.join("|"))?;
        tracing::debug!(recovery = recovery.name(), "compiled highlighting grammar");
        Ok(Self { pattern, recovery })
    }

    /// Process-wide default grammar (unterminated strings run to end of input)
    pub fn shared() -> &'static Grammar {
        SHARED.get_or_init(|| {
            Grammar::java(StringRecovery::EndOfInput).expect("built-in grammar must compile")
        })
    }

    /// String recovery policy this grammar was built with
    pub fn recovery(&self) -> StringRecovery {
        self.recovery
    }

    /// Lazily scan `text`, yielding tokens left to right
    pub fn tokens<'g, 't>(&'g self, text: &'t str) -> Tokens<'g, 't> {
        Tokens {
            captures: self.pattern.captures_iter(text),
        }
    }
}

/// Lazy token stream over a text
pub struct Tokens<'g, 't> {
    captures: CaptureMatches<'g, 't>,
}

impl Iterator for Tokens<'_, '_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            let caps = self.captures.next()?;
            // Group i + 1 belongs to Category::ALL[i]
            let token = Category::ALL.iter().enumerate().find_map(|(i, &category)| {
                caps.get(i + 1).map(|m| Token {
                    start: m.start(),
                    end: m.end(),
                    category,
                })
            });
            match token {
                Some(token) if !token.is_empty() => return Some(token),
                _ => continue,
            }
        }
    }
}
