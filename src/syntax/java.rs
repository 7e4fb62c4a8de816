//! Java lexical rules
//!
//! One pattern per category. Every alternative consumes at least one
//! character, and all inner groups are non-capturing so the combined
//! grammar's only capture groups are the per-category ones.

use super::category::Category;
use super::grammar::StringRecovery;

/// Java reserved words
pub const KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class",
    "const", "continue", "default", "do", "double", "else", "enum", "extends", "final",
    "finally", "float", "for", "goto", "if", "implements", "import", "instanceof", "int",
    "interface", "long", "native", "new", "package", "private", "protected", "public",
    "return", "short", "static", "strictfp", "super", "switch", "synchronized", "this",
    "throw", "throws", "transient", "try", "void", "volatile", "while",
];

/// Common collection type names
pub const DATA_STRUCTURES: &[&str] = &[
    "List", "ArrayList", "LinkedList", "Set", "HashSet", "TreeSet",
    "Map", "HashMap", "TreeMap", "Queue", "Deque", "Stack",
    "Vector", "Hashtable", "ConcurrentHashMap",
];

/// Word-bounded alternation over a fixed vocabulary
fn vocabulary(words: &[&str]) -> String {
    let alternatives: Vec<String> = words.iter().map(|w| regex::escape(w)).collect();
    format!(r"\b(?:{})\b", alternatives.join("|"))
}

/// String literal: escapes swallow the next character, raw newlines end the body
fn string_literal(recovery: StringRecovery) -> String {
    let terminated = r#""(?:[^"\\\n]|\\(?s:.))*""#;
    let unterminated = match recovery {
        StringRecovery::EndOfInput => r#""(?s:.)*"#,
        // A trailing lone backslash still belongs to the literal
        StringRecovery::EndOfLine => r#""(?:[^\\\n]|\\(?s:.)?)*"#,
    };
    format!("{}|{}", terminated, unterminated)
}

/// Pattern for a single category
pub fn rule(category: Category, recovery: StringRecovery) -> String {
    match category {
        Category::Keyword => vocabulary(KEYWORDS),
        Category::DataStructure => vocabulary(DATA_STRUCTURES),
        Category::Paren => r"[()]".to_string(),
        Category::Brace => r"[{}]".to_string(),
        Category::Bracket => r"[\[\]]".to_string(),
        Category::Semicolon => ";".to_string(),
        Category::String => string_literal(recovery),
        // Line comment, closed block comment, then unterminated block comment
        Category::Comment => r"//[^\n]*|/\*(?s:.)*?\*/|/\*(?s:.)*".to_string(),
        Category::Number => r"\b[0-9]+(?:\.[0-9]+)?\b".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    fn anchored(category: Category) -> Regex {
        Regex::new(&format!("^(?:{})", rule(category, StringRecovery::EndOfInput))).unwrap()
    }

    #[test]
    fn test_vocabularies_are_identifiers() {
        for word in KEYWORDS.iter().chain(DATA_STRUCTURES) {
            assert!(word.chars().all(|c| c.is_ascii_alphabetic()), "{word}");
        }
    }

    #[test]
    fn test_every_rule_compiles() {
        for category in Category::ALL {
            for recovery in [StringRecovery::EndOfInput, StringRecovery::EndOfLine] {
                assert!(Regex::new(&rule(category, recovery)).is_ok(), "{category:?}");
            }
        }
    }

    #[test]
    fn test_keyword_prefers_whole_word() {
        let re = anchored(Category::Keyword);
        // "do" is listed before "double" but the boundary forces the longer word
        assert_eq!(re.find("double x").map(|m| m.as_str()), Some("double"));
        assert!(re.find("doubled").is_none());
    }

    #[test]
    fn test_rules_have_no_capture_groups() {
        for category in Category::ALL {
            let re = Regex::new(&rule(category, StringRecovery::EndOfLine)).unwrap();
            assert_eq!(re.captures_len(), 1, "{category:?}");
        }
    }
}
