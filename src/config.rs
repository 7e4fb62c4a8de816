//! Configuration file support
//!
//! Loads settings from ~/.synspan.toml (or %USERPROFILE%\.synspan.toml on Windows)
//!
//! Example:
//! ```toml
//! # synspan configuration
//! enabled = true
//! offset-unit = "utf16"              # utf16 | chars | bytes
//! unterminated-string = "end-of-input" # end-of-input | end-of-line
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use toml::{Table, Value};

use crate::error::{Error, Result};
use crate::syntax::{OffsetUnit, StringRecovery};

/// Configuration settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Whether highlighting is on (off = all-gap spans)
    pub enabled: bool,
    /// Unit span lengths are reported in
    pub offset_unit: OffsetUnit,
    /// Recovery policy for unterminated string literals
    pub unterminated_string: StringRecovery,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enabled: true,
            offset_unit: OffsetUnit::Utf16,
            unterminated_string: StringRecovery::EndOfInput,
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(".synspan.toml"))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".synspan.toml"))
        }
    }

    /// Load configuration from the default location
    ///
    /// A missing file yields defaults silently; an unreadable or invalid
    /// one yields defaults with a warning.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Config::default();
        };
        if !path.exists() {
            return Config::default();
        }
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring config file");
                Config::default()
            }
        }
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse config file contents
    pub fn parse(contents: &str) -> Result<Self> {
        let table: Table = contents.parse()?;
        let mut config = Config::default();
        config.apply(&table)?;
        Ok(config)
    }

    /// Apply settings from a parsed table; unknown keys are ignored
    fn apply(&mut self, table: &Table) -> Result<()> {
        if let Some(value) = table.get("enabled") {
            self.enabled = value.as_bool().ok_or_else(|| invalid("enabled", value))?;
        }

        if let Some(value) = table.get("offset-unit") {
            self.offset_unit = value
                .as_str()
                .and_then(OffsetUnit::from_name)
                .ok_or_else(|| invalid("offset-unit", value))?;
        }

        if let Some(value) = table.get("unterminated-string") {
            self.unterminated_string = value
                .as_str()
                .and_then(StringRecovery::from_name)
                .ok_or_else(|| invalid("unterminated-string", value))?;
        }

        Ok(())
    }
}

fn invalid(key: &str, value: &Value) -> Error {
    Error::InvalidSetting {
        key: key.to_string(),
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let contents = r#"
# Comment
enabled = false
offset-unit = "chars"
unterminated-string = "end-of-line"
theme = "ignored"
        "#;

        let config = Config::parse(contents).unwrap();
        assert!(!config.enabled);
        assert_eq!(config.offset_unit, OffsetUnit::Chars);
        assert_eq!(config.unterminated_string, StringRecovery::EndOfLine);
    }

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_invalid_values() {
        let err = Config::parse("enabled = \"yes\"").unwrap_err();
        assert!(matches!(err, Error::InvalidSetting { ref key, .. } if key == "enabled"));

        let err = Config::parse("offset-unit = \"words\"").unwrap_err();
        assert!(matches!(err, Error::InvalidSetting { ref key, .. } if key == "offset-unit"));

        assert!(matches!(Config::parse("enabled = "), Err(Error::Config(_))));
    }

    #[test]
    fn test_load_from_missing_file() {
        let err = Config::load_from(Path::new("/nonexistent/synspan.toml")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
