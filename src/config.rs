//! Configuration for the fixed-length stemmer.
//!
//! The configuration can be kept in a JSON file:
//!
//! ```json
//! { "stemmlength": 5 }
//! ```
//!
//! # Examples
//!
//! ```
//! use fixstem::analysis::token_filter::stem::Stemmer;
//! use fixstem::config::StemmerConfig;
//!
//! let config = StemmerConfig::from_json(r#"{ "stemmlength": 3 }"#).unwrap();
//! assert_eq!(config.build().stem("information"), "inf");
//!
//! let config = StemmerConfig::from_json("{}").unwrap();
//! assert_eq!(config.stem_length, 7);
//! ```

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::token_filter::stem::FixedLengthStemmer;
use crate::analysis::token_filter::stem::fixed_length::DEFAULT_STEM_LENGTH;
use crate::error::{FixStemError, Result};

/// Settings for a [`FixedLengthStemmer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StemmerConfig {
    /// Maximum number of characters kept from each word.
    #[serde(rename = "stemmlength")]
    pub stem_length: i32,
}

impl Default for StemmerConfig {
    fn default() -> Self {
        Self {
            stem_length: DEFAULT_STEM_LENGTH,
        }
    }
}

impl StemmerConfig {
    /// Parse a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading stemmer configuration from {}", path.display());

        let content = fs::read_to_string(path).map_err(|e| {
            FixStemError::config(format!("Cannot read {}: {e}", path.display()))
        })?;

        Self::from_json(&content)
    }

    /// Build a stemmer from this configuration.
    pub fn build(&self) -> FixedLengthStemmer {
        FixedLengthStemmer::with_length(self.stem_length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = StemmerConfig::default();
        assert_eq!(config.stem_length, 7);
        assert_eq!(config.build(), FixedLengthStemmer::new());
    }

    #[test]
    fn test_serialize() {
        let config = StemmerConfig { stem_length: 4 };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"stemmlength":4}"#);
    }

    #[test]
    fn test_invalid_json() {
        let result = StemmerConfig::from_json(r#"{ "stemmlength": "four" }"#);
        assert!(matches!(result, Err(FixStemError::Json(_))));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "stemmlength": 2 }}"#).unwrap();

        let config = StemmerConfig::from_file(file.path()).unwrap();
        assert_eq!(config.stem_length, 2);
    }

    #[test]
    fn test_missing_file() {
        let result = StemmerConfig::from_file("/nonexistent/fixstem.json");
        assert!(matches!(result, Err(FixStemError::Config(_))));
    }
}
