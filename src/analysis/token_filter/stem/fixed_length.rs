//! Fixed-length stemmer implementation.
//!
//! The stem of a word is its first `stemmlength` characters. Words that are
//! already short enough are returned unchanged.
//!
//! # Examples
//!
//! ```
//! use fixstem::analysis::token_filter::stem::{FixedLengthStemmer, Stemmer};
//!
//! let mut stemmer = FixedLengthStemmer::new();
//! assert_eq!(stemmer.stem("information"), "informa");
//!
//! stemmer.set_stem_length(3);
//! assert_eq!(stemmer.stem("information"), "inf");
//! assert_eq!(stemmer.stem("cat"), "cat");
//! ```

use std::fmt;

use log::debug;

use super::Stemmer;
use crate::error::{FixStemError, Result};
use crate::options::{OptionHandler, OptionSpec, take_option};

/// Stem length used when none is configured.
pub const DEFAULT_STEM_LENGTH: i32 = 7;

/// Name of the option controlling the stem length.
pub const STEM_LENGTH_OPTION: &str = "stemmlength";

/// Stemmer that truncates words to a fixed number of characters.
///
/// Length is counted in Unicode scalar values, so a stem never splits a
/// multi-byte character. The length is not validated: zero or a negative
/// value makes every stem empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedLengthStemmer {
    length: i32,
}

impl FixedLengthStemmer {
    /// Create a stemmer with the default length of 7.
    pub fn new() -> Self {
        FixedLengthStemmer {
            length: DEFAULT_STEM_LENGTH,
        }
    }

    /// Create a stemmer with the given length.
    pub fn with_length(length: i32) -> Self {
        FixedLengthStemmer { length }
    }

    /// Get the stem length.
    pub fn stem_length(&self) -> i32 {
        self.length
    }

    /// Set the stem length.
    pub fn set_stem_length(&mut self, length: i32) {
        self.length = length;
    }

    /// Tip text for the stem length property.
    pub fn stem_length_tip_text(&self) -> &'static str {
        "Maximum number of characters kept from each word."
    }

    /// Short description of this stemmer.
    pub fn global_info(&self) -> &'static str {
        "A simple stemmer that performs a fix length stemming."
    }

    /// Revision of this stemmer, tied to the crate version.
    pub fn revision(&self) -> &'static str {
        crate::VERSION
    }
}

impl Default for FixedLengthStemmer {
    fn default() -> Self {
        Self::new()
    }
}

impl Stemmer for FixedLengthStemmer {
    fn stem(&self, word: &str) -> String {
        let Ok(limit) = usize::try_from(self.length) else {
            return String::new();
        };

        match word.char_indices().nth(limit) {
            Some((end, _)) => word[..end].to_string(),
            None => word.to_string(),
        }
    }

    fn name(&self) -> &'static str {
        "fixed_length"
    }
}

impl OptionHandler for FixedLengthStemmer {
    fn list_options(&self) -> Vec<OptionSpec> {
        vec![OptionSpec::new(
            STEM_LENGTH_OPTION,
            "-stemmlength <value>",
            "Length of the stem (default 7).",
            1,
        )]
    }

    fn set_options(&mut self, options: &mut Vec<String>) -> Result<()> {
        match take_option(STEM_LENGTH_OPTION, options)? {
            Some(value) if !value.is_empty() => {
                let length = value.parse::<i32>().map_err(|e| {
                    FixStemError::parse(format!(
                        "Invalid value '{value}' for -{STEM_LENGTH_OPTION}: {e}"
                    ))
                })?;
                self.set_stem_length(length);
            }
            _ => self.set_stem_length(DEFAULT_STEM_LENGTH),
        }

        debug!("{} stem length set to {}", self.name(), self.length);

        Ok(())
    }

    fn options(&self) -> Vec<String> {
        vec![format!("-{STEM_LENGTH_OPTION}"), self.length.to_string()]
    }
}

impl fmt::Display for FixedLengthStemmer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", std::any::type_name::<Self>())
    }
}
