//! Error types for the fixstem library.
//!
//! All errors are represented by the [`FixStemError`] enum. Stemming itself
//! never fails; errors come from option parsing, configuration loading and
//! the I/O done by the stemming runner.
//!
//! # Examples
//!
//! ```
//! use fixstem::error::{FixStemError, Result};
//!
//! fn parse_length(value: &str) -> Result<i32> {
//!     value
//!         .parse()
//!         .map_err(|_| FixStemError::parse(format!("not an integer: {value}")))
//! }
//!
//! assert!(parse_length("abc").is_err());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for fixstem operations.
#[derive(Error, Debug)]
pub enum FixStemError {
    /// I/O errors (input/output files, stdin, stdout)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Option values that could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// Analysis-related errors (tokenization, filtering)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with FixStemError.
pub type Result<T> = std::result::Result<T, FixStemError>;

impl FixStemError {
    /// Create a new parse error.
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        FixStemError::Parse(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        FixStemError::Analysis(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        FixStemError::Config(msg.into())
    }
}
