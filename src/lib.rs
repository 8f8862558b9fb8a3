//! # fixstem
//!
//! A fixed-length stemmer: the stem of a word is its first N characters
//! (7 by default).
//!
//! ## Features
//!
//! - [`FixedLengthStemmer`](analysis::token_filter::stem::FixedLengthStemmer)
//!   behind the generic `Stemmer` trait
//! - Uniform list / get / set option handling for CLI wiring
//! - Tokenizer and filter chain for stemming free text
//! - JSON configuration files
//! - A `fixstem` command-line tool

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod options;
pub mod stemming;

pub mod prelude {
    pub use crate::analysis::token_filter::stem::{FixedLengthStemmer, Stemmer};
    pub use crate::config::StemmerConfig;
    pub use crate::error::{FixStemError, Result};
    pub use crate::options::OptionHandler;
    pub use crate::stemming::Stemming;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
