//! Text analysis module for fixstem.
//!
//! Tokenizers split text into [`Token`]s, filters transform the token
//! stream, and stemmers reduce each word to its stem.

pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use token::*;
pub use token_filter::*;
pub use tokenizer::*;
