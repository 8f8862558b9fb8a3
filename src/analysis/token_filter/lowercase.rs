//! Lowercase filter implementation.
//!
//! # Examples
//!
//! ```
//! use fixstem::analysis::token_filter::Filter;
//! use fixstem::analysis::token_filter::lowercase::LowercaseFilter;
//! use fixstem::analysis::token::Token;
//!
//! let tokens = vec![Token::new("Hello", 0), Token::new("WORLD", 1)];
//! let filtered: Vec<_> = LowercaseFilter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered[0].text, "hello");
//! assert_eq!(filtered[1].text, "world");
//! ```

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Lowercases each token as it is pulled from the stream.
///
/// Lowercasing may change a token's byte length; offsets keep pointing at
/// the source text.
#[derive(Clone, Copy, Debug, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    pub fn new() -> Self {
        LowercaseFilter
    }
}

impl Filter for LowercaseFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        Ok(Box::new(tokens.map(|token| {
            let lowered = token.text.to_lowercase();
            token.with_text(lowered)
        })))
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_lowercase_keeps_offsets() {
        let tokens = vec![
            Token::with_offsets("Information", 0, 0, 11),
            Token::with_offsets("ÜBER", 1, 12, 17),
        ];

        let result: Vec<Token> = LowercaseFilter::new()
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .collect();

        assert_eq!(result[0].text, "information");
        assert_eq!(result[1].text, "über");
        assert_eq!((result[1].start_offset, result[1].end_offset), (12, 17));
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(LowercaseFilter.name(), "lowercase");
    }
}
