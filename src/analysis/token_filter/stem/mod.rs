//! Stemming token filter and stemmer implementations.

use std::fmt;
use std::sync::Arc;

use super::Filter;
use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for stemming algorithms.
pub trait Stemmer: Send + Sync {
    /// Stem a word to its root form.
    fn stem(&self, word: &str) -> String;

    /// Get the name of this stemmer.
    fn name(&self) -> &'static str;
}

pub mod fixed_length;

pub use fixed_length::FixedLengthStemmer;

/// Replaces the text of every token with its stem.
///
/// The stemmer is shared with the returned stream, so tokens are stemmed
/// lazily as the stream is consumed.
#[derive(Clone)]
pub struct StemFilter {
    stemmer: Arc<dyn Stemmer>,
}

impl fmt::Debug for StemFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StemFilter")
            .field("stemmer", &self.stemmer.name())
            .finish()
    }
}

impl StemFilter {
    /// A filter using a [`FixedLengthStemmer`] with the default length.
    pub fn new() -> Self {
        Self::with_stemmer(Box::new(FixedLengthStemmer::new()))
    }

    pub fn with_stemmer(stemmer: Box<dyn Stemmer>) -> Self {
        StemFilter {
            stemmer: Arc::from(stemmer),
        }
    }

    /// The stemmer applied by this filter.
    pub fn stemmer(&self) -> &dyn Stemmer {
        self.stemmer.as_ref()
    }
}

impl Default for StemFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StemFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let stemmer = Arc::clone(&self.stemmer);
        Ok(Box::new(tokens.map(move |token| {
            let stem = stemmer.stem(&token.text);
            token.with_text(stem)
        })))
    }

    fn name(&self) -> &'static str {
        "stem"
    }
}
