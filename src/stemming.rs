//! Runs a stemmer over free text.
//!
//! Each line is tokenized into words, the words go through the filter chain
//! (optional lowercasing, then stemming) and the stems are spliced back into
//! the line. Everything between words, including line endings, is copied
//! unchanged.
//!
//! # Examples
//!
//! ```
//! use fixstem::analysis::token_filter::stem::FixedLengthStemmer;
//! use fixstem::stemming::Stemming;
//!
//! let stemming = Stemming::new(Box::new(FixedLengthStemmer::with_length(4))).unwrap();
//! let (line, words) = stemming.stem_line("Stemming, briefly: cut words.").unwrap();
//!
//! assert_eq!(line, "Stem, brie: cut word.");
//! assert_eq!(words, 4);
//! ```

use std::borrow::Cow;
use std::io::{BufRead, Read, Write};

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::stem::{StemFilter, Stemmer};
use crate::analysis::token_filter::{Filter, LowercaseFilter};
use crate::analysis::tokenizer::{RegexTokenizer, Tokenizer};
use crate::error::Result;

/// A word together with its stem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StemmedWord {
    pub word: String,
    pub stem: String,
}

/// Tokenizes text and replaces every word with its stem.
pub struct Stemming {
    tokenizer: RegexTokenizer,
    filters: Vec<Box<dyn Filter>>,
    lowercase: bool,
}

impl std::fmt::Debug for Stemming {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let filters: Vec<&str> = self.filters.iter().map(|filter| filter.name()).collect();
        f.debug_struct("Stemming")
            .field("tokenizer", &self.tokenizer.pattern())
            .field("filters", &filters)
            .finish()
    }
}

impl Stemming {
    /// Create a runner for the given stemmer.
    pub fn new(stemmer: Box<dyn Stemmer>) -> Result<Self> {
        Ok(Stemming {
            tokenizer: RegexTokenizer::new()?,
            filters: vec![Box::new(StemFilter::with_stemmer(stemmer))],
            lowercase: false,
        })
    }

    /// Lowercase words before stemming them.
    pub fn lowercase(mut self, lowercase: bool) -> Self {
        if lowercase && !self.lowercase {
            self.filters.insert(0, Box::new(LowercaseFilter::new()));
        } else if !lowercase && self.lowercase {
            self.filters.remove(0);
        }
        self.lowercase = lowercase;
        self
    }

    /// Whether words are lowercased before stemming.
    pub fn is_lowercase(&self) -> bool {
        self.lowercase
    }

    fn analyze(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = self.tokenizer.tokenize(text)?;
        for filter in &self.filters {
            tokens = filter.filter(tokens)?;
        }
        Ok(tokens)
    }

    /// Stem every word in `line`, returning the new line and the word count.
    pub fn stem_line(&self, line: &str) -> Result<(String, usize)> {
        let mut output = String::with_capacity(line.len());
        let mut last_end = 0;
        let mut words = 0;

        for token in self.analyze(line)? {
            output.push_str(&line[last_end..token.start_offset]);
            output.push_str(&token.text);
            last_end = token.end_offset;
            words += 1;
        }
        output.push_str(&line[last_end..]);

        Ok((output, words))
    }

    /// Every word of `text` paired with its stem, in order.
    pub fn stem_words(&self, text: &str) -> Result<Vec<StemmedWord>> {
        Ok(self
            .analyze(text)?
            .map(|token| StemmedWord {
                word: text[token.start_offset..token.end_offset].to_string(),
                stem: token.text,
            })
            .collect())
    }

    /// Stem everything read from `reader` and write it to `writer`.
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD instead of
    /// aborting the run. Returns the number of words stemmed.
    pub fn run<R: BufRead, W: Write>(&self, mut reader: R, mut writer: W) -> Result<usize> {
        let mut buf = Vec::new();
        let mut lines = 0;
        let mut words = 0;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }

            let line = String::from_utf8_lossy(&buf);
            if let Cow::Owned(_) = line {
                warn!("Replaced invalid UTF-8 on line {}", lines + 1);
            }

            let (stemmed, count) = self.stem_line(&line)?;
            writer.write_all(stemmed.as_bytes())?;
            lines += 1;
            words += count;
        }
        writer.flush()?;

        debug!("Processed {lines} lines");
        info!("Stemmed {words} words");

        Ok(words)
    }
}

/// Read all of `reader` as text, replacing invalid UTF-8 with U+FFFD.
pub fn read_text_lossy<R: Read>(mut reader: R) -> Result<String> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            warn!("Replaced invalid UTF-8 in input");
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    })
}
