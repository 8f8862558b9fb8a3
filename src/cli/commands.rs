//! Command implementations for the fixstem CLI.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

use log::{debug, info};

use crate::analysis::token_filter::stem::FixedLengthStemmer;
use crate::analysis::token_filter::stem::fixed_length::STEM_LENGTH_OPTION;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::StemmerConfig;
use crate::error::Result;
use crate::options::OptionHandler;
use crate::stemming::{Stemming, read_text_lossy};

/// Execute the CLI.
pub fn execute_command(args: FixStemArgs) -> Result<()> {
    let stemmer = build_stemmer(&args)?;

    if args.list_options {
        return list_options(&stemmer, &args);
    }
    if args.show_options {
        return show_options(&stemmer, &args);
    }

    stem_text(stemmer, &args)
}

/// Build the stemmer from the config file and command line.
///
/// A `-stemmlength` on the command line overrides the config file.
pub fn build_stemmer(args: &FixStemArgs) -> Result<FixedLengthStemmer> {
    let mut stemmer = match &args.config {
        Some(path) => StemmerConfig::from_file(path)?.build(),
        None => FixedLengthStemmer::new(),
    };

    if let Some(value) = &args.stem_length {
        let mut options = vec![format!("-{STEM_LENGTH_OPTION}"), value.clone()];
        stemmer.set_options(&mut options)?;
    }

    debug!("Using {stemmer} with options {:?}", stemmer.options());

    Ok(stemmer)
}

fn list_options(stemmer: &FixedLengthStemmer, args: &FixStemArgs) -> Result<()> {
    let listing = OptionsListing {
        stemmer: stemmer.to_string(),
        revision: stemmer.revision().to_string(),
        global_info: stemmer.global_info().to_string(),
        options: stemmer.list_options(),
    };

    let mut writer = open_output(&args.output)?;
    output_options_listing(&mut writer, &listing, args)?;
    writer.flush()?;
    Ok(())
}

fn show_options(stemmer: &FixedLengthStemmer, args: &FixStemArgs) -> Result<()> {
    let mut writer = open_output(&args.output)?;
    output_options(&mut writer, &stemmer.options(), args)?;
    writer.flush()?;
    Ok(())
}

/// Stem the input text and write the result.
fn stem_text(stemmer: FixedLengthStemmer, args: &FixStemArgs) -> Result<()> {
    let stemmer_name = stemmer.to_string();
    let options = stemmer.options();
    let stemming = Stemming::new(Box::new(stemmer))?.lowercase(args.lowercase);

    let reader = open_input(&args.input)?;
    let mut writer = open_output(&args.output)?;

    match args.output_format {
        OutputFormat::Human => {
            stemming.run(reader, &mut writer)?;
        }
        OutputFormat::Json => {
            let text = read_text_lossy(reader)?;

            let result = StemmingResult {
                stemmer: stemmer_name,
                options,
                words: stemming.stem_words(&text)?,
            };
            info!("Stemmed {} words", result.words.len());

            output_json(&mut writer, &result, args)?;
            writer.flush()?;
        }
    }

    Ok(())
}

fn open_input(path: &Option<PathBuf>) -> Result<Box<dyn BufRead>> {
    match path {
        Some(path) => {
            debug!("Reading from {}", path.display());
            Ok(Box::new(BufReader::new(File::open(path)?)))
        }
        None => Ok(Box::new(BufReader::new(io::stdin()))),
    }
}

fn open_output(path: &Option<PathBuf>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            debug!("Writing to {}", path.display());
            Ok(Box::new(BufWriter::new(File::create(path)?)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout()))),
    }
}
