//! Output formatting for CLI commands.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::cli::args::{FixStemArgs, OutputFormat};
use crate::error::Result;
use crate::options::OptionSpec;
use crate::stemming::StemmedWord;

/// Result structure for a stemming run in JSON mode.
#[derive(Debug, Serialize, Deserialize)]
pub struct StemmingResult {
    pub stemmer: String,
    pub options: Vec<String>,
    pub words: Vec<StemmedWord>,
}

/// The options a stemmer understands.
#[derive(Debug, Serialize, Deserialize)]
pub struct OptionsListing {
    pub stemmer: String,
    pub revision: String,
    pub global_info: String,
    pub options: Vec<OptionSpec>,
}

/// Write a serializable value as JSON, followed by a newline.
pub fn output_json<T: Serialize, W: Write>(writer: &mut W, result: &T, args: &FixStemArgs) -> Result<()> {
    if args.pretty {
        serde_json::to_writer_pretty(&mut *writer, result)?;
    } else {
        serde_json::to_writer(&mut *writer, result)?;
    }
    writeln!(writer)?;
    Ok(())
}

/// Write the option listing in the selected format.
pub fn output_options_listing<W: Write>(
    writer: &mut W,
    listing: &OptionsListing,
    args: &FixStemArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(writer, listing, args),
        OutputFormat::Human => {
            writeln!(writer, "{} (revision {})", listing.stemmer, listing.revision)?;
            writeln!(writer, "{}", listing.global_info)?;
            writeln!(writer)?;
            writeln!(writer, "Options:")?;
            for option in &listing.options {
                writeln!(writer, "  {option}")?;
            }
            Ok(())
        }
    }
}

/// Write current option settings in the selected format.
pub fn output_options<W: Write>(writer: &mut W, options: &[String], args: &FixStemArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(writer, &options, args),
        OutputFormat::Human => {
            writeln!(writer, "{}", options.join(" "))?;
            Ok(())
        }
    }
}
