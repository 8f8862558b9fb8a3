//! Command line argument parsing for the fixstem CLI using clap.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::analysis::token_filter::stem::fixed_length::STEM_LENGTH_OPTION;

/// fixstem - reduce every word of a text to a fixed-length stem
#[derive(Parser, Debug, Clone)]
#[command(name = "fixstem")]
#[command(about = "Reduce every word of a text to a fixed-length stem")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct FixStemArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Length of the stem (default 7); also accepted as -stemmlength
    #[arg(long = "stemmlength", value_name = "N", allow_hyphen_values = true)]
    pub stem_length: Option<String>,

    /// Input file (defaults to stdin)
    #[arg(short = 'i', long = "input", value_name = "FILE", allow_hyphen_values = true)]
    pub input: Option<PathBuf>,

    /// Output file (defaults to stdout)
    #[arg(short = 'o', long = "output", value_name = "FILE", allow_hyphen_values = true)]
    pub output: Option<PathBuf>,

    /// Lowercase words before stemming
    #[arg(short = 'l', long = "lowercase")]
    pub lowercase: bool,

    /// Stemmer configuration file (JSON)
    #[arg(short = 'c', long = "config", value_name = "FILE", allow_hyphen_values = true)]
    pub config: Option<PathBuf>,

    /// List the options the stemmer understands and exit
    #[arg(long)]
    pub list_options: bool,

    /// Print the stemmer's current options and exit
    #[arg(long)]
    pub show_options: bool,
}

impl FixStemArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }

    /// Parse the process arguments, accepting the single-dash `-stemmlength`.
    pub fn parse_normalized() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// The input text with every word replaced by its stem
    Human,
    /// JSON output
    Json,
}

/// Flags whose next argument is a value rather than a flag.
const VALUE_FLAGS: &[&str] = &[
    "-i",
    "--input",
    "-o",
    "--output",
    "-c",
    "--config",
    "-f",
    "--format",
    "--stemmlength",
];

/// Rewrite the single-dash `-stemmlength` flag into its long form.
///
/// Only arguments in flag position are rewritten: values of other flags and
/// everything after `--` pass through unchanged.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let legacy = format!("-{STEM_LENGTH_OPTION}");
    let mut expects_value = false;
    let mut after_separator = false;

    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if after_separator || expects_value {
                expects_value = false;
                return arg;
            }

            if arg == "--" {
                after_separator = true;
                return arg;
            }

            let arg = if arg == legacy.as_str() {
                OsString::from(format!("--{STEM_LENGTH_OPTION}"))
            } else {
                arg
            };
            expects_value = arg.to_str().is_some_and(|flag| VALUE_FLAGS.contains(&flag));
            arg
        })
        .collect()
}
