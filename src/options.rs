//! Uniform option handling for configurable analysis components.
//!
//! Components that expose command-line style settings implement
//! [`OptionHandler`]. A runner can then list the options a component
//! understands, hand it the raw argument list, and export the current
//! settings back as arguments.
//!
//! Options use the single-dash form `-name value`.
//!
//! # Examples
//!
//! ```
//! use fixstem::options::take_option;
//!
//! let mut args = vec!["-stemmlength".to_string(), "5".to_string(), "-l".to_string()];
//! let value = take_option("stemmlength", &mut args).unwrap();
//!
//! assert_eq!(value.as_deref(), Some("5"));
//! assert_eq!(args, vec!["-l".to_string()]);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{FixStemError, Result};

/// Description of a single option understood by an [`OptionHandler`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionSpec {
    /// Option name without the leading dash.
    pub name: String,
    /// Usage synopsis, e.g. `-stemmlength <value>`.
    pub synopsis: String,
    /// Human readable description.
    pub description: String,
    /// Number of values following the flag.
    pub num_arguments: usize,
}

impl OptionSpec {
    pub fn new<S: Into<String>>(
        name: S,
        synopsis: S,
        description: S,
        num_arguments: usize,
    ) -> Self {
        OptionSpec {
            name: name.into(),
            synopsis: synopsis.into(),
            description: description.into(),
            num_arguments,
        }
    }
}

impl fmt::Display for OptionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n    {}", self.synopsis, self.description)
    }
}

/// Components configurable through a flat list of string options.
pub trait OptionHandler {
    /// All options this component recognizes.
    fn list_options(&self) -> Vec<OptionSpec>;

    /// Set every option from the given list.
    ///
    /// Recognized flags and their values are removed from `options`; the
    /// rest is left for other handlers. Options missing from the list are
    /// reset to their defaults, so settings cannot be applied incrementally.
    fn set_options(&mut self, options: &mut Vec<String>) -> Result<()>;

    /// The current settings, in a form accepted by [`OptionHandler::set_options`].
    fn options(&self) -> Vec<String>;
}

/// Remove `-name value` from `options` and return the value.
///
/// Returns `Ok(None)` when the flag is absent and a parse error when the flag
/// is the last entry and has no value.
pub fn take_option(name: &str, options: &mut Vec<String>) -> Result<Option<String>> {
    let flag = format!("-{name}");
    let Some(index) = options.iter().position(|option| *option == flag) else {
        return Ok(None);
    };

    if index + 1 >= options.len() {
        return Err(FixStemError::parse(format!(
            "No value given for {flag} option."
        )));
    }

    let value = options.remove(index + 1);
    options.remove(index);

    Ok(Some(value))
}
