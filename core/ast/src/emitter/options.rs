//! Emitter configuration.
//!
//! Options can be built in code or read from a TOML document:
//!
//! ```toml
//! indent = "\t"
//! line-separator = "\r\n"
//! blank-line-between-members = false
//! ```
//!
//! Missing keys take their default values.

use serde::{Deserialize, Serialize};

use crate::errors::EmitError;

/// Layout settings of the emitter.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct EmitOptions {
    /// One level of indentation.
    #[serde(default = "default_indent")]
    pub indent: String,

    /// Written at the end of every line.
    #[serde(default = "default_line_separator")]
    pub line_separator: String,

    /// Whether members of a type body are separated by an empty line.
    #[serde(default = "default_blank_line_between_members")]
    pub blank_line_between_members: bool,
}

fn default_indent() -> String {
    "    ".to_string()
}

fn default_line_separator() -> String {
    "\n".to_string()
}

fn default_blank_line_between_members() -> bool {
    true
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            indent: default_indent(),
            line_separator: default_line_separator(),
            blank_line_between_members: default_blank_line_between_members(),
        }
    }
}

impl EmitOptions {
    /// Parses options from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`EmitError::Options`] if the text is not valid TOML or has
    /// values of the wrong type.
    pub fn from_toml_str(text: &str) -> Result<Self, EmitError> {
        Ok(toml::from_str(text)?)
    }
}
