//! Error type for the svgbird CLI.

use std::io;

use thiserror::Error;

use crate::config::ConfigError;

/// Errors produced while inspecting a point value
#[derive(Debug, Error)]
pub enum SvgbirdError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid input `{input}`: {reason}")]
    Input { input: String, reason: String },
}

impl SvgbirdError {
    /// Create an input error for a literal that could not be parsed.
    pub fn new_input_error(input: impl Into<String>, reason: impl ToString) -> Self {
        Self::Input {
            input: input.into(),
            reason: reason.to_string(),
        }
    }
}
