//! Command-line argument definitions for the svgbird CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the input interpretation, the output
//! destination, configuration file and logging verbosity.

use clap::{Parser, ValueEnum};

/// How the input literal is written into the cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum InputKind {
    /// A floating-point value, e.g. `1.5`, `-0.0`, `inf`
    #[default]
    Value,
    /// An unsigned 32-bit tag, decimal or `0x` hexadecimal
    Type,
}

/// Command-line arguments for the svgbird point value inspector
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Literal to write into the cell
    #[arg(help = "Value or tag to inspect", allow_hyphen_values = true)]
    pub input: String,

    /// Interpretation used to write the input
    #[arg(long = "as", value_enum, default_value_t = InputKind::Value)]
    pub kind: InputKind,

    /// Path to write the report to, stdout if omitted
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
