//! CLI logic for the svgbird point value inspector.
//!
//! The tool writes a literal into a zeroed point cell under one
//! interpretation and reports what the storage reads back as under both.

pub mod config;
pub mod error_adapter;
pub mod report;

mod args;
mod error;

pub use args::{Args, InputKind};
pub use error::SvgbirdError;

use std::fs;

use log::info;

/// Run the svgbird CLI application
///
/// Loads configuration, parses the input literal, renders the report and
/// writes it to the output file or stdout.
///
/// # Errors
///
/// Returns `SvgbirdError` for:
/// - Configuration loading errors
/// - Invalid input literals
/// - File I/O errors
pub fn run(args: &Args) -> Result<(), SvgbirdError> {
    info!(input = args.input, kind:? = args.kind; "Inspecting point value");

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // Parse input and render the report
    let point = report::parse_input(&args.input, args.kind)?;
    let report = report::render(point, &app_config.report);

    // Write report to the output file or stdout
    match &args.output {
        Some(output) => {
            fs::write(output, &report)?;
            info!(output_file = output; "Report written");
        }
        None => print!("{report}"),
    }

    Ok(())
}
