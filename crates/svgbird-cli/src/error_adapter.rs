//! Error adapter for converting [`SvgbirdError`] to miette diagnostics.
//!
//! This module provides the bridge between the CLI's error type and miette's
//! rich diagnostic formatting used by the binary.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use crate::SvgbirdError;

/// Adapter that renders an [`SvgbirdError`] as a miette diagnostic.
pub struct ErrorAdapter<'a>(pub &'a SvgbirdError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            SvgbirdError::Io(_) => "svgbird::io",
            SvgbirdError::Config(_) => "svgbird::config",
            SvgbirdError::Input { .. } => "svgbird::input",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            SvgbirdError::Input { .. } => {
                "use `--as value` for floats, `--as type` for decimal or 0x-prefixed u32 tags"
            }
            SvgbirdError::Config(_) => "see `[report]` with `radix` and `precision` keys",
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}
