//! Error adapter for converting GlintError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error
//! types and miette's rich diagnostic formatting used in the CLI. Glint
//! errors carry no source spans, so the adapter contributes a stable code
//! and a help hint per variant.

use std::fmt;

use miette::Diagnostic as MietteDiagnostic;

use glint::GlintError;

/// Adapter wrapping a [`GlintError`] for miette rendering.
pub struct ErrorAdapter<'a> {
    err: &'a GlintError,
}

impl<'a> ErrorAdapter<'a> {
    pub fn new(err: &'a GlintError) -> Self {
        Self { err }
    }
}

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorAdapter").field("err", &self.err).finish()
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.err)
    }
}

impl std::error::Error for ErrorAdapter<'_> {}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'b>(&'b self) -> Option<Box<dyn fmt::Display + 'b>> {
        let code = match self.err {
            GlintError::Io(_) => "glint::io",
            GlintError::Config(_) => "glint::config",
            GlintError::Export(_) => "glint::export",
        };
        Some(Box::new(code))
    }

    fn help<'b>(&'b self) -> Option<Box<dyn fmt::Display + 'b>> {
        let help: &str = match self.err {
            GlintError::Io(_) => "check that the input and output paths are readable and writable",
            GlintError::Config(_) => {
                "check the field dimensions, margin, item sizes, and config file values"
            }
            GlintError::Export(_) => "check the style configuration, such as the background color",
        };
        Some(Box::new(help))
    }
}
