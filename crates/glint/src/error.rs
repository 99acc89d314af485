//! Error types for Glint operations.
//!
//! This module provides the main error type [`GlintError`] which wraps the
//! error conditions that can occur while laying out and rendering a field.

use std::io;

use thiserror::Error;

use glint_core::geometry::FieldError;

/// The main error type for Glint operations.
///
/// Configuration errors cover invalid geometry (degenerate fields, items
/// larger than the field interior); export errors cover rendering failures
/// such as an unparsable style color. Crowded fields are deliberately *not*
/// an error: placement degrades to best-effort slots instead (see
/// [`crate::layout::Slot::resolved`]).
#[derive(Debug, Error)]
pub enum GlintError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error + Send + Sync>),
}

impl From<FieldError> for GlintError {
    fn from(error: FieldError) -> Self {
        Self::Config(error.to_string())
    }
}
