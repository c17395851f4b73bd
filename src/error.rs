// ABOUTME: Typed errors for widget configuration and rendering.
// ABOUTME: MissingRequiredField names the offending field at the construction boundary.

use thiserror::Error;

/// Errors surfaced by the widget library.
#[derive(Debug, Error)]
pub enum Error {
    /// A required configuration field was absent or empty.
    #[error("missing required field: {field}")]
    MissingRequiredField { field: &'static str },

    /// Template rendering failed.
    #[error("template error: {0}")]
    Template(#[from] askama::Error),
}
