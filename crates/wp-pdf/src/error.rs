//! Error type for the rendering crate.

use thiserror::Error;

/// Errors produced while rendering or rewriting PDF documents.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Structural PDF error from lopdf.
    #[error("pdf document error: {0}")]
    Pdf(#[from] lopdf::Error),

    /// Authoring failure from printpdf (carried as a display string; the
    /// foreign error type is not `Clone` and never needs matching).
    #[error("pdf authoring failed: {0}")]
    Author(String),

    /// The page template is missing or unusable.  Fatal, the assembler
    /// needs its page size.
    #[error("template error: {0}")]
    Template(String),

    /// A source document lacks required structure (no pages, no MediaBox).
    #[error("malformed pdf: {0}")]
    Malformed(String),
}

/// Shorthand `Result` for rendering operations.
pub type Result<T, E = RenderError> = std::result::Result<T, E>;
