//! Error types for statement rendering.

/// Errors that can occur while rendering a statement.
///
/// Model construction never fails: malformed input flows through to the
/// rendered text unchanged and final validation is the database's job.
/// Rendering is fallible only where a collaborator can genuinely fail.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// A fragment collaborator failed to produce its SQL text.
    #[error("Failed to render SQL fragment: {0}")]
    Fragment(String),
}

/// Result type for rendering operations.
pub type Result<T> = std::result::Result<T, RenderError>;
