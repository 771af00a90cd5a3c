use thiserror::Error;

/// Errors from rendering or delivering a proposal document.
///
/// Rendering itself is total for well-formed input; `Backend` covers the
/// PDF library signalling a failure, which must surface rather than
/// produce a truncated document.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("PDF backend error: {0}")]
    Backend(String),

    #[error("Failed to deliver document: {0}")]
    Sink(String),
}
