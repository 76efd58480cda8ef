//! Error types for the render crate.

use thiserror::Error;

/// Errors a painter can raise while drawing.
///
/// These are genuine rendering failures. The dispatch layer never produces them
/// for a missing style rule; it falls back to painting nothing instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PaintError {
    /// The painter's image resource could not be resolved.
    #[error("image '{0}' is not available")]
    MissingImage(String),

    /// The slice insets do not fit inside the source image.
    #[error("slice insets {insets} do not fit a {width}x{height} image")]
    InvalidSlice {
        insets: String,
        width: u32,
        height: u32,
    },

    /// The surface rejected a drawing operation.
    #[error("surface error: {0}")]
    Surface(String),
}

/// Result type for paint operations.
pub type PaintResult<T = ()> = Result<T, PaintError>;
