//! Error types for rendering.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias for render operations.
pub type Result<T> = std::result::Result<T, RenderError>;

/// Errors that abort a single render.
///
/// Every variant is local to the canvas being rendered; batch drivers report
/// it against that output and continue with the remaining jobs. Text that runs
/// past the canvas edge is not an error (it is cropped), and a missing font is
/// handled by the fixed-width fallback instead of surfacing here.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Zero canvas size, zero gradient extent, or a non-positive radial radius.
    #[error("invalid dimension: {0}")]
    InvalidDimension(String),

    /// Degenerate shape bounds or a negative radius.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    /// A named color that the palette does not define.
    #[error("unknown palette color {0:?}")]
    UnknownColor(String),

    /// PNG encoding failed.
    #[error("failed to encode {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Creating the output directory failed.
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RenderError {
    pub(crate) fn dimension(msg: impl Into<String>) -> Self {
        RenderError::InvalidDimension(msg.into())
    }

    pub(crate) fn geometry(msg: impl Into<String>) -> Self {
        RenderError::InvalidGeometry(msg.into())
    }
}
