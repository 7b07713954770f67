//! Error types for the color-studio core.

use thiserror::Error;

/// Result alias used throughout the core.
pub type Result<T> = std::result::Result<T, ColorError>;

/// Errors produced by color parsing, palette generation, and selector lookup.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    /// A color string could not be parsed as hex, rgb(), hsl(), or a named color.
    #[error("invalid color format: {0:?}")]
    InvalidColorFormat(String),

    /// A scheme parameter was outside its allowed range.
    #[error("invalid parameter '{name}': {value} is outside {min}..={max}")]
    InvalidParameter {
        name: String,
        value: i64,
        min: i64,
        max: i64,
    },

    /// A scheme name did not match any known harmony scheme.
    #[error("unknown scheme: {0}")]
    UnknownScheme(String),

    /// A format name did not match any known color format.
    #[error("unknown color format: {0}")]
    UnknownFormat(String),

    /// An export format name did not match any known snippet format.
    #[error("unknown export format: {0}")]
    UnknownExportFormat(String),
}

impl ColorError {
    /// Whether a caller can keep its last valid state and carry on.
    ///
    /// Malformed in-progress input and out-of-range parameters are expected
    /// during interactive use; unknown selectors indicate a caller bug.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ColorError::InvalidColorFormat(_) | ColorError::InvalidParameter { .. }
        )
    }
}
