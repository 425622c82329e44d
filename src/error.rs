//! Error types for the chromakit library

use thiserror::Error;

/// Result type alias for chromakit operations
pub type Result<T> = std::result::Result<T, ColorError>;

/// Errors reported by the color engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Malformed hex color string (wrong length or non-hex characters)
    #[error("invalid hex color {input:?}: expected 6 hex digits with an optional leading '#'")]
    InvalidFormat { input: String },

    /// Input rejected before any computation starts
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// Unrecognized harmony kind name
    #[error("unsupported harmony kind {kind:?}")]
    UnsupportedHarmonyKind { kind: String },
}
