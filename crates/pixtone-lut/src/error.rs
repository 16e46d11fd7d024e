//! LUT error types.

use thiserror::Error;

/// Result type for LUT operations.
pub type LutResult<T> = Result<T, LutError>;

/// Errors that can occur while building a curve table.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LutError {
    /// Table or control-point count is unusable.
    #[error("invalid LUT size: {0}")]
    InvalidSize(String),

    /// A control point coordinate is NaN or infinite.
    #[error("non-finite control point: ({x}, {y})")]
    NonFinite {
        /// X coordinate
        x: f32,
        /// Y coordinate
        y: f32,
    },
}
