//! Error types for pixtone-core operations.
//!
//! Only buffer construction and explicit bounds-checked access can fail.
//! Once an [`RgbaBufferMut`](crate::RgbaBufferMut) exists, every filter in the
//! workspace runs to completion without returning an error.
//!
//! # Usage
//!
//! ```rust
//! use pixtone_core::{Error, RgbaBufferMut};
//!
//! let mut data = vec![0u8; 10];
//! let err = RgbaBufferMut::new(&mut data, 2, 2).unwrap_err();
//! assert!(matches!(err, Error::BufferSizeMismatch { expected: 16, got: 10 }));
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or indexing a pixel buffer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Buffer length does not equal `width * height * 4`.
    #[error("buffer size mismatch: expected {expected} bytes, got {got}")]
    BufferSizeMismatch {
        /// Expected byte count
        expected: usize,
        /// Actual byte count
        got: usize,
    },

    /// Dimensions cannot describe an addressable buffer.
    ///
    /// Returned when `width * height * 4` overflows `usize`.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Reason why dimensions are invalid
        reason: String,
    },

    /// Channel coordinates are outside the buffer.
    #[error("channel {c} of pixel ({x}, {y}) out of bounds for image {width}x{height}")]
    OutOfBounds {
        /// X coordinate
        x: u32,
        /// Y coordinate
        y: u32,
        /// Channel index
        c: usize,
        /// Image width
        width: u32,
        /// Image height
        height: u32,
    },
}

impl Error {
    /// Creates an [`Error::BufferSizeMismatch`] error.
    #[inline]
    pub fn size_mismatch(expected: usize, got: usize) -> Self {
        Self::BufferSizeMismatch { expected, got }
    }

    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::OutOfBounds`] error.
    #[inline]
    pub fn out_of_bounds(x: u32, y: u32, c: usize, width: u32, height: u32) -> Self {
        Self::OutOfBounds {
            x,
            y,
            c,
            width,
            height,
        }
    }

    /// Returns `true` if this is a bounds-related error.
    #[inline]
    pub fn is_bounds_error(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
    }

    /// Returns `true` if the buffer and its dimensions disagree.
    #[inline]
    pub fn is_layout_error(&self) -> bool {
        matches!(
            self,
            Self::BufferSizeMismatch { .. } | Self::InvalidDimensions { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds() {
        let err = Error::out_of_bounds(100, 50, 3, 80, 60);
        let msg = err.to_string();
        assert!(msg.contains("(100, 50)"));
        assert!(msg.contains("80x60"));
        assert!(err.is_bounds_error());
        assert!(!err.is_layout_error());
    }

    #[test]
    fn test_size_mismatch() {
        let err = Error::size_mismatch(16, 12);
        assert_eq!(
            err.to_string(),
            "buffer size mismatch: expected 16 bytes, got 12"
        );
        assert!(err.is_layout_error());
    }

    #[test]
    fn test_invalid_dimensions() {
        let err = Error::invalid_dimensions(u32::MAX, u32::MAX, "overflow");
        assert!(err.to_string().contains("overflow"));
        assert!(err.is_layout_error());
    }
}
