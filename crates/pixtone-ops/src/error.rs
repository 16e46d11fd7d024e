//! Error types for image operations.

use thiserror::Error;

/// Error type for image operations.
///
/// Filters themselves never fail; errors come from validating the buffer at
/// the boundary or from decoding a filter identifier.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OpsError {
    /// Buffer and dimensions disagree.
    #[error(transparent)]
    Buffer(#[from] pixtone_core::Error),

    /// Curve table could not be built.
    #[error(transparent)]
    Lut(#[from] pixtone_lut::LutError),

    /// Filter identifier is not one of the known names.
    #[error("unknown filter: {0}")]
    UnknownFilter(String),
}

/// Result type for image operations.
pub type OpsResult<T> = Result<T, OpsError>;
