//! # pixtone-lut
//!
//! Lookup tables for 8-bit tone curves.
//!
//! - [`CurveTable`] - 256-entry per-channel remap, baked from control points
//!   or taken verbatim from a host
//!
//! # Usage
//!
//! ```rust
//! use pixtone_lut::CurveTable;
//!
//! let contrast = CurveTable::from_control_points(&[
//!     [0.0, 0.0],
//!     [64.0, 48.0],
//!     [192.0, 208.0],
//!     [255.0, 255.0],
//! ])
//! .unwrap();
//! assert!(contrast.lookup(64) < 64);
//! assert!(contrast.lookup(192) > 192);
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - Error handling
//!
//! # Used By
//!
//! - `pixtone-ops` - Curves filter and adjustment stack

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod curve;
mod error;

pub use curve::{CURVE_SIZE, CurveTable};
pub use error::{LutError, LutResult};
