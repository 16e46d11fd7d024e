//! # pixtone-core
//!
//! Core types for in-place RGBA8 image adjustment.
//!
//! This crate provides the foundation shared by every other pixtone crate:
//!
//! - [`RgbaBufferMut`] - Validated mutable view over a caller-owned byte buffer
//! - [`RgbaImage`] - Owned RGBA8 image
//! - [`clamp_u8`], [`truncate_u8`], [`clamp01`] - Channel narrowing helpers
//! - [`Error`] - Buffer layout and bounds errors
//!
//! ## Crate Structure
//!
//! ```text
//! pixtone-core (this crate)
//!    ^
//!    |
//!    +-- pixtone-color (HSV/HSL conversion)
//!    +-- pixtone-lut (256-entry curve tables)
//!    +-- pixtone-ops (filters, selector, adjustment stack)
//! ```
//!
//! ## Feature Flags
//!
//! - `rayon` - Parallel pixel and row iteration (enabled by default)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod buffer;
pub mod error;
pub mod pixel;

pub use buffer::{RgbaBufferMut, RgbaImage};
pub use error::{Error, Result};
pub use pixel::{A, B, CHANNELS, G, R, Rgba8, clamp_u8, clamp01, truncate_u8};
