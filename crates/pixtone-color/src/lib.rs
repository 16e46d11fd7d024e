//! # pixtone-color
//!
//! Color-space conversion for 8-bit RGB pixels.
//!
//! - [`rgb_to_hsv`] / [`hsv_to_rgb`] - RGB <-> HSV, 60° sector formulas
//! - [`hsl`] - Lightness and HSL-saturation shifts derived from HSV
//!
//! All functions are pure and operate on one pixel; buffer iteration lives
//! in `pixtone-ops`.
//!
//! # Example
//!
//! ```rust
//! use pixtone_color::{hsl, hsv_to_rgb, rgb_to_hsv};
//!
//! let hsv = rgb_to_hsv(40, 120, 200);
//! let brighter = hsl::shift_lightness(hsv, 0.2);
//! let [r, g, b] = hsv_to_rgb(brighter);
//! assert!(r > 40 && g > 120 && b > 200);
//! ```
//!
//! # Dependencies
//!
//! - [`pixtone-core`] - Channel narrowing helpers

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod hsl;
mod hsv;

pub use hsv::{Hsv, hsv_to_rgb, rgb_to_hsv};
