//! Channel layout and 8-bit channel arithmetic.
//!
//! Every filter computes in `f32` or `i32` and narrows back to `u8` through
//! the helpers here. The narrowing order is fixed: **truncate toward zero,
//! then clamp** to `[0, 255]`. Rounding would change output bytes.

/// Number of interleaved channels per pixel (R, G, B, A).
pub const CHANNELS: usize = 4;

/// Red channel offset within a pixel.
pub const R: usize = 0;
/// Green channel offset within a pixel.
pub const G: usize = 1;
/// Blue channel offset within a pixel.
pub const B: usize = 2;
/// Alpha channel offset within a pixel.
pub const A: usize = 3;

/// One RGBA8 pixel.
pub type Rgba8 = [u8; CHANNELS];

/// Clamps an integer to `[0, 255]`.
///
/// ```rust
/// use pixtone_core::clamp_u8;
///
/// assert_eq!(clamp_u8(-7), 0);
/// assert_eq!(clamp_u8(300), 255);
/// assert_eq!(clamp_u8(128), 128);
/// ```
#[inline]
pub fn clamp_u8(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

/// Truncates a float toward zero, then clamps to `[0, 255]`.
///
/// The float-to-int cast saturates, so infinities land on the clamp bounds
/// and NaN becomes 0. No input produces an out-of-range byte.
///
/// ```rust
/// use pixtone_core::truncate_u8;
///
/// assert_eq!(truncate_u8(254.99), 254);
/// assert_eq!(truncate_u8(-0.9), 0);
/// assert_eq!(truncate_u8(f32::INFINITY), 255);
/// assert_eq!(truncate_u8(f32::NAN), 0);
/// ```
#[inline]
pub fn truncate_u8(value: f32) -> u8 {
    clamp_u8(value as i32)
}

/// Clamps a float to `[0, 1]`.
#[inline]
pub fn clamp01(value: f32) -> f32 {
    value.clamp(0.0, 1.0)
}
