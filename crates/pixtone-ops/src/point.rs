//! Per-channel point operators: brightness and contrast.
//!
//! Both operators touch R, G and B independently and leave alpha alone.
//! Results are truncated toward zero and then clamped to `[0, 255]`.
//!
//! # Example
//!
//! ```rust
//! use pixtone_core::RgbaImage;
//! use pixtone_ops::point;
//!
//! let mut img = RgbaImage::filled(2, 2, [100, 150, 200, 255]);
//! point::brightness(&mut img.view_mut(), 50.0);
//! assert_eq!(img.pixel(0, 0), [150, 225, 255, 255]);
//! ```

use pixtone_core::{RgbaBufferMut, truncate_u8};
use tracing::trace;

/// Scales R, G, B by `1 + value / 100`.
///
/// `value = 0` is the identity, `-100` produces black, `+100` doubles.
pub fn brightness(buf: &mut RgbaBufferMut<'_>, value: f32) {
    trace!(width = buf.width(), height = buf.height(), value, "brightness");

    let factor = 1.0 + value / 100.0;
    buf.for_each_pixel(|px| {
        for ch in &mut px[..3] {
            *ch = truncate_u8(*ch as f32 * factor);
        }
    });
}

/// Contrast factor for a slider value.
///
/// ```text
/// factor = 259 * (value + 255) / (255 * (259 - value))
/// ```
///
/// Meaningful for `value` in `(-255, 259)`. At `259` the denominator is zero
/// and the factor is infinite.
#[inline]
pub fn contrast_factor(value: f32) -> f32 {
    (259.0 * (value + 255.0)) / (255.0 * (259.0 - value))
}

/// Stretches R, G, B around mid-gray 128.
///
/// ```text
/// out = clamp(trunc(factor * (in - 128) + 128))
/// ```
///
/// See [`contrast_factor`]. `value = 0` gives `factor = 1` (identity).
///
/// `value = 259` is outside the contract: the infinite factor turns every
/// channel into 0 or 255 (and 128 into NaN, stored as 0). The buffer stays
/// valid; no check is made.
pub fn contrast(buf: &mut RgbaBufferMut<'_>, value: f32) {
    trace!(width = buf.width(), height = buf.height(), value, "contrast");

    let factor = contrast_factor(value);
    buf.for_each_pixel(|px| {
        for ch in &mut px[..3] {
            *ch = truncate_u8(factor * (*ch as i32 - 128) as f32 + 128.0);
        }
    });
}
