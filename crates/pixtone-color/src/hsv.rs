//! RGB <-> HSV conversion for 8-bit pixels.
//!
//! Hue is in degrees `[0, 360)`, saturation and value in `[0, 1]`.
//!
//! # Narrowing
//!
//! [`hsv_to_rgb`] scales each channel by 255 and **truncates toward zero
//! before clamping**. This is not the same as rounding: a channel that lands
//! on 254.999 becomes 254. Output bytes depend on this order.
//!
//! # Example
//!
//! ```rust
//! use pixtone_color::{hsv_to_rgb, rgb_to_hsv};
//!
//! let hsv = rgb_to_hsv(255, 0, 0);
//! assert_eq!(hsv.h, 0.0);
//! assert_eq!(hsv.s, 1.0);
//! assert_eq!(hsv_to_rgb(hsv), [255, 0, 0]);
//! ```

use pixtone_core::truncate_u8;

/// A hue/saturation/value triple.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsv {
    /// Hue in degrees, `[0, 360)`.
    pub h: f32,
    /// Saturation, `[0, 1]`.
    pub s: f32,
    /// Value, `[0, 1]`.
    pub v: f32,
}

impl Hsv {
    /// Creates a triple without validation.
    #[inline]
    pub const fn new(h: f32, s: f32, v: f32) -> Self {
        Self { h, s, v }
    }
}

/// Converts 8-bit RGB to HSV.
///
/// The hue sector is chosen by the first channel (R, then G, then B) equal
/// to the maximum, so ties resolve toward red.
#[inline]
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> Hsv {
    let rf = r as f32 / 255.0;
    let gf = g as f32 / 255.0;
    let bf = b as f32 / 255.0;

    let max = rf.max(gf).max(bf);
    let min = rf.min(gf).min(bf);
    let delta = max - min;

    let v = max;
    let s = if max == 0.0 { 0.0 } else { delta / max };

    let mut h = if delta == 0.0 {
        0.0
    } else if max == rf {
        60.0 * (((gf - bf) / delta) % 6.0)
    } else if max == gf {
        60.0 * ((bf - rf) / delta + 2.0)
    } else {
        60.0 * ((rf - gf) / delta + 4.0)
    };

    if h < 0.0 {
        h += 360.0;
    }

    Hsv { h, s, v }
}

/// Converts HSV back to 8-bit RGB.
///
/// Hues outside `[0, 300)` (including NaN) fall through to the last sector.
#[inline]
pub fn hsv_to_rgb(hsv: Hsv) -> [u8; 3] {
    let Hsv { h, s, v } = hsv;
    let c = v * s;
    // Sector fraction is evaluated in f64; an f32 evaluation moves some
    // channels by one code value.
    let frac = ((h / 60.0) as f64 % 2.0 - 1.0).abs();
    let x = (c as f64 * (1.0 - frac)) as f32;
    let m = v - c;

    let (rf, gf, bf) = if (0.0..60.0).contains(&h) {
        (c, x, 0.0)
    } else if (60.0..120.0).contains(&h) {
        (x, c, 0.0)
    } else if (120.0..180.0).contains(&h) {
        (0.0, c, x)
    } else if (180.0..240.0).contains(&h) {
        (0.0, x, c)
    } else if (240.0..300.0).contains(&h) {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    [
        truncate_u8((rf + m) * 255.0),
        truncate_u8((gf + m) * 255.0),
        truncate_u8((bf + m) * 255.0),
    ]
}
