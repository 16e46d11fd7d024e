//! HSL-style adjustments computed from an HSV triple.
//!
//! Lightness and HSL saturation are derived from HSV without a full HSL
//! round trip:
//!
//! ```text
//! max = v
//! min = (1 - s) * v
//! l   = (max + min) / 2
//! s_hsl = 0                            if l == 0 or l == 1
//!       = (max - min) / (1 - |2l - 1|)  otherwise
//! ```
//!
//! The shifted values are written back into an [`Hsv`] so the caller can
//! finish with [`hsv_to_rgb`](crate::hsv_to_rgb).

use crate::Hsv;
use pixtone_core::clamp01;

/// HSL lightness of an HSV triple.
#[inline]
pub fn lightness(hsv: Hsv) -> f32 {
    let max = hsv.v;
    let min = (1.0 - hsv.s) * hsv.v;
    (max + min) / 2.0
}

/// HSL saturation of an HSV triple.
#[inline]
pub fn hsl_saturation(hsv: Hsv) -> f32 {
    let max = hsv.v;
    let min = (1.0 - hsv.s) * hsv.v;
    let l = (max + min) / 2.0;
    if l == 0.0 || l == 1.0 {
        0.0
    } else {
        (max - min) / (1.0 - (2.0 * l - 1.0).abs())
    }
}

/// Adds `amount` to the HSL saturation and rebuilds `s`/`v`.
///
/// `amount` is the already-scaled offset (`value / 100`). The new saturation
/// is clamped to `[0, 1]`, then the channel extremes are rebuilt around `l`:
///
/// ```text
/// half    = s_hsl * l * (1 - |2l - 1|) / 2
/// new_min = l - half
/// new_max = l + half
/// v = new_max
/// s = 0 if v == 0 else (v - new_min) / v
/// ```
///
/// `half` scales by `l` on both sides of `l = 0.5`, where the textbook HSL
/// inverse would use `1 - l` above the midpoint. Output is kept bit-compatible
/// with existing edits, so the expression stays as written.
#[inline]
pub fn shift_hsl_saturation(hsv: Hsv, amount: f32) -> Hsv {
    let l = lightness(hsv);
    let s_hsl = clamp01(hsl_saturation(hsv) + amount);

    let spread = 1.0 - (2.0 * l - 1.0).abs();
    let new_min = l - (s_hsl * l * spread / 2.0);
    let new_max = l + (s_hsl * l * spread / 2.0);

    let v = new_max;
    let s = if v == 0.0 { 0.0 } else { (v - new_min) / v };
    Hsv { h: hsv.h, s, v }
}

/// Adds `amount` to the HSL lightness and rebuilds `s`/`v`.
///
/// `amount` is the already-scaled offset (`value / 100`):
///
/// ```text
/// l = clamp01(l + amount)
/// v = 2l / (1 + (1 - s))                    if l <= 0.5
///   = (l + s - l*s) / (1 - (1 - l)(1 - s))  otherwise
/// s = 0 if l == 0 or l == 1 else 2 * (1 - l / v)
/// ```
///
/// The incoming HSV saturation is used on both branches.
#[inline]
pub fn shift_lightness(hsv: Hsv, amount: f32) -> Hsv {
    let s = hsv.s;
    let l = clamp01(lightness(hsv) + amount);

    let v = if l <= 0.5 {
        (2.0 * l) / (1.0 + (1.0 - s))
    } else {
        (l + s - l * s) / (1.0 - (1.0 - l) * (1.0 - s))
    };

    let s = if l == 0.0 || l == 1.0 {
        0.0
    } else {
        2.0 * (1.0 - l / v)
    };

    Hsv { h: hsv.h, s, v }
}
