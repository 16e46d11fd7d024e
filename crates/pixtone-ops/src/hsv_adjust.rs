//! Adjustments that go through HSV: saturation, hue, HSL saturation, lightness.
//!
//! Every pixel is converted with [`rgb_to_hsv`], modified, and converted back
//! with [`hsv_to_rgb`]. The round trip alone can move a channel by one code
//! value (the return trip truncates), so even a zero adjustment is not
//! guaranteed to be bit-exact; hosts skip zero values before calling.
//! Alpha is never touched.

use pixtone_color::{Hsv, hsl, hsv_to_rgb, rgb_to_hsv};
use pixtone_core::{RgbaBufferMut, clamp01};
use tracing::trace;

/// Runs `f` on the HSV form of every pixel.
fn map_hsv<F>(buf: &mut RgbaBufferMut<'_>, f: F)
where
    F: Fn(Hsv) -> Hsv + Send + Sync,
{
    buf.for_each_pixel(|px| {
        let hsv = rgb_to_hsv(px[0], px[1], px[2]);
        let [r, g, b] = hsv_to_rgb(f(hsv));
        px[0] = r;
        px[1] = g;
        px[2] = b;
    });
}

/// Scales HSV saturation by `1 + value / 100`, clamped to `[0, 1]`.
///
/// `value = -100` removes all color (R = G = B).
///
/// ```rust
/// use pixtone_core::RgbaImage;
/// use pixtone_ops::hsv_adjust::saturation;
///
/// let mut img = RgbaImage::filled(1, 1, [200, 80, 30, 255]);
/// saturation(&mut img.view_mut(), -100.0);
/// let [r, g, b, _] = img.pixel(0, 0);
/// assert!(r == g && g == b);
/// ```
pub fn saturation(buf: &mut RgbaBufferMut<'_>, value: f32) {
    trace!(width = buf.width(), height = buf.height(), value, "saturation");

    let factor = 1.0 + value / 100.0;
    map_hsv(buf, |hsv| Hsv {
        s: clamp01(hsv.s * factor),
        ..hsv
    });
}

/// Rotates hue by `value` degrees.
///
/// ```text
/// h = (h + value + 360) mod 360
/// ```
///
/// The `+360` keeps small negative shifts non-negative; shifts below -360
/// leave a negative hue, which lands in the last sector on conversion.
pub fn hue(buf: &mut RgbaBufferMut<'_>, value: f32) {
    trace!(width = buf.width(), height = buf.height(), value, "hue");

    map_hsv(buf, |hsv| Hsv {
        h: (hsv.h + value + 360.0) % 360.0,
        ..hsv
    });
}

/// Offsets HSL saturation by `value / 100`.
///
/// See [`hsl::shift_hsl_saturation`] for the reconstruction.
pub fn hsl_saturation(buf: &mut RgbaBufferMut<'_>, value: f32) {
    trace!(width = buf.width(), height = buf.height(), value, "hsl_saturation");

    let amount = value / 100.0;
    map_hsv(buf, |hsv| hsl::shift_hsl_saturation(hsv, amount));
}

/// Offsets HSL lightness by `value / 100`.
///
/// `-100` maps every pixel to black, `+100` to white.
/// See [`hsl::shift_lightness`] for the reconstruction.
pub fn lightness(buf: &mut RgbaBufferMut<'_>, value: f32) {
    trace!(width = buf.width(), height = buf.height(), value, "lightness");

    let amount = value / 100.0;
    map_hsv(buf, |hsv| hsl::shift_lightness(hsv, amount));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixtone_core::RgbaImage;

    const PURE: [[u8; 4]; 8] = [
        [255, 0, 0, 255],
        [0, 255, 0, 200],
        [0, 0, 255, 150],
        [255, 255, 0, 100],
        [0, 255, 255, 50],
        [255, 0, 255, 0],
        [128, 128, 128, 255],
        [255, 255, 255, 255],
    ];

    fn pure_colors() -> RgbaImage {
        RgbaImage::from_data(4, 2, PURE.concat()).unwrap()
    }

    #[test]
    fn test_hue_360_is_identity_on_pure_colors() {
        let mut img = pure_colors();
        let before = img.clone();
        hue(&mut img.view_mut(), 360.0);
        assert_eq!(img, before);
    }

    #[test]
    fn test_hue_120_rotates_primaries() {
        let data = [[255, 0, 0, 1], [0, 255, 0, 2]].concat();
        let mut img = RgbaImage::from_data(2, 1, data).unwrap();
        hue(&mut img.view_mut(), 120.0);
        assert_eq!(img.pixel(0, 0), [0, 255, 0, 1]);
        assert_eq!(img.pixel(1, 0), [0, 0, 255, 2]);
    }

    #[test]
    fn test_negative_hue_shift() {
        let mut img = RgbaImage::filled(1, 1, [0, 255, 0, 9]);
        hue(&mut img.view_mut(), -120.0);
        assert_eq!(img.pixel(0, 0), [255, 0, 0, 9]);
    }

    #[test]
    fn test_desaturate_makes_gray_and_keeps_alpha() {
        let mut img = pure_colors();
        saturation(&mut img.view_mut(), -100.0);
        for (i, p) in img.pixels().enumerate() {
            assert_eq!(p[0], p[1]);
            assert_eq!(p[1], p[2]);
            assert_eq!(p[3], PURE[i][3]);
        }
    }

    #[test]
    fn test_saturation_boost_clamps() {
        let mut img = RgbaImage::filled(1, 1, [255, 0, 0, 255]);
        saturation(&mut img.view_mut(), 100.0);
        assert_eq!(img.pixel(0, 0), [255, 0, 0, 255]);
    }

    #[test]
    fn test_lightness_extremes() {
        let mut img = pure_colors();
        lightness(&mut img.view_mut(), -100.0);
        assert!(img.pixels().all(|p| p[..3] == [0, 0, 0]));

        let mut img = pure_colors();
        lightness(&mut img.view_mut(), 100.0);
        assert!(img.pixels().all(|p| p[..3] == [255, 255, 255]));
    }

    #[test]
    fn test_hsl_saturation_minus_100_is_gray() {
        let mut img = pure_colors();
        hsl_saturation(&mut img.view_mut(), -100.0);
        for p in img.pixels() {
            assert_eq!(p[0], p[1]);
            assert_eq!(p[1], p[2]);
        }
    }
}
