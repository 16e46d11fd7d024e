//! Curve-table remapping.
//!
//! Each of R, G and B is replaced by `table[original]`. Channels are looked
//! up independently (no chaining between channels) and alpha is untouched.

use pixtone_core::RgbaBufferMut;
use pixtone_lut::{CURVE_SIZE, CurveTable};
use tracing::{trace, warn};

/// Remaps R, G, B through a raw 256-byte table.
///
/// A table of any other length is ignored: the buffer is left unchanged and
/// a warning is logged. Hosts that pass tables through from untyped input
/// get a defined no-op instead of an error.
///
/// # Example
///
/// ```rust
/// use pixtone_core::RgbaImage;
/// use pixtone_ops::curves::apply_curves;
///
/// let invert: Vec<u8> = (0..=255u8).rev().collect();
/// let mut img = RgbaImage::filled(1, 1, [0, 100, 255, 42]);
/// apply_curves(&mut img.view_mut(), &invert);
/// assert_eq!(img.pixel(0, 0), [255, 155, 0, 42]);
///
/// // Short tables are ignored
/// apply_curves(&mut img.view_mut(), &[0u8; 10]);
/// assert_eq!(img.pixel(0, 0), [255, 155, 0, 42]);
/// ```
pub fn apply_curves(buf: &mut RgbaBufferMut<'_>, table: &[u8]) {
    match CurveTable::from_slice(table) {
        Ok(curve) => apply_curve_table(buf, &curve),
        Err(_) => {
            warn!(
                len = table.len(),
                expected = CURVE_SIZE,
                "curve table has wrong length, skipping"
            );
        }
    }
}

/// Remaps R, G, B through a validated [`CurveTable`].
pub fn apply_curve_table(buf: &mut RgbaBufferMut<'_>, curve: &CurveTable) {
    trace!(width = buf.width(), height = buf.height(), "curves");

    let table = curve.as_array();
    buf.for_each_pixel(|px| {
        px[0] = table[px[0] as usize];
        px[1] = table[px[1] as usize];
        px[2] = table[px[2] as usize];
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixtone_core::RgbaImage;

    #[test]
    fn test_identity_table() {
        let data: Vec<u8> = (0..=255u8).collect();
        let mut img = RgbaImage::from_data(8, 8, data).unwrap();
        let before = img.clone();
        apply_curve_table(&mut img.view_mut(), &CurveTable::identity());
        assert_eq!(img, before);
    }

    #[test]
    fn test_channels_not_chained() {
        // table maps 10 -> 20 and 20 -> 30; a chained lookup would turn 10 into 30
        let mut table: Vec<u8> = (0..=255u8).collect();
        table[10] = 20;
        table[20] = 30;
        let mut img = RgbaImage::filled(1, 1, [10, 20, 10, 10]);
        apply_curves(&mut img.view_mut(), &table);
        assert_eq!(img.pixel(0, 0), [20, 30, 20, 10]);
    }

    #[test]
    fn test_wrong_length_is_noop() {
        let mut img = RgbaImage::filled(2, 1, [1, 2, 3, 4]);
        let before = img.clone();
        apply_curves(&mut img.view_mut(), &[255u8; 255]);
        apply_curves(&mut img.view_mut(), &[255u8; 257]);
        apply_curves(&mut img.view_mut(), &[]);
        assert_eq!(img, before);
    }
}
