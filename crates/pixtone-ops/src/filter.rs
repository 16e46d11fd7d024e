//! Neighborhood filters: box blur and 3x3 sharpen.
//!
//! Both filters read from an unmodified copy of the input and never from
//! pixels they have already written, so the result does not depend on
//! iteration order.
//!
//! # Example
//!
//! ```rust
//! use pixtone_core::RgbaImage;
//! use pixtone_ops::filter::{blur, sharpen};
//!
//! let mut img = RgbaImage::filled(16, 16, [90, 120, 150, 255]);
//! blur(&mut img.view_mut(), 3.0);
//! sharpen(&mut img.view_mut(), 50.0);
//! assert!(img.pixels().all(|p| p == [90, 120, 150, 255]));
//! ```

use pixtone_core::{CHANNELS, RgbaBufferMut, truncate_u8};
use tracing::{debug, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// 3x3 sharpen kernel, row-major.
pub const SHARPEN_KERNEL: [[i32; 3]; 3] = [[0, -1, 0], [-1, 5, -1], [0, -1, 0]];

/// Blur radius for a slider value: `max(1, trunc(value))`.
///
/// Negative and NaN values give radius 1.
#[inline]
pub fn blur_radius(value: f32) -> u32 {
    (value as i32).max(1) as u32
}

/// Box blur with radius [`blur_radius(value)`](blur_radius).
///
/// Every output channel (alpha included) is the integer-truncated mean of
/// the same channel over the `(2r + 1) x (2r + 1)` window around the pixel.
/// Window cells outside the image are left out of both the sum and the
/// count, so edge pixels average over fewer samples.
///
/// The window sum is separable: rows are summed first, then columns. Sums
/// are exact integers, so the result matches a direct neighborhood loop bit
/// for bit at a cost independent of `r`.
pub fn blur(buf: &mut RgbaBufferMut<'_>, value: f32) {
    let (width, height) = buf.dimensions();
    if buf.is_empty() {
        return;
    }
    // Windows wider than the image clip to the same cells.
    let radius = blur_radius(value).min(width.max(height)) as usize;
    trace!(width, height, value, "blur");
    debug!(width, height, radius, "Applying box blur");

    let (w, h) = (width as usize, height as usize);
    let row_sums = blur_horizontal(buf.as_slice(), w, radius);
    let blurred = blur_vertical(&row_sums, w, h, radius);

    buf.as_mut_slice().copy_from_slice(&blurred);
}

/// Number of in-bounds cells in `[i - r, i + r]` for an axis of length `len`.
#[inline]
fn window_len(i: usize, r: usize, len: usize) -> usize {
    (i + r).min(len - 1) - i.saturating_sub(r) + 1
}

/// Sums each channel of one row over the clipped horizontal window.
fn sum_row(src_row: &[u8], dst_row: &mut [u32], w: usize, r: usize) {
    for c in 0..CHANNELS {
        let at = |x: usize| src_row[x * CHANNELS + c] as u32;

        let mut sum: u32 = (0..=r.min(w - 1)).map(at).sum();
        for x in 0..w {
            dst_row[x * CHANNELS + c] = sum;

            // Slide window
            if x >= r {
                sum -= at(x - r);
            }
            if x + r + 1 < w {
                sum += at(x + r + 1);
            }
        }
    }
}

/// Runs [`sum_row`] over every row.
fn blur_horizontal(src: &[u8], w: usize, r: usize) -> Vec<u32> {
    let row_len = w * CHANNELS;
    let mut dst = vec![0u32; src.len()];

    #[cfg(feature = "parallel")]
    src.par_chunks_exact(row_len)
        .zip(dst.par_chunks_exact_mut(row_len))
        .for_each(|(src_row, dst_row)| sum_row(src_row, dst_row, w, r));

    #[cfg(not(feature = "parallel"))]
    src.chunks_exact(row_len)
        .zip(dst.chunks_exact_mut(row_len))
        .for_each(|(src_row, dst_row)| sum_row(src_row, dst_row, w, r));

    dst
}

/// Sums row sums over the clipped vertical window and divides by the
/// clipped cell count.
fn blur_vertical(row_sums: &[u32], w: usize, h: usize, r: usize) -> Vec<u8> {
    let row_len = w * CHANNELS;
    let mut dst = vec![0u8; row_sums.len()];
    let row = |y: usize| &row_sums[y * row_len..(y + 1) * row_len];

    let mut acc = vec![0u64; row_len];
    for y in 0..=r.min(h - 1) {
        for (a, &s) in acc.iter_mut().zip(row(y)) {
            *a += s as u64;
        }
    }

    let count_x: Vec<u64> = (0..w).map(|x| window_len(x, r, w) as u64).collect();

    for (y, out_row) in dst.chunks_exact_mut(row_len).enumerate() {
        let count_y = window_len(y, r, h) as u64;
        for (i, out) in out_row.iter_mut().enumerate() {
            *out = (acc[i] / (count_x[i / CHANNELS] * count_y)) as u8;
        }

        // Slide window
        if y >= r {
            for (a, &s) in acc.iter_mut().zip(row(y - r)) {
                *a -= s as u64;
            }
        }
        if y + r + 1 < h {
            for (a, &s) in acc.iter_mut().zip(row(y + r + 1)) {
                *a += s as u64;
            }
        }
    }

    dst
}

/// 3x3 sharpen blended by `value / 100`.
///
/// For each interior pixel (`1 <= x <= w - 2`, `1 <= y <= h - 2`) and each
/// of R, G, B:
///
/// ```text
/// sum     = sum(snapshot[y + ky][x + kx] * SHARPEN_KERNEL[ky][kx])
/// blended = orig + intensity * (sum - orig)
/// ```
///
/// All neighbors are read from a snapshot taken before the pass. The
/// one-pixel border and alpha are left untouched; images narrower or shorter
/// than 3 have no interior and are unchanged.
pub fn sharpen(buf: &mut RgbaBufferMut<'_>, value: f32) {
    let (width, height) = buf.dimensions();
    trace!(width, height, value, "sharpen");
    if width < 3 || height < 3 {
        return;
    }
    debug!(width, height, value, "Applying 3x3 sharpen");

    let intensity = value / 100.0;
    let snapshot = buf.snapshot();
    let row_len = buf.row_len();
    let at = |x: usize, y: usize, c: usize| snapshot[y * row_len + x * CHANNELS + c] as i32;

    buf.for_each_row(|y, row| {
        let y = y as usize;
        if y == 0 || y + 1 >= height as usize {
            return;
        }
        for x in 1..width as usize - 1 {
            for c in 0..3 {
                let mut sum = 0i32;
                for (ky, kernel_row) in SHARPEN_KERNEL.iter().enumerate() {
                    for (kx, &k) in kernel_row.iter().enumerate() {
                        sum += at(x + kx - 1, y + ky - 1, c) * k;
                    }
                }
                let orig = at(x, y, c);
                let blended = orig as f32 + intensity * (sum - orig) as f32;
                row[x * CHANNELS + c] = truncate_u8(blended);
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixtone_core::RgbaImage;

    /// Deterministic pseudo-random image.
    fn noise(width: u32, height: u32, seed: u32) -> RgbaImage {
        let mut state = seed;
        let data = (0..width * height * 4)
            .map(|_| {
                state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
                (state >> 16) as u8
            })
            .collect();
        RgbaImage::from_data(width, height, data).unwrap()
    }

    /// Direct clipped-window average.
    fn naive_blur(img: &RgbaImage, r: i64) -> Vec<u8> {
        let (w, h) = (img.width() as i64, img.height() as i64);
        let mut out = vec![0u8; img.data().len()];
        for y in 0..h {
            for x in 0..w {
                for c in 0..4 {
                    let (mut sum, mut count) = (0u64, 0u64);
                    for dy in -r..=r {
                        for dx in -r..=r {
                            let (nx, ny) = (x + dx, y + dy);
                            if nx >= 0 && nx < w && ny >= 0 && ny < h {
                                sum += img.pixel(nx as u32, ny as u32)[c] as u64;
                                count += 1;
                            }
                        }
                    }
                    out[((y * w + x) * 4) as usize + c] = (sum / count) as u8;
                }
            }
        }
        out
    }

    #[test]
    fn test_blur_radius() {
        assert_eq!(blur_radius(0.0), 1);
        assert_eq!(blur_radius(-5.0), 1);
        assert_eq!(blur_radius(f32::NAN), 1);
        assert_eq!(blur_radius(2.9), 2);
        assert_eq!(blur_radius(10.0), 10);
    }

    #[test]
    fn test_blur_matches_direct_average() {
        for (w, h, r) in [(7, 5, 1), (9, 4, 2), (3, 8, 3), (6, 6, 5), (1, 7, 2), (5, 1, 1)] {
            let mut img = noise(w, h, w * 31 + h);
            let expected = naive_blur(&img, r);
            blur(&mut img.view_mut(), r as f32);
            assert_eq!(img.data(), &expected[..], "{w}x{h} r={r}");
        }
    }

    #[test]
    fn test_row_sums_independent_of_iteration() {
        let img = noise(37, 11, 5);
        let row_len = 37 * CHANNELS;
        for r in [1, 3, 36] {
            let mut sequential = vec![0u32; img.data().len()];
            for (src_row, dst_row) in img
                .data()
                .chunks_exact(row_len)
                .zip(sequential.chunks_exact_mut(row_len))
            {
                sum_row(src_row, dst_row, 37, r);
            }
            // Rows handed out in reverse order give the same sums.
            let mut reversed = vec![0u32; img.data().len()];
            for (src_row, dst_row) in img
                .data()
                .chunks_exact(row_len)
                .zip(reversed.chunks_exact_mut(row_len))
                .rev()
            {
                sum_row(src_row, dst_row, 37, r);
            }
            assert_eq!(sequential, reversed);
            assert_eq!(blur_horizontal(img.data(), 37, r), sequential, "r={r}");
        }
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_row_sums_parallel_matches_sequential() {
        let img = noise(64, 40, 9);
        let row_len = 64 * CHANNELS;
        let r = 4;

        let mut sequential = vec![0u32; img.data().len()];
        img.data()
            .chunks_exact(row_len)
            .zip(sequential.chunks_exact_mut(row_len))
            .for_each(|(src_row, dst_row)| sum_row(src_row, dst_row, 64, r));

        let mut parallel = vec![0u32; img.data().len()];
        img.data()
            .par_chunks_exact(row_len)
            .zip(parallel.par_chunks_exact_mut(row_len))
            .for_each(|(src_row, dst_row)| sum_row(src_row, dst_row, 64, r));

        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_blur_edge_counts() {
        // R channel: 0, 30, 90 -> (0+30)/2, (0+30+90)/3, (30+90)/2
        let data = [[0, 0, 0, 255], [30, 0, 0, 255], [90, 0, 0, 255]].concat();
        let mut img = RgbaImage::from_data(3, 1, data).unwrap();
        blur(&mut img.view_mut(), 1.0);
        let reds: Vec<u8> = img.pixels().map(|p| p[0]).collect();
        assert_eq!(reds, [15, 40, 60]);
    }

    #[test]
    fn test_blur_uniform_and_tiny() {
        let mut img = RgbaImage::filled(5, 3, [10, 20, 30, 40]);
        blur(&mut img.view_mut(), 50.0);
        assert!(img.pixels().all(|p| p == [10, 20, 30, 40]));

        let mut one = RgbaImage::filled(1, 1, [1, 2, 3, 4]);
        blur(&mut one.view_mut(), 4.0);
        assert_eq!(one.pixel(0, 0), [1, 2, 3, 4]);
    }

    #[test]
    fn test_blur_averages_alpha() {
        let data = [[0, 0, 0, 0], [0, 0, 0, 255]].concat();
        let mut img = RgbaImage::from_data(2, 1, data).unwrap();
        blur(&mut img.view_mut(), 1.0);
        assert_eq!(img.pixel(0, 0)[3], 127);
        assert_eq!(img.pixel(1, 0)[3], 127);
    }

    #[test]
    fn test_sharpen_zero_is_identity() {
        let mut img = noise(6, 5, 7);
        let before = img.clone();
        sharpen(&mut img.view_mut(), 0.0);
        assert_eq!(img, before);
    }

    #[test]
    fn test_sharpen_keeps_border_and_alpha() {
        let mut img = noise(6, 5, 11);
        let before = img.clone();
        sharpen(&mut img.view_mut(), 100.0);
        for y in 0..5 {
            for x in 0..6 {
                let (a, b) = (img.pixel(x, y), before.pixel(x, y));
                assert_eq!(a[3], b[3]);
                if x == 0 || y == 0 || x == 5 || y == 4 {
                    assert_eq!(a, b);
                }
            }
        }
    }

    #[test]
    fn test_sharpen_center_spike() {
        // 3x3 gray 100 with a 150 center: sum = 5*150 - 4*100 = 350
        let mut img = RgbaImage::filled(3, 3, [100, 100, 100, 255]);
        img.view_mut().set_pixel(1, 1, [150, 150, 150, 255]);
        sharpen(&mut img.view_mut(), 50.0);
        // 150 + 0.5 * (350 - 150) = 250
        assert_eq!(img.pixel(1, 1), [250, 250, 250, 255]);
        assert_eq!(img.pixel(0, 1), [100, 100, 100, 255]);
    }

    #[test]
    fn test_sharpen_tiny_images() {
        for (w, h) in [(1, 1), (2, 2), (2, 5), (5, 2)] {
            let mut img = noise(w, h, 3);
            let before = img.clone();
            sharpen(&mut img.view_mut(), 100.0);
            assert_eq!(img, before);
        }
    }
}
