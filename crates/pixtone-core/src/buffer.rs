//! RGBA8 pixel buffers.
//!
//! This module provides the two buffer types the filters work with:
//! - [`RgbaBufferMut`] - Mutable view over a caller-owned byte slice
//! - [`RgbaImage`] - Owned buffer, convenient for hosts and tests
//!
//! # Memory Layout
//!
//! Pixels are stored **row-major**, top-left origin, channels interleaved:
//!
//! ```text
//! Memory: [R G B A R G B A ...]  ← Row 0
//!         [R G B A R G B A ...]  ← Row 1
//!         ...
//! ```
//!
//! Byte `c` of pixel `(x, y)` lives at `(y * width + x) * 4 + c`.
//!
//! # Validation
//!
//! The length/dimension agreement is checked once in [`RgbaBufferMut::new`].
//! Filters then address pixels with unchecked arithmetic on the validated
//! layout; [`RgbaBufferMut::index`] is the bounds-checked entry point for
//! callers that address individual channels.
//!
//! # Usage
//!
//! ```rust
//! use pixtone_core::RgbaBufferMut;
//!
//! let mut data = vec![0u8; 4 * 3 * 4];
//! let mut buf = RgbaBufferMut::new(&mut data, 4, 3).unwrap();
//! buf.set_pixel(1, 2, [10, 20, 30, 255]);
//! assert_eq!(buf.pixel(1, 2), [10, 20, 30, 255]);
//! assert_eq!(buf.index(1, 2, 3).unwrap(), (2 * 4 + 1) * 4 + 3);
//! ```

use crate::pixel::{CHANNELS, Rgba8};
use crate::{Error, Result};

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Computes `width * height * 4`, or an error if it overflows.
fn byte_len(width: u32, height: u32) -> Result<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(CHANNELS))
        .ok_or_else(|| Error::invalid_dimensions(width, height, "byte length overflows usize"))
}

/// Mutable view over an RGBA8 buffer owned by the caller.
///
/// The view borrows the bytes exclusively for its lifetime, so a filter
/// holding it cannot race with any other access to the same buffer.
pub struct RgbaBufferMut<'a> {
    data: &'a mut [u8],
    width: u32,
    height: u32,
}

impl<'a> RgbaBufferMut<'a> {
    /// Wraps `data` as a `width` x `height` RGBA8 image.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidDimensions`] if `width * height * 4` overflows
    /// - [`Error::BufferSizeMismatch`] if `data.len()` differs from it
    pub fn new(data: &'a mut [u8], width: u32, height: u32) -> Result<Self> {
        let expected = byte_len(width, height)?;
        if data.len() != expected {
            return Err(Error::size_mismatch(expected, data.len()));
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Returns the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Returns the length of one row in bytes.
    #[inline]
    pub fn row_len(&self) -> usize {
        self.width as usize * CHANNELS
    }

    /// Returns `true` if the image has no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the raw bytes.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        self.data
    }

    /// Returns the raw bytes mutably.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        self.data
    }

    /// Bounds-checked byte index of channel `c` at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `x >= width`, `y >= height` or `c >= 4`.
    #[inline]
    pub fn index(&self, x: u32, y: u32, c: usize) -> Result<usize> {
        if x >= self.width || y >= self.height || c >= CHANNELS {
            return Err(Error::out_of_bounds(x, y, c, self.width, self.height));
        }
        Ok(self.offset(x, y) + c)
    }

    /// Byte offset of pixel `(x, y)` without bounds checking.
    #[inline]
    pub fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * CHANNELS
    }

    /// Returns the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Rgba8 {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let o = self.offset(x, y);
        [self.data[o], self.data[o + 1], self.data[o + 2], self.data[o + 3]]
    }

    /// Returns the pixel at `(x, y)`, or `None` if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        if x < self.width && y < self.height {
            Some(self.pixel(x, y))
        } else {
            None
        }
    }

    /// Sets the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is out of bounds.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: Rgba8) {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let o = self.offset(x, y);
        self.data[o..o + CHANNELS].copy_from_slice(&pixel);
    }

    /// Fills every pixel with one value.
    pub fn fill(&mut self, pixel: Rgba8) {
        for chunk in self.data.chunks_exact_mut(CHANNELS) {
            chunk.copy_from_slice(&pixel);
        }
    }

    /// Copies the current contents into a new scratch buffer.
    pub fn snapshot(&self) -> Vec<u8> {
        self.data.to_vec()
    }

    /// Overwrites the buffer with `src` in one step.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferSizeMismatch`] if `src` has a different length.
    pub fn copy_from(&mut self, src: &[u8]) -> Result<()> {
        if src.len() != self.data.len() {
            return Err(Error::size_mismatch(self.data.len(), src.len()));
        }
        self.data.copy_from_slice(src);
        Ok(())
    }

    /// Applies `f` to every pixel in place.
    ///
    /// With the `rayon` feature the pixels are processed in parallel; `f`
    /// sees each pixel exactly once and must not depend on visiting order.
    ///
    /// ```rust
    /// use pixtone_core::RgbaBufferMut;
    ///
    /// let mut data = vec![100u8; 2 * 2 * 4];
    /// let mut buf = RgbaBufferMut::new(&mut data, 2, 2).unwrap();
    /// buf.for_each_pixel(|px| px[0] = 7);
    /// assert_eq!(buf.pixel(1, 1), [7, 100, 100, 100]);
    /// ```
    pub fn for_each_pixel<F>(&mut self, f: F)
    where
        F: Fn(&mut Rgba8) + Send + Sync,
    {
        let apply = |chunk: &mut [u8]| {
            if let Ok(px) = <&mut Rgba8>::try_from(chunk) {
                f(px);
            }
        };

        #[cfg(feature = "rayon")]
        self.data.par_chunks_exact_mut(CHANNELS).for_each(apply);

        #[cfg(not(feature = "rayon"))]
        self.data.chunks_exact_mut(CHANNELS).for_each(apply);
    }

    /// Applies `f` to every row in place, passing the row index.
    ///
    /// With the `rayon` feature rows are processed in parallel.
    pub fn for_each_row<F>(&mut self, f: F)
    where
        F: Fn(u32, &mut [u8]) + Send + Sync,
    {
        let row_len = self.row_len();
        if row_len == 0 {
            return;
        }
        let apply = |(y, row): (usize, &mut [u8])| f(y as u32, row);

        #[cfg(feature = "rayon")]
        self.data
            .par_chunks_exact_mut(row_len)
            .enumerate()
            .for_each(apply);

        #[cfg(not(feature = "rayon"))]
        self.data.chunks_exact_mut(row_len).enumerate().for_each(apply);
    }
}

impl std::fmt::Debug for RgbaBufferMut<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RgbaBufferMut")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("len", &self.data.len())
            .finish()
    }
}

/// Owned RGBA8 image.
///
/// Hosts that already own a `Vec<u8>` can use [`RgbaBufferMut`] directly;
/// this type bundles the bytes with their dimensions.
///
/// ```rust
/// use pixtone_core::RgbaImage;
///
/// let mut img = RgbaImage::filled(3, 2, [255, 0, 0, 255]);
/// let mut view = img.view_mut();
/// view.set_pixel(0, 0, [0, 0, 0, 0]);
/// assert_eq!(img.pixel(0, 0), [0, 0, 0, 0]);
/// assert_eq!(img.pixel(2, 1), [255, 0, 0, 255]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaImage {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl RgbaImage {
    /// Creates a transparent black image.
    ///
    /// # Panics
    ///
    /// Panics if `width * height * 4` overflows `usize`.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, [0; CHANNELS])
    }

    /// Creates an image filled with one pixel value.
    ///
    /// # Panics
    ///
    /// Panics if `width * height * 4` overflows `usize`.
    pub fn filled(width: u32, height: u32, pixel: Rgba8) -> Self {
        let count = width as usize * height as usize;
        let data = pixel.repeat(count);
        Self {
            data,
            width,
            height,
        }
    }

    /// Creates an image from existing bytes.
    ///
    /// # Errors
    ///
    /// Same conditions as [`RgbaBufferMut::new`].
    pub fn from_data(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = byte_len(width, height)?;
        if data.len() != expected {
            return Err(Error::size_mismatch(expected, data.len()));
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Returns the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the raw bytes.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the image, returning its bytes.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Returns the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Rgba8 {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let o = (y as usize * self.width as usize + x as usize) * CHANNELS;
        [self.data[o], self.data[o + 1], self.data[o + 2], self.data[o + 3]]
    }

    /// Iterates over all pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = Rgba8> + '_ {
        self.data
            .chunks_exact(CHANNELS)
            .map(|c| [c[0], c[1], c[2], c[3]])
    }

    /// Borrows the image as a mutable view.
    pub fn view_mut(&mut self) -> RgbaBufferMut<'_> {
        // Layout was validated when the image was built.
        RgbaBufferMut {
            data: &mut self.data,
            width: self.width,
            height: self.height,
        }
    }
}
