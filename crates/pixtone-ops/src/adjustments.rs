//! A complete set of editor adjustments applied as one stack.
//!
//! [`Adjustments`] holds one value per scalar filter plus an optional curve
//! table. It serializes with camelCase field names so presets written by a
//! host editor (`{"brightness": 20, "hslSaturation": -10, "curves": null}`)
//! load directly.
//!
//! # Order
//!
//! Active entries always run in this order:
//!
//! 1. brightness
//! 2. contrast
//! 3. saturation
//! 4. blur
//! 5. sharpen
//! 6. hue
//! 7. hslSaturation
//! 8. lightness
//! 9. curves
//!
//! Scalars equal to 0 are skipped; curves run only when a 256-entry table is
//! present.
//!
//! # Example
//!
//! ```rust
//! use pixtone_core::RgbaImage;
//! use pixtone_ops::Adjustments;
//!
//! let adj = Adjustments {
//!     brightness: -100.0,
//!     ..Default::default()
//! };
//! assert!(adj.has_active());
//!
//! let mut img = RgbaImage::filled(2, 2, [255, 255, 255, 255]);
//! adj.apply(&mut img.view_mut());
//! assert!(img.pixels().all(|p| p == [0, 0, 0, 255]));
//! ```

use pixtone_core::RgbaBufferMut;
use pixtone_lut::{CURVE_SIZE, CurveTable};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Filter, OpsResult};

/// Per-filter values for one image.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Adjustments {
    /// Brightness, `[-100, 100]`.
    pub brightness: f32,
    /// Contrast, `[-100, 100]`.
    pub contrast: f32,
    /// HSV saturation, `[-100, 100]`.
    pub saturation: f32,
    /// Blur radius in pixels; 0 means off.
    pub blur: f32,
    /// Sharpen amount, `[0, 100]`.
    pub sharpen: f32,
    /// Hue shift in degrees.
    pub hue: f32,
    /// HSL saturation, `[-100, 100]`.
    pub hsl_saturation: f32,
    /// HSL lightness, `[-100, 100]`.
    pub lightness: f32,
    /// Optional 256-entry curve table.
    pub curves: Option<Vec<u8>>,
}

impl Adjustments {
    /// Returns the filters [`apply`](Self::apply) would run, in order.
    pub fn filters(&self) -> Vec<Filter> {
        let scalars = [
            Filter::Brightness(self.brightness),
            Filter::Contrast(self.contrast),
            Filter::Saturation(self.saturation),
            Filter::Blur(self.blur),
            Filter::Sharpen(self.sharpen),
            Filter::Hue(self.hue),
            Filter::HslSaturation(self.hsl_saturation),
            Filter::Lightness(self.lightness),
        ];

        let mut filters: Vec<Filter> = scalars
            .into_iter()
            .filter(|f| f.value().is_some_and(|v| v != 0.0))
            .collect();

        if let Some(table) = self.curves.as_ref().filter(|t| t.len() == CURVE_SIZE) {
            filters.push(Filter::Curves(table.clone()));
        }
        filters
    }

    /// Applies every active adjustment to `buf` in place.
    pub fn apply(&self, buf: &mut RgbaBufferMut<'_>) {
        let filters = self.filters();
        debug!(
            width = buf.width(),
            height = buf.height(),
            count = filters.len(),
            "Applying adjustment stack"
        );
        for filter in &filters {
            filter.apply(buf);
        }
    }

    /// Returns `true` if any adjustment would visibly change an image.
    ///
    /// A curve table counts only when it has 256 entries and is not the
    /// identity.
    pub fn has_active(&self) -> bool {
        let scalars = [
            self.brightness,
            self.contrast,
            self.saturation,
            self.blur,
            self.sharpen,
            self.hue,
            self.hsl_saturation,
            self.lightness,
        ];
        let curves_active = self
            .curves
            .as_deref()
            .and_then(|t| CurveTable::from_slice(t).ok())
            .is_some_and(|t| !t.is_identity());

        scalars.iter().any(|&v| v != 0.0) || curves_active
    }

    /// Bakes curve control points into [`curves`](Self::curves).
    ///
    /// A curve that stays within one code value of the diagonal clears the
    /// table instead, so [`has_active`](Self::has_active) reports it as off.
    ///
    /// # Errors
    ///
    /// Returns [`OpsError::Lut`](crate::OpsError::Lut) if the points are
    /// empty or non-finite; `curves` is left unchanged.
    pub fn set_curve_points(&mut self, points: &[[f32; 2]]) -> OpsResult<()> {
        let table = CurveTable::from_control_points(points)?;
        self.curves = (!table.is_neutral()).then(|| table.as_slice().to_vec());
        debug!(points = points.len(), active = self.curves.is_some(), "Baked curve");
        Ok(())
    }

    /// Zeroes hue, HSL saturation and lightness.
    pub fn reset_hsl(&mut self) {
        self.hue = 0.0;
        self.hsl_saturation = 0.0;
        self.lightness = 0.0;
    }

    /// Restores every field to its default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
