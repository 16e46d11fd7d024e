//! Filter selection and the raw-buffer entry points.
//!
//! Hosts usually name adjustments with string identifiers (`"brightness"`,
//! `"hslSaturation"`, ...). [`FilterKind`] decodes those once into a closed
//! set, and [`Filter`] pairs a kind with its parameter so it can be stored,
//! compared and applied later.
//!
//! # Example
//!
//! ```rust
//! use pixtone_ops::op::{Filter, FilterKind, process};
//!
//! let kind: FilterKind = "hslSaturation".parse().unwrap();
//! assert_eq!(kind, FilterKind::HslSaturation);
//! assert_eq!(kind.to_string(), "hslSaturation");
//!
//! let mut data = vec![255u8; 2 * 2 * 4];
//! assert!(process("brightness", &mut data, 2, 2, -100.0).unwrap());
//! assert_eq!(&data[..4], &[0, 0, 0, 255]);
//!
//! // Unknown names are a no-op, not an error
//! assert!(!process("posterize", &mut data, 2, 2, 4.0).unwrap());
//! ```

use std::fmt;
use std::str::FromStr;

use pixtone_core::RgbaBufferMut;
use pixtone_lut::CurveTable;
use tracing::warn;

use crate::{OpsError, OpsResult, curves, filter, hsv_adjust, point};

/// Scalar filter identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    /// `"brightness"`
    Brightness,
    /// `"contrast"`
    Contrast,
    /// `"saturation"`
    Saturation,
    /// `"hue"`
    Hue,
    /// `"blur"`
    Blur,
    /// `"sharpen"`
    Sharpen,
    /// `"hslSaturation"`
    HslSaturation,
    /// `"lightness"`
    Lightness,
}

impl FilterKind {
    /// Every scalar filter.
    pub const ALL: [FilterKind; 8] = [
        FilterKind::Brightness,
        FilterKind::Contrast,
        FilterKind::Saturation,
        FilterKind::Hue,
        FilterKind::Blur,
        FilterKind::Sharpen,
        FilterKind::HslSaturation,
        FilterKind::Lightness,
    ];

    /// Host-facing identifier.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Brightness => "brightness",
            Self::Contrast => "contrast",
            Self::Saturation => "saturation",
            Self::Hue => "hue",
            Self::Blur => "blur",
            Self::Sharpen => "sharpen",
            Self::HslSaturation => "hslSaturation",
            Self::Lightness => "lightness",
        }
    }

    /// Looks up an identifier. Matching is exact and case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.name() == name)
    }

    /// Pairs the kind with a parameter.
    pub fn with_value(self, value: f32) -> Filter {
        match self {
            Self::Brightness => Filter::Brightness(value),
            Self::Contrast => Filter::Contrast(value),
            Self::Saturation => Filter::Saturation(value),
            Self::Hue => Filter::Hue(value),
            Self::Blur => Filter::Blur(value),
            Self::Sharpen => Filter::Sharpen(value),
            Self::HslSaturation => Filter::HslSaturation(value),
            Self::Lightness => Filter::Lightness(value),
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FilterKind {
    type Err = OpsError;

    fn from_str(s: &str) -> OpsResult<Self> {
        Self::from_name(s).ok_or_else(|| OpsError::UnknownFilter(s.to_string()))
    }
}

/// One adjustment with its parameter.
///
/// Scalar parameters are slider values, nominally `[-100, 100]` (hue in
/// degrees, blur as a radius). Out-of-range values are accepted; see each
/// filter for how it behaves.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// See [`point::brightness`].
    Brightness(f32),
    /// See [`point::contrast`].
    Contrast(f32),
    /// See [`hsv_adjust::saturation`].
    Saturation(f32),
    /// See [`hsv_adjust::hue`].
    Hue(f32),
    /// See [`filter::blur`].
    Blur(f32),
    /// See [`filter::sharpen`].
    Sharpen(f32),
    /// See [`hsv_adjust::hsl_saturation`].
    HslSaturation(f32),
    /// See [`hsv_adjust::lightness`].
    Lightness(f32),
    /// See [`curves::apply_curves`]. Tables of the wrong length are ignored.
    Curves(Vec<u8>),
}

impl Filter {
    /// Decodes a scalar filter by identifier; `None` for unknown names.
    pub fn from_name(name: &str, value: f32) -> Option<Self> {
        FilterKind::from_name(name).map(|kind| kind.with_value(value))
    }

    /// Scalar kind, or `None` for curves.
    pub fn kind(&self) -> Option<FilterKind> {
        match self {
            Self::Brightness(_) => Some(FilterKind::Brightness),
            Self::Contrast(_) => Some(FilterKind::Contrast),
            Self::Saturation(_) => Some(FilterKind::Saturation),
            Self::Hue(_) => Some(FilterKind::Hue),
            Self::Blur(_) => Some(FilterKind::Blur),
            Self::Sharpen(_) => Some(FilterKind::Sharpen),
            Self::HslSaturation(_) => Some(FilterKind::HslSaturation),
            Self::Lightness(_) => Some(FilterKind::Lightness),
            Self::Curves(_) => None,
        }
    }

    /// Scalar parameter, or `None` for curves.
    pub fn value(&self) -> Option<f32> {
        match self {
            Self::Brightness(v)
            | Self::Contrast(v)
            | Self::Saturation(v)
            | Self::Hue(v)
            | Self::Blur(v)
            | Self::Sharpen(v)
            | Self::HslSaturation(v)
            | Self::Lightness(v) => Some(*v),
            Self::Curves(_) => None,
        }
    }

    /// Returns `true` if the parameter is neutral (hosts skip it).
    ///
    /// Scalar filters are no-ops at 0, except blur, whose radius is never
    /// below 1. Curves are no-ops when the table is the identity or has the
    /// wrong length. The HSV-based filters are reported as no-ops at 0 even
    /// though running them would round-trip through HSV; callers that skip
    /// no-ops avoid that drift.
    pub fn is_noop(&self) -> bool {
        match self {
            Self::Blur(_) => false,
            Self::Curves(table) => CurveTable::from_slice(table)
                .map(|t| t.is_identity())
                .unwrap_or(true),
            Self::Brightness(v)
            | Self::Contrast(v)
            | Self::Saturation(v)
            | Self::Hue(v)
            | Self::Sharpen(v)
            | Self::HslSaturation(v)
            | Self::Lightness(v) => *v == 0.0,
        }
    }

    /// Runs the filter on `buf` in place.
    pub fn apply(&self, buf: &mut RgbaBufferMut<'_>) {
        match self {
            Self::Brightness(v) => point::brightness(buf, *v),
            Self::Contrast(v) => point::contrast(buf, *v),
            Self::Saturation(v) => hsv_adjust::saturation(buf, *v),
            Self::Hue(v) => hsv_adjust::hue(buf, *v),
            Self::Blur(v) => filter::blur(buf, *v),
            Self::Sharpen(v) => filter::sharpen(buf, *v),
            Self::HslSaturation(v) => hsv_adjust::hsl_saturation(buf, *v),
            Self::Lightness(v) => hsv_adjust::lightness(buf, *v),
            Self::Curves(table) => curves::apply_curves(buf, table),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Curves(table) => write!(f, "curves[{}]", table.len()),
            _ => {
                let (Some(kind), Some(value)) = (self.kind(), self.value()) else {
                    return Ok(());
                };
                write!(f, "{kind}({value})")
            }
        }
    }
}

/// Applies one named scalar filter to a raw RGBA8 buffer.
///
/// Returns `Ok(true)` if a filter ran and `Ok(false)` if `name` is not a
/// known identifier (the buffer is left unchanged and a warning is logged).
///
/// # Errors
///
/// Returns [`OpsError::Buffer`] if `data.len() != width * height * 4`.
pub fn process(
    name: &str,
    data: &mut [u8],
    width: u32,
    height: u32,
    value: f32,
) -> OpsResult<bool> {
    let mut buf = RgbaBufferMut::new(data, width, height)?;
    match Filter::from_name(name, value) {
        Some(filter) => {
            filter.apply(&mut buf);
            Ok(true)
        }
        None => {
            warn!(name, "unknown filter, skipping");
            Ok(false)
        }
    }
}

/// Applies a 256-entry curve table to a raw RGBA8 buffer.
///
/// A table of the wrong length leaves the buffer unchanged.
///
/// # Errors
///
/// Returns [`OpsError::Buffer`] if `data.len() != width * height * 4`.
pub fn process_curves(data: &mut [u8], width: u32, height: u32, table: &[u8]) -> OpsResult<()> {
    let mut buf = RgbaBufferMut::new(data, width, height)?;
    curves::apply_curves(&mut buf, table);
    Ok(())
}
