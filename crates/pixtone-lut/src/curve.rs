//! 256-entry tone curve for 8-bit channels.
//!
//! A [`CurveTable`] maps every input intensity `0..=255` to an output
//! intensity. The same table is applied independently to R, G and B.
//!
//! Tables are usually baked from a handful of user-placed control points
//! with [`CurveTable::from_control_points`], which interpolates linearly
//! between neighbours and holds the end values flat outside the outermost
//! points.

use crate::{LutError, LutResult};

/// Number of entries in a curve table.
pub const CURVE_SIZE: usize = 256;

/// A per-channel 8-bit lookup table.
///
/// # Example
///
/// ```rust
/// use pixtone_lut::CurveTable;
///
/// // Lift shadows: (0, 0) -> (0, 40), keep white at 255
/// let curve = CurveTable::from_control_points(&[[0.0, 40.0], [255.0, 255.0]]).unwrap();
/// assert_eq!(curve.lookup(0), 40);
/// assert_eq!(curve.lookup(255), 255);
/// assert!(!curve.is_identity());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CurveTable([u8; CURVE_SIZE]);

impl CurveTable {
    /// Creates the identity table (`table[i] == i`).
    pub fn identity() -> Self {
        let mut table = [0u8; CURVE_SIZE];
        for (i, v) in table.iter_mut().enumerate() {
            *v = i as u8;
        }
        Self(table)
    }

    /// Creates a table from exactly 256 bytes.
    ///
    /// # Errors
    ///
    /// Returns [`LutError::InvalidSize`] if `data.len() != 256`.
    pub fn from_slice(data: &[u8]) -> LutResult<Self> {
        let table: [u8; CURVE_SIZE] = data.try_into().map_err(|_| {
            LutError::InvalidSize(format!(
                "curve table needs {CURVE_SIZE} entries, got {}",
                data.len()
            ))
        })?;
        Ok(Self(table))
    }

    /// Bakes a table from `[input, output]` control points.
    ///
    /// Points are sorted by input. For each entry `i`:
    /// - `i <= first.x` takes `first.y`
    /// - `i >= last.x` takes `last.y`
    /// - otherwise `y` is interpolated linearly inside the enclosing segment
    ///
    /// The result is rounded half-up and clamped to `[0, 255]`.
    ///
    /// # Errors
    ///
    /// - [`LutError::InvalidSize`] if `points` is empty
    /// - [`LutError::NonFinite`] if any coordinate is NaN or infinite
    pub fn from_control_points(points: &[[f32; 2]]) -> LutResult<Self> {
        if points.is_empty() {
            return Err(LutError::InvalidSize(
                "curve needs at least one control point".into(),
            ));
        }
        if let Some(p) = points.iter().find(|p| !p[0].is_finite() || !p[1].is_finite()) {
            return Err(LutError::NonFinite { x: p[0], y: p[1] });
        }

        let mut sorted = points.to_vec();
        sorted.sort_by(|a, b| a[0].total_cmp(&b[0]));

        let mut table = [0u8; CURVE_SIZE];
        for (i, v) in table.iter_mut().enumerate() {
            let y = eval_linear(&sorted, i as f32);
            *v = (y + 0.5).floor().clamp(0.0, 255.0) as u8;
        }
        Ok(Self(table))
    }

    /// Maps one input intensity.
    #[inline]
    pub fn lookup(&self, value: u8) -> u8 {
        self.0[value as usize]
    }

    /// Returns the entries.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Returns the entries as a fixed-size array.
    #[inline]
    pub fn as_array(&self) -> &[u8; CURVE_SIZE] {
        &self.0
    }

    /// Returns `true` if every entry maps to itself.
    pub fn is_identity(&self) -> bool {
        self.0.iter().enumerate().all(|(i, &v)| v as usize == i)
    }

    /// Returns `true` if no entry moves by more than one code value.
    ///
    /// Curves dragged back near the diagonal bake to tables like this;
    /// `Adjustments::set_curve_points` in `pixtone-ops` stores them as
    /// "no curve".
    pub fn is_neutral(&self) -> bool {
        self.0
            .iter()
            .enumerate()
            .all(|(i, &v)| (v as i32 - i as i32).abs() < 2)
    }
}

impl Default for CurveTable {
    fn default() -> Self {
        Self::identity()
    }
}

impl TryFrom<&[u8]> for CurveTable {
    type Error = LutError;

    fn try_from(data: &[u8]) -> LutResult<Self> {
        Self::from_slice(data)
    }
}

impl From<[u8; CURVE_SIZE]> for CurveTable {
    fn from(table: [u8; CURVE_SIZE]) -> Self {
        Self(table)
    }
}

impl AsRef<[u8]> for CurveTable {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Piecewise-linear evaluation over points sorted by x.
fn eval_linear(points: &[[f32; 2]], x: f32) -> f32 {
    let first = points[0];
    let last = points[points.len() - 1];
    if x <= first[0] {
        return first[1];
    }
    if x >= last[0] {
        return last[1];
    }

    for pair in points.windows(2) {
        let (p1, p2) = (pair[0], pair[1]);
        if x >= p1[0] && x <= p2[0] {
            let dx = p2[0] - p1[0];
            if dx == 0.0 {
                return p1[1];
            }
            let ratio = (x - p1[0]) / dx;
            return p1[1] + ratio * (p2[1] - p1[1]);
        }
    }

    0.0
}
