use serde::{Deserialize, Serialize};

use crate::HomographyError;

/// A point in the plane.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point2d {
    /// The x coordinate.
    pub x: f64,
    /// The y coordinate.
    pub y: f64,
}

impl Point2d {
    /// Create a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns `true` if both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<[f64; 2]> for Point2d {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point2d {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<Point2d> for [f64; 2] {
    fn from(p: Point2d) -> Self {
        [p.x, p.y]
    }
}

/// Build points from an interleaved `[x0, y0, x1, y1, ...]` coordinate list.
///
/// # Errors
///
/// Returns [`HomographyError::InvalidFlatCoordinates`] if the list has an odd length.
///
/// # Example
///
/// ```
/// use quadwarp_homography::{points_from_flat, Point2d};
///
/// let pts = points_from_flat(&[0.0, 0.0, 1.0, 0.0]).unwrap();
/// assert_eq!(pts, vec![Point2d::new(0.0, 0.0), Point2d::new(1.0, 0.0)]);
/// ```
pub fn points_from_flat(values: &[f64]) -> Result<Vec<Point2d>, HomographyError> {
    if values.len() % 2 != 0 {
        return Err(HomographyError::InvalidFlatCoordinates(values.len()));
    }
    Ok(values
        .chunks_exact(2)
        .map(|xy| Point2d::new(xy[0], xy[1]))
        .collect())
}
