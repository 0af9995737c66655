use quadwarp_algebra::{Mat3F64, Vec3F64};
use serde::{Deserialize, Serialize};

use crate::{solver::homography_condition, HomographyError, NumericTol, Point2d};

/// The coefficients of a planar projective transform.
///
/// They are the entries of the 3x3 matrix
///
/// ```text
/// | a1 a2 a3 |
/// | b1 b2 b3 |
/// | c1 c2 c3 |
/// ```
///
/// acting on homogeneous coordinates `(x, y, 1)`. Solved transforms are normalized so
/// that `c3 == 1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HomographyCoefficients {
    /// Row 0, column 0.
    pub a1: f64,
    /// Row 0, column 1.
    pub a2: f64,
    /// Row 0, column 2 (x translation).
    pub a3: f64,
    /// Row 1, column 0.
    pub b1: f64,
    /// Row 1, column 1.
    pub b2: f64,
    /// Row 1, column 2 (y translation).
    pub b3: f64,
    /// Row 2, column 0 (perspective term in x).
    pub c1: f64,
    /// Row 2, column 1 (perspective term in y).
    pub c2: f64,
    /// Row 2, column 2.
    pub c3: f64,
}

impl HomographyCoefficients {
    /// The identity transform.
    pub const IDENTITY: Self = Self::from_array([1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);

    /// Create the coefficients from a row-major 3x3 matrix.
    pub const fn from_array(h: [f64; 9]) -> Self {
        let [a1, a2, a3, b1, b2, b3, c1, c2, c3] = h;
        Self {
            a1,
            a2,
            a3,
            b1,
            b2,
            b3,
            c1,
            c2,
            c3,
        }
    }

    /// The coefficients in row-major order `[a1, a2, a3, b1, b2, b3, c1, c2, c3]`.
    pub fn to_array(&self) -> [f64; 9] {
        [
            self.a1, self.a2, self.a3, self.b1, self.b2, self.b3, self.c1, self.c2, self.c3,
        ]
    }

    /// The coefficients as a 3x3 matrix.
    pub fn to_mat3(&self) -> Mat3F64 {
        Mat3F64::from_rows_array(&self.to_array())
    }

    /// Returns `true` if every coefficient is finite.
    pub fn is_finite(&self) -> bool {
        self.to_array().iter().all(|v| v.is_finite())
    }

    /// Map a point through the transform, including the perspective division.
    ///
    /// Returns `None` when the point lies on the line sent to infinity.
    pub fn transform_point(&self, p: Point2d) -> Option<Point2d> {
        let v = self.to_mat3() * Vec3F64::new(p.x, p.y, 1.0);
        if v.z.abs() <= f64::EPSILON {
            return None;
        }
        let v = v / v.z;
        Some(Point2d::new(v.x, v.y))
    }

    /// The inverse transform, normalized so that its `c3 == 1`.
    ///
    /// Uses the default [`NumericTol`].
    pub fn inverse(&self) -> Result<Self, HomographyError> {
        self.inverse_with_tol(&NumericTol::default())
    }

    /// The inverse transform, normalized so that its `c3 == 1`.
    ///
    /// `tol.hcond` is compared against the singular values of these coefficients as
    /// they are. To invert a transform between two known quads, solving the swapped
    /// correspondences as [`PerspectiveTransform`](crate::PerspectiveTransform) does is
    /// independent of the units of either plane.
    ///
    /// # Errors
    ///
    /// Returns [`HomographyError::DegenerateConfiguration`] if the matrix is singular, or if
    /// the inverse has a vanishing bottom-right entry and cannot be normalized.
    pub fn inverse_with_tol(&self, tol: &NumericTol) -> Result<Self, HomographyError> {
        self.check_invertible(tol)?;

        let inv = Self::from_array(Mat3F64::from(self.to_mat3().inverse()).to_rows_array());
        let max_abs = inv.to_array().iter().fold(0.0f64, |acc, v| acc.max(v.abs()));
        if inv.c3.abs() <= f64::EPSILON * max_abs {
            return Err(HomographyError::DegenerateConfiguration(
                "inverse maps the origin to infinity and cannot be normalized".to_string(),
            ));
        }

        let s = inv.c3;
        Ok(Self::from_array(inv.to_array().map(|v| v / s)))
    }

    /// Fails unless the 3x3 matrix is finite and the ratio of its extreme singular values
    /// exceeds `tol.hcond`.
    fn check_invertible(&self, tol: &NumericTol) -> Result<(), HomographyError> {
        if !self.is_finite() {
            return Err(HomographyError::DegenerateConfiguration(
                "non-finite homography coefficients".to_string(),
            ));
        }

        let hcond = homography_condition(&self.to_mat3());
        if hcond.is_nan() || hcond <= tol.hcond {
            return Err(HomographyError::DegenerateConfiguration(format!(
                "singular homography (rcond = {hcond:e})"
            )));
        }

        Ok(())
    }
}

impl Default for HomographyCoefficients {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<[f64; 9]> for HomographyCoefficients {
    fn from(h: [f64; 9]) -> Self {
        Self::from_array(h)
    }
}

impl From<HomographyCoefficients> for [f64; 9] {
    fn from(h: HomographyCoefficients) -> Self {
        h.to_array()
    }
}
