use quadwarp_algebra::Mat4F64;

use crate::{
    embed_as_mat4,
    solver::{as_quad, homography_4pt2d},
    HomographyCoefficients, HomographyError, HomographyParams, Point2d, PointSet,
};

/// A solved quad-to-quad perspective transform together with its inverse.
#[derive(Debug, Clone, PartialEq)]
pub struct PerspectiveTransform {
    src: [Point2d; 4],
    dst: [Point2d; 4],
    coeffs: HomographyCoefficients,
    coeffs_inv: HomographyCoefficients,
}

impl PerspectiveTransform {
    /// Solve the transform mapping `src[i]` onto `dst[i]` with the default parameters.
    pub fn new(src: &[Point2d], dst: &[Point2d]) -> Result<Self, HomographyError> {
        Self::with_params(src, dst, &HomographyParams::default())
    }

    /// Solve the transform mapping `src[i]` onto `dst[i]`.
    ///
    /// The inverse is solved from the swapped correspondences rather than by inverting
    /// the forward matrix.
    ///
    /// # Errors
    ///
    /// Fails like [`solve_homography_with_params`](crate::solve_homography_with_params),
    /// and with [`HomographyError::DegenerateConfiguration`] if the inverse cannot be
    /// normalized to `c3 == 1`.
    pub fn with_params(
        src: &[Point2d],
        dst: &[Point2d],
        params: &HomographyParams,
    ) -> Result<Self, HomographyError> {
        let src = *as_quad(src, PointSet::Source)?;
        let dst = *as_quad(dst, PointSet::Destination)?;
        let coeffs = homography_4pt2d(&src, &dst, params)?;
        let coeffs_inv = homography_4pt2d(&dst, &src, params)?;
        Ok(Self {
            src,
            dst,
            coeffs,
            coeffs_inv,
        })
    }

    /// The source quad.
    pub fn src(&self) -> &[Point2d; 4] {
        &self.src
    }

    /// The destination quad.
    pub fn dst(&self) -> &[Point2d; 4] {
        &self.dst
    }

    /// The forward coefficients, src -> dst.
    pub fn coeffs(&self) -> &HomographyCoefficients {
        &self.coeffs
    }

    /// The inverse coefficients, dst -> src.
    pub fn coeffs_inv(&self) -> &HomographyCoefficients {
        &self.coeffs_inv
    }

    /// Map a point from the source plane to the destination plane.
    pub fn transform(&self, p: Point2d) -> Option<Point2d> {
        self.coeffs.transform_point(p)
    }

    /// Map a point from the destination plane back to the source plane.
    pub fn transform_inverse(&self, p: Point2d) -> Option<Point2d> {
        self.coeffs_inv.transform_point(p)
    }

    /// The forward transform as a 4x4 matrix, see [`embed_as_mat4`].
    pub fn to_mat4(&self) -> Mat4F64 {
        embed_as_mat4(&self.coeffs)
    }
}
