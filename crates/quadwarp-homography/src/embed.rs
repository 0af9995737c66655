use quadwarp_algebra::Mat4F64;

use crate::{
    solve_homography_with_params, HomographyCoefficients, HomographyError, HomographyParams,
    Point2d,
};

/// Embed a planar homography into a 4x4 matrix that leaves the z axis untouched.
///
/// The 2D rows go to rows 0, 1 and 3 (x, y and the homogeneous w), with a zero in
/// the z column. Row 2 is the identity row for z:
///
/// ```text
/// | a1 a2 0 a3 |
/// | b1 b2 0 b3 |
/// | 0  0  1 0  |
/// | c1 c2 0 c3 |
/// ```
pub fn embed_as_mat4(coeffs: &HomographyCoefficients) -> Mat4F64 {
    let HomographyCoefficients {
        a1,
        a2,
        a3,
        b1,
        b2,
        b3,
        c1,
        c2,
        c3,
    } = *coeffs;

    #[rustfmt::skip]
    let rows = [
        a1,  a2,  0.0, a3,
        b1,  b2,  0.0, b3,
        0.0, 0.0, 1.0, 0.0,
        c1,  c2,  0.0, c3,
    ];

    let mut m = Mat4F64::IDENTITY;
    m.set(&rows);
    m
}

/// Compute the 4x4 perspective transform mapping four source points onto four
/// destination points in the xy plane.
///
/// Uses the default [`HomographyParams`].
///
/// # Example
///
/// ```
/// use quadwarp_homography::{get_perspective_transform, Point2d};
///
/// let src = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]].map(Point2d::from);
/// let dst = [[0.0, 0.0], [2.0, 0.0], [2.0, 2.0], [0.0, 2.0]].map(Point2d::from);
///
/// let m = get_perspective_transform(&src, &dst)?;
/// let p = m.transform_point3([0.5, 0.5, 7.0]).unwrap();
/// assert!((p[0] - 1.0).abs() < 1e-12);
/// assert_eq!(p[2], 7.0);
/// # Ok::<(), quadwarp_homography::HomographyError>(())
/// ```
pub fn get_perspective_transform(
    src: &[Point2d],
    dst: &[Point2d],
) -> Result<Mat4F64, HomographyError> {
    get_perspective_transform_with_params(src, dst, &HomographyParams::default())
}

/// Same as [`get_perspective_transform`] with explicit solver parameters.
pub fn get_perspective_transform_with_params(
    src: &[Point2d],
    dst: &[Point2d],
    params: &HomographyParams,
) -> Result<Mat4F64, HomographyError> {
    let coeffs = solve_homography_with_params(src, dst, params)?;
    Ok(embed_as_mat4(&coeffs))
}
