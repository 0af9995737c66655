use faer::prelude::SpSolver;
use quadwarp_algebra::Mat3F64;

use crate::{HomographyCoefficients, HomographyError, HomographyParams, Point2d, PointSet};

/// Number of point correspondences that determine a homography.
pub const NUM_CORRESPONDENCES: usize = 4;

/// Compute the homography mapping four source points onto four destination points.
///
/// Uses the default [`HomographyParams`]. See [`solve_homography_with_params`].
///
/// # Example
///
/// ```
/// use quadwarp_homography::{solve_homography, Point2d};
///
/// let src = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]].map(Point2d::from);
/// let dst = [[0.0, 0.0], [2.0, 0.0], [2.0, 2.0], [0.0, 2.0]].map(Point2d::from);
///
/// let h = solve_homography(&src, &dst)?;
/// assert!((h.a1 - 2.0).abs() < 1e-12);
/// assert!((h.b2 - 2.0).abs() < 1e-12);
/// # Ok::<(), quadwarp_homography::HomographyError>(())
/// ```
pub fn solve_homography(
    src: &[Point2d],
    dst: &[Point2d],
) -> Result<HomographyCoefficients, HomographyError> {
    solve_homography_with_params(src, dst, &HomographyParams::default())
}

/// Compute the homography mapping four source points onto four destination points.
///
/// Every correspondence `(sx, sy) -> (dx, dy)` contributes the two equations
///
/// ```text
/// dx * (c1*sx + c2*sy + 1) = a1*sx + a2*sy + a3
/// dy * (c1*sx + c2*sy + 1) = b1*sx + b2*sy + b3
/// ```
///
/// and the resulting 8x8 system is solved by LU decomposition with partial pivoting.
/// Both point sets are first moved to their centroid and scaled to a mean distance of
/// `sqrt(2)`, so the system and the tolerances in [`HomographyParams`] do not depend
/// on units or placement. The returned coefficients have `c3 == 1`.
///
/// # Arguments
///
/// * `src` - The source points, exactly 4.
/// * `dst` - The destination points, exactly 4, where `src[i]` maps to `dst[i]`.
/// * `params` - The solver tolerances.
///
/// # Errors
///
/// * [`HomographyError::InvalidInputCardinality`] if either set does not hold 4 points.
/// * [`HomographyError::DegenerateConfiguration`] if the points are non-finite, the
///   system is (near) singular, e.g. three collinear or two coincident points, or the
///   solved homography is itself singular.
pub fn solve_homography_with_params(
    src: &[Point2d],
    dst: &[Point2d],
    params: &HomographyParams,
) -> Result<HomographyCoefficients, HomographyError> {
    let src = as_quad(src, PointSet::Source)?;
    let dst = as_quad(dst, PointSet::Destination)?;
    homography_4pt2d(src, dst, params)
}

/// View a slice as exactly four points.
pub(crate) fn as_quad(
    points: &[Point2d],
    set: PointSet,
) -> Result<&[Point2d; NUM_CORRESPONDENCES], HomographyError> {
    points
        .try_into()
        .map_err(|_| HomographyError::InvalidInputCardinality {
            set,
            expected: NUM_CORRESPONDENCES,
            actual: points.len(),
        })
}

pub(crate) fn homography_4pt2d(
    src: &[Point2d; 4],
    dst: &[Point2d; 4],
    params: &HomographyParams,
) -> Result<HomographyCoefficients, HomographyError> {
    if !src.iter().chain(dst.iter()).all(Point2d::is_finite) {
        return Err(HomographyError::DegenerateConfiguration(
            "non-finite point coordinates".to_string(),
        ));
    }

    let (src_norm, t_src) = normalize_points(src, PointSet::Source)?;
    let (dst_norm, t_dst) = normalize_points(dst, PointSet::Destination)?;

    let (mat_a, mat_b) = build_system(&src_norm, &dst_norm);

    // reject (near) singular systems before solving
    let rcond = reciprocal_condition(&mat_a);
    if rcond.is_nan() || rcond <= params.tol.rcond {
        log::debug!(
            "rejecting correspondences {src:?} -> {dst:?}: rcond {rcond:e} <= {:e}",
            params.tol.rcond
        );
        return Err(HomographyError::DegenerateConfiguration(format!(
            "singular correspondence system (rcond = {rcond:e})"
        )));
    }

    // solve -> h: 8x1
    let h = mat_a.partial_piv_lu().solve(mat_b.as_ref());

    #[rustfmt::skip]
    let h_norm = Mat3F64::from_rows_array(&[
        h[(0, 0)], h[(1, 0)], h[(2, 0)],
        h[(3, 0)], h[(4, 0)], h[(5, 0)],
        h[(6, 0)], h[(7, 0)], 1.0,
    ]);

    // collinear destination points give a regular system with a singular solution
    let hcond = homography_condition(&h_norm);
    if hcond.is_nan() || hcond <= params.tol.hcond {
        log::debug!(
            "rejecting correspondences {src:?} -> {dst:?}: hcond {hcond:e} <= {:e}",
            params.tol.hcond
        );
        return Err(HomographyError::DegenerateConfiguration(format!(
            "singular homography (rcond = {hcond:e})"
        )));
    }

    // denormalize: H = T_dst^-1 * H_norm * T_src
    let h = Mat3F64::from(t_dst.inverse()) * h_norm * t_src;
    let h = h.to_rows_array();

    let max_abs = h.iter().fold(0.0f64, |acc, v| acc.max(v.abs()));
    if h[8].abs() <= f64::EPSILON * max_abs {
        log::debug!("rejecting correspondences {src:?} -> {dst:?}: h33 {:e}", h[8]);
        return Err(HomographyError::DegenerateConfiguration(
            "the source origin maps to infinity and c3 cannot be normalized".to_string(),
        ));
    }

    let c3 = h[8];
    let coeffs = HomographyCoefficients::from_array(h.map(|v| v / c3));
    if !coeffs.is_finite() {
        return Err(HomographyError::DegenerateConfiguration(
            "non-finite homography coefficients".to_string(),
        ));
    }

    log::debug!(
        "solved homography {:?} (rcond {rcond:e}, hcond {hcond:e})",
        coeffs.to_array()
    );

    Ok(coeffs)
}

/// Translate the points to their centroid and scale them to a mean distance of
/// `sqrt(2)` from it.
///
/// Returns the normalized points and the 3x3 similarity that produced them.
fn normalize_points(
    points: &[Point2d; 4],
    set: PointSet,
) -> Result<([Point2d; 4], Mat3F64), HomographyError> {
    let n = points.len() as f64;
    let cx = points.iter().map(|p| p.x).sum::<f64>() / n;
    let cy = points.iter().map(|p| p.y).sum::<f64>() / n;

    let mean_dist = points
        .iter()
        .map(|p| (p.x - cx).hypot(p.y - cy))
        .sum::<f64>()
        / n;

    // all points coincide, at least to the precision of their coordinates
    if mean_dist <= f64::EPSILON * cx.abs().max(cy.abs()) || !mean_dist.is_normal() {
        return Err(HomographyError::DegenerateConfiguration(format!(
            "{set} points coincide"
        )));
    }

    let s = std::f64::consts::SQRT_2 / mean_dist;
    let t = Mat3F64::from_rows_array(&[s, 0.0, -s * cx, 0.0, s, -s * cy, 0.0, 0.0, 1.0]);
    let normalized = points.map(|p| Point2d::new(s * (p.x - cx), s * (p.y - cy)));

    Ok((normalized, t))
}

/// Build the 8x8 system `A h = b` in the unknowns `(a1, a2, a3, b1, b2, b3, c1, c2)`.
fn build_system(src: &[Point2d; 4], dst: &[Point2d; 4]) -> (faer::Mat<f64>, faer::Mat<f64>) {
    let mut mat_a = faer::Mat::<f64>::zeros(8, 8);
    let mut mat_b = faer::Mat::<f64>::zeros(8, 1);

    for (i, (s, d)) in src.iter().zip(dst.iter()).enumerate() {
        let (rx, ry) = (2 * i, 2 * i + 1);

        mat_a[(rx, 0)] = s.x;
        mat_a[(rx, 1)] = s.y;
        mat_a[(rx, 2)] = 1.0;
        mat_a[(rx, 6)] = -d.x * s.x;
        mat_a[(rx, 7)] = -d.x * s.y;
        mat_b[(rx, 0)] = d.x;

        mat_a[(ry, 3)] = s.x;
        mat_a[(ry, 4)] = s.y;
        mat_a[(ry, 5)] = 1.0;
        mat_a[(ry, 6)] = -d.y * s.x;
        mat_a[(ry, 7)] = -d.y * s.y;
        mat_b[(ry, 0)] = d.y;
    }

    (mat_a, mat_b)
}

/// Ratio of the smallest to the largest singular value of a 3x3 homography.
pub(crate) fn homography_condition(h: &Mat3F64) -> f64 {
    let rows = h.to_rows_array();
    reciprocal_condition(&faer::Mat::<f64>::from_fn(3, 3, |i, j| rows[3 * i + j]))
}

/// Ratio of the smallest to the largest singular value, `0` for the zero matrix.
fn reciprocal_condition(mat: &faer::Mat<f64>) -> f64 {
    let singular_values = mat.singular_values();
    let (min, max) = singular_values
        .iter()
        .fold((f64::INFINITY, 0.0f64), |(min, max), &s| {
            (min.min(s), max.max(s))
        });
    if max == 0.0 {
        return 0.0;
    }
    min / max
}
