use serde::{Deserialize, Serialize};

/// Numeric tolerances used to reject degenerate configurations.
///
/// The solver measures both ratios after translating each point set to its centroid
/// and scaling it to a mean distance of `sqrt(2)`, so they do not depend on the units
/// or the placement of the quads.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumericTol {
    /// Smallest accepted ratio between the smallest and the largest singular value of the
    /// 8x8 correspondence system.
    pub rcond: f64,
    /// Smallest accepted ratio between the smallest and the largest singular value of the
    /// solved 3x3 homography.
    pub hcond: f64,
}

impl Default for NumericTol {
    fn default() -> Self {
        Self {
            rcond: 1e-12,
            hcond: 1e-12,
        }
    }
}

/// Parameters controlling the homography solver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HomographyParams {
    /// Shared numeric tolerances.
    pub tol: NumericTol,
}
