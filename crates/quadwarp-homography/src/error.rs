use std::fmt;

/// Which side of a correspondence set a point list belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointSet {
    /// The points being mapped from.
    Source,
    /// The points being mapped onto.
    Destination,
}

impl fmt::Display for PointSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointSet::Source => write!(f, "source"),
            PointSet::Destination => write!(f, "destination"),
        }
    }
}

/// An error type for the homography module.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum HomographyError {
    /// The source or destination set does not hold the required number of points.
    #[error("Expected exactly {expected} {set} points, got {actual}")]
    InvalidInputCardinality {
        /// The offending point set.
        set: PointSet,
        /// Number of points required by the solver.
        expected: usize,
        /// Number of points provided.
        actual: usize,
    },

    /// The correspondences do not determine a unique, invertible homography.
    #[error("Degenerate point configuration: {0}")]
    DegenerateConfiguration(String),

    /// A flat `[x0, y0, x1, y1, ...]` coordinate list has an odd length.
    #[error("Flat coordinate list must have an even length, got {0}")]
    InvalidFlatCoordinates(usize),
}
