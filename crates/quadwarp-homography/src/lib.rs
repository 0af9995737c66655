#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Quad-to-quad perspective transforms
//!
//! Solve the planar homography that maps four source points onto four destination
//! points, and pack it into a 4x4 matrix that a 3D renderer can apply to vertices
//! directly: x and y are warped, z passes through.
//!
//! ## Example
//!
//! ```rust
//! use quadwarp_homography::{get_perspective_transform, solve_homography, Point2d};
//!
//! let src = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]].map(Point2d::from);
//! let dst = [[10.0, 10.0], [110.0, 20.0], [100.0, 90.0], [5.0, 100.0]].map(Point2d::from);
//!
//! // the 3x3 homography coefficients, c3 == 1
//! let h = solve_homography(&src, &dst)?;
//! let corner = h.transform_point(src[2]).unwrap();
//! assert!((corner.x - 100.0).abs() < 1e-9);
//!
//! // the same transform as a 4x4 matrix
//! let m = get_perspective_transform(&src, &dst)?;
//! println!("{:?}", m.to_rows_array());
//! # Ok::<(), quadwarp_homography::HomographyError>(())
//! ```

mod coeffs;
pub use coeffs::HomographyCoefficients;

mod embed;
pub use embed::{embed_as_mat4, get_perspective_transform, get_perspective_transform_with_params};

mod error;
pub use error::{HomographyError, PointSet};

mod params;
pub use params::{HomographyParams, NumericTol};

mod point;
pub use point::{points_from_flat, Point2d};

mod solver;
pub use solver::{solve_homography, solve_homography_with_params, NUM_CORRESPONDENCES};

mod transform;
pub use transform::PerspectiveTransform;

pub use quadwarp_algebra::{Mat3F64, Mat4F64};
