//! 3x3 matrix (double precision).

use crate::Vec3F64;

define_matrix_type!(
    /// 3x3 matrix (double precision).
    Mat3F64,
    glam::DMat3,
    f64,
    [f64; 9],
    Vec3F64,
    glam::DVec3
);
