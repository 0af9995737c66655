//! 4x4 matrix (double precision).

use crate::Vec4F64;

define_matrix_type!(
    /// 4x4 matrix (double precision).
    Mat4F64,
    glam::DMat4,
    f64,
    [f64; 16],
    Vec4F64,
    glam::DVec4
);

impl Mat4F64 {
    /// Apply the matrix to the point `(x, y, z, 1)` and divide by the resulting `w`.
    ///
    /// Returns `None` when `w` vanishes, i.e. the point is sent to infinity.
    pub fn transform_point3(&self, p: [f64; 3]) -> Option<[f64; 3]> {
        let v = *self * Vec4F64::new(p[0], p[1], p[2], 1.0);
        if v.w.abs() <= f64::EPSILON {
            return None;
        }
        let [x, y, z, _] = (v / v.w).to_array();
        Some([x, y, z])
    }
}
