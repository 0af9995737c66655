//! 4D vector (double precision).

define_vector_type!(
    /// 4D vector (double precision), used for homogeneous 3D coordinates.
    Vec4F64,
    glam::DVec4,
    f64,
    [f64; 4],
    [x, y, z, w]
);
