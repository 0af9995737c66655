//! 3D vector (double precision).

define_vector_type!(
    /// 3D vector (double precision), used for homogeneous 2D coordinates.
    Vec3F64,
    glam::DVec3,
    f64,
    [f64; 3],
    [x, y, z]
);
