//! Vector types module.
//!
//! - Vec3F64: 3D vector
//! - Vec4F64: 4D vector

#[macro_use]
mod vec;

mod vec3;
mod vec4;

pub use vec3::Vec3F64;
pub use vec4::Vec4F64;
