//! Matrix types module.
//!
//! - Mat3F64: 3x3 matrix
//! - Mat4F64: 4x4 matrix

#[macro_use]
mod mat;

mod mat3;
mod mat4;

pub use mat3::Mat3F64;
pub use mat4::Mat4F64;
