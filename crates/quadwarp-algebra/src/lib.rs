#![deny(missing_docs)]
//! Algebraic types for quadwarp.
//!
//! Newtypes over the `glam` double precision backend:
//! - vectors: [`Vec3F64`], [`Vec4F64`]
//! - matrices: [`Mat3F64`], [`Mat4F64`]

mod matrix;
mod vector;

pub use matrix::{Mat3F64, Mat4F64};
pub use vector::{Vec3F64, Vec4F64};
