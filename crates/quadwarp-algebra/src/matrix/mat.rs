//! Macro to define a matrix type.
//!
//! The generated types are thin `#[repr(transparent)]` newtypes over the
//! corresponding `glam` matrix type and delegate arithmetic to `glam`.
//!
//! Storage is column-major, as in `glam` and in the GPU buffers the matrices end
//! up in. The `*_rows_*` helpers and `set` take values in row-major reading
//! order, which is how transforms are usually written down.
//!
//! # Arguments
//!
//! * `name`        - The name of the matrix type.
//! * `glam_type`   - The underlying `glam` matrix type.
//! * `scalar`      - The scalar type.
//! * `array`       - The flat array type (e.g. `[f64; 16]` for 4x4).
//! * `vec_type`    - The public vector type used for mat-vec mul.
//! * `glam_vec`    - The underlying `glam` vector type.
//!
macro_rules! define_matrix_type {
    (
        $(#[$meta:meta])*
        $name:ident,
        $glam_type:ty,
        $scalar:ty,
        $array:ty,
        $vec_type:ty,
        $glam_vec:ty
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq)]
        #[repr(transparent)]
        pub struct $name(pub $glam_type);

        impl $name {
            /// Create a new matrix from a row-major array.
            #[inline]
            pub fn from_rows_array(arr: &$array) -> Self {
                Self(<$glam_type>::from_cols_array(arr).transpose())
            }

            /// Return the entries in row-major order.
            #[inline]
            pub fn to_rows_array(&self) -> $array {
                self.0.transpose().to_cols_array()
            }

            /// Overwrite every entry, given in row-major order.
            #[inline]
            pub fn set(&mut self, arr: &$array) -> &mut Self {
                self.0 = <$glam_type>::from_cols_array(arr).transpose();
                self
            }

            /// Identity matrix.
            pub const IDENTITY: Self = Self(<$glam_type>::IDENTITY);

            /// All-zeros matrix.
            pub const ZERO: Self = Self(<$glam_type>::ZERO);
        }

        impl std::ops::Deref for $name {
            type Target = $glam_type;

            #[inline]
            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl std::ops::DerefMut for $name {
            #[inline]
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.0
            }
        }

        impl From<$glam_type> for $name {
            #[inline]
            fn from(m: $glam_type) -> Self {
                Self(m)
            }
        }

        impl From<$name> for $glam_type {
            #[inline]
            fn from(m: $name) -> Self {
                m.0
            }
        }

        impl std::ops::Mul<$name> for $name {
            type Output = $name;

            #[inline]
            fn mul(self, rhs: $name) -> Self::Output {
                $name::from(self.0 * rhs.0)
            }
        }

        impl std::ops::Mul<$vec_type> for $name {
            type Output = $vec_type;

            #[inline]
            fn mul(self, rhs: $vec_type) -> Self::Output {
                <$vec_type>::from(self.0 * <$glam_vec>::from(rhs))
            }
        }
    };
}
