//! Macro to define a vector type.
//!
//! # Arguments
//!
//! * `name` - The name of the vector type.
//! * `glam_type` - The underlying glam type.
//! * `scalar` - The scalar type.
//! * `array` - The array type.
//! * `fields` - The fields of the vector.
//!
macro_rules! define_vector_type {
    ($(#[$meta:meta])* $name:ident, $glam_type:ty, $scalar:ty, $array:ty, [$($field:ident),+]) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq)]
        pub struct $name {
            $(
                #[doc = concat!("The `", stringify!($field), "` component.")]
                pub $field: $scalar
            ),+
        }

        impl $name {
            /// Create a new vector from its components.
            #[inline]
            pub fn new($($field: $scalar),+) -> Self {
                Self { $($field),+ }
            }

            /// Create a vector from an array.
            #[inline]
            pub fn from_array(arr: $array) -> Self {
                let [$($field),+] = arr;
                Self { $($field),+ }
            }

            /// Convert the vector to an array.
            #[inline]
            pub fn to_array(self) -> $array {
                [$(self.$field),+]
            }
        }

        impl From<$glam_type> for $name {
            #[inline]
            fn from(v: $glam_type) -> Self {
                Self {
                    $($field: v.$field),+
                }
            }
        }

        impl From<$name> for $glam_type {
            #[inline]
            fn from(v: $name) -> Self {
                <$glam_type>::new($(v.$field),+)
            }
        }

        impl From<$array> for $name {
            #[inline]
            fn from(arr: $array) -> Self {
                Self::from_array(arr)
            }
        }

        impl From<$name> for $array {
            #[inline]
            fn from(v: $name) -> Self {
                v.to_array()
            }
        }

        impl std::ops::Div<$scalar> for $name {
            type Output = Self;

            #[inline]
            fn div(self, rhs: $scalar) -> Self::Output {
                let a: $glam_type = self.into();
                Self::from(a / rhs)
            }
        }
    };
}
