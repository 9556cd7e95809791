//! `vectors` submodule implements fixed-size vectors with `f32` and `i32` components which are used
//! to represent points, directions and homogeneous coordinates.
//!
//! Float vectors are [`Vec2`], [`Vec3`] and [`Vec4`], integer ones are [`Vec2i`] and [`Vec3i`].
//! All of them are `Copy` values; arithmetic is componentwise and always returns a new vector.
//!
//! Operations between integer and float vectors promote to the float type, although the set of
//! such operations is not symmetric: [`Vec2`] accepts [`Vec2i`] operands, but [`Vec2i`] does not
//! accept [`Vec2`] ones, while [`Vec3i`] implements mixed operations with [`Vec3`] on its side.
//!
//! Equality is exact IEEE-754 componentwise equality; use `almost_eq` methods or functions
//! from [`floats`](crate::floats) module to compare results of computations.
//!

// Vector types are not unified under one generic vector, since their operation sets differ
// (mixed-type operators, `Vec4` multiplication), so common parts are generated by macros.
//
/// [`impl_vector`] macro implements all common associated functions, methods and traits on vectors.
///
/// Struct is expected to consist only of listed fields.
///
macro_rules! impl_vector {
    ($struct:ident, $type:ty, $size:literal, $zero:literal, ($($field:ident),+)) => {
        impl $struct {
            /// Vector that has all components equal to zero.
            ///
            pub const ORIGIN: Self = Self { $($field: $zero),+ };

            /// Initializes vector from its components.
            ///
            pub const fn new($($field: $type),+) -> Self {
                Self { $($field),+ }
            }

            /// Returns components of vector in order.
            ///
            pub fn components(&self) -> [$type; $size] {
                [$(self.$field),+]
            }

            /// Applies function to every vector component and returns changed vector.
            ///
            pub fn map(self, f: impl Fn($type) -> $type) -> Self {
                Self { $($field: f(self.$field)),+ }
            }
            /// Combines vectors by applying function on their components.
            ///
            pub fn combine(self, other: Self, f: impl Fn($type, $type) -> $type) -> Self {
                Self { $($field: f(self.$field, other.$field)),+ }
            }

            /// Performs dot product operation on two vectors.
            ///
            pub fn dot_product(self, other: Self) -> $type {
                self.components()
                    .iter()
                    .zip(other.components().iter())
                    .fold($zero, |acc, (a, b)| acc + *a * *b)
            }
        }
        impl Default for $struct {
            fn default() -> Self {
                Self::ORIGIN
            }
        }
        impl From<[$type; $size]> for $struct {
            fn from(arr: [$type; $size]) -> Self {
                let [$($field),+] = arr;
                Self { $($field),+ }
            }
        }
        impl ::std::ops::Neg for $struct {
            type Output = Self;

            fn neg(self) -> Self::Output {
                self.map(|a| -a)
            }
        }
        impl ::std::fmt::Display for $struct {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}(", stringify!($struct))?;
                for (i, (name, value)) in [$((stringify!($field), self.$field)),+].iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}={}", name, value)?;
                }
                write!(f, ")")
            }
        }
    };
}

/// [`impl_vectorf`] macro implements all common associated functions, methods and traits on
/// vectors with float components.
///
/// This macro depends on [`impl_vector`] macro.
///
macro_rules! impl_vectorf {
    ($struct:ident, $size:literal) => {
        impl $struct {
            /// Returns length (euclidean norm) of vector.
            ///
            pub fn length(&self) -> f32 {
                $crate::scalars::distancef(&self.components())
            }

            /// Returns vector of unit length that is parallel to this one (`self / self.length()`).
            ///
            /// Normalizing vector of zero length is not guarded and results in
            /// non-finite components.
            ///
            pub fn normalized(self) -> Self {
                let length: f32 = self.length();
                if length == 0.0 {
                    log::trace!("normalizing zero-length `{}`", stringify!($struct));
                }
                self / length
            }

            /// Checks whether vectors are equal with `floats::almost_equal` precision.
            ///
            pub fn almost_eq(&self, other: &Self) -> bool {
                self.components()
                    .iter()
                    .zip(other.components().iter())
                    .all(|(&a, &b)| $crate::floats::almost_equal(a, b))
            }
        }
        impl $crate::floats::FloatOperations for $struct {
            /// Constructs new vector by rounding every vector component to given amount of digits after floating point.
            ///
            fn round_up_to(self, digits: i32) -> Self {
                self.map(|elem| $crate::floats::FloatOperations::round_up_to(elem, digits))
            }
            /// Constructs new vector by correcting every vector component that may be wronged by float operations.
            ///
            fn correct_to(self, digits: i32) -> Self {
                self.map(|elem| $crate::floats::FloatOperations::correct_to(elem, digits))
            }
        }
        impl ::std::hash::Hash for $struct {
            fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                self.components()
                    .iter()
                    .for_each(|&elem| $crate::floats::hash_f32(elem, state));
            }
        }
        impl From<[i32; $size]> for $struct {
            fn from(arr: [i32; $size]) -> Self {
                Self::from(arr.map(|elem| elem as f32))
            }
        }
    };
}
/// [`impl_vectori`] macro implements all common associated functions, methods and traits on
/// vectors with integer components.
///
/// `$fstruct` is the float counterpart of vector which is used for length-related operations.
///
/// This macro depends on [`impl_vector`] macro.
///
macro_rules! impl_vectori {
    ($struct:ident, $fstruct:ident) => {
        impl $struct {
            /// Returns length (euclidean norm) of vector.
            ///
            pub fn length(&self) -> f32 {
                $crate::scalars::distancef(&self.components().map(|elem| elem as f32))
            }

            /// Returns float vector of unit length that is parallel to this one
            /// (components are divided by float length, so the result is not truncated).
            ///
            /// Normalizing vector of zero length is not guarded and results in
            /// non-finite components.
            ///
            pub fn normalized(self) -> $fstruct {
                let length: f32 = self.length();
                if length == 0.0 {
                    log::trace!("normalizing zero-length `{}`", stringify!($struct));
                }
                $fstruct::from(self) / length
            }
        }
        impl From<$struct> for $fstruct {
            /// Widens every component to `f32`.
            ///
            fn from(value: $struct) -> Self {
                $fstruct::from(value.components().map(|elem| elem as f32))
            }
        }
        impl From<$fstruct> for $struct {
            /// Truncates every component towards zero.
            ///
            fn from(value: $fstruct) -> Self {
                $struct::from(value.components().map(|elem| elem as i32))
            }
        }
    };
}

// All the following macros depend on [`impl_vector`] macro.
/// [`impl_vector_vector_operations`] macro implements componentwise vector-vector operations for vector.
///
macro_rules! impl_vector_vector_operations {
    ($struct_name:ident, ($(($trait:ident, $method:ident, $op:tt),)+)) => {$(
        impl $trait<Self> for $struct_name {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self::Output {
                self.combine(rhs, |a, b| a $op b)
            }
        }
    )+}
}
/// [`impl_vector_rhs_operations`] macro implements vector-scalar operations for vector.
///
/// `as` form casts scalar to component type before applying the operation.
///
macro_rules! impl_vector_rhs_operations {
    ($struct_name:ident, $rhs:ty, ($(($trait:ident, $method:ident, $op:tt),)+)) => {$(
        impl $trait<$rhs> for $struct_name {
            type Output = Self;

            fn $method(self, rhs: $rhs) -> Self::Output {
                self.map(|a| a $op rhs)
            }
        }
    )+};
    ($struct_name:ident, $rhs:ty as $cast:ty, ($(($trait:ident, $method:ident, $op:tt),)+)) => {$(
        impl $trait<$rhs> for $struct_name {
            type Output = Self;

            fn $method(self, rhs: $rhs) -> Self::Output {
                let rhs: $cast = rhs as $cast;
                self.map(|a| a $op rhs)
            }
        }
    )+};
}
/// [`impl_promoted_operations`] macro implements operations whose left operand is first converted
/// to `$out` vector type (integer vectors are widened to float ones).
///
/// Vector operands are converted as well, `scalar` operands are used as is.
///
macro_rules! impl_promoted_operations {
    ($lhs:ident, scalar $rhs:ty => $out:ident, ($(($trait:ident, $method:ident, $op:tt),)+)) => {$(
        impl $trait<$rhs> for $lhs {
            type Output = $out;

            fn $method(self, rhs: $rhs) -> Self::Output {
                $out::from(self) $op rhs
            }
        }
    )+};
    ($lhs:ident, $rhs:ident => $out:ident, ($(($trait:ident, $method:ident, $op:tt),)+)) => {$(
        impl $trait<$rhs> for $lhs {
            type Output = $out;

            fn $method(self, rhs: $rhs) -> Self::Output {
                $out::from(self) $op $out::from(rhs)
            }
        }
    )+};
}

mod vec2;
mod vec3;
mod vec4;

pub use vec2::{Vec2, Vec2i};
pub use vec3::{Vec3, Vec3i};
pub use vec4::Vec4;
