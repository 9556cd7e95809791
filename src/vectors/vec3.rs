//! Three-dimensional vectors.
//!

use crate::vectors::Vec4;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// [`Vec3`] struct represents three-dimensional vector or point with `f32` components.
///
/// # Examples
/// ```rust
/// # use extmath::vectors::{Vec3, Vec4};
/// let x: Vec3 = Vec3::new(1.0, 0.0, 0.0);
/// let y: Vec3 = Vec3::new(0.0, 1.0, 0.0);
/// assert_eq!(x.cross_product(y), Vec3::new(0.0, 0.0, 1.0));
/// assert_eq!(Vec3::new(1.0, 2.0, 3.0).dot_product(Vec3::new(4.0, 5.0, 6.0)), 32.0);
/// assert_eq!(x.to_vec4(), Vec4::new(1.0, 0.0, 0.0, 1.0));
/// ```
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq)]
pub struct Vec3 {
    /// X component of vector.
    ///
    pub x: f32,

    /// Y component of vector.
    ///
    pub y: f32,

    /// Z component of vector.
    ///
    pub z: f32,
}
impl Vec3 {
    /// Returns cross product of two vectors.
    ///
    pub fn cross_product(self, other: Self) -> Self {
        Vec3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Lifts vector into homogeneous coordinates as a point (`w = 1`).
    ///
    pub fn to_vec4(self) -> Vec4 {
        Vec4::new(self.x, self.y, self.z, 1.0)
    }
}
impl_vector!(Vec3, f32, 3, 0.0, (x, y, z));
impl_vectorf!(Vec3, 3);
impl_vector_vector_operations!(Vec3, ((Add, add, +),
                                      (Sub, sub, -),
                                      (Mul, mul, *),
                                      (Div, div, /),));
impl_vector_rhs_operations!(Vec3, f32, ((Mul, mul, *),
                                        (Div, div, /),));
impl_vector_rhs_operations!(Vec3, i32 as f32, ((Mul, mul, *),
                                               (Div, div, /),));

/// [`Vec3i`] struct represents three-dimensional vector or point with `i32` components.
///
/// Unlike [`Vec2i`](crate::vectors::Vec2i), this vector implements operations with float
/// vectors on its side: `Vec3i + Vec3` is promoted to [`Vec3`].
///
/// # Examples
/// ```rust
/// # use extmath::vectors::{Vec3, Vec3i};
/// let v: Vec3i = Vec3i::new(1, 2, 3);
/// assert_eq!(v + Vec3::new(0.5, 0.5, 0.5), Vec3::new(1.5, 2.5, 3.5));
/// assert_eq!(v.cross_product(Vec3i::new(4, 5, 6)), Vec3i::new(-3, 6, -3));
/// assert_eq!(v.dot_product(Vec3i::new(4, 5, 6)), 32);
/// ```
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Vec3i {
    /// X component of vector.
    ///
    pub x: i32,

    /// Y component of vector.
    ///
    pub y: i32,

    /// Z component of vector.
    ///
    pub z: i32,
}
impl Vec3i {
    /// Returns cross product of two vectors.
    ///
    pub fn cross_product(self, other: Self) -> Self {
        Vec3i::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Converts vector to float one.
    ///
    pub fn to_vec3(self) -> Vec3 {
        Vec3::from(self)
    }
}
impl_vector!(Vec3i, i32, 3, 0, (x, y, z));
impl_vectori!(Vec3i, Vec3);
impl_vector_vector_operations!(Vec3i, ((Add, add, +),
                                       (Sub, sub, -),
                                       (Mul, mul, *),
                                       (Div, div, /),));
impl_promoted_operations!(Vec3i, Vec3 => Vec3, ((Add, add, +),
                                                (Sub, sub, -),
                                                (Mul, mul, *),
                                                (Div, div, /),));
impl_vector_rhs_operations!(Vec3i, i32, ((Mul, mul, *),
                                         (Div, div, /),));
impl_promoted_operations!(Vec3i, scalar f32 => Vec3, ((Mul, mul, *),
                                                      (Div, div, /),));
