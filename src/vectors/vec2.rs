//! Two-dimensional vectors.
//!

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// [`Vec2`] struct represents two-dimensional vector or point with `f32` components.
///
/// # Examples
/// ```rust
/// # use extmath::vectors::{Vec2, Vec2i};
/// let v: Vec2 = Vec2::new(3.0, 4.0);
/// assert_eq!(v.length(), 5.0);
/// assert_eq!(v.normalized(), Vec2::new(0.6, 0.8));
///
/// assert_eq!(v + Vec2i::new(1, 1), Vec2::new(4.0, 5.0));
/// assert_eq!(v * 2, Vec2::new(6.0, 8.0));
/// assert_eq!(v.to_vec2i(), Vec2i::new(3, 4));
/// ```
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq)]
pub struct Vec2 {
    /// X component of vector.
    ///
    pub x: f32,

    /// Y component of vector.
    ///
    pub y: f32,
}
impl Vec2 {
    /// Converts vector to integer one by truncating every component towards zero.
    ///
    /// # Example
    /// ```rust
    /// # use extmath::vectors::{Vec2, Vec2i};
    /// assert_eq!(Vec2::new(1.9, -1.9).to_vec2i(), Vec2i::new(1, -1));
    /// ```
    ///
    pub fn to_vec2i(self) -> Vec2i {
        Vec2i::from(self)
    }
}
impl_vector!(Vec2, f32, 2, 0.0, (x, y));
impl_vectorf!(Vec2, 2);
impl_vector_vector_operations!(Vec2, ((Add, add, +),
                                      (Sub, sub, -),
                                      (Mul, mul, *),
                                      (Div, div, /),));
impl_promoted_operations!(Vec2, Vec2i => Vec2, ((Add, add, +),
                                                (Sub, sub, -),
                                                (Mul, mul, *),
                                                (Div, div, /),));
impl_vector_rhs_operations!(Vec2, f32, ((Mul, mul, *),
                                        (Div, div, /),));
impl_vector_rhs_operations!(Vec2, i32 as f32, ((Mul, mul, *),
                                               (Div, div, /),));

/// [`Vec2i`] struct represents two-dimensional vector or point with `i32` components.
///
/// Integer arithmetic follows Rust integer semantics: division truncates towards zero and
/// division by zero panics.
///
/// # Examples
/// ```rust
/// # use extmath::vectors::{Vec2, Vec2i};
/// let v: Vec2i = Vec2i::new(6, -4);
/// assert_eq!(v / 4, Vec2i::new(1, -1));
/// assert_eq!(v / 4.0, Vec2::new(1.5, -1.0));
/// assert_eq!(v.to_vec2(), Vec2::new(6.0, -4.0));
/// ```
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Vec2i {
    /// X component of vector.
    ///
    pub x: i32,

    /// Y component of vector.
    ///
    pub y: i32,
}
impl Vec2i {
    /// Converts vector to float one (exact for components that fit into `f32` mantissa).
    ///
    pub fn to_vec2(self) -> Vec2 {
        Vec2::from(self)
    }
}
impl_vector!(Vec2i, i32, 2, 0, (x, y));
impl_vectori!(Vec2i, Vec2);
impl_vector_vector_operations!(Vec2i, ((Add, add, +),
                                       (Sub, sub, -),
                                       (Mul, mul, *),
                                       (Div, div, /),));
impl_vector_rhs_operations!(Vec2i, i32, ((Mul, mul, *),
                                         (Div, div, /),));
impl_promoted_operations!(Vec2i, scalar f32 => Vec2, ((Mul, mul, *),
                                                      (Div, div, /),));
