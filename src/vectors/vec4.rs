//! Four-dimensional (homogeneous) vectors.
//!

use crate::vectors::Vec3;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// [`Vec4`] struct represents four-dimensional vector with `f32` components, usually
/// a point or direction in homogeneous coordinates.
///
/// Note that [`Vec4::ORIGIN`] has `w = 0`, so it is not a valid homogeneous point
/// and [`Vec4::to_vec3`] on it is degenerate.
///
/// # Examples
/// ```rust
/// # use extmath::vectors::{Vec3, Vec4};
/// let v: Vec4 = Vec4::new(2.0, 4.0, 6.0, 2.0);
/// assert_eq!(v.to_vec3(), Vec3::new(1.0, 2.0, 3.0));
/// assert_eq!(v / 2, Vec4::new(1.0, 2.0, 3.0, 1.0));
/// ```
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq)]
pub struct Vec4 {
    /// X component of vector.
    ///
    pub x: f32,

    /// Y component of vector.
    ///
    pub y: f32,

    /// Z component of vector.
    ///
    pub z: f32,

    /// W (homogeneous) component of vector.
    ///
    pub w: f32,
}
impl Vec4 {
    /// Performs perspective divide: `(x / w, y / w, z / w)`.
    ///
    /// Zero `w` is not guarded and yields non-finite components.
    ///
    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.x / self.w, self.y / self.w, self.z / self.w)
    }
}
impl_vector!(Vec4, f32, 4, 0.0, (x, y, z, w));
impl_vectorf!(Vec4, 4);
impl_vector_vector_operations!(Vec4, ((Add, add, +),
                                      (Sub, sub, -),
                                      (Div, div, /),));
impl Mul<Self> for Vec4 {
    type Output = Self;

    /// Multiplies `x`, `y` and `z` componentwise, but divides `w` by `rhs.w`.
    ///
    /// # Example
    /// ```rust
    /// # use extmath::vectors::Vec4;
    /// let v: Vec4 = Vec4::new(1.0, 2.0, 3.0, 8.0) * Vec4::new(2.0, 2.0, 2.0, 2.0);
    /// assert_eq!(v, Vec4::new(2.0, 4.0, 6.0, 4.0));
    /// ```
    ///
    fn mul(self, rhs: Self) -> Self::Output {
        // w is divided, not multiplied
        Vec4::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z, self.w / rhs.w)
    }
}
impl_vector_rhs_operations!(Vec4, f32, ((Mul, mul, *),
                                        (Div, div, /),));
impl_vector_rhs_operations!(Vec4, i32 as f32, ((Mul, mul, *),
                                               (Div, div, /),));

#[cfg(test)]
mod tests {
    use super::Vec4;
    use crate::vectors::Vec3;

    #[test]
    fn vec4() {
        assert_eq!(Vec4::ORIGIN, Vec4::new(0.0, 0.0, 0.0, 0.0));
        assert_eq!(Vec4::from([1, 2, 3, 4]), Vec4::new(1.0, 2.0, 3.0, 4.0));

        let v1: Vec4 = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let v2: Vec4 = Vec4::new(2.0, 2.0, 2.0, 2.0);
        assert_eq!(v1 + v2, Vec4::new(3.0, 4.0, 5.0, 6.0));
        assert_eq!(v1 - v2, Vec4::new(-1.0, 0.0, 1.0, 2.0));
        assert_eq!(v1 / v2, Vec4::new(0.5, 1.0, 1.5, 2.0));
        assert_eq!(v1 * 2.0, Vec4::new(2.0, 4.0, 6.0, 8.0));
        assert_eq!(v1 * 2, Vec4::new(2.0, 4.0, 6.0, 8.0));
        assert_eq!(v1 / 4, Vec4::new(0.25, 0.5, 0.75, 1.0));
        assert_eq!(v1.dot_product(v2), 20.0);
        assert_eq!(v1.components(), [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(v1.to_string(), "Vec4(x=1, y=2, z=3, w=4)");
    }

    #[test]
    fn vec4_multiplication_divides_w() {
        let v: Vec4 = Vec4::new(1.0, 2.0, 3.0, 4.0) * Vec4::new(3.0, 3.0, 3.0, 4.0);
        assert_eq!(v, Vec4::new(3.0, 6.0, 9.0, 1.0));
    }

    #[test]
    fn vec4_length() {
        let v: Vec4 = Vec4::new(1.0, 1.0, 1.0, 1.0);
        assert_eq!(v.length(), 2.0);
        assert_eq!(v.normalized(), Vec4::new(0.5, 0.5, 0.5, 0.5));
    }

    #[test]
    fn vec4_perspective_divide() {
        assert_eq!(
            Vec4::new(3.0, -6.0, 9.0, 3.0).to_vec3(),
            Vec3::new(1.0, -2.0, 3.0)
        );

        let degenerate: Vec3 = Vec4::ORIGIN.to_vec3();
        assert!(degenerate.x.is_nan());
        assert!(Vec4::new(1.0, 0.0, 0.0, 0.0).to_vec3().x.is_infinite());
    }
}
