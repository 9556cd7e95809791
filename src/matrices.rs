//! `matrices` submodule implements [`Mat4`], 4x4 float matrix that is used to represent affine
//! transformations and projections in homogeneous coordinates.
//!
//! Components are named `c{row}{column}`; every constructor, `From` conversion and
//! [`Mat4::as_array`] use row-major order.
//!

use crate::{
    floats::{almost_equal, hash_f32, FloatOperations},
    scalars::{cosd, sind, TO_RADIANS_F},
    vectors::{Vec3, Vec4},
};
use seq_macro::seq;
use serde::{Deserialize, Serialize};
use std::{
    fmt,
    hash::{Hash, Hasher},
    ops::{Add, Mul},
};
use thiserror::Error;

/// [`MatrixError`] enum lists errors that may occur in matrix operations.
///
#[derive(Error, Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum MatrixError {
    /// Determinant of the matrix is zero, so it has no inverse.
    ///
    #[error("matrix is singular, no inverse exists")]
    Singular,
}

/// [`Mat4`] struct represents 4x4 matrix with `f32` components.
///
/// Matrices are immutable values: transformation methods return new matrices.
/// Rows and columns are not stored separately, they are gathered from components on each call.
///
/// # Examples
/// ```rust
/// # use extmath::matrices::Mat4;
/// # use extmath::vectors::Vec4;
/// let m: Mat4 = Mat4::translate_mat(1.0, 2.0, 3.0).scale(2.0, 2.0, 2.0);
/// assert_eq!(m * Vec4::new(1.0, 1.0, 1.0, 1.0), Vec4::new(3.0, 4.0, 5.0, 1.0));
/// assert_eq!(m.r0(), Vec4::new(2.0, 0.0, 0.0, 1.0));
/// assert_eq!(m.c3(), Vec4::new(1.0, 2.0, 3.0, 1.0));
/// ```
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq)]
pub struct Mat4 {
    /// Row 0, column 0.
    ///
    pub c00: f32,

    /// Row 0, column 1.
    ///
    pub c01: f32,

    /// Row 0, column 2.
    ///
    pub c02: f32,

    /// Row 0, column 3.
    ///
    pub c03: f32,

    /// Row 1, column 0.
    ///
    pub c10: f32,

    /// Row 1, column 1.
    ///
    pub c11: f32,

    /// Row 1, column 2.
    ///
    pub c12: f32,

    /// Row 1, column 3.
    ///
    pub c13: f32,

    /// Row 2, column 0.
    ///
    pub c20: f32,

    /// Row 2, column 1.
    ///
    pub c21: f32,

    /// Row 2, column 2.
    ///
    pub c22: f32,

    /// Row 2, column 3.
    ///
    pub c23: f32,

    /// Row 3, column 0.
    ///
    pub c30: f32,

    /// Row 3, column 1.
    ///
    pub c31: f32,

    /// Row 3, column 2.
    ///
    pub c32: f32,

    /// Row 3, column 3.
    ///
    pub c33: f32,
}
impl Mat4 {
    /// Identity matrix (1.0 on main diagonal and 0.0 elsewhere).
    ///
    pub const IDENTITY: Self = Mat4::new(
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    );

    /// Initializes matrix from its components in row-major order.
    ///
    #[allow(clippy::too_many_arguments)]
    #[rustfmt::skip]
    pub const fn new(
        c00: f32, c01: f32, c02: f32, c03: f32,
        c10: f32, c11: f32, c12: f32, c13: f32,
        c20: f32, c21: f32, c22: f32, c23: f32,
        c30: f32, c31: f32, c32: f32, c33: f32,
    ) -> Self {
        Mat4 {
            c00, c01, c02, c03,
            c10, c11, c12, c13,
            c20, c21, c22, c23,
            c30, c31, c32, c33,
        }
    }

    /// Returns matrix components as a flat row-major array, which is the layout graphics APIs
    /// expect when uploading matrices.
    ///
    /// # Example
    /// ```rust
    /// # use extmath::matrices::Mat4;
    /// let arr: [f32; 16] = Mat4::translate_mat(5.0, 6.0, 7.0).as_array();
    /// assert_eq!(arr[3], 5.0);
    /// assert_eq!(arr[7], 6.0);
    /// assert_eq!(arr[11], 7.0);
    /// ```
    ///
    #[rustfmt::skip]
    pub fn as_array(&self) -> [f32; 16] {
        [
            self.c00, self.c01, self.c02, self.c03,
            self.c10, self.c11, self.c12, self.c13,
            self.c20, self.c21, self.c22, self.c23,
            self.c30, self.c31, self.c32, self.c33,
        ]
    }
    /// Returns matrix components as an array of rows.
    ///
    pub fn as_rows(&self) -> [[f32; 4]; 4] {
        [
            [self.c00, self.c01, self.c02, self.c03],
            [self.c10, self.c11, self.c12, self.c13],
            [self.c20, self.c21, self.c22, self.c23],
            [self.c30, self.c31, self.c32, self.c33],
        ]
    }

    /// Applies function to every matrix component and returns changed matrix.
    ///
    pub fn map(self, f: impl Fn(f32) -> f32) -> Self {
        Mat4::from(self.as_array().map(f))
    }
    /// Combines matrices by applying function on their components.
    ///
    pub fn combine(self, other: Self, f: impl Fn(f32, f32) -> f32) -> Self {
        let (a, b): ([f32; 16], [f32; 16]) = (self.as_array(), other.as_array());
        Mat4::from(std::array::from_fn::<f32, 16, _>(|i| f(a[i], b[i])))
    }

    /// Checks whether matrices are equal with `floats::almost_equal` precision.
    ///
    pub fn almost_eq(&self, other: &Self) -> bool {
        self.as_array()
            .iter()
            .zip(other.as_array().iter())
            .all(|(&a, &b)| almost_equal(a, b))
    }

    /// Returns transpose of matrix (rows become columns).
    ///
    /// # Example
    /// ```rust
    /// # use extmath::matrices::Mat4;
    /// let m: Mat4 = Mat4::translate_mat(1.0, 2.0, 3.0);
    /// assert_eq!(m.transpose().r3().components(), [1.0, 2.0, 3.0, 1.0]);
    /// assert_eq!(m.transpose().transpose(), m);
    /// ```
    ///
    #[rustfmt::skip]
    pub fn transpose(&self) -> Self {
        Mat4::new(
            self.c00, self.c10, self.c20, self.c30,
            self.c01, self.c11, self.c21, self.c31,
            self.c02, self.c12, self.c22, self.c32,
            self.c03, self.c13, self.c23, self.c33,
        )
    }

    /// Returns inverse of matrix.
    ///
    /// Inverse is computed in closed form as adjugate matrix divided by the determinant.
    /// Every adjugate entry is expanded into six triple products summed left to right, and the
    /// determinant is the first row of the matrix multiplied by the first column of adjugate.
    /// Rank-deficient matrices therefore usually hit exact zero, even with fractional entries.
    ///
    /// # Errors
    /// Returns [`MatrixError::Singular`] if determinant is equal to zero.
    ///
    /// # Examples
    /// ```rust
    /// # use extmath::matrices::{Mat4, MatrixError};
    /// let m: Mat4 = Mat4::scale_mat(2.0, 4.0, 8.0);
    /// assert_eq!(m.inverse(), Ok(Mat4::scale_mat(0.5, 0.25, 0.125)));
    ///
    /// let zero: Mat4 = Mat4::from([0.0; 16]);
    /// assert_eq!(zero.inverse(), Err(MatrixError::Singular));
    /// ```
    ///
    pub fn inverse(&self) -> Result<Mat4, MatrixError> {
        let m: [f32; 16] = self.as_array();

        // each entry is a signed 3x3 minor, laid out row-major
        let adjugate: [f32; 16] = [
            m[5] * m[10] * m[15]
                - m[5] * m[11] * m[14]
                - m[9] * m[6] * m[15]
                + m[9] * m[7] * m[14]
                + m[13] * m[6] * m[11]
                - m[13] * m[7] * m[10],
            -m[1] * m[10] * m[15]
                + m[1] * m[11] * m[14]
                + m[9] * m[2] * m[15]
                - m[9] * m[3] * m[14]
                - m[13] * m[2] * m[11]
                + m[13] * m[3] * m[10],
            m[1] * m[6] * m[15]
                - m[1] * m[7] * m[14]
                - m[5] * m[2] * m[15]
                + m[5] * m[3] * m[14]
                + m[13] * m[2] * m[7]
                - m[13] * m[3] * m[6],
            -m[1] * m[6] * m[11]
                + m[1] * m[7] * m[10]
                + m[5] * m[2] * m[11]
                - m[5] * m[3] * m[10]
                - m[9] * m[2] * m[7]
                + m[9] * m[3] * m[6],
            -m[4] * m[10] * m[15]
                + m[4] * m[11] * m[14]
                + m[8] * m[6] * m[15]
                - m[8] * m[7] * m[14]
                - m[12] * m[6] * m[11]
                + m[12] * m[7] * m[10],
            m[0] * m[10] * m[15]
                - m[0] * m[11] * m[14]
                - m[8] * m[2] * m[15]
                + m[8] * m[3] * m[14]
                + m[12] * m[2] * m[11]
                - m[12] * m[3] * m[10],
            -m[0] * m[6] * m[15]
                + m[0] * m[7] * m[14]
                + m[4] * m[2] * m[15]
                - m[4] * m[3] * m[14]
                - m[12] * m[2] * m[7]
                + m[12] * m[3] * m[6],
            m[0] * m[6] * m[11]
                - m[0] * m[7] * m[10]
                - m[4] * m[2] * m[11]
                + m[4] * m[3] * m[10]
                + m[8] * m[2] * m[7]
                - m[8] * m[3] * m[6],
            m[4] * m[9] * m[15]
                - m[4] * m[11] * m[13]
                - m[8] * m[5] * m[15]
                + m[8] * m[7] * m[13]
                + m[12] * m[5] * m[11]
                - m[12] * m[7] * m[9],
            -m[0] * m[9] * m[15]
                + m[0] * m[11] * m[13]
                + m[8] * m[1] * m[15]
                - m[8] * m[3] * m[13]
                - m[12] * m[1] * m[11]
                + m[12] * m[3] * m[9],
            m[0] * m[5] * m[15]
                - m[0] * m[7] * m[13]
                - m[4] * m[1] * m[15]
                + m[4] * m[3] * m[13]
                + m[12] * m[1] * m[7]
                - m[12] * m[3] * m[5],
            -m[0] * m[5] * m[11]
                + m[0] * m[7] * m[9]
                + m[4] * m[1] * m[11]
                - m[4] * m[3] * m[9]
                - m[8] * m[1] * m[7]
                + m[8] * m[3] * m[5],
            -m[4] * m[9] * m[14]
                + m[4] * m[10] * m[13]
                + m[8] * m[5] * m[14]
                - m[8] * m[6] * m[13]
                - m[12] * m[5] * m[10]
                + m[12] * m[6] * m[9],
            m[0] * m[9] * m[14]
                - m[0] * m[10] * m[13]
                - m[8] * m[1] * m[14]
                + m[8] * m[2] * m[13]
                + m[12] * m[1] * m[10]
                - m[12] * m[2] * m[9],
            -m[0] * m[5] * m[14]
                + m[0] * m[6] * m[13]
                + m[4] * m[1] * m[14]
                - m[4] * m[2] * m[13]
                - m[12] * m[1] * m[6]
                + m[12] * m[2] * m[5],
            m[0] * m[5] * m[10]
                - m[0] * m[6] * m[9]
                - m[4] * m[1] * m[10]
                + m[4] * m[2] * m[9]
                + m[8] * m[1] * m[6]
                - m[8] * m[2] * m[5],
        ];

        let determinant: f32 =
            m[0] * adjugate[0] + m[1] * adjugate[4] + m[2] * adjugate[8] + m[3] * adjugate[12];
        if determinant == 0.0 {
            log::debug!("cannot invert singular matrix {:?}", self);
            return Err(MatrixError::Singular);
        }
        let scale: f32 = 1.0 / determinant;
        Ok(Mat4::from(adjugate.map(|elem| elem * scale)))
    }

    /// Returns `self * Mat4::translate_mat(x, y, z)`.
    ///
    pub fn translate(&self, x: f32, y: f32, z: f32) -> Self {
        *self * Mat4::translate_mat(x, y, z)
    }
    /// Returns `self * Mat4::translate_mat_vec(xyz)`.
    ///
    pub fn translate_vec(&self, xyz: Vec3) -> Self {
        *self * Mat4::translate_mat_vec(xyz)
    }
    /// Returns `self * Mat4::scale_mat(x, y, z)`.
    ///
    pub fn scale(&self, x: f32, y: f32, z: f32) -> Self {
        *self * Mat4::scale_mat(x, y, z)
    }
    /// Returns `self * Mat4::rotation_mat(x, y, z, angle)`.
    ///
    /// Since the new transform is appended on the right, it is applied to vectors before
    /// the transforms that are already in `self`.
    ///
    pub fn rotate(&self, x: f32, y: f32, z: f32, angle: f32) -> Self {
        *self * Mat4::rotation_mat(x, y, z, angle)
    }

    /// Constructs translation matrix (identity with translation column set to `(x, y, z)`).
    ///
    /// # Example
    /// ```rust
    /// # use extmath::matrices::Mat4;
    /// # use extmath::vectors::Vec4;
    /// let m: Mat4 = Mat4::translate_mat(1.0, -2.0, 3.0);
    /// assert_eq!(m * Vec4::new(0.0, 0.0, 0.0, 1.0), Vec4::new(1.0, -2.0, 3.0, 1.0));
    /// ```
    ///
    pub const fn translate_mat(x: f32, y: f32, z: f32) -> Self {
        Mat4::new(
            1.0, 0.0, 0.0, x, //
            0.0, 1.0, 0.0, y, //
            0.0, 0.0, 1.0, z, //
            0.0, 0.0, 0.0, 1.0,
        )
    }
    /// Constructs translation matrix from vector.
    ///
    pub const fn translate_mat_vec(xyz: Vec3) -> Self {
        Mat4::translate_mat(xyz.x, xyz.y, xyz.z)
    }

    /// Constructs diagonal scale matrix.
    ///
    /// # Example
    /// ```rust
    /// # use extmath::matrices::Mat4;
    /// # use extmath::vectors::Vec4;
    /// let m: Mat4 = Mat4::scale_mat(2.0, 2.0, 2.0);
    /// assert_eq!(m * Vec4::new(1.0, 1.0, 1.0, 1.0), Vec4::new(2.0, 2.0, 2.0, 1.0));
    /// ```
    ///
    pub const fn scale_mat(x: f32, y: f32, z: f32) -> Self {
        Mat4::new(
            x, 0.0, 0.0, 0.0, //
            0.0, y, 0.0, 0.0, //
            0.0, 0.0, z, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Constructs axis-angle rotation matrix.
    ///
    /// Matrix is built from `cosd(-angle)` and `sind(-angle)`, so a positive angle rotates
    /// clockwise when looking along the axis towards the origin
    /// (rotating `(1, 0, 0)` by 90 degrees around `(0, 0, 1)` gives `(0, -1, 0)`).
    ///
    /// Axis is expected to be normalized; it is not normalized here, and the result is not
    /// a pure rotation for other axes.
    ///
    /// # Example
    /// ```rust
    /// # use extmath::matrices::Mat4;
    /// # use extmath::vectors::Vec3;
    /// let m: Mat4 = Mat4::rotation_mat(0.0, 0.0, 1.0, 90.0);
    /// assert!((m * Vec3::new(1.0, 0.0, 0.0)).almost_eq(&Vec3::new(0.0, -1.0, 0.0)));
    /// ```
    ///
    pub fn rotation_mat(x: f32, y: f32, z: f32, angle: f32) -> Self {
        let c: f32 = cosd(-angle);
        let s: f32 = sind(-angle);
        let t: f32 = 1.0 - c;

        Mat4::new(
            t * x * x + c,
            t * x * y - s * z,
            t * x * z + s * y,
            0.0,
            //
            t * x * y + s * z,
            t * y * y + c,
            t * y * z - s * x,
            0.0,
            //
            t * x * z - s * y,
            t * y * z + s * x,
            t * z * z + c,
            0.0,
            //
            0.0,
            0.0,
            0.0,
            1.0,
        )
    }

    /// Constructs symmetric perspective projection matrix.
    ///
    /// `fov_y` is the vertical field of view in degrees.
    /// Resulting matrix follows OpenGL clip-space convention.
    ///
    /// Equal `z_near` and `z_far` are not rejected and produce non-finite components.
    ///
    /// # Example
    /// ```rust
    /// # use extmath::matrices::Mat4;
    /// # use extmath::vectors::Vec3;
    /// let m: Mat4 = Mat4::perspective(90.0, 1.0, 1.0, 3.0);
    /// let near: Vec3 = m * Vec3::new(0.0, 0.0, -1.0);
    /// let far: Vec3 = m * Vec3::new(0.0, 0.0, -3.0);
    /// assert!((near.z + 1.0).abs() < 1e-6);
    /// assert!((far.z - 1.0).abs() < 1e-6);
    /// ```
    ///
    pub fn perspective(fov_y: f32, aspect: f32, z_near: f32, z_far: f32) -> Self {
        let half_fov_y: f32 = TO_RADIANS_F * (fov_y / 2.0);
        let range: f32 = half_fov_y.tan() * z_near;
        let (left, right): (f32, f32) = (-range * aspect, range * aspect);
        let bottom: f32 = -range;

        if z_far == z_near || left == right || bottom == range {
            log::debug!(
                "degenerate perspective (fov_y={}, aspect={}, z_near={}, z_far={})",
                fov_y,
                aspect,
                z_near,
                z_far
            );
        }

        Mat4::new(
            2.0 * z_near / (right - left),
            0.0,
            0.0,
            0.0,
            //
            0.0,
            2.0 * z_near / (range - bottom),
            0.0,
            0.0,
            //
            0.0,
            0.0,
            -(z_far + z_near) / (z_far - z_near),
            -(2.0 * z_far * z_near) / (z_far - z_near),
            //
            0.0,
            0.0,
            -1.0,
            0.0,
        )
    }

    /// Constructs general (possibly off-axis) perspective projection matrix.
    ///
    /// Equal bounds in any pair are not rejected and produce non-finite components.
    ///
    pub fn frustum(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        if left == right || bottom == top || near == far {
            log::debug!(
                "degenerate frustum (left={}, right={}, bottom={}, top={}, near={}, far={})",
                left,
                right,
                bottom,
                top,
                near,
                far
            );
        }

        let m00: f32 = 2.0 * near / (right - left);
        let m11: f32 = 2.0 * near / (top - bottom);
        let m02: f32 = (right + left) / (right - left);
        let m12: f32 = (top + bottom) / (top - bottom);
        let m22: f32 = -(far + near) / (far - near);
        let m23: f32 = -(2.0 * far * near) / (far - near);

        Mat4::new(
            m00, 0.0, m02, 0.0, //
            0.0, m11, m12, 0.0, //
            0.0, 0.0, m22, m23, //
            0.0, 0.0, -1.0, 0.0,
        )
    }

    /// Constructs right-handed view matrix that looks from `eye` at `center`.
    ///
    /// `up` must not be parallel to the view direction, otherwise the matrix
    /// contains NaN components.
    ///
    /// # Example
    /// ```rust
    /// # use extmath::matrices::Mat4;
    /// # use extmath::vectors::{Vec3, Vec4};
    /// let view: Mat4 = Mat4::look_at(
    ///     Vec3::new(0.0, 0.0, 5.0),
    ///     Vec3::ORIGIN,
    ///     Vec3::new(0.0, 1.0, 0.0),
    /// );
    /// assert_eq!(view * Vec4::new(0.0, 0.0, 0.0, 1.0), Vec4::new(0.0, 0.0, -5.0, 1.0));
    /// ```
    ///
    pub fn look_at(eye: Vec3, center: Vec3, up: Vec3) -> Self {
        let f: Vec3 = (center - eye).normalized();
        let s: Vec3 = f.cross_product(up.normalized()).normalized();
        let u: Vec3 = s.cross_product(f);

        Mat4::new(
            s.x, s.y, s.z, -s.dot_product(eye), //
            u.x, u.y, u.z, -u.dot_product(eye), //
            -f.x, -f.y, -f.z, f.dot_product(eye), //
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Constructs orthographic projection matrix.
    ///
    /// Equal bounds in any pair are not rejected and produce non-finite components.
    ///
    /// # Example
    /// ```rust
    /// # use extmath::matrices::Mat4;
    /// # use extmath::vectors::Vec4;
    /// let m: Mat4 = Mat4::ortho(0.0, 1024.0, 0.0, 512.0, -1.0, 1.0);
    /// assert_eq!(m * Vec4::new(1024.0, 512.0, 0.0, 1.0), Vec4::new(1.0, 1.0, 0.0, 1.0));
    /// ```
    ///
    pub fn ortho(left: f32, right: f32, bottom: f32, top: f32, z_near: f32, z_far: f32) -> Self {
        if left == right || bottom == top || z_near == z_far {
            log::debug!(
                "degenerate ortho (left={}, right={}, bottom={}, top={}, z_near={}, z_far={})",
                left,
                right,
                bottom,
                top,
                z_near,
                z_far
            );
        }

        let m00: f32 = 2.0 / (right - left);
        let m11: f32 = 2.0 / (top - bottom);
        let m22: f32 = -2.0 / (z_far - z_near);
        let m03: f32 = -(right + left) / (right - left);
        let m13: f32 = -(top + bottom) / (top - bottom);
        let m23: f32 = -(z_far + z_near) / (z_far - z_near);

        Mat4::new(
            m00, 0.0, 0.0, m03, //
            0.0, m11, 0.0, m13, //
            0.0, 0.0, m22, m23, //
            0.0, 0.0, 0.0, 1.0,
        )
    }
}
seq!(N in 0..4 {
    impl Mat4 {
        #(
            #[doc = concat!("Returns row ", stringify!(N), " of matrix.")]
            ///
            pub fn r~N(&self) -> Vec4 {
                Vec4::from(self.as_rows()[N])
            }
            #[doc = concat!("Returns column ", stringify!(N), " of matrix.")]
            ///
            pub fn c~N(&self) -> Vec4 {
                let rows: [[f32; 4]; 4] = self.as_rows();
                Vec4::new(rows[0][N], rows[1][N], rows[2][N], rows[3][N])
            }
        )*
    }
});
impl Default for Mat4 {
    fn default() -> Self {
        Mat4::IDENTITY
    }
}
impl Hash for Mat4 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_array()
            .iter()
            .for_each(|&elem| hash_f32(elem, state));
    }
}
impl FloatOperations for Mat4 {
    /// Constructs new matrix by rounding every component to given amount of digits after floating point.
    ///
    fn round_up_to(self, digits: i32) -> Self {
        Mat4::from(self.as_array().round_up_to(digits))
    }
    /// Constructs new matrix by correcting every component that may be wronged by float operations.
    ///
    /// # Example
    /// ```rust
    /// # use extmath::matrices::Mat4;
    /// # use extmath::floats::FloatOperations;
    /// let m: Mat4 = Mat4::rotation_mat(0.0, 0.0, 1.0, 90.0).correct_to(3);
    /// assert_eq!(m.as_rows(), [
    ///     [0.0, 1.0, 0.0, 0.0],
    ///     [-1.0, 0.0, 0.0, 0.0],
    ///     [0.0, 0.0, 1.0, 0.0],
    ///     [0.0, 0.0, 0.0, 1.0],
    /// ]);
    /// ```
    ///
    fn correct_to(self, digits: i32) -> Self {
        Mat4::from(self.as_array().correct_to(digits))
    }
}
impl From<[f32; 16]> for Mat4 {
    /// Initializes matrix from flat row-major array.
    ///
    #[rustfmt::skip]
    fn from(arr: [f32; 16]) -> Self {
        let [
            c00, c01, c02, c03,
            c10, c11, c12, c13,
            c20, c21, c22, c23,
            c30, c31, c32, c33,
        ] = arr;
        Mat4::new(
            c00, c01, c02, c03,
            c10, c11, c12, c13,
            c20, c21, c22, c23,
            c30, c31, c32, c33,
        )
    }
}
impl From<[[f32; 4]; 4]> for Mat4 {
    /// Initializes matrix from array of rows.
    ///
    fn from(arr: [[f32; 4]; 4]) -> Self {
        Mat4::from(std::array::from_fn::<f32, 16, _>(|i| arr[i / 4][i % 4]))
    }
}
impl fmt::Display for Mat4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Mat4(")?;
        for row in self.as_rows() {
            writeln!(f, "    [{}, {}, {}, {}]", row[0], row[1], row[2], row[3])?;
        }
        write!(f, ")")
    }
}
impl Add for Mat4 {
    type Output = Self;

    /// Adds matrices componentwise.
    ///
    fn add(self, rhs: Self) -> Self::Output {
        self.combine(rhs, |a, b| a + b)
    }
}
impl Mul<f32> for Mat4 {
    type Output = Self;

    /// Multiplies every component by scalar.
    ///
    fn mul(self, rhs: f32) -> Self::Output {
        self.map(|a| a * rhs)
    }
}
impl Mul<Mat4> for f32 {
    type Output = Mat4;

    /// Multiplies every component by scalar.
    ///
    fn mul(self, rhs: Mat4) -> Self::Output {
        rhs.map(|a| self * a)
    }
}
impl Mul for Mat4 {
    type Output = Self;

    /// Composes matrices: `result[i][j] = self.row(i) · rhs.column(j)`.
    ///
    fn mul(self, rhs: Self) -> Self::Output {
        let rows: [Vec4; 4] = [self.r0(), self.r1(), self.r2(), self.r3()];
        let columns: [Vec4; 4] = [rhs.c0(), rhs.c1(), rhs.c2(), rhs.c3()];
        Mat4::from(std::array::from_fn::<f32, 16, _>(|i| {
            rows[i / 4].dot_product(columns[i % 4])
        }))
    }
}
impl Mul<Vec4> for Mat4 {
    type Output = Vec4;

    /// Transforms vector: `result[i] = self.row(i) · rhs`.
    ///
    fn mul(self, rhs: Vec4) -> Self::Output {
        Vec4::new(
            self.r0().dot_product(rhs),
            self.r1().dot_product(rhs),
            self.r2().dot_product(rhs),
            self.r3().dot_product(rhs),
        )
    }
}
impl Mul<Vec3> for Mat4 {
    type Output = Vec3;

    /// Transforms point: vector is lifted to homogeneous coordinates with `w = 1`,
    /// transformed and then divided by resulting `w`.
    ///
    /// Because of `w = 1` translation is applied, so directions should be transformed
    /// through `Vec4` with `w = 0` instead.
    ///
    fn mul(self, rhs: Vec3) -> Self::Output {
        (self * rhs.to_vec4()).to_vec3()
    }
}

#[cfg(test)]
mod tests {
    use super::{Mat4, MatrixError};
    use crate::vectors::{Vec3, Vec4};

    fn sample() -> Mat4 {
        Mat4::from([
            [2.0, 3.0, 3.0, 1.0],
            [0.0, 4.0, 3.0, -3.0],
            [2.0, -1.0, -1.0, -3.0],
            [0.0, -4.0, -3.0, 2.0],
        ])
    }

    #[test]
    fn construction() {
        let m: Mat4 = sample();
        assert_eq!(m.c12, 3.0);
        assert_eq!(m.c31, -4.0);
        assert_eq!(Mat4::from(m.as_array()), m);
        assert_eq!(m.r2(), Vec4::new(2.0, -1.0, -1.0, -3.0));
        assert_eq!(m.c1(), Vec4::new(3.0, 4.0, -1.0, -4.0));
        assert_eq!(Mat4::default(), Mat4::IDENTITY);
    }

    #[test]
    fn arithmetic() {
        let m: Mat4 = sample();
        assert_eq!(m + m, m * 2.0);
        assert_eq!(2.0 * m, m * 2.0);
        assert_eq!(Mat4::IDENTITY * Mat4::IDENTITY, Mat4::IDENTITY);
        assert_eq!(Mat4::IDENTITY * m, m);
        assert_eq!(m * Mat4::IDENTITY, m);

        let v: Vec4 = Vec4::new(1.0, -2.0, 3.0, -4.0);
        assert_eq!(Mat4::IDENTITY * v, v);
        assert_eq!(m * v, Vec4::new(1.0, 13.0, 13.0, -9.0));
    }

    #[test]
    fn transpose() {
        let m: Mat4 = sample();
        assert_eq!(m.transpose().transpose(), m);
        assert_eq!(m.transpose().r1(), m.c1());
        assert_eq!(m.transpose().c3(), m.r3());
    }

    #[test]
    fn inverse() {
        assert_eq!(Mat4::IDENTITY.inverse(), Ok(Mat4::IDENTITY));

        let t: Mat4 = Mat4::translate_mat(1.0, 2.0, 3.0);
        assert!(t
            .inverse()
            .expect("translation is invertible")
            .almost_eq(&Mat4::translate_mat(-1.0, -2.0, -3.0)));

        let m: Mat4 = sample();
        let inverse: Mat4 = m.inverse().expect("determinant is not zero");
        assert!((m * inverse).almost_eq(&Mat4::IDENTITY));
        assert!(inverse.inverse().expect("inverse is invertible").almost_eq(&m));
    }

    #[test]
    fn singular() {
        assert_eq!(Mat4::from([0.0; 16]).inverse(), Err(MatrixError::Singular));
        assert_eq!(Mat4::from([1.0; 16]).inverse(), Err(MatrixError::Singular));
        assert_eq!(
            MatrixError::Singular.to_string(),
            "matrix is singular, no inverse exists"
        );
    }

    #[test]
    fn singular_fractional() {
        // last row is a linear combination of the first three
        let m: Mat4 = Mat4::from([
            [8.77, 4.45, -4.46, 5.41],
            [7.9699993, -0.35999966, 9.209999, -1.5799999],
            [1.8000002, -4.52, -9.92, -2.3000002],
            [-15.060295, 5.5263987, -31.997894, 10.134199],
        ]);
        assert_eq!(m.inverse(), Err(MatrixError::Singular));
    }

    #[test]
    fn transforms() {
        let origin: Vec4 = Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert_eq!(
            Mat4::translate_mat(4.0, 5.0, 6.0) * origin,
            Vec4::new(4.0, 5.0, 6.0, 1.0)
        );
        assert_eq!(
            Mat4::translate_mat_vec(Vec3::new(4.0, 5.0, 6.0)),
            Mat4::translate_mat(4.0, 5.0, 6.0)
        );
        assert_eq!(
            Mat4::scale_mat(2.0, 2.0, 2.0) * Vec4::new(1.0, 1.0, 1.0, 1.0),
            Vec4::new(2.0, 2.0, 2.0, 1.0)
        );

        // scale is applied first, then translation
        let m: Mat4 = Mat4::IDENTITY
            .translate_vec(Vec3::new(1.0, 0.0, 0.0))
            .scale(3.0, 3.0, 3.0);
        assert_eq!(m * Vec3::new(1.0, 1.0, 1.0), Vec3::new(4.0, 3.0, 3.0));

        // directions ignore translation
        assert_eq!(
            Mat4::translate_mat(1.0, 1.0, 1.0) * Vec4::new(0.0, 0.0, 1.0, 0.0),
            Vec4::new(0.0, 0.0, 1.0, 0.0)
        );
    }

    #[test]
    fn rotation() {
        let rotation: Mat4 = Mat4::rotation_mat(0.0, 0.0, 1.0, 90.0);
        assert!((rotation * Vec3::new(1.0, 0.0, 0.0)).almost_eq(&Vec3::new(0.0, -1.0, 0.0)));
        assert!((rotation * Vec3::new(0.0, 1.0, 0.0)).almost_eq(&Vec3::new(1.0, 0.0, 0.0)));
        assert_eq!(
            Mat4::IDENTITY.rotate(0.0, 0.0, 1.0, 90.0),
            Mat4::rotation_mat(0.0, 0.0, 1.0, 90.0)
        );

        let full_turn: Mat4 = Mat4::rotation_mat(0.0, 1.0, 0.0, 360.0);
        assert!(full_turn.almost_eq(&Mat4::IDENTITY));
    }

    #[test]
    fn projections() {
        let ortho: Mat4 = Mat4::ortho(-2.0, 2.0, -1.0, 1.0, 1.0, 3.0);
        assert_eq!(
            ortho * Vec4::new(-2.0, -1.0, -1.0, 1.0),
            Vec4::new(-1.0, -1.0, -1.0, 1.0)
        );

        let frustum: Mat4 = Mat4::frustum(-1.0, 1.0, -1.0, 1.0, 1.0, 3.0);
        assert_eq!(frustum.r3(), Vec4::new(0.0, 0.0, -1.0, 0.0));
        assert_eq!(frustum.c00, 1.0);
        assert_eq!(frustum.c02, 0.0);

        let perspective: Mat4 = Mat4::perspective(90.0, 1.0, 1.0, 3.0);
        assert!(perspective.almost_eq(&frustum));

        let degenerate: Mat4 = Mat4::ortho(1.0, 1.0, -1.0, 1.0, 1.0, 3.0);
        assert!(degenerate.c00.is_infinite());
    }

    #[test]
    fn look_at() {
        let view: Mat4 = Mat4::look_at(
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::ORIGIN,
            Vec3::new(0.0, 1.0, 0.0),
        );
        assert_eq!(
            view * Vec4::new(0.0, 0.0, 0.0, 1.0),
            Vec4::new(0.0, 0.0, -5.0, 1.0)
        );
        assert_eq!(view * Vec3::new(0.0, 0.0, 5.0), Vec3::ORIGIN);
    }

    #[test]
    fn formatting() {
        assert_eq!(
            Mat4::IDENTITY.to_string(),
            "Mat4(\n    [1, 0, 0, 0]\n    [0, 1, 0, 0]\n    [0, 0, 1, 0]\n    [0, 0, 0, 1]\n)"
        );
    }

    #[test]
    fn serialization() {
        let m: Mat4 = sample();
        let bytes: Vec<u8> = serde_cbor::to_vec(&m).expect("serialization should not fail");
        let decoded: Mat4 = serde_cbor::from_slice(&bytes).expect("deserialization should not fail");
        assert_eq!(decoded, m);
    }
}
