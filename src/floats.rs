//! `floats` submodule implements several consts, functions and traits that help in
//! work with `f32` type.
//!
//! [`almost_equal`] function and [`EPSILON`] const are dealing with floating point equality.
//!
//! [`FloatOperations`] trait and [`CLOSE_TO_ZERO`], [`CLOSE_TO_ONE`] consts are dealing with
//! distortions that may be caused by float operations.
//!
//! Vector and matrix equality in `extmath` is exact (IEEE-754 component comparison), so
//! functions of this module are what should be used when comparing results of computations.
//!

use std::hash::{Hash, Hasher};

/// Constant that is used in floating point equality.
///
/// It represents amount of difference that is allowed for two `f32` values to still be considered
/// equal (both as an absolute difference and as a difference relative to their magnitude).
///
pub const EPSILON: f32 = 0.00001;
/// This function implements approximate floating point equality for `extmath` crate.
///
/// Two values are considered equal if their difference is less than [`EPSILON`] or less than
/// [`EPSILON`] relative to their magnitude.
///
/// # Example
/// ```rust
/// # use extmath::floats::almost_equal;
/// assert!(almost_equal(0.15 + 0.15, 0.1 + 0.2));
/// assert!(almost_equal(1_000_000.0, 1_000_000.1));
/// assert!(!almost_equal(0.0, 0.001));
/// ```
///
pub fn almost_equal(a: f32, b: f32) -> bool {
    if a == b {
        return true;
    }

    let diff = (a - b).abs();
    let norm = (a.abs() + b.abs()).min(f32::MAX);
    diff < EPSILON || diff < norm * EPSILON
}

/// Feeds `f32` value to hasher in a way that is consistent with IEEE equality
/// (`-0.0` and `0.0` produce the same hash).
///
pub(crate) fn hash_f32<H: Hasher>(value: f32, state: &mut H) {
    let value: f32 = if value == 0.0 { 0.0 } else { value };
    value.to_bits().hash(state);
}

/// Constant that is used in floating point correction.
///
/// It defines the threshold for number to be considered small enough to then be floored.
///
pub const CLOSE_TO_ZERO: f32 = 0.0001;
/// Constant that is used in floating point correction.
///
/// It defines the threshold for number to be considered big enough to then be ceiled.
///
pub const CLOSE_TO_ONE: f32 = 0.9999;
/// [`FloatOperations`] trait defines `correct_to` and `round_up_to` associated functions that work
/// with floating point values.
///
pub trait FloatOperations {
    /// Corrects distortions that may be caused by float operations.
    ///
    /// For example, this function fixes such things as -0.0 into 0.0,
    /// 0.0001 (anything that is less than `CLOSE_TO_ZERO`) into 0.0 and
    /// 0.9999 (anything that is greater than `CLOSE_TO_ONE`) into 1.0.
    ///
    fn correct_to(self, digits: i32) -> Self;

    /// Rounds to given amount of digits after floating point.
    ///
    /// Passing negative number shifts floating point to the left.
    ///
    fn round_up_to(self, digits: i32) -> Self;
}
impl FloatOperations for f32 {
    /// Corrects distortions that may be caused by float operations.
    ///
    /// # Example
    /// ```rust
    /// # use extmath::floats::FloatOperations;
    /// assert_eq!((-0.0_f32).correct_to(0), 0.0);
    /// assert_eq!(0.00009_f32.correct_to(0), 0.0);
    /// assert_eq!(0.99999_f32.correct_to(0), 1.0);
    /// assert_eq!((-4.371139e-8_f32).correct_to(3), 0.0);
    /// ```
    ///
    fn correct_to(self, digits: i32) -> Self {
        let mul = 10_f32.powi(digits);

        let n = self * mul;

        let fract = n.abs().fract();
        let n = if !(CLOSE_TO_ZERO..=CLOSE_TO_ONE).contains(&fract) {
            n.round()
        } else {
            n
        };

        if n == 0.0 {
            return 0.0;
        }
        n / mul
    }

    /// Rounds to given amount of digits after floating point.
    ///
    /// # Example
    /// ```rust
    /// # use extmath::floats::FloatOperations;
    /// assert_eq!(12.345_f32.round_up_to(2), 12.35);
    /// assert_eq!(12.345_f32.round_up_to(-1), 10.0);
    /// ```
    ///
    fn round_up_to(self, digits: i32) -> Self {
        let mul = 10_f32.powi(digits);
        (self * mul).round() / mul
    }
}
impl<T: FloatOperations, const N: usize> FloatOperations for [T; N] {
    fn correct_to(self, digits: i32) -> Self {
        self.map(|elem| elem.correct_to(digits))
    }

    fn round_up_to(self, digits: i32) -> Self {
        self.map(|elem| elem.round_up_to(digits))
    }
}

#[cfg(test)]
mod tests {
    use super::{almost_equal, hash_f32, FloatOperations};
    use std::collections::hash_map::DefaultHasher;
    use std::hash::Hasher;

    #[test]
    fn equality() {
        assert!(almost_equal(1.0, 1.0 + 1e-7));
        assert!(almost_equal(-4.371139e-8, 0.0));
        assert!(almost_equal(123456.7, 123456.8));
        assert!(!almost_equal(1.0, 1.01));
        assert!(!almost_equal(f32::NAN, f32::NAN));
    }

    #[test]
    fn correction() {
        assert_eq!([0.99999_f32, -0.00001, 2.5].correct_to(0), [1.0, 0.0, 2.5]);
        assert_eq!([0.126_f32, 3.0].round_up_to(2), [0.13, 3.0]);
    }

    #[test]
    fn signed_zero_hash() {
        let (mut h1, mut h2) = (DefaultHasher::new(), DefaultHasher::new());
        hash_f32(0.0, &mut h1);
        hash_f32(-0.0, &mut h2);
        assert_eq!(h1.finish(), h2.finish());
    }
}
