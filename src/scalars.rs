//! `scalars` submodule implements scalar helpers that the rest of `extmath` is built on:
//! degree/radian conversion, trigonometry in degrees, rounding, positive modulo, value wrapping
//! and euclidean distances.
//!

use crate::vectors::Vec3;
use std::f64::consts::PI;

/// Multiplier that converts radians into degrees (`360 / 2π`).
///
pub const TO_DEGREES: f64 = 360.0 / (2.0 * PI);
/// Multiplier that converts degrees into radians (`2π / 360`).
///
pub const TO_RADIANS: f64 = (2.0 * PI) / 360.0;
/// Single precision version of [`TO_DEGREES`].
///
pub const TO_DEGREES_F: f32 = TO_DEGREES as f32;
/// Single precision version of [`TO_RADIANS`].
///
pub const TO_RADIANS_F: f32 = TO_RADIANS as f32;

/// [`DegreeTrig`] trait implements sine and cosine of angles that are given in degrees.
///
/// It is implemented for `f32` (which uses [`TO_RADIANS_F`]) and `f64` (which uses [`TO_RADIANS`]).
///
pub trait DegreeTrig {
    /// Returns sine of angle in degrees.
    ///
    fn sind(self) -> Self;
    /// Returns cosine of angle in degrees.
    ///
    fn cosd(self) -> Self;
}
impl DegreeTrig for f32 {
    fn sind(self) -> Self {
        (self * TO_RADIANS_F).sin()
    }

    fn cosd(self) -> Self {
        (self * TO_RADIANS_F).cos()
    }
}
impl DegreeTrig for f64 {
    fn sind(self) -> Self {
        (self * TO_RADIANS).sin()
    }

    fn cosd(self) -> Self {
        (self * TO_RADIANS).cos()
    }
}
/// Returns sine of `degrees` (`sin(degrees * TO_RADIANS)`).
///
/// # Example
/// ```rust
/// # use extmath::scalars::sind;
/// assert_eq!(sind(90.0_f32), 1.0);
/// assert_eq!(sind(90.0_f64), 1.0);
/// ```
///
pub fn sind<T: DegreeTrig>(degrees: T) -> T {
    degrees.sind()
}
/// Returns cosine of `degrees` (`cos(degrees * TO_RADIANS)`).
///
/// # Example
/// ```rust
/// # use extmath::scalars::cosd;
/// assert_eq!(cosd(0.0_f32), 1.0);
/// assert_eq!(cosd(180.0_f64), -1.0);
/// ```
///
pub fn cosd<T: DegreeTrig>(degrees: T) -> T {
    degrees.cosd()
}

/// [`RoundHalfUp`] trait rounds floats to the nearest integer, resolving ties towards
/// positive infinity (`-2.5` becomes `-2.0`, `2.5` becomes `3.0`).
///
/// This differs from [`f32::round`], which rounds ties away from zero, and from
/// [`FloatOperations::round_up_to`](crate::floats::FloatOperations::round_up_to).
/// The result is saturated to the range of `i32` (`f32`) or `i64` (`f64`), and NaN becomes zero.
///
/// # Example
/// ```rust
/// # use extmath::scalars::RoundHalfUp;
/// assert_eq!((-2.5_f32).round_half_up(), -2.0);
/// assert_eq!(2.5_f64.round_half_up(), 3.0);
/// assert_eq!(1e20_f32.round_half_up(), i32::MAX as f32);
/// ```
///
pub trait RoundHalfUp {
    /// Returns value rounded half up.
    ///
    fn round_half_up(self) -> Self;
}
/// Implements [`RoundHalfUp`] for float type, saturating through given integer type.
///
macro_rules! impl_round_half_up {
    ($($t:ty => $int:ty;)+) => {$(
        impl RoundHalfUp for $t {
            fn round_half_up(self) -> Self {
                let floor: $t = self.floor();
                // fraction is exact, so ties are detected reliably
                let rounded: $t = if self - floor >= 0.5 { floor + 1.0 } else { floor };
                rounded as $int as $t
            }
        }
    )+};
}
impl_round_half_up!(f32 => i32; f64 => i64;);

/// [`PositiveModulo`] trait implements modulo whose result is never negative for positive divisor.
///
/// Native remainder (`%`) keeps the sign of the dividend; positive modulo adds the divisor to
/// negative remainders so that the result lands in `[0; rhs)`.
///
/// The behaviour for non-positive `rhs` is unspecified: zero integer divisor panics (as `%` does),
/// negative divisor returns whatever the adjusted remainder is.
///
pub trait PositiveModulo<Rhs = Self> {
    /// Resulting type of operation.
    ///
    type Output;

    /// Performs positive modulo operation.
    ///
    fn pmod(self, rhs: Rhs) -> Self::Output;
}
/// Implements [`PositiveModulo`] for operands that share the same type.
///
/// Integer remainder and adjustment wrap on overflow (`i32::MIN.pmod(-1)` is `0`).
///
macro_rules! impl_pmod {
    (int $($t:ty),+) => {$(
        impl PositiveModulo for $t {
            type Output = $t;

            fn pmod(self, rhs: $t) -> Self::Output {
                let rem: $t = self.wrapping_rem(rhs);
                if rem < 0 {
                    rem.wrapping_add(rhs)
                } else {
                    rem
                }
            }
        }
    )+};
    (float $($t:ty),+) => {$(
        impl PositiveModulo for $t {
            type Output = $t;

            fn pmod(self, rhs: $t) -> Self::Output {
                let rem: $t = self % rhs;
                if rem < 0.0 {
                    rem + rhs
                } else {
                    rem
                }
            }
        }
    )+};
}
impl_pmod!(int i32, i64);
impl_pmod!(float f32, f64);
impl PositiveModulo<i32> for i64 {
    type Output = i32;

    fn pmod(self, rhs: i32) -> Self::Output {
        let rem: i64 = self.wrapping_rem(i64::from(rhs));
        if rem < 0 {
            (rem + i64::from(rhs)) as i32
        } else {
            rem as i32
        }
    }
}
impl PositiveModulo<i32> for i8 {
    type Output = i8;

    fn pmod(self, rhs: i32) -> Self::Output {
        let rem: i32 = i32::from(self) % rhs;
        if rem < 0 {
            (rem + rhs) as i8
        } else {
            rem as i8
        }
    }
}
/// Returns positive modulo of `value` and `modulus`.
///
/// Shorthand for writing `value.pmod(modulus)`.
///
/// # Example
/// ```rust
/// # use extmath::scalars::pmod;
/// assert_eq!(pmod(-1, 5), 4);
/// assert_eq!(pmod(7, 5), 2);
/// assert_eq!(pmod(-7_i64, 5_i32), 3_i32);
/// assert_eq!(pmod(-1.5_f32, 4.0), 2.5);
/// ```
///
pub fn pmod<T: PositiveModulo<R>, R>(value: T, modulus: R) -> T::Output {
    value.pmod(modulus)
}

/// [`WrappingArithmetic`] trait implements addition and subtraction that wrap around on
/// integer overflow instead of panicking.
///
/// Floats have no overflow, so their implementation is plain `+` and `-`.
///
pub trait WrappingArithmetic: Copy {
    /// Returns `self + rhs`, wrapping around at the boundary of the type.
    ///
    fn wrapped_add(self, rhs: Self) -> Self;
    /// Returns `self - rhs`, wrapping around at the boundary of the type.
    ///
    fn wrapped_sub(self, rhs: Self) -> Self;
}
/// Implements [`WrappingArithmetic`] for integer (`int`) or float (`float`) types.
///
macro_rules! impl_wrapping_arithmetic {
    (int $($t:ty),+) => {$(
        impl WrappingArithmetic for $t {
            fn wrapped_add(self, rhs: Self) -> Self {
                self.wrapping_add(rhs)
            }

            fn wrapped_sub(self, rhs: Self) -> Self {
                self.wrapping_sub(rhs)
            }
        }
    )+};
    (float $($t:ty),+) => {$(
        impl WrappingArithmetic for $t {
            fn wrapped_add(self, rhs: Self) -> Self {
                self + rhs
            }

            fn wrapped_sub(self, rhs: Self) -> Self {
                self - rhs
            }
        }
    )+};
}
impl_wrapping_arithmetic!(int i32, i64);
impl_wrapping_arithmetic!(float f32, f64);

/// Wraps `value` into `[min; max)` range (like modulo, but with variable minimum).
///
/// Computed as `pmod(value - min, max - min) + min`, where integer subtraction and addition wrap
/// on overflow. Callers must ensure that `max > min`, since range is used as a modulus.
/// For integer ranges wider than the type itself (e.g. `i32::MIN..i32::MAX`), the wrapped
/// range is negative and the result follows two's complement arithmetic.
///
/// # Panics
/// Panics if `max == min` for integers, since the modulus is zero.
///
/// # Example
/// ```rust
/// # use extmath::scalars::wheel;
/// assert_eq!(wheel(0, 10, 15), 5);
/// assert_eq!(wheel(0, 10, -3), 7);
/// assert_eq!(wheel(-180.0, 180.0, 270.0), -90.0);
/// assert_eq!(wheel(i32::MIN, i32::MAX, 0), i32::MIN);
/// ```
///
pub fn wheel<T>(min: T, max: T, value: T) -> T
where
    T: WrappingArithmetic + PositiveModulo<T, Output = T>,
{
    value
        .wrapped_sub(min)
        .pmod(max.wrapped_sub(min))
        .wrapped_add(min)
}

/// Returns euclidean length of two-dimensional difference (`sqrt(x² + y²)`).
///
/// # Example
/// ```rust
/// # use extmath::scalars::distance2;
/// assert_eq!(distance2(3.0, 4.0), 5.0);
/// ```
///
pub fn distance2(x: f64, y: f64) -> f64 {
    (x * x + y * y).sqrt()
}
/// Returns euclidean length of n-dimensional difference (`sqrt(Σ dᵢ²)`).
///
/// Empty slice has zero length.
///
/// # Example
/// ```rust
/// # use extmath::scalars::distance;
/// assert_eq!(distance(&[1.0, 2.0, 2.0]), 3.0);
/// assert_eq!(distance(&[]), 0.0);
/// ```
///
pub fn distance(dimensions: &[f64]) -> f64 {
    dimensions.iter().map(|d| d * d).sum::<f64>().sqrt()
}
/// Single precision version of [`distance`].
///
/// # Example
/// ```rust
/// # use extmath::scalars::distancef;
/// assert_eq!(distancef(&[2.0, 3.0, 6.0]), 7.0);
/// ```
///
pub fn distancef(dimensions: &[f32]) -> f32 {
    dimensions.iter().map(|d| d * d).sum::<f32>().sqrt()
}
/// Returns euclidean distance between two points.
///
/// # Example
/// ```rust
/// # use extmath::{scalars::distance_between, vectors::Vec3};
/// let a: Vec3 = Vec3::new(1.0, 1.0, 1.0);
/// let b: Vec3 = Vec3::new(3.0, 4.0, 7.0);
/// assert_eq!(distance_between(a, b), 7.0);
/// ```
///
pub fn distance_between(p1: Vec3, p2: Vec3) -> f32 {
    distancef(&[p1.x - p2.x, p1.y - p2.y, p1.z - p2.z])
}
