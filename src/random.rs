//! `random` submodule extends sources of uniform randomness with helpers that produce
//! narrow integers and random vectors.
//!
//! [`UniformSource`] is the capability that helpers are built on; it is implemented for every
//! [`rand::RngCore`], so any `rand` generator can be used:
//!
//! ```rust
//! # use extmath::random::RandomExt;
//! # use rand::{rngs::StdRng, SeedableRng};
//! let mut rng: StdRng = StdRng::seed_from_u64(42);
//! let direction = rng.next_vec3(2.0);
//! assert!((direction.length() - 2.0).abs() < 1e-5);
//! ```
//!
//! This module is available with `random` feature (enabled by default).
//!

use crate::vectors::{Vec2, Vec3};
use rand::{Rng, RngCore};

/// [`UniformSource`] trait represents source of uniformly distributed values.
///
pub trait UniformSource {
    /// Returns float from `[0; 1)` range.
    ///
    fn next_float(&mut self) -> f32;

    /// Returns integer from `[0; bound)` range.
    ///
    /// # Panics
    /// Implementations may panic if `bound` is not positive.
    ///
    fn next_int(&mut self, bound: i32) -> i32;
}
impl<R: RngCore + ?Sized> UniformSource for R {
    fn next_float(&mut self) -> f32 {
        self.gen::<f32>()
    }

    /// # Panics
    /// Panics if `bound` is not positive (`rand` rejects empty ranges).
    ///
    fn next_int(&mut self, bound: i32) -> i32 {
        self.gen_range(0..bound)
    }
}

/// [`RandomExt`] trait adds derived draws to every [`UniformSource`].
///
/// Every helper consumes draws from the source in a fixed order, so seeded sources produce
/// reproducible sequences.
///
pub trait RandomExt: UniformSource {
    /// Returns `next_int(65535)` narrowed to `i16`.
    ///
    /// Values above `i16::MAX` wrap into negative ones, and `65535` (`-1`) is never produced.
    ///
    fn next_short(&mut self) -> i16 {
        self.next_int(65535) as i16
    }

    /// Returns `next_int(255)` narrowed to `i8`.
    ///
    /// Values above `i8::MAX` wrap into negative ones, and `255` (`-1`) is never produced.
    ///
    fn next_byte(&mut self) -> i8 {
        self.next_int(255) as i8
    }

    /// Returns vector of given length with random direction.
    ///
    /// Both components are drawn from `[0; 1)` (`x` first), then vector is normalized and scaled.
    /// Directions are therefore limited to the first quadrant and are not uniformly
    /// distributed over it. If both draws are zero, the result has NaN components.
    ///
    fn next_vec2(&mut self, length: f32) -> Vec2 {
        let x: f32 = self.next_float();
        let y: f32 = self.next_float();
        Vec2::new(x, y).normalized() * length
    }

    /// Returns vector of given length with random direction.
    ///
    /// Works like [`RandomExt::next_vec2`], drawing `x`, `y` and `z` in order.
    ///
    fn next_vec3(&mut self, length: f32) -> Vec3 {
        let x: f32 = self.next_float();
        let y: f32 = self.next_float();
        let z: f32 = self.next_float();
        Vec3::new(x, y, z).normalized() * length
    }
}
impl<T: UniformSource + ?Sized> RandomExt for T {}

#[cfg(test)]
mod tests {
    use super::{RandomExt, UniformSource};
    use crate::vectors::{Vec2, Vec3};
    use rand::{rngs::StdRng, SeedableRng};

    /// Source that returns the upper end of every integer range.
    ///
    struct Upper;
    impl UniformSource for Upper {
        fn next_float(&mut self) -> f32 {
            0.5
        }

        fn next_int(&mut self, bound: i32) -> i32 {
            bound - 1
        }
    }

    #[test]
    fn narrowing() {
        assert_eq!(Upper.next_short(), -2);
        assert_eq!(Upper.next_byte(), -2);
        assert!(Upper
            .next_vec2(2.0)
            .almost_eq(&Vec2::new(2.0_f32.sqrt(), 2.0_f32.sqrt())));
        assert!(Upper
            .next_vec3(3.0)
            .almost_eq(&Vec3::new(3.0_f32.sqrt(), 3.0_f32.sqrt(), 3.0_f32.sqrt())));
    }

    #[test]
    fn ranges() {
        let mut rng: StdRng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let f: f32 = rng.next_float();
            assert!((0.0..1.0).contains(&f));

            let i: i32 = rng.next_int(10);
            assert!((0..10).contains(&i));
        }
    }

    #[test]
    fn vectors() {
        let mut rng: StdRng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let v2: Vec2 = rng.next_vec2(5.0);
            assert!((v2.length() - 5.0).abs() < 1e-4);
            assert!(v2.x >= 0.0 && v2.y >= 0.0);

            let v3: Vec3 = rng.next_vec3(1.0);
            assert!((v3.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn reproducible() {
        let (mut a, mut b): (StdRng, StdRng) = (StdRng::seed_from_u64(1), StdRng::seed_from_u64(1));
        assert_eq!(a.next_vec3(1.0), b.next_vec3(1.0));
        assert_eq!(a.next_short(), b.next_short());
        assert_eq!(a.next_byte(), b.next_byte());
    }

    #[test]
    #[should_panic]
    fn empty_bound() {
        let _ = StdRng::seed_from_u64(0).next_int(0);
    }
}
