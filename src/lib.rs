//! # extmath
//!
//! **extmath** - small linear algebra toolkit for graphics and geometry code.
//!
//! It provides fixed-size float and integer vectors ([`Vec2`](vectors::Vec2),
//! [`Vec2i`](vectors::Vec2i), [`Vec3`](vectors::Vec3), [`Vec3i`](vectors::Vec3i),
//! [`Vec4`](vectors::Vec4)), a 4x4 float matrix ([`Mat4`](matrices::Mat4)) with the usual
//! transform and projection constructors, and scalar helpers
//! (degree trigonometry, positive modulo, wrapping and distances).
//!
//! All types are small `Copy` values; every operation returns a new value and never mutates
//! its operands.
//!
//! # Prelude
//! Everything can be imported with `use extmath::prelude::*`.
//!
//! # Features
//! * `random` (enabled by default) - [`random`] module that extends any `rand` generator with
//!   helpers producing random vectors and narrow integers.
//!

#![warn(missing_docs, clippy::missing_docs_in_private_items)] // `missing_docs`
#![warn(unused_import_braces, unused_qualifications, unused_results)] // `unused_*`
#![warn(trivial_casts, trivial_numeric_casts)] // `casts`
#![warn(missing_copy_implementations, missing_debug_implementations)] // `missing_*_implementations`
#![warn(variant_size_differences, unreachable_pub)]

// crates
extern crate log;

extern crate seq_macro;
extern crate serde;
extern crate thiserror;

#[cfg(feature = "random")]
extern crate rand;

// submodules
pub mod floats;
pub mod matrices;
pub mod scalars;
pub mod vectors;

#[cfg(feature = "random")]
pub mod random;

// prelude
pub mod prelude;
