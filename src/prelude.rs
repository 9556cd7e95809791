//! Prelude module: `extmath::prelude` re-exports all `extmath` items.
//!
//! # Examples
//! Import all the exports.
//!
//! ```rust
//! use extmath::prelude::*;
//! ```
//!

// re-exports
pub use crate::floats::*;
pub use crate::matrices::*;
#[cfg(feature = "random")]
pub use crate::random::*;
pub use crate::scalars::*;
pub use crate::vectors::*;
