//! nvec: dimension-checked, chainable vector arithmetic
//!
//! This crate provides a single variable-dimension [`Vector`] type with addition, subtraction,
//! scalar multiplication, dot product, cross product and Euclidean norm. Operations never mutate
//! their operands and always return a new value, so they compose left to right:
//!
//! ```
//! use nvec::vector;
//!
//! let a = vector![1.0, 2.0];
//! let b = vector![3.0, 4.0];
//! assert_eq!(a.add(&b).dot(&vector![5.0, 6.0]), 56.0);
//! ```
//!
//! Mismatched dimensions are treated as a bug in the caller and panic. The `try_*` methods
//! return a [`VecError`] for callers that would rather handle the mismatch.

pub mod core;
pub mod error;
pub mod vector;

// Re-exports for convenience
pub use self::core::*;
pub use error::*;
pub use vector::Vector;
