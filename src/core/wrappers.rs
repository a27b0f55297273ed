//! Trait implementations for plain slices and `Vec<T>`.
//!
//! The slice implementation is the single definition of the dot product and
//! Euclidean norm in the crate; `Vec<T>` and [`Vector`](crate::Vector)
//! forward to it.

use crate::core::traits::{Dimension, InnerProduct};
use num_traits::Float;

impl<T> Dimension for [T] {
    fn dim(&self) -> usize {
        self.len()
    }
}

impl<T> Dimension for Vec<T> {
    fn dim(&self) -> usize {
        self.len()
    }
}

impl<T: Float> InnerProduct for [T] {
    type Scalar = T;

    /// Computes `x^T y`.
    fn dot(&self, other: &Self) -> T {
        assert_eq!(self.len(), other.len(), "dimensions don't match");
        self.iter()
            .zip(other.iter())
            .fold(T::zero(), |acc, (&xi, &yi)| acc + xi * yi)
    }

    /// Computes `||x||_2`.
    ///
    /// # Notes
    /// Plain sum of squares: overflows to infinity for components near `sqrt(T::max_value())`.
    fn norm(&self) -> T {
        self.iter()
            .fold(T::zero(), |acc, &xi| acc + xi * xi)
            .sqrt()
    }
}

impl<T: Float> InnerProduct for Vec<T> {
    type Scalar = T;

    fn dot(&self, other: &Self) -> T {
        self.as_slice().dot(other.as_slice())
    }

    fn norm(&self) -> T {
        self.as_slice().norm()
    }
}
