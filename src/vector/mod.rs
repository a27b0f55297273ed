//! The variable-dimension `Vector` type.
//!
//! A `Vector` is an ordered sequence of floating-point components whose
//! dimension is fixed when it is built. There is no mutable access to the
//! components: every arithmetic operation in [`ops`] produces a new vector,
//! which is what makes expressions such as
//! `a.add(&b).mul_scalar(2.0).dot(&c)` chain from left to right.
//!
//! # Construction
//! - [`Vector::zeros`] / [`Vector::new`]: zero-filled vector of a given dimension.
//! - [`vector!`](crate::vector!), [`Vector::from_slice`], `From<Vec<T>>`,
//!   `From<[T; N]>` and `FromIterator`: vectors from known values.

pub mod ops;

use crate::core::traits::{Dimension, InnerProduct};
use num_traits::Float;
use std::fmt;
use std::ops::Index;
use std::slice::Iter;

/// An n-dimensional vector of floating-point components.
#[derive(Clone, Debug, PartialEq)]
pub struct Vector<T = f64> {
    data: Vec<T>,
}

impl<T: Float> Vector<T> {
    /// Zero-filled vector of dimension `n`. `n = 0` yields the empty vector.
    pub fn zeros(n: usize) -> Self {
        Self {
            data: vec![T::zero(); n],
        }
    }

    /// Same as [`Vector::zeros`].
    pub fn new(n: usize) -> Self {
        Self::zeros(n)
    }

    pub fn from_slice(values: &[T]) -> Self {
        Self {
            data: values.to_vec(),
        }
    }

    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    /// Number of components.
    pub fn dim(&self) -> usize {
        Dimension::dim(self)
    }

    pub fn len(&self) -> usize {
        self.dim()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

/// Builds a [`Vector`] from literal components, e.g. `vector![1.0, 2.0, 3.0]`.
///
/// Components must be floating-point; integer literals are rejected:
///
/// ```compile_fail
/// let v = nvec::vector![1, 2];
/// ```
#[macro_export]
macro_rules! vector {
    () => {
        $crate::Vector::from_vec(::std::vec::Vec::new())
    };
    ($($x:expr),+ $(,)?) => {
        $crate::Vector::from_vec(::std::vec![$($x),+])
    };
}

impl<T: Float> Index<usize> for Vector<T> {
    type Output = T;
    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T: Float> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}

impl<T: Float> From<Vec<T>> for Vector<T> {
    fn from(data: Vec<T>) -> Self {
        Self::from_vec(data)
    }
}

impl<T: Float, const N: usize> From<[T; N]> for Vector<T> {
    fn from(values: [T; N]) -> Self {
        Self::from_vec(Vec::from(values))
    }
}

impl<T: Float> From<Vector<T>> for Vec<T> {
    fn from(v: Vector<T>) -> Self {
        v.data
    }
}

impl<T: Float> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<'a, T: Float> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T: Float + fmt::Display> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, x) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", x)?;
        }
        write!(f, "]")
    }
}

impl<T: Float> Dimension for Vector<T> {
    fn dim(&self) -> usize {
        self.as_slice().dim()
    }
}

impl<T: Float> InnerProduct for Vector<T> {
    type Scalar = T;

    /// Panics if the dimensions differ.
    fn dot(&self, other: &Self) -> T {
        Vector::dot(self, other)
    }

    fn norm(&self) -> T {
        Vector::norm(self)
    }
}
