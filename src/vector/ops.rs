//! Arithmetic on [`Vector`]: add, subtract, scale, dot, cross and norm.
//!
//! Every operation borrows its operands and returns a freshly owned result,
//! so calls chain left to right. Binary operations pair components by index
//! with no broadcasting.
//!
//! A dimension mismatch is a programming error, not a runtime condition:
//! `add`, `sub`, `dot` and `cross` panic on it. Callers that need to recover
//! use the `try_*` variants, which return [`VecError`] instead.

use super::Vector;
use crate::core::traits::InnerProduct;
use crate::error::VecError;
use num_traits::Float;
use std::ops::{Add, Mul, Neg, Sub};

impl<T: Float> Vector<T> {
    fn check_same_dim(&self, other: &Self, op: &'static str) -> Result<(), VecError> {
        if self.dim() != other.dim() {
            return Err(VecError::DimensionMismatch {
                op,
                left: self.dim(),
                right: other.dim(),
            });
        }
        Ok(())
    }

    fn zip_with(&self, other: &Self, f: impl Fn(T, T) -> T) -> Self {
        self.iter()
            .zip(other.iter())
            .map(|(&a, &b)| f(a, b))
            .collect()
    }

    /// Element-wise sum, or [`VecError::DimensionMismatch`].
    pub fn try_add(&self, other: &Self) -> Result<Self, VecError> {
        self.check_same_dim(other, "sum")?;
        Ok(self.zip_with(other, |a, b| a + b))
    }

    /// Element-wise difference `self[i] - other[i]`, or [`VecError::DimensionMismatch`].
    pub fn try_sub(&self, other: &Self) -> Result<Self, VecError> {
        self.check_same_dim(other, "difference")?;
        Ok(self.zip_with(other, |a, b| a - b))
    }

    /// Dot product, or [`VecError::DimensionMismatch`].
    pub fn try_dot(&self, other: &Self) -> Result<T, VecError> {
        self.check_same_dim(other, "dot product")?;
        Ok(self.as_slice().dot(other.as_slice()))
    }

    /// Right-handed cross product, or [`VecError::CrossDimension`] unless
    /// both operands are 3-dimensional.
    pub fn try_cross(&self, other: &Self) -> Result<Self, VecError> {
        let (u, v) = match (self.as_slice(), other.as_slice()) {
            (&[u0, u1, u2], &[v0, v1, v2]) => ([u0, u1, u2], [v0, v1, v2]),
            _ => {
                return Err(VecError::CrossDimension {
                    left: self.dim(),
                    right: other.dim(),
                });
            }
        };
        Ok(Vector::from([
            u[1] * v[2] - u[2] * v[1],
            u[2] * v[0] - u[0] * v[2],
            u[0] * v[1] - u[1] * v[0],
        ]))
    }

    /// Element-wise sum.
    ///
    /// # Panics
    /// If the dimensions differ.
    pub fn add(&self, other: &Self) -> Self {
        self.try_add(other).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Element-wise difference `self[i] - other[i]`.
    ///
    /// # Panics
    /// If the dimensions differ.
    pub fn sub(&self, other: &Self) -> Self {
        self.try_sub(other).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Scales every component by `factor`.
    pub fn mul_scalar(&self, factor: T) -> Self {
        self.iter().map(|&x| x * factor).collect()
    }

    /// Sum of pairwise products; zero for empty vectors.
    ///
    /// # Panics
    /// If the dimensions differ.
    pub fn dot(&self, other: &Self) -> T {
        self.try_dot(other).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Cross product in a right-handed orthonormal basis.
    ///
    /// # Panics
    /// Unless both vectors are 3-dimensional.
    pub fn cross(&self, other: &Self) -> Self {
        self.try_cross(other).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Euclidean (L2) norm; zero for empty vectors.
    ///
    /// # Notes
    /// The sum of squares is not rescaled, so components beyond roughly
    /// `sqrt(T::max_value())` overflow to infinity.
    pub fn norm(&self) -> T {
        self.as_slice().norm()
    }
}

impl<'a, T: Float> Add<&'a Vector<T>> for &'a Vector<T> {
    type Output = Vector<T>;
    fn add(self, rhs: &'a Vector<T>) -> Vector<T> {
        Vector::add(self, rhs)
    }
}

impl<'a, T: Float> Sub<&'a Vector<T>> for &'a Vector<T> {
    type Output = Vector<T>;
    fn sub(self, rhs: &'a Vector<T>) -> Vector<T> {
        Vector::sub(self, rhs)
    }
}

impl<T: Float> Mul<T> for &Vector<T> {
    type Output = Vector<T>;
    fn mul(self, rhs: T) -> Vector<T> {
        self.mul_scalar(rhs)
    }
}

impl<T: Float> Neg for &Vector<T> {
    type Output = Vector<T>;
    fn neg(self) -> Vector<T> {
        self.mul_scalar(-T::one())
    }
}
