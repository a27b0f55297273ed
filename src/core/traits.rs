//! Core vector traits for nvec.

/// Number of components (the dimension) of a vector-like value.
pub trait Dimension {
    fn dim(&self) -> usize;
}

/// Inner products & norms.
pub trait InnerProduct {
    /// Associated scalar type.
    type Scalar: Copy + PartialOrd;
    /// Compute dot(x, y).
    fn dot(&self, other: &Self) -> Self::Scalar;
    /// Compute ‖x‖₂.
    fn norm(&self) -> Self::Scalar;
}
