use thiserror::Error;

// Unified error type for nvec

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VecError {
    #[error("dimensions don't match: {op} of {left}-dimensional and {right}-dimensional vectors")]
    DimensionMismatch {
        op: &'static str,
        left: usize,
        right: usize,
    },
    #[error("cross product: both vectors must be 3-dimensional (got {left} and {right})")]
    CrossDimension { left: usize, right: usize },
}
