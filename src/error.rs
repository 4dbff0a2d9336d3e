//! Error types for integration statistics.

use thiserror::Error;

/// Main error type for covariance-matrix statistics.
#[derive(Error, Debug)]
pub enum IntegrationError {
    /// Input matrix is not symmetric within tolerance.
    #[error("covariance matrix must be symmetric: entries ({row}, {col}) and ({col}, {row}) disagree")]
    NotSymmetric { row: usize, col: usize },

    /// Input matrix is not square.
    #[error("expected a square matrix, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    /// Input matrix is too small for the requested operation.
    #[error("matrix too small: need at least {min}x{min}, got {actual}x{actual}")]
    MatrixTooSmall { min: usize, actual: usize },

    /// Finite-sample bias correction requires a positive sample size.
    #[error("sample size must be positive for bias correction")]
    InvalidSampleSize,

    /// A matrix decomposition did not produce the requested factors.
    #[error("decomposition failed: {0}")]
    Decomposition(String),
}

/// Result type alias for integration statistics.
pub type Result<T> = std::result::Result<T, IntegrationError>;

impl IntegrationError {
    /// Create a not-symmetric error for the first offending entry pair.
    #[must_use]
    pub const fn not_symmetric(row: usize, col: usize) -> Self {
        Self::NotSymmetric { row, col }
    }

    /// Create a not-square error.
    #[must_use]
    pub const fn not_square(rows: usize, cols: usize) -> Self {
        Self::NotSquare { rows, cols }
    }

    /// Create a matrix-too-small error.
    #[must_use]
    pub const fn matrix_too_small(min: usize, actual: usize) -> Self {
        Self::MatrixTooSmall { min, actual }
    }

    /// Create a decomposition error.
    #[must_use]
    pub fn decomposition(msg: impl Into<String>) -> Self {
        Self::Decomposition(msg.into())
    }
}
