//! Input validation for covariance matrices.
//!
//! Both public operations share these checks. Symmetry is judged within a
//! tolerance relative to the largest entry magnitude, so matrices assembled
//! from floating-point arithmetic pass while genuinely asymmetric inputs
//! are rejected.

use nalgebra::DMatrix;

use crate::error::{IntegrationError, Result};

/// Relative tolerance for the symmetry check, scaled by the largest entry
/// magnitude of the matrix.
pub const SYMMETRY_REL_TOL: f64 = 1e-8;

/// Check that the matrix is square.
///
/// # Errors
///
/// Returns [`IntegrationError::NotSquare`] otherwise.
pub fn check_square(matrix: &DMatrix<f64>) -> Result<()> {
    if matrix.nrows() != matrix.ncols() {
        return Err(IntegrationError::not_square(matrix.nrows(), matrix.ncols()));
    }
    Ok(())
}

/// Whether the matrix is square and symmetric within [`SYMMETRY_REL_TOL`].
#[must_use]
pub fn is_symmetric(matrix: &DMatrix<f64>) -> bool {
    check_symmetric(matrix).is_ok()
}

/// Check that the matrix is square and symmetric within [`SYMMETRY_REL_TOL`].
///
/// # Errors
///
/// Returns [`IntegrationError::NotSquare`] for non-square input and
/// [`IntegrationError::NotSymmetric`] naming the first offending entry pair.
pub fn check_symmetric(matrix: &DMatrix<f64>) -> Result<()> {
    check_square(matrix)?;

    let scale = matrix.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));
    let tol = SYMMETRY_REL_TOL * scale;

    let n = matrix.nrows();
    for row in 0..n {
        for col in (row + 1)..n {
            if (matrix[(row, col)] - matrix[(col, row)]).abs() > tol {
                return Err(IntegrationError::not_symmetric(row, col));
            }
        }
    }
    Ok(())
}
