//! Linear algebra helpers shared by the dispersion and size-removal routines.
//!
//! Thin wrappers over nalgebra that pin down the ordering conventions:
//! spectra are reported in descending order, and the dominant singular
//! component is located by an explicit arg-max rather than the ordering the
//! decomposition happens to return.

use nalgebra::{DMatrix, DVector};

use crate::error::{IntegrationError, Result};

/// Eigenvalues of a symmetric matrix, sorted in descending order.
///
/// The caller is responsible for symmetry; see
/// [`crate::validation::check_symmetric`].
#[must_use]
pub fn symmetric_eigenvalues(matrix: &DMatrix<f64>) -> Vec<f64> {
    let mut values: Vec<f64> = matrix.symmetric_eigenvalues().iter().copied().collect();
    values.sort_by(|a, b| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));
    values
}

/// Left singular vector and singular value of the dominant component.
///
/// # Errors
///
/// Returns [`IntegrationError::Decomposition`] if the SVD does not yield
/// left singular vectors or the matrix is empty.
pub fn leading_singular_pair(matrix: &DMatrix<f64>) -> Result<(DVector<f64>, f64)> {
    let svd = matrix.clone().svd(true, false);
    let u = svd
        .u
        .ok_or_else(|| IntegrationError::decomposition("SVD produced no left singular vectors"))?;

    let (lead, &value) = svd
        .singular_values
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .ok_or_else(|| IntegrationError::decomposition("SVD produced an empty spectrum"))?;

    Ok((u.column(lead).into_owned(), value))
}

/// Rank-one matrix `v * v^T`.
#[must_use]
pub fn outer_square(v: &DVector<f64>) -> DMatrix<f64> {
    v * v.transpose()
}

/// Snap values whose magnitude is below `tol` to exactly zero.
pub fn snap_to_zero(values: &mut [f64], tol: f64) {
    for v in values.iter_mut() {
        if v.abs() < tol {
            *v = 0.0;
        }
    }
}
