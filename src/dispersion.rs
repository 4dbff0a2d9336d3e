//! Eigenvalue dispersion integration index.
//!
//! A covariance or correlation matrix among correlated traits concentrates
//! variance on few eigenvalues; among independent traits it spreads variance
//! evenly. The dispersion of the eigenvalues around their mean is therefore
//! a scalar index of morphological integration. This module computes it in
//! the variants selected by [`DispersionOptions`]: variance or standard
//! deviation, absolute or relative to the theoretical maximum, with an
//! optional finite-sample bias correction.

use nalgebra::DMatrix;

use crate::config::DispersionOptions;
use crate::error::Result;
use crate::math::linalg::{snap_to_zero, symmetric_eigenvalues};
use crate::validation::check_symmetric;

/// Relative tolerance for snapping near-zero eigenvalues to exactly zero
/// before the positive filter, scaled by the largest eigenvalue magnitude.
pub const ZERO_SNAP_REL_TOL: f64 = 1e-9;

/// Compute the eigenvalue dispersion index of a covariance or correlation
/// matrix.
///
/// The observed dispersion is the population variance of the eigenvalues.
/// The theoretical maximum is the dispersion of a matrix with the same size
/// and trace whose variance is concentrated on a single eigenvalue:
/// `(n - 1) * trace^2 / n^2`. With `relative` set, the index is the ratio of
/// the two, in `[0, 1]` for well-formed inputs: 0 for fully independent
/// traits, 1 for a single axis of variation.
///
/// When `sample_size` is set, the expected upward bias of the observed
/// dispersion (`max / sample_size`) is subtracted and the maximum adjusted
/// accordingly. The correction can push a near-zero observed dispersion
/// negative; with `use_std_dev` its square root is then NaN, which is
/// reported as is rather than masked.
///
/// # Errors
///
/// Returns [`crate::IntegrationError::NotSymmetric`] if the matrix is not
/// symmetric, [`crate::IntegrationError::NotSquare`] if it is not square,
/// and [`crate::IntegrationError::InvalidSampleSize`] for a sample size of
/// zero.
///
/// # Example
///
/// ```
/// use nalgebra::DMatrix;
/// use morpho_integration::{eigenvalue_dispersion, DispersionOptions};
///
/// // Equal, uncorrelated variances: no integration at all
/// let matrix = DMatrix::from_diagonal_element(5, 5, 2.0);
/// let index = eigenvalue_dispersion(&matrix, &DispersionOptions::default())?;
/// assert!(index.abs() < 1e-12);
/// # Ok::<(), morpho_integration::IntegrationError>(())
/// ```
pub fn eigenvalue_dispersion(matrix: &DMatrix<f64>, options: &DispersionOptions) -> Result<f64> {
    options.validate()?;
    check_symmetric(matrix)?;

    let mut eigenvalues = symmetric_eigenvalues(matrix);

    if options.keep_positive_only {
        let scale = eigenvalues.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));
        snap_to_zero(&mut eigenvalues, ZERO_SNAP_REL_TOL * scale);
        eigenvalues.retain(|&v| v > 0.0);
    }

    let count = eigenvalues.len() as f64;
    let total: f64 = eigenvalues.iter().sum();
    let mean = total / count;

    let mut observed = eigenvalues.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / count;
    let mut maximum = (count - 1.0) * total * total / (count * count);

    if let Some(sample_size) = options.sample_size {
        let correction = maximum / sample_size as f64;
        observed -= correction;
        maximum += correction;
    }

    if options.use_std_dev {
        observed = observed.sqrt();
        maximum = maximum.sqrt();
    }

    Ok(if options.relative {
        observed / maximum
    } else {
        observed
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IntegrationError;
    use approx::assert_relative_eq;

    #[test]
    fn test_uniform_diagonal_is_unintegrated() {
        let m = DMatrix::from_diagonal_element(6, 6, 3.0);
        let index = eigenvalue_dispersion(&m, &DispersionOptions::default()).unwrap();
        assert!(index.abs() < 1e-12);
    }

    #[test]
    fn test_asymmetric_input_rejected() {
        let m = DMatrix::from_row_slice(2, 2, &[1.0, 0.3, 0.4, 1.0]);
        let err = eigenvalue_dispersion(&m, &DispersionOptions::default()).unwrap_err();
        assert!(matches!(err, IntegrationError::NotSymmetric { .. }));
    }

    #[test]
    fn test_single_spike_is_maximally_integrated() {
        // All variance on one eigenvalue; keep the zero eigenvalues in so
        // the dispersion is taken over the full spectrum.
        let m = DMatrix::from_diagonal(&nalgebra::DVector::from_vec(vec![4.0, 0.0, 0.0, 0.0]));
        let options = DispersionOptions::default().with_keep_positive_only(false);
        let index = eigenvalue_dispersion(&m, &options).unwrap();
        assert_relative_eq!(index, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_absolute_variance_two_by_two() {
        // Eigenvalues 3 and 1: mean 2, population variance 1
        let m = DMatrix::from_row_slice(2, 2, &[2.0, 1.0, 1.0, 2.0]);
        let index = eigenvalue_dispersion(&m, &DispersionOptions::absolute_variance()).unwrap();
        assert_relative_eq!(index, 1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_zero_sample_size_rejected() {
        let m = DMatrix::from_diagonal_element(3, 3, 1.0);
        let options = DispersionOptions::default().with_sample_size(0);
        assert!(matches!(
            eigenvalue_dispersion(&m, &options),
            Err(IntegrationError::InvalidSampleSize)
        ));
    }
}
