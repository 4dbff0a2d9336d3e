//! Rank-one size deflation for covariance matrices.
//!
//! In morphometric covariance matrices a dominant "size" axis often masks
//! the shape structure of interest. Removing it is a standard rank-one
//! deflation: scale a unit direction by the square root of the variance it
//! carries and subtract the outer product of that size factor from the
//! matrix. Variance along the chosen direction drops to (numerically) zero;
//! orthogonal structure is untouched.

use nalgebra::{DMatrix, DVector};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{IntegrationError, Result};
use crate::evolvability::{Evolvability, QuadraticForm};
use crate::math::linalg::{leading_singular_pair, outer_square};
use crate::validation::check_symmetric;

/// Direction along which size variation is removed.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizeAxis {
    /// First principal component of the matrix itself, the direction
    /// carrying the largest variance.
    #[default]
    LeadingComponent,

    /// Fixed isometric direction `(1/sqrt(n), ..., 1/sqrt(n))`, equal
    /// loading on every trait.
    Isometric,
}

/// Remove the size component of a covariance matrix along `axis`, using the
/// built-in [`Evolvability`] collaborator for the isometric branch.
///
/// See [`remove_size_with`] for details and error conditions.
///
/// # Errors
///
/// Same as [`remove_size_with`].
///
/// # Example
///
/// ```
/// use nalgebra::DMatrix;
/// use morpho_integration::{remove_size, SizeAxis};
///
/// let matrix = DMatrix::from_row_slice(2, 2, &[2.0, 1.0, 1.0, 2.0]);
/// let deflated = remove_size(&matrix, SizeAxis::LeadingComponent)?;
/// assert_eq!(deflated.shape(), (2, 2));
/// # Ok::<(), morpho_integration::IntegrationError>(())
/// ```
pub fn remove_size(matrix: &DMatrix<f64>, axis: SizeAxis) -> Result<DMatrix<f64>> {
    remove_size_with(matrix, axis, &Evolvability)
}

/// Remove the size component of a covariance matrix along `axis`, with an
/// injected quadratic-form collaborator.
///
/// For [`SizeAxis::Isometric`], the variance along the isometric unit vector
/// is obtained from `quadratic` and scales that vector into the size factor.
/// For [`SizeAxis::LeadingComponent`], the dominant left singular vector and
/// singular value of the matrix provide the size factor (for a symmetric PSD
/// matrix these coincide with the first eigenvector and eigenvalue).
///
/// The result has the same dimensions as the input. Inputs that are
/// symmetric but not positive semi-definite are not rejected; as in the
/// underlying deflation formula, their output is numerically meaningless.
///
/// # Errors
///
/// Returns [`IntegrationError::NotSquare`] or
/// [`IntegrationError::NotSymmetric`] for malformed input and
/// [`IntegrationError::MatrixTooSmall`] for matrices smaller than 2x2.
pub fn remove_size_with<Q: QuadraticForm>(
    matrix: &DMatrix<f64>,
    axis: SizeAxis,
    quadratic: &Q,
) -> Result<DMatrix<f64>> {
    check_symmetric(matrix)?;

    let n = matrix.nrows();
    if n < 2 {
        return Err(IntegrationError::matrix_too_small(2, n));
    }

    let size_factor = match axis {
        SizeAxis::Isometric => {
            let direction = DVector::from_element(n, 1.0 / (n as f64).sqrt());
            let variance = quadratic.quadratic_form(matrix, &direction);
            direction * variance.sqrt()
        }
        SizeAxis::LeadingComponent => {
            let (direction, variance) = leading_singular_pair(matrix)?;
            direction * variance.sqrt()
        }
    };

    Ok(matrix - outer_square(&size_factor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample_matrix() -> DMatrix<f64> {
        DMatrix::from_row_slice(3, 3, &[4.0, 1.0, 0.5, 1.0, 3.0, 0.2, 0.5, 0.2, 2.0])
    }

    #[test]
    fn test_output_shape_matches_input() {
        let m = sample_matrix();
        let result = remove_size(&m, SizeAxis::LeadingComponent).unwrap();
        assert_eq!(result.shape(), m.shape());
    }

    #[test]
    fn test_isometric_variance_removed() {
        let m = sample_matrix();
        let result = remove_size(&m, SizeAxis::Isometric).unwrap();

        let n = m.nrows();
        let v = DVector::from_element(n, 1.0 / (n as f64).sqrt());
        let remaining = Evolvability.quadratic_form(&result, &v);
        assert_relative_eq!(remaining, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_too_small_rejected() {
        let m = DMatrix::from_row_slice(1, 1, &[1.0]);
        assert!(matches!(
            remove_size(&m, SizeAxis::LeadingComponent),
            Err(IntegrationError::MatrixTooSmall { min: 2, actual: 1 })
        ));
    }

    #[test]
    fn test_asymmetric_rejected() {
        let m = DMatrix::from_row_slice(2, 2, &[1.0, 0.9, 0.1, 1.0]);
        assert!(matches!(
            remove_size(&m, SizeAxis::LeadingComponent),
            Err(IntegrationError::NotSymmetric { .. })
        ));
    }
}
