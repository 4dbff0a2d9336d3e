//! Integration Statistics for Covariance Matrices
//!
//! Statistical utilities for quantitative-genetics and morphometrics
//! research: eigenvalue-dispersion-based integration indices, and removal
//! of a dominant size component from a covariance matrix by rank-one
//! deflation.
//!
//! # Features
//!
//! - **Eigenvalue dispersion**: variance or standard deviation of the
//!   eigenvalue spectrum, absolute or relative to its theoretical maximum,
//!   with optional finite-sample bias correction
//! - **Size removal**: deflate a covariance matrix along its first
//!   principal component or along the fixed isometric direction
//! - **Injected collaborator**: the quadratic form used by the isometric
//!   branch is a trait, so hosts can substitute their own implementation
//!
//! # Quick Start
//!
//! ```
//! use nalgebra::DMatrix;
//! use morpho_integration::{
//!     eigenvalue_dispersion, remove_size, DispersionOptions, SizeAxis,
//! };
//!
//! let matrix = DMatrix::from_row_slice(3, 3, &[
//!     2.0, 0.8, 0.6,
//!     0.8, 2.0, 0.7,
//!     0.6, 0.7, 2.0,
//! ]);
//!
//! // Relative eigenvalue variance in [0, 1]
//! let integration = eigenvalue_dispersion(&matrix, &DispersionOptions::default())?;
//! assert!(integration > 0.0 && integration < 1.0);
//!
//! // Deflate the dominant axis; shape structure remains
//! let shape_matrix = remove_size(&matrix, SizeAxis::LeadingComponent)?;
//! assert_eq!(shape_matrix.shape(), (3, 3));
//! # Ok::<(), morpho_integration::IntegrationError>(())
//! ```
//!
//! # Variants
//!
//! | Preset | Dispersion | Scaling |
//! |--------|------------|---------|
//! | [`DispersionOptions::relative_variance`] | variance | relative |
//! | [`DispersionOptions::relative_sd`] | std. deviation | relative |
//! | [`DispersionOptions::absolute_variance`] | variance | absolute |
//! | [`DispersionOptions::absolute_sd`] | std. deviation | absolute |

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::cast_precision_loss)]

pub mod config;
pub mod dispersion;
pub mod error;
pub mod evolvability;
pub mod math;
pub mod size_removal;
pub mod validation;

// Re-exports for convenient access
pub use config::DispersionOptions;
pub use dispersion::{eigenvalue_dispersion, ZERO_SNAP_REL_TOL};
pub use error::{IntegrationError, Result};
pub use evolvability::{Evolvability, QuadraticForm};
pub use size_removal::{remove_size, remove_size_with, SizeAxis};
pub use validation::is_symmetric;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::DMatrix;

    fn correlated_matrix() -> DMatrix<f64> {
        DMatrix::from_row_slice(
            4,
            4,
            &[
                3.0, 1.2, 0.9, 0.8, 1.2, 2.5, 0.7, 0.6, 0.9, 0.7, 2.0, 0.5, 0.8, 0.6, 0.5, 1.8,
            ],
        )
    }

    #[test]
    fn test_size_removal_reduces_integration() {
        let m = correlated_matrix();
        let options = DispersionOptions::default();

        let before = eigenvalue_dispersion(&m, &options).unwrap();
        let deflated = remove_size(&m, SizeAxis::LeadingComponent).unwrap();
        let after = eigenvalue_dispersion(&deflated, &options).unwrap();

        // Removing the dominant axis spreads the remaining variance
        assert!(after < before);
    }

    #[test]
    fn test_deflated_matrix_stays_symmetric() {
        let m = correlated_matrix();
        let deflated = remove_size(&m, SizeAxis::Isometric).unwrap();
        assert!(is_symmetric(&deflated));
    }
}
