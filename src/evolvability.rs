//! Quadratic-form collaborator used by size removal.
//!
//! Evolvability in the quantitative-genetics sense is the variance a
//! covariance matrix exposes along a selection gradient: `beta' * G * beta`.
//! The size-removal routine receives this as an injected collaborator so a
//! host can substitute its own implementation without touching the
//! deflation logic.

use nalgebra::{DMatrix, DVector};

/// Quadratic form `v' * M * v` evaluated against a covariance matrix.
pub trait QuadraticForm {
    /// Evaluate `vector' * matrix * vector`.
    fn quadratic_form(&self, matrix: &DMatrix<f64>, vector: &DVector<f64>) -> f64;
}

/// Default collaborator computing the evolvability of `matrix` along
/// `vector` directly.
#[derive(Debug, Clone, Copy, Default)]
pub struct Evolvability;

impl QuadraticForm for Evolvability {
    fn quadratic_form(&self, matrix: &DMatrix<f64>, vector: &DVector<f64>) -> f64 {
        vector.dot(&(matrix * vector))
    }
}
