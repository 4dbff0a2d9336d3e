//! Options for eigenvalue dispersion computation.
//!
//! This module provides the [`DispersionOptions`] struct which centralizes
//! the tunable parameters of the dispersion index, along with presets for
//! the variants commonly reported in the morphometrics literature.
//!
//! # Example
//!
//! ```
//! use morpho_integration::DispersionOptions;
//!
//! // Default: relative variance of eigenvalues, positive filter on
//! let options = DispersionOptions::default();
//!
//! // Relative standard deviation, corrected for a sample of 50 specimens
//! let corrected = DispersionOptions::relative_sd().with_sample_size(50);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{IntegrationError, Result};

/// Options for the eigenvalue dispersion index.
///
/// The defaults reproduce the most common variant: the relative variance of
/// eigenvalues with spurious non-positive eigenvalues filtered out and no
/// finite-sample correction.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispersionOptions {
    /// Express dispersion as a standard deviation instead of a variance.
    pub use_std_dev: bool,

    /// Scale the observed dispersion by its theoretical maximum, yielding a
    /// ratio in `[0, 1]` for well-formed inputs.
    pub relative: bool,

    /// Number of observations the matrix was estimated from. When set, the
    /// expected upward bias of the observed dispersion is removed, making
    /// indices comparable across sample sizes.
    pub sample_size: Option<usize>,

    /// Discard eigenvalues that are non-positive after zero-snapping.
    /// Guards against spurious negative eigenvalues of near-singular
    /// matrices.
    pub keep_positive_only: bool,
}

impl Default for DispersionOptions {
    fn default() -> Self {
        Self {
            use_std_dev: false,
            relative: true,
            sample_size: None,
            keep_positive_only: true,
        }
    }
}

impl DispersionOptions {
    /// Create options with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the options.
    ///
    /// # Errors
    ///
    /// Returns [`IntegrationError::InvalidSampleSize`] if a sample size of
    /// zero was requested.
    pub fn validate(&self) -> Result<()> {
        if self.sample_size == Some(0) {
            return Err(IntegrationError::InvalidSampleSize);
        }
        Ok(())
    }

    /// Relative variance of eigenvalues (the default variant).
    #[must_use]
    pub fn relative_variance() -> Self {
        Self::default()
    }

    /// Relative standard deviation of eigenvalues.
    #[must_use]
    pub fn relative_sd() -> Self {
        Self {
            use_std_dev: true,
            ..Self::default()
        }
    }

    /// Absolute variance of eigenvalues, in the units of the input matrix.
    #[must_use]
    pub fn absolute_variance() -> Self {
        Self {
            relative: false,
            ..Self::default()
        }
    }

    /// Absolute standard deviation of eigenvalues.
    #[must_use]
    pub fn absolute_sd() -> Self {
        Self {
            use_std_dev: true,
            relative: false,
            ..Self::default()
        }
    }

    /// Set whether dispersion is reported as a standard deviation.
    #[must_use]
    pub const fn with_std_dev(mut self, use_std_dev: bool) -> Self {
        self.use_std_dev = use_std_dev;
        self
    }

    /// Set whether dispersion is scaled by its theoretical maximum.
    #[must_use]
    pub const fn with_relative(mut self, relative: bool) -> Self {
        self.relative = relative;
        self
    }

    /// Set the sample size for finite-sample bias correction.
    #[must_use]
    pub const fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = Some(sample_size);
        self
    }

    /// Set whether non-positive eigenvalues are filtered out.
    #[must_use]
    pub const fn with_keep_positive_only(mut self, keep: bool) -> Self {
        self.keep_positive_only = keep;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = DispersionOptions::default();
        assert!(options.validate().is_ok());
        assert!(!options.use_std_dev);
        assert!(options.relative);
        assert!(options.sample_size.is_none());
        assert!(options.keep_positive_only);
    }

    #[test]
    fn test_presets() {
        assert!(DispersionOptions::relative_sd().use_std_dev);
        assert!(!DispersionOptions::absolute_variance().relative);

        let sd = DispersionOptions::absolute_sd();
        assert!(sd.use_std_dev);
        assert!(!sd.relative);
    }

    #[test]
    fn test_builder_pattern() {
        let options = DispersionOptions::relative_variance()
            .with_sample_size(42)
            .with_keep_positive_only(false);
        assert_eq!(options.sample_size, Some(42));
        assert!(!options.keep_positive_only);
    }

    #[test]
    fn test_zero_sample_size_rejected() {
        let options = DispersionOptions::default().with_sample_size(0);
        assert!(options.validate().is_err());
    }
}
