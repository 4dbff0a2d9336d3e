//! Mathematical utilities for integration statistics.
//!
//! This module provides:
//! - [`linalg`]: eigenvalue extraction, dominant singular pairs, outer products

pub mod linalg;

pub use linalg::{leading_singular_pair, outer_square, snap_to_zero, symmetric_eigenvalues};
