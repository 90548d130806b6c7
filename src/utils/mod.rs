//! Helpers for building design matrices and target vectors.

mod matrix;

pub use matrix::{design_matrix_from_rows, target_from_slice, with_intercept_column};
pub(crate) use matrix::validate_design;
