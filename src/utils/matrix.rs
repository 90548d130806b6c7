//! Matrix utility functions.

use crate::solvers::RegressionError;
use faer::{Col, Mat};

/// Build a design matrix from row-major data.
///
/// Every row must have the width of the first one.
pub fn design_matrix_from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Mat<f64>, RegressionError> {
    let n_rows = rows.len();
    if n_rows == 0 {
        return Err(RegressionError::EmptyInput {
            field: "design matrix",
        });
    }

    let n_cols = rows[0].as_ref().len();
    if n_cols == 0 {
        return Err(RegressionError::EmptyInput {
            field: "design matrix row",
        });
    }

    for (i, row) in rows.iter().enumerate() {
        let got = row.as_ref().len();
        if got != n_cols {
            return Err(RegressionError::RaggedRows {
                row: i,
                expected: n_cols,
                got,
            });
        }
    }

    Ok(Mat::from_fn(n_rows, n_cols, |i, j| rows[i].as_ref()[j]))
}

/// Copy a slice into a target vector.
pub fn target_from_slice(values: &[f64]) -> Col<f64> {
    Col::from_fn(values.len(), |i| values[i])
}

/// Prepend a constant-1 column to `x`, producing `[1 | X]`.
pub fn with_intercept_column(x: &Mat<f64>) -> Mat<f64> {
    Mat::from_fn(x.nrows(), x.ncols() + 1, |i, j| {
        if j == 0 {
            1.0
        } else {
            x[(i, j - 1)]
        }
    })
}

/// Check the (X, y) pair every multi-predictor solver requires.
pub(crate) fn validate_design(x: &Mat<f64>, y: &Col<f64>) -> Result<(), RegressionError> {
    if x.nrows() == 0 || x.ncols() == 0 {
        return Err(RegressionError::EmptyInput {
            field: "design matrix",
        });
    }
    if x.nrows() != y.nrows() {
        return Err(RegressionError::DimensionMismatch {
            x_len: x.nrows(),
            y_len: y.nrows(),
        });
    }
    Ok(())
}
