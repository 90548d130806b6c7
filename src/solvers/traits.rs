//! Core traits and the error type shared by every estimator.

use crate::core::{OptionsError, RegressionResult};
use faer::{Col, Mat};
use thiserror::Error;

/// Errors that can occur while computing statistics or fitting a model.
#[derive(Debug, Error)]
pub enum RegressionError {
    #[error("empty input: {field} cannot be empty")]
    EmptyInput { field: &'static str },

    #[error("insufficient sample size: need at least {needed} observations, got {got}")]
    InsufficientSampleSize { needed: usize, got: usize },

    #[error("dimension mismatch: x has {x_len} observations but y has {y_len}")]
    DimensionMismatch { x_len: usize, y_len: usize },

    #[error("matrix is singular or nearly singular (determinant = {determinant:e})")]
    SingularMatrix { determinant: f64 },

    #[error("correlation is undefined: at least one variable has zero variance")]
    UndefinedCorrelation,

    #[error(
        "incompatible shapes: cannot multiply {left_rows}x{left_cols} by {right_rows}x{right_cols}"
    )]
    IncompatibleShapes {
        left_rows: usize,
        left_cols: usize,
        right_rows: usize,
        right_cols: usize,
    },

    #[error("matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("ragged rows: row {row} has {got} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("invalid options: {0}")]
    InvalidOptions(#[from] OptionsError),

    #[error("numerical error: {0}")]
    NumericalError(String),
}

/// A regression estimator that can be fit to data.
///
/// Fitting consumes nothing and returns a separate fitted model, so one
/// configured estimator can be reused across datasets.
pub trait Regressor {
    /// The type of the fitted model.
    type Fitted: FittedRegressor;

    /// Fit the model to the data.
    ///
    /// # Arguments
    /// * `x` - Design matrix of shape (n_samples, n_features)
    /// * `y` - Target vector of length n_samples
    fn fit(&self, x: &Mat<f64>, y: &Col<f64>) -> Result<Self::Fitted, RegressionError>;
}

/// A fitted regression model that can make predictions.
pub trait FittedRegressor {
    /// Make predictions on new data laid out like the training design matrix.
    ///
    /// # Panics
    /// If `x` does not have one column per coefficient. Use
    /// [`try_predict`](Self::try_predict) for untrusted input.
    fn predict(&self, x: &Mat<f64>) -> Col<f64>;

    /// Access the regression results.
    fn result(&self) -> &RegressionResult;

    /// Checked [`predict`](Self::predict): `IncompatibleShapes` when `x` has
    /// a different number of columns than the fitted model.
    fn try_predict(&self, x: &Mat<f64>) -> Result<Col<f64>, RegressionError> {
        let n_coefficients = self.coefficients().nrows();
        if x.ncols() != n_coefficients {
            return Err(RegressionError::IncompatibleShapes {
                left_rows: x.nrows(),
                left_cols: x.ncols(),
                right_rows: n_coefficients,
                right_cols: 1,
            });
        }
        Ok(self.predict(x))
    }

    /// Get the coefficients (excluding an intercept added by the estimator).
    fn coefficients(&self) -> &Col<f64> {
        &self.result().coefficients
    }

    /// Get the intercept, if the estimator added one.
    fn intercept(&self) -> Option<f64> {
        self.result().intercept
    }

    /// Get R² on the training data.
    fn r_squared(&self) -> f64 {
        self.result().r_squared
    }

    /// Calculate the score (R²) on new data.
    fn score(&self, x: &Mat<f64>, y: &Col<f64>) -> f64 {
        let predictions = self.predict(x);
        let n = y.nrows();

        let y_mean: f64 = y.iter().sum::<f64>() / n as f64;

        let tss: f64 = y.iter().map(|&yi| (yi - y_mean).powi(2)).sum();
        let rss: f64 = y
            .iter()
            .zip(predictions.iter())
            .map(|(&yi, &pi)| (yi - pi).powi(2))
            .sum();

        if tss == 0.0 {
            // Constant target
            if rss == 0.0 {
                1.0
            } else {
                0.0
            }
        } else {
            1.0 - rss / tss
        }
    }
}
