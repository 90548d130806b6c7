//! Regression result structures.

use faer::{Col, Mat};

/// Result from a multi-predictor regression fit.
#[derive(Debug, Clone)]
pub struct RegressionResult {
    /// Estimated coefficients, one per design matrix column.
    ///
    /// An intercept added by the estimator is reported separately in
    /// `intercept`; a constant column supplied by the caller stays here.
    pub coefficients: Col<f64>,

    /// Intercept term (if the estimator added one).
    pub intercept: Option<f64>,

    /// Residuals (y - fitted_values).
    pub residuals: Col<f64>,

    /// Fitted values (predictions on training data).
    pub fitted_values: Col<f64>,

    /// Number of observations.
    pub n_observations: usize,

    /// Number of parameters (including intercept if present).
    pub n_parameters: usize,

    /// Coefficient of determination (R²).
    pub r_squared: f64,

    /// Mean squared error, RSS / residual degrees of freedom.
    pub mse: f64,
}

impl RegressionResult {
    /// Build a result from solved coefficients, computing residuals and fit statistics.
    pub(crate) fn from_coefficients(
        x: &Mat<f64>,
        y: &Col<f64>,
        coefficients: Col<f64>,
        intercept: Option<f64>,
    ) -> Self {
        let n = x.nrows();
        let n_features = x.ncols();

        let fitted_values = linear_predictor(x, &coefficients, intercept);
        let residuals = y - &fitted_values;

        let y_mean: f64 = y.iter().sum::<f64>() / n as f64;
        let tss: f64 = y.iter().map(|&yi| (yi - y_mean).powi(2)).sum();
        let rss: f64 = residuals.iter().map(|&r| r.powi(2)).sum();

        let r_squared = if tss > 0.0 {
            1.0 - rss / tss
        } else if rss < 1e-10 {
            1.0
        } else {
            0.0
        };

        let n_parameters = n_features + usize::from(intercept.is_some());
        let mse = if n > n_parameters {
            rss / (n - n_parameters) as f64
        } else {
            f64::NAN
        };

        Self {
            coefficients,
            intercept,
            residuals,
            fitted_values,
            n_observations: n,
            n_parameters,
            r_squared,
            mse,
        }
    }

    /// Residual degrees of freedom.
    pub fn residual_df(&self) -> usize {
        self.n_observations.saturating_sub(self.n_parameters)
    }

    /// Residual sum of squares.
    pub fn rss(&self) -> f64 {
        self.residuals.iter().map(|&r| r.powi(2)).sum()
    }
}

/// Compute `intercept + X·β`.
///
/// Panics when `x.ncols() != coefficients.nrows()`.
pub(crate) fn linear_predictor(x: &Mat<f64>, coefficients: &Col<f64>, intercept: Option<f64>) -> Col<f64> {
    assert_eq!(
        x.ncols(),
        coefficients.nrows(),
        "design has {} columns but the model has {} coefficients",
        x.ncols(),
        coefficients.nrows()
    );
    let mut pred = x * coefficients;
    if let Some(b) = intercept {
        for i in 0..pred.nrows() {
            pred[i] += b;
        }
    }
    pred
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_fit_statistics() {
        let x = Mat::from_fn(4, 1, |i, _| i as f64);
        let y = Col::from_fn(4, |i| 1.0 + 2.0 * i as f64);
        let coefficients = Col::from_fn(1, |_| 2.0);

        let result = RegressionResult::from_coefficients(&x, &y, coefficients, Some(1.0));

        assert_eq!(result.n_observations, 4);
        assert_eq!(result.n_parameters, 2);
        assert_eq!(result.residual_df(), 2);
        assert!((result.r_squared - 1.0).abs() < 1e-12);
        assert!(result.rss() < 1e-20);
        assert!(result.mse.abs() < 1e-20);
    }

    #[test]
    fn test_mse_undefined_without_residual_df() {
        let x = Mat::from_fn(2, 2, |i, j| if i == j { 1.0 } else { 0.0 });
        let y = Col::from_fn(2, |i| i as f64);
        let coefficients = Col::from_fn(2, |j| j as f64);

        let result = RegressionResult::from_coefficients(&x, &y, coefficients, None);
        assert!(result.mse.is_nan());
    }

    #[test]
    fn test_linear_predictor_adds_intercept() {
        let x = Mat::from_fn(2, 2, |i, j| (i + j) as f64);
        let coefficients = Col::from_fn(2, |j| [2.0, -1.0][j]);

        let pred = linear_predictor(&x, &coefficients, Some(0.5));
        assert_eq!(pred[0], -0.5);
        assert_eq!(pred[1], 0.5);
    }

    #[test]
    #[should_panic(expected = "3 columns but the model has 2 coefficients")]
    fn test_linear_predictor_rejects_extra_columns() {
        let x = Mat::<f64>::zeros(2, 3);
        let coefficients = Col::<f64>::zeros(2);
        linear_predictor(&x, &coefficients, None);
    }
}
