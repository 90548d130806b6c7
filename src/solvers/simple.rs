//! Single-predictor linear regression from correlation and standard deviations.
//!
//! The slope is m = r·σy/σx and the intercept b = ȳ − m·x̄. Before fitting,
//! the paired sample passes a correlation gate: when |r| is below the
//! configured threshold the call returns [`SimpleRegressionOutcome::Rejected`]
//! instead of a line, carrying the r that failed the gate.

use crate::core::{RegressionOptions, RegressionOptionsBuilder};
use crate::inference::CorrelationTest;
use crate::solvers::traits::RegressionError;
use crate::stats::{correlation, mean, sample_std_dev};

/// A fitted line y = slope·x + intercept.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FittedSimple {
    /// Slope m.
    pub slope: f64,
    /// Intercept b.
    pub intercept: f64,
    /// Pearson correlation of the training data.
    pub correlation: f64,
    /// Number of paired observations.
    pub n_observations: usize,
}

impl FittedSimple {
    /// Predict y for a single x.
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Predict y for each x.
    pub fn predict_many(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.predict(x)).collect()
    }

    /// Coefficient of determination, r² for a single predictor.
    pub fn r_squared(&self) -> f64 {
        self.correlation * self.correlation
    }

    /// Significance test of the training correlation.
    pub fn correlation_test(&self) -> Result<CorrelationTest, RegressionError> {
        CorrelationTest::new(self.correlation, self.n_observations)
    }
}

/// Outcome of a simple linear regression.
///
/// A rejection is a policy decision, not a failure, so it is reported here
/// rather than through [`RegressionError`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SimpleRegressionOutcome {
    /// The data passed the correlation gate and a line was fitted.
    Fitted(FittedSimple),
    /// |correlation| fell below `threshold`; no line was fitted.
    Rejected { correlation: f64, threshold: f64 },
}

impl SimpleRegressionOutcome {
    /// Returns true if a line was fitted.
    pub fn is_fitted(&self) -> bool {
        matches!(self, Self::Fitted(_))
    }

    /// Returns true if the data was rejected.
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }

    /// The fitted line, if any.
    pub fn fitted(&self) -> Option<&FittedSimple> {
        match self {
            Self::Fitted(fit) => Some(fit),
            Self::Rejected { .. } => None,
        }
    }

    /// The correlation computed from the data, fitted or not.
    pub fn correlation(&self) -> f64 {
        match self {
            Self::Fitted(fit) => fit.correlation,
            Self::Rejected { correlation, .. } => *correlation,
        }
    }
}

/// Simple linear regression estimator with a configurable correlation gate.
///
/// # Example
///
/// ```rust
/// use linfit::solvers::{SimpleRegressionOutcome, SimpleRegressor};
///
/// let x = [1.0, 2.0, 3.0, 4.0];
/// let y = [3.0, 5.0, 7.0, 9.0];
///
/// let outcome = SimpleRegressor::builder().build().fit(&x, &y).unwrap();
/// if let SimpleRegressionOutcome::Fitted(line) = outcome {
///     assert!((line.slope - 2.0).abs() < 1e-12);
///     assert!((line.intercept - 1.0).abs() < 1e-12);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct SimpleRegressor {
    options: RegressionOptions,
}

impl SimpleRegressor {
    /// Create a new simple regressor with the given options.
    pub fn new(options: RegressionOptions) -> Self {
        Self { options }
    }

    /// Create a builder for configuring the regressor.
    pub fn builder() -> SimpleRegressorBuilder {
        SimpleRegressorBuilder::default()
    }

    /// The |r| threshold below which data is rejected.
    pub fn threshold(&self) -> f64 {
        self.options.min_abs_correlation
    }

    /// Fit a line to a paired sample.
    ///
    /// # Errors
    /// `DimensionMismatch` for unequal lengths, `InsufficientSampleSize` for
    /// fewer than two pairs, `UndefinedCorrelation` when either variable is
    /// constant, `InvalidOptions` for a threshold outside [0, 1].
    pub fn fit(&self, xs: &[f64], ys: &[f64]) -> Result<SimpleRegressionOutcome, RegressionError> {
        self.options.validate()?;

        if xs.len() != ys.len() {
            return Err(RegressionError::DimensionMismatch {
                x_len: xs.len(),
                y_len: ys.len(),
            });
        }
        if xs.len() < 2 {
            return Err(RegressionError::InsufficientSampleSize {
                needed: 2,
                got: xs.len(),
            });
        }

        let x_mean = mean(xs)?;
        let y_mean = mean(ys)?;
        let r = correlation(xs, ys, x_mean, y_mean)?;

        if !r.is_finite() {
            return Err(RegressionError::UndefinedCorrelation);
        }

        let threshold = self.threshold();
        if r.abs() < threshold {
            return Ok(SimpleRegressionOutcome::Rejected {
                correlation: r,
                threshold,
            });
        }

        let x_sd = sample_std_dev(xs, x_mean)?;
        let y_sd = sample_std_dev(ys, y_mean)?;
        let slope = r * (y_sd / x_sd);
        let intercept = y_mean - slope * x_mean;

        Ok(SimpleRegressionOutcome::Fitted(FittedSimple {
            slope,
            intercept,
            correlation: r,
            n_observations: xs.len(),
        }))
    }
}

/// Builder for `SimpleRegressor`.
#[derive(Debug, Clone, Default)]
pub struct SimpleRegressorBuilder {
    builder: RegressionOptionsBuilder,
}

impl SimpleRegressorBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum |r| required to fit a line.
    pub fn min_abs_correlation(mut self, threshold: f64) -> Self {
        self.builder = self.builder.min_abs_correlation(threshold);
        self
    }

    /// Build the simple regressor.
    pub fn build(self) -> SimpleRegressor {
        SimpleRegressor::new(self.builder.build_unchecked())
    }
}

/// Fit y = m·x + b with the default correlation gate of
/// [`DEFAULT_MIN_CORRELATION`](crate::core::DEFAULT_MIN_CORRELATION).
pub fn simple_linear_regression(
    xs: &[f64],
    ys: &[f64],
) -> Result<SimpleRegressionOutcome, RegressionError> {
    SimpleRegressor::default().fit(xs, ys)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::OptionsError;

    #[test]
    fn test_exact_line() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [2.0, 4.0, 6.0, 8.0];

        let outcome = simple_linear_regression(&x, &y).unwrap();
        let line = outcome.fitted().expect("perfectly linear data should fit");

        assert!((line.slope - 2.0).abs() < 1e-12);
        assert!(line.intercept.abs() < 1e-12);
        assert!((line.r_squared() - 1.0).abs() < 1e-12);
        assert!((line.predict(10.0) - 20.0).abs() < 1e-10);
    }

    #[test]
    fn test_weak_correlation_rejected() {
        let x = [1.0, 8.0, 10.0, 22.0];
        let y = [9.0, 1.0, 3.0, 11.0];

        let outcome = simple_linear_regression(&x, &y).unwrap();
        assert!(outcome.is_rejected());
        assert!(outcome.fitted().is_none());
        match outcome {
            SimpleRegressionOutcome::Rejected {
                correlation,
                threshold,
            } => {
                // 43 / sqrt(228.75 * 68)
                assert!((correlation - 0.344_772).abs() < 1e-5);
                assert_eq!(threshold, 0.5);
            }
            SimpleRegressionOutcome::Fitted(_) => panic!("expected rejection"),
        }
    }

    #[test]
    fn test_threshold_is_configurable() {
        let x = [1.0, 8.0, 10.0, 22.0];
        let y = [9.0, 1.0, 3.0, 11.0];

        let outcome = SimpleRegressor::builder()
            .min_abs_correlation(0.3)
            .build()
            .fit(&x, &y)
            .unwrap();
        let line = outcome.fitted().expect("gate lowered below r");

        // Least-squares slope: Sxy / Sxx
        assert!((line.slope - 43.0 / 228.75).abs() < 1e-12);
        assert!((line.intercept - (6.0 - 43.0 / 228.75 * 10.25)).abs() < 1e-12);
    }

    #[test]
    fn test_negative_slope() {
        let x = [0.0, 1.0, 2.0, 3.0, 4.0];
        let y = [10.0, 7.9, 6.1, 4.0, 2.0];

        let outcome = simple_linear_regression(&x, &y).unwrap();
        let line = outcome.fitted().unwrap();
        assert!(line.slope < 0.0);
        assert!(outcome.correlation() < -0.99);
    }

    #[test]
    fn test_constant_variable() {
        let result = simple_linear_regression(&[1.0, 2.0, 3.0], &[5.0, 5.0, 5.0]);
        assert!(matches!(result, Err(RegressionError::UndefinedCorrelation)));
    }

    #[test]
    fn test_invalid_threshold() {
        let result = SimpleRegressor::builder()
            .min_abs_correlation(2.0)
            .build()
            .fit(&[1.0, 2.0], &[1.0, 2.0]);
        assert!(matches!(
            result,
            Err(RegressionError::InvalidOptions(
                OptionsError::InvalidCorrelationThreshold(_)
            ))
        ));
    }

    #[test]
    fn test_input_validation() {
        assert!(matches!(
            simple_linear_regression(&[1.0, 2.0], &[1.0]),
            Err(RegressionError::DimensionMismatch { x_len: 2, y_len: 1 })
        ));
        assert!(matches!(
            simple_linear_regression(&[1.0], &[1.0]),
            Err(RegressionError::InsufficientSampleSize { needed: 2, got: 1 })
        ));
    }
}
