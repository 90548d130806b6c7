//! Regression options and configuration.

use thiserror::Error;

/// Minimum |r| a paired sample must reach before simple linear regression
/// trusts it enough to fit a line.
///
/// This is a quality gate, not a mathematical requirement: a correlation of
/// 0.3 still has a well-defined least-squares line, it is just a poor
/// predictor. Override it with [`RegressionOptionsBuilder::min_abs_correlation`].
pub const DEFAULT_MIN_CORRELATION: f64 = 0.5;

/// Configuration options for the estimators in this crate.
#[derive(Debug, Clone)]
pub struct RegressionOptions {
    /// Whether the estimator prepends a constant-1 column (default: false).
    ///
    /// Leave this off when the design matrix already carries its own
    /// constant column.
    pub with_intercept: bool,
    /// Rejection threshold for simple linear regression, in [0, 1].
    pub min_abs_correlation: f64,
    /// Gradient descent step size (α > 0).
    pub learning_rate: f64,
    /// Number of gradient descent updates.
    pub iterations: usize,
    /// Relative determinant below which X'X is treated as singular.
    pub singular_tolerance: f64,
}

impl Default for RegressionOptions {
    fn default() -> Self {
        Self {
            with_intercept: false,
            min_abs_correlation: DEFAULT_MIN_CORRELATION,
            learning_rate: 0.01,
            iterations: 1000,
            singular_tolerance: 1e-12,
        }
    }
}

/// Errors that can occur when validating regression options.
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("learning_rate must be positive and finite, got {0}")]
    InvalidLearningRate(f64),
    #[error("min_abs_correlation must be in [0, 1], got {0}")]
    InvalidCorrelationThreshold(f64),
    #[error("singular_tolerance must be non-negative and finite, got {0}")]
    InvalidTolerance(f64),
}

impl RegressionOptions {
    /// Create a new builder for regression options.
    pub fn builder() -> RegressionOptionsBuilder {
        RegressionOptionsBuilder::default()
    }

    /// Options for gradient descent with the given step size and iteration count.
    pub fn gradient_descent(learning_rate: f64, iterations: usize) -> Self {
        Self {
            learning_rate,
            iterations,
            ..Default::default()
        }
    }

    /// Validate the options and return an error if invalid.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if !(self.learning_rate > 0.0 && self.learning_rate.is_finite()) {
            return Err(OptionsError::InvalidLearningRate(self.learning_rate));
        }
        if !(0.0..=1.0).contains(&self.min_abs_correlation) {
            return Err(OptionsError::InvalidCorrelationThreshold(
                self.min_abs_correlation,
            ));
        }
        if !(self.singular_tolerance >= 0.0 && self.singular_tolerance.is_finite()) {
            return Err(OptionsError::InvalidTolerance(self.singular_tolerance));
        }
        Ok(())
    }
}

/// Builder for `RegressionOptions`.
#[derive(Debug, Clone, Default)]
pub struct RegressionOptionsBuilder {
    options: RegressionOptions,
}

impl RegressionOptionsBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether the estimator adds an intercept column.
    pub fn with_intercept(mut self, include: bool) -> Self {
        self.options.with_intercept = include;
        self
    }

    /// Set the correlation threshold below which simple regression rejects the data.
    pub fn min_abs_correlation(mut self, threshold: f64) -> Self {
        self.options.min_abs_correlation = threshold;
        self
    }

    /// Set the gradient descent learning rate.
    pub fn learning_rate(mut self, rate: f64) -> Self {
        self.options.learning_rate = rate;
        self
    }

    /// Set the number of gradient descent iterations.
    pub fn iterations(mut self, iterations: usize) -> Self {
        self.options.iterations = iterations;
        self
    }

    /// Set the singularity tolerance used by OLS.
    pub fn singular_tolerance(mut self, tol: f64) -> Self {
        self.options.singular_tolerance = tol;
        self
    }

    /// Build and validate the options.
    pub fn build(self) -> Result<RegressionOptions, OptionsError> {
        self.options.validate()?;
        Ok(self.options)
    }

    /// Build the options without validation.
    pub fn build_unchecked(self) -> RegressionOptions {
        self.options
    }
}
