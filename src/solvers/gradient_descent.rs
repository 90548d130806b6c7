//! Batch gradient descent on the least-squares cost.
//!
//! Minimizes J(θ) = (1/2n)·Σ(Xθ − y)² starting from θ = 0. Each of the
//! `iterations` steps evaluates the full-batch gradient
//! ∇J(θ) = Xᵗ(Xθ − y)/n and moves θ ← θ − α·∇J(θ).
//!
//! There is no convergence test, early stop or loss history: the number of
//! updates is exactly the configured iteration count. Convergence requires
//! α < 2/λ_max(XᵗX/n); larger steps diverge.

use crate::core::{linear_predictor, RegressionOptions, RegressionOptionsBuilder, RegressionResult};
use crate::linalg::{LinearAlgebra, LuBackend};
use crate::solvers::traits::{FittedRegressor, RegressionError, Regressor};
use crate::utils::{validate_design, with_intercept_column};
use faer::{Col, Mat};

/// Gradient descent regression estimator.
///
/// # Example
///
/// ```rust
/// use linfit::solvers::{FittedRegressor, GradientDescentRegressor, Regressor};
/// use faer::{Col, Mat};
///
/// let x = Mat::from_fn(5, 1, |i, _| i as f64);
/// let y = Col::from_fn(5, |i| 2.0 + 3.0 * i as f64);
///
/// let fitted = GradientDescentRegressor::builder()
///     .with_intercept(true)
///     .learning_rate(0.1)
///     .iterations(5000)
///     .build()
///     .fit(&x, &y)
///     .unwrap();
///
/// assert!((fitted.coefficients()[0] - 3.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone)]
pub struct GradientDescentRegressor<B: LinearAlgebra = LuBackend> {
    options: RegressionOptions,
    backend: B,
}

impl GradientDescentRegressor {
    /// Create a new gradient descent regressor with the given options.
    pub fn new(options: RegressionOptions) -> Self {
        Self {
            options,
            backend: LuBackend::default(),
        }
    }

    /// Create a builder for configuring the regressor.
    pub fn builder() -> GradientDescentRegressorBuilder {
        GradientDescentRegressorBuilder::default()
    }
}

impl<B: LinearAlgebra> GradientDescentRegressor<B> {
    /// Create a regressor that runs its matrix algebra on `backend`.
    pub fn with_backend(options: RegressionOptions, backend: B) -> Self {
        Self { options, backend }
    }

    /// Run the configured number of updates on `x` exactly as given.
    ///
    /// No intercept column is added here, whatever `with_intercept` says.
    pub fn optimize(&self, x: &Mat<f64>, y: &Col<f64>) -> Result<Col<f64>, RegressionError> {
        self.options.validate()?;
        validate_design(x, y)?;

        let n = x.nrows() as f64;
        let alpha = self.options.learning_rate;
        let xt = self.backend.transpose(x);
        let mut theta = Col::zeros(x.ncols());

        for _ in 0..self.options.iterations {
            let prediction = self.backend.multiply_vector(x, &theta)?;
            let error = &prediction - y;
            let gradient = self.backend.multiply_vector(&xt, &error)?;

            for j in 0..theta.nrows() {
                theta[j] -= alpha * gradient[j] / n;
            }
        }

        Ok(theta)
    }
}

impl<B: LinearAlgebra> Regressor for GradientDescentRegressor<B> {
    type Fitted = FittedGradientDescent;

    fn fit(&self, x: &Mat<f64>, y: &Col<f64>) -> Result<Self::Fitted, RegressionError> {
        let (design, theta) = if self.options.with_intercept {
            let x_aug = with_intercept_column(x);
            let theta = self.optimize(&x_aug, y)?;
            (x_aug, theta)
        } else {
            let theta = self.optimize(x, y)?;
            (x.clone(), theta)
        };

        let cost = mse_cost(&design, y, &theta)?;

        let result = if self.options.with_intercept {
            let coefficients = Col::from_fn(x.ncols(), |j| theta[j + 1]);
            RegressionResult::from_coefficients(x, y, coefficients, Some(theta[0]))
        } else {
            RegressionResult::from_coefficients(x, y, theta, None)
        };

        Ok(FittedGradientDescent {
            result,
            iterations: self.options.iterations,
            learning_rate: self.options.learning_rate,
            cost,
        })
    }
}

/// A model fitted by gradient descent.
#[derive(Debug, Clone)]
pub struct FittedGradientDescent {
    result: RegressionResult,
    iterations: usize,
    learning_rate: f64,
    cost: f64,
}

impl FittedGradientDescent {
    /// Number of updates performed.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Step size used.
    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    /// J(θ) at the returned parameters.
    pub fn cost(&self) -> f64 {
        self.cost
    }
}

impl FittedRegressor for FittedGradientDescent {
    fn predict(&self, x: &Mat<f64>) -> Col<f64> {
        linear_predictor(x, &self.result.coefficients, self.result.intercept)
    }

    fn result(&self) -> &RegressionResult {
        &self.result
    }
}

/// Builder for `GradientDescentRegressor`.
#[derive(Debug, Clone, Default)]
pub struct GradientDescentRegressorBuilder {
    builder: RegressionOptionsBuilder,
}

impl GradientDescentRegressorBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to prepend an intercept column.
    pub fn with_intercept(mut self, include: bool) -> Self {
        self.builder = self.builder.with_intercept(include);
        self
    }

    /// Set the step size α.
    pub fn learning_rate(mut self, rate: f64) -> Self {
        self.builder = self.builder.learning_rate(rate);
        self
    }

    /// Set the number of updates.
    pub fn iterations(mut self, iterations: usize) -> Self {
        self.builder = self.builder.iterations(iterations);
        self
    }

    /// Build the regressor. Options are validated when fitting.
    pub fn build(self) -> GradientDescentRegressor {
        GradientDescentRegressor::new(self.builder.build_unchecked())
    }

    /// Build the regressor on a custom backend.
    pub fn build_with_backend<B: LinearAlgebra>(self, backend: B) -> GradientDescentRegressor<B> {
        GradientDescentRegressor::with_backend(self.builder.build_unchecked(), backend)
    }
}

/// Least-squares cost J(θ) = (1/2n)·Σ(Xθ − y)².
pub fn mse_cost(x: &Mat<f64>, y: &Col<f64>, theta: &Col<f64>) -> Result<f64, RegressionError> {
    validate_design(x, y)?;
    if theta.nrows() != x.ncols() {
        return Err(RegressionError::IncompatibleShapes {
            left_rows: x.nrows(),
            left_cols: x.ncols(),
            right_rows: theta.nrows(),
            right_cols: 1,
        });
    }

    let prediction = linear_predictor(x, theta, None);
    let ss: f64 = (&prediction - y).iter().map(|r| r * r).sum();
    Ok(ss / (2.0 * y.nrows() as f64))
}

/// Run `iterations` batch gradient descent updates from θ = 0 on `x`
/// exactly as given.
///
/// `iterations == 0` returns the zero vector.
///
/// # Errors
/// `InvalidOptions(InvalidLearningRate)` when `learning_rate` is not a
/// positive finite number, `DimensionMismatch` when `x` and `y` disagree,
/// `EmptyInput` for an empty design matrix. Inputs are validated even when
/// no update will run.
pub fn gradient_descent(
    x: &Mat<f64>,
    y: &Col<f64>,
    learning_rate: f64,
    iterations: usize,
) -> Result<Col<f64>, RegressionError> {
    GradientDescentRegressor::new(RegressionOptions::gradient_descent(learning_rate, iterations))
        .optimize(x, y)
}
