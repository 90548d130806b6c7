//! Ordinary Least Squares via the normal equations.

use crate::core::{linear_predictor, RegressionOptions, RegressionOptionsBuilder, RegressionResult};
use crate::linalg::{hadamard_bound, unit_diagonal_scaling, LinearAlgebra, LuBackend};
use crate::solvers::traits::{FittedRegressor, RegressionError, Regressor};
use crate::utils::{validate_design, with_intercept_column};
use faer::{Col, Mat};

/// Ordinary Least Squares regression estimator.
///
/// Solves β = (XᵗX)⁻¹Xᵗy explicitly: form XᵗX, check its determinant, invert
/// it, build the pseudo-inverse (XᵗX)⁻¹Xᵗ and apply it to y.
///
/// XᵗX counts as singular when, after rescaling it to unit diagonal
/// (S = D⁻¹XᵗXD⁻¹, D = diag(√(XᵗX)_jj)), `|det(S)| <= singular_tolerance · H`
/// where H is the product of the column norms of S (Hadamard's bound on
/// |det|). That happens for collinear predictors, zero columns and whenever
/// p > n. Scaling the columns of X leaves the verdict unchanged; the reported
/// determinant is always the raw det(XᵗX), which may be 0 or ±∞ at extreme
/// scales.
///
/// Forming XᵗX squares the condition number of X, so this solver loses
/// accuracy on ill-conditioned designs well before it reports them singular.
///
/// # Example
///
/// ```rust
/// use linfit::solvers::{FittedRegressor, OlsRegressor, Regressor};
/// use faer::{Col, Mat};
///
/// let x = Mat::from_fn(5, 1, |i, _| i as f64);
/// let y = Col::from_fn(5, |i| 2.0 + 3.0 * i as f64);
///
/// let fitted = OlsRegressor::builder()
///     .with_intercept(true)
///     .build()
///     .fit(&x, &y)
///     .unwrap();
///
/// assert!((fitted.coefficients()[0] - 3.0).abs() < 1e-10);
/// assert!((fitted.intercept().unwrap() - 2.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct OlsRegressor<B: LinearAlgebra = LuBackend> {
    options: RegressionOptions,
    backend: B,
}

impl OlsRegressor {
    /// Create a new OLS regressor with the given options.
    pub fn new(options: RegressionOptions) -> Self {
        Self {
            options,
            backend: LuBackend::default(),
        }
    }

    /// Create a builder for configuring the regressor.
    pub fn builder() -> OlsRegressorBuilder {
        OlsRegressorBuilder::default()
    }
}

impl Default for OlsRegressor {
    fn default() -> Self {
        Self::new(RegressionOptions::default())
    }
}

/// β and the determinant of XᵗX it was computed from.
#[derive(Debug, Clone)]
pub struct NormalEquationSolution {
    /// One coefficient per column of the solved design matrix.
    pub coefficients: Col<f64>,
    /// det(XᵗX).
    pub determinant: f64,
}

impl<B: LinearAlgebra> OlsRegressor<B> {
    /// Create a regressor that runs its matrix algebra on `backend`.
    pub fn with_backend(options: RegressionOptions, backend: B) -> Self {
        Self { options, backend }
    }

    /// Solve the normal equations for `x` exactly as given.
    ///
    /// No intercept column is added here, whatever `with_intercept` says.
    pub fn solve(&self, x: &Mat<f64>, y: &Col<f64>) -> Result<NormalEquationSolution, RegressionError> {
        validate_design(x, y)?;

        let xt = self.backend.transpose(x);
        let xtx = self.backend.multiply(&xt, x)?;

        let determinant = self.backend.determinant(&xtx)?;
        if self.is_numerically_singular(&xtx)? {
            return Err(RegressionError::SingularMatrix { determinant });
        }

        let xtx_inv = self.backend.invert(&xtx)?;
        let pseudo_inverse = self.backend.multiply(&xtx_inv, &xt)?;
        let coefficients = self.backend.multiply_vector(&pseudo_inverse, y)?;

        if coefficients.iter().any(|c| !c.is_finite()) {
            return Err(RegressionError::NumericalError(
                "normal equations produced non-finite coefficients".to_string(),
            ));
        }

        Ok(NormalEquationSolution {
            coefficients,
            determinant,
        })
    }

    fn is_numerically_singular(&self, xtx: &Mat<f64>) -> Result<bool, RegressionError> {
        let Some(scaled) = unit_diagonal_scaling(xtx) else {
            return Ok(true);
        };
        let det = self.backend.determinant(&scaled)?;
        Ok(!(det.abs() > self.options.singular_tolerance * hadamard_bound(&scaled)))
    }
}

impl<B: LinearAlgebra> Regressor for OlsRegressor<B> {
    type Fitted = FittedOls;

    fn fit(&self, x: &Mat<f64>, y: &Col<f64>) -> Result<Self::Fitted, RegressionError> {
        self.options.validate()?;
        validate_design(x, y)?;

        if self.options.with_intercept {
            let x_aug = with_intercept_column(x);
            let solution = self.solve(&x_aug, y)?;

            let n_features = x.ncols();
            let intercept = solution.coefficients[0];
            let coefficients = Col::from_fn(n_features, |j| solution.coefficients[j + 1]);

            Ok(FittedOls {
                result: RegressionResult::from_coefficients(x, y, coefficients, Some(intercept)),
                determinant: solution.determinant,
            })
        } else {
            let solution = self.solve(x, y)?;

            Ok(FittedOls {
                result: RegressionResult::from_coefficients(x, y, solution.coefficients, None),
                determinant: solution.determinant,
            })
        }
    }
}

/// A fitted OLS regression model.
#[derive(Debug, Clone)]
pub struct FittedOls {
    result: RegressionResult,
    determinant: f64,
}

impl FittedOls {
    /// det(XᵗX) of the (possibly intercept-augmented) training design.
    pub fn determinant(&self) -> f64 {
        self.determinant
    }

    /// Training residuals.
    pub fn residuals(&self) -> &Col<f64> {
        &self.result.residuals
    }

    /// Predictions on the training data.
    pub fn fitted_values(&self) -> &Col<f64> {
        &self.result.fitted_values
    }
}

impl FittedRegressor for FittedOls {
    fn predict(&self, x: &Mat<f64>) -> Col<f64> {
        linear_predictor(x, &self.result.coefficients, self.result.intercept)
    }

    fn result(&self) -> &RegressionResult {
        &self.result
    }
}

/// Builder for `OlsRegressor`.
#[derive(Debug, Clone, Default)]
pub struct OlsRegressorBuilder {
    builder: RegressionOptionsBuilder,
}

impl OlsRegressorBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to prepend an intercept column.
    pub fn with_intercept(mut self, include: bool) -> Self {
        self.builder = self.builder.with_intercept(include);
        self
    }

    /// Set the relative determinant tolerance for singularity.
    pub fn singular_tolerance(mut self, tol: f64) -> Self {
        self.builder = self.builder.singular_tolerance(tol);
        self
    }

    /// Build the OLS regressor on the default backend.
    pub fn build(self) -> OlsRegressor {
        OlsRegressor::new(self.builder.build_unchecked())
    }

    /// Build the OLS regressor on a custom backend.
    pub fn build_with_backend<B: LinearAlgebra>(self, backend: B) -> OlsRegressor<B> {
        OlsRegressor::with_backend(self.builder.build_unchecked(), backend)
    }
}

/// Solve β = (XᵗX)⁻¹Xᵗy for `x` exactly as given.
///
/// Include a constant-1 column in `x` to fit an intercept; its coefficient
/// is the intercept.
///
/// # Errors
/// `EmptyInput`, `DimensionMismatch`, or `SingularMatrix` when XᵗX is not
/// invertible.
pub fn ordinary_least_squares(x: &Mat<f64>, y: &Col<f64>) -> Result<Col<f64>, RegressionError> {
    OlsRegressor::new(RegressionOptions::default())
        .solve(x, y)
        .map(|solution| solution.coefficients)
}
