//! Descriptive statistics and linear regression from first principles.
//!
//! Three ways to fit a linear model are provided:
//!
//! - **Simple linear regression** for one predictor, from the correlation and
//!   standard deviations, gated on a minimum |r|.
//! - **Ordinary least squares** for many predictors, via the normal equations
//!   β = (XᵗX)⁻¹Xᵗy.
//! - **Batch gradient descent** on the least-squares cost, for a fixed number
//!   of iterations.
//!
//! Every function is pure and returns a `Result`; nothing prints.
//!
//! # Example
//!
//! ```rust
//! use linfit::prelude::*;
//!
//! let x = design_matrix_from_rows(&[[1.0, -1.0], [1.0, 1.0], [1.0, 2.0]]).unwrap();
//! let y = target_from_slice(&[-2.0, 0.0, 3.0]);
//!
//! let beta = ordinary_least_squares(&x, &y).unwrap();
//! assert!((beta[1] - 22.0 / 14.0).abs() < 1e-12);
//!
//! let theta = gradient_descent(&x, &y, 0.1, 2000).unwrap();
//! assert!((theta[1] - beta[1]).abs() < 1e-6);
//! ```

pub mod core;
pub mod inference;
pub mod linalg;
pub mod solvers;
pub mod stats;
pub mod utils;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::core::{
        OptionsError, RegressionOptions, RegressionOptionsBuilder, RegressionResult,
        DEFAULT_MIN_CORRELATION,
    };
    pub use crate::inference::CorrelationTest;
    pub use crate::linalg::{LinearAlgebra, LuBackend};
    pub use crate::solvers::{
        gradient_descent, ordinary_least_squares, simple_linear_regression, FittedGradientDescent,
        FittedOls, FittedRegressor, FittedSimple, GradientDescentRegressor, OlsRegressor,
        RegressionError, Regressor, SimpleRegressionOutcome, SimpleRegressor,
    };
    pub use crate::stats::{correlation, mean, sample_std_dev};
    pub use crate::utils::{design_matrix_from_rows, target_from_slice, with_intercept_column};
}

pub use crate::core::{RegressionOptions, DEFAULT_MIN_CORRELATION};
pub use crate::solvers::{
    gradient_descent, ordinary_least_squares, simple_linear_regression, FittedRegressor,
    RegressionError, Regressor, SimpleRegressionOutcome,
};
pub use crate::stats::{correlation, mean, sample_std_dev};
