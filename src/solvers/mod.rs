//! Regression solvers implementing the three estimation methods.

mod traits;
mod simple;
mod ols;
mod gradient_descent;

pub use traits::{FittedRegressor, Regressor, RegressionError};
pub use simple::{
    simple_linear_regression, FittedSimple, SimpleRegressionOutcome, SimpleRegressor,
    SimpleRegressorBuilder,
};
pub use ols::{ordinary_least_squares, FittedOls, NormalEquationSolution, OlsRegressor, OlsRegressorBuilder};
pub use gradient_descent::{
    gradient_descent, mse_cost, FittedGradientDescent, GradientDescentRegressor,
    GradientDescentRegressorBuilder,
};
