//! # Linear Regression Walkthrough
//!
//! Computes descriptive statistics for a small paired sample, then fits
//! linear models three ways:
//!
//! - Simple linear regression (rejected here: the sample is weakly correlated)
//! - Ordinary least squares via the normal equations
//! - Batch gradient descent
//!
//! Run with: `cargo run --example linear_regression`

use linfit::prelude::*;
use linfit::solvers::mse_cost;

fn main() {
    println!("=== Linear Regression Walkthrough ===\n");

    if let Err(e) = descriptive_statistics() {
        eprintln!("descriptive statistics failed: {e}");
    }
    if let Err(e) = simple_regression() {
        eprintln!("simple regression failed: {e}");
    }
    if let Err(e) = least_squares() {
        eprintln!("ordinary least squares failed: {e}");
    }
    if let Err(e) = descent() {
        eprintln!("gradient descent failed: {e}");
    }
}

const X_DATA: [f64; 4] = [1.0, 8.0, 10.0, 22.0];
const Y_DATA: [f64; 4] = [9.0, 1.0, 3.0, 11.0];

fn descriptive_statistics() -> Result<(), RegressionError> {
    println!("--- Descriptive Statistics ---\n");

    let x_mean = mean(&X_DATA)?;
    let y_mean = mean(&Y_DATA)?;
    println!("x mean: {x_mean:.4}");
    println!("y mean: {y_mean:.4}");

    println!("x sample standard deviation: {:.4}", sample_std_dev(&X_DATA, x_mean)?);
    println!("y sample standard deviation: {:.4}", sample_std_dev(&Y_DATA, y_mean)?);

    let r = correlation(&X_DATA, &Y_DATA, x_mean, y_mean)?;
    println!("Correlation coefficient: {r:.4}");
    println!();
    Ok(())
}

fn simple_regression() -> Result<(), RegressionError> {
    println!("--- Simple Linear Regression ---\n");

    match simple_linear_regression(&X_DATA, &Y_DATA)? {
        SimpleRegressionOutcome::Fitted(line) => {
            println!("y = {:.4}x + {:.4}", line.slope, line.intercept);
            println!("R-squared: {:.4}", line.r_squared());
        }
        SimpleRegressionOutcome::Rejected {
            correlation,
            threshold,
        } => {
            println!(
                "Linear regression cannot be used to predict values from this data \
                 (|r| = {:.4} < {threshold})",
                correlation.abs()
            );
        }
    }
    println!();
    Ok(())
}

fn least_squares() -> Result<(), RegressionError> {
    println!("--- Ordinary Least Squares ---\n");

    let x = design_matrix_from_rows(&[[1.0, -1.0], [1.0, 1.0], [1.0, 2.0]])?;
    let y = target_from_slice(&[-2.0, 0.0, 3.0]);

    let beta = ordinary_least_squares(&x, &y)?;
    println!("Intercept: {:.4}", beta[0]);
    println!("Slope: {:.4}", beta[1]);

    // Duplicated predictor: X'X has no inverse
    let collinear = design_matrix_from_rows(&[[1.0, 2.0, 2.0], [1.0, 3.0, 3.0], [1.0, 5.0, 5.0]])?;
    match ordinary_least_squares(&collinear, &y) {
        Ok(beta) => println!("Unexpected fit: {beta:?}"),
        Err(e) => println!("Collinear design rejected: {e}"),
    }
    println!();
    Ok(())
}

fn descent() -> Result<(), RegressionError> {
    println!("--- Gradient Descent ---\n");

    let x = design_matrix_from_rows(&[
        [1.0, 55.0],
        [1.0, 60.0],
        [1.0, 65.0],
        [1.0, 70.0],
        [1.0, 75.0],
        [1.0, 80.0],
    ])?;
    let y = target_from_slice(&[316.0, 292.0, 268.0, 246.0, 227.0, 207.0]);

    let theta = gradient_descent(&x, &y, 0.0001, 16)?;
    println!("After 16 steps (alpha = 0.0001):");
    println!("  theta: [{:.4}, {:.4}]", theta[0], theta[1]);
    println!("  cost:  {:.4}", mse_cost(&x, &y, &theta)?);

    let beta = ordinary_least_squares(&x, &y)?;
    println!("Closed-form optimum for comparison:");
    println!("  beta:  [{:.4}, {:.4}]", beta[0], beta[1]);
    println!("  cost:  {:.4}", mse_cost(&x, &y, &beta)?);
    println!();
    Ok(())
}
