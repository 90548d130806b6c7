//! Common test utilities and data generators.

#![allow(dead_code)]

use faer::{Col, Mat};

/// Generate an exactly linear dataset y = X·β* with a leading constant column.
///
/// Returns (X, y, β*) where X is n × (n_features + 1) and β*[0] is the
/// intercept.
pub fn generate_linear_data(
    n_samples: usize,
    n_features: usize,
    intercept: f64,
    seed: u64,
) -> (Mat<f64>, Col<f64>, Col<f64>) {
    // Simple deterministic "random" for reproducibility
    let mut rng_state = seed;
    let next_rand = |state: &mut u64| -> f64 {
        *state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((*state >> 32) as f64) / (u32::MAX as f64) * 2.0 - 1.0
    };

    let p = n_features + 1;
    let mut x = Mat::zeros(n_samples, p);
    let mut y = Col::zeros(n_samples);
    let mut true_coefficients = Col::zeros(p);

    true_coefficients[0] = intercept;
    for j in 1..p {
        true_coefficients[j] = j as f64;
    }

    for i in 0..n_samples {
        x[(i, 0)] = 1.0;
        let mut yi = intercept;
        for j in 1..p {
            x[(i, j)] = next_rand(&mut rng_state);
            yi += x[(i, j)] * true_coefficients[j];
        }
        y[i] = yi;
    }

    (x, y, true_coefficients)
}

/// Design with a constant column and one predictor, y = 1.5 - 0.5·x exactly.
pub fn two_parameter_design() -> (Mat<f64>, Col<f64>, Col<f64>) {
    let xs = [0.0, 0.5, 1.0, 1.5, 2.0, 2.5];
    let beta = Col::from_fn(2, |j| [1.5, -0.5][j]);

    let x = Mat::from_fn(xs.len(), 2, |i, j| if j == 0 { 1.0 } else { xs[i] });
    let y = Col::from_fn(xs.len(), |i| beta[0] + beta[1] * xs[i]);

    (x, y, beta)
}

/// Generate data whose second and third columns are identical.
pub fn generate_duplicate_column_data(n_samples: usize) -> (Mat<f64>, Col<f64>) {
    let mut x = Mat::zeros(n_samples, 3);
    let mut y = Col::zeros(n_samples);

    for i in 0..n_samples {
        x[(i, 0)] = 1.0;
        x[(i, 1)] = i as f64;
        x[(i, 2)] = i as f64;
        y[i] = 1.0 + 2.0 * i as f64;
    }

    (x, y)
}

/// Generate data with perfectly collinear predictors (x2 = 2·x1).
pub fn generate_collinear_data(n_samples: usize) -> (Mat<f64>, Col<f64>) {
    let mut x = Mat::zeros(n_samples, 2);
    let mut y = Col::zeros(n_samples);

    for i in 0..n_samples {
        x[(i, 0)] = i as f64;
        x[(i, 1)] = 2.0 * i as f64;
        y[i] = 1.0 + 2.0 * x[(i, 0)];
    }

    (x, y)
}

/// Helper to check approximate equality.
pub fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() < tol
}
