//! Mean, sample variance/standard deviation, covariance and Pearson correlation.
//!
//! The dispersion functions take the mean as an argument instead of
//! recomputing it, so a caller that needs several statistics of the same
//! sample makes one pass per statistic.

use crate::solvers::RegressionError;

/// Arithmetic mean of a sample.
///
/// # Errors
/// `EmptyInput` when the sample has no observations.
pub fn mean(sample: &[f64]) -> Result<f64, RegressionError> {
    if sample.is_empty() {
        return Err(RegressionError::EmptyInput { field: "sample" });
    }
    Ok(sample.iter().sum::<f64>() / sample.len() as f64)
}

/// Unbiased sample variance, Σ(xᵢ − mean)² / (n − 1).
///
/// `mean` must be the sample's own mean.
///
/// # Errors
/// `InsufficientSampleSize` when n < 2.
pub fn variance(sample: &[f64], mean: f64) -> Result<f64, RegressionError> {
    let n = sample.len();
    if n < 2 {
        return Err(RegressionError::InsufficientSampleSize { needed: 2, got: n });
    }
    let ss: f64 = sample.iter().map(|&x| (x - mean).powi(2)).sum();
    Ok(ss / (n - 1) as f64)
}

/// Sample standard deviation, the square root of [`variance`].
///
/// # Errors
/// `InsufficientSampleSize` when n < 2.
pub fn sample_std_dev(sample: &[f64], mean: f64) -> Result<f64, RegressionError> {
    variance(sample, mean).map(f64::sqrt)
}

/// Unbiased sample covariance of a paired sample.
///
/// # Errors
/// `DimensionMismatch` when the lengths differ, `InsufficientSampleSize`
/// when n < 2.
pub fn covariance(xs: &[f64], ys: &[f64], x_mean: f64, y_mean: f64) -> Result<f64, RegressionError> {
    let n = check_paired(xs, ys)?;
    let cross: f64 = xs
        .iter()
        .zip(ys)
        .map(|(&x, &y)| (x - x_mean) * (y - y_mean))
        .sum();
    Ok(cross / (n - 1) as f64)
}

/// Pearson correlation coefficient of a paired sample.
///
/// If either variable has zero variance the denominator is zero and the
/// result is NaN. That is returned as `Ok`; callers must check
/// `is_finite()` before using it.
///
/// # Errors
/// `DimensionMismatch` when the lengths differ, `InsufficientSampleSize`
/// when n < 2.
pub fn correlation(xs: &[f64], ys: &[f64], x_mean: f64, y_mean: f64) -> Result<f64, RegressionError> {
    check_paired(xs, ys)?;

    let mut sxy = 0.0;
    let mut sxx = 0.0;
    let mut syy = 0.0;
    for (&x, &y) in xs.iter().zip(ys) {
        let dx = x - x_mean;
        let dy = y - y_mean;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }

    let denom = (sxx * syy).sqrt();
    if denom == 0.0 {
        return Ok(f64::NAN);
    }
    Ok(sxy / denom)
}

fn check_paired(xs: &[f64], ys: &[f64]) -> Result<usize, RegressionError> {
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
    Ok(xs.len())
}
