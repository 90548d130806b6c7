//! Descriptive statistics tests, cross-checked against statrs.

use approx::assert_relative_eq;
use linfit::stats::{correlation, covariance, mean, sample_std_dev, variance};
use linfit::RegressionError;
use statrs::statistics::Statistics;

#[test]
fn test_mean_reference() {
    assert_relative_eq!(mean(&[2.0, 4.0, 6.0]).unwrap(), 4.0);
}

#[test]
fn test_mean_matches_statrs() {
    let data = [1.0, 8.0, 10.0, 22.0, -3.5, 0.25];
    assert_relative_eq!(mean(&data).unwrap(), data.iter().mean(), epsilon = 1e-12);
}

#[test]
fn test_mean_empty_sample() {
    assert!(matches!(mean(&[]), Err(RegressionError::EmptyInput { .. })));
}

#[test]
fn test_sample_std_dev_reference() {
    let sample = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
    let m = mean(&sample).unwrap();
    assert_relative_eq!(m, 5.0);
    assert_relative_eq!(sample_std_dev(&sample, m).unwrap(), 2.1381, epsilon = 1e-4);
}

#[test]
fn test_sample_std_dev_matches_statrs() {
    let data = [9.0, 1.0, 3.0, 11.0];
    let m = mean(&data).unwrap();

    assert_relative_eq!(
        sample_std_dev(&data, m).unwrap(),
        data.iter().std_dev(),
        epsilon = 1e-12
    );
    assert_relative_eq!(variance(&data, m).unwrap(), data.iter().variance(), epsilon = 1e-12);
}

#[test]
fn test_sample_std_dev_uses_supplied_mean() {
    // The mean is taken as given, not recomputed
    let data = [1.0, 3.0];
    assert_relative_eq!(sample_std_dev(&data, 2.0).unwrap(), 2.0_f64.sqrt());
    assert_relative_eq!(sample_std_dev(&data, 0.0).unwrap(), 10.0_f64.sqrt());
}

#[test]
fn test_sample_std_dev_needs_two_observations() {
    assert!(matches!(
        sample_std_dev(&[4.0], 4.0),
        Err(RegressionError::InsufficientSampleSize { needed: 2, got: 1 })
    ));
    assert!(matches!(
        sample_std_dev(&[], 0.0),
        Err(RegressionError::InsufficientSampleSize { needed: 2, got: 0 })
    ));
}

#[test]
fn test_correlation_perfectly_linear() {
    let x = [1.0, 2.0, 3.0, 4.0];
    let y = [2.0, 4.0, 6.0, 8.0];
    let r = correlation(&x, &y, mean(&x).unwrap(), mean(&y).unwrap()).unwrap();
    assert_relative_eq!(r, 1.0, epsilon = 1e-9);
}

#[test]
fn test_correlation_matches_covariance_identity() {
    let x = [1.0, 8.0, 10.0, 22.0];
    let y = [9.0, 1.0, 3.0, 11.0];
    let (mx, my) = (mean(&x).unwrap(), mean(&y).unwrap());

    let r = correlation(&x, &y, mx, my).unwrap();
    let cov = covariance(&x, &y, mx, my).unwrap();
    let expected = cov / (sample_std_dev(&x, mx).unwrap() * sample_std_dev(&y, my).unwrap());

    assert_relative_eq!(r, expected, epsilon = 1e-12);
    assert_relative_eq!(cov, x.iter().covariance(y.iter()), epsilon = 1e-12);
    assert!(r.abs() <= 1.0);
}

#[test]
fn test_correlation_zero_variance_not_finite() {
    let x = [2.0, 2.0, 2.0, 2.0];
    let y = [1.0, 5.0, 2.0, 8.0];
    let r = correlation(&x, &y, 2.0, mean(&y).unwrap()).unwrap();
    assert!(!r.is_finite());
}

#[test]
fn test_correlation_dimension_mismatch() {
    let result = correlation(&[1.0, 2.0], &[1.0, 2.0, 3.0], 1.5, 2.0);
    assert!(matches!(
        result,
        Err(RegressionError::DimensionMismatch { x_len: 2, y_len: 3 })
    ));
}
