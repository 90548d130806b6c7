//! Significance test for a Pearson correlation coefficient.

use crate::solvers::RegressionError;
use statrs::distribution::{ContinuousCDF, StudentsT};

/// t-test of H₀: ρ = 0 for a sample correlation.
///
/// t = r·√((n − 2) / (1 − r²)) follows Student's t with n − 2 degrees of
/// freedom under the null.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorrelationTest {
    /// Sample correlation coefficient.
    pub correlation: f64,
    /// t-statistic.
    pub t_statistic: f64,
    /// Degrees of freedom (n − 2).
    pub df: f64,
    /// Two-sided p-value.
    pub p_value: f64,
}

impl CorrelationTest {
    /// Test a correlation `r` computed from `n` paired observations.
    ///
    /// # Errors
    /// `InsufficientSampleSize` when n < 3, `UndefinedCorrelation` when `r`
    /// is not finite.
    pub fn new(r: f64, n: usize) -> Result<Self, RegressionError> {
        if n < 3 {
            return Err(RegressionError::InsufficientSampleSize { needed: 3, got: n });
        }
        if !r.is_finite() {
            return Err(RegressionError::UndefinedCorrelation);
        }

        let df = (n - 2) as f64;
        let one_minus_r2 = 1.0 - r * r;

        // |r| = 1: the line explains everything
        if one_minus_r2 <= 0.0 {
            return Ok(Self {
                correlation: r,
                t_statistic: f64::INFINITY.copysign(r),
                df,
                p_value: 0.0,
            });
        }

        let t_statistic = r * (df / one_minus_r2).sqrt();
        let t_dist = StudentsT::new(0.0, 1.0, df)
            .map_err(|e| RegressionError::NumericalError(e.to_string()))?;
        let p_value = 2.0 * (1.0 - t_dist.cdf(t_statistic.abs()));

        Ok(Self {
            correlation: r,
            t_statistic,
            df,
            p_value,
        })
    }

    /// Whether H₀ is rejected at significance level `alpha`.
    pub fn is_significant(&self, alpha: f64) -> bool {
        self.p_value < alpha
    }
}
