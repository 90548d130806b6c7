//! Linear algebra primitives used by the multi-predictor solvers.
//!
//! The solvers only need four operations, so they are written against the
//! [`LinearAlgebra`] trait instead of a concrete decomposition. [`LuBackend`]
//! is the default implementation; any other backend must report singular
//! input through [`RegressionError::SingularMatrix`] rather than returning
//! non-finite entries.

mod lu;

pub use lu::LuBackend;

use crate::solvers::RegressionError;
use faer::{Col, Mat};

/// Dense matrix operations required by OLS and gradient descent.
pub trait LinearAlgebra {
    /// Return Aᵗ.
    fn transpose(&self, a: &Mat<f64>) -> Mat<f64>;

    /// Return A·B, failing if the inner dimensions disagree.
    fn multiply(&self, a: &Mat<f64>, b: &Mat<f64>) -> Result<Mat<f64>, RegressionError>;

    /// Return A·v, failing if `v` does not have `a.ncols()` entries.
    fn multiply_vector(&self, a: &Mat<f64>, v: &Col<f64>) -> Result<Col<f64>, RegressionError>;

    /// Return det(A) for a square matrix.
    fn determinant(&self, a: &Mat<f64>) -> Result<f64, RegressionError>;

    /// Return A⁻¹, failing with `SingularMatrix` when A has no inverse.
    fn invert(&self, a: &Mat<f64>) -> Result<Mat<f64>, RegressionError>;
}

/// Product of the Euclidean column norms of `a`.
///
/// By Hadamard's inequality this bounds |det(A)|, so `|det| / bound` is a
/// scale-free measure of how close a square matrix is to singular.
pub fn hadamard_bound(a: &Mat<f64>) -> f64 {
    (0..a.ncols())
        .map(|j| (0..a.nrows()).map(|i| a[(i, j)].powi(2)).sum::<f64>().sqrt())
        .product()
}

/// Rescale a symmetric positive semi-definite matrix to unit diagonal.
///
/// Returns D⁻¹AD⁻¹ with D = diag(√a_jj), or `None` when a diagonal entry is
/// not a positive finite number (a zero or overflowed column). The result has
/// entries in [-1, 1], so its determinant neither overflows nor underflows
/// with the scale of A.
pub fn unit_diagonal_scaling(a: &Mat<f64>) -> Option<Mat<f64>> {
    let n = a.nrows().min(a.ncols());
    let d = Col::from_fn(n, |j| a[(j, j)].sqrt());
    if d.iter().any(|dj| !(dj.is_finite() && *dj > 0.0)) {
        return None;
    }
    Some(Mat::from_fn(n, n, |i, j| a[(i, j)] / d[i] / d[j]))
}

pub(crate) fn ensure_square(a: &Mat<f64>) -> Result<usize, RegressionError> {
    if a.nrows() != a.ncols() {
        return Err(RegressionError::NotSquare {
            rows: a.nrows(),
            cols: a.ncols(),
        });
    }
    Ok(a.nrows())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hadamard_bound_diagonal() {
        let a = Mat::from_fn(3, 3, |i, j| if i == j { (i + 2) as f64 } else { 0.0 });
        // Diagonal matrices attain the bound
        assert!((hadamard_bound(&a) - 24.0).abs() < 1e-12);
    }

    #[test]
    fn test_hadamard_bound_zero_column() {
        let a = Mat::from_fn(2, 2, |i, j| if j == 1 { 0.0 } else { i as f64 + 1.0 });
        assert_eq!(hadamard_bound(&a), 0.0);
    }

    #[test]
    fn test_unit_diagonal_scaling() {
        let a = Mat::from_fn(2, 2, |i, j| [[4e100, 2e100], [2e100, 9e100]][i][j]);
        let s = unit_diagonal_scaling(&a).unwrap();

        assert!((s[(0, 0)] - 1.0).abs() < 1e-15);
        assert!((s[(1, 1)] - 1.0).abs() < 1e-15);
        assert!((s[(0, 1)] - 2.0 / 6.0).abs() < 1e-15);
        assert!((s[(1, 0)] - 2.0 / 6.0).abs() < 1e-15);
    }

    #[test]
    fn test_unit_diagonal_scaling_zero_column() {
        let a = Mat::from_fn(2, 2, |i, j| if i == 0 && j == 0 { 1.0 } else { 0.0 });
        assert!(unit_diagonal_scaling(&a).is_none());

        let b = Mat::from_fn(2, 2, |i, j| if i == j { f64::INFINITY } else { 0.0 });
        assert!(unit_diagonal_scaling(&b).is_none());
    }

    #[test]
    fn test_ensure_square() {
        let a = Mat::<f64>::zeros(2, 3);
        assert!(matches!(
            ensure_square(&a),
            Err(RegressionError::NotSquare { rows: 2, cols: 3 })
        ));
        assert_eq!(ensure_square(&Mat::<f64>::zeros(4, 4)).unwrap(), 4);
    }
}
