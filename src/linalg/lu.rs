//! LU backend with partial pivoting, delegating to faer.

use super::{ensure_square, LinearAlgebra};
use crate::solvers::RegressionError;
use faer::linalg::solvers::{DenseSolveCore, PartialPivLu};
use faer::{Col, Mat};

/// Dense backend built on faer's partially pivoted LU factorization.
///
/// Inversion treats a pivot as zero when
/// `|u_ii| <= pivot_tolerance * n * max|a_ij|`.
#[derive(Debug, Clone, Copy)]
pub struct LuBackend {
    pivot_tolerance: f64,
}

impl Default for LuBackend {
    fn default() -> Self {
        Self {
            pivot_tolerance: f64::EPSILON,
        }
    }
}

impl LuBackend {
    /// Create a backend with a custom relative pivot tolerance.
    pub fn with_pivot_tolerance(pivot_tolerance: f64) -> Self {
        Self { pivot_tolerance }
    }

    fn pivot_threshold(&self, a: &Mat<f64>) -> f64 {
        let n = a.nrows();
        let mut max_abs: f64 = 0.0;
        for j in 0..a.ncols() {
            for i in 0..n {
                max_abs = max_abs.max(a[(i, j)].abs());
            }
        }
        self.pivot_tolerance * n as f64 * max_abs
    }
}

/// det(A) = sign(P) · Π u_ii.
///
/// An exactly zero pivot ends the product early; entries after it may be
/// non-finite.
fn lu_determinant(lu: &PartialPivLu<f64>) -> f64 {
    let u = lu.U();
    let mut det = permutation_sign(lu.P().arrays().0);
    for i in 0..u.nrows() {
        let pivot = u[(i, i)];
        if pivot == 0.0 {
            return 0.0;
        }
        det *= pivot;
    }
    det
}

/// +1 for an even permutation, -1 for an odd one.
fn permutation_sign(forward: &[usize]) -> f64 {
    let mut visited = vec![false; forward.len()];
    let mut transpositions = 0;
    for start in 0..forward.len() {
        let mut i = start;
        let mut cycle_len = 0;
        while !visited[i] {
            visited[i] = true;
            i = forward[i];
            cycle_len += 1;
        }
        if cycle_len > 0 {
            transpositions += cycle_len - 1;
        }
    }
    if transpositions % 2 == 0 {
        1.0
    } else {
        -1.0
    }
}

impl LinearAlgebra for LuBackend {
    fn transpose(&self, a: &Mat<f64>) -> Mat<f64> {
        a.transpose().to_owned()
    }

    fn multiply(&self, a: &Mat<f64>, b: &Mat<f64>) -> Result<Mat<f64>, RegressionError> {
        if a.ncols() != b.nrows() {
            return Err(RegressionError::IncompatibleShapes {
                left_rows: a.nrows(),
                left_cols: a.ncols(),
                right_rows: b.nrows(),
                right_cols: b.ncols(),
            });
        }
        Ok(a * b)
    }

    fn multiply_vector(&self, a: &Mat<f64>, v: &Col<f64>) -> Result<Col<f64>, RegressionError> {
        if a.ncols() != v.nrows() {
            return Err(RegressionError::IncompatibleShapes {
                left_rows: a.nrows(),
                left_cols: a.ncols(),
                right_rows: v.nrows(),
                right_cols: 1,
            });
        }
        Ok(a * v)
    }

    fn determinant(&self, a: &Mat<f64>) -> Result<f64, RegressionError> {
        ensure_square(a)?;
        Ok(lu_determinant(&a.partial_piv_lu()))
    }

    fn invert(&self, a: &Mat<f64>) -> Result<Mat<f64>, RegressionError> {
        ensure_square(a)?;
        let threshold = self.pivot_threshold(a);
        let lu = a.partial_piv_lu();

        let u = lu.U();
        for i in 0..u.nrows() {
            if !(u[(i, i)].abs() > threshold) {
                return Err(RegressionError::SingularMatrix {
                    determinant: lu_determinant(&lu),
                });
            }
        }

        Ok(lu.inverse())
    }
}
