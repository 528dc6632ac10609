//! LU factorization with partial pivoting.
//!
//! ## Algorithm
//!
//! Right-looking Doolittle elimination computing
//! ```text
//! P * A = L * U
//! ```
//! where:
//! - P is a row permutation (stored as a vector of source rows)
//! - L is lower triangular with unit diagonal
//! - U is upper triangular
//!
//! L and U share one matrix: the strict lower triangle holds L, the
//! diagonal and upper triangle hold U. The inverse is obtained by solving
//! `A x = e_j` for every identity column.

use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
use tracing::trace;

use super::{find_pivot, swap_rows};
use crate::{validation::MatrixValidator, LinalgError, Result, Scalar};

/// Packed LU factors of a square matrix
#[derive(Debug, Clone)]
pub struct LuFactors<T> {
    /// Combined L (strict lower, unit diagonal implied) and U (upper)
    lu: Array2<T>,
    /// `permutation[i]` is the row of A that ended up in row i
    permutation: Vec<usize>,
    /// Number of row interchanges, for the determinant sign
    swaps: usize,
}

/// LU factorization with partial pivoting
pub struct LuDecomposition;

impl LuDecomposition {
    /// Factors a square matrix.
    ///
    /// Fails with [`LinalgError::Singular`] when a pivot magnitude is
    /// `<= pivot_tolerance * max|A|`.
    pub fn factor<T: Scalar>(
        matrix: ArrayView2<'_, T>,
        pivot_tolerance: f64,
    ) -> Result<LuFactors<T>> {
        let n = matrix.nrows();
        let threshold = T::from_tolerance(pivot_tolerance) * MatrixValidator::max_abs(matrix);

        let mut lu = matrix.to_owned();
        let mut permutation: Vec<usize> = (0..n).collect();
        let mut swaps = 0;

        for k in 0..n {
            let (pivot_row, magnitude) = find_pivot(lu.view(), k, k);
            if magnitude <= threshold {
                return Err(LinalgError::singular(
                    "MATRIX_SINGULAR",
                    "Matrix is singular to working precision",
                    k,
                    magnitude.to_f64_lossy(),
                    "Check for linearly dependent rows or columns",
                ));
            }

            if pivot_row != k {
                trace!(k, pivot_row, "swapping rows");
                swap_rows(&mut lu, k, pivot_row);
                permutation.swap(k, pivot_row);
                swaps += 1;
            }

            let pivot = lu[[k, k]];
            for i in (k + 1)..n {
                let multiplier = lu[[i, k]] / pivot;
                lu[[i, k]] = multiplier;
                if multiplier == T::zero() {
                    continue;
                }
                for j in (k + 1)..n {
                    let upper = lu[[k, j]];
                    lu[[i, j]] = lu[[i, j]] - multiplier * upper;
                }
            }
        }

        Ok(LuFactors { lu, permutation, swaps })
    }
}

impl<T: Scalar> LuFactors<T> {
    /// Order of the factored matrix
    pub fn dim(&self) -> usize {
        self.lu.nrows()
    }

    /// Row permutation applied during pivoting
    pub fn permutation(&self) -> &[usize] {
        &self.permutation
    }

    /// Unit lower triangular factor
    pub fn l(&self) -> Array2<T> {
        let n = self.dim();
        Array2::from_shape_fn((n, n), |(i, j)| {
            if i == j {
                T::one()
            } else if i > j {
                self.lu[[i, j]]
            } else {
                T::zero()
            }
        })
    }

    /// Upper triangular factor
    pub fn u(&self) -> Array2<T> {
        let n = self.dim();
        Array2::from_shape_fn((n, n), |(i, j)| if i <= j { self.lu[[i, j]] } else { T::zero() })
    }

    /// Determinant of the original matrix
    pub fn determinant(&self) -> T {
        let product = self.lu.diag().iter().fold(T::one(), |acc, &d| acc * d);
        if self.swaps % 2 == 0 {
            product
        } else {
            -product
        }
    }

    /// Solves `A x = b` for one right-hand side
    pub fn solve(&self, b: ArrayView1<'_, T>) -> Result<Array1<T>> {
        let n = self.dim();
        if b.len() != n {
            return Err(LinalgError::invalid_shape(
                "LU_RHS_LENGTH_MISMATCH",
                format!("Right-hand side has {} entries, factorization has order {}", b.len(), n),
                format!("({},)", b.len()),
                "LU solve",
                "Pass a vector whose length matches the factored matrix",
            ));
        }
        Ok(self.solve_unchecked(|i| b[self.permutation[i]]))
    }

    /// Inverse of the original matrix, one identity column at a time
    pub fn inverse(&self) -> Array2<T> {
        let n = self.dim();
        let mut inverse = Array2::<T>::zeros((n, n));
        for col in 0..n {
            let x = self.solve_unchecked(|i| {
                if self.permutation[i] == col {
                    T::one()
                } else {
                    T::zero()
                }
            });
            inverse.column_mut(col).assign(&x);
        }
        inverse
    }

    /// Forward then back substitution; `permuted_rhs(i)` yields `(P b)[i]`
    fn solve_unchecked<F>(&self, permuted_rhs: F) -> Array1<T>
    where
        F: Fn(usize) -> T,
    {
        let n = self.dim();
        let mut x = Array1::<T>::zeros(n);

        // L y = P b
        for i in 0..n {
            let mut sum = permuted_rhs(i);
            for j in 0..i {
                sum = sum - self.lu[[i, j]] * x[j];
            }
            x[i] = sum;
        }

        // U x = y
        for i in (0..n).rev() {
            let mut sum = x[i];
            for j in (i + 1)..n {
                sum = sum - self.lu[[i, j]] * x[j];
            }
            x[i] = sum / self.lu[[i, i]];
        }

        x
    }
}
