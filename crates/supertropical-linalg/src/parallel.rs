//! Parallel permanent-based operations.
//!
//! This module spreads the factorial-cost enumerations across rayon's
//! work-stealing pool. Partial results are combined with `⊕`, which is
//! commutative and associative, so the outcome (ghost flag included) does
//! not depend on scheduling.

use rayon::prelude::*;
use tracing::trace;

use supertropical_rings::{Element, Result, Semiring};

use crate::matrix::Matrix;
use crate::permanent::{permanent_of, permanent_partition};

/// Permanent with permutations partitioned by the column chosen for row 0.
///
/// # Panics
///
/// Panics if `entries.len() != n * n` or `n == 0`.
pub fn parallel_permanent<S: Semiring + Send + Sync>(entries: &[S], n: usize) -> S {
    assert!(n > 0, "parallel permanent needs a non-empty matrix");
    assert_eq!(entries.len(), n * n, "permanent needs an n × n grid");

    (0..n)
        .into_par_iter()
        .map(|first_col| {
            trace!(first_col, "permanent partition");
            permanent_partition(entries, n, first_col)
        })
        .reduce(S::zero, |a, b| a + b)
}

/// Adjoint with the `n²` minor permanents computed in parallel.
///
/// Entry `(i, j)` is the permanent of the minor with row `j` and column `i`
/// removed.
pub(crate) fn parallel_adjoint(matrix: &Matrix) -> Result<Matrix> {
    let n = matrix.num_rows();
    let data: Vec<Element> = (0..n * n)
        .into_par_iter()
        .map(|k| -> Result<Element> {
            let (i, j) = (k / n, k % n);
            let minor = matrix.get_minor(j, i)?;
            Ok(permanent_of(minor.as_slice(), n - 1))
        })
        .collect::<Result<Vec<_>>>()?;
    Matrix::new(n, n, data)
}
