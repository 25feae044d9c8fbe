//! The supertropical permanent.
//!
//! `per(A) = ⊕_{π ∈ S_n} ⊙_i A[i][π(i)]`
//!
//! In the supertropical semiring the permanent plays the role of the
//! determinant: it is tangible exactly when a single permutation attains
//! the maximum, and ghost when two or more tie. No extra bookkeeping is
//! needed for that, the tie rule of `⊕` does it.
//!
//! # Cost
//!
//! Evaluation enumerates all `n!` permutations at `O(n)` each, so the cost
//! is `O(n! · n)`. This is a hard scaling limit: orders above
//! [`PermanentConfig::max_order`] are rejected with
//! [`Error::OrderTooLarge`] instead of running for hours.

use tracing::{debug, warn};

use supertropical_rings::{Element, Error, Result, Semiring};

use crate::matrix::Matrix;
use crate::parallel::parallel_permanent;
use crate::permutations::HeapPermutations;

/// Size guard and parallelism settings for permanent-based operations.
///
/// The default runs single-threaded; rayon is opt-in through
/// [`PermanentConfig::parallel`] or an explicit `parallel_threshold`.
#[derive(Clone, Debug)]
pub struct PermanentConfig {
    /// Largest matrix order accepted. `10!` is about 3.6 million terms.
    pub max_order: usize,
    /// Minimum order at which enumeration is spread across rayon workers.
    pub parallel_threshold: usize,
}

impl Default for PermanentConfig {
    fn default() -> Self {
        Self::sequential()
    }
}

impl PermanentConfig {
    /// Config that never takes the parallel path.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            max_order: 10,
            parallel_threshold: usize::MAX,
        }
    }

    /// Config that uses rayon from order 8 upward.
    #[must_use]
    pub fn parallel() -> Self {
        Self {
            parallel_threshold: 8,
            ..Self::sequential()
        }
    }

    /// Returns true if an order-`n` matrix should be evaluated in parallel.
    #[must_use]
    pub fn use_parallel(&self, n: usize) -> bool {
        n >= self.parallel_threshold
    }

    /// Rejects orders above `max_order`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OrderTooLarge`].
    pub fn check_order(&self, order: usize) -> Result<()> {
        if order > self.max_order {
            warn!(order, max_order = self.max_order, "permanent size guard tripped");
            return Err(Error::OrderTooLarge {
                order,
                max_order: self.max_order,
            });
        }
        Ok(())
    }
}

/// Permanent of an `n × n` row-major grid over any semiring.
///
/// Products are folded from `one()` in row order and terms are summed from
/// `zero()` in generation order.
///
/// # Panics
///
/// Panics if `entries.len() != n * n`.
pub fn permanent_of<S: Semiring>(entries: &[S], n: usize) -> S {
    assert_eq!(entries.len(), n * n, "permanent needs an n × n grid");

    let mut perms = HeapPermutations::new(n);
    let mut total = S::zero();
    while let Some(perm) = perms.next_permutation() {
        let term = perm
            .iter()
            .enumerate()
            .fold(S::one(), |acc, (i, &j)| acc * entries[i * n + j].clone());
        total = total + term;
    }
    total
}

/// Sum of the permutation terms with `π(0) = first_col`.
///
/// The terms are enumerated over the remaining columns, so summing this over
/// every `first_col` visits each of the `n!` permutations exactly once.
pub(crate) fn permanent_partition<S: Semiring>(entries: &[S], n: usize, first_col: usize) -> S {
    let rest: Vec<usize> = (0..n).filter(|&c| c != first_col).collect();
    let head = S::one() * entries[first_col].clone();

    let mut perms = HeapPermutations::new(n - 1);
    let mut total = S::zero();
    while let Some(perm) = perms.next_permutation() {
        let term = perm.iter().enumerate().fold(head.clone(), |acc, (i, &p)| {
            acc * entries[(i + 1) * n + rest[p]].clone()
        });
        total = total + term;
    }
    total
}

impl Matrix {
    /// Supertropical permanent with the default [`PermanentConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] for non-square matrices and
    /// [`Error::OrderTooLarge`] above the size guard.
    pub fn permanent(&self) -> Result<Element> {
        self.permanent_with(&PermanentConfig::default())
    }

    /// Supertropical permanent with an explicit config.
    ///
    /// The empty matrix has permanent `0` (the multiplicative identity).
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] for non-square matrices and
    /// [`Error::OrderTooLarge`] above the size guard.
    pub fn permanent_with(&self, config: &PermanentConfig) -> Result<Element> {
        let n = self.require_square("permanent")?;
        config.check_order(n)?;
        if n == 0 {
            return Ok(Element::ONE);
        }

        let parallel = config.use_parallel(n);
        debug!(order = n, parallel, "computing permanent");
        let per = if parallel {
            parallel_permanent(self.as_slice(), n)
        } else {
            permanent_of(self.as_slice(), n)
        };
        debug!(order = n, permanent = %per, "permanent done");
        Ok(per)
    }
}
