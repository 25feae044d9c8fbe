//! The supertropical adjoint.
//!
//! `adj(A)[i][j] = per(minor(A, j, i))`, the transpose of the matrix of
//! minor permanents. There are no cofactor signs because the semiring has
//! no additive inverses.
//!
//! The adjoint needs `n²` permanents of order `n - 1`, i.e.
//! `O(n² · (n-1)!)` work, which makes it the most expensive operation here.

use tracing::debug;

use supertropical_rings::{Element, Result};

use crate::matrix::Matrix;
use crate::parallel::parallel_adjoint;
use crate::permanent::{permanent_of, PermanentConfig};

impl Matrix {
    /// Adjoint with the default [`PermanentConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`](supertropical_rings::Error::DimensionMismatch)
    /// for non-square matrices and
    /// [`Error::OrderTooLarge`](supertropical_rings::Error::OrderTooLarge)
    /// above the size guard.
    pub fn adjoint(&self) -> Result<Matrix> {
        self.adjoint_with(&PermanentConfig::default())
    }

    /// Adjoint with an explicit config.
    ///
    /// # Errors
    ///
    /// Same as [`Matrix::adjoint`].
    pub fn adjoint_with(&self, config: &PermanentConfig) -> Result<Matrix> {
        let n = self.require_square("adjoint")?;
        config.check_order(n)?;

        let parallel = config.use_parallel(n);
        debug!(order = n, parallel, "computing adjoint");
        if parallel {
            return parallel_adjoint(self);
        }

        let mut data: Vec<Element> = Vec::with_capacity(n * n);
        for i in 0..n {
            for j in 0..n {
                let minor = self.get_minor(j, i)?;
                data.push(permanent_of(minor.as_slice(), n - 1));
            }
        }
        Matrix::new(n, n, data)
    }
}
