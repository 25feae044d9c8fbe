//! Supertropical Cramer's rule.
//!
//! For a nonsingular `A` (tangible, finite permanent) the vector
//!
//! ```text
//! x = adj(A) ⊙ b ⊙ per(A)⁻¹
//! ```
//!
//! is the maximal tangible solution of `A ⊙ x ⊨ b`, where `⊨` is ghost
//! surpassing: every row either equals `b` exactly or is a ghost at least
//! as large.

use tracing::debug;

use supertropical_rings::{Error, IntoElement, Result};

use crate::matrix::Matrix;
use crate::permanent::PermanentConfig;

impl Matrix {
    /// Solves `A ⊙ x ⊨ b` for an `(n, 1)` right-hand side with the default config.
    ///
    /// # Errors
    ///
    /// - [`Error::DimensionMismatch`] if `A` is not square or `b` is not `(n, 1)`
    /// - [`Error::SingularMatrix`] if `per(A)` is ghost or `-∞`
    /// - [`Error::OrderTooLarge`] above the size guard
    pub fn solve(&self, b: &Matrix) -> Result<Matrix> {
        self.solve_with(b, &PermanentConfig::default())
    }

    /// Solves `A ⊙ x ⊨ b` for a flat right-hand side of length `n`.
    ///
    /// # Errors
    ///
    /// Same as [`Matrix::solve`], plus [`Error::UnsupportedOperand`] for
    /// values outside `ℝ ∪ {-∞}`.
    pub fn solve_vec<T, I>(&self, b: I) -> Result<Matrix>
    where
        T: IntoElement,
        I: IntoIterator<Item = T>,
    {
        let b = Matrix::column(b)?;
        self.solve(&b)
    }

    /// Solves `A ⊙ x ⊨ b` with an explicit config.
    ///
    /// # Errors
    ///
    /// Same as [`Matrix::solve`].
    pub fn solve_with(&self, b: &Matrix, config: &PermanentConfig) -> Result<Matrix> {
        let n = self.require_square("solve")?;
        if b.shape() != (n, 1) {
            return Err(Error::DimensionMismatch {
                operation: "solve",
                left: self.shape(),
                right: b.shape(),
            });
        }

        let per = self.permanent_with(config)?;
        let per_inv = match per.inverse() {
            Some(inv) if per.is_tangible() => inv,
            _ => {
                debug!(order = n, permanent = %per, "singular system");
                return Err(Error::SingularMatrix { permanent: per });
            }
        };

        let adj = self.adjoint_with(config)?;
        let x = adj.mm(b)?.scale_element(&per_inv);
        debug!(order = n, permanent = %per, "solved system");
        Ok(x)
    }
}
