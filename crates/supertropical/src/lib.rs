//! # Supertropical
//!
//! Supertropical (extended max-plus) algebra and linear algebra in Rust.
//!
//! The supertropical semiring extends max-plus arithmetic with a ghost
//! ideal that records ties. That bit of bookkeeping lets the permanent act
//! as a determinant: a matrix is nonsingular exactly when its permanent is
//! tangible.
//!
//! ## Features
//!
//! - **Elements**: `⊕` (max with ghost ties) and `⊙` (addition)
//! - **Matrices**: products, minors, transposes
//! - **Permanent and adjoint**: exact combinatorial evaluation, optionally parallel
//! - **Solver**: Cramer's rule for the maximal tangible solution of `A ⊙ x ⊨ b`
//!
//! ## Quick Start
//!
//! ```
//! use supertropical::prelude::*;
//!
//! let a = Matrix::from_rows(vec![vec![1, 1], vec![1, 1]]).unwrap();
//! let per = a.permanent().unwrap();
//! assert!(per.is_ghost());
//! assert!(matches!(a.solve_vec([2, 2]), Err(Error::SingularMatrix { .. })));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use supertropical_linalg as linalg;
pub use supertropical_rings as rings;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use supertropical_linalg::{HeapPermutations, Matrix, PermanentConfig};
    pub use supertropical_rings::{
        Element, Error, GhostSemiring, IntoElement, Result, Semifield, Semiring,
    };
}
