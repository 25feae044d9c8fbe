//! # supertropical-linalg
//!
//! Linear algebra over the supertropical semiring.
//!
//! This crate provides:
//! - Dense matrices of supertropical elements with `⊙` products and minors
//! - The permanent, the supertropical stand-in for the determinant
//! - The adjoint (transposed matrix of minor permanents)
//! - A Cramer's-rule solver returning the maximal tangible solution
//! - Parallel permanent and adjoint evaluation via rayon
//!
//! ## Cost
//!
//! The permanent enumerates all `n!` permutations and the adjoint evaluates
//! `n²` permanents of order `n - 1`. Both are guarded by
//! [`PermanentConfig::max_order`].
//!
//! ## Example
//!
//! ```
//! use supertropical_linalg::Matrix;
//!
//! let a = Matrix::from_rows(vec![vec![2, 1], vec![1, 3]]).unwrap();
//! let per = a.permanent().unwrap();
//! assert_eq!(per.value(), 5.0);
//! assert!(per.is_tangible());
//!
//! let x = a.solve_vec([5, 4]).unwrap();
//! assert_eq!(x.shape(), (2, 1));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod matrix;
pub mod parallel;
pub mod permanent;
pub mod permutations;

mod adjoint;
mod solve;

pub use matrix::Matrix;
pub use parallel::parallel_permanent;
pub use permanent::{permanent_of, PermanentConfig};
pub use permutations::{factorial, HeapPermutations};
pub use supertropical_rings::{Element, Error, IntoElement, Result};

#[cfg(test)]
mod proptests;
