//! # supertropical-rings
//!
//! Element arithmetic for the supertropical semiring.
//!
//! This crate provides:
//! - Abstract traits: `Semiring`, `Semifield`, `GhostSemiring`
//! - The concrete supertropical [`Element`] over `ℝ ∪ {-∞}` with its ghost copy
//! - The numeric conversion boundary [`IntoElement`]
//! - The [`Error`] and [`Result`] types shared by the workspace
//!
//! ## Trait Hierarchy
//!
//! ```text
//! Semiring
//!  └── CommutativeSemiring
//!       ├── Semifield
//!       └── GhostSemiring
//! ```
//!
//! ## Example
//!
//! ```
//! use supertropical_rings::Element;
//!
//! let a = Element::new(3.0);
//! let b = Element::new(5.0);
//!
//! // ⊕ is max, ⊙ is ordinary addition
//! assert_eq!((a + b).value(), 5.0);
//! assert_eq!((a * b).value(), 8.0);
//!
//! // a tie is recorded as a ghost
//! assert!((a + a).is_ghost());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod element;
pub mod error;
pub mod scalar;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use element::Element;
pub use error::{Error, Result};
pub use scalar::IntoElement;
pub use traits::{CommutativeSemiring, GhostSemiring, Semifield, Semiring};
