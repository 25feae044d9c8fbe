//! Algebraic structure traits.
//!
//! A semiring drops the additive inverses of a ring. The supertropical
//! structures add a ghost ideal on top of that, which is what the
//! permanent-based linear algebra relies on.

use std::fmt::Debug;
use std::ops::{Add, Mul};

/// A semiring is a set with addition and multiplication operations.
///
/// # Laws
///
/// - Addition is associative and commutative with identity `zero()`
/// - Multiplication is associative with identity `one()`
/// - Multiplication distributes over addition
/// - `zero()` is absorbing under multiplication
pub trait Semiring: Clone + Debug + Add<Output = Self> + Mul<Output = Self> {
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Returns true if this is the additive identity.
    fn is_zero(&self) -> bool;

    /// Returns true if this is the multiplicative identity.
    fn is_one(&self) -> bool;

    /// Computes self^n for non-negative n.
    fn pow(&self, n: u32) -> Self {
        if n == 0 {
            return Self::one();
        }

        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result * base.clone();
            }
            base = base.clone() * base;
            exp >>= 1;
        }

        result
    }

    /// Folds an iterator with semiring addition, starting from `zero()`.
    fn sum_all<I: IntoIterator<Item = Self>>(iter: I) -> Self {
        iter.into_iter().fold(Self::zero(), |acc, x| acc + x)
    }

    /// Folds an iterator with semiring multiplication, starting from `one()`.
    fn product_all<I: IntoIterator<Item = Self>>(iter: I) -> Self {
        iter.into_iter().fold(Self::one(), |acc, x| acc * x)
    }
}

/// A semiring where multiplication is commutative.
pub trait CommutativeSemiring: Semiring {}

/// A semiring where every non-zero element has a multiplicative inverse.
pub trait Semifield: CommutativeSemiring {
    /// Computes the multiplicative inverse.
    ///
    /// Returns `None` if the element is zero.
    fn inv(&self) -> Option<Self>;
}

/// A semiring with a distinguished ghost ideal.
///
/// Elements outside the ideal are tangible. The ghost map `ν` sends an
/// element to its ghost copy, and `μ` projects back to the tangible one.
pub trait GhostSemiring: CommutativeSemiring {
    /// Returns true if the element lies in the ghost ideal.
    fn is_ghost(&self) -> bool;

    /// Returns true if the element is not a ghost.
    fn is_tangible(&self) -> bool {
        !self.is_ghost()
    }

    /// The ghost map `ν`.
    #[must_use]
    fn to_ghost(&self) -> Self;

    /// The tangible projection `μ`.
    #[must_use]
    fn to_tangible(&self) -> Self;

    /// Ghost surpassing: `self = other ⊕ g` for some ghost `g`.
    fn ghost_surpasses(&self, other: &Self) -> bool;
}
