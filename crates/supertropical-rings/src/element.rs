//! The supertropical semiring over `ℝ ∪ {-∞}`.
//!
//! Every element is a real value (or `-∞`) carrying a ghost flag. Addition
//! keeps the larger operand and turns a tie into a ghost; multiplication
//! adds values and is ghost if either factor is.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul};

use crate::error::{Error, Result};
use crate::traits::{CommutativeSemiring, GhostSemiring, Semifield, Semiring};

/// A supertropical number.
///
/// Equality and ordering look only at the value; use [`Element::same_as`]
/// to compare the ghost flag as well.
#[derive(Clone, Copy, Debug)]
pub struct Element {
    value: f64,
    ghost: bool,
}

impl Element {
    /// Additive identity `-∞`, tangible.
    pub const ZERO: Element = Element {
        value: f64::NEG_INFINITY,
        ghost: false,
    };

    /// Multiplicative identity `0`, tangible.
    pub const ONE: Element = Element {
        value: 0.0,
        ghost: false,
    };

    /// Creates a tangible element.
    ///
    /// # Panics
    ///
    /// Panics if `value` is NaN or `+∞`.
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self::with_ghost(value, false)
    }

    /// Creates a ghost element.
    ///
    /// # Panics
    ///
    /// Panics if `value` is NaN or `+∞`.
    #[must_use]
    pub fn ghost(value: f64) -> Self {
        Self::with_ghost(value, true)
    }

    /// Creates an element with an explicit ghost flag.
    ///
    /// `-∞` is always stored as tangible.
    ///
    /// # Panics
    ///
    /// Panics if `value` is NaN or `+∞`.
    #[must_use]
    pub fn with_ghost(value: f64, is_ghost: bool) -> Self {
        match Self::try_with_ghost(value, is_ghost) {
            Ok(e) => e,
            Err(err) => panic!("{err}"),
        }
    }

    /// Fallible tangible constructor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedOperand`] if `value` is NaN or `+∞`.
    pub fn try_new(value: f64) -> Result<Self> {
        Self::try_with_ghost(value, false)
    }

    /// Fallible constructor with an explicit ghost flag.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedOperand`] if `value` is NaN or `+∞`.
    pub fn try_with_ghost(value: f64, is_ghost: bool) -> Result<Self> {
        if value.is_nan() || value == f64::INFINITY {
            return Err(Error::UnsupportedOperand(format!(
                "{value} is neither a finite real nor -inf"
            )));
        }
        Ok(Self {
            value,
            ghost: is_ghost && value != f64::NEG_INFINITY,
        })
    }

    /// Returns the underlying value.
    #[inline]
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Returns true if this element lies in the ghost ideal.
    #[inline]
    #[must_use]
    pub fn is_ghost(&self) -> bool {
        self.ghost
    }

    /// Returns true if this element is not a ghost.
    #[inline]
    #[must_use]
    pub fn is_tangible(&self) -> bool {
        !self.ghost
    }

    /// Returns true for `-∞`.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.value == f64::NEG_INFINITY
    }

    /// Returns true for tangible `0`.
    #[inline]
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.value == 0.0 && !self.ghost
    }

    /// Compares value and ghost flag.
    #[must_use]
    pub fn same_as(&self, other: &Self) -> bool {
        self.value == other.value && self.ghost == other.ghost
    }

    /// Supertropical addition `⊕`.
    ///
    /// The larger operand wins with its own ghost flag; equal values give a
    /// ghost of that value. `-∞` is the identity.
    #[must_use]
    pub fn oplus(&self, other: &Self) -> Self {
        if self.is_zero() {
            return *other;
        }
        if other.is_zero() {
            return *self;
        }
        match self.value.partial_cmp(&other.value) {
            Some(Ordering::Greater) => *self,
            Some(Ordering::Less) => *other,
            _ => Self {
                value: self.value,
                ghost: true,
            },
        }
    }

    /// Supertropical multiplication `⊙`.
    ///
    /// Values add; the result is ghost if either factor is. `-∞` absorbs.
    ///
    /// # Panics
    ///
    /// Panics if the sum of two finite values overflows to `+∞`, the same
    /// value [`Element::new`] rejects. Use [`Element::checked_odot`] to get
    /// an error instead.
    #[must_use]
    pub fn odot(&self, other: &Self) -> Self {
        match self.checked_odot(other) {
            Ok(e) => e,
            Err(err) => panic!("{err}"),
        }
    }

    /// Fallible `⊙`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedOperand`] if the sum of the values
    /// overflows to `+∞`.
    pub fn checked_odot(&self, other: &Self) -> Result<Self> {
        if self.is_zero() || other.is_zero() {
            return Ok(Self::ZERO);
        }
        let value = self.value + other.value;
        if value == f64::INFINITY {
            return Err(Error::UnsupportedOperand(format!(
                "{} ⊙ {} overflows to +inf",
                self.value, other.value
            )));
        }
        Ok(Self {
            value,
            ghost: self.ghost || other.ghost,
        })
    }

    /// Multiplicative inverse: the negated value with the same ghost flag.
    ///
    /// Returns `None` for `-∞`.
    #[must_use]
    pub fn inverse(&self) -> Option<Self> {
        if self.is_zero() {
            return None;
        }
        Some(Self {
            value: -self.value,
            ghost: self.ghost,
        })
    }
}

impl Default for Element {
    fn default() -> Self {
        Self::ZERO
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl PartialOrd for Element {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "-∞");
        }
        write!(f, "{}", self.value)?;
        if self.ghost {
            write!(f, "ν")?;
        }
        Ok(())
    }
}

impl Add for Element {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.oplus(&rhs)
    }
}

impl Add<&Element> for &Element {
    type Output = Element;

    fn add(self, rhs: &Element) -> Element {
        self.oplus(rhs)
    }
}

impl Mul for Element {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.odot(&rhs)
    }
}

impl Mul<&Element> for &Element {
    type Output = Element;

    fn mul(self, rhs: &Element) -> Element {
        self.odot(rhs)
    }
}

impl Semiring for Element {
    fn zero() -> Self {
        Self::ZERO
    }

    fn one() -> Self {
        Self::ONE
    }

    fn is_zero(&self) -> bool {
        Element::is_zero(self)
    }

    fn is_one(&self) -> bool {
        Element::is_one(self)
    }
}

impl CommutativeSemiring for Element {}

impl Semifield for Element {
    fn inv(&self) -> Option<Self> {
        self.inverse()
    }
}

impl GhostSemiring for Element {
    fn is_ghost(&self) -> bool {
        self.ghost
    }

    fn to_ghost(&self) -> Self {
        Self {
            value: self.value,
            ghost: !self.is_zero(),
        }
    }

    fn to_tangible(&self) -> Self {
        Self {
            value: self.value,
            ghost: false,
        }
    }

    fn ghost_surpasses(&self, other: &Self) -> bool {
        self.same_as(other) || (self.ghost && self.value >= other.value)
    }
}

impl num_traits::Zero for Element {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        Element::is_zero(self)
    }
}

impl num_traits::One for Element {
    fn one() -> Self {
        Self::ONE
    }

    fn is_one(&self) -> bool {
        Element::is_one(self)
    }
}
