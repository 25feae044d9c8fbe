//! Conversion of plain numbers into semiring elements.
//!
//! Every public entry point that accepts a scalar goes through
//! [`IntoElement`], so raw numbers are validated in exactly one place.
//! Plain numbers always become tangible elements.

use crate::element::Element;
use crate::error::Result;

/// Types that can be turned into an [`Element`].
pub trait IntoElement {
    /// Converts `self` into an element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedOperand`](crate::Error::UnsupportedOperand)
    /// for values outside `ℝ ∪ {-∞}`.
    fn into_element(self) -> Result<Element>;
}

impl IntoElement for Element {
    fn into_element(self) -> Result<Element> {
        Ok(self)
    }
}

impl IntoElement for &Element {
    fn into_element(self) -> Result<Element> {
        Ok(*self)
    }
}

impl IntoElement for f64 {
    fn into_element(self) -> Result<Element> {
        Element::try_new(self)
    }
}

impl IntoElement for f32 {
    fn into_element(self) -> Result<Element> {
        Element::try_new(f64::from(self))
    }
}

macro_rules! impl_lossless_int {
    ($($t:ty),*) => {
        $(
            impl IntoElement for $t {
                fn into_element(self) -> Result<Element> {
                    Ok(Element::from(self))
                }
            }

            impl From<$t> for Element {
                fn from(value: $t) -> Self {
                    Element::new(f64::from(value))
                }
            }
        )*
    };
}

impl_lossless_int!(i8, i16, i32, u8, u16, u32);

impl IntoElement for i64 {
    #[allow(clippy::cast_precision_loss)]
    fn into_element(self) -> Result<Element> {
        Element::try_new(self as f64)
    }
}

impl IntoElement for u64 {
    #[allow(clippy::cast_precision_loss)]
    fn into_element(self) -> Result<Element> {
        Element::try_new(self as f64)
    }
}

/// Converts a sequence of scalars into elements, failing on the first bad value.
///
/// # Errors
///
/// Propagates the first conversion failure.
pub fn collect_elements<T, I>(values: I) -> Result<Vec<Element>>
where
    T: IntoElement,
    I: IntoIterator<Item = T>,
{
    values.into_iter().map(IntoElement::into_element).collect()
}
