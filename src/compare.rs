//! Element ordering used by trees and heaps
//!
//! A heap either orders its elements naturally ([`NaturalOrder`], requires
//! `T: Ord`) or through a caller-supplied comparator. Comparison is fallible
//! so that element types without a total order (floats via [`PartialOrder`])
//! report [`HeapError::OrderingUnavailable`] at the first comparison that
//! cannot be decided, instead of corrupting the heap order.

use crate::traits::HeapError;
use std::cmp::Ordering;
use std::fmt;

/// A total order over `T`, possibly undecidable for some pairs
pub trait Comparator<T> {
    /// Compares two elements
    ///
    /// # Errors
    /// Returns `HeapError::OrderingUnavailable` if `a` and `b` cannot be ordered.
    fn compare(&self, a: &T, b: &T) -> Result<Ordering, HeapError>;

    /// Returns true if `a` ranks strictly before `b`
    #[inline]
    fn less(&self, a: &T, b: &T) -> Result<bool, HeapError> {
        Ok(self.compare(a, b)? == Ordering::Less)
    }
}

/// The element type's own `Ord` implementation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord> Comparator<T> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Result<Ordering, HeapError> {
        Ok(a.cmp(b))
    }
}

/// `PartialOrd`, failing on incomparable pairs
///
/// ```rust
/// use binomial_forest::compare::{Comparator, PartialOrder};
/// use binomial_forest::HeapError;
///
/// assert!(PartialOrder.less(&1.0, &2.0).unwrap());
/// assert_eq!(
///     PartialOrder.compare(&f64::NAN, &1.0),
///     Err(HeapError::OrderingUnavailable)
/// );
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PartialOrder;

impl<T: PartialOrd> Comparator<T> for PartialOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Result<Ordering, HeapError> {
        a.partial_cmp(b).ok_or(HeapError::OrderingUnavailable)
    }
}

/// An infallible comparator function
#[derive(Clone, Copy)]
pub struct FnComparator<F>(pub F);

impl<F> fmt::Debug for FnComparator<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnComparator")
    }
}

impl<T, F> Comparator<T> for FnComparator<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Result<Ordering, HeapError> {
        Ok((self.0)(a, b))
    }
}

impl<T, C: Comparator<T> + ?Sized> Comparator<T> for &C {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Result<Ordering, HeapError> {
        (**self).compare(a, b)
    }
}
