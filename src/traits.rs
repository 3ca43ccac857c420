//! Common traits for heap data structures
//!
//! This module provides the two-tier trait hierarchy implemented by
//! [`BinomialHeap`](crate::binomial::BinomialHeap):
//!
//! - [`PriorityQueue`]: insert, find-min, delete-min
//! - [`MergeableHeap`]: adds heap-to-heap union
//!
//! Every comparison goes through a [`Comparator`](crate::compare::Comparator),
//! which may fail, so the mutating operations return `Result`.

use std::fmt;

/// Error type for heap and tree operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// Two binomial trees of different degree were passed to a merge
    DegreeMismatch {
        /// Degree of the receiving tree
        left: usize,
        /// Degree of the tree being merged in
        right: usize,
    },
    /// The comparator could not order two elements
    OrderingUnavailable,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::DegreeMismatch { left, right } => {
                write!(
                    f,
                    "cannot merge trees of different degree ({left} vs {right})"
                )
            }
            HeapError::OrderingUnavailable => {
                write!(f, "elements cannot be compared without a total order")
            }
        }
    }
}

impl std::error::Error for HeapError {}

/// Base trait for priority queues
///
/// A min-queue: `find_min` and `delete_min` address the element that the
/// queue's ordering ranks lowest. Empty queues are not an error; the query
/// methods return `Ok(None)`.
///
/// # Example
///
/// ```rust
/// use binomial_forest::{BinomialHeap, HeapError, PriorityQueue};
///
/// fn fill<Q: PriorityQueue<i32>>(queue: &mut Q) -> Result<(), HeapError> {
///     queue.add(3)?;
///     queue.add(1)?;
///     queue.add(2)
/// }
///
/// let mut heap = BinomialHeap::new();
/// fill(&mut heap)?;
/// assert_eq!(heap.find_min()?, Some(&1));
/// assert_eq!(heap.delete_min()?, Some(1));
/// # Ok::<(), HeapError>(())
/// ```
pub trait PriorityQueue<T> {
    /// Inserts an element
    ///
    /// # Errors
    /// Returns `HeapError::OrderingUnavailable` if the new element cannot be
    /// compared with the elements it has to be linked against. The queue is
    /// left unchanged in that case.
    fn add(&mut self, value: T) -> Result<(), HeapError>;

    /// Returns true if the queue holds no elements
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the queue
    fn len(&self) -> usize;

    /// Returns the minimum element without removing it
    fn find_min(&self) -> Result<Option<&T>, HeapError>;

    /// Removes and returns the minimum element
    ///
    /// # Errors
    /// Returns `HeapError::OrderingUnavailable` if the remaining elements
    /// cannot be ordered; the queue is left unchanged.
    fn delete_min(&mut self) -> Result<Option<T>, HeapError>;
}

/// Priority queue supporting union with another queue of the same type
pub trait MergeableHeap<T>: PriorityQueue<T> {
    /// Moves every element of `other` into this queue
    ///
    /// # Time Complexity
    /// O(log n + log m) for binomial heaps.
    fn absorb(&mut self, other: Self) -> Result<(), HeapError>
    where
        Self: Sized;
}
