//! Mergeable binomial heaps for Rust
//!
//! This crate provides a persistent binomial heap: a priority queue stored as
//! a forest of binomial trees, one tree per set bit of the element count.
//!
//! # Features
//!
//! - **Binomial Tree**: immutable, structurally shared trees with O(1) linking
//!   of two equal-degree trees and O(log n) decomposition of the root
//! - **Binomial Heap**: O(log n) insert, find-min and delete-min;
//!   O(log n + log m) non-destructive merge; O(log n) clone
//! - **Orderings**: natural `Ord`, `PartialOrd` with an explicit error for
//!   incomparable elements, or any comparator function
//! - **Merge strategies**: two-phase interleave + normalize, or single-pass
//!   carry propagation
//!
//! # Example
//!
//! ```rust
//! use binomial_forest::BinomialHeap;
//!
//! let mut low = BinomialHeap::new();
//! low.add_all(0..10)?;
//! let mut high = BinomialHeap::new();
//! high.add_all(10..20)?;
//!
//! let mut all = low.merge(&high)?;
//! assert_eq!(all.len(), 20);
//! assert_eq!(all.delete_min()?, Some(0));
//! assert_eq!(low.find_min()?, Some(&0));
//! # Ok::<(), binomial_forest::HeapError>(())
//! ```

pub mod binomial;
pub mod compare;
pub mod forest;
pub mod traits;
pub mod tree;

// Re-export the main types for convenience
pub use binomial::BinomialHeap;
pub use forest::MergeStrategy;
pub use traits::{HeapError, MergeableHeap, PriorityQueue};
pub use tree::BinomialTree;
