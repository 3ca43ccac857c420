//! Binomial Heap implementation
//!
//! A binomial heap is a collection of binomial trees with:
//! - O(log n) insert, find_min and delete_min
//! - O(log n + log m) merge
//!
//! # Algorithm Overview
//!
//! A binomial heap maintains a forest of binomial trees, where:
//! - Each tree satisfies the heap property
//! - At most one tree of each degree, degrees strictly increasing
//! - This is analogous to binary representation of n
//!
//! **Key Operations**:
//! - **Insert**: merge a single-node tree into the forest (like adding 1)
//! - **Find-min**: scan the roots, O(number of trees)
//! - **Delete-min**: remove the minimum root, merge its children back
//! - **Merge**: merge the two forests by degree (carry propagation)
//!
//! Every mutating operation is one forest merge (see [`crate::forest`]).
//! Trees are persistent, so the new forest is built first and swapped in
//! only once every comparison succeeded: an operation that fails leaves the
//! heap exactly as it was. Clones and merged heaps share subtrees.

use crate::compare::{Comparator, FnComparator, NaturalOrder};
use crate::forest::{Forest, MergeStrategy};
use crate::traits::{HeapError, MergeableHeap, PriorityQueue};
use crate::tree::{BinomialTree, Node};
use smallvec::smallvec;
use std::cmp::Ordering;
use std::fmt;

/// Binomial Heap
///
/// `C` decides the order of elements; it defaults to the natural order of `T`.
///
/// # Example
///
/// ```rust
/// use binomial_forest::BinomialHeap;
///
/// let mut heap = BinomialHeap::new();
/// for value in [2, 7, 5, 0, 1, 3, 6, 4] {
///     heap.add(value)?;
/// }
/// assert_eq!(heap.find_min()?, Some(&0));
///
/// let mut reversed = BinomialHeap::with_comparator(|a: &i32, b: &i32| b.cmp(a));
/// reversed.add_all([1, 9, 4])?;
/// assert_eq!(reversed.delete_min()?, Some(9));
/// # Ok::<(), binomial_forest::HeapError>(())
/// ```
pub struct BinomialHeap<T, C = NaturalOrder> {
    /// Trees ordered by strictly increasing degree
    forest: Forest<T>,
    comparator: C,
    strategy: MergeStrategy,
}

impl<T: Ord> BinomialHeap<T> {
    /// Creates an empty heap ordered by `T: Ord`
    pub fn new() -> Self {
        Self::with_order(NaturalOrder)
    }
}

impl<T: Ord> Default for BinomialHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, F> BinomialHeap<T, FnComparator<F>>
where
    F: Fn(&T, &T) -> Ordering,
{
    /// Creates an empty heap ordered by a comparator function
    pub fn with_comparator(compare: F) -> Self {
        Self::with_order(FnComparator(compare))
    }
}

impl<T, C: Comparator<T>> BinomialHeap<T, C> {
    /// Creates an empty heap ordered by any [`Comparator`]
    pub fn with_order(comparator: C) -> Self {
        Self {
            forest: Forest::new(),
            comparator,
            strategy: MergeStrategy::default(),
        }
    }

    /// Selects how forests are merged
    pub fn with_strategy(mut self, strategy: MergeStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// The merge strategy in use
    pub fn strategy(&self) -> MergeStrategy {
        self.strategy
    }

    /// The comparator ordering this heap
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// The trees of the heap, ascending by degree
    pub fn forest(&self) -> &[BinomialTree<T>] {
        &self.forest
    }

    /// Degrees of the trees, ascending
    pub fn degrees(&self) -> impl Iterator<Item = usize> + '_ {
        self.forest.iter().map(BinomialTree::degree)
    }

    /// Returns true if the heap holds no elements
    pub fn is_empty(&self) -> bool {
        self.forest.is_empty()
    }

    /// Number of elements: one tree of degree d holds 2ᵈ of them
    pub fn len(&self) -> usize {
        self.forest.iter().map(|tree| 1usize << tree.degree()).sum()
    }

    /// Iterates every element in no particular order
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            stack: self.forest.iter().rev().map(BinomialTree::root).collect(),
        }
    }

    /// Inserts an element
    ///
    /// **Time Complexity**: O(log n) worst-case
    ///
    /// **Algorithm**: wrap the element in a degree-0 tree and merge that
    /// one-tree forest into the heap, carrying like binary `n + 1`.
    ///
    /// # Errors
    /// `HeapError::OrderingUnavailable` if a link had to compare elements that
    /// cannot be ordered. The heap is unchanged.
    pub fn add(&mut self, value: T) -> Result<(), HeapError> {
        let single: Forest<T> = smallvec![BinomialTree::new(value)];
        self.forest = self
            .strategy
            .merge(self.forest.clone(), single, &self.comparator)?;
        Ok(())
    }

    /// Inserts every element of `values`
    ///
    /// Stops at the first failing insertion; elements inserted before it stay.
    pub fn add_all<I>(&mut self, values: I) -> Result<(), HeapError>
    where
        I: IntoIterator<Item = T>,
    {
        values.into_iter().try_for_each(|value| self.add(value))
    }

    /// Returns the minimum element without removing it
    ///
    /// **Time Complexity**: O(log n), a linear scan of the roots
    ///
    /// Among equal minima the root of the lowest-degree tree is returned.
    pub fn find_min(&self) -> Result<Option<&T>, HeapError> {
        Ok(self
            .min_index()?
            .map(|index| self.forest[index].root_value()))
    }

    /// Removes and returns the minimum element
    ///
    /// **Time Complexity**: O(log n) worst-case
    ///
    /// **Algorithm**:
    /// 1. Find the leftmost tree with the minimum root
    /// 2. Remove it from the forest
    /// 3. Split off its root: the children B_{k-1}, ..., B₀ are returned in
    ///    ascending degree order, already a valid forest
    /// 4. Merge the children forest with the rest of the heap
    ///
    /// The root element is moved out unless another heap version still shares
    /// that tree, in which case it is cloned.
    ///
    /// # Errors
    /// `HeapError::OrderingUnavailable` if the roots cannot be ordered. The heap
    /// is unchanged.
    pub fn delete_min(&mut self) -> Result<Option<T>, HeapError>
    where
        T: Clone,
    {
        let Some(index) = self.min_index()? else {
            return Ok(None);
        };

        let mut remaining = self.forest.clone();
        let min_tree = remaining.remove(index);
        let children: Forest<T> = min_tree.delete_root().into_iter().collect();

        self.forest = self
            .strategy
            .merge(remaining, children, &self.comparator)?;
        Ok(Some(min_tree.into_root_value()))
    }

    /// Returns a new heap holding the elements of both heaps
    ///
    /// **Time Complexity**: O(log n + log m)
    ///
    /// Neither input is modified; the result shares their trees. The result
    /// keeps this heap's comparator and strategy.
    pub fn merge(&self, other: &Self) -> Result<Self, HeapError>
    where
        C: Clone,
    {
        let forest = self
            .strategy
            .merge(self.forest.clone(), other.forest.clone(), &self.comparator)?;
        Ok(Self {
            forest,
            comparator: self.comparator.clone(),
            strategy: self.strategy,
        })
    }

    /// Moves every element of `other` into this heap
    ///
    /// On error this heap is unchanged and `other` is dropped.
    pub fn absorb(&mut self, other: Self) -> Result<(), HeapError> {
        self.forest = self
            .strategy
            .merge(self.forest.clone(), other.forest, &self.comparator)?;
        Ok(())
    }

    /// Drains the heap into a vector sorted ascending
    pub fn into_sorted_vec(mut self) -> Result<Vec<T>, HeapError>
    where
        T: Clone,
    {
        let mut sorted = Vec::with_capacity(self.len());
        while let Some(value) = self.delete_min()? {
            sorted.push(value);
        }
        Ok(sorted)
    }

    /// Index of the leftmost tree holding the minimum root
    fn min_index(&self) -> Result<Option<usize>, HeapError> {
        let mut best: Option<usize> = None;
        for (index, tree) in self.forest.iter().enumerate() {
            let better = match best {
                Some(current) => self
                    .comparator
                    .less(tree.root_value(), self.forest[current].root_value())?,
                None => true,
            };
            if better {
                best = Some(index);
            }
        }
        Ok(best)
    }
}

impl<T: Clone, C: Comparator<T>> PriorityQueue<T> for BinomialHeap<T, C> {
    fn add(&mut self, value: T) -> Result<(), HeapError> {
        BinomialHeap::add(self, value)
    }

    fn is_empty(&self) -> bool {
        BinomialHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        BinomialHeap::len(self)
    }

    fn find_min(&self) -> Result<Option<&T>, HeapError> {
        BinomialHeap::find_min(self)
    }

    fn delete_min(&mut self) -> Result<Option<T>, HeapError> {
        BinomialHeap::delete_min(self)
    }
}

impl<T: Clone, C: Comparator<T>> MergeableHeap<T> for BinomialHeap<T, C> {
    fn absorb(&mut self, other: Self) -> Result<(), HeapError> {
        BinomialHeap::absorb(self, other)
    }
}

impl<T, C: Clone> Clone for BinomialHeap<T, C> {
    /// O(log n): the trees are shared, not copied
    fn clone(&self) -> Self {
        Self {
            forest: self.forest.clone(),
            comparator: self.comparator.clone(),
            strategy: self.strategy,
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for BinomialHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinomialHeap")
            .field("strategy", &self.strategy)
            .field("forest", &&*self.forest)
            .finish()
    }
}

impl<'a, T, C: Comparator<T>> IntoIterator for &'a BinomialHeap<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over the elements of a [`BinomialHeap`]
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.next_sibling());
        self.stack.extend(node.first_child());
        Some(node.value())
    }
}
