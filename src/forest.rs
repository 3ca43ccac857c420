//! Forest merging
//!
//! A forest is a sequence of binomial trees ordered by strictly increasing
//! degree, at most one tree per degree. A heap of n elements holds one tree
//! for each set bit of n, so merging two forests is binary addition:
//! two trees of degree d link into a carry of degree d + 1.
//!
//! Two interchangeable procedures are provided:
//!
//! - [`merge_forests`]: interleave both inputs by degree, linking equal-degree
//!   pairs on the way, then [`normalize`] the result to resolve carries
//! - [`carry_merge`]: a single pass over degree slots with an explicit carry,
//!   like a ripple-carry adder
//!
//! Both consume their inputs and build a fresh sequence; no sequence is ever
//! edited while being walked.

use crate::compare::Comparator;
use crate::traits::HeapError;
use crate::tree::BinomialTree;
use smallvec::SmallVec;
use std::cmp::Ordering;
use std::iter::Peekable;

/// Trees of a heap, ascending by degree
///
/// A forest of n elements has at most ⌊log₂ n⌋ + 1 trees, so small heaps
/// never allocate.
pub type Forest<T> = SmallVec<[BinomialTree<T>; 8]>;

/// How a heap combines forests
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MergeStrategy {
    /// Interleave by degree, then normalize adjacent duplicates
    #[default]
    Normalize,
    /// Single-pass carry propagation over degree slots
    Carry,
}

impl MergeStrategy {
    /// Merges two forests with this strategy
    pub fn merge<T, C>(
        self,
        left: Forest<T>,
        right: Forest<T>,
        comparator: &C,
    ) -> Result<Forest<T>, HeapError>
    where
        C: Comparator<T> + ?Sized,
    {
        match self {
            MergeStrategy::Normalize => merge_forests(left, right, comparator),
            MergeStrategy::Carry => carry_merge(left, right, comparator),
        }
    }
}

/// Merges two forests by interleaving and then normalizing
///
/// **Time Complexity**: O(log n + log m)
///
/// **Algorithm**:
/// 1. Walk both forests with one cursor each
/// 2. Unequal degrees: emit the lower-degree tree, advance that cursor
/// 3. Equal degrees: link the pair into a tree of degree + 1, emit it,
///    advance both cursors
/// 4. Drain whichever side remains
/// 5. [`normalize`] the result, which may now hold two trees of one degree
pub fn merge_forests<T, C>(
    left: Forest<T>,
    right: Forest<T>,
    comparator: &C,
) -> Result<Forest<T>, HeapError>
where
    C: Comparator<T> + ?Sized,
{
    if left.is_empty() {
        return Ok(right);
    }
    if right.is_empty() {
        return Ok(left);
    }

    let mut interleaved = Forest::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let heads = (
            left.peek().map(BinomialTree::degree),
            right.peek().map(BinomialTree::degree),
        );
        match heads {
            (Some(a), Some(b)) => match a.cmp(&b) {
                Ordering::Less => interleaved.extend(left.next()),
                Ordering::Greater => interleaved.extend(right.next()),
                Ordering::Equal => {
                    if let (Some(a), Some(b)) = (left.next(), right.next()) {
                        interleaved.push(a.merge_by(b, comparator)?);
                    }
                }
            },
            (Some(_), None) => {
                interleaved.extend(left);
                break;
            }
            (None, Some(_)) => {
                interleaved.extend(right);
                break;
            }
            (None, None) => break,
        }
    }

    normalize(interleaved, comparator)
}

/// Links adjacent trees of equal degree until every degree is unique
///
/// **Time Complexity**: O(number of trees)
///
/// The input must be sorted by non-decreasing degree; any degree may repeat
/// any number of times. Degrees are resolved from the lowest upward, like
/// adding up a column of bits: the trees of degree d, together with the
/// carries linked at degree d - 1, are paired off left to right into carries
/// of degree d + 1. An odd count leaves the first tree behind in the output,
/// so three trees of one degree keep the first and link the other two.
pub fn normalize<T, C>(trees: Forest<T>, comparator: &C) -> Result<Forest<T>, HeapError>
where
    C: Comparator<T> + ?Sized,
{
    let mut normalized = Forest::with_capacity(trees.len());
    let mut pending = trees.into_iter().peekable();
    let mut carries: Forest<T> = Forest::new();

    loop {
        let lowest = carries
            .first()
            .map(BinomialTree::degree)
            .into_iter()
            .chain(pending.peek().map(BinomialTree::degree))
            .min();

        let Some(degree) = lowest else {
            break;
        };

        let mut column = std::mem::take(&mut carries);
        while let Some(tree) = take_degree(&mut pending, degree) {
            column.push(tree);
        }

        let odd = column.len() % 2 == 1;
        let mut column = column.into_iter();
        if odd {
            normalized.extend(column.next());
        }
        while let (Some(a), Some(b)) = (column.next(), column.next()) {
            carries.push(a.merge_by(b, comparator)?);
        }
    }

    Ok(normalized)
}

/// Merges two forests in one pass with explicit carry propagation
///
/// **Time Complexity**: O(log n + log m)
///
/// **Algorithm**: for each degree d from the lowest upward, collect the
/// trees of degree d from both inputs and the carry:
/// - one tree: emit it
/// - two trees: link them, the result becomes the carry for d + 1
/// - three trees: emit the carry, link the other two into the next carry
///
/// Both inputs must already be normalized.
pub fn carry_merge<T, C>(
    left: Forest<T>,
    right: Forest<T>,
    comparator: &C,
) -> Result<Forest<T>, HeapError>
where
    C: Comparator<T> + ?Sized,
{
    let mut merged = Forest::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    let mut carry: Option<BinomialTree<T>> = None;

    loop {
        let lowest = [
            left.peek().map(BinomialTree::degree),
            right.peek().map(BinomialTree::degree),
            carry.as_ref().map(BinomialTree::degree),
        ]
        .into_iter()
        .flatten()
        .min();

        let Some(degree) = lowest else {
            break;
        };

        // A carry of degree d + 1 is produced only once both inputs are past d,
        // so whenever it exists it sits at the lowest pending degree.
        let slot = (
            take_degree(&mut left, degree),
            take_degree(&mut right, degree),
            carry.take(),
        );

        match slot {
            (Some(a), Some(b), rest) => {
                merged.extend(rest);
                carry = Some(a.merge_by(b, comparator)?);
            }
            (Some(tree), None, Some(c)) | (None, Some(tree), Some(c)) => {
                carry = Some(c.merge_by(tree, comparator)?);
            }
            (Some(tree), None, None) | (None, Some(tree), None) | (None, None, Some(tree)) => {
                merged.push(tree);
            }
            (None, None, None) => break,
        }
    }

    Ok(merged)
}

fn take_degree<T, I>(trees: &mut Peekable<I>, degree: usize) -> Option<BinomialTree<T>>
where
    I: Iterator<Item = BinomialTree<T>>,
{
    trees.next_if(|tree| tree.degree() == degree)
}

/// Returns true if degrees strictly increase along the forest
pub fn is_normalized<T>(forest: &[BinomialTree<T>]) -> bool {
    forest.windows(2).all(|pair| pair[0].degree() < pair[1].degree())
}
