//! Persistent binomial trees
//!
//! **Binomial Tree Bₖ**: Recursively defined:
//! - B₀ is a single node
//! - Bₖ is formed by linking two B_{k-1} trees, the one with the larger root
//!   becoming the first child of the other
//! - Bₖ has exactly 2ᵏ nodes, and its root has k children B_{k-1}, ..., B₀
//!
//! Nodes are immutable once built and shared through `Rc`. Strong references
//! flow from a node to its first child and to its next sibling; there are no
//! parent links, so the node graph is a DAG and cannot leak through cycles.
//! Linking two trees allocates a fresh winner root and a fresh copy of the
//! loser root (its sibling link changes) and shares every other node with the
//! inputs. A tree can therefore live in several heap versions at once.

use crate::compare::{Comparator, NaturalOrder};
use crate::traits::HeapError;
use std::fmt;
use std::rc::Rc;

/// Type alias for an optional shared node
type Link<T> = Option<Rc<Node<T>>>;

/// A node of a binomial tree
///
/// Each node maintains:
/// - `value`: the stored element, shared with older copies of this node
/// - `child`: first child, the child of highest degree (None if leaf)
/// - `sibling`: next node in the parent's child list, one degree lower
/// - `degree`: number of children
///
/// Children are linked head-to-tail in decreasing degree order
/// (`degree - 1`, `degree - 2`, ..., `0`).
pub struct Node<T> {
    value: Rc<T>,
    degree: usize,
    child: Link<T>,
    sibling: Link<T>,
}

impl<T> Node<T> {
    /// The element stored in this node
    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Number of children of this node
    #[inline]
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Head of the child list (the child of highest degree)
    #[inline]
    pub fn first_child(&self) -> Option<&Node<T>> {
        self.child.as_deref()
    }

    /// Next node in the parent's child list
    #[inline]
    pub fn next_sibling(&self) -> Option<&Node<T>> {
        self.sibling.as_deref()
    }

    /// Iterates the child list head-to-tail, highest degree first
    pub fn children(&self) -> Children<'_, T> {
        Children {
            next: self.first_child(),
        }
    }

    /// Number of nodes in the subtree rooted here, siblings excluded
    pub fn size(&self) -> usize {
        1 + self.children().map(Node::size).sum::<usize>()
    }

    /// Copy of this node sharing value and children, with the sibling link replaced
    fn with_sibling(&self, sibling: Link<T>) -> Node<T> {
        Node {
            value: Rc::clone(&self.value),
            degree: self.degree,
            child: self.child.clone(),
            sibling,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("degree", &self.degree)
            .field("value", &*self.value)
            .field("children", &ChildList(self))
            .finish()
    }
}

/// Renders a child list; siblings are the successive entries
struct ChildList<'a, T>(&'a Node<T>);

impl<T: fmt::Debug> fmt::Debug for ChildList<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.children()).finish()
    }
}

/// Iterator over a node's child list
pub struct Children<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Children<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next_sibling();
        Some(node)
    }
}

/// A binomial tree: a root node of degree k carrying 2ᵏ elements
///
/// # Example
///
/// ```rust
/// use binomial_forest::BinomialTree;
///
/// let left = BinomialTree::new(6).merge(BinomialTree::new(44))?;
/// let right = BinomialTree::new(10).merge(BinomialTree::new(17))?;
/// let tree = left.merge(right)?;
///
/// assert_eq!(tree.degree(), 2);
/// assert_eq!(*tree.root_value(), 6);
/// assert_eq!(tree.size(), 4);
/// # Ok::<(), binomial_forest::HeapError>(())
/// ```
pub struct BinomialTree<T> {
    /// Always has `sibling == None`
    root: Rc<Node<T>>,
}

impl<T> Clone for BinomialTree<T> {
    fn clone(&self) -> Self {
        BinomialTree {
            root: Rc::clone(&self.root),
        }
    }
}

impl<T> BinomialTree<T> {
    /// Creates a degree-0 tree holding one element
    pub fn new(value: T) -> Self {
        BinomialTree::from_node(Node {
            value: Rc::new(value),
            degree: 0,
            child: None,
            sibling: None,
        })
    }

    fn from_node(root: Node<T>) -> Self {
        debug_assert!(root.sibling.is_none());
        BinomialTree {
            root: Rc::new(root),
        }
    }

    /// Degree of the root
    #[inline]
    pub fn degree(&self) -> usize {
        self.root.degree
    }

    /// The element at the root, the minimum of the tree
    #[inline]
    pub fn root_value(&self) -> &T {
        &self.root.value
    }

    /// The root node, for structural inspection
    #[inline]
    pub fn root(&self) -> &Node<T> {
        &self.root
    }

    /// Number of elements in the tree, always `2^degree`
    pub fn size(&self) -> usize {
        self.root.size()
    }

    /// Returns true if both trees share the same root node
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.root, &other.root)
    }

    /// Links two trees of equal degree into one of degree + 1
    ///
    /// **Time Complexity**: O(1)
    ///
    /// **Algorithm**:
    /// - Compare the two roots; the smaller one wins (`self` wins ties)
    /// - The loser's root becomes the new head of the winner's child list,
    ///   with the winner's previous head as its sibling
    /// - The loser's own children stay below it
    ///
    /// Neither input is modified: both roots are rebuilt and every other node
    /// is shared.
    ///
    /// # Errors
    /// - `HeapError::DegreeMismatch` if the degrees differ
    /// - `HeapError::OrderingUnavailable` if the roots cannot be compared
    pub fn merge_by<C>(self, other: Self, comparator: &C) -> Result<Self, HeapError>
    where
        C: Comparator<T> + ?Sized,
    {
        if self.degree() != other.degree() {
            return Err(HeapError::DegreeMismatch {
                left: self.degree(),
                right: other.degree(),
            });
        }

        let (winner, loser) = if comparator.less(other.root_value(), self.root_value())? {
            (other, self)
        } else {
            (self, other)
        };

        let loser = loser.root.with_sibling(winner.root.child.clone());
        let mut root = winner.root.with_sibling(None);
        root.degree += 1;
        root.child = Some(Rc::new(loser));

        Ok(BinomialTree::from_node(root))
    }

    /// Splits off the root, returning its children as standalone trees
    ///
    /// The subtrees come back in ascending degree order (B₀ first), the order
    /// the forest merge expects. A degree-0 tree yields an empty vector.
    pub fn delete_root(&self) -> Vec<BinomialTree<T>> {
        let mut subtrees: Vec<BinomialTree<T>> = self
            .root
            .children()
            .map(|child| BinomialTree::from_node(child.with_sibling(None)))
            .collect();
        subtrees.reverse();
        subtrees
    }

    /// Consumes the tree and returns its root element
    ///
    /// The element is moved out when nothing else shares the root,
    /// and cloned otherwise.
    pub(crate) fn into_root_value(self) -> T
    where
        T: Clone,
    {
        let value = match Rc::try_unwrap(self.root) {
            Ok(node) => node.value,
            Err(shared) => Rc::clone(&shared.value),
        };
        Rc::try_unwrap(value).unwrap_or_else(|shared| T::clone(&shared))
    }
}

impl<T: Ord> BinomialTree<T> {
    /// Links two trees of equal degree using the elements' natural order
    ///
    /// See [`merge_by`](Self::merge_by).
    pub fn merge(self, other: Self) -> Result<Self, HeapError> {
        self.merge_by(other, &NaturalOrder)
    }
}

impl<T: fmt::Debug> fmt::Debug for BinomialTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BinomialTree").field(&*self.root).finish()
    }
}
