//! Property-based tests using proptest
//!
//! These tests generate random sequences of operations and verify
//! that the forest invariants and the queue semantics always hold.

use binomial_forest::compare::NaturalOrder;
use binomial_forest::forest::{carry_merge, is_normalized, merge_forests, Forest};
use binomial_forest::tree::Node;
use binomial_forest::{BinomialHeap, BinomialTree, MergeStrategy};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Add(i32),
    DeleteMin,
    MergeWith(Vec<i32>),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (-100i32..100).prop_map(Op::Add),
        2 => Just(Op::DeleteMin),
        1 => prop::collection::vec(-100i32..100, 0..20).prop_map(Op::MergeWith),
    ]
}

/// Checks that a node of degree d has children of degree d-1, ..., 0
/// and that no child is smaller than its parent
fn check_node(node: &Node<i32>) -> Result<usize, TestCaseError> {
    let degrees: Vec<usize> = node.children().map(Node::degree).collect();
    let expected: Vec<usize> = (0..node.degree()).rev().collect();
    prop_assert_eq!(degrees, expected);

    let mut size = 1;
    for child in node.children() {
        prop_assert!(child.value() >= node.value());
        size += check_node(child)?;
    }
    Ok(size)
}

fn check_heap(heap: &BinomialHeap<i32>) -> Result<(), TestCaseError> {
    prop_assert!(is_normalized(heap.forest()));
    let mut total = 0;
    for tree in heap.forest() {
        prop_assert!(tree.root().next_sibling().is_none());
        let size = check_node(tree.root())?;
        prop_assert_eq!(size, 1usize << tree.degree());
        prop_assert_eq!(size, tree.size());
        total += size;
    }
    prop_assert_eq!(total, heap.len());
    Ok(())
}

fn heap_from(values: &[i32], strategy: MergeStrategy) -> BinomialHeap<i32> {
    let mut heap = BinomialHeap::new().with_strategy(strategy);
    heap.add_all(values.iter().copied()).unwrap();
    heap
}

fn sorted(mut values: Vec<i32>) -> Vec<i32> {
    values.sort_unstable();
    values
}

/// Runs a random operation sequence against a sorted-vector model
fn test_ops_invariant(ops: Vec<Op>, strategy: MergeStrategy) -> Result<(), TestCaseError> {
    let mut heap = BinomialHeap::new().with_strategy(strategy);
    let mut model: Vec<i32> = Vec::new();

    for op in ops {
        match op {
            Op::Add(value) => {
                heap.add(value).unwrap();
                model.push(value);
            }
            Op::DeleteMin => {
                model.sort_unstable();
                let expected = if model.is_empty() {
                    None
                } else {
                    Some(model.remove(0))
                };
                prop_assert_eq!(heap.delete_min().unwrap(), expected);
            }
            Op::MergeWith(values) => {
                heap = heap.merge(&heap_from(&values, strategy)).unwrap();
                model.extend(values);
            }
        }

        check_heap(&heap)?;
        prop_assert_eq!(heap.find_min().unwrap().copied(), model.iter().min().copied());
        prop_assert_eq!(heap.is_empty(), model.is_empty());
    }

    Ok(())
}

fn forest_of(values: &[i32]) -> Forest<i32> {
    heap_from(values, MergeStrategy::Normalize)
        .forest()
        .iter()
        .cloned()
        .collect()
}

fn drain_forest(forest: Forest<i32>) -> Vec<i32> {
    let mut values = Vec::new();
    let mut stack: Vec<BinomialTree<i32>> = forest.into_iter().collect();
    while let Some(tree) = stack.pop() {
        values.push(*tree.root_value());
        stack.extend(tree.delete_root());
    }
    sorted(values)
}

proptest! {
    #[test]
    fn test_normalize_ops_invariant(ops in prop::collection::vec(op_strategy(), 0..120)) {
        test_ops_invariant(ops, MergeStrategy::Normalize)?;
    }

    #[test]
    fn test_carry_ops_invariant(ops in prop::collection::vec(op_strategy(), 0..120)) {
        test_ops_invariant(ops, MergeStrategy::Carry)?;
    }

    #[test]
    fn test_round_trip_sorted(values in prop::collection::vec(any::<i32>(), 0..200)) {
        let heap = heap_from(&values, MergeStrategy::Normalize);
        let n = values.len();
        let mut heap = heap;
        let mut drained = Vec::with_capacity(n);
        for _ in 0..n {
            drained.push(heap.delete_min().unwrap().unwrap());
        }
        prop_assert_eq!(drained, sorted(values));
        prop_assert!(heap.is_empty());
        prop_assert_eq!(heap.delete_min().unwrap(), None);
    }

    #[test]
    fn test_merge_commutes(
        a in prop::collection::vec(-50i32..50, 0..60),
        b in prop::collection::vec(-50i32..50, 0..60)
    ) {
        let left = heap_from(&a, MergeStrategy::Normalize);
        let right = heap_from(&b, MergeStrategy::Normalize);

        let ab = left.merge(&right).unwrap();
        let ba = right.merge(&left).unwrap();
        check_heap(&ab)?;
        check_heap(&ba)?;
        prop_assert_eq!(ab.into_sorted_vec().unwrap(), ba.into_sorted_vec().unwrap());
    }

    #[test]
    fn test_merge_equals_inserting(
        a in prop::collection::vec(-50i32..50, 0..60),
        b in prop::collection::vec(-50i32..50, 0..60)
    ) {
        let merged = heap_from(&a, MergeStrategy::Normalize)
            .merge(&heap_from(&b, MergeStrategy::Normalize))
            .unwrap();

        let mut inserted = heap_from(&a, MergeStrategy::Normalize);
        inserted.add_all(b.iter().copied()).unwrap();

        prop_assert_eq!(merged.len(), a.len() + b.len());
        let mut both = a.clone();
        both.extend(&b);
        let expected = sorted(both);
        prop_assert_eq!(merged.into_sorted_vec().unwrap(), expected.clone());
        prop_assert_eq!(inserted.into_sorted_vec().unwrap(), expected);
    }

    #[test]
    fn test_strategies_interchangeable(
        a in prop::collection::vec(-50i32..50, 0..80),
        b in prop::collection::vec(-50i32..50, 0..80)
    ) {
        let normalized = merge_forests(forest_of(&a), forest_of(&b), &NaturalOrder).unwrap();
        let carried = carry_merge(forest_of(&a), forest_of(&b), &NaturalOrder).unwrap();

        let degrees = |f: &Forest<i32>| f.iter().map(BinomialTree::degree).collect::<Vec<_>>();
        prop_assert!(is_normalized(&normalized));
        prop_assert!(is_normalized(&carried));
        prop_assert_eq!(degrees(&normalized), degrees(&carried));
        prop_assert_eq!(drain_forest(normalized), drain_forest(carried));
    }

    #[test]
    fn test_strategies_same_extraction_order(values in prop::collection::vec(-100i32..100, 0..150)) {
        let normalized = heap_from(&values, MergeStrategy::Normalize);
        let carried = heap_from(&values, MergeStrategy::Carry);
        prop_assert_eq!(
            normalized.into_sorted_vec().unwrap(),
            carried.into_sorted_vec().unwrap()
        );
    }

    #[test]
    fn test_clone_is_independent(
        values in prop::collection::vec(-100i32..100, 1..80),
        deletes in 0usize..80
    ) {
        let original = heap_from(&values, MergeStrategy::Normalize);
        let mut copy = original.clone();
        for _ in 0..deletes.min(values.len()) {
            copy.delete_min().unwrap();
        }
        check_heap(&copy)?;
        check_heap(&original)?;
        prop_assert_eq!(original.into_sorted_vec().unwrap(), sorted(values));
    }
}
