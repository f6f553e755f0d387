use avl::{Order, Tree};

use quickcheck::TestResult;
use std::collections::BTreeSet;

use crate::{init_tracing, Op};

/// The tallest an AVL tree holding `len` values can be.
fn max_height(len: usize) -> f64 {
    1.4405 * ((len + 2) as f64).log2()
}

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of values in both.
fn do_ops<T>(ops: &[Op<T>], mut bst: Tree<T>, set: &mut BTreeSet<T>) -> Tree<T>
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(x) => {
                bst.insert(x.clone());
                set.insert(x.clone());
            }
            Op::Remove(x) => {
                bst.remove(x);
                set.remove(x);
            }
        }
    }

    bst
}

fn tree_of<T: Ord + Clone>(xs: &[T]) -> Tree<T> {
    let mut tree = Tree::new();
    for x in xs {
        tree.insert(x.clone());
    }
    tree
}

#[quickcheck]
fn in_order_is_strictly_ascending(ops: Vec<Op<i16>>) -> bool {
    init_tracing();
    let tree = do_ops(&ops, Tree::new(), &mut BTreeSet::new());

    let values: Vec<_> = tree.in_order().collect();
    values.windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn stays_balanced(ops: Vec<Op<i8>>) -> bool {
    init_tracing();
    let tree = do_ops(&ops, Tree::new(), &mut BTreeSet::new());

    tree.check_invariants().is_ok() && (tree.height() as f64) <= max_height(tree.len())
}

#[quickcheck]
fn matches_model(ops: Vec<Op<i8>>) -> bool {
    init_tracing();
    let mut set = BTreeSet::new();
    let tree = do_ops(&ops, Tree::new(), &mut set);

    tree.len() == set.len() && tree.in_order().eq(set.iter())
}

#[quickcheck]
fn contains_exactly_what_was_inserted(xs: Vec<i8>, probes: Vec<i8>) -> bool {
    let tree = tree_of(&xs);
    let inserted: BTreeSet<_> = xs.iter().collect();

    xs.iter().all(|x| tree.contains(x))
        && probes
            .iter()
            .all(|x| tree.contains(x) == inserted.contains(x))
}

#[quickcheck]
fn removing_one_value(xs: Vec<i16>, pick: usize) -> TestResult {
    if xs.is_empty() {
        return TestResult::discard();
    }
    let target = xs[pick % xs.len()];
    let mut tree = tree_of(&xs);

    let mut expected: BTreeSet<_> = xs.into_iter().collect();
    expected.remove(&target);

    let removed = tree.remove(&target);
    TestResult::from_bool(
        removed
            && !tree.contains(&target)
            && tree.in_order().eq(expected.iter())
            && tree.check_invariants().is_ok(),
    )
}

#[quickcheck]
fn inserting_twice_is_inserting_once(xs: Vec<i8>, x: i8) -> bool {
    let mut once = tree_of(&xs);
    once.insert(x);
    let mut twice = once.clone();

    !twice.insert(x) && twice == once
}

#[quickcheck]
fn removing_absent_value_is_a_no_op(xs: Vec<i8>, x: i8) -> TestResult {
    if xs.contains(&x) {
        return TestResult::discard();
    }
    let mut tree = tree_of(&xs);
    let before = tree.clone();

    TestResult::from_bool(!tree.remove(&x) && tree == before)
}

#[quickcheck]
fn size_is_inserts_minus_removes(xs: BTreeSet<i16>, removes: usize) -> bool {
    let xs: Vec<_> = xs.into_iter().collect();
    let removes = if xs.is_empty() { 0 } else { removes % xs.len() };

    let mut tree = tree_of(&xs);
    for x in xs.iter().step_by(2).take(removes) {
        tree.remove(x);
    }
    let removed = xs.iter().step_by(2).take(removes).count();

    let expected = xs.len() - removed;
    [Order::PreOrder, Order::InOrder, Order::PostOrder]
        .iter()
        .all(|order| tree.traverse(*order).count() == expected)
        && tree.len() == expected
}

#[test]
fn three_node_rotations() {
    init_tracing();
    for trigger in [[3, 2, 1], [1, 2, 3], [3, 1, 2], [1, 3, 2]] {
        let tree = tree_of(&trigger);
        let root = tree.root().expect("three values were inserted");

        assert_eq!(root.value(), &2, "{:?}", trigger);
        assert_eq!(root.left().map(|n| *n.value()), Some(1), "{:?}", trigger);
        assert_eq!(root.right().map(|n| *n.value()), Some(3), "{:?}", trigger);
        assert_eq!(tree.pre_order().copied().collect::<Vec<_>>(), vec![2, 1, 3]);
    }
}

#[test]
fn large_sequential_workload() {
    init_tracing();
    let mut tree = Tree::new();
    for x in 0..10_000 {
        assert!(tree.insert(x));
    }
    assert!((tree.height() as f64) <= max_height(tree.len()));
    assert_eq!(tree.check_invariants(), Ok(()));

    for x in (0..10_000).filter(|x| x % 3 != 0) {
        assert!(tree.remove(&x));
    }
    assert_eq!(tree.len(), 3_334);
    assert_eq!(tree.first(), Some(&0));
    assert_eq!(tree.last(), Some(&9_999));
    assert_eq!(tree.check_invariants(), Ok(()));
    assert!(tree
        .in_order()
        .copied()
        .eq((0..10_000).filter(|x| x % 3 == 0)));
}
