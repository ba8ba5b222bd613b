use std::collections::BTreeSet;

use ordset::rbt::Tree;
use quickcheck_macros::quickcheck;

use crate::Op;

/// Applies a set of operations to a tree and a std set. This way we can
/// ensure that after a random smattering of inserts and removes both
/// hold the same values.
fn do_ops(ops: &[Op<i8>], tree: &mut Tree<i8>, set: &mut BTreeSet<i8>) {
    for op in ops {
        match *op {
            Op::Insert(v) => assert_eq!(tree.insert(v), set.insert(v)),
            Op::Remove(v) => assert_eq!(tree.remove(&v), set.remove(&v)),
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    tree.len() == set.len()
        && tree.iter().eq(set.iter())
        && set.iter().all(|v| tree.contains(v))
}

#[quickcheck]
fn min_max_agree_with_std(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    tree.min() == set.first() && tree.max() == set.last()
}

#[quickcheck]
fn insert_remove_insert_round_trips(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }
    for x in &xs {
        tree.remove(x);
    }
    if !tree.is_empty() {
        return false;
    }
    for x in &xs {
        tree.insert(*x);
    }

    let expected: BTreeSet<i8> = xs.into_iter().collect();
    tree.iter().eq(expected.iter())
}

#[quickcheck]
fn reverse_comparator_reverses_in_order(xs: Vec<i8>) -> bool {
    let ascending: Tree<i8> = xs.iter().copied().collect();
    let descending = Tree::from_iter_with(|a: &i8, b: &i8| b.cmp(a), xs);

    let forward: Vec<_> = ascending.iter().copied().collect();
    let mut backward: Vec<_> = descending.iter().copied().collect();
    backward.reverse();
    forward == backward
}

#[quickcheck]
fn clone_preserves_traversals(xs: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.into_iter().collect();
    let copy = tree.clone();
    tree.len() == copy.len()
        && tree.iter().eq(copy.iter())
        && tree.pre_order().eq(copy.pre_order())
        && tree.level_order().eq(copy.level_order())
}

#[quickcheck]
fn agrees_with_plain_bst(ops: Vec<Op<i8>>) -> bool {
    let mut balanced = Tree::new();
    let mut plain = ordset::bst::Tree::new();
    for op in &ops {
        match *op {
            Op::Insert(v) => assert_eq!(balanced.insert(v), plain.insert(v)),
            Op::Remove(v) => assert_eq!(balanced.remove(&v), plain.remove(&v)),
        }
    }
    balanced.len() == plain.len() && balanced.iter().eq(plain.iter())
}
