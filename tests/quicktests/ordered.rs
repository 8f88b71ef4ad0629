use ordered_tree::{OrderedTree, TreeError};

use std::collections::{BTreeSet, HashSet};

use crate::{init_tracing, Op};

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts
/// and removes both report the same results and hold the same elements.
fn do_ops<T>(ops: &[Op<T>], tree: &mut OrderedTree<T>, set: &mut BTreeSet<T>) -> bool
where
    T: Ord + Clone + std::fmt::Debug,
{
    for op in ops {
        let agreed = match op {
            Op::Insert(x) => tree.insert(x.clone()) == set.insert(x.clone()),
            Op::Remove(x) => tree.remove(x) == set.remove(x),
            Op::InsertAll(xs) => {
                let expected = xs
                    .iter()
                    .fold(true, |all, x| set.insert(x.clone()) && all);
                tree.insert_all(xs.iter().cloned()) == expected
            }
            Op::RemoveAll(xs) => {
                let expected = xs.iter().fold(false, |any, x| set.remove(x) || any);
                tree.remove_all(xs) == expected
            }
            Op::Extremes => {
                tree.first() == set.first().ok_or(TreeError::EmptyCollection)
                    && tree.last() == set.last().ok_or(TreeError::EmptyCollection)
            }
        };
        if !agreed || tree.len() != set.len() {
            return false;
        }
    }

    true
}

#[test]
fn spec_example_round_trip() {
    init_tracing();
    let mut tree = OrderedTree::new();
    tree.insert_all([5, 3, 8, 1, 4, 7, 9]);

    assert_eq!(tree.to_vec(), vec![1, 3, 4, 5, 7, 8, 9]);

    let mut without_root = tree.clone();
    assert!(without_root.remove(&5));
    assert_eq!(without_root.to_vec(), vec![1, 3, 4, 7, 8, 9]);
    assert!(without_root.to_dot().starts_with("graph d {\n\t\"3\" -- \"1\"\n"));
    assert!(without_root.to_dot().contains("\t\"7\" -- \"3\"\n"));

    assert!(tree.remove(&3));
    assert_eq!(tree.to_vec(), vec![1, 4, 5, 7, 8, 9]);
}

#[test]
fn empty_extremes_fail() {
    init_tracing();
    let tree = OrderedTree::<String>::new();

    assert_eq!(tree.first(), Err(TreeError::EmptyCollection));
    assert_eq!(tree.last(), Err(TreeError::EmptyCollection));
    assert_eq!(
        tree.first().unwrap_err().to_string(),
        "the tree contains no elements"
    );
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        init_tracing();
        let mut tree = OrderedTree::new();
        let mut set = BTreeSet::new();

        do_ops(&ops, &mut tree, &mut set) && tree.iter().eq(set.iter())
    }
}

quickcheck::quickcheck! {
    fn strictly_ascending(xs: Vec<i16>, deletes: Vec<i16>) -> bool {
        let mut tree = OrderedTree::new();
        tree.insert_all(xs);
        tree.remove_all(&deletes);

        let values = tree.to_vec();
        values.len() == tree.len() && values.windows(2).all(|w| w[0] < w[1])
    }
}

quickcheck::quickcheck! {
    fn insert_is_idempotent(xs: Vec<i8>, x: i8) -> bool {
        let mut tree = OrderedTree::new();
        tree.insert_all(xs);
        tree.insert(x);

        let len = tree.len();
        !tree.insert(x) && tree.len() == len
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let mut tree = OrderedTree::new();
        tree.insert_all(xs.iter().copied());

        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| !tree.contains(x)) && added.iter().all(|x| tree.contains(x))
    }
}

quickcheck::quickcheck! {
    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree = OrderedTree::new();
        tree.insert_all(xs.iter().copied());
        for delete in &deletes {
            tree.remove(delete);
        }

        let mut still_present = xs;
        for delete in &deletes {
            // We may have inserted the same value multiple times - delete each one.
            while let Some(pos) = still_present.iter().position(|x| x == delete) {
                still_present.swap_remove(pos);
            }
        }

        deletes.iter().all(|x| !tree.contains(x))
            && still_present.iter().all(|x| tree.contains(x))
            && tree.len() == still_present.iter().collect::<HashSet<_>>().len()
    }
}
