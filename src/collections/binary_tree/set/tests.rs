#![cfg(test)]

use std::cmp::Ordering;
use std::fmt::Debug;

use proptest::prelude::*;
use rstest::{fixture, rstest};

use super::*;
use crate::collections::binary_tree::Comparator;
use crate::collections::traits::SortedSet;
use crate::util::alloc::CountedDrop;
use crate::util::panic::assert_panics;

/// Checks that every child links back to its parent, that the tree is ordered by its comparator
/// and that the number of reachable nodes matches the length.
fn check_tree<T: Debug, C: Comparator<T>>(tree: &TreeSet<T, C>) {
    let mut reachable = 0;
    let mut pending = vec![(tree.root, None)];

    while let Some((id, parent)) = pending.pop() {
        let Some(id) = id else { continue };
        reachable += 1;

        let node = tree.node(id);
        assert_eq!(node.parent, parent, "Node {:?} has the wrong parent.", node.value);
        pending.push((node.left, Some(id)));
        pending.push((node.right, Some(id)));
    }
    assert_eq!(reachable, tree.len(), "Every stored node should be reachable from the root.");

    let values: Vec<&T> = tree.iter().collect();
    for pair in values.windows(2) {
        assert_eq!(
            tree.order(pair[0], pair[1]),
            Ordering::Less,
            "Iteration should be strictly ascending, found {:?} before {:?}.", pair[0], pair[1]
        );
    }
}

fn contents<T: Clone, C: Comparator<T>>(tree: &TreeSet<T, C>) -> Vec<T> {
    tree.iter().cloned().collect()
}

#[fixture]
fn scenario() -> TreeSet<i32> {
    let set: TreeSet<i32> = [3, -10, 20, 1, 10, 8, 100, 17].into_iter().collect();
    check_tree(&set);
    set
}

#[rstest]
fn test_scenario_order(scenario: TreeSet<i32>) {
    assert_eq!(scenario.len(), 8);
    assert_eq!(contents(&scenario), [-10, 1, 3, 8, 10, 17, 20, 100]);
    assert_eq!(scenario.first(), Some(&-10));
    assert_eq!(scenario.last(), Some(&100));
    assert_eq!(scenario.iter().rev().copied().collect::<Vec<_>>(), [100, 20, 17, 10, 8, 3, 1, -10]);
}

#[rstest]
#[case(3, Some(3))]
#[case(4, Some(3))]
#[case(9, Some(8))]
#[case(-10, Some(-10))]
#[case(1000, Some(100))]
#[case(-256, None)]
fn test_floor(scenario: TreeSet<i32>, #[case] item: i32, #[case] expected: Option<i32>) {
    assert_eq!(scenario.floor(&item).copied(), expected);
}

#[rstest]
#[case(3, Some(3))]
#[case(4, Some(8))]
#[case(18, Some(20))]
#[case(-11, Some(-10))]
#[case(256, None)]
fn test_ceiling(scenario: TreeSet<i32>, #[case] item: i32, #[case] expected: Option<i32>) {
    assert_eq!(scenario.ceiling(&item).copied(), expected);
}

#[rstest]
#[case(10, 20, vec![10, 17])]
#[case(9, 21, vec![10, 17, 20])]
#[case(-100, 2, vec![-10, 1])]
#[case(20, 10, vec![])]
#[case(101, 200, vec![])]
fn test_sub_set(scenario: TreeSet<i32>, #[case] from: i32, #[case] to: i32, #[case] expected: Vec<i32>) {
    let sub = scenario.sub_set(&from, &to);
    check_tree(&sub);
    assert_eq!(contents(&sub), expected);
    assert_eq!(scenario.len(), 8, "The original set should be untouched.");
}

#[rstest]
fn test_lookup_and_insert(mut scenario: TreeSet<i32>) {
    assert_eq!(scenario.get(&-10), Some(&-10));
    assert_eq!(scenario.get(&100000), None);
    assert!(scenario.contains(&17));
    assert!(!scenario.insert(17), "Adding an existing element should return false.");
    assert_eq!(scenario.len(), 8);
    assert!(scenario.insert(9));
    assert_eq!(scenario.replace(9), Some(9));
    assert_eq!(scenario.len(), 9);
    check_tree(&scenario);
}

#[rstest]
fn test_height_and_width(scenario: TreeSet<i32>) {
    assert_eq!(scenario.height(), 4);
    assert_eq!(scenario.width(), 4, "The leaves are 1, 8, 17 and 100.");

    let empty: TreeSet<i32> = TreeSet::new();
    assert_eq!(empty.height(), 0);
    assert_eq!(empty.width(), 0);
}

#[rstest]
fn test_remove_leaf(mut scenario: TreeSet<i32>) {
    assert!(scenario.remove(&8));
    check_tree(&scenario);
    assert_eq!(contents(&scenario), [-10, 1, 3, 10, 17, 20, 100]);
    assert!(!scenario.remove(&8), "Removing an absent element should return false.");
}

#[rstest]
fn test_remove_single_child(mut scenario: TreeSet<i32>) {
    assert_eq!(scenario.take(&-10), Some(-10));
    check_tree(&scenario);
    assert_eq!(contents(&scenario), [1, 3, 8, 10, 17, 20, 100]);
}

#[rstest]
fn test_remove_junction(mut scenario: TreeSet<i32>) {
    let root = scenario.root;
    assert!(scenario.remove(&3), "The root has two children.");
    check_tree(&scenario);
    assert_eq!(scenario.root, root, "A junction keeps its place and takes its predecessor's value.");
    assert_eq!(scenario.node(scenario.root.expect("root")).value, 1);

    assert!(scenario.remove(&20));
    assert!(scenario.remove(&10));
    check_tree(&scenario);
    assert_eq!(contents(&scenario), [-10, 1, 8, 17, 100]);
}

#[test]
fn test_remove_root_until_empty() {
    let mut set: TreeSet<u8> = [2, 1, 3].into_iter().collect();
    for item in [2, 1, 3] {
        assert!(set.remove(&item));
        check_tree(&set);
    }

    assert!(set.is_empty());
    assert_eq!(set.root, None);
    assert_eq!(set.first(), None);
    assert_eq!(set.floor(&2), None, "Queries on an empty tree should find nothing.");
}

#[rstest]
fn test_invert(mut scenario: TreeSet<i32>) {
    scenario.invert();
    check_tree(&scenario);
    assert!(scenario.is_inverted());
    assert_eq!(contents(&scenario), [100, 20, 17, 10, 8, 3, 1, -10]);
    assert_eq!(scenario.first(), Some(&100));
    assert!(scenario.contains(&8), "Lookups should follow the reversed order.");

    assert!(scenario.insert(9));
    assert!(scenario.remove(&20));
    check_tree(&scenario);
    assert_eq!(contents(&scenario), [100, 17, 10, 9, 8, 3, 1, -10]);

    assert_eq!(scenario.floor(&4), Some(&8), "Floor follows the iteration order when inverted.");
    assert_eq!(contents(&scenario.sub_set(&17, &3)), [17, 10, 9, 8]);

    scenario.invert();
    check_tree(&scenario);
    assert_eq!(contents(&scenario), [-10, 1, 3, 8, 9, 10, 17, 100]);
}

#[rstest]
#[case(0, 0)]
#[case(1, 1)]
#[case(7, 3)]
#[case(8, 4)]
#[case(100, 7)]
fn test_rebalance(#[case] len: i32, #[case] height: usize) {
    let mut set: TreeSet<i32> = (0..len).collect();
    assert_eq!(set.height(), len as usize, "Sorted insertion builds a chain.");

    set.rebalance();
    check_tree(&set);
    assert_eq!(set.height(), height);
    assert_eq!(contents(&set), (0..len).collect::<Vec<_>>());
}

#[rstest]
fn test_rebalance_inverted(mut scenario: TreeSet<i32>) {
    scenario.invert();
    scenario.rebalance();
    check_tree(&scenario);
    assert_eq!(scenario.height(), 4);
    assert_eq!(contents(&scenario), [100, 20, 17, 10, 8, 3, 1, -10]);
    assert!(scenario.contains(&-10));
}

#[rstest]
fn test_display(mut scenario: TreeSet<i32>) {
    assert_eq!(
        scenario.display_rotated().to_string(),
        "    100\n  20\n      17\n    10\n      8\n3\n    1\n  -10\n"
    );
    assert_eq!(
        scenario.display_parent_children().to_string(),
        "3\n  -10\n    1\n  20\n    10\n      8\n      17\n    100\n"
    );
    assert_eq!(format!("{scenario}"), "#{-10, 1, 3, 8, 10, 17, 20, 100}");

    scenario.set_symbols_per_level(1);
    assert_eq!(scenario.symbols_per_level(), 1);
    assert!(scenario.display_rotated().to_string().starts_with("  100\n 20\n"));
}

#[test]
fn test_debug() {
    let set: TreeSet<u8> = [2, 1].into_iter().collect();
    assert_eq!(
        format!("{set:?}"),
        "TreeSet { nodes: \n┌    ┌    -\n┌    (1)\n┌    └    -\n(2)\n└    -\n, len: 2, inverted: false }"
    );
}

#[test]
fn test_comparator() {
    let mut set = TreeSet::with_comparator(|a: &&str, b: &&str| a.len().cmp(&b.len()));
    assert!(set.insert("three"));
    assert!(set.insert("a"));
    assert!(!set.insert("seven"), "Equal by length means equal in the set.");
    assert_eq!(set.replace("seven"), Some("three"));
    assert_eq!(contents(&set), ["a", "seven"]);
    assert_eq!(set.ceiling(&"ab"), Some(&"seven"));
}

#[rstest]
fn test_cursor(mut scenario: TreeSet<i32>) {
    let mut cursor = scenario.cursor();
    assert_eq!(cursor.try_remove(), Err(NoCurrentElement));

    let mut seen = Vec::new();
    while cursor.has_next() {
        let value = *cursor.next();
        seen.push(value);
        if value == 3 || value == 20 || value == 100 {
            cursor.remove();
            assert_eq!(cursor.try_remove(), Err(NoCurrentElement), "Can't remove twice.");
        }
    }
    assert_eq!(cursor.try_next().err(), Some(NoNextElement));
    assert_panics!({ cursor.next(); }, "no next element");

    assert_eq!(seen, [-10, 1, 3, 8, 10, 17, 20, 100], "Removing junctions shouldn't skip anything.");
    check_tree(&scenario);
    assert_eq!(contents(&scenario), [-10, 1, 8, 10, 17]);
}

#[rstest]
fn test_retain_and_clear(mut scenario: TreeSet<i32>) {
    scenario.retain(|n| n % 2 == 0);
    check_tree(&scenario);
    assert_eq!(contents(&scenario), [-10, 8, 10, 20, 100]);

    scenario.clear();
    assert!(scenario.is_empty());
    assert_eq!(scenario.iter().next(), None);
    assert!(scenario.insert(1), "A cleared set should be reusable.");
}

#[rstest]
fn test_into_iter(scenario: TreeSet<i32>) {
    let mut iter = scenario.into_iter();
    assert_eq!(iter.len(), 8);
    assert_eq!(iter.next(), Some(-10));
    assert_eq!(iter.next_back(), Some(100));
    assert_eq!(iter.collect::<Vec<_>>(), [1, 3, 8, 10, 17, 20]);
}

#[test]
fn test_drops() {
    let counter = CountedDrop::counter();
    let mut set = TreeSet::with_comparator(|a: &(u8, CountedDrop), b: &(u8, CountedDrop)| a.0.cmp(&b.0));
    for i in [4, 2, 6, 1, 3, 5, 7] {
        set.insert((i, CountedDrop::new(&counter)));
    }

    set.rebalance();
    assert_eq!(counter.get(), 0, "Rebalancing moves values without dropping them.");

    set.retain(|(i, _)| i % 2 == 0);
    assert_eq!(counter.get(), 4);

    drop(set);
    assert_eq!(counter.get(), 7);
}

#[rstest]
fn test_sorted_set_trait(scenario: TreeSet<i32>) {
    fn bounds<S: SortedSet<i32>>(set: &S) -> (Option<&i32>, Option<&i32>, usize) {
        (set.floor(&9), set.ceiling(&4), set.sub_set(&10, &20).len())
    }

    assert_eq!(bounds(&scenario), (Some(&8), Some(&8), 2));
}

proptest! {
    #[test]
    fn behaves_like_btree_set(ops in prop::collection::vec((any::<bool>(), -50i16..50), 0..200)) {
        let mut set = TreeSet::new();
        let mut expected = std::collections::BTreeSet::new();

        for (insert, value) in ops {
            if insert {
                prop_assert_eq!(set.insert(value), expected.insert(value));
            } else {
                prop_assert_eq!(set.remove(&value), expected.remove(&value));
            }
        }

        check_tree(&set);
        prop_assert_eq!(contents(&set), expected.iter().copied().collect::<Vec<_>>());
        prop_assert_eq!(set.first(), expected.first());
        prop_assert_eq!(set.last(), expected.last());
    }

    #[test]
    fn floor_and_ceiling_bound_the_item(values in prop::collection::vec(-100i32..100, 1..50), item in -120i32..120) {
        let set: TreeSet<i32> = values.iter().copied().collect();

        if let Some(floor) = set.floor(&item) {
            prop_assert!(*floor <= item);
            prop_assert!(values.iter().all(|v| *v > item || v <= floor));
        } else {
            prop_assert!(values.iter().all(|v| *v > item));
        }

        if let Some(ceiling) = set.ceiling(&item) {
            prop_assert!(*ceiling >= item);
            prop_assert!(values.iter().all(|v| *v < item || v >= ceiling));
        } else {
            prop_assert!(values.iter().all(|v| *v < item));
        }
    }

    #[test]
    fn rebalance_gives_minimum_height(values in prop::collection::vec(any::<u16>(), 0..300)) {
        let mut set: TreeSet<u16> = values.iter().copied().collect();
        set.rebalance();
        check_tree(&set);

        let minimum = (usize::BITS - set.len().leading_zeros()) as usize;
        prop_assert_eq!(set.height(), minimum);
    }
}
