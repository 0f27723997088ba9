#![cfg(test)]
#![cfg(all(feature = "binary_tree", feature = "hash", feature = "ordered"))]

use std::fmt::Debug;

use super::*;
use crate::collections::binary_tree::TreeSet;
use crate::collections::hash::HashSet;
use crate::collections::ordered::LinkedHashSet;

fn sorted<'a, I: Iterator<Item = &'a i32>>(iter: I) -> Vec<i32> {
    let mut items: Vec<i32> = iter.copied().collect();
    items.sort();
    items
}

/// Checks the contract shared by every [`Set`], through the trait alone.
fn check_contract<S: Set<i32> + Debug>(mut set: S) {
    assert!(set.is_empty());
    assert!(set.insert(5));
    assert!(set.insert(-2));
    assert!(!set.insert(5), "A duplicate shouldn't be added.");
    assert_eq!(set.len(), 2);

    assert!(set.contains(&5));
    assert!(!set.contains(&6));
    assert_eq!(set.get(&-2), Some(&-2));
    assert_eq!(set.replace(5), Some(5));
    assert_eq!(set.replace(9), None);

    assert_eq!(set.take(&9), Some(9));
    assert_eq!(set.take(&9), None);
    assert!(set.remove(&-2));
    assert!(!set.remove(&-2));
    assert_eq!(sorted(set.iter()), [5]);

    for item in 0..10 {
        set.insert(item);
    }
    set.retain(|item| item % 2 == 1);
    assert_eq!(sorted(set.iter()), [1, 3, 5, 7, 9], "{set:?}");

    set.clear();
    assert!(set.is_empty());
    assert_eq!(set.iter().count(), 0);
}

/// Checks the set algebra provided by [`Set`], for sets built from `a` and `b`.
fn check_algebra<S: Set<i32> + FromIterator<i32>>() {
    let a: S = [1, 2, 3, 4].into_iter().collect();
    let b: S = [3, 4, 5].into_iter().collect();
    let empty: S = std::iter::empty().collect();

    assert_eq!(sorted(a.union(&b)), [1, 2, 3, 4, 5]);
    assert_eq!(sorted(a.intersection(&b)), [3, 4]);
    assert_eq!(sorted(a.difference(&b)), [1, 2]);
    assert_eq!(sorted(b.difference(&a)), [5]);
    assert_eq!(sorted(a.symmetric_difference(&b)), [1, 2, 5]);

    let c: S = [2, 3].into_iter().collect();
    assert!(c.is_subset(&a));
    assert!(a.is_superset(&c));
    assert!(!a.is_subset(&b));
    assert!(empty.is_subset(&a));
    assert!(a.is_subset(&a));
    assert_eq!(sorted(a.intersection(&empty)), Vec::<i32>::new());
}

#[test]
fn test_hash_set_contract() {
    let set: HashSet<i32> = HashSet::with_cap(2);
    check_contract(set);
    check_algebra::<HashSet<i32>>();
}

#[test]
fn test_tree_set_contract() {
    check_contract(TreeSet::new());
    check_algebra::<TreeSet<i32>>();
}

#[test]
fn test_linked_hash_set_contract() {
    let set: LinkedHashSet<i32> = LinkedHashSet::with_cap(2);
    check_contract(set);
    check_algebra::<LinkedHashSet<i32>>();
}

#[test]
fn test_sorted_set_through_trait() {
    fn window<S: SortedSet<i32>>(set: &S) -> Vec<i32> {
        set.sub_set(&0, &10).iter().copied().collect()
    }

    let set: TreeSet<i32> = [-5, 0, 3, 9, 10, 12].into_iter().collect();
    assert_eq!(window(&set), [0, 3, 9]);
    assert_eq!(SortedSet::first(&set), Some(&-5));
    assert_eq!(SortedSet::last(&set), Some(&12));
    assert_eq!(SortedSet::floor(&set, &8), Some(&3));
    assert_eq!(SortedSet::ceiling(&set, &8), Some(&9));
    assert_eq!(SortedSet::ceiling(&set, &13), None);
}
