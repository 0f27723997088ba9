#![cfg(test)]

use std::hash::{BuildHasher, Hash};
use std::rc::Rc;

use proptest::prelude::*;

use super::*;
use crate::collections::linked::NodeHandle;
use crate::util::hash::{IdentityHasherBuilder, ManualHash};
use crate::util::panic::assert_panics;

/// Checks that the index holds exactly one handle per list node, each filed under the bucket of
/// its element's hash.
fn check_index<T: Hash + Eq, B: BuildHasher>(set: &LinkedHashSet<T, B>) {
    let mut indexed: Vec<NodeHandle> = Vec::new();
    for (bucket, handles) in set.index.buckets.iter().enumerate() {
        for handle in handles.iter().flat_map(|h| h.iter()) {
            let item = set.list.value(*handle).expect("indexed handle should refer to a node");
            assert_eq!(set.index.index_for(set.hasher.hash_one(item)), bucket);
            indexed.push(*handle);
        }
    }

    let mut listed = Vec::new();
    let mut current = set.list.first_handle();
    while let Some(handle) = current {
        listed.push(handle);
        current = set.list.next_handle(handle);
    }

    assert_eq!(indexed.len(), set.len(), "The index should hold one handle per element.");
    assert_eq!(set.index.len, set.len());
    assert!(listed.iter().all(|h| indexed.contains(h)), "Every node should be indexed.");
}

fn contents<T: Hash + Eq + Clone, B: BuildHasher>(set: &LinkedHashSet<T, B>) -> Vec<T> {
    set.iter().cloned().collect()
}

#[test]
fn test_insertion_order() {
    let mut set = LinkedHashSet::<&str>::new();
    assert!(set.insert("a"));
    assert!(set.insert("b"));
    assert!(set.insert("c"));
    assert!(set.remove("b"));
    check_index(&set);

    assert_eq!(contents(&set), ["a", "c"]);
    assert!(!set.contains("b"));
    assert_eq!(set.first(), Some(&"a"));
    assert_eq!(set.last(), Some(&"c"));
}

#[test]
fn test_reinsertion_keeps_position() {
    let mut set: LinkedHashSet<i32> = [3, -10, 20, 1].into_iter().collect();
    assert!(!set.insert(-10), "Adding an existing element should return false.");
    assert_eq!(contents(&set), [3, -10, 20, 1]);

    assert_eq!(set.replace(-10), Some(-10));
    assert_eq!(contents(&set), [3, -10, 20, 1], "A replacement takes the old element's place.");

    assert_eq!(set.take(&3), Some(3));
    assert!(set.insert(3), "A removed element is appended when added again.");
    assert_eq!(contents(&set), [-10, 20, 1, 3]);
    check_index(&set);
}

#[test]
fn test_get_returns_stored_instance() {
    let mut set = LinkedHashSet::with_hasher(IdentityHasherBuilder);
    set.insert(ManualHash::new(7, "first"));
    set.insert(ManualHash::new(7, "second"));
    set.insert(ManualHash::new(24, "first"));

    assert_eq!(set.len(), 3, "Equal values with different hashes are distinct elements.");
    assert_eq!(set.get(&ManualHash::new(24, "first")).map(ManualHash::hash), Some(24));
    assert_eq!(set.get(&ManualHash::new(7, "first")).map(ManualHash::hash), Some(7));
    assert!(set.get(&ManualHash::new(7, "third")).is_none());
}

#[test]
fn test_colliding_removal() {
    let mut set = LinkedHashSet::with_cap_and_hasher(4, IdentityHasherBuilder);
    for hash in [1, 5, 9] {
        set.insert(ManualHash::new(hash, hash));
    }
    assert_eq!(set.index.buckets[1].as_ref().map(|b| b.len()), Some(3));

    assert!(set.remove(&ManualHash::new(5, 5)));
    check_index(&set);
    assert_eq!(set.iter().map(ManualHash::hash).collect::<Vec<_>>(), [1, 9]);
}

#[test]
fn test_growth() {
    let mut set: LinkedHashSet<u32> = LinkedHashSet::with_cap_and_load_factor(4, 0.75);
    for i in 1..=4 {
        set.insert(i);
    }
    assert_eq!(set.cap(), 8);

    set.insert(5);
    check_index(&set);
    assert_eq!(contents(&set), [1, 2, 3, 4, 5], "Growth shouldn't change the order.");

    let mut empty: LinkedHashSet<u32> = LinkedHashSet::with_cap(0);
    assert!(!empty.contains(&1));
    assert!(empty.insert(1));
    assert!(empty.contains(&1));
    assert!(LinkedHashSet::<u8>::try_with_cap_and_load_factor(4, -0.5).is_err());
}

#[test]
fn test_cursor() {
    let mut set: LinkedHashSet<char> = "hello world".chars().collect();
    assert_eq!(contents(&set), ['h', 'e', 'l', 'o', ' ', 'w', 'r', 'd']);

    let mut cursor = set.cursor();
    assert_eq!(cursor.try_remove(), Err(NoCurrentElement));
    while cursor.has_next() {
        if "aeiou ".contains(*cursor.next()) {
            assert!(cursor.try_remove().is_ok());
            assert_eq!(cursor.try_remove(), Err(NoCurrentElement));
            assert_panics!({ cursor.remove(); }, "no current element");
        }
    }
    assert_eq!(cursor.try_next().err(), Some(NoNextElement));
    assert_panics!({ cursor.next(); }, "no next element");

    check_index(&set);
    assert_eq!(set.iter().collect::<String>(), "hlwrd");
    assert!(!set.contains(&'o'));
}

#[test]
fn test_retain_clear_and_drops() {
    let items: Vec<Rc<u8>> = (0..10).map(Rc::new).collect();
    let mut set: LinkedHashSet<Rc<u8>> = items.iter().cloned().collect();

    set.retain(|item| **item % 3 == 0);
    check_index(&set);
    assert_eq!(contents(&set), [Rc::new(0), Rc::new(3), Rc::new(6), Rc::new(9)]);
    assert_eq!(
        items.iter().map(Rc::strong_count).collect::<Vec<_>>(),
        [2, 1, 1, 2, 1, 1, 2, 1, 1, 2],
        "Removed elements should be dropped once."
    );

    set.clear();
    assert!(set.is_empty());
    assert_eq!(set.index.len, 0);
    assert!(items.iter().all(|item| Rc::strong_count(item) == 1));
    assert!(set.insert(Rc::new(1)), "A cleared set should be reusable.");
}

#[test]
fn test_iterators() {
    let set: LinkedHashSet<u8> = [4, 8, 15, 16, 23, 42].into_iter().collect();
    assert_eq!(set.iter().rev().copied().collect::<Vec<_>>(), [42, 23, 16, 15, 8, 4]);
    assert_eq!(set.iter().len(), 6);
    assert_eq!(format!("{set}"), "#{4, 8, 15, 16, 23, 42}");

    let reordered: LinkedHashSet<u8> = [42, 23, 16, 15, 8, 4].into_iter().collect();
    assert_eq!(set, reordered, "Equality ignores order.");
    assert_eq!(set.into_iter().collect::<Vec<_>>(), [4, 8, 15, 16, 23, 42]);
}

proptest! {
    #[test]
    fn order_matches_model(ops in prop::collection::vec((any::<bool>(), 0u8..32), 0..200)) {
        let mut set: LinkedHashSet<u8> = LinkedHashSet::with_cap(1);
        let mut model: Vec<u8> = Vec::new();

        for (insert, value) in ops {
            if insert {
                let added = !model.contains(&value);
                if added {
                    model.push(value);
                }
                prop_assert_eq!(set.insert(value), added);
            } else {
                let position = model.iter().position(|v| *v == value);
                if let Some(position) = position {
                    model.remove(position);
                }
                prop_assert_eq!(set.remove(&value), position.is_some());
            }
        }

        check_index(&set);
        prop_assert_eq!(contents(&set), model);
    }
}
