#![cfg(test)]

use std::cmp::Ordering;
use std::collections::BTreeMap;

use proptest::prelude::*;

use super::*;

/// Runs the same sequence of operations against any flavour of map.
fn exercise<S: EntrySet<i32, i32>>(mut map: SetMap<i32, i32, S>) {
    assert!(map.is_empty());
    for key in [-1, 4, 7, 3] {
        assert_eq!(map.insert(key, key * key), None);
    }
    assert_eq!(map.len(), 4);

    assert_eq!(map.get(&4), Some(&16));
    assert_eq!(map.get(&5), None);
    assert_eq!(map.get_or(&5, &0), &0);
    assert!(map.contains_key(&-1));
    assert!(map.contains_value(&49));
    assert!(!map.contains_value(&50));

    assert_eq!(map.insert(4, 0), Some(16), "Inserting a present key should replace its value.");
    assert_eq!(map.get(&4), Some(&0));
    assert_eq!(map.len(), 4);

    assert_eq!(map.insert_if_absent(7, 1), Some(&49));
    assert_eq!(map.get(&7), Some(&49), "A present value shouldn't be replaced.");
    assert_eq!(map.insert_if_absent(8, 64), None);
    assert_eq!(map.get(&8), Some(&64));

    if let Some(value) = map.get_mut(&3) {
        *value += 1;
    }
    assert_eq!(map.get(&3), Some(&10));

    assert_eq!(map.remove(&-1), Some(1));
    assert_eq!(map.remove(&-1), None);
    assert_eq!(map.remove_entry(&3), Some((3, 10)));
    assert_eq!(map.len(), 3);
    assert_eq!(map.entry_set().len(), 3);

    map.retain(|key, _| key % 2 == 0);
    let mut remaining: Vec<_> = map.iter().map(|(k, v)| (*k, *v)).collect();
    remaining.sort();
    assert_eq!(remaining, [(4, 0), (8, 64)]);
    assert_eq!(map.keys().count(), map.values().count());

    map.clear();
    assert!(map.is_empty());
    assert_eq!(map.get(&4), None);
}

#[test]
fn test_hash_map() {
    let map: HashMap<i32, i32> = HashMap::new();
    exercise(map);
}

#[test]
fn test_tree_map() {
    exercise(TreeMap::new());
}

#[test]
fn test_linked_hash_map() {
    let map: LinkedHashMap<i32, i32> = LinkedHashMap::new();
    exercise(map);
}

#[test]
fn test_iteration_order() {
    let pairs = [(3, 'c'), (-10, 'a'), (20, 'd'), (1, 'b')];

    let tree: TreeMap<i32, char> = pairs.into_iter().collect();
    assert_eq!(tree.keys().copied().collect::<Vec<_>>(), [-10, 1, 3, 20]);
    assert_eq!(tree.values().collect::<String>(), "abcd");

    let linked: LinkedHashMap<i32, char> = pairs.into_iter().collect();
    assert_eq!(linked.keys().copied().collect::<Vec<_>>(), [3, -10, 20, 1]);
    assert_eq!((&linked).into_iter().count(), 4);

    let hashed: HashMap<i32, char> = pairs.into_iter().rev().collect();
    let mut keys: Vec<_> = hashed.keys().copied().collect();
    keys.sort();
    assert_eq!(keys, [-10, 1, 3, 20]);
}

#[test]
fn test_key_sets() {
    let pairs = [("one", 1), ("two", 2), ("three", 3)];

    let tree: TreeMap<&str, i32> = pairs.into_iter().collect();
    assert_eq!(tree.key_set().iter().copied().collect::<Vec<_>>(), ["one", "three", "two"]);

    let linked: LinkedHashMap<&str, i32> = pairs.into_iter().collect();
    assert_eq!(linked.key_set().iter().copied().collect::<Vec<_>>(), ["one", "two", "three"]);

    let hashed: HashMap<&str, i32> = pairs.into_iter().collect();
    let keys = hashed.key_set();
    assert_eq!(keys.len(), 3);
    assert!(pairs.iter().all(|(key, _)| keys.contains(key)));
}

#[test]
fn test_collect_keeps_last_value() {
    let map: LinkedHashMap<&str, i32> = [("x", 1), ("y", 2), ("x", 3)].into_iter().collect();
    assert_eq!(map.len(), 2);
    assert_eq!(map.get(&"x"), Some(&3));
    assert_eq!(map.keys().copied().collect::<Vec<_>>(), ["x", "y"]);

    let entries = map.into_entry_set();
    assert_eq!(entries.first().map(Entry::tuple), Some((&"x", &3)));
}

#[derive(Debug, Clone, Copy)]
struct Tagged(i32, char);

impl PartialEq for Tagged {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for Tagged {}

impl PartialOrd for Tagged {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tagged {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

#[test]
fn test_insert_keeps_stored_key() {
    let mut map = TreeMap::new();
    assert_eq!(map.insert(Tagged(1, 'a'), 1), None);
    assert_eq!(map.insert(Tagged(1, 'b'), 2), Some(1));
    assert_eq!(map.keys().map(|key| key.1).collect::<String>(), "a");
    assert_eq!(map.get(&Tagged(1, 'z')), Some(&2));
}

#[test]
fn test_equality_and_formatting() {
    let a: HashMap<i32, i32> = [(1, 1), (2, 4), (3, 9)].into_iter().collect();
    let b: HashMap<i32, i32> = [(3, 9), (1, 1), (2, 4)].into_iter().collect();
    assert_eq!(a, b);

    let c: HashMap<i32, i32> = [(3, 9), (1, 1), (2, 5)].into_iter().collect();
    assert_ne!(a, c);

    let tree: TreeMap<i32, i32> = [(3, 9), (-1, 1)].into_iter().collect();
    assert_eq!(format!("{tree}"), "{-1: 1, 3: 9}");
    assert_eq!(format!("{tree:?}"), "{-1: 1, 3: 9}");
    assert_eq!(format!("{}", Entry::new("k", 2)), "k=2");
    assert_eq!(format!("{:?}", Entry::new("k", 2)), "\"k\": 2");
}

proptest! {
    #[test]
    fn tree_map_behaves_like_btree_map(ops in prop::collection::vec((0u8..3, 0i16..40, any::<i16>()), 0..200)) {
        let mut map = TreeMap::new();
        let mut model = BTreeMap::new();

        for (op, key, value) in ops {
            match op {
                0 => { prop_assert_eq!(map.insert(key, value), model.insert(key, value)); }
                1 => { prop_assert_eq!(map.remove(&key), model.remove(&key)); }
                _ => { prop_assert_eq!(map.get(&key), model.get(&key)); }
            }
        }

        prop_assert_eq!(map.len(), model.len());
        prop_assert!(map.iter().eq(model.iter()));
    }
}
