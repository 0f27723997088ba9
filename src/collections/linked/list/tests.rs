#![cfg(test)]

use proptest::prelude::*;

use super::*;
use crate::util::alloc::CountedDrop;
use crate::util::panic::assert_panics;

/// Walks the links in both directions, checking that they agree with each other and with the
/// stored length.
fn check_links<T: PartialEq + std::fmt::Debug>(list: &LinkedList<T>) {
    let forward: Vec<&T> = {
        let mut items = Vec::new();
        let mut current = list.first_handle();
        while let Some(handle) = current {
            items.push(list.value(handle).expect("forward link to a live node"));
            current = list.next_handle(handle);
        }
        items
    };

    let mut backward: Vec<&T> = {
        let mut items = Vec::new();
        let mut current = list.last_handle();
        while let Some(handle) = current {
            items.push(list.value(handle).expect("backward link to a live node"));
            current = list.prev_handle(handle);
        }
        items
    };
    backward.reverse();

    assert_eq!(forward.len(), list.len(), "Forward walk should visit len nodes.");
    assert_eq!(forward, backward, "Forward and backward links should agree.");
}

#[test]
fn test_push_pop() {
    let mut list = LinkedList::new();
    assert!(list.is_empty());
    assert_eq!(list.pop_front(), None);

    list.push_back(2);
    list.push_front(1);
    list.push_back(3);
    check_links(&list);

    assert_eq!(list.front(), Some(&1));
    assert_eq!(list.back(), Some(&3));
    assert_eq!(list.pop_back(), Some(3));
    assert_eq!(list.pop_front(), Some(1));
    assert_eq!(list.pop_front(), Some(2));
    assert!(list.is_empty(), "Removing the only element should empty the list.");
    assert_eq!(list.first_handle(), None);
    assert_eq!(list.last_handle(), None);
}

#[test]
fn test_remove_node_splices() {
    let mut list = LinkedList::new();
    let a = list.push_back('a');
    let b = list.push_back('b');
    let c = list.push_back('c');

    assert_eq!(list.remove_node(b), Some('b'), "Interior removal.");
    assert_eq!(list.next_handle(a), Some(c), "Neighbours should be joined.");
    assert_eq!(list.prev_handle(c), Some(a), "Neighbours should be joined.");
    check_links(&list);

    assert_eq!(list.remove_node(a), Some('a'), "Head removal.");
    assert_eq!(list.first_handle(), Some(c));
    assert_eq!(list.remove_node(c), Some('c'), "Removing the last node.");
    assert!(list.is_empty());
    assert_eq!(list.remove_node(c), None, "A removed handle shouldn't remove anything.");
}

#[test]
fn test_handles_survive_other_changes() {
    let mut list: LinkedList<u32> = LinkedList::new();
    let handles: Vec<NodeHandle> = (0..6).map(|i| list.push_back(i)).collect();

    list.remove_node(handles[1]);
    list.remove_node(handles[4]);
    list.push_front(10);
    list.insert_after(handles[2], 20);

    for (i, handle) in handles.iter().enumerate() {
        if i != 1 && i != 4 {
            assert_eq!(list.value(*handle), Some(&(i as u32)), "Handle {i} should still resolve.");
        }
    }
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [10, 0, 2, 20, 3, 5]);
    check_links(&list);
}

#[test]
fn test_freed_slots_are_reused() {
    let mut list = LinkedList::new();
    list.push_back(1);
    let two = list.push_back(2);
    list.remove_node(two);

    let three = list.push_back(3);
    assert_eq!(three, two, "The released slot should be reused.");
    assert_eq!(list.nodes.slots.len(), 2, "No new slot should be allocated.");
}

#[test]
fn test_insert_around_handles() {
    let mut list = LinkedList::new();
    let middle = list.push_back("middle");
    let first = list.insert_before(middle, "first");
    list.insert_after(middle, "last");

    assert_eq!(list.first_handle(), Some(first), "Inserting before the head moves the head.");
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), ["first", "middle", "last"]);
    check_links(&list);

    let removed = list.remove_node(middle).map(|_| middle).expect("middle was live");
    assert_eq!(
        list.try_insert_after(removed, "nope"),
        Err(InvalidHandle { index: removed.0 }),
        "Inserting next to a removed node should fail."
    );
    assert_panics!({ list.clone().insert_before(removed, "nope"); }, "does not refer");
}

#[test]
fn test_index_operations() {
    let mut list: LinkedList<i32> = (0..10).collect();

    assert_eq!(*list.get(0), 0);
    assert_eq!(*list.get(7), 7, "Seeking from the back should work.");
    assert_eq!(list.try_get(10), Err(IndexOutOfBounds { index: 10, len: 10 }));

    list.insert(10, 10);
    list.insert(0, -1);
    list.insert(6, 100);
    assert_eq!(list.remove(6), 100);
    assert_eq!(list.replace(1, 50), 0);
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [-1, 50, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    assert_eq!(list.try_insert(13, 0), Err(IndexOutOfBounds { index: 13, len: 12 }));
    assert_panics!({ list.clone().remove(12); }, "out of bounds");

    let mut empty: LinkedList<i32> = LinkedList::new();
    assert_eq!(empty.try_remove(0), Err(IndexOutOfBounds { index: 0, len: 0 }));
    assert!(list.contains(&50));
    assert!(!list.contains(&0));
    assert_eq!(list.index_of(&3), Some(4));
    assert_eq!(list.index_of(&0), None);
}

#[test]
fn test_iter_both_ends() {
    let list: LinkedList<u8> = (1..=5).collect();
    let mut iter = list.iter();

    assert_eq!(iter.len(), 5);
    assert_eq!(iter.next(), Some(&1));
    assert_eq!(iter.next_back(), Some(&5));
    assert_eq!(iter.next_back(), Some(&4));
    assert_eq!(iter.next(), Some(&2));
    assert_eq!(iter.next(), Some(&3));
    assert_eq!(iter.next(), None, "The ends shouldn't cross.");
    assert_eq!(iter.next_back(), None);

    assert_eq!(list.into_iter().rev().collect::<Vec<_>>(), [5, 4, 3, 2, 1]);
}

#[test]
fn test_cursor() {
    let mut list: LinkedList<u8> = (1..=4).collect();
    let mut cursor = list.cursor();

    assert_eq!(cursor.try_remove(), Err(NoCurrentElement));
    assert_eq!(*cursor.next(), 1);
    assert_eq!(*cursor.next(), 2);
    assert!(cursor.handle().is_some());
    assert_eq!(cursor.remove(), 2);
    assert_eq!(cursor.handle(), None);
    assert_eq!(cursor.try_remove(), Err(NoCurrentElement), "Can't remove twice.");
    assert_eq!(*cursor.next(), 3);
    assert_eq!(*cursor.next(), 4);
    assert_eq!(cursor.remove(), 4, "Removing the tail through the cursor.");
    assert_eq!(cursor.try_next(), Err(NoNextElement));

    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 3]);
    check_links(&list);
}

#[test]
fn test_drops() {
    let counter = CountedDrop::counter();
    let mut list: LinkedList<CountedDrop> = (0..5).map(|_| CountedDrop::new(&counter)).collect();

    let mut index = 0;
    list.retain(|_| {
        index += 1;
        index % 2 == 0
    });
    assert_eq!(list.len(), 2);
    assert_eq!(counter.get(), 3, "Retain should drop removed elements.");

    list.clear();
    assert_eq!(counter.get(), 5, "Clear should drop every element.");
    assert!(list.is_empty());
}

proptest! {
    #[test]
    fn removal_by_handle_matches_vec(
        values in prop::collection::vec(any::<i8>(), 1..40),
        picks in prop::collection::vec(any::<prop::sample::Index>(), 0..40),
    ) {
        let mut list = LinkedList::new();
        let mut handles: Vec<NodeHandle> = values.iter().map(|v| list.push_back(*v)).collect();
        let mut expected = values.clone();

        for pick in picks {
            if handles.is_empty() {
                break;
            }
            let index = pick.index(handles.len());
            let removed = list.remove_node(handles.remove(index));
            prop_assert_eq!(removed, Some(expected.remove(index)));
        }

        prop_assert_eq!(list.iter().copied().collect::<Vec<_>>(), expected);
        check_links(&list);
    }
}
