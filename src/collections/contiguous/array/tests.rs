#![cfg(test)]

use std::mem::MaybeUninit;

use super::*;
use crate::util::alloc::CountedDrop;

#[test]
fn test_repeat() {
    let arr = Array::<u8>::repeat_default(4);
    assert_eq!(&*arr, &[0_u8; 4], "All elements should be the default value.");

    let mut count = 0;
    let arr = Array::repeat_with(3, || {
        count += 2;
        count
    });
    assert_eq!(&*arr, &[2, 4, 6], "Elements should be produced in order.");
    assert_eq!(arr.size(), 3);
}

#[test]
fn test_realloc_keeps_prefix() {
    let mut arr = Array::<u16>::new_uninit(3);
    for (i, slot) in arr.iter_mut().enumerate() {
        *slot = MaybeUninit::new(i as u16 * 10);
    }

    arr.realloc(5, 3);
    assert_eq!(arr.size(), 5, "Realloc should change the size.");

    // SAFETY: The first three slots were initialized and moved across by realloc.
    let kept: Vec<u16> = arr[..3].iter().map(|slot| unsafe { slot.assume_init() }).collect();
    assert_eq!(kept, [0, 10, 20], "Realloc should keep the first elements in order.");
}

#[test]
fn test_into_iter_drops_rest() {
    let counter = CountedDrop::counter();
    let arr = Array::repeat_with(4, || CountedDrop::new(&counter));

    let mut iter = arr.into_iter();
    drop(iter.next());
    assert_eq!(counter.get(), 1, "Yielded element should be dropped by the caller.");

    drop(iter);
    assert_eq!(counter.get(), 4, "Remaining elements should be dropped with the iterator.");
}

#[test]
fn test_from_iter() {
    let arr: Array<char> = "abc".chars().collect();
    assert_eq!(arr.size(), 3);
    assert_eq!(arr.iter().rev().collect::<String>(), "cba");
    assert_eq!(arr.into_iter().len(), 3);
}
