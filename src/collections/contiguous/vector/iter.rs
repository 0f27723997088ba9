use std::iter::FusedIterator;
use std::mem::{self, MaybeUninit};
use std::slice;

use super::Vector;
use crate::collections::contiguous::Array;

impl<T> IntoIterator for Vector<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        // Leave an empty Vector behind, so dropping self drops nothing.
        let back = mem::take(&mut self.len);
        IntoIter {
            arr: mem::take(&mut self.arr),
            front: 0,
            back,
        }
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;

    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Vector<T> {
    type Item = &'a mut T;

    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// A type for owned iteration over a [`Vector`]. See [`Vector::into_iter`].
pub struct IntoIter<T> {
    pub(crate) arr: Array<MaybeUninit<T>>,
    /// The first slot that is still initialized.
    pub(crate) front: usize,
    /// One past the last slot that is still initialized.
    pub(crate) back: usize,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }

        let index = self.front;
        self.front += 1;
        // SAFETY: Slots in front..back are initialized, and index is now outside of that range.
        Some(unsafe { self.arr[index].assume_init_read() })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }

        self.back -= 1;
        // SAFETY: Slots in front..back are initialized, and back is now outside of that range.
        Some(unsafe { self.arr[self.back].assume_init_read() })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        for slot in &mut self.arr[self.front..self.back] {
            // SAFETY: Slots in front..back are initialized and haven't been yielded.
            unsafe { slot.assume_init_drop() }
        }
    }
}
