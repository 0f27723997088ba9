use std::hash::{BuildHasher, Hash};
use std::iter::FusedIterator;
use std::slice;

use super::HashSet;
use crate::collections::contiguous::{array, vector};
use crate::collections::hash::table::{Bucket, Table};

/// A type for borrowed iteration over a [`HashSet`]. Produces values of type `&T`.
///
/// See [`HashSet::iter`].
pub struct Iter<'a, T> {
    pub(crate) buckets: slice::Iter<'a, Bucket<T>>,
    pub(crate) current: slice::Iter<'a, T>,
    pub(crate) remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(table: &'a Table<T>) -> Iter<'a, T> {
        Iter {
            buckets: table.buckets.iter(),
            current: Default::default(),
            remaining: table.len,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.current.next() {
                self.remaining -= 1;
                return Some(item);
            }

            // Empty buckets are skipped, the loop ends once the last bucket is exhausted.
            if let Some(bucket) = self.buckets.next()? {
                self.current = bucket.iter();
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T: Hash + Eq, B: BuildHasher> IntoIterator for &'a HashSet<T, B> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A type for owned iteration over a [`HashSet`]. Produces values of type `T`.
///
/// See [`HashSet::into_iter`].
pub struct IntoIter<T> {
    pub(crate) buckets: array::IntoIter<Bucket<T>>,
    pub(crate) current: Option<vector::IntoIter<T>>,
    pub(crate) remaining: usize,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.current.as_mut().and_then(Iterator::next) {
                self.remaining -= 1;
                return Some(item);
            }

            if let Some(bucket) = self.buckets.next()? {
                self.current = Some(bucket.into_iter());
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: Hash + Eq, B: BuildHasher> IntoIterator for HashSet<T, B> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            remaining: self.table.len,
            buckets: self.table.buckets.into_iter(),
            current: None,
        }
    }
}
