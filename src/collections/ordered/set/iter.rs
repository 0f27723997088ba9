use std::hash::{BuildHasher, Hash};
use std::iter::FusedIterator;

use super::LinkedHashSet;
use crate::collections::linked::list;

/// A type for borrowed iteration over a [`LinkedHashSet`], in insertion order. Produces values of
/// type `&T`.
///
/// See [`LinkedHashSet::iter`].
pub struct Iter<'a, T>(pub(crate) list::Iter<'a, T>);

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back()
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T: Hash + Eq, B: BuildHasher> IntoIterator for &'a LinkedHashSet<T, B> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A type for owned iteration over a [`LinkedHashSet`], in insertion order. Produces values of
/// type `T`.
///
/// See [`LinkedHashSet::into_iter`].
pub struct IntoIter<T>(pub(crate) list::IntoIter<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: Hash + Eq, B: BuildHasher> IntoIterator for LinkedHashSet<T, B> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self.list.into_iter())
    }
}
