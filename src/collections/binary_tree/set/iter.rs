use std::iter::FusedIterator;

use super::{NodeId, TreeSet};
use crate::collections::binary_tree::Comparator;

/// A type for borrowed iteration over a [`TreeSet`], in order. Produces values of type `&T`.
///
/// See [`TreeSet::iter`].
pub struct Iter<'a, T, C: Comparator<T>> {
    pub(crate) tree: &'a TreeSet<T, C>,
    pub(crate) front: Option<NodeId>,
    pub(crate) back: Option<NodeId>,
    pub(crate) remaining: usize,
}

impl<'a, T, C: Comparator<T>> Iter<'a, T, C> {
    pub(crate) fn new(tree: &'a TreeSet<T, C>) -> Iter<'a, T, C> {
        Iter {
            front: tree.root.map(|root| tree.least_from(root)),
            back: tree.root.map(|root| tree.greatest_from(root)),
            remaining: tree.len(),
            tree,
        }
    }
}

impl<'a, T, C: Comparator<T>> Iterator for Iter<'a, T, C> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let id = self.front?;
        self.front = self.tree.successor(id);
        self.remaining -= 1;
        Some(&self.tree.node(id).value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T, C: Comparator<T>> DoubleEndedIterator for Iter<'a, T, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let id = self.back?;
        self.back = self.tree.predecessor(id);
        self.remaining -= 1;
        Some(&self.tree.node(id).value)
    }
}

impl<'a, T, C: Comparator<T>> ExactSizeIterator for Iter<'a, T, C> {}

impl<'a, T, C: Comparator<T>> FusedIterator for Iter<'a, T, C> {}

impl<'a, T, C: Comparator<T>> IntoIterator for &'a TreeSet<T, C> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A type for owned iteration over a [`TreeSet`], in order. Produces values of type `T`.
///
/// See [`TreeSet::into_iter`].
pub struct IntoIter<T, C: Comparator<T>> {
    pub(crate) tree: TreeSet<T, C>,
}

impl<T, C: Comparator<T>> Iterator for IntoIter<T, C> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.tree.least_from(self.tree.root?);
        Some(self.tree.remove_node(id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.tree.len(), Some(self.tree.len()))
    }
}

impl<T, C: Comparator<T>> DoubleEndedIterator for IntoIter<T, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let id = self.tree.greatest_from(self.tree.root?);
        Some(self.tree.remove_node(id))
    }
}

impl<T, C: Comparator<T>> ExactSizeIterator for IntoIter<T, C> {}

impl<T, C: Comparator<T>> FusedIterator for IntoIter<T, C> {}

impl<T, C: Comparator<T>> IntoIterator for TreeSet<T, C> {
    type Item = T;

    type IntoIter = IntoIter<T, C>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { tree: self }
    }
}
