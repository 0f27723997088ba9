use super::{Entry, EntrySet};
use crate::collections::traits::Set;

/// A borrowed iterator over the keys and values of a [`SetMap`](super::SetMap), in the iteration
/// order of its backing set.
pub struct Iter<'a, K: 'a, V: 'a, S: EntrySet<K, V> + 'a> {
    pub(crate) inner: <S as Set<Entry<K, V>>>::Iter<'a>,
}

impl<'a, K: 'a, V: 'a, S: EntrySet<K, V> + 'a> Iterator for Iter<'a, K, V, S> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Entry::tuple)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

pub struct Keys<'a, K: 'a, V: 'a, S: EntrySet<K, V> + 'a>(pub(crate) Iter<'a, K, V, S>);

impl<'a, K: 'a, V: 'a, S: EntrySet<K, V> + 'a> Iterator for Keys<'a, K, V, S> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

pub struct Values<'a, K: 'a, V: 'a, S: EntrySet<K, V> + 'a>(pub(crate) Iter<'a, K, V, S>);

impl<'a, K: 'a, V: 'a, S: EntrySet<K, V> + 'a> Iterator for Values<'a, K, V, S> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a, K: 'a, V: 'a, S: EntrySet<K, V> + 'a> IntoIterator for &'a super::SetMap<K, V, S> {
    type Item = (&'a K, &'a V);

    type IntoIter = Iter<'a, K, V, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
