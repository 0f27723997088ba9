use std::fmt::{self, Debug, Display, Formatter};
#[cfg(any(feature = "hash", feature = "ordered"))]
use std::hash::{BuildHasher, Hash, RandomState};
use std::marker::PhantomData;
use std::mem;

use super::{Entry, Iter, Keys, Values};
#[cfg(feature = "binary_tree")]
use crate::collections::binary_tree::{Comparator, TreeSet};
#[cfg(feature = "hash")]
use crate::collections::hash::HashSet;
#[cfg(feature = "ordered")]
use crate::collections::ordered::LinkedHashSet;
use crate::collections::traits::Set;
use crate::collections::contiguous::Vector;

/// A [`Set`] of [`Entry`]s that can be searched, and updated in place, by key.
///
/// Implemented for every set type in this crate, each of which stores entries by their key.
pub trait EntrySet<K, V>: Set<Entry<K, V>> {
    /// Returns the entry with a key equal to `key`.
    fn entry(&self, key: &K) -> Option<&Entry<K, V>>;

    /// Returns the entry with a key equal to `key`, with mutable access to its value.
    fn entry_mut(&mut self, key: &K) -> Option<&mut Entry<K, V>>;

    /// Removes and returns the entry with a key equal to `key`.
    fn take_entry(&mut self, key: &K) -> Option<Entry<K, V>>;
}

#[cfg(feature = "hash")]
impl<K: Hash + Eq, V, B: BuildHasher> EntrySet<K, V> for HashSet<Entry<K, V>, B> {
    fn entry(&self, key: &K) -> Option<&Entry<K, V>> {
        self.get(key)
    }

    fn entry_mut(&mut self, key: &K) -> Option<&mut Entry<K, V>> {
        self.get_mut(key)
    }

    fn take_entry(&mut self, key: &K) -> Option<Entry<K, V>> {
        self.take(key)
    }
}

#[cfg(feature = "binary_tree")]
impl<K, V, C> EntrySet<K, V> for TreeSet<Entry<K, V>, C>
where
    C: Comparator<Entry<K, V>> + Comparator<K>,
{
    fn entry(&self, key: &K) -> Option<&Entry<K, V>> {
        self.get(key)
    }

    fn entry_mut(&mut self, key: &K) -> Option<&mut Entry<K, V>> {
        self.get_mut(key)
    }

    fn take_entry(&mut self, key: &K) -> Option<Entry<K, V>> {
        self.take(key)
    }
}

#[cfg(feature = "ordered")]
impl<K: Hash + Eq, V, B: BuildHasher> EntrySet<K, V> for LinkedHashSet<Entry<K, V>, B> {
    fn entry(&self, key: &K) -> Option<&Entry<K, V>> {
        self.get(key)
    }

    fn entry_mut(&mut self, key: &K) -> Option<&mut Entry<K, V>> {
        self.get_mut(key)
    }

    fn take_entry(&mut self, key: &K) -> Option<Entry<K, V>> {
        self.take(key)
    }
}

/// A map that stores its entries in a set of type `S`. The choice of set decides the behaviour of
/// the map: [`HashMap`] is unordered, [`TreeMap`] is sorted by key and [`LinkedHashMap`]
/// remembers insertion order.
///
/// # Examples
/// ```
/// # use set_collections::collections::map::TreeMap;
/// let mut map = TreeMap::new();
/// map.insert("b", 2);
/// map.insert("a", 1);
/// assert_eq!(map.insert("b", 3), Some(2));
/// assert_eq!(map.get(&"b"), Some(&3));
/// assert_eq!(map.keys().copied().collect::<Vec<_>>(), ["a", "b"]);
/// ```
pub struct SetMap<K, V, S: EntrySet<K, V>> {
    pub(crate) entries: S,
    pub(crate) _phantom: PhantomData<(K, V)>,
}

impl<K, V, S: EntrySet<K, V> + Default> SetMap<K, V, S> {
    /// Creates a new, empty map backed by the default set of type `S`.
    pub fn new() -> SetMap<K, V, S> {
        SetMap::with_set(S::default())
    }
}

impl<K, V, S: EntrySet<K, V>> SetMap<K, V, S> {
    /// Creates a map backed by `entries`, which may already contain entries.
    pub fn with_set(entries: S) -> SetMap<K, V, S> {
        SetMap {
            entries,
            _phantom: PhantomData,
        }
    }

    /// Returns the number of entries in the map.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map contains no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the value associated with `key`.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.entry(key).map(Entry::value)
    }

    /// Returns the value associated with `key`, or `default` if there isn't one.
    pub fn get_or<'a>(&'a self, key: &K, default: &'a V) -> &'a V {
        self.get(key).unwrap_or(default)
    }

    /// Returns a mutable reference to the value associated with `key`.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.entries.entry_mut(key).map(Entry::value_mut)
    }

    /// Associates `value` with `key`, returning the value previously associated with it. The key
    /// already in the map is kept.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if let Some(entry) = self.entries.entry_mut(&key) {
            return Some(mem::replace(&mut entry.value, value));
        }

        self.entries.insert(Entry::new(key, value));
        None
    }

    /// Associates `value` with `key` only if there is no value for `key` yet. Returns the
    /// existing value without modifying the map if there is one.
    pub fn insert_if_absent(&mut self, key: K, value: V) -> Option<&V> {
        if self.entries.entry(&key).is_some() {
            return self.get(&key);
        }

        self.entries.insert(Entry::new(key, value));
        None
    }

    /// Removes the entry for `key`, returning its value.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.remove_entry(key).map(|(_, value)| value)
    }

    /// Removes the entry for `key`, returning the stored key and value.
    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        self.entries.take_entry(key).map(Entry::into_tuple)
    }

    /// Returns true if there is a value associated with `key`.
    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.entry(key).is_some()
    }

    /// Returns true if any key is associated with a value equal to `value`. This is a linear
    /// search.
    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.values().any(|v| v == value)
    }

    /// Keeps only the entries for which `f` returns true.
    pub fn retain<F: FnMut(&K, &V) -> bool>(&mut self, mut f: F) {
        self.entries.retain(|entry| f(&entry.key, &entry.value));
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns an iterator over every key and value, in the iteration order of the backing set.
    pub fn iter(&self) -> Iter<'_, K, V, S> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Returns an iterator over every key.
    pub fn keys(&self) -> Keys<'_, K, V, S> {
        Keys(self.iter())
    }

    /// Returns an iterator over every value.
    pub fn values(&self) -> Values<'_, K, V, S> {
        Values(self.iter())
    }

    /// Fills the set produced by `factory` with clones of every key. The flavour aliases each offer
    /// a `key_set` method that picks the matching set type.
    pub fn key_set_with<KS, F>(&self, factory: F) -> KS
    where
        K: Clone,
        KS: Set<K>,
        F: FnOnce() -> KS,
    {
        let mut keys = factory();
        for key in self.keys() {
            keys.insert(key.clone());
        }
        keys
    }

    /// Returns the set of entries backing the map.
    pub const fn entry_set(&self) -> &S {
        &self.entries
    }

    /// Consumes the map, returning the set of entries backing it.
    pub fn into_entry_set(self) -> S {
        self.entries
    }
}

/// A map backed by a [`HashSet`].
#[cfg(feature = "hash")]
pub type HashMap<K, V, B = RandomState> = SetMap<K, V, HashSet<Entry<K, V>, B>>;

#[cfg(feature = "hash")]
impl<K: Hash + Eq + Clone, V, B: BuildHasher + Default> SetMap<K, V, HashSet<Entry<K, V>, B>> {
    /// Returns a [`HashSet`] of every key.
    pub fn key_set(&self) -> HashSet<K, B> {
        self.key_set_with(HashSet::new)
    }
}

/// A map backed by a [`TreeSet`], sorted by key.
#[cfg(feature = "binary_tree")]
pub type TreeMap<K, V> = SetMap<K, V, TreeSet<Entry<K, V>>>;

#[cfg(feature = "binary_tree")]
impl<K: Ord + Clone, V> SetMap<K, V, TreeSet<Entry<K, V>>> {
    /// Returns a [`TreeSet`] of every key.
    pub fn key_set(&self) -> TreeSet<K> {
        self.key_set_with(TreeSet::new)
    }
}

/// A map backed by a [`LinkedHashSet`], iterating in insertion order.
#[cfg(feature = "ordered")]
pub type LinkedHashMap<K, V, B = RandomState> = SetMap<K, V, LinkedHashSet<Entry<K, V>, B>>;

#[cfg(feature = "ordered")]
impl<K: Hash + Eq + Clone, V, B: BuildHasher + Default> SetMap<K, V, LinkedHashSet<Entry<K, V>, B>> {
    /// Returns a [`LinkedHashSet`] of every key, in insertion order.
    pub fn key_set(&self) -> LinkedHashSet<K, B> {
        self.key_set_with(LinkedHashSet::new)
    }
}

impl<K, V, S: EntrySet<K, V> + Default> Default for SetMap<K, V, S> {
    fn default() -> Self {
        SetMap::new()
    }
}

impl<K, V, S: EntrySet<K, V>> Extend<(K, V)> for SetMap<K, V, S> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V, S: EntrySet<K, V> + Default> FromIterator<(K, V)> for SetMap<K, V, S> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = SetMap::new();
        map.extend(iter);
        map
    }
}

impl<K, V: PartialEq, S: EntrySet<K, V>> PartialEq for SetMap<K, V, S> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.iter().all(|(key, value)| other.get(key) == Some(value))
    }
}

impl<K, V: Eq, S: EntrySet<K, V>> Eq for SetMap<K, V, S> {}

impl<K: Debug, V: Debug, S: EntrySet<K, V>> Debug for SetMap<K, V, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Display, V: Display, S: EntrySet<K, V>> Display for SetMap<K, V, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f, "{{{}}}",
            self.iter()
                .map(|(key, value)| format!("{key}: {value}"))
                .collect::<Vector<String>>()
                .join(", ")
        )
    }
}
