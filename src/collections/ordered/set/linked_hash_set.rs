use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};
use std::mem;

use super::{Cursor, Iter};
use crate::collections::contiguous::Vector;
use crate::collections::hash::table::{DEFAULT_CAP, Table};
use crate::collections::linked::{LinkedList, NodeHandle};
use crate::collections::traits::Set;
#[doc(inline)]
pub use crate::util::error::InvalidLoadFactor;
use crate::util::option::OptionExtension;
use crate::util::result::ResultExtension;

/// A hash set that iterates in insertion order.
///
/// Elements are owned by a [`LinkedList`], which defines the order. A chained hash table of
/// [`NodeHandle`]s sits beside it as the index: membership is decided by hashing an element and
/// comparing it against the elements behind the handles in its bucket. Every insertion and
/// removal updates both, so the handles in the index always refer to exactly the nodes in the
/// list. Re-inserting an element that is already present doesn't move it.
///
/// Growth follows [`HashSet`](crate::collections::hash::HashSet): the index doubles before an
/// insertion whenever its length has reached `cap * load_factor`.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the LinkedHashSet.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(1)`**, `O(n)` |
/// | `get` | `O(1)`* |
/// | `take` | `O(1)`* |
/// | `first/last` | `O(1)` |
/// | `retain` | `O(n)` |
///
/// \* Searching a bucket is linear in the number of colliding elements.
///
/// \** Growing the index is `O(n)`. \* applies as well.
///
/// # Examples
/// ```
/// # use set_collections::collections::ordered::LinkedHashSet;
/// let mut set = LinkedHashSet::<char>::new();
/// set.extend(['a', 'b', 'c']);
/// set.remove(&'b');
/// set.insert('b');
/// set.insert('a');
/// assert_eq!(set.iter().collect::<String>(), "acb");
/// ```
pub struct LinkedHashSet<T: Hash + Eq, B: BuildHasher = RandomState> {
    pub(crate) list: LinkedList<T>,
    pub(crate) index: Table<NodeHandle>,
    pub(crate) hasher: B,
}

/// The element behind a handle taken from the index.
pub(crate) fn element<T>(list: &LinkedList<T>, handle: NodeHandle) -> &T {
    list.value(handle).or_unreachable()
}

impl<T: Hash + Eq, B: BuildHasher + Default> LinkedHashSet<T, B> {
    /// Creates a new LinkedHashSet with the default capacity, load factor and hasher.
    pub fn new() -> LinkedHashSet<T, B> {
        LinkedHashSet::with_cap(DEFAULT_CAP)
    }

    /// Creates a new LinkedHashSet with the provided number of index buckets.
    pub fn with_cap(cap: usize) -> LinkedHashSet<T, B> {
        LinkedHashSet::with_cap_and_hasher(cap, B::default())
    }

    /// Creates a new LinkedHashSet with the provided number of index buckets and load factor.
    ///
    /// # Panics
    /// Panics if `load_factor` isn't finite and greater than zero.
    pub fn with_cap_and_load_factor(cap: usize, load_factor: f32) -> LinkedHashSet<T, B> {
        LinkedHashSet::try_with_cap_and_load_factor(cap, load_factor).throw()
    }

    /// Creates a new LinkedHashSet with the provided number of index buckets and load factor, or
    /// returns an error if `load_factor` isn't finite and greater than zero.
    pub fn try_with_cap_and_load_factor(
        cap: usize,
        load_factor: f32,
    ) -> Result<LinkedHashSet<T, B>, InvalidLoadFactor> {
        LinkedHashSet::try_with_parts(cap, load_factor, B::default())
    }
}

impl<T: Hash + Eq, B: BuildHasher> LinkedHashSet<T, B> {
    /// Creates a new LinkedHashSet with the default capacity and load factor, and the provided
    /// `hasher`.
    pub fn with_hasher(hasher: B) -> LinkedHashSet<T, B> {
        LinkedHashSet::with_cap_and_hasher(DEFAULT_CAP, hasher)
    }

    /// Creates a new LinkedHashSet with the provided number of index buckets and `hasher`.
    pub fn with_cap_and_hasher(cap: usize, hasher: B) -> LinkedHashSet<T, B> {
        LinkedHashSet {
            list: LinkedList::new(),
            index: Table::with_cap(cap),
            hasher,
        }
    }

    /// Creates a new LinkedHashSet from all of its configuration, or returns an error if
    /// `load_factor` isn't finite and greater than zero.
    pub fn try_with_parts(
        cap: usize,
        load_factor: f32,
        hasher: B,
    ) -> Result<LinkedHashSet<T, B>, InvalidLoadFactor> {
        Ok(LinkedHashSet {
            list: LinkedList::new(),
            index: Table::with_cap_and_load_factor(cap, load_factor)?,
            hasher,
        })
    }

    /// Returns the number of elements in the LinkedHashSet.
    pub const fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns true if the LinkedHashSet contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Returns the current number of index buckets.
    pub fn cap(&self) -> usize {
        self.index.cap()
    }

    /// Returns the load factor of the index.
    pub const fn load_factor(&self) -> f32 {
        self.index.load_factor
    }

    /// Returns a reference to the hasher used by the LinkedHashSet.
    pub const fn hasher(&self) -> &B {
        &self.hasher
    }

    /// Appends `item` to the LinkedHashSet. Returns false without modifying the set (or the
    /// position of the existing element) if an equal element is already present.
    pub fn insert(&mut self, item: T) -> bool {
        let hash = self.hasher.hash_one(&item);
        if self.lookup(hash, &item).is_some() {
            return false;
        }

        self.insert_new(hash, item);
        true
    }

    /// Adds `item` to the LinkedHashSet, replacing and returning an equal element if one was
    /// present. A replacement takes the position of the element it replaced.
    pub fn replace(&mut self, item: T) -> Option<T> {
        let hash = self.hasher.hash_one(&item);
        if let Some(handle) = self.lookup(hash, &item) {
            let existing = self.list.value_mut(handle).or_unreachable();
            return Some(mem::replace(existing, item));
        }

        self.insert_new(hash, item);
        None
    }

    /// Returns the stored element equal to `item`.
    pub fn get<Q>(&self, item: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let handle = self.lookup(self.hasher.hash_one(item), item)?;
        Some(element(&self.list, handle))
    }

    /// Returns a mutable reference to the stored element equal to `item`. Only usable within the
    /// crate, by types whose equality ignores the part that is changed.
    pub(crate) fn get_mut<Q>(&mut self, item: &Q) -> Option<&mut T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let handle = self.lookup(self.hasher.hash_one(item), item)?;
        self.list.value_mut(handle)
    }

    /// Returns true if the LinkedHashSet contains an element equal to `item`.
    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(item).is_some()
    }

    /// Removes and returns the element equal to `item`, if there is one. The rest of the
    /// elements keep their order.
    pub fn take<Q>(&mut self, item: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let hash = self.hasher.hash_one(item);
        let list = &self.list;
        let handle = self.index.take(hash, |h| element(list, *h).borrow() == item)?;

        Some(self.list.remove_node(handle).or_unreachable())
    }

    /// Removes the element equal to `item`, returning true if it was present.
    pub fn remove<Q>(&mut self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.take(item).is_some()
    }

    /// Returns the element that was inserted first, of those still present.
    pub fn first(&self) -> Option<&T> {
        self.list.front()
    }

    /// Returns the element that was inserted last.
    pub fn last(&self) -> Option<&T> {
        self.list.back()
    }

    /// Keeps only the elements for which `f` returns true.
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, mut f: F) {
        let mut cursor = self.cursor();
        while cursor.has_next() {
            if !f(cursor.next()) {
                cursor.remove();
            }
        }
    }

    /// Removes every element, keeping the current number of index buckets.
    pub fn clear(&mut self) {
        self.list.clear();
        self.index.clear();
    }

    /// Returns an iterator over all elements in insertion order, as references.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter(self.list.iter())
    }

    /// Returns a [`Cursor`] positioned before the first element.
    pub fn cursor(&mut self) -> Cursor<'_, T, B> {
        Cursor::new(self)
    }

    /// Finds the handle of the node holding the element equal to `item`.
    fn lookup<Q>(&self, hash: u64, item: &Q) -> Option<NodeHandle>
    where
        T: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.index
            .get(hash, |h| element(&self.list, *h).borrow() == item)
            .copied()
    }

    fn insert_new(&mut self, hash: u64, item: T) {
        if self.index.should_grow() {
            self.index.grow(|h| self.hasher.hash_one(element(&self.list, *h)));
        }

        let handle = self.list.push_back(item);
        self.index.insert_unique(hash, handle);
    }

    /// Removes the node at `handle` from both the index and the list.
    pub(crate) fn remove_handle(&mut self, handle: NodeHandle) -> T {
        let hash = self.hasher.hash_one(element(&self.list, handle));
        self.index.take(hash, |h| *h == handle).or_unreachable();
        self.list.remove_node(handle).or_unreachable()
    }
}

impl<T: Hash + Eq, B: BuildHasher> Set<T> for LinkedHashSet<T, B> {
    type Iter<'a> = Iter<'a, T> where Self: 'a, T: 'a;

    fn len(&self) -> usize {
        LinkedHashSet::len(self)
    }

    fn insert(&mut self, item: T) -> bool {
        LinkedHashSet::insert(self, item)
    }

    fn replace(&mut self, item: T) -> Option<T> {
        LinkedHashSet::replace(self, item)
    }

    fn get(&self, item: &T) -> Option<&T> {
        LinkedHashSet::get(self, item)
    }

    fn take(&mut self, item: &T) -> Option<T> {
        LinkedHashSet::take(self, item)
    }

    fn retain<F: FnMut(&T) -> bool>(&mut self, f: F) {
        LinkedHashSet::retain(self, f)
    }

    fn clear(&mut self) {
        LinkedHashSet::clear(self)
    }

    fn iter<'a>(&'a self) -> Self::Iter<'a> {
        LinkedHashSet::iter(self)
    }
}

impl<T: Hash + Eq, B: BuildHasher + Default> Default for LinkedHashSet<T, B> {
    fn default() -> Self {
        LinkedHashSet::new()
    }
}

impl<T: Hash + Eq, B: BuildHasher> Extend<T> for LinkedHashSet<T, B> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: Hash + Eq, B: BuildHasher + Default> FromIterator<T> for LinkedHashSet<T, B> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = LinkedHashSet::new();
        set.extend(iter);
        set
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Clone> Clone for LinkedHashSet<T, B> {
    fn clone(&self) -> Self {
        LinkedHashSet {
            list: self.list.clone(),
            index: self.index.clone(),
            hasher: self.hasher.clone(),
        }
    }
}

/// Two LinkedHashSets are equal if they contain equal elements, regardless of order.
impl<T: Hash + Eq, B: BuildHasher> PartialEq for LinkedHashSet<T, B> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|item| other.contains(item))
    }
}

impl<T: Hash + Eq, B: BuildHasher> Eq for LinkedHashSet<T, B> {}

impl<T: Hash + Eq + Debug, B: BuildHasher + Debug> Debug for LinkedHashSet<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedHashSet")
            .field("elements", &self.list)
            .field("len", &self.len())
            .field("cap", &self.cap())
            .field("load_factor", &self.load_factor())
            .field("hasher", &self.hasher)
            .finish()
    }
}

impl<T: Hash + Eq + Display, B: BuildHasher> Display for LinkedHashSet<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f, "#{{{}}}",
            self.iter()
                .map(|i| format!("{i}"))
                .collect::<Vector<String>>()
                .join(", ")
        )
    }
}
