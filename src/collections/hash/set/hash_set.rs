use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};
use std::mem;

use super::{Cursor, Iter};
use crate::collections::contiguous::Vector;
use crate::collections::hash::table::{DEFAULT_CAP, Table};
use crate::collections::traits::Set;
#[doc(inline)]
pub use crate::util::error::InvalidLoadFactor;
use crate::util::fmt::DebugRaw;
use crate::util::result::ResultExtension;

/// An unordered set of unique elements, which relies on the elements implementing [`Hash`] and
/// [`Eq`].
///
/// Elements are stored in separately chained buckets: each bucket is a
/// [`Vector`] holding every element whose hash maps to it. The set grows (doubling its bucket
/// count and re-adding every element) before an insertion whenever its length has reached
/// `cap * load_factor`. The default capacity is 16 buckets and the default load factor is 0.75.
///
/// It is a logic error for elements to be manipulated in a way that changes their hash or
/// equality while they are in the set. Because of this, HashSet's API prevents mutable access to
/// its elements.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the HashSet.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(1)`**, `O(n)` |
/// | `get` | `O(1)`* |
/// | `take` | `O(1)`* |
/// | `contains` | `O(1)`* |
/// | `retain` | `O(n)` |
///
/// \* Elements with colliding hashes share a bucket, which is searched linearly. This stays short
/// as long as the load factor is reasonable and the hasher is good.
///
/// \** If the HashSet has reached its load limit, `insert` grows the table first, which takes
/// `O(n)`. \* applies as well.
pub struct HashSet<T: Hash + Eq, B: BuildHasher = RandomState> {
    pub(crate) table: Table<T>,
    pub(crate) hasher: B,
}

impl<T: Hash + Eq, B: BuildHasher + Default> HashSet<T, B> {
    /// Creates a new HashSet with the default capacity, load factor and hasher.
    ///
    /// # Examples
    /// ```
    /// # use set_collections::collections::hash::HashSet;
    /// let set: HashSet<u8> = HashSet::new();
    /// assert_eq!(set.cap(), 16);
    /// assert_eq!(set.load_factor(), 0.75);
    /// ```
    pub fn new() -> HashSet<T, B> {
        HashSet::with_cap(DEFAULT_CAP)
    }

    /// Creates a new HashSet with the provided number of buckets. A capacity of 0 is allowed, in
    /// which case the first insertion allocates.
    pub fn with_cap(cap: usize) -> HashSet<T, B> {
        HashSet::with_cap_and_hasher(cap, B::default())
    }

    /// Creates a new HashSet with the provided number of buckets and load factor.
    ///
    /// # Panics
    /// Panics if `load_factor` isn't finite and greater than zero.
    pub fn with_cap_and_load_factor(cap: usize, load_factor: f32) -> HashSet<T, B> {
        HashSet::try_with_cap_and_load_factor(cap, load_factor).throw()
    }

    /// Creates a new HashSet with the provided number of buckets and load factor, or returns an
    /// error if `load_factor` isn't finite and greater than zero.
    ///
    /// Very small load factors are accepted, but growth stops at roughly 64 buckets per element, so
    /// a load factor below `1 / 64` behaves like `1 / 64` once the set is non-empty.
    ///
    /// # Examples
    /// ```
    /// # use set_collections::collections::hash::{set::InvalidLoadFactor, HashSet};
    /// assert!(HashSet::<u8>::try_with_cap_and_load_factor(4, 0.5).is_ok());
    /// assert_eq!(
    ///     HashSet::<u8>::try_with_cap_and_load_factor(4, 0.0).err(),
    ///     Some(InvalidLoadFactor { load_factor: 0.0 })
    /// );
    /// ```
    pub fn try_with_cap_and_load_factor(
        cap: usize,
        load_factor: f32,
    ) -> Result<HashSet<T, B>, InvalidLoadFactor> {
        HashSet::try_with_parts(cap, load_factor, B::default())
    }
}

impl<T: Hash + Eq, B: BuildHasher> HashSet<T, B> {
    /// Creates a new HashSet with the default capacity and load factor, and the provided `hasher`.
    pub fn with_hasher(hasher: B) -> HashSet<T, B> {
        HashSet::with_cap_and_hasher(DEFAULT_CAP, hasher)
    }

    /// Creates a new HashSet with the provided number of buckets and `hasher`.
    pub fn with_cap_and_hasher(cap: usize, hasher: B) -> HashSet<T, B> {
        HashSet {
            table: Table::with_cap(cap),
            hasher,
        }
    }

    /// Creates a new HashSet from all of its configuration, or returns an error if `load_factor`
    /// isn't finite and greater than zero.
    pub fn try_with_parts(
        cap: usize,
        load_factor: f32,
        hasher: B,
    ) -> Result<HashSet<T, B>, InvalidLoadFactor> {
        Ok(HashSet {
            table: Table::with_cap_and_load_factor(cap, load_factor)?,
            hasher,
        })
    }

    /// Returns the number of elements in the HashSet.
    pub const fn len(&self) -> usize {
        self.table.len
    }

    /// Returns true if the HashSet contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.table.len == 0
    }

    /// Returns the current number of buckets.
    pub fn cap(&self) -> usize {
        self.table.cap()
    }

    /// Returns the load factor, the ratio of elements to buckets that triggers growth.
    pub const fn load_factor(&self) -> f32 {
        self.table.load_factor
    }

    /// Returns a reference to the hasher used by the HashSet.
    pub const fn hasher(&self) -> &B {
        &self.hasher
    }

    /// Adds `item` to the HashSet, growing first if the set has reached its load limit. Returns
    /// false without modifying the set if an equal element is already present.
    ///
    /// # Examples
    /// ```
    /// # use set_collections::collections::hash::HashSet;
    /// let mut set: HashSet<i32> = HashSet::with_cap_and_load_factor(4, 0.75);
    /// for i in 1..=5 {
    ///     assert!(set.insert(i));
    /// }
    /// assert!(!set.insert(3));
    /// assert_eq!(set.len(), 5);
    /// assert_eq!(set.cap(), 8);
    /// ```
    pub fn insert(&mut self, item: T) -> bool {
        let hash = self.hasher.hash_one(&item);
        if self.table.find(hash, |e| *e == item).is_some() {
            return false;
        }

        self.insert_new(hash, item);
        true
    }

    /// Adds `item` to the HashSet, replacing and returning an equal element if one was present.
    pub fn replace(&mut self, item: T) -> Option<T> {
        let hash = self.hasher.hash_one(&item);
        if let Some(existing) = self.table.get_mut(hash, |e| *e == item) {
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
        self.table.get(self.hasher.hash_one(item), |e| e.borrow() == item)
    }

    /// Returns a mutable reference to the stored element equal to `item`. Only usable within the
    /// crate, by types whose equality ignores the part that is changed.
    pub(crate) fn get_mut<Q>(&mut self, item: &Q) -> Option<&mut T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.table.get_mut(self.hasher.hash_one(item), |e| e.borrow() == item)
    }

    /// Returns true if the HashSet contains an element equal to `item`.
    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(item).is_some()
    }

    /// Removes and returns the element equal to `item`, if there is one.
    pub fn take<Q>(&mut self, item: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.table.take(self.hasher.hash_one(item), |e| e.borrow() == item)
    }

    /// Removes the element equal to `item`, returning true if it was present.
    pub fn remove<Q>(&mut self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.take(item).is_some()
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

    /// Removes every element, keeping the current number of buckets.
    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// Returns an iterator over all elements in the HashSet, as references. The order is that of
    /// the buckets, and within a bucket, the order of insertion.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.table)
    }

    /// Returns a [`Cursor`] positioned before the first element.
    pub fn cursor(&mut self) -> Cursor<'_, T, B> {
        Cursor::new(self)
    }

    fn insert_new(&mut self, hash: u64, item: T) {
        if self.table.should_grow() {
            self.table.grow(|e| self.hasher.hash_one(e));
        }

        self.table.insert_unique(hash, item);
    }
}

impl<T: Hash + Eq, B: BuildHasher> Set<T> for HashSet<T, B> {
    type Iter<'a> = Iter<'a, T> where Self: 'a, T: 'a;

    fn len(&self) -> usize {
        HashSet::len(self)
    }

    fn insert(&mut self, item: T) -> bool {
        HashSet::insert(self, item)
    }

    fn replace(&mut self, item: T) -> Option<T> {
        HashSet::replace(self, item)
    }

    fn get(&self, item: &T) -> Option<&T> {
        HashSet::get(self, item)
    }

    fn take(&mut self, item: &T) -> Option<T> {
        HashSet::take(self, item)
    }

    fn retain<F: FnMut(&T) -> bool>(&mut self, f: F) {
        HashSet::retain(self, f)
    }

    fn clear(&mut self) {
        HashSet::clear(self)
    }

    fn iter<'a>(&'a self) -> Self::Iter<'a> {
        HashSet::iter(self)
    }
}

impl<T: Hash + Eq, B: BuildHasher + Default> Default for HashSet<T, B> {
    fn default() -> Self {
        HashSet::new()
    }
}

impl<T: Hash + Eq, B: BuildHasher> Extend<T> for HashSet<T, B> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: Hash + Eq, B: BuildHasher + Default> FromIterator<T> for HashSet<T, B> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = HashSet::new();
        set.extend(iter);
        set
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Clone> Clone for HashSet<T, B> {
    fn clone(&self) -> Self {
        HashSet {
            table: self.table.clone(),
            hasher: self.hasher.clone(),
        }
    }
}

impl<T: Hash + Eq, B: BuildHasher> PartialEq for HashSet<T, B> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|item| other.contains(item))
    }
}

impl<T: Hash + Eq, B: BuildHasher> Eq for HashSet<T, B> {}

impl<T: Hash + Eq + Debug, B: BuildHasher + Debug> Debug for HashSet<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashSet")
            .field("buckets", &DebugRaw(format!(
                "[{}]",
                self.table.buckets.iter()
                    .map(|bucket| match bucket {
                        Some(items) if !items.is_empty() => format!("{:?}", &**items),
                        _ => "-".into(),
                    })
                    .collect::<Vector<String>>()
                    .join(", ")
            )))
            .field("len", &self.len())
            .field("cap", &self.cap())
            .field("load_factor", &self.load_factor())
            .field("hasher", &self.hasher)
            .finish()
    }
}

impl<T: Hash + Eq + Display, B: BuildHasher> Display for HashSet<T, B> {
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
