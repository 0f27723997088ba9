use std::cmp;
use std::mem;

use crate::collections::contiguous::{Array, Vector};
use crate::util::error::{CapacityOverflow, InvalidLoadFactor};
use crate::util::result::ResultExtension;

pub(crate) const DEFAULT_CAP: usize = 16;

pub(crate) const DEFAULT_LOAD_FACTOR: f32 = 0.75;

const MIN_ALLOCATED_CAP: usize = 2;

const GROWTH_FACTOR: usize = 2;

/// The most buckets the table grows to per entry, whatever the load factor.
pub(crate) const MAX_BUCKETS_PER_ENTRY: usize = 64;

/// Empty buckets don't allocate.
pub(crate) type Bucket<E> = Option<Vector<E>>;

/// A table of chained buckets. The table doesn't know how to hash or compare its entries. Callers
/// supply the hash of the entry in question, and an equality predicate where a search is needed.
/// This lets the same table store elements directly (for
/// [`HashSet`](super::HashSet)) or store handles that refer to elements kept elsewhere.
#[derive(Debug, Clone)]
pub(crate) struct Table<E> {
    pub buckets: Array<Bucket<E>>,
    pub len: usize,
    pub load_factor: f32,
}

impl<E> Table<E> {
    pub fn with_cap(cap: usize) -> Table<E> {
        Table {
            buckets: Array::repeat_default(cap),
            len: 0,
            load_factor: DEFAULT_LOAD_FACTOR,
        }
    }

    pub fn with_cap_and_load_factor(cap: usize, load_factor: f32) -> Result<Table<E>, InvalidLoadFactor> {
        if !load_factor.is_finite() || load_factor <= 0.0 {
            return Err(InvalidLoadFactor { load_factor });
        }

        Ok(Table {
            load_factor,
            ..Table::with_cap(cap)
        })
    }

    pub fn cap(&self) -> usize {
        self.buckets.size()
    }

    /// Whether the table is at or above its load limit, meaning it should grow before another
    /// entry is added. Load factors below `1 / MAX_BUCKETS_PER_ENTRY` stop growing once there are
    /// that many buckets per entry.
    pub fn should_grow(&self) -> bool {
        self.len as f32 >= self.cap() as f32 * self.load_factor
            && self.cap() / MAX_BUCKETS_PER_ENTRY <= self.len
    }

    /// The bucket for `hash`. The table must have a non-zero capacity.
    pub fn index_for(&self, hash: u64) -> usize {
        (hash % self.cap() as u64) as usize
    }

    /// Finds the bucket index and position within that bucket of the first entry matching `eq`.
    pub fn find<F: FnMut(&E) -> bool>(&self, hash: u64, eq: F) -> Option<(usize, usize)> {
        if self.cap() == 0 {
            return None;
        }

        let index = self.index_for(hash);
        let position = self.buckets[index].as_ref()?.iter().position(eq)?;
        Some((index, position))
    }

    pub fn get<F: FnMut(&E) -> bool>(&self, hash: u64, eq: F) -> Option<&E> {
        let (index, position) = self.find(hash, eq)?;
        Some(&self.buckets[index].as_ref()?[position])
    }

    pub fn get_mut<F: FnMut(&E) -> bool>(&mut self, hash: u64, eq: F) -> Option<&mut E> {
        let (index, position) = self.find(hash, eq)?;
        Some(&mut self.buckets[index].as_mut()?[position])
    }

    /// Appends `entry` to the bucket for `hash`. The caller is responsible for checking that no
    /// matching entry is present and that the table has already grown if it needed to.
    pub fn insert_unique(&mut self, hash: u64, entry: E) {
        self.place(hash, entry);
        self.len += 1;
    }

    pub fn take<F: FnMut(&E) -> bool>(&mut self, hash: u64, eq: F) -> Option<E> {
        let (index, position) = self.find(hash, eq)?;
        self.take_at(index, position)
    }

    pub fn take_at(&mut self, index: usize, position: usize) -> Option<E> {
        let entry = self.buckets[index].as_mut()?.try_remove(position).ok()?;
        self.len -= 1;
        Some(entry)
    }

    /// Grows the table by [`GROWTH_FACTOR`], to a minimum of [`MIN_ALLOCATED_CAP`], and re-adds
    /// every entry using `hash`.
    pub fn grow<H: FnMut(&E) -> u64>(&mut self, hash: H) {
        let new_cap = cmp::max(
            self.cap().checked_mul(GROWTH_FACTOR).ok_or(CapacityOverflow).throw(),
            MIN_ALLOCATED_CAP,
        );

        self.realloc_with_cap(new_cap, hash);
    }

    /// Replaces the buckets with `new_cap` empty ones, then re-adds every entry in bucket order.
    pub fn realloc_with_cap<H: FnMut(&E) -> u64>(&mut self, new_cap: usize, mut hash: H) {
        let old = mem::replace(&mut self.buckets, Array::repeat_default(new_cap));

        for entry in old.into_iter().flatten().flatten() {
            let entry_hash = hash(&entry);
            self.place(entry_hash, entry);
        }
    }

    /// Drops every entry, keeping the current capacity.
    pub fn clear(&mut self) {
        for bucket in self.buckets.iter_mut() {
            *bucket = None;
        }
        self.len = 0;
    }

    fn place(&mut self, hash: u64, entry: E) {
        let index = self.index_for(hash);
        self.buckets[index].get_or_insert_with(Vector::new).push(entry);
    }
}
