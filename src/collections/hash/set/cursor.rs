use std::hash::{BuildHasher, Hash};

use super::HashSet;
#[doc(inline)]
pub use crate::util::error::{NoCurrentElement, NoNextElement};
use crate::util::option::OptionExtension;
use crate::util::result::ResultExtension;

/// A cursor over a [`HashSet`] that can remove the element it last yielded, in the same order as
/// [`HashSet::iter`].
///
/// The cursor tracks a bucket index and a position within that bucket. Removing an element shifts
/// the rest of its bucket down, so the position is stepped back to stay on the following element.
pub struct Cursor<'a, T: Hash + Eq, B: BuildHasher> {
    pub(crate) set: &'a mut HashSet<T, B>,
    pub(crate) bucket: usize,
    pub(crate) position: usize,
    pub(crate) last: Option<(usize, usize)>,
}

impl<'a, T: Hash + Eq, B: BuildHasher> Cursor<'a, T, B> {
    pub(crate) fn new(set: &'a mut HashSet<T, B>) -> Cursor<'a, T, B> {
        Cursor {
            set,
            bucket: 0,
            position: 0,
            last: None,
        }
    }

    /// Returns true if a call to [`next`](Cursor::next) would yield an element.
    pub fn has_next(&self) -> bool {
        self.peek().is_some()
    }

    /// Advances the cursor, returning the element it moved over.
    ///
    /// # Panics
    /// Panics if the cursor has already yielded the last element.
    pub fn next(&mut self) -> &T {
        self.try_next().throw()
    }

    /// Advances the cursor, returning the element it moved over, or [`NoNextElement`] if there are
    /// no elements left.
    pub fn try_next(&mut self) -> Result<&T, NoNextElement> {
        let (bucket, position) = self.peek().ok_or(NoNextElement)?;

        self.bucket = bucket;
        self.position = position + 1;
        self.last = Some((bucket, position));

        let items = self.set.table.buckets[bucket].as_ref().or_unreachable();
        Ok(&items[position])
    }

    /// Removes and returns the element most recently yielded by [`next`](Cursor::next).
    ///
    /// # Panics
    /// Panics if `next` hasn't been called since the cursor was created or since the last removal.
    pub fn remove(&mut self) -> T {
        self.try_remove().throw()
    }

    /// Removes and returns the element most recently yielded, or [`NoCurrentElement`] if there
    /// isn't one.
    pub fn try_remove(&mut self) -> Result<T, NoCurrentElement> {
        let (bucket, position) = self.last.take().ok_or(NoCurrentElement)?;

        self.position = position;
        Ok(self.set.table.take_at(bucket, position).or_unreachable())
    }

    /// Finds the bucket and position of the next element, skipping over empty buckets.
    fn peek(&self) -> Option<(usize, usize)> {
        let buckets = &self.set.table.buckets;
        let mut bucket = self.bucket;
        let mut position = self.position;

        while bucket < buckets.size() {
            let len = buckets[bucket].as_ref().map_or(0, |items| items.len());
            if position < len {
                return Some((bucket, position));
            }

            bucket += 1;
            position = 0;
        }

        None
    }
}
