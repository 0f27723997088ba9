use std::hash::{BuildHasher, Hash};

use super::LinkedHashSet;
use crate::collections::linked::NodeHandle;
#[doc(inline)]
pub use crate::util::error::{NoCurrentElement, NoNextElement};
use crate::util::option::OptionExtension;
use crate::util::result::ResultExtension;

/// A cursor over a [`LinkedHashSet`], in insertion order, that can remove the element it last
/// yielded. Removal goes through both the list and the index, exactly like
/// [`LinkedHashSet::take`].
///
/// # Examples
/// ```
/// # use set_collections::collections::ordered::LinkedHashSet;
/// let mut set: LinkedHashSet<u8> = [5, 1, 4, 2, 3].into_iter().collect();
/// let mut cursor = set.cursor();
/// while cursor.has_next() {
///     if cursor.next() % 2 == 0 {
///         cursor.remove();
///     }
/// }
/// assert_eq!(set.iter().copied().collect::<Vec<_>>(), [5, 1, 3]);
/// assert!(!set.contains(&4));
/// ```
pub struct Cursor<'a, T: Hash + Eq, B: BuildHasher> {
    pub(crate) set: &'a mut LinkedHashSet<T, B>,
    pub(crate) next: Option<NodeHandle>,
    pub(crate) last: Option<NodeHandle>,
}

impl<'a, T: Hash + Eq, B: BuildHasher> Cursor<'a, T, B> {
    pub(crate) fn new(set: &'a mut LinkedHashSet<T, B>) -> Cursor<'a, T, B> {
        Cursor {
            next: set.list.first_handle(),
            last: None,
            set,
        }
    }

    /// Returns true if a call to [`next`](Cursor::next) would yield an element.
    pub fn has_next(&self) -> bool {
        self.next.is_some()
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
        let handle = self.next.ok_or(NoNextElement)?;

        self.next = self.set.list.next_handle(handle);
        self.last = Some(handle);
        Ok(self.set.list.value(handle).or_unreachable())
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
        let handle = self.last.take().ok_or(NoCurrentElement)?;
        Ok(self.set.remove_handle(handle))
    }
}
