use super::{LinkedList, NodeHandle};
#[doc(inline)]
pub use crate::util::error::{NoCurrentElement, NoNextElement};
use crate::util::option::OptionExtension;
use crate::util::result::ResultExtension;

/// A forward cursor over a [`LinkedList`] that can unlink the element it last yielded in `O(1)`.
///
/// # Examples
/// ```
/// # use set_collections::collections::linked::LinkedList;
/// let mut list: LinkedList<u8> = (1..=4).collect();
/// let mut cursor = list.cursor();
/// while let Ok(value) = cursor.try_next() {
///     if *value > 2 {
///         cursor.remove();
///     }
/// }
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2]);
/// ```
pub struct Cursor<'a, T> {
    pub(crate) list: &'a mut LinkedList<T>,
    pub(crate) next: Option<NodeHandle>,
    pub(crate) last: Option<NodeHandle>,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(list: &'a mut LinkedList<T>) -> Cursor<'a, T> {
        Cursor {
            next: list.first_handle(),
            last: None,
            list,
        }
    }

    /// Returns true if a call to [`next`](Cursor::next) would yield an element.
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// Returns the handle of the element most recently yielded, unless it has been removed.
    pub fn handle(&self) -> Option<NodeHandle> {
        self.last
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
        let node = self.list.node(handle);

        self.next = node.next;
        self.last = Some(handle);
        Ok(&node.value)
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
        Ok(self.list.remove_node(handle).or_unreachable())
    }
}
