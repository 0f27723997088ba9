use super::{NodeId, TreeSet};
use crate::collections::binary_tree::Comparator;
#[doc(inline)]
pub use crate::util::error::{NoCurrentElement, NoNextElement};
use crate::util::result::ResultExtension;

/// An in-order cursor over a [`TreeSet`] that can remove the element it last yielded.
///
/// The cursor remembers the node that follows the one it last yielded. Removing a junction moves
/// its predecessor's value into it, and the predecessor has already been visited, so the
/// remembered node is never the one released.
///
/// # Examples
/// ```
/// # use set_collections::collections::binary_tree::TreeSet;
/// let mut set: TreeSet<i32> = (1..=6).collect();
/// let mut cursor = set.cursor();
/// while let Ok(value) = cursor.try_next() {
///     if value % 3 == 0 {
///         cursor.remove();
///     }
/// }
/// assert_eq!(set.iter().copied().collect::<Vec<_>>(), [1, 2, 4, 5]);
/// ```
pub struct Cursor<'a, T, C: Comparator<T>> {
    pub(crate) tree: &'a mut TreeSet<T, C>,
    pub(crate) next: Option<NodeId>,
    pub(crate) last: Option<NodeId>,
}

impl<'a, T, C: Comparator<T>> Cursor<'a, T, C> {
    pub(crate) fn new(tree: &'a mut TreeSet<T, C>) -> Cursor<'a, T, C> {
        Cursor {
            next: tree.root.map(|root| tree.least_from(root)),
            last: None,
            tree,
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
        let id = self.next.ok_or(NoNextElement)?;

        self.next = self.tree.successor(id);
        self.last = Some(id);
        Ok(&self.tree.node(id).value)
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
        let id = self.last.take().ok_or(NoCurrentElement)?;
        Ok(self.tree.remove_node(id))
    }
}
