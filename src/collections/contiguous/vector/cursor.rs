use super::Vector;
#[doc(inline)]
pub use crate::util::error::{NoCurrentElement, NoNextElement};
use crate::util::result::ResultExtension;

/// A forward cursor over a [`Vector`] that can remove the element it last yielded. Removing an
/// element shifts the remaining elements down, so the cursor stays on the element that followed
/// the removed one.
///
/// # Examples
/// ```
/// # use set_collections::collections::contiguous::Vector;
/// let mut vec: Vector<u8> = (0..6).collect();
/// let mut cursor = vec.cursor();
/// while cursor.has_next() {
///     if cursor.next() % 2 == 1 {
///         cursor.remove();
///     }
/// }
/// assert_eq!(&*vec, &[0, 2, 4]);
/// ```
pub struct Cursor<'a, T> {
    pub(crate) vec: &'a mut Vector<T>,
    pub(crate) next: usize,
    pub(crate) last: Option<usize>,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(vec: &'a mut Vector<T>) -> Cursor<'a, T> {
        Cursor {
            vec,
            next: 0,
            last: None,
        }
    }

    /// Returns true if a call to [`next`](Cursor::next) would yield an element.
    pub fn has_next(&self) -> bool {
        self.next < self.vec.len
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
        if !self.has_next() {
            return Err(NoNextElement);
        }

        let index = self.next;
        self.next += 1;
        self.last = Some(index);
        Ok(&self.vec[index])
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
        let index = self.last.take().ok_or(NoCurrentElement)?;
        self.next = index;
        Ok(self.vec.remove(index))
    }
}
