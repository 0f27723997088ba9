use std::cmp;
use std::fmt::{self, Debug, Formatter};
use std::mem::{self, MaybeUninit};
use std::ops::{Deref, DerefMut};
use std::slice;

use super::Cursor;
use crate::collections::contiguous::Array;
#[doc(inline)]
pub use crate::util::error::{CapacityOverflow, IndexOutOfBounds};
use crate::util::result::ResultExtension;

const MIN_CAP: usize = 2;

const GROWTH_FACTOR: usize = 2;

/// A variable size contiguous collection, based on [`Array<T>`]. Vector is the resizable array
/// sequence that backs hash buckets and node arenas elsewhere in this crate.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Vector.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `pop` | `O(1)` |
/// | `insert` | `O(n-i)` |
/// | `remove` | `O(n-i)` |
/// | `replace` | `O(1)` |
/// | `reserve` | `O(n)`**, `O(1)` |
/// | `shrink_to_fit` | `O(n)` |
/// | `retain` | `O(n)` |
/// | `contains` | `O(n)` |
///
/// \* If the Vector doesn't have enough capacity for the new element, `push` will take `O(n)`.
///
/// \** If the Vector has enough capacity for the additional items already, `reserve` is `O(1)`.
pub struct Vector<T> {
    pub(crate) arr: Array<MaybeUninit<T>>,
    pub(crate) len: usize,
}

impl<T> Vector<T> {
    /// Creates a new Vector with length and capacity 0. Memory will be allocated when the capacity
    /// changes.
    ///
    /// # Examples
    /// ```
    /// # use set_collections::collections::contiguous::Vector;
    /// let vec: Vector<u8> = Vector::new();
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.cap(), 0);
    /// ```
    pub fn new() -> Vector<T> {
        Vector {
            arr: Array::new(),
            len: 0,
        }
    }

    /// Creates a new Vector with capacity exactly equal to the provided value, allowing values to
    /// be added without reallocation.
    ///
    /// # Examples
    /// ```
    /// # use set_collections::collections::contiguous::Vector;
    /// let mut vec: Vector<u8> = Vector::with_cap(5);
    /// assert_eq!(vec.cap(), 5);
    /// vec.extend([1_u8, 2, 3, 4, 5]);
    /// assert_eq!(vec.cap(), 5);
    /// ```
    pub fn with_cap(cap: usize) -> Vector<T> {
        Vector {
            arr: Array::<T>::new_uninit(cap),
            len: 0,
        }
    }

    /// Returns the length of the Vector.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the Vector contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current capacity of the Vector. The capacity is exactly the value provided to
    /// any of the capacity manipulation functions, or the value chosen by the growth strategy.
    pub fn cap(&self) -> usize {
        self.arr.size()
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the Vector.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the element at `index`, or an error if it is out of bounds.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.check_index(index)?;
        Ok(&self[index])
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the Vector.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    /// Returns a mutable reference to the element at `index`, or an error if it is out of bounds.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        self.check_index(index)?;
        Ok(&mut self[index])
    }

    /// Push the provided value onto the end of the Vector, increasing the capacity if required.
    ///
    /// # Panics
    /// Panics if growing the Vector would overflow its capacity.
    ///
    /// # Examples
    /// ```
    /// # use set_collections::collections::contiguous::Vector;
    /// let mut vec = Vector::new();
    /// for i in 0..=5 {
    ///     vec.push(i);
    /// }
    /// assert_eq!(&*vec, &[0, 1, 2, 3, 4, 5]);
    /// ```
    pub fn push(&mut self, value: T) {
        if self.len == self.cap() {
            self.grow();
        }

        self.arr[self.len] = MaybeUninit::new(value);
        self.len += 1;
    }

    /// Pops the last value off the end of the Vector, returning an owned value if the Vector has
    /// length greater than 0.
    ///
    /// # Examples
    /// ```
    /// # use set_collections::collections::contiguous::Vector;
    /// let mut vec: Vector<u8> = (0..3).collect();
    /// assert_eq!(vec.pop(), Some(2));
    /// assert_eq!(vec.pop(), Some(1));
    /// assert_eq!(vec.pop(), Some(0));
    /// assert_eq!(vec.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        self.len -= 1;
        // SAFETY: The slot at the old last index was initialized and is now outside of len, so it
        // won't be read or dropped again.
        Some(unsafe { self.arr[self.len].assume_init_read() })
    }

    /// Inserts the provided value at the given index, growing and moving items as necessary.
    /// `index` may be equal to `len`, in which case the value is appended.
    ///
    /// # Panics
    /// Panics if the provided index is greater than the length of the Vector.
    ///
    /// # Examples
    /// ```
    /// # use set_collections::collections::contiguous::Vector;
    /// let mut vec: Vector<u8> = (0..3).collect();
    /// vec.insert(1, 5);
    /// vec.insert(4, 9);
    /// assert_eq!(&*vec, &[0, 5, 1, 2, 9]);
    /// ```
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    /// Inserts the provided value at the given index, or returns an error if `index > len`. The
    /// value is dropped if an error is returned.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        if index > self.len {
            return Err(IndexOutOfBounds { index, len: self.len });
        }

        if self.len == self.cap() {
            self.grow();
        }

        let mut carry = MaybeUninit::new(value);
        for slot in &mut self.arr[index..=self.len] {
            carry = mem::replace(slot, carry);
        }
        // The carried slot is the uninitialized one previously at len.
        self.len += 1;
        Ok(())
    }

    /// Removes the element at the provided index, moving all following values to fill in the gap.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use set_collections::collections::contiguous::Vector;
    /// let mut vec: Vector<u8> = (0..5).collect();
    /// assert_eq!(vec.remove(1), 1);
    /// assert_eq!(vec.remove(3), 4);
    /// assert_eq!(&*vec, &[0, 2, 3]);
    /// ```
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    /// Removes the element at the provided index, or returns an error if it is out of bounds.
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        self.check_index(index)?;

        let mut carry = MaybeUninit::uninit();
        for slot in self.arr[index..self.len].iter_mut().rev() {
            carry = mem::replace(slot, carry);
        }
        self.len -= 1;

        // SAFETY: The carried slot is the one previously at index, which was initialized.
        Ok(unsafe { carry.assume_init() })
    }

    /// Replace the element at the provided index with `new_value`, returning the old value.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    pub fn replace(&mut self, index: usize, new_value: T) -> T {
        mem::replace(self.get_mut(index), new_value)
    }

    /// Reserves space for at least `extra` more elements, reallocating only if the current
    /// capacity is insufficient.
    ///
    /// # Panics
    /// Panics if the new capacity overflows [`usize`].
    pub fn reserve(&mut self, extra: usize) {
        let new_cap = self.len.checked_add(extra).ok_or(CapacityOverflow).throw();

        if new_cap > self.cap() {
            self.arr.realloc(new_cap, self.len);
        }
    }

    /// Shrinks the capacity of the Vector to match its length.
    pub fn shrink_to_fit(&mut self) {
        self.arr.realloc(self.len, self.len);
    }

    /// Drops every element past `new_len`. Does nothing if the Vector is already shorter.
    pub fn truncate(&mut self, new_len: usize) {
        while self.len > new_len {
            self.pop();
        }
    }

    /// Drops every element, keeping the current capacity.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Keeps only the elements for which `f` returns true, preserving their order.
    ///
    /// # Examples
    /// ```
    /// # use set_collections::collections::contiguous::Vector;
    /// let mut vec: Vector<u8> = (0..8).collect();
    /// vec.retain(|n| n % 3 == 0);
    /// assert_eq!(&*vec, &[0, 3, 6]);
    /// ```
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, mut f: F) {
        let mut kept = 0;

        for i in 0..self.len {
            if f(&self[i]) {
                self.swap(kept, i);
                kept += 1;
            }
        }

        self.truncate(kept);
    }

    /// Returns a [`Cursor`] positioned before the first element, which can remove the elements it
    /// has just yielded.
    pub fn cursor(&mut self) -> Cursor<'_, T> {
        Cursor::new(self)
    }

    /// Grows the Vector by [`GROWTH_FACTOR`], to a minimum of [`MIN_CAP`].
    fn grow(&mut self) {
        let new_cap = cmp::max(
            self.cap().checked_mul(GROWTH_FACTOR).ok_or(CapacityOverflow).throw(),
            MIN_CAP,
        );

        self.arr.realloc(new_cap, self.len);
    }

    pub(crate) const fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index >= self.len {
            Err(IndexOutOfBounds { index, len: self.len })
        } else {
            Ok(())
        }
    }
}

impl<T: PartialEq> Vector<T> {
    /// Returns true if the Vector contains an element equal to `item`.
    pub fn contains(&self, item: &T) -> bool {
        self.index_of(item).is_some()
    }

    /// Returns the index of the first element equal to `item`.
    ///
    /// # Examples
    /// ```
    /// # use set_collections::collections::contiguous::Vector;
    /// let vec: Vector<char> = "abcab".chars().collect();
    /// assert_eq!(vec.index_of(&'b'), Some(1));
    /// assert_eq!(vec.last_index_of(&'b'), Some(4));
    /// assert_eq!(vec.index_of(&'z'), None);
    /// ```
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.iter().position(|e| e == item)
    }

    /// Returns the index of the last element equal to `item`.
    pub fn last_index_of(&self, item: &T) -> Option<usize> {
        self.iter().rposition(|e| e == item)
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);

        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vec = Vector::new();
        vec.extend(iter);
        vec
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        for slot in &mut self.arr[..self.len] {
            // SAFETY: All slots below len are initialized and are never read again.
            unsafe { slot.assume_init_drop() }
        }
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The first len slots are initialized and MaybeUninit<T> has the same layout as T.
        // The pointer comes from a boxed slice, so it is non-null and aligned even when empty.
        unsafe { slice::from_raw_parts(self.arr.as_ptr().cast::<T>(), self.len) }
    }
}

impl<T> DerefMut for Vector<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As for deref, with the mutable borrow of self preventing aliasing.
        unsafe { slice::from_raw_parts_mut(self.arr.as_mut_ptr().cast::<T>(), self.len) }
    }
}

impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        let mut vec = Vector::with_cap(self.len);
        vec.extend(self.iter().cloned());
        vec
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: Debug> Debug for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("contents", &&**self)
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}
