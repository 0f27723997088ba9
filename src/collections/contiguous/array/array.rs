use std::fmt::{self, Debug, Formatter};
use std::mem::{self, MaybeUninit};
use std::ops::{Deref, DerefMut};

/// An owned, fixed size slice of `T`. Arrays are the storage behind [`Vector`](super::super::Vector)
/// and the bucket table of [`HashSet`](crate::collections::hash::HashSet).
///
/// Unlike [`Vector`](super::super::Vector), an Array never changes size on its own. A new size
/// can only be obtained by reallocating, which is only possible for an `Array<MaybeUninit<T>>`.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `size` | `O(1)` |
/// | `repeat_with` | `O(n)` |
/// | `realloc` | `O(n)` |
/// | index | `O(1)` |
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Array<T> {
    pub(crate) inner: Box<[T]>,
}

impl<T> Array<T> {
    /// Creates a new Array with size 0. No memory is allocated.
    ///
    /// # Examples
    /// ```
    /// # use set_collections::collections::contiguous::Array;
    /// let arr: Array<u8> = Array::new();
    /// assert_eq!(arr.size(), 0);
    /// ```
    pub fn new() -> Array<T> {
        Array {
            inner: Box::new([]),
        }
    }

    /// Creates a new Array of `size` elements, each produced by calling `f`.
    ///
    /// # Examples
    /// ```
    /// # use set_collections::collections::contiguous::Array;
    /// let mut next = 0;
    /// let arr = Array::repeat_with(3, || { next += 1; next });
    /// assert_eq!(&*arr, &[1, 2, 3]);
    /// ```
    pub fn repeat_with<F: FnMut() -> T>(size: usize, mut f: F) -> Array<T> {
        Array {
            inner: (0..size).map(|_| f()).collect(),
        }
    }

    /// Creates a new Array of `size` uninitialized elements.
    pub fn new_uninit(size: usize) -> Array<MaybeUninit<T>> {
        Array {
            inner: Box::new_uninit_slice(size),
        }
    }

    /// Returns the number of elements in the Array.
    pub fn size(&self) -> usize {
        self.inner.len()
    }
}

impl<T: Default> Array<T> {
    /// Creates a new Array of `size` elements, each set to the default value of `T`.
    ///
    /// # Examples
    /// ```
    /// # use set_collections::collections::contiguous::Array;
    /// let arr: Array<Option<u8>> = Array::repeat_default(2);
    /// assert_eq!(&*arr, &[None, None]);
    /// ```
    pub fn repeat_default(size: usize) -> Array<T> {
        Array::repeat_with(size, T::default)
    }
}

impl<T> Array<MaybeUninit<T>> {
    /// Replaces the storage with a fresh allocation of `new_size` slots, moving the first `keep`
    /// slots across. Slots past `keep` in the new allocation are uninitialized and any slots of the
    /// old allocation past `keep` are forgotten without being dropped.
    pub(crate) fn realloc(&mut self, new_size: usize, keep: usize) {
        let mut wip = Array::<T>::new_uninit(new_size);

        for (new, old) in wip.inner.iter_mut().zip(self.inner.iter_mut()).take(keep) {
            mem::swap(new, old);
        }

        *self = wip;
    }
}

impl<T> Default for Array<T> {
    fn default() -> Self {
        Array::new()
    }
}

impl<T> Deref for Array<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<T> DerefMut for Array<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

impl<T> FromIterator<T> for Array<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Array {
            inner: iter.into_iter().collect(),
        }
    }
}

impl<T: Debug> Debug for Array<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
