use std::cmp::Ordering;

/// A total order over values of type `T`, used by sorted collections in place of [`Ord`] when an
/// alternative ordering is needed.
///
/// Any `Fn(&T, &T) -> Ordering` is a comparator, so closures can be passed directly.
///
/// # Examples
/// ```
/// # use set_collections::collections::binary_tree::TreeSet;
/// let mut set = TreeSet::with_comparator(|a: &i32, b: &i32| a.abs().cmp(&b.abs()));
/// set.insert(-3);
/// set.insert(2);
/// assert!(!set.insert(3), "3 and -3 are equal under this comparator.");
/// assert_eq!(set.iter().copied().collect::<Vec<_>>(), [2, -3]);
/// ```
pub trait Comparator<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// The natural order of a type, as defined by its [`Ord`] implementation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Natural;

impl<T: Ord + ?Sized> Comparator<T> for Natural {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

impl<T: ?Sized, F: Fn(&T, &T) -> Ordering> Comparator<T> for F {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}
