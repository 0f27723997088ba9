use super::Set;

/// A [`Set`] that keeps its elements in order, according to some comparison of the elements.
pub trait SortedSet<T>: Set<T> {
    /// Returns the least element, if there is one.
    fn first(&self) -> Option<&T>;

    /// Returns the greatest element, if there is one.
    fn last(&self) -> Option<&T>;

    /// Returns the greatest element less than or equal to `item`.
    fn floor(&self, item: &T) -> Option<&T>;

    /// Returns the least element greater than or equal to `item`.
    fn ceiling(&self, item: &T) -> Option<&T>;

    /// Returns a new set holding copies of the elements in the half-open range `[from, to)`. The
    /// result is empty if `from` isn't less than `to`.
    fn sub_set(&self, from: &T, to: &T) -> Self
    where
        T: Clone;
}
