//! Sorted collections built on binary search trees.
//!
//! The trees here are not self-balancing. Insertion and removal keep the ordering but not the
//! shape, so a tree filled in sorted order degrades into a chain until
//! [`rebalance`](TreeSet::rebalance) is called.

pub mod comparator;
pub mod set;

#[doc(inline)]
pub use comparator::{Comparator, Natural};
#[doc(inline)]
pub use set::TreeSet;
