//! Traits shared by the set types, so code can be written once for [`HashSet`], [`TreeSet`] and
//! [`LinkedHashSet`] alike.
//!
//! [`HashSet`]: crate::collections::hash::HashSet
//! [`TreeSet`]: crate::collections::binary_tree::TreeSet
//! [`LinkedHashSet`]: crate::collections::ordered::LinkedHashSet

pub mod set;
pub mod sorted_set;

mod tests;

#[doc(inline)]
pub use set::Set;
#[doc(inline)]
pub use sorted_set::SortedSet;
