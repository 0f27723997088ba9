//! Hash-based collection types. [`HashSet`] stores its elements in chained buckets, each bucket
//! being a [`Vector`](crate::collections::contiguous::Vector) of the elements whose hashes map to
//! it.

pub mod set;

pub(crate) mod table;

#[doc(inline)]
pub use set::HashSet;
