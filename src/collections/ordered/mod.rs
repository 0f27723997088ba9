//! Hash-based collections that remember the order their elements were inserted in.

pub mod set;

#[doc(inline)]
pub use set::LinkedHashSet;
