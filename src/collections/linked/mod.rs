//! Linked collection types. Primarily revolves around [`LinkedList`], its stable [`NodeHandle`]s
//! and the accompanying [`Cursor`] type.

pub mod list;

#[doc(inline)]
pub use list::{Cursor, LinkedList, NodeHandle};
