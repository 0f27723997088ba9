//! A module containing [`Vector`] and associated types.
//!
//! Alongside the Vector itself, there is [`IntoIter`] for owned iteration and [`Cursor`] for
//! iteration that can remove the element it has just yielded. [`IterMut`](std::slice::IterMut) and
//! [`Iter`](std::slice::Iter) from [`std::slice`] are used for borrowed iteration.
//!
//! [`Vector`] is also re-exported under the parent module.

mod cursor;
mod iter;
mod vector;

pub use cursor::*;
pub use iter::*;
pub use vector::*;
