//! A module containing [`HashSet`] and associated types: [`Iter`] and [`IntoIter`] for iteration,
//! and [`Cursor`] for iteration with removal.

mod cursor;
mod hash_set;
mod iter;

pub use cursor::*;
pub use hash_set::*;
pub use iter::*;
