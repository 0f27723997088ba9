mod cursor;
mod iter;
mod linked_hash_set;
mod tests;

pub use cursor::*;
pub use iter::*;
pub use linked_hash_set::*;
