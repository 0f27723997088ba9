mod cursor;
mod display;
mod iter;
mod node;
mod tests;
mod tree_set;

pub use cursor::*;
pub use display::*;
pub use iter::*;
pub(crate) use node::*;
pub use tree_set::*;
