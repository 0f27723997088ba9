//! Maps built on top of the set types. A map is a set of [`Entry`]s which compare, order and hash
//! by key alone, so every set flavour doubles as a map flavour through [`SetMap`].

mod entry;
mod iter;
mod set_map;
mod tests;

pub use entry::*;
pub use iter::*;
pub use set_map::*;
