use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for collection with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityOverflow;

impl Display for CapacityOverflow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Capacity overflow!")
    }
}

impl Error for CapacityOverflow {}

/// A cursor was advanced after it had already yielded its last element.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Cursor has no next element!")]
pub struct NoNextElement;

/// A cursor was asked to remove an element before `next` was called, or twice for the same
/// element.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Cursor has no current element to remove!")]
pub struct NoCurrentElement;

/// A hash set was configured with a load factor that isn't a finite, positive number.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq)]
#[display("Load factor must be finite and greater than zero, found {load_factor}!")]
pub struct InvalidLoadFactor {
    pub load_factor: f32,
}

/// A [`NodeHandle`](crate::collections::linked::NodeHandle) no longer refers to a live node.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Node handle {index} does not refer to an element of this list!")]
pub struct InvalidHandle {
    pub index: usize,
}
