//! Set collections and the sequence types they are built on.
//!
//! # Sets
//! - [`HashSet`](hash::HashSet): separate chaining over a bucket array.
//! - [`TreeSet`](binary_tree::TreeSet): an unbalanced binary search tree with parent links, which
//!   can be inverted and rebalanced on demand.
//! - [`LinkedHashSet`](ordered::LinkedHashSet): a hash index over a linked list, iterating in
//!   insertion order.
//!
//! Each set implements [`Set`](traits::Set), and [`map`] turns any of them into a map.
//!
//! # Sequences
//! [`Vector`](contiguous::Vector) and [`LinkedList`](linked::LinkedList) back the sets, but are
//! complete collections in their own right. [`Vector`](contiguous::Vector) implements
//! [`Deref<Target = [T]>`](std::ops::Deref), which saves writing the more repetitive slice
//! functionality by hand.

#[cfg(feature = "binary_tree")]
pub mod binary_tree;
#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "hash")]
pub mod hash;
#[cfg(feature = "linked")]
pub mod linked;
#[cfg(feature = "map")]
pub mod map;
#[cfg(feature = "ordered")]
pub mod ordered;
#[cfg(feature = "traits")]
pub mod traits;
