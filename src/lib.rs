//! Hand-written set collections, along with the sequence types they are built from.
//!
//! # Purpose
//! The crate provides three families of set:
//! - [`HashSet`](collections::hash::HashSet): an unordered set of chained hash buckets.
//! - [`TreeSet`](collections::binary_tree::TreeSet): a sorted set backed by an unbalanced binary
//!   search tree, with floor / ceiling queries, inversion and on-demand rebalancing.
//! - [`LinkedHashSet`](collections::ordered::LinkedHashSet): a set that remembers insertion order,
//!   by pairing a [`LinkedList`](collections::linked::LinkedList) with a hash index of list nodes.
//!
//! A small [`map`](collections::map) adapter layers key-value storage over any of them.
//!
//! # Method
//! None of the collections here are built on [`Vec`] or the standard library's collections. The
//! buckets, node arenas and orderings all sit on top of this crate's own
//! [`Array`](collections::contiguous::Array) and [`Vector`](collections::contiguous::Vector). Tree
//! and list nodes are stored in an index arena rather than behind raw pointers, so the parent and
//! sibling links are plain indices.
//!
//! # Error Handling
//! Operations that can fail come in pairs: `try_x` returns a [`Result`] with a strongly typed
//! error, while `x` panics with that error's message. Absence (a missing element, an empty
//! collection) is not an error and is reported as an [`Option`] or a `bool`.
//!
//! # Dependencies
//! This crate depends on `derive_more` for error and enum boilerplate. Nothing else is required at
//! runtime.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;
