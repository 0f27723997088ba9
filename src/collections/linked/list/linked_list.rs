use std::fmt::{self, Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::mem;
use std::num::NonZero;

use derive_more::IsVariant;

use super::{Cursor, Iter, Node, NodeHandle};
use crate::collections::contiguous::arena::Arena;
#[doc(inline)]
pub use crate::util::error::{CapacityOverflow, IndexOutOfBounds, InvalidHandle};
use crate::util::option::OptionExtension;
use crate::util::result::ResultExtension;

/// A list with links in both directions. Each element lives in a node that can be addressed
/// directly through the [`NodeHandle`] returned when it was inserted, which allows splicing in
/// `O(1)` without searching. See also: [`Cursor`] for iteration with removal.
///
/// Nodes are kept in an index arena rather than separate allocations, so removing an element
/// frees its slot for the next insertion instead of returning memory to the allocator.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the LinkedList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `push_front/back` | `O(1)`* |
/// | `pop_front/back` | `O(1)` |
/// | `insert_after/before` | `O(1)`* |
/// | `remove_node` | `O(1)` |
/// | `value` | `O(1)` |
/// | `get` | `O(min(i, n-i))` |
/// | `insert` | `O(min(i, n-i))` |
/// | `remove` | `O(min(i, n-i))` |
/// | `contains` | `O(n)` |
///
/// \* Unless the node arena has to grow, which is `O(n)`.
#[derive(Clone)]
pub struct LinkedList<T> {
    pub(crate) nodes: Arena<Node<T>>,
    pub(crate) state: ListState,
}

#[derive(Debug, Default, Clone, Copy, IsVariant)]
pub(crate) enum ListState {
    #[default]
    Empty,
    Full(ListContents),
}

use ListState::*;

#[derive(Debug, Clone, Copy)]
pub(crate) struct ListContents {
    pub len: NonZero<usize>,
    pub head: NodeHandle,
    pub tail: NodeHandle,
}

impl<T> LinkedList<T> {
    /// Creates a new LinkedList with no elements.
    pub fn new() -> LinkedList<T> {
        LinkedList {
            nodes: Arena::new(),
            state: Empty,
        }
    }

    /// Returns the length of the LinkedList.
    pub const fn len(&self) -> usize {
        match self.state {
            Empty => 0,
            Full(ListContents { len, .. }) => len.get(),
        }
    }

    /// Returns true if the LinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub fn front(&self) -> Option<&T> {
        self.value(self.first_handle()?)
    }

    /// Returns a mutable reference to the first element in the list, if it exists.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.value_mut(self.first_handle()?)
    }

    /// Returns a reference to the last element in the list, if it exists.
    pub fn back(&self) -> Option<&T> {
        self.value(self.last_handle()?)
    }

    /// Returns a mutable reference to the last element in the list, if it exists.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.value_mut(self.last_handle()?)
    }

    /// Returns the handle of the first node, if the list isn't empty.
    pub const fn first_handle(&self) -> Option<NodeHandle> {
        match self.state {
            Empty => None,
            Full(ListContents { head, .. }) => Some(head),
        }
    }

    /// Returns the handle of the last node, if the list isn't empty.
    pub const fn last_handle(&self) -> Option<NodeHandle> {
        match self.state {
            Empty => None,
            Full(ListContents { tail, .. }) => Some(tail),
        }
    }

    /// Returns the handle of the node after `handle`. Returns [`None`] if `handle` is the last
    /// node or no longer refers to a node.
    pub fn next_handle(&self, handle: NodeHandle) -> Option<NodeHandle> {
        self.nodes.get(handle.0)?.next
    }

    /// Returns the handle of the node before `handle`. Returns [`None`] if `handle` is the first
    /// node or no longer refers to a node.
    pub fn prev_handle(&self, handle: NodeHandle) -> Option<NodeHandle> {
        self.nodes.get(handle.0)?.prev
    }

    /// Returns a reference to the element held by the node at `handle`.
    pub fn value(&self, handle: NodeHandle) -> Option<&T> {
        self.nodes.get(handle.0).map(|node| &node.value)
    }

    /// Returns a mutable reference to the element held by the node at `handle`.
    pub fn value_mut(&mut self, handle: NodeHandle) -> Option<&mut T> {
        self.nodes.get_mut(handle.0).map(|node| &mut node.value)
    }

    /// Add the provided element to the front of the LinkedList, returning the handle of its node.
    ///
    /// # Examples
    /// ```
    /// # use set_collections::collections::linked::LinkedList;
    /// let mut list = LinkedList::new();
    /// let one = list.push_front(1);
    /// list.push_front(0);
    /// assert_eq!(list.value(one), Some(&1));
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [0, 1]);
    /// ```
    pub fn push_front(&mut self, value: T) -> NodeHandle {
        match self.state {
            Empty => self.push_only(value),
            Full(ListContents { head, .. }) => self.link_before(head, value),
        }
    }

    /// Add the provided element to the back of the LinkedList, returning the handle of its node.
    pub fn push_back(&mut self, value: T) -> NodeHandle {
        match self.state {
            Empty => self.push_only(value),
            Full(ListContents { tail, .. }) => self.link_after(tail, value),
        }
    }

    /// Removes the first element from the list and returns it, if the list isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        self.remove_node(self.first_handle()?)
    }

    /// Removes the last element from the list and returns it, if the list isn't empty.
    pub fn pop_back(&mut self) -> Option<T> {
        self.remove_node(self.last_handle()?)
    }

    /// Inserts `value` directly after the node at `at`, returning the handle of the new node.
    ///
    /// # Panics
    /// Panics if `at` doesn't refer to a node of this list.
    pub fn insert_after(&mut self, at: NodeHandle, value: T) -> NodeHandle {
        self.try_insert_after(at, value).throw()
    }

    /// Inserts `value` directly after the node at `at`, or returns an error if `at` doesn't refer
    /// to a node.
    pub fn try_insert_after(&mut self, at: NodeHandle, value: T) -> Result<NodeHandle, InvalidHandle> {
        self.check_handle(at)?;
        Ok(self.link_after(at, value))
    }

    /// Inserts `value` directly before the node at `at`, returning the handle of the new node.
    ///
    /// # Panics
    /// Panics if `at` doesn't refer to a node of this list.
    pub fn insert_before(&mut self, at: NodeHandle, value: T) -> NodeHandle {
        self.try_insert_before(at, value).throw()
    }

    /// Inserts `value` directly before the node at `at`, or returns an error if `at` doesn't refer
    /// to a node.
    pub fn try_insert_before(&mut self, at: NodeHandle, value: T) -> Result<NodeHandle, InvalidHandle> {
        self.check_handle(at)?;
        Ok(self.link_before(at, value))
    }

    /// Unlinks the node at `handle` and returns its element, joining its neighbours (or updating
    /// the head and tail) in `O(1)`. Returns [`None`] if `handle` no longer refers to a node.
    ///
    /// # Examples
    /// ```
    /// # use set_collections::collections::linked::LinkedList;
    /// let mut list = LinkedList::new();
    /// list.push_back('a');
    /// let b = list.push_back('b');
    /// list.push_back('c');
    ///
    /// assert_eq!(list.remove_node(b), Some('b'));
    /// assert_eq!(list.remove_node(b), None);
    /// assert_eq!(list.iter().collect::<String>(), "ac");
    /// ```
    pub fn remove_node(&mut self, handle: NodeHandle) -> Option<T> {
        let node = self.nodes.release(handle.0)?;

        if let Some(prev) = node.prev {
            self.node_mut(prev).next = node.next;
        }
        if let Some(next) = node.next {
            self.node_mut(next).prev = node.prev;
        }

        let Full(contents) = &mut self.state else {
            unreachable!("a node was released from an empty list")
        };

        match NonZero::new(contents.len.get() - 1) {
            Some(new_len) => {
                contents.len = new_len;
                if node.prev.is_none() {
                    contents.head = node.next.or_unreachable();
                }
                if node.next.is_none() {
                    contents.tail = node.prev.or_unreachable();
                }
            },
            None => self.state = Empty,
        }

        Some(node.value)
    }

    /// Returns the handle of the node at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    pub fn handle_at(&self, index: usize) -> NodeHandle {
        self.try_handle_at(index).throw()
    }

    /// Returns the handle of the node at `index`, seeking from whichever end is closer, or an
    /// error if `index` is out of bounds.
    pub fn try_handle_at(&self, index: usize) -> Result<NodeHandle, IndexOutOfBounds> {
        let Full(ListContents { len, head, tail }) = self.state else {
            return Err(IndexOutOfBounds { index, len: 0 });
        };
        let len = len.get();

        if index >= len {
            return Err(IndexOutOfBounds { index, len });
        }

        let mut handle;
        if index <= len / 2 {
            handle = head;
            for _ in 0..index {
                handle = self.node(handle).next.or_unreachable();
            }
        } else {
            handle = tail;
            for _ in index..len - 1 {
                handle = self.node(handle).prev.or_unreachable();
            }
        }

        Ok(handle)
    }

    /// Returns a reference to the element at the provided `index`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the element at the provided `index`, returning an [`Err`] on a
    /// failure rather than panicking.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        Ok(&self.node(self.try_handle_at(index)?).value)
    }

    /// Returns a mutable reference to the element at the provided `index`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    /// Returns a mutable reference to the element at the provided `index`, returning an [`Err`] on
    /// a failure rather than panicking.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        let handle = self.try_handle_at(index)?;
        Ok(&mut self.node_mut(handle).value)
    }

    /// Inserts `value` so that it ends up at `index`, which may be equal to the length of the list.
    ///
    /// # Panics
    /// Panics if `index` is greater than the length of the LinkedList.
    pub fn insert(&mut self, index: usize, value: T) -> NodeHandle {
        self.try_insert(index, value).throw()
    }

    /// Inserts `value` so that it ends up at `index`, or returns an error if `index > len`.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<NodeHandle, IndexOutOfBounds> {
        if index == self.len() {
            return Ok(self.push_back(value));
        }

        let at = self.try_handle_at(index)?;
        Ok(self.link_before(at, value))
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    /// Removes and returns the element at `index`, or returns an error if it is out of bounds.
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        let handle = self.try_handle_at(index)?;
        Ok(self.remove_node(handle).or_unreachable())
    }

    /// Replaces the element at `index`, returning the old value.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    pub fn replace(&mut self, index: usize, value: T) -> T {
        mem::replace(self.get_mut(index), value)
    }

    /// Removes every element. Handles from before the call are invalidated.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.state = Empty;
    }

    /// Keeps only the elements for which `f` returns true, preserving their order.
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, mut f: F) {
        let mut cursor = self.cursor();
        while cursor.has_next() {
            if !f(cursor.next()) {
                cursor.remove();
            }
        }
    }

    /// Returns an iterator over the elements of the list, from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Returns a [`Cursor`] positioned before the first element.
    pub fn cursor(&mut self) -> Cursor<'_, T> {
        Cursor::new(self)
    }

    pub(crate) fn node(&self, handle: NodeHandle) -> &Node<T> {
        self.nodes.get(handle.0).or_unreachable()
    }

    pub(crate) fn node_mut(&mut self, handle: NodeHandle) -> &mut Node<T> {
        self.nodes.get_mut(handle.0).or_unreachable()
    }

    fn check_handle(&self, handle: NodeHandle) -> Result<(), InvalidHandle> {
        match self.nodes.get(handle.0) {
            Some(_) => Ok(()),
            None => Err(InvalidHandle { index: handle.0 }),
        }
    }

    fn push_only(&mut self, value: T) -> NodeHandle {
        let handle = NodeHandle(self.nodes.alloc(Node {
            value,
            prev: None,
            next: None,
        }));

        self.state = Full(ListContents {
            len: NonZero::<usize>::MIN,
            head: handle,
            tail: handle,
        });
        handle
    }

    fn link_after(&mut self, at: NodeHandle, value: T) -> NodeHandle {
        let next = self.node(at).next;
        let handle = NodeHandle(self.nodes.alloc(Node {
            value,
            prev: Some(at),
            next,
        }));

        self.node_mut(at).next = Some(handle);
        match next {
            Some(next) => self.node_mut(next).prev = Some(handle),
            None => self.contents_mut().tail = handle,
        }

        self.increment_len();
        handle
    }

    fn link_before(&mut self, at: NodeHandle, value: T) -> NodeHandle {
        let prev = self.node(at).prev;
        let handle = NodeHandle(self.nodes.alloc(Node {
            value,
            prev,
            next: Some(at),
        }));

        self.node_mut(at).prev = Some(handle);
        match prev {
            Some(prev) => self.node_mut(prev).next = Some(handle),
            None => self.contents_mut().head = handle,
        }

        self.increment_len();
        handle
    }

    fn contents_mut(&mut self) -> &mut ListContents {
        match &mut self.state {
            Full(contents) => contents,
            Empty => unreachable!("a linked node exists in an empty list"),
        }
    }

    fn increment_len(&mut self) {
        let contents = self.contents_mut();
        contents.len = contents.len.checked_add(1).ok_or(CapacityOverflow).throw();
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Returns true if the list contains an element equal to `item`.
    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|e| e == item)
    }

    /// Returns the index of the first element equal to `item`.
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.iter().position(|e| e == item)
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: Hash> Hash for LinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for item in self {
            item.hash(state);
        }
    }
}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
