use std::borrow::Borrow;
use std::cmp::{self, Ordering};
use std::fmt::{self, Debug, Display, Formatter};
use std::mem;

use super::{Cursor, Iter, Node, NodeId, ParentChildren, Rotated};
use crate::collections::binary_tree::{Comparator, Natural};
use crate::collections::contiguous::Vector;
use crate::collections::contiguous::arena::Arena;
use crate::collections::traits::{Set, SortedSet};
use crate::util::fmt::DebugRaw;
use crate::util::option::OptionExtension;

pub(crate) const DEFAULT_SYMBOLS_PER_LEVEL: usize = 2;

/// A set of unique elements kept in order by a binary search tree. Elements are ordered (and
/// deduplicated) by a [`Comparator`], which defaults to the [`Natural`] order of `T`.
///
/// Each node links to its parent as well as its children, which allows in-order iteration and
/// removal through a [`Cursor`] without an auxiliary stack. The tree is not self-balancing:
/// [`rebalance`](TreeSet::rebalance) rebuilds it into a minimum-height shape on request.
///
/// It is a logic error for an element to be modified in a way that changes its order relative to
/// the other elements while it is in the set.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the TreeSet.
/// - `h`: The height of the tree, between `log2(n)` and `n`.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(h)` |
/// | `get` | `O(h)` |
/// | `take` | `O(h)` |
/// | `first/last` | `O(h)` |
/// | `floor/ceiling` | `O(h)` |
/// | `height/width` | `O(n)` |
/// | `invert` | `O(n)` |
/// | `rebalance` | `O(n)` |
pub struct TreeSet<T, C: Comparator<T> = Natural> {
    pub(crate) nodes: Arena<Node<T>>,
    pub(crate) root: Option<NodeId>,
    pub(crate) comparator: C,
    pub(crate) inverted: bool,
    pub(crate) symbols_per_level: usize,
}

impl<T: Ord> TreeSet<T> {
    /// Creates a new, empty TreeSet ordered by the natural order of `T`.
    pub fn new() -> TreeSet<T> {
        TreeSet::with_comparator(Natural)
    }
}

impl<T, C: Comparator<T>> TreeSet<T, C> {
    /// Creates a new, empty TreeSet ordered by `comparator`.
    pub fn with_comparator(comparator: C) -> TreeSet<T, C> {
        TreeSet {
            nodes: Arena::new(),
            root: None,
            comparator,
            inverted: false,
            symbols_per_level: DEFAULT_SYMBOLS_PER_LEVEL,
        }
    }

    /// Returns the number of elements in the TreeSet.
    pub const fn len(&self) -> usize {
        self.nodes.len
    }

    /// Returns true if the TreeSet contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.nodes.len == 0
    }

    /// Returns a reference to the comparator ordering the TreeSet.
    pub const fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Returns true if the TreeSet has been [inverted](TreeSet::invert) an odd number of times.
    pub const fn is_inverted(&self) -> bool {
        self.inverted
    }

    /// Adds `item` to the TreeSet. Returns false without modifying the set if an equal element is
    /// already present.
    pub fn insert(&mut self, item: T) -> bool {
        match self.locate(&item) {
            Some((_, Ordering::Equal)) => false,
            parent => {
                self.attach(parent, item);
                true
            },
        }
    }

    /// Adds `item` to the TreeSet, replacing and returning an equal element if one was present.
    /// A replaced element keeps its place in the tree.
    pub fn replace(&mut self, item: T) -> Option<T> {
        match self.locate(&item) {
            Some((id, Ordering::Equal)) => Some(mem::replace(&mut self.node_mut(id).value, item)),
            parent => {
                self.attach(parent, item);
                None
            },
        }
    }

    /// Returns the stored element equal to `item`.
    pub fn get<Q>(&self, item: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        self.find(item).map(|id| &self.node(id).value)
    }

    /// Returns a mutable reference to the stored element equal to `item`. Only usable within the
    /// crate, by types whose ordering ignores the part that is changed.
    pub(crate) fn get_mut<Q>(&mut self, item: &Q) -> Option<&mut T>
    where
        T: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        let id = self.find(item)?;
        Some(&mut self.node_mut(id).value)
    }

    /// Returns true if the TreeSet contains an element equal to `item`.
    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        self.find(item).is_some()
    }

    /// Removes and returns the element equal to `item`, if there is one.
    pub fn take<Q>(&mut self, item: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        let id = self.find(item)?;
        Some(self.remove_node(id))
    }

    /// Removes the element equal to `item`, returning true if it was present.
    pub fn remove<Q>(&mut self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        self.take(item).is_some()
    }

    /// Returns the first element in iteration order: the least element, or the greatest if the
    /// set is inverted.
    pub fn first(&self) -> Option<&T> {
        let id = self.least_from(self.root?);
        Some(&self.node(id).value)
    }

    /// Returns the last element in iteration order.
    pub fn last(&self) -> Option<&T> {
        let id = self.greatest_from(self.root?);
        Some(&self.node(id).value)
    }

    /// Returns the greatest element less than or equal to `item`.
    ///
    /// # Examples
    /// ```
    /// # use set_collections::collections::binary_tree::TreeSet;
    /// let set: TreeSet<i32> = [3, -10, 20, 1, 10, 8, 100, 17].into_iter().collect();
    /// assert_eq!(set.floor(&9), Some(&8));
    /// assert_eq!(set.floor(&10), Some(&10));
    /// assert_eq!(set.floor(&-11), None);
    /// ```
    pub fn floor<Q>(&self, item: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        self.floor_node(item).map(|id| &self.node(id).value)
    }

    /// Returns the least element greater than or equal to `item`.
    pub fn ceiling<Q>(&self, item: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        self.ceiling_node(item).map(|id| &self.node(id).value)
    }

    /// Creates a new TreeSet containing clones of the elements from `from` (inclusive) to `to`
    /// (exclusive), using the same comparator. The new set is empty if `from` doesn't come before
    /// `to`.
    ///
    /// # Examples
    /// ```
    /// # use set_collections::collections::binary_tree::TreeSet;
    /// let set: TreeSet<i32> = [3, -10, 20, 1, 10, 8, 100, 17].into_iter().collect();
    /// let sub = set.sub_set(&10, &20);
    /// assert_eq!(sub.iter().copied().collect::<Vec<_>>(), [10, 17]);
    /// ```
    pub fn sub_set<Q>(&self, from: &Q, to: &Q) -> TreeSet<T, C>
    where
        T: Borrow<Q> + Clone,
        C: Comparator<Q> + Clone,
        Q: ?Sized,
    {
        let mut set = TreeSet {
            nodes: Arena::new(),
            root: None,
            comparator: self.comparator.clone(),
            inverted: self.inverted,
            symbols_per_level: self.symbols_per_level,
        };

        let mut current = self.ceiling_node(from);
        while let Some(id) = current {
            let value = &self.node(id).value;
            if self.order(to, value) != Ordering::Greater {
                break;
            }

            set.insert(value.clone());
            current = self.successor(id);
        }

        set
    }

    /// Returns the number of nodes on the longest path from the root to a leaf. An empty tree has
    /// a height of 0.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut pending = Vector::new();
        pending.extend(self.root.map(|root| (root, 1)));

        while let Some((id, depth)) = pending.pop() {
            height = cmp::max(height, depth);

            let node = self.node(id);
            pending.extend(node.left.map(|left| (left, depth + 1)));
            pending.extend(node.right.map(|right| (right, depth + 1)));
        }

        height
    }

    /// Returns the number of leaves, nodes without any children.
    pub fn width(&self) -> usize {
        self.nodes.iter().filter(|node| node.is_leaf()).count()
    }

    /// Mirrors the tree, swapping the children of every node and reversing the comparator.
    /// Iteration runs from greatest to least afterwards, and every lookup keeps working.
    ///
    /// # Examples
    /// ```
    /// # use set_collections::collections::binary_tree::TreeSet;
    /// let mut set: TreeSet<u8> = [2, 1, 3].into_iter().collect();
    /// set.invert();
    /// assert_eq!(set.iter().copied().collect::<Vec<_>>(), [3, 2, 1]);
    /// assert!(set.contains(&1));
    /// ```
    pub fn invert(&mut self) {
        for node in self.nodes.iter_mut() {
            mem::swap(&mut node.left, &mut node.right);
        }

        self.inverted = !self.inverted;
    }

    /// Rebuilds the tree into a minimum-height shape, with a height of `⌈log2(n + 1)⌉`. Every
    /// subtree is rooted at the middle element of its range.
    pub fn rebalance(&mut self) {
        let mut ordered = Vector::with_cap(self.len());
        let mut current = self.root.map(|root| self.least_from(root));
        while let Some(id) = current {
            ordered.push(id);
            current = self.successor(id);
        }

        let mut values = Vector::with_cap(ordered.len());
        for id in ordered {
            values.push(self.nodes.release(id).or_unreachable().value);
        }

        // Ids are handed out from 0 again, so each id is the element's in-order index.
        self.nodes.clear();
        let len = values.len();
        for value in values {
            self.nodes.alloc(Node::leaf(value, None));
        }

        self.root = self.link_range(0, len, None);
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    /// Keeps only the elements for which `f` returns true.
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, mut f: F) {
        let mut cursor = self.cursor();
        while cursor.has_next() {
            if !f(cursor.next()) {
                cursor.remove();
            }
        }
    }

    /// Returns an iterator over all elements in order, as references.
    pub fn iter(&self) -> Iter<'_, T, C> {
        Iter::new(self)
    }

    /// Returns a [`Cursor`] positioned before the first element.
    pub fn cursor(&mut self) -> Cursor<'_, T, C> {
        Cursor::new(self)
    }

    /// Returns the number of spaces used for each level of indentation by the tree diagrams.
    pub const fn symbols_per_level(&self) -> usize {
        self.symbols_per_level
    }

    /// Sets the number of spaces used for each level of indentation by the tree diagrams.
    pub fn set_symbols_per_level(&mut self, symbols: usize) {
        self.symbols_per_level = symbols;
    }

    /// Returns a [`Display`]-able view of the tree rotated a quarter turn anti-clockwise: the
    /// root is on the left, the right subtree above it and the left subtree below.
    ///
    /// # Examples
    /// ```
    /// # use set_collections::collections::binary_tree::TreeSet;
    /// let set: TreeSet<u8> = [2, 1, 3].into_iter().collect();
    /// assert_eq!(set.display_rotated().to_string(), "  3\n2\n  1\n");
    /// ```
    pub fn display_rotated(&self) -> Rotated<'_, T, C> {
        Rotated { tree: self }
    }

    /// Returns a [`Display`]-able view listing each node followed by its children, indented by
    /// depth.
    pub fn display_parent_children(&self) -> ParentChildren<'_, T, C> {
        ParentChildren { tree: self }
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node<T> {
        self.nodes.get(id).or_unreachable()
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        self.nodes.get_mut(id).or_unreachable()
    }

    /// Compares `item` to a stored value, honouring inversion.
    pub(crate) fn order<Q>(&self, item: &Q, value: &T) -> Ordering
    where
        T: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        let ordering = Comparator::<Q>::compare(&self.comparator, item, value.borrow());
        if self.inverted { ordering.reverse() } else { ordering }
    }

    /// Descends from the root towards `item`. Returns the matching node with [`Ordering::Equal`],
    /// or the last node visited along with the side `item` would be attached on. Returns [`None`]
    /// only for an empty tree.
    fn locate<Q>(&self, item: &Q) -> Option<(NodeId, Ordering)>
    where
        T: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        let mut current = self.root?;
        loop {
            let node = self.node(current);
            let ordering = self.order(item, &node.value);
            let child = match ordering {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => None,
            };

            match child {
                Some(child) => current = child,
                None => return Some((current, ordering)),
            }
        }
    }

    fn find<Q>(&self, item: &Q) -> Option<NodeId>
    where
        T: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        match self.locate(item)? {
            (id, Ordering::Equal) => Some(id),
            _ => None,
        }
    }

    fn floor_node<Q>(&self, item: &Q) -> Option<NodeId>
    where
        T: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        let mut best = None;
        let mut current = self.root;

        while let Some(id) = current {
            let node = self.node(id);
            match self.order(item, &node.value) {
                Ordering::Equal => return Some(id),
                Ordering::Less => current = node.left,
                Ordering::Greater => {
                    best = Some(id);
                    current = node.right;
                },
            }
        }

        best
    }

    fn ceiling_node<Q>(&self, item: &Q) -> Option<NodeId>
    where
        T: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        let mut best = None;
        let mut current = self.root;

        while let Some(id) = current {
            let node = self.node(id);
            match self.order(item, &node.value) {
                Ordering::Equal => return Some(id),
                Ordering::Greater => current = node.right,
                Ordering::Less => {
                    best = Some(id);
                    current = node.left;
                },
            }
        }

        best
    }

    /// Stores `value` in a new leaf, attached to the side of `parent` given by the ordering
    /// returned from [`locate`](TreeSet::locate), or as the root if there is no parent.
    fn attach(&mut self, parent: Option<(NodeId, Ordering)>, value: T) -> NodeId {
        let id = self.nodes.alloc(Node::leaf(value, parent.map(|(parent, _)| parent)));

        match parent {
            None => self.root = Some(id),
            Some((parent, Ordering::Less)) => self.node_mut(parent).left = Some(id),
            Some((parent, _)) => self.node_mut(parent).right = Some(id),
        }

        id
    }

    /// Removes the element held by `id`. A junction (a node with two children) keeps its place in
    /// the tree and takes the value of its in-order predecessor, which is spliced out instead.
    pub(crate) fn remove_node(&mut self, id: NodeId) -> T {
        let node = self.node(id);
        match (node.left, node.right) {
            (Some(left), Some(_)) => {
                let predecessor = self.greatest_from(left);
                let value = self.splice_out(predecessor);
                mem::replace(&mut self.node_mut(id).value, value)
            },
            _ => self.splice_out(id),
        }
    }

    /// Removes a node with at most one child, linking that child to the node's parent.
    fn splice_out(&mut self, id: NodeId) -> T {
        let node = self.nodes.release(id).or_unreachable();
        let child = node.left.or(node.right);

        if let Some(child) = child {
            self.node_mut(child).parent = node.parent;
        }

        match node.parent {
            None => self.root = child,
            Some(parent) => {
                let parent = self.node_mut(parent);
                if parent.left == Some(id) {
                    parent.left = child;
                } else {
                    parent.right = child;
                }
            },
        }

        node.value
    }

    /// Links the nodes with ids `start..end` into a subtree rooted at the middle id, returning the
    /// root. Assumes each id is also the node's in-order index.
    fn link_range(&mut self, start: usize, end: usize, parent: Option<NodeId>) -> Option<NodeId> {
        if start >= end {
            return None;
        }

        let middle = start + (end - start) / 2;
        let left = self.link_range(start, middle, Some(middle));
        let right = self.link_range(middle + 1, end, Some(middle));

        let node = self.node_mut(middle);
        node.parent = parent;
        node.left = left;
        node.right = right;
        Some(middle)
    }

    pub(crate) fn least_from(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self.node(id).left {
            id = left;
        }
        id
    }

    pub(crate) fn greatest_from(&self, mut id: NodeId) -> NodeId {
        while let Some(right) = self.node(id).right {
            id = right;
        }
        id
    }

    /// The next node in order: the least node of the right subtree if there is one, otherwise the
    /// first ancestor reached from its left side.
    pub(crate) fn successor(&self, id: NodeId) -> Option<NodeId> {
        if let Some(right) = self.node(id).right {
            return Some(self.least_from(right));
        }

        let mut child = id;
        let mut parent = self.node(id).parent;
        while let Some(current) = parent {
            let node = self.node(current);
            if node.left == Some(child) {
                return Some(current);
            }

            child = current;
            parent = node.parent;
        }

        None
    }

    pub(crate) fn predecessor(&self, id: NodeId) -> Option<NodeId> {
        if let Some(left) = self.node(id).left {
            return Some(self.greatest_from(left));
        }

        let mut child = id;
        let mut parent = self.node(id).parent;
        while let Some(current) = parent {
            let node = self.node(current);
            if node.right == Some(child) {
                return Some(current);
            }

            child = current;
            parent = node.parent;
        }

        None
    }
}

impl<T, C: Comparator<T>> Set<T> for TreeSet<T, C> {
    type Iter<'a> = Iter<'a, T, C> where Self: 'a, T: 'a;

    fn len(&self) -> usize {
        TreeSet::len(self)
    }

    fn insert(&mut self, item: T) -> bool {
        TreeSet::insert(self, item)
    }

    fn replace(&mut self, item: T) -> Option<T> {
        TreeSet::replace(self, item)
    }

    fn get(&self, item: &T) -> Option<&T> {
        TreeSet::get(self, item)
    }

    fn take(&mut self, item: &T) -> Option<T> {
        TreeSet::take(self, item)
    }

    fn retain<F: FnMut(&T) -> bool>(&mut self, f: F) {
        TreeSet::retain(self, f)
    }

    fn clear(&mut self) {
        TreeSet::clear(self)
    }

    fn iter<'a>(&'a self) -> Self::Iter<'a> {
        TreeSet::iter(self)
    }
}

impl<T, C: Comparator<T> + Clone> SortedSet<T> for TreeSet<T, C> {
    fn first(&self) -> Option<&T> {
        TreeSet::first(self)
    }

    fn last(&self) -> Option<&T> {
        TreeSet::last(self)
    }

    fn floor(&self, item: &T) -> Option<&T> {
        TreeSet::floor(self, item)
    }

    fn ceiling(&self, item: &T) -> Option<&T> {
        TreeSet::ceiling(self, item)
    }

    fn sub_set(&self, from: &T, to: &T) -> Self
    where
        T: Clone,
    {
        TreeSet::sub_set(self, from, to)
    }
}

impl<T: Ord> Default for TreeSet<T> {
    fn default() -> Self {
        TreeSet::new()
    }
}

impl<T, C: Comparator<T>> Extend<T> for TreeSet<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: Ord> FromIterator<T> for TreeSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = TreeSet::new();
        set.extend(iter);
        set
    }
}

impl<T: Clone, C: Comparator<T> + Clone> Clone for TreeSet<T, C> {
    fn clone(&self) -> Self {
        TreeSet {
            nodes: self.nodes.clone(),
            root: self.root,
            comparator: self.comparator.clone(),
            inverted: self.inverted,
            symbols_per_level: self.symbols_per_level,
        }
    }
}

impl<T: PartialEq, C: Comparator<T>> PartialEq for TreeSet<T, C> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq, C: Comparator<T>> Eq for TreeSet<T, C> {}

impl<T: Debug, C: Comparator<T>> TreeSet<T, C> {
    fn debug_branch(&self, id: Option<NodeId>) -> String {
        let Some(id) = id else {
            return String::from("-");
        };
        let node = self.node(id);

        format!(
            "{}\n({:?})\n{}",
            self.debug_branch(node.left)
                .lines()
                .map(|l| String::from("┌    ") + l)
                .collect::<Vector<_>>()
                .join("\n"),
            node.value,
            self.debug_branch(node.right)
                .lines()
                .map(|l| String::from("└    ") + l)
                .collect::<Vector<_>>()
                .join("\n")
        )
    }
}

impl<T: Debug, C: Comparator<T>> Debug for TreeSet<T, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeSet")
            .field("nodes", &DebugRaw(format!("\n{}\n", self.debug_branch(self.root))))
            .field("len", &self.len())
            .field("inverted", &self.inverted)
            .finish()
    }
}

impl<T: Display, C: Comparator<T>> Display for TreeSet<T, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f, "#{{{}}}",
            self.iter()
                .map(|i| format!("{i}"))
                .collect::<Vector<String>>()
                .join(", ")
        )
    }
}
