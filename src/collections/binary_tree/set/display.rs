use std::fmt::{self, Display, Formatter};

use super::{NodeId, TreeSet};
use crate::collections::binary_tree::Comparator;
use crate::util::fmt::indent;

/// A rotated diagram of a [`TreeSet`], one element per line. See [`TreeSet::display_rotated`].
pub struct Rotated<'a, T, C: Comparator<T>> {
    pub(crate) tree: &'a TreeSet<T, C>,
}

impl<'a, T: Display, C: Comparator<T>> Rotated<'a, T, C> {
    fn write_branch(&self, f: &mut Formatter<'_>, id: Option<NodeId>, depth: usize) -> fmt::Result {
        let Some(id) = id else {
            return Ok(());
        };
        let node = self.tree.node(id);

        self.write_branch(f, node.right, depth + 1)?;
        indent(f, depth, self.tree.symbols_per_level)?;
        writeln!(f, "{}", node.value)?;
        self.write_branch(f, node.left, depth + 1)
    }
}

impl<'a, T: Display, C: Comparator<T>> Display for Rotated<'a, T, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.write_branch(f, self.tree.root, 0)
    }
}

/// A pre-order listing of a [`TreeSet`], each node followed by its children one level deeper.
/// See [`TreeSet::display_parent_children`].
pub struct ParentChildren<'a, T, C: Comparator<T>> {
    pub(crate) tree: &'a TreeSet<T, C>,
}

impl<'a, T: Display, C: Comparator<T>> ParentChildren<'a, T, C> {
    fn write_branch(&self, f: &mut Formatter<'_>, id: Option<NodeId>, depth: usize) -> fmt::Result {
        let Some(id) = id else {
            return Ok(());
        };
        let node = self.tree.node(id);

        indent(f, depth, self.tree.symbols_per_level)?;
        writeln!(f, "{}", node.value)?;
        self.write_branch(f, node.left, depth + 1)?;
        self.write_branch(f, node.right, depth + 1)
    }
}

impl<'a, T: Display, C: Comparator<T>> Display for ParentChildren<'a, T, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.write_branch(f, self.tree.root, 0)
    }
}
