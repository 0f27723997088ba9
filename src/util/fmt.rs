use std::fmt::{self, Debug, Formatter};

/// Writes a pre-rendered string into a [`Debug`] builder without quoting it.
pub struct DebugRaw(pub String);

impl Debug for DebugRaw {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Writes `depth * width` spaces, used by the tree diagrams.
pub(crate) fn indent(f: &mut Formatter<'_>, depth: usize, width: usize) -> fmt::Result {
    write!(f, "{:1$}", "", depth * width)
}
