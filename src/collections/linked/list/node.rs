/// A stable reference to one element of a [`LinkedList`](super::LinkedList).
///
/// A handle stays valid until its element is removed, regardless of any other insertions or
/// removals. Once removed, the handle's slot may be reused by a later insertion, so holding on to
/// a handle after removing its element (or using it with a different list) is a logic error. The
/// list never invokes undefined behaviour in that case, but the handle may refer to an unrelated
/// element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeHandle(pub(crate) usize);

#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    pub value: T,
    pub prev: Option<NodeHandle>,
    pub next: Option<NodeHandle>,
}
