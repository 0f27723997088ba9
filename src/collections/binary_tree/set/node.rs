/// The arena index of a tree node. Only meaningful while the node's slot stays occupied.
pub(crate) type NodeId = usize;

#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    pub value: T,
    pub parent: Option<NodeId>,
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
}

impl<T> Node<T> {
    pub const fn leaf(value: T, parent: Option<NodeId>) -> Node<T> {
        Node {
            value,
            parent,
            left: None,
            right: None,
        }
    }

    pub const fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}
