use arrayvec::ArrayVec;

use crate::storage::NodeKey;

/// A node of a k-ary tree.
///
/// A node is a labeled, ordered-children vertex and nothing more: it holds its value and the keys
/// of its children, in insertion order, and has no awareness of the tree it belongs to. The value
/// is immutable after construction. The child list is bounded at `K` entries by its storage, but
/// the node itself performs no bound check on append — enforcing the arity bound ahead of time is
/// the tree's responsibility.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Node<T, const K: usize> {
    pub(crate) value: T,
    pub(crate) children: ArrayVec<NodeKey, K>,
}
impl<T, const K: usize> Node<T, K> {
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            children: ArrayVec::new(),
        }
    }
    /// Returns a reference to the value stored in the node.
    pub fn value(&self) -> &T {
        &self.value
    }
    /// Returns the keys of the node's children, in insertion order.
    pub fn child_keys(&self) -> &[NodeKey] {
        &self.children
    }
    /// Appends a child key to the node's child list.
    ///
    /// # Panics
    /// Panics if the node already has `K` children. Callers check the bound first and surface
    /// [`AttachError::CapacityExceeded`] instead of ever reaching the panic.
    ///
    /// [`AttachError::CapacityExceeded`]: ../enum.AttachError.html#variant.CapacityExceeded " "
    pub(crate) fn attach_child(&mut self, child: NodeKey) {
        self.children.push(child);
    }
}
