use core::{
    fmt::{self, Debug, Formatter},
    iter::FusedIterator,
    slice,
};

use super::KaryTree;
use crate::storage::NodeKey;

/// A reference to a node in a k-ary tree.
///
/// Since this type does not point at the node directly, but rather at the tree the node is in and
/// the key of the node in the storage, it can be used to walk down the tree. Navigation is
/// strictly parent-to-children — there is no way to go back up from a `NodeRef`.
pub struct NodeRef<'a, T, const K: usize> {
    tree: &'a KaryTree<T, K>,
    key: NodeKey,
}
impl<'a, T, const K: usize> NodeRef<'a, T, K> {
    // Keys handed to this constructor are always live: they come from the tree's own root field,
    // child lists or storage lookups, and the arena never removes elements.
    pub(crate) fn new(tree: &'a KaryTree<T, K>, key: NodeKey) -> Self {
        Self { tree, key }
    }
    /// Returns the raw storage key for the node, usable with [`KaryTree::get`].
    ///
    /// [`KaryTree::get`]: struct.KaryTree.html#method.get " "
    pub fn raw_key(&self) -> NodeKey {
        self.key
    }
    /// Returns a reference to the value stored in the node.
    pub fn value(&self) -> &'a T {
        &self.tree.storage[self.key].value
    }
    /// Returns the number of children of the node.
    pub fn child_count(&self) -> usize {
        self.tree.storage[self.key].children.len()
    }
    /// Returns `true` if the node is a *leaf*, i.e. does not have child nodes; `false` otherwise.
    pub fn is_leaf(&self) -> bool {
        self.tree.storage[self.key].children.is_empty()
    }
    /// Returns a reference to the *`n`*-th child of the node, or `None` if there is no child at
    /// that index.
    pub fn child(&self, index: usize) -> Option<Self> {
        self.tree.storage[self.key]
            .children
            .get(index)
            .map(|&key| Self::new(self.tree, key))
    }
    /// Returns an iterator over references to the children of the node, in insertion order.
    pub fn children(&self) -> Children<'a, T, K> {
        Children {
            tree: self.tree,
            keys: self.tree.storage[self.key].children.iter(),
        }
    }
}
impl<'a, T, const K: usize> Clone for NodeRef<'a, T, K> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<'a, T, const K: usize> Copy for NodeRef<'a, T, K> {}
impl<'a, T: Debug, const K: usize> Debug for NodeRef<'a, T, K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("key", &self.key)
            .field("value", self.value())
            .finish()
    }
}

/// An iterator over references to the children of a node, in insertion order.
///
/// Created by [`NodeRef::children`].
///
/// [`NodeRef::children`]: struct.NodeRef.html#method.children " "
pub struct Children<'a, T, const K: usize> {
    tree: &'a KaryTree<T, K>,
    keys: slice::Iter<'a, NodeKey>,
}
impl<'a, T, const K: usize> Iterator for Children<'a, T, K> {
    type Item = NodeRef<'a, T, K>;
    fn next(&mut self) -> Option<Self::Item> {
        self.keys.next().map(|&key| NodeRef::new(self.tree, key))
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}
impl<'a, T, const K: usize> DoubleEndedIterator for Children<'a, T, K> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.keys
            .next_back()
            .map(|&key| NodeRef::new(self.tree, key))
    }
}
impl<'a, T, const K: usize> ExactSizeIterator for Children<'a, T, K> {}
impl<'a, T, const K: usize> FusedIterator for Children<'a, T, K> {}
impl<'a, T, const K: usize> Clone for Children<'a, T, K> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            keys: self.keys.clone(),
        }
    }
}
impl<'a, T, const K: usize> Debug for Children<'a, T, K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Children")
            .field("remaining", &self.keys.as_slice())
            .finish()
    }
}
