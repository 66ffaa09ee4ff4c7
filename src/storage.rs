//! The backing storage for trees.
//!
//! The module is home to [`Arena`], an append-only, `Vec`-backed store in which every node of a
//! tree lives, and [`NodeKey`], the index type used to address it. Trees never store pointers to
//! nodes — parent-child edges are `NodeKey`s into the arena, which keeps ownership trivially
//! single-owner and makes the whole crate free of `unsafe`.
//!
//! [`Arena`]: struct.Arena.html " "
//! [`NodeKey`]: struct.NodeKey.html " "

use alloc::vec::Vec;

/// A key addressing a node inside a tree's backing storage.
///
/// Keys are *stable*: nodes are never removed from the arena, so a key, once issued, resolves to
/// the node it was issued for over the whole lifetime of the tree. A key is only meaningful for
/// the tree which issued it — indexing a different tree with it is not memory-unsafe, but
/// addresses an unrelated node or none at all.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeKey(pub(crate) usize);

/// An append-only arena of tree nodes.
///
/// This is the entire ownership story of the crate: the arena owns every node, nodes refer to
/// their children by [`NodeKey`], and no removal operation exists, which is what makes the keys
/// stable. Compared to a general-purpose sparse arena, nothing here ever leaves holes behind, so
/// elements are stored densely in insertion order.
///
/// [`NodeKey`]: struct.NodeKey.html " "
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Arena<T> {
    elements: Vec<T>,
}
impl<T> Arena<T> {
    /// Creates an empty arena without allocating memory.
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }
    /// Creates an empty arena with the specified capacity preallocated.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
        }
    }
    /// Adds an element to the arena, returning the key which will address it from now on.
    pub fn insert(&mut self, element: T) -> NodeKey {
        let key = NodeKey(self.elements.len());
        self.elements.push(element);
        key
    }
    /// Returns a reference to the element at the specified key, or `None` if the key was issued
    /// by a different arena and is out of bounds here.
    pub fn get(&self, key: NodeKey) -> Option<&T> {
        self.elements.get(key.0)
    }
    /// Returns a *mutable* reference to the element at the specified key, or `None` if the key
    /// was issued by a different arena and is out of bounds here.
    pub fn get_mut(&mut self, key: NodeKey) -> Option<&mut T> {
        self.elements.get_mut(key.0)
    }
    /// Returns the number of elements in the arena.
    pub fn len(&self) -> usize {
        self.elements.len()
    }
    /// Returns `true` if the arena contains no elements, `false` otherwise.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}
impl<T> core::ops::Index<NodeKey> for Arena<T> {
    type Output = T;
    /// # Panics
    /// Panics if the key was issued by a different arena and is out of bounds here. Keys issued
    /// by this arena always resolve.
    fn index(&self, key: NodeKey) -> &T {
        &self.elements[key.0]
    }
}
impl<T> core::ops::IndexMut<NodeKey> for Arena<T> {
    fn index_mut(&mut self, key: NodeKey) -> &mut T {
        &mut self.elements[key.0]
    }
}
