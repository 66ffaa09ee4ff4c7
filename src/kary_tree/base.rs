use core::fmt::{self, Display, Formatter};

use alloc::{collections::VecDeque, vec::Vec};

use super::{Node, NodeRef};
use crate::{
    storage::{Arena, NodeKey},
    AttachError, RootOccupiedError,
};

/// A tree whose nodes hold at most `K` children each.
///
/// See the [module-level documentation] for an overview and an example.
///
/// # Ownership
/// The tree owns all of its nodes through an append-only [`Arena`]; node-to-node edges are
/// stable [`NodeKey`]s into it. Values passed to [`add_root`] and [`add_sub_node`] are moved into
/// freshly created nodes, so no aliasing with caller state is possible. Nodes are never removed
/// or relocated — there is no delete or rebalance operation.
///
/// # Value-based addressing
/// Mutation addresses the parent node by a breadth-first *value-equality* search from the root,
/// which means parent resolution is ambiguous when several nodes hold equal values: the first
/// match in level order always wins. Values should be unique within a tree for `add_sub_node` to
/// behave deterministically in the intended sense; [`find`] exposes the same search so that
/// callers can hold on to a stable key instead of re-searching.
///
/// [module-level documentation]: index.html " "
/// [`Arena`]: ../storage/struct.Arena.html " "
/// [`NodeKey`]: ../storage/struct.NodeKey.html " "
/// [`add_root`]: #method.add_root " "
/// [`add_sub_node`]: #method.add_sub_node " "
/// [`find`]: #method.find " "
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct KaryTree<T, const K: usize = 2> {
    pub(crate) storage: Arena<Node<T, K>>,
    pub(crate) root: Option<NodeKey>,
}
impl<T, const K: usize> KaryTree<T, K> {
    /// Creates an empty tree without allocating memory.
    ///
    /// # Example
    /// ```rust
    /// # use bramble::KaryTree;
    /// let tree = KaryTree::<u64>::new();
    /// assert!(tree.is_empty());
    /// assert!(tree.root().is_none());
    /// ```
    pub const fn new() -> Self {
        Self {
            storage: Arena::new(),
            root: None,
        }
    }
    /// Creates an empty tree with the specified capacity preallocated in the backing storage.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: Arena::with_capacity(capacity),
            root: None,
        }
    }
    /// Returns the arity bound `K` — the maximum number of children any node may have.
    pub const fn arity(&self) -> usize {
        K
    }
    /// Returns the number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.storage.len()
    }
    /// Returns `true` if the tree has no nodes, `false` otherwise.
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
    /// Returns a reference to the root node, or `None` if the tree is empty.
    pub fn root(&self) -> Option<NodeRef<'_, T, K>> {
        self.root.map(|key| NodeRef::new(self, key))
    }
    /// Returns a reference to the node at the specified key, or `None` if the key was issued by
    /// a different tree and is out of bounds here.
    pub fn get(&self, key: NodeKey) -> Option<NodeRef<'_, T, K>> {
        self.storage.get(key).map(|_| NodeRef::new(self, key))
    }
    /// Establishes the root node of the tree, moving `value` into it, and returns its key.
    ///
    /// The root is the single entry point of the tree and is set at most once per tree lifetime:
    /// if a root already exists the call is rejected and the value is handed back inside the
    /// error, never silently replaced.
    ///
    /// # Errors
    /// Returns [`RootOccupiedError`] if the tree already has a root node.
    ///
    /// # Example
    /// ```rust
    /// # use bramble::BinaryTree;
    /// let mut tree = BinaryTree::new();
    /// tree.add_root(10).expect("the tree was empty");
    ///
    /// let rejected = tree.add_root(11).expect_err("the root is occupied");
    /// assert_eq!(rejected.rejected, 11);
    /// ```
    ///
    /// [`RootOccupiedError`]: ../struct.RootOccupiedError.html " "
    pub fn add_root(&mut self, value: T) -> Result<NodeKey, RootOccupiedError<T>> {
        if self.root.is_some() {
            return Err(RootOccupiedError { rejected: value });
        }
        let key = self.storage.insert(Node::new(value));
        self.root = Some(key);
        Ok(key)
    }
}
impl<T: PartialEq, const K: usize> KaryTree<T, K> {
    /// Returns the key of the first node in level order whose value equals `value`, or `None` if
    /// no node matches.
    ///
    /// This is the exact search [`add_sub_node`] uses to locate the parent, exposed so that a
    /// stable handle can be kept around instead of being re-derived per call.
    ///
    /// [`add_sub_node`]: #method.add_sub_node " "
    pub fn find(&self, value: &T) -> Option<NodeKey> {
        let mut queue = VecDeque::new();
        if let Some(root) = self.root {
            queue.push_back(root);
        }
        while let Some(key) = queue.pop_front() {
            let node = &self.storage[key];
            if node.value == *value {
                return Some(key);
            }
            queue.extend(node.children.iter().copied());
        }
        None
    }
    /// Attaches a new node holding `child` as the last child of the first node in level order
    /// whose value equals `parent`, and returns the new node's key.
    ///
    /// # Errors
    /// - [`ParentNotFound`] if no node matches `parent` — including on an empty tree.
    /// - [`CapacityExceeded`] if the matched node already has `K` children; its child list is
    ///   left untouched.
    ///
    /// Both variants hand the child value back to the caller.
    ///
    /// # Example
    /// ```rust
    /// # use bramble::{AttachError, BinaryTree};
    /// let mut tree = BinaryTree::new();
    /// tree.add_root(1).expect("the tree was empty");
    /// tree.add_sub_node(&1, 2).expect("the root has room");
    /// tree.add_sub_node(&1, 3).expect("the root has room");
    ///
    /// // The root is full now, and the rejected child value comes back in the error:
    /// match tree.add_sub_node(&1, 4) {
    ///     Err(AttachError::CapacityExceeded { child }) => assert_eq!(child, 4),
    ///     other => panic!("expected the arity bound to hold, got {:?}", other),
    /// }
    /// ```
    ///
    /// [`ParentNotFound`]: ../enum.AttachError.html#variant.ParentNotFound " "
    /// [`CapacityExceeded`]: ../enum.AttachError.html#variant.CapacityExceeded " "
    pub fn add_sub_node(&mut self, parent: &T, child: T) -> Result<NodeKey, AttachError<T>> {
        let parent_key = match self.find(parent) {
            Some(key) => key,
            None => return Err(AttachError::ParentNotFound { child }),
        };
        if self.storage[parent_key].children.len() == K {
            return Err(AttachError::CapacityExceeded { child });
        }
        let child_key = self.storage.insert(Node::new(child));
        self.storage[parent_key].attach_child(child_key);
        Ok(child_key)
    }
}
impl<T, const K: usize> Default for KaryTree<T, K> {
    fn default() -> Self {
        Self::new()
    }
}
/// Renders the tree as an indented, depth-first dump: every node on its own line, prefixed with
/// two spaces per level of depth, children in insertion order below their parent.
///
/// A debugging convenience, not a stable serialization format.
impl<T: Display, const K: usize> Display for KaryTree<T, K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut stack = Vec::new();
        if let Some(root) = self.root {
            stack.push((root, 0_usize));
        }
        while let Some((key, depth)) = stack.pop() {
            let node = &self.storage[key];
            for _ in 0..depth {
                f.write_str("  ")?;
            }
            writeln!(f, "{}", node.value)?;
            for &child in node.children.iter().rev() {
                stack.push((child, depth + 1));
            }
        }
        Ok(())
    }
}
