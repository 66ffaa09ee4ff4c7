//! Everything related to traversing the trees.
//!
//! The module is home to six cursor types, each a lazy, forward-only iterator over
//! [`NodeRef`]s, requested from a [`KaryTree`]:
//! - [`PreOrder`] — depth-first, node before children, children left to right;
//! - [`PostOrder`] — depth-first, children before node;
//! - [`InOrder`] — left subtree, node, right subtree; binary trees only;
//! - [`Bfs`] — level order, the tree's canonical iteration order (`&tree` into-iterates as this);
//! - [`Dfs`] — generic exhaustive walk, same order as pre-order but named for what call sites
//!   mean by it;
//! - [`HeapOrder`] — yields values in ascending order after destructively reshaping the tree
//!   into a binary min-heap; see its own documentation, it is a mutating operation and not a
//!   read-only cursor like the other five.
//!
//! # Cursor lifecycle
//! Every cursor is created fresh per traversal request, holds only the auxiliary state it needs
//! to resume (a stack, a queue or a precomputed buffer) and is discarded once exhausted. A
//! cursor is *active* while [`next`] keeps yielding `Some` and *exhausted* once it yields
//! `None`; all cursors are [`FusedIterator`]s, so advancing past exhaustion is a no-op that
//! keeps returning `None` rather than an error.
//!
//! Read-only cursors borrow the tree shared, so any number of them may coexist, and repeated
//! traversals of an unmodified tree yield identical sequences. Mutating the tree while a cursor
//! is live does not compile — the borrow checker rules out the stale-cursor problem instead of
//! leaving it as a documented hazard.
//!
//! [`KaryTree`]: ../kary_tree/struct.KaryTree.html " "
//! [`NodeRef`]: ../kary_tree/struct.NodeRef.html " "
//! [`PreOrder`]: struct.PreOrder.html " "
//! [`PostOrder`]: struct.PostOrder.html " "
//! [`InOrder`]: struct.InOrder.html " "
//! [`Bfs`]: struct.Bfs.html " "
//! [`Dfs`]: struct.Dfs.html " "
//! [`HeapOrder`]: struct.HeapOrder.html " "
//! [`next`]: https://doc.rust-lang.org/core/iter/trait.Iterator.html#tymethod.next " "
//! [`FusedIterator`]: https://doc.rust-lang.org/core/iter/trait.FusedIterator.html " "

mod heap;
pub use heap::HeapOrder;

use core::iter::FusedIterator;

use alloc::{collections::VecDeque, vec::Vec};

use crate::{
    kary_tree::{KaryTree, NodeRef},
    storage::NodeKey,
    ArityError,
};

impl<T, const K: usize> KaryTree<T, K> {
    /// Returns a cursor which traverses the tree depth-first, yielding every node *before* its
    /// children, children left to right.
    ///
    /// # Example
    /// ```rust
    /// # use bramble::BinaryTree;
    /// let mut tree = BinaryTree::new();
    /// tree.add_root(10).expect("the tree was empty");
    /// tree.add_sub_node(&10, 20).expect("the root has room");
    /// tree.add_sub_node(&10, 15).expect("the root has room");
    /// tree.add_sub_node(&20, 25).expect("node 20 has room");
    /// tree.add_sub_node(&20, 30).expect("node 20 has room");
    ///
    /// let order: Vec<i32> = tree.pre_order().map(|node| *node.value()).collect();
    /// assert_eq!(order, [10, 20, 25, 30, 15]);
    /// ```
    pub fn pre_order(&self) -> PreOrder<'_, T, K> {
        PreOrder {
            tree: self,
            stack: self.root.into_iter().collect(),
        }
    }
    /// Returns a cursor which traverses the tree depth-first, yielding every node *after* its
    /// children.
    ///
    /// The entire visiting order is computed eagerly when the cursor is constructed; advancing
    /// it only consumes the precomputed buffer, which also makes its length exact.
    ///
    /// # Example
    /// ```rust
    /// # use bramble::BinaryTree;
    /// let mut tree = BinaryTree::new();
    /// tree.add_root(10).expect("the tree was empty");
    /// tree.add_sub_node(&10, 20).expect("the root has room");
    /// tree.add_sub_node(&10, 15).expect("the root has room");
    /// tree.add_sub_node(&20, 25).expect("node 20 has room");
    /// tree.add_sub_node(&20, 30).expect("node 20 has room");
    ///
    /// let order: Vec<i32> = tree.post_order().map(|node| *node.value()).collect();
    /// assert_eq!(order, [25, 30, 20, 15, 10]);
    /// ```
    pub fn post_order(&self) -> PostOrder<'_, T, K> {
        // Two-stack construction: popping the traversal stack and pushing onto the output stack
        // reverses a node-before-children order into children-before-node. Children are pushed
        // onto the traversal stack left to right, so the right subtree lands above the left one
        // in the output and pops after it.
        let mut traversal: Vec<NodeKey> = self.root.into_iter().collect();
        let mut output = Vec::with_capacity(self.len());
        while let Some(key) = traversal.pop() {
            output.push(key);
            traversal.extend(self.storage[key].children.iter().copied());
        }
        PostOrder {
            tree: self,
            output,
        }
    }
    /// Returns a cursor which traverses the tree in level order, visiting every node of a depth
    /// before any node of the next depth, left to right within a level.
    ///
    /// This is the tree's canonical iteration order — `&tree` into-iterates as this cursor.
    ///
    /// # Example
    /// ```rust
    /// # use bramble::BinaryTree;
    /// let mut tree = BinaryTree::new();
    /// tree.add_root(10).expect("the tree was empty");
    /// tree.add_sub_node(&10, 20).expect("the root has room");
    /// tree.add_sub_node(&10, 15).expect("the root has room");
    /// tree.add_sub_node(&20, 25).expect("node 20 has room");
    /// tree.add_sub_node(&20, 30).expect("node 20 has room");
    ///
    /// let order: Vec<i32> = tree.bfs().map(|node| *node.value()).collect();
    /// assert_eq!(order, [10, 20, 15, 25, 30]);
    /// ```
    pub fn bfs(&self) -> Bfs<'_, T, K> {
        Bfs {
            tree: self,
            queue: self.root.into_iter().collect(),
        }
    }
    /// Returns a cursor which walks the whole tree depth-first, children left to right.
    ///
    /// The mechanics — and therefore the yielded order — coincide with [`pre_order`]; the cursor
    /// exists under its own name because call sites mean different things by the two: pre-order
    /// when the position of a node relative to its children carries meaning (say, evaluating an
    /// expression tree), DFS when all that is wanted is an exhaustive walk.
    ///
    /// [`pre_order`]: #method.pre_order " "
    pub fn dfs(&self) -> Dfs<'_, T, K> {
        Dfs(self.pre_order())
    }
    /// Returns an in-order cursor for trees of any arity, failing at runtime unless `K` is 2.
    ///
    /// Generic code where `K` is a parameter cannot name the statically restricted [`in_order`];
    /// this is the fallible spelling for such contexts.
    ///
    /// # Errors
    /// Returns [`ArityError`] if `K` is not 2 — in-order traversal is undefined for wider trees.
    ///
    /// [`in_order`]: #method.in_order " "
    /// [`ArityError`]: ../struct.ArityError.html " "
    pub fn try_in_order(&self) -> Result<InOrder<'_, T, K>, ArityError> {
        if K == 2 {
            Ok(InOrder::new(self))
        } else {
            Err(ArityError {
                required: 2,
                actual: K,
            })
        }
    }
}
impl<T> KaryTree<T, 2> {
    /// Returns a cursor which traverses the tree in order: left subtree, node, right subtree.
    ///
    /// In-order traversal is only meaningful for binary trees, so this method exists solely at
    /// arity 2 — requesting it on a wider tree is a compile error, and generic-arity code can
    /// use the runtime-checked [`try_in_order`] instead. `children[0]` is the left child and
    /// `children[1]` the right one.
    ///
    /// # Example
    /// ```rust
    /// # use bramble::BinaryTree;
    /// let mut tree = BinaryTree::new();
    /// tree.add_root(10).expect("the tree was empty");
    /// tree.add_sub_node(&10, 20).expect("the root has room");
    /// tree.add_sub_node(&10, 15).expect("the root has room");
    /// tree.add_sub_node(&20, 25).expect("node 20 has room");
    /// tree.add_sub_node(&20, 30).expect("node 20 has room");
    ///
    /// let order: Vec<i32> = tree.in_order().map(|node| *node.value()).collect();
    /// assert_eq!(order, [25, 20, 30, 10, 15]);
    /// ```
    ///
    /// [`try_in_order`]: #method.try_in_order " "
    pub fn in_order(&self) -> InOrder<'_, T, 2> {
        InOrder::new(self)
    }
}
impl<'a, T, const K: usize> IntoIterator for &'a KaryTree<T, K> {
    type Item = NodeRef<'a, T, K>;
    type IntoIter = Bfs<'a, T, K>;
    fn into_iter(self) -> Self::IntoIter {
        self.bfs()
    }
}

/// A cursor which yields every node before its children, children left to right.
///
/// See [`KaryTree::pre_order`].
///
/// [`KaryTree::pre_order`]: ../kary_tree/struct.KaryTree.html#method.pre_order " "
#[derive(Clone, Debug)]
pub struct PreOrder<'a, T, const K: usize> {
    tree: &'a KaryTree<T, K>,
    stack: Vec<NodeKey>,
}
impl<'a, T, const K: usize> Iterator for PreOrder<'a, T, K> {
    type Item = NodeRef<'a, T, K>;
    fn next(&mut self) -> Option<Self::Item> {
        let key = self.stack.pop()?;
        // Children go on the stack in reverse so the leftmost one pops, and thus yields, next.
        self.stack
            .extend(self.tree.storage[key].children.iter().rev().copied());
        Some(NodeRef::new(self.tree, key))
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        // Every stacked node yields at least itself.
        (self.stack.len(), None)
    }
}
impl<'a, T, const K: usize> FusedIterator for PreOrder<'a, T, K> {}

/// A cursor which yields every node after its children.
///
/// See [`KaryTree::post_order`].
///
/// [`KaryTree::post_order`]: ../kary_tree/struct.KaryTree.html#method.post_order " "
#[derive(Clone, Debug)]
pub struct PostOrder<'a, T, const K: usize> {
    tree: &'a KaryTree<T, K>,
    output: Vec<NodeKey>,
}
impl<'a, T, const K: usize> Iterator for PostOrder<'a, T, K> {
    type Item = NodeRef<'a, T, K>;
    fn next(&mut self) -> Option<Self::Item> {
        let key = self.output.pop()?;
        Some(NodeRef::new(self.tree, key))
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.output.len(), Some(self.output.len()))
    }
}
impl<'a, T, const K: usize> ExactSizeIterator for PostOrder<'a, T, K> {}
impl<'a, T, const K: usize> FusedIterator for PostOrder<'a, T, K> {}

/// A cursor which yields the left subtree, then the node, then the right subtree.
///
/// See [`KaryTree::in_order`].
///
/// [`KaryTree::in_order`]: ../kary_tree/struct.KaryTree.html#method.in_order " "
#[derive(Clone, Debug)]
pub struct InOrder<'a, T, const K: usize> {
    tree: &'a KaryTree<T, K>,
    stack: Vec<NodeKey>,
}
impl<'a, T, const K: usize> InOrder<'a, T, K> {
    fn new(tree: &'a KaryTree<T, K>) -> Self {
        let mut cursor = Self {
            tree,
            stack: Vec::new(),
        };
        if let Some(root) = tree.root {
            cursor.descend_left(root);
        }
        cursor
    }
    // Pushes the leftmost spine starting at `key`: the node, its first child, that child's first
    // child and so on.
    fn descend_left(&mut self, mut key: NodeKey) {
        loop {
            self.stack.push(key);
            match self.tree.storage[key].children.first() {
                Some(&first) => key = first,
                None => break,
            }
        }
    }
}
impl<'a, T, const K: usize> Iterator for InOrder<'a, T, K> {
    type Item = NodeRef<'a, T, K>;
    fn next(&mut self) -> Option<Self::Item> {
        let key = self.stack.pop()?;
        for &right in self.tree.storage[key].children.iter().skip(1) {
            self.descend_left(right);
        }
        Some(NodeRef::new(self.tree, key))
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.stack.len(), None)
    }
}
impl<'a, T, const K: usize> FusedIterator for InOrder<'a, T, K> {}

/// A cursor which yields the nodes in level order.
///
/// See [`KaryTree::bfs`].
///
/// [`KaryTree::bfs`]: ../kary_tree/struct.KaryTree.html#method.bfs " "
#[derive(Clone, Debug)]
pub struct Bfs<'a, T, const K: usize> {
    tree: &'a KaryTree<T, K>,
    queue: VecDeque<NodeKey>,
}
impl<'a, T, const K: usize> Iterator for Bfs<'a, T, K> {
    type Item = NodeRef<'a, T, K>;
    fn next(&mut self) -> Option<Self::Item> {
        let key = self.queue.pop_front()?;
        self.queue
            .extend(self.tree.storage[key].children.iter().copied());
        Some(NodeRef::new(self.tree, key))
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), None)
    }
}
impl<'a, T, const K: usize> FusedIterator for Bfs<'a, T, K> {}

/// A cursor which walks the whole tree depth-first, children left to right.
///
/// See [`KaryTree::dfs`] for why this exists separately from [`PreOrder`] despite yielding the
/// same order.
///
/// [`KaryTree::dfs`]: ../kary_tree/struct.KaryTree.html#method.dfs " "
/// [`PreOrder`]: struct.PreOrder.html " "
#[derive(Clone, Debug)]
pub struct Dfs<'a, T, const K: usize>(PreOrder<'a, T, K>);
impl<'a, T, const K: usize> Iterator for Dfs<'a, T, K> {
    type Item = NodeRef<'a, T, K>;
    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}
impl<'a, T, const K: usize> FusedIterator for Dfs<'a, T, K> {}
