use core::iter::FusedIterator;

use alloc::{collections::VecDeque, vec::Vec};

use crate::{
    kary_tree::{KaryTree, NodeRef},
    storage::NodeKey,
    ArityError,
};

impl<T: Ord> KaryTree<T, 2> {
    /// Reshapes the tree into a binary min-heap and returns a cursor yielding its nodes in
    /// ascending value order.
    ///
    /// **This is a mutating operation, not a read-only traversal.** Constructing the cursor
    /// collects every node in level order, heapifies that sequence with a min-comparator over
    /// node values, and rewrites every node's child list to the heap array's implicit binary
    /// shape — node `i` becomes the parent of nodes `2i + 1` and `2i + 2` — discarding the
    /// previous children entirely. The root is re-pointed at the smallest value. Any traversal
    /// requested afterwards observes the heapified shape, not the original tree; the original
    /// shape is not recoverable.
    ///
    /// No nodes are added or removed: the cursor yields exactly as many nodes as the tree held
    /// before the transform.
    ///
    /// Like [`in_order`], the operation assumes binary fan-out and so exists solely at arity 2;
    /// generic-arity code can use the runtime-checked [`try_into_heap_order`].
    ///
    /// # Example
    /// ```rust
    /// # use bramble::BinaryTree;
    /// let mut tree = BinaryTree::new();
    /// tree.add_root(30).expect("the tree was empty");
    /// tree.add_sub_node(&30, 20).expect("the root has room");
    /// tree.add_sub_node(&30, 10).expect("the root has room");
    ///
    /// let ascending: Vec<i32> = tree.into_heap_order().map(|node| *node.value()).collect();
    /// assert_eq!(ascending, [10, 20, 30]);
    ///
    /// // The side effect outlives the cursor — the tree is in heap shape now:
    /// assert_eq!(*tree.root().expect("still non-empty").value(), 10);
    /// ```
    ///
    /// [`in_order`]: #method.in_order " "
    /// [`try_into_heap_order`]: #method.try_into_heap_order " "
    pub fn into_heap_order(&mut self) -> HeapOrder<'_, T> {
        HeapOrder::new(self)
    }
}
impl<T: Ord, const K: usize> KaryTree<T, K> {
    /// Performs the min-heap transform on trees of any arity, failing at runtime unless `K` is
    /// 2. See [`into_heap_order`] for what the transform does to the tree.
    ///
    /// # Errors
    /// Returns [`ArityError`] if `K` is not 2 — the rewritten shape assumes binary fan-out. The
    /// tree is left untouched in that case.
    ///
    /// [`into_heap_order`]: #method.into_heap_order " "
    /// [`ArityError`]: ../struct.ArityError.html " "
    pub fn try_into_heap_order(&mut self) -> Result<HeapOrder<'_, T, K>, ArityError> {
        if K == 2 {
            Ok(HeapOrder::new(self))
        } else {
            Err(ArityError {
                required: 2,
                actual: K,
            })
        }
    }
}

/// A cursor which yields the nodes of a min-heapified tree in ascending value order.
///
/// Created by [`KaryTree::into_heap_order`], which reshapes the tree as a side effect — see its
/// documentation. Iteration itself consumes only the cursor's internal heap array (standard
/// pop-root-and-sift), never tree nodes, and reads node values immutably.
///
/// [`KaryTree::into_heap_order`]: ../kary_tree/struct.KaryTree.html#method.into_heap_order " "
#[derive(Debug)]
pub struct HeapOrder<'a, T, const K: usize = 2> {
    tree: &'a KaryTree<T, K>,
    heap: Vec<NodeKey>,
}
impl<'a, T: Ord, const K: usize> HeapOrder<'a, T, K> {
    // Only reachable with K == 2; the callers either fix the arity statically or have checked it.
    fn new(tree: &'a mut KaryTree<T, K>) -> Self {
        // 1. Flatten the reachable nodes into level order.
        let mut heap: Vec<NodeKey> = Vec::with_capacity(tree.len());
        let mut queue: VecDeque<NodeKey> = tree.root.into_iter().collect();
        while let Some(key) = queue.pop_front() {
            heap.push(key);
            queue.extend(tree.storage[key].children.iter().copied());
        }
        // 2. Heapify bottom-up; leaves (everything past len / 2) are one-element heaps already.
        for index in (0..heap.len() / 2).rev() {
            sift_down(tree, &mut heap, index);
        }
        // 3. Rewrite the child links to the heap array's implicit binary shape.
        for (index, &key) in heap.iter().enumerate() {
            let children = heap
                .get(2 * index + 1..)
                .unwrap_or(&[])
                .iter()
                .take(2)
                .copied();
            let node = &mut tree.storage[key];
            node.children.clear();
            node.children.extend(children);
        }
        tree.root = heap.first().copied();
        Self { tree: &*tree, heap }
    }
}
impl<'a, T: Ord, const K: usize> Iterator for HeapOrder<'a, T, K> {
    type Item = NodeRef<'a, T, K>;
    fn next(&mut self) -> Option<Self::Item> {
        if self.heap.is_empty() {
            return None;
        }
        let top = self.heap.swap_remove(0);
        if !self.heap.is_empty() {
            sift_down(self.tree, &mut self.heap, 0);
        }
        Some(NodeRef::new(self.tree, top))
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.heap.len(), Some(self.heap.len()))
    }
}
impl<'a, T: Ord, const K: usize> ExactSizeIterator for HeapOrder<'a, T, K> {}
impl<'a, T: Ord, const K: usize> FusedIterator for HeapOrder<'a, T, K> {}

// Standard min-heap sift: swap the element at `index` down with its smaller child until neither
// child is smaller. Comparisons go through the tree, as the heap itself only stores keys.
fn sift_down<T: Ord, const K: usize>(
    tree: &KaryTree<T, K>,
    heap: &mut [NodeKey],
    mut index: usize,
) {
    loop {
        let mut smallest = index;
        for child in [2 * index + 1, 2 * index + 2] {
            if child < heap.len()
                && tree.storage[heap[child]].value < tree.storage[heap[smallest]].value
            {
                smallest = child;
            }
        }
        if smallest == index {
            break;
        }
        heap.swap(index, smallest);
        index = smallest;
    }
}
