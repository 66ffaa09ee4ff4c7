use super::*;
use crate::{ArityError, AttachError};

fn sample_tree() -> BinaryTree<i32> {
    let mut tree = BinaryTree::new();
    tree.add_root(10).expect("the tree was empty");
    tree.add_sub_node(&10, 20).expect("the root has room");
    tree.add_sub_node(&10, 15).expect("the root has room");
    tree.add_sub_node(&20, 25).expect("node 20 has room");
    tree.add_sub_node(&20, 30).expect("node 20 has room");
    tree
}

fn values<'a>(iter: impl Iterator<Item = NodeRef<'a, i32, 2>>) -> Vec<i32> {
    iter.map(|node| *node.value()).collect()
}

#[test]
fn empty_tree() {
    let tree = BinaryTree::<i32>::new();
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
    assert!(tree.root().is_none());
    assert!(tree.find(&1).is_none());
    assert!(tree.pre_order().next().is_none());
    assert!(tree.post_order().next().is_none());
    assert!(tree.in_order().next().is_none());
    assert!(tree.bfs().next().is_none());
    assert!(tree.dfs().next().is_none());
    assert_eq!(tree.to_string(), "");
}

#[test]
fn add_sub_node_to_empty_tree_fails() {
    let mut tree = BinaryTree::new();
    match tree.add_sub_node(&1, 2) {
        Err(AttachError::ParentNotFound { child }) => assert_eq!(child, 2),
        other => panic!("expected ParentNotFound, got {:?}", other),
    }
    assert!(tree.is_empty());
}

#[test]
fn second_root_is_rejected() {
    let mut tree = BinaryTree::new();
    tree.add_root(10).expect("the tree was empty");
    let error = tree.add_root(11).expect_err("the root is occupied");
    assert_eq!(error.rejected, 11);
    // The original root is untouched:
    assert_eq!(*tree.root().expect("root exists").value(), 10);
    assert_eq!(tree.len(), 1);
}

#[test]
fn arity_bound_is_enforced() {
    let mut tree = sample_tree();
    let error = tree
        .add_sub_node(&10, 40)
        .expect_err("the root already has two children");
    match error {
        AttachError::CapacityExceeded { child } => assert_eq!(child, 40),
        other => panic!("expected CapacityExceeded, got {:?}", other),
    }
    // The failed attempt leaves the child count unchanged:
    assert_eq!(tree.root().expect("root exists").child_count(), 2);
    assert_eq!(tree.len(), 5);
}

#[test]
fn into_child_recovers_the_rejected_value() {
    let mut tree = sample_tree();
    let error = tree
        .add_sub_node(&10, 40)
        .expect_err("the root already has two children");
    assert_eq!(error.into_child(), 40);
    let error = tree
        .add_sub_node(&999, 50)
        .expect_err("no such parent value");
    assert_eq!(error.into_child(), 50);
}

#[test]
fn children_preserve_insertion_order() {
    let tree = sample_tree();
    let root = tree.root().expect("root exists");
    let children: Vec<i32> = root.children().map(|child| *child.value()).collect();
    assert_eq!(children, [20, 15]);
    assert_eq!(*root.child(0).expect("left child").value(), 20);
    assert_eq!(*root.child(1).expect("right child").value(), 15);
    assert!(root.child(2).is_none());
    assert!(!root.is_leaf());
    assert!(root.child(1).expect("right child").is_leaf());
}

#[test]
fn find_returns_a_stable_handle() {
    let tree = sample_tree();
    let key = tree.find(&20).expect("20 is in the tree");
    let node = tree.get(key).expect("keys issued by the tree resolve");
    assert_eq!(*node.value(), 20);
    assert_eq!(node.raw_key(), key);
    assert_eq!(node.child_count(), 2);
}

#[test]
fn bfs_is_level_order() {
    let tree = sample_tree();
    assert_eq!(values(tree.bfs()), [10, 20, 15, 25, 30]);
}

#[test]
fn pre_order_is_node_before_children() {
    let tree = sample_tree();
    assert_eq!(values(tree.pre_order()), [10, 20, 25, 30, 15]);
}

#[test]
fn post_order_is_children_before_node() {
    let tree = sample_tree();
    assert_eq!(values(tree.post_order()), [25, 30, 20, 15, 10]);
    assert_eq!(tree.post_order().len(), 5);
}

#[test]
fn in_order_is_left_node_right() {
    let tree = sample_tree();
    assert_eq!(values(tree.in_order()), [25, 20, 30, 10, 15]);
}

#[test]
fn dfs_matches_pre_order() {
    let tree = sample_tree();
    assert_eq!(values(tree.dfs()), values(tree.pre_order()));
}

#[test]
fn default_iteration_is_bfs() {
    let tree = sample_tree();
    let via_into_iter: Vec<i32> = (&tree).into_iter().map(|node| *node.value()).collect();
    assert_eq!(via_into_iter, values(tree.bfs()));
}

#[test]
fn traversals_are_idempotent() {
    let tree = sample_tree();
    assert_eq!(values(tree.pre_order()), values(tree.pre_order()));
    assert_eq!(values(tree.post_order()), values(tree.post_order()));
    assert_eq!(values(tree.in_order()), values(tree.in_order()));
    assert_eq!(values(tree.bfs()), values(tree.bfs()));
    assert_eq!(values(tree.dfs()), values(tree.dfs()));
}

#[test]
fn cursors_are_fused() {
    let tree = sample_tree();
    let mut cursor = tree.pre_order();
    assert_eq!(cursor.by_ref().count(), 5);
    assert!(cursor.next().is_none());
    assert!(cursor.next().is_none());
}

#[test]
fn duplicate_values_resolve_to_the_first_match_in_level_order() {
    let mut tree = BinaryTree::new();
    tree.add_root(1).expect("the tree was empty");
    tree.add_sub_node(&1, 2).expect("the root has room");
    tree.add_sub_node(&1, 2).expect("the root has room");
    // Both children hold 2; the attach goes under the first match in level order, which is the
    // left child.
    tree.add_sub_node(&2, 3).expect("the left 2 has room");
    let root = tree.root().expect("root exists");
    assert_eq!(root.child(0).expect("left child").child_count(), 1);
    assert_eq!(root.child(1).expect("right child").child_count(), 0);
}

#[test]
fn display_renders_an_indented_dump() {
    let tree = sample_tree();
    assert_eq!(tree.to_string(), "10\n  20\n    25\n    30\n  15\n");
}

#[test]
fn wider_arity_accepts_more_children() {
    let mut tree: KaryTree<i32, 3> = KaryTree::new();
    assert_eq!(tree.arity(), 3);
    tree.add_root(1).expect("the tree was empty");
    tree.add_sub_node(&1, 2).expect("the root has room");
    tree.add_sub_node(&1, 3).expect("the root has room");
    tree.add_sub_node(&1, 4).expect("the root has room");
    let error = tree
        .add_sub_node(&1, 5)
        .expect_err("the root already has three children");
    assert_eq!(error.into_child(), 5);
    assert_eq!(tree.root().expect("root exists").child_count(), 3);
}

#[test]
fn in_order_requires_binary_arity() {
    let mut tree: KaryTree<i32, 3> = KaryTree::new();
    tree.add_root(1).expect("the tree was empty");
    assert_eq!(
        tree.try_in_order().err(),
        Some(ArityError {
            required: 2,
            actual: 3,
        }),
    );
}

#[test]
fn try_in_order_succeeds_at_binary_arity() {
    let tree = sample_tree();
    let cursor = tree.try_in_order().expect("arity is 2");
    assert_eq!(values(cursor), [25, 20, 30, 10, 15]);
}

#[test]
fn heap_transform_requires_binary_arity() {
    let mut tree: KaryTree<i32, 3> = KaryTree::new();
    tree.add_root(3).expect("the tree was empty");
    tree.add_sub_node(&3, 1).expect("the root has room");
    assert_eq!(
        tree.try_into_heap_order().err(),
        Some(ArityError {
            required: 2,
            actual: 3,
        }),
    );
    // The rejected transform leaves the tree untouched:
    assert_eq!(*tree.root().expect("root exists").value(), 3);
    assert_eq!(tree.len(), 2);
}

#[test]
fn heap_order_yields_ascending_values() {
    let mut tree = sample_tree();
    let ascending: Vec<i32> = tree.into_heap_order().map(|node| *node.value()).collect();
    assert_eq!(ascending, [10, 15, 20, 25, 30]);
}

#[test]
fn heap_order_preserves_the_node_count() {
    let mut tree = sample_tree();
    let count_before = tree.len();
    assert_eq!(tree.into_heap_order().count(), count_before);
    assert_eq!(tree.len(), count_before);
}

#[test]
fn heap_transform_reshapes_the_tree() {
    let mut tree = BinaryTree::new();
    tree.add_root(30).expect("the tree was empty");
    tree.add_sub_node(&30, 20).expect("the root has room");
    tree.add_sub_node(&30, 10).expect("the root has room");

    let ascending: Vec<i32> = tree.into_heap_order().map(|node| *node.value()).collect();
    assert_eq!(ascending, [10, 20, 30]);

    // The side effect outlives the cursor: the smallest value is the root now and the former
    // root is a child. This is the heapified shape, not the original one.
    assert_eq!(values(tree.bfs()), [10, 20, 30]);
    let root = tree.root().expect("still non-empty");
    assert_eq!(*root.value(), 10);
    let children: Vec<i32> = root.children().map(|child| *child.value()).collect();
    assert_eq!(children, [20, 30]);
}

#[test]
fn heap_transform_is_idempotent_in_shape() {
    let mut tree = sample_tree();
    tree.into_heap_order().for_each(drop);
    let shape_after_first: Vec<i32> = values(tree.bfs());
    tree.into_heap_order().for_each(drop);
    assert_eq!(values(tree.bfs()), shape_after_first);
}

#[test]
fn heap_order_is_exhausted_after_consumption() {
    let mut tree = sample_tree();
    let mut cursor = tree.into_heap_order();
    assert_eq!(cursor.by_ref().count(), 5);
    assert!(cursor.next().is_none());
    assert!(cursor.next().is_none());
}
