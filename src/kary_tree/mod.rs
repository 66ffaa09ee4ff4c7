//! Trees whose nodes hold at most `K` children each.
//!
//! The arity bound `K` is a const generic parameter with a default of 2, so the plain
//! [`KaryTree<T>`] spelling is a binary tree (also available as the [`BinaryTree`] alias), while
//! `KaryTree<T, 3>`, `KaryTree<T, 8>` and so on bound their nodes at higher child counts.
//!
//! # Example
//! ```rust
//! use bramble::kary_tree::KaryTree;
//!
//! // A tree is created empty; the turbofish picks the arity (3 here).
//! let mut tree = KaryTree::<_, 3>::new();
//!
//! // The root node is the single entry point of the tree and is established exactly once.
//! tree.add_root("root").expect("the tree was empty");
//!
//! // Further nodes are attached under an existing node, located by value equality.
//! tree.add_sub_node(&"root", "left").expect("the root has room");
//! tree.add_sub_node(&"root", "middle").expect("the root has room");
//! tree.add_sub_node(&"root", "right").expect("the root has room");
//!
//! // A fourth child would overflow the arity bound:
//! assert!(tree.add_sub_node(&"root", "one too many").is_err());
//!
//! // Reading happens through node references, which follow child links in insertion order.
//! let root = tree.root().expect("a root was added");
//! let children: Vec<&str> = root.children().map(|child| *child.value()).collect();
//! assert_eq!(children, ["left", "middle", "right"]);
//! ```
//!
//! [`KaryTree<T>`]: struct.KaryTree.html " "
//! [`BinaryTree`]: type.BinaryTree.html " "

mod base;
mod node;
mod node_ref;
#[cfg(test)]
mod tests;

pub use base::KaryTree;
pub use node::Node;
pub use node_ref::{Children, NodeRef};

/// A tree which allows at most two children for its nodes.
///
/// This is the arity every `KaryTree` defaults to, as well as the only arity for which
/// [`in_order`] traversal and the [`into_heap_order`] transform are defined.
///
/// [`in_order`]: struct.KaryTree.html#method.in_order " "
/// [`into_heap_order`]: struct.KaryTree.html#method.into_heap_order " "
pub type BinaryTree<T> = KaryTree<T, 2>;
