//! Implements arena-allocated, arity-bounded trees and a family of traversal cursors over them.
//!
//! # Overview
//! The central type of the crate is [`KaryTree`], a tree whose nodes hold at most `K` children
//! each, with `K` fixed at compile time through a const generic parameter. The tree uses a
//! technique called ["arena-allocated trees"][arena tree blog post]: all nodes live in a single
//! growable backing store and link to each other through stable indices ([`NodeKey`]) instead of
//! pointers. Every node is exclusively owned by the tree; there is no reference counting and no
//! shared ownership for parent-child edges.
//!
//! Trees start out empty. [`add_root`] establishes the single entry point and [`add_sub_node`]
//! attaches a new node under an existing one, located by a breadth-first value-equality search.
//! The structure is strictly parent-to-children — no upward navigation is provided anywhere in
//! the crate.
//!
//! # Traversal
//! The [`traversal`] module provides five read-only cursors — [`PreOrder`], [`PostOrder`],
//! [`InOrder`], [`Bfs`] and [`Dfs`] — each a lazy, forward-only iterator over node references,
//! plus [`HeapOrder`], a destructive min-heap transform which reshapes the tree's child links
//! into binary-heap order as a side effect of its construction. See the module-level
//! documentation for the exact orders and caveats.
//!
//! # Feature flags
//! - `std` (**enabled by default**) — disables `no_std` for the crate. Currently, this only adds
//!   [`Error`] trait implementations for the error types. The crate always requires `alloc`, as
//!   the backing storage and the cursors' auxiliary state are heap-allocated.
//!
//! [`KaryTree`]: kary_tree/struct.KaryTree.html " "
//! [`NodeKey`]: storage/struct.NodeKey.html " "
//! [`add_root`]: kary_tree/struct.KaryTree.html#method.add_root " "
//! [`add_sub_node`]: kary_tree/struct.KaryTree.html#method.add_sub_node " "
//! [`traversal`]: traversal/index.html " "
//! [`PreOrder`]: traversal/struct.PreOrder.html " "
//! [`PostOrder`]: traversal/struct.PostOrder.html " "
//! [`InOrder`]: traversal/struct.InOrder.html " "
//! [`Bfs`]: traversal/struct.Bfs.html " "
//! [`Dfs`]: traversal/struct.Dfs.html " "
//! [`HeapOrder`]: traversal/struct.HeapOrder.html " "
//! [`Error`]: https://doc.rust-lang.org/std/error/trait.Error.html " "
//! [arena tree blog post]: https://dev.to/deciduously/no-more-tears-no-more-knots-arena-allocated-trees-in-rust-44k6 " "

#![warn(
    rust_2018_idioms,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    variant_size_differences,
    clippy::cast_lossless,
    clippy::checked_conversions,
    clippy::copy_iterator,
    clippy::explicit_iter_loop,
    clippy::inefficient_to_string,
    clippy::items_after_statements,
    clippy::match_same_arms,
    clippy::mut_mut,
    clippy::needless_continue,
    clippy::needless_pass_by_value,
    clippy::option_option,
    clippy::redundant_closure_for_method_calls,
    clippy::single_match_else,
    clippy::unnested_or_patterns,
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::get_unwrap,
    clippy::unwrap_used, // Only .expect() allowed
    clippy::use_debug,
)]
#![deny(anonymous_parameters, bare_trait_objects)]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod storage;
#[doc(no_inline)]
pub use storage::NodeKey;

pub mod kary_tree;
#[doc(no_inline)]
pub use kary_tree::{BinaryTree, KaryTree, Node, NodeRef};

pub mod traversal;
#[doc(no_inline)]
pub use traversal::{Bfs, Dfs, HeapOrder, InOrder, PostOrder, PreOrder};

use core::fmt::{self, Display, Formatter};

use alloc::format;

/// The error type returned by [`KaryTree::add_root`] when the tree already has a root node.
///
/// A second root is always rejected, never replaced — the tree's entry point is established
/// exactly once per tree lifetime.
///
/// [`KaryTree::add_root`]: kary_tree/struct.KaryTree.html#method.add_root " "
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct RootOccupiedError<T> {
    /// The root value which was passed to the call and was deemed useless because the call
    /// failed, provided here so that it doesn't get dropped if it could instead be reused.
    pub rejected: T,
}
impl<T> Display for RootOccupiedError<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad("the tree already has a root node")
    }
}
#[cfg(feature = "std")]
impl<T: fmt::Debug> std::error::Error for RootOccupiedError<T> {}

/// The error type returned by [`KaryTree::add_sub_node`].
///
/// Both variants carry the child value which was passed to the call and was deemed useless
/// because the call failed; [`into_child`] recovers it so that it doesn't get dropped.
///
/// [`KaryTree::add_sub_node`]: kary_tree/struct.KaryTree.html#method.add_sub_node " "
/// [`into_child`]: #method.into_child " "
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AttachError<T> {
    /// No node in the tree compared equal to the requested parent value. This is also the result
    /// of attaching to an empty tree, which has no nodes to match at all.
    ParentNotFound {
        /// The child value which was to be attached.
        child: T,
    },
    /// The matched parent node already had `K` children, and the tree's arity bound makes a
    /// `K + 1`-th child impossible. The parent's child list is left untouched.
    CapacityExceeded {
        /// The child value which was to be attached.
        child: T,
    },
}
impl<T> AttachError<T> {
    /// Extracts the child value which was passed to the failed call.
    #[allow(clippy::missing_const_for_fn)] // const fn cannot evaluate drop
    pub fn into_child(self) -> T {
        match self {
            Self::ParentNotFound { child } | Self::CapacityExceeded { child } => child,
        }
    }
}
impl<T> Display for AttachError<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::ParentNotFound { .. } => "no node in the tree matches the requested parent",
            Self::CapacityExceeded { .. } => "the parent node is already at the arity bound",
        })
    }
}
#[cfg(feature = "std")]
impl<T: fmt::Debug> std::error::Error for AttachError<T> {}

/// The error type returned by operations which are only defined for a specific arity, namely
/// [`try_in_order`] and [`try_into_heap_order`], when requested on a tree of a different arity.
///
/// [`try_in_order`]: kary_tree/struct.KaryTree.html#method.try_in_order " "
/// [`try_into_heap_order`]: kary_tree/struct.KaryTree.html#method.try_into_heap_order " "
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ArityError {
    /// The arity the operation is defined for.
    pub required: usize,
    /// The arity of the tree the operation was requested on.
    pub actual: usize,
}
impl Display for ArityError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(&format!(
            "the operation is only defined for arity {}, but the tree has arity {}",
            self.required, self.actual,
        ))
    }
}
#[cfg(feature = "std")]
impl std::error::Error for ArityError {}
