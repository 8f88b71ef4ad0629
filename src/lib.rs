//! This crate exposes an ordered set built on an unbalanced Binary Search Tree (BST).
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree stores elements in `Node`s. Each `Node` holds one element and
//! may have a left child and a right child. The invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have an
//!    element less than its own element.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have an
//!    element greater than its own element.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Because the comparisons are strict, an element is never stored twice, which
//! makes the tree a set. Searching takes `O(height)` where `height` is the
//! longest path from the root `Node` to a leaf `Node`. This tree does not
//! rebalance itself, so inserting already sorted elements produces a tree whose
//! height is the number of elements. Sorted iteration falls out of visiting the
//! left subtree, then the subtree root, then the right subtree.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::{OrderedTree, TreeError};
//!
//! let mut tree = OrderedTree::new();
//! assert_eq!(tree.first(), Err(TreeError::EmptyCollection));
//!
//! assert!(tree.insert_all([5, 3, 8, 1, 4, 7, 9]));
//! assert_eq!(tree.to_vec(), vec![1, 3, 4, 5, 7, 8, 9]);
//!
//! // The root has two children so its in-order successor takes its place.
//! assert!(tree.remove(&5));
//! assert_eq!(tree.to_vec(), vec![1, 3, 4, 7, 8, 9]);
//! assert_eq!(tree.first(), Ok(&1));
//! assert_eq!(tree.last(), Ok(&9));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
pub mod ordered;
mod util;

pub use error::{TreeError, TreeResult};
pub use ordered::OrderedTree;
