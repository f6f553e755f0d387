//! This crate exposes an AVL tree: a self-balancing Binary Search Tree (BST) storing a set of
//! ordered values.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! will sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). Left alone, inserting sorted values produces a
//! tree that is really a linked list. An AVL tree adds a third invariant:
//!
//! 3. For every `Node`, the heights of its two subtrees differ by at most one.
//!
//! Every `insert` and `remove` restores this invariant with rotations on the way back up to the
//! root, which keeps the height under `1.44 * lg(N + 2)` for `N` values.
//!
//! # Examples
//!
//! ```
//! use avl::{Order, Tree};
//!
//! let mut tree = Tree::new();
//! for x in [1, 2, 3] {
//!     tree.insert(x);
//! }
//!
//! // Ascending inserts still give a balanced tree.
//! assert_eq!(tree.root().map(|n| *n.value()), Some(2));
//! assert_eq!(tree.height(), 2);
//!
//! tree.remove(&1);
//! assert!(!tree.contains(&1));
//! assert_eq!(tree.traverse(Order::InOrder).collect::<Vec<_>>(), vec![&2, &3]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
mod node;
mod traverse;
mod tree;


pub use error::InvariantViolation;
pub use node::Node;
pub use traverse::{Order, Traverse};
pub use tree::Tree;
