//! The AVL tree itself. Every mutation is a recursive descent that hands each subtree back to its
//! parent by value, so the parent can store whatever root the subtree ends up with after
//! rebalancing.
//!
//! # Examples
//!
//! ```
//! use avl::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! assert!(tree.insert(1));
//! assert!(tree.contains(&1));
//!
//! // Inserting the same value again changes nothing.
//! assert!(!tree.insert(1));
//! assert_eq!(tree.len(), 1);
//!
//! assert!(tree.remove(&1));
//! assert!(!tree.contains(&1));
//! ```

use std::cmp::Ordering;
use std::fmt;

use tracing::{debug, trace};

use crate::error::InvariantViolation;
use crate::node::{height, Link, Node};
use crate::traverse::{Order, Traverse};

/// A self-balancing Binary Search Tree (specifically, an AVL tree) holding a set of values.
#[derive(Clone, PartialEq, Eq)]
pub struct Tree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.in_order()).finish()
    }
}

/// Prints the values in pre-order, separated by spaces.
impl<T> fmt::Display for Tree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.pre_order().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}

impl<T> Tree<T> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// How many values are in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// How many levels are in the tree. An empty tree has a height of 0 and a single value has a
    /// height of 1.
    pub fn height(&self) -> usize {
        height(&self.root)
    }

    /// The root node, if there is one. Useful for inspecting the shape of the tree.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Removes every value from the tree.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// The smallest value in the tree.
    pub fn first(&self) -> Option<&T> {
        let mut node = self.root()?;
        while let Some(left) = node.left() {
            node = left;
        }
        Some(node.value())
    }

    /// The largest value in the tree.
    pub fn last(&self) -> Option<&T> {
        let mut node = self.root()?;
        while let Some(right) = node.right() {
            node = right;
        }
        Some(node.value())
    }

    /// Lazily walks the tree in the given order. Calling this again on an unchanged tree yields
    /// the same sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::{Order, Tree};
    ///
    /// let mut tree = Tree::new();
    /// for x in [2, 1, 3] {
    ///     tree.insert(x);
    /// }
    ///
    /// assert_eq!(tree.traverse(Order::PreOrder).collect::<Vec<_>>(), vec![&2, &1, &3]);
    /// assert_eq!(tree.traverse(Order::InOrder).collect::<Vec<_>>(), vec![&1, &2, &3]);
    /// ```
    pub fn traverse(&self, order: Order) -> Traverse<'_, T> {
        Traverse::new(self.root(), self.len, order)
    }

    /// Walks the tree in ascending order.
    pub fn in_order(&self) -> Traverse<'_, T> {
        self.traverse(Order::InOrder)
    }

    /// Walks the tree visiting each node before its children.
    pub fn pre_order(&self) -> Traverse<'_, T> {
        self.traverse(Order::PreOrder)
    }

    /// Walks the tree visiting each node after its children.
    pub fn post_order(&self) -> Traverse<'_, T> {
        self.traverse(Order::PostOrder)
    }
}

impl<T> Tree<T>
where
    T: Ord,
{
    /// Inserts the given value into the tree. Returns `false`, leaving the tree untouched, if the
    /// value was already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert!(tree.contains(&1));
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        let mut inserted = false;
        self.root = Some(insert(self.root.take(), value, &mut inserted));
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Removes the given value from the tree. Returns `false` if the value wasn't present.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.remove(&1));
    /// assert!(!tree.remove(&1));
    /// assert!(tree.is_empty());
    /// ```
    pub fn remove(&mut self, value: &T) -> bool {
        let mut removed = false;
        self.root = remove(self.root.take(), value, &mut removed);
        if removed {
            self.len -= 1;
        }
        removed
    }

    /// Whether the tree holds the given value.
    pub fn contains(&self, value: &T) -> bool {
        let mut link = &self.root;
        while let Some(node) = link {
            link = match value.cmp(&node.value) {
                Ordering::Less => &node.left,
                Ordering::Equal => return true,
                Ordering::Greater => &node.right,
            };
        }
        false
    }

    /// Walks the whole tree verifying the BST ordering, the AVL balance, every cached height, and
    /// the length. Returns the first violation found.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for x in 0..100 {
    ///     tree.insert(x);
    /// }
    ///
    /// assert_eq!(tree.check_invariants(), Ok(()));
    /// ```
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        check(&self.root, 0, None, None)
            .and_then(|(_, counted)| {
                if counted == self.len {
                    Ok(())
                } else {
                    Err(InvariantViolation::LenMismatch {
                        reported: self.len,
                        counted,
                    })
                }
            })
            .map_err(|err| {
                debug!(%err, "tree invariant violated");
                err
            })
    }
}

fn insert<T>(link: Link<T>, value: T, inserted: &mut bool) -> Box<Node<T>>
where
    T: Ord,
{
    let mut node = match link {
        Some(node) => node,
        None => {
            *inserted = true;
            return Node::new_boxed(value);
        }
    };

    match value.cmp(&node.value) {
        Ordering::Less => node.left = Some(insert(node.left.take(), value, inserted)),
        Ordering::Equal => return node,
        Ordering::Greater => node.right = Some(insert(node.right.take(), value, inserted)),
    }

    rebalance(node)
}

fn remove<T>(link: Link<T>, value: &T, removed: &mut bool) -> Link<T>
where
    T: Ord,
{
    let mut node = link?;

    match value.cmp(&node.value) {
        Ordering::Less => node.left = remove(node.left.take(), value, removed),
        Ordering::Greater => node.right = remove(node.right.take(), value, removed),
        Ordering::Equal => {
            *removed = true;
            match (node.left.take(), node.right.take()) {
                (None, None) => return None,
                (Some(child), None) | (None, Some(child)) => return Some(child),

                // With two children we promote this node's successor. That is, the smallest
                // value in the right subtree. Its node is spliced out of the right subtree and
                // its value moves up here.
                (Some(left), Some(right)) => {
                    let (successor, right) = take_smallest(right);
                    node.value = successor;
                    node.left = Some(left);
                    node.right = right;
                }
            }
        }
    }

    Some(rebalance(node))
}

/// Detaches the smallest node of a subtree. Returns its value and the rebalanced remainder of
/// the subtree.
fn take_smallest<T>(mut node: Box<Node<T>>) -> (T, Link<T>) {
    match node.left.take() {
        None => {
            let Node { value, right, .. } = *node;
            (value, right)
        }
        Some(left) => {
            let (smallest, left) = take_smallest(left);
            node.left = left;
            (smallest, Some(rebalance(node)))
        }
    }
}

/// Restores the AVL invariant at `node` after one of its subtrees changed height by at most one.
/// Both subtrees must already be balanced.
///
/// See https://en.wikipedia.org/wiki/AVL_tree#Rebalancing for terminology.
fn rebalance<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    node.fix_height();

    let balance_factor = node.balance_factor();
    let node = if balance_factor > 1 {
        let left = node.left.as_ref().expect("Left heavy => left child");
        if left.balance_factor() >= 0 {
            trace!("rebalancing left-left");
            rotate_right(node)
        } else {
            trace!("rebalancing left-right");
            node.left = node.left.take().map(rotate_left);
            rotate_right(node)
        }
    } else if balance_factor < -1 {
        let right = node.right.as_ref().expect("Right heavy => right child");
        if right.balance_factor() <= 0 {
            trace!("rebalancing right-right");
            rotate_left(node)
        } else {
            trace!("rebalancing right-left");
            node.right = node.right.take().map(rotate_right);
            rotate_left(node)
        }
    } else {
        node
    };

    if cfg!(debug_assertions) {
        let left_height = height(&node.left);
        let right_height = height(&node.right);
        assert_eq!(node.height, left_height.max(right_height) + 1);
        assert!(left_height.abs_diff(right_height) <= 1);
    }
    node
}

/// Rotate `old_root` to the left. This moves its right child up vertically and `old_root` down
/// vertically. Used to rebalance the tree when the right child is too tall.
///
/// ## Panics
///
/// When called on a node without a right child.
///
/// # Diagram
///
/// ```text
///   old_root                     new_root
///    /    \                       /    \
///   x   new_root    rotate ->  old_root  z
///         /  \                  /  \
///        y    z                x    y
/// ```
fn rotate_left<T>(mut old_root: Box<Node<T>>) -> Box<Node<T>> {
    let mut new_root = old_root.right.take().expect("Rotate left => right child");

    old_root.right = new_root.left.take();
    old_root.fix_height();

    new_root.left = Some(old_root);
    new_root.fix_height();
    new_root
}

/// Rotate `old_root` to the right. This moves its left child up vertically and `old_root` down
/// vertically. Used to rebalance the tree when the left child is too tall.
///
/// ## Panics
///
/// When called on a node without a left child.
///
/// # Diagram
///
/// ```text
///      old_root              new_root
///       /    \                /    \
///   new_root  z    rotate ->  x   old_root
///    /  \                          /  \
///   x    y                        y    z
/// ```
fn rotate_right<T>(mut old_root: Box<Node<T>>) -> Box<Node<T>> {
    let mut new_root = old_root.left.take().expect("Rotate right => left child");

    old_root.left = new_root.right.take();
    old_root.fix_height();

    new_root.right = Some(old_root);
    new_root.fix_height();
    new_root
}

/// Recursive helper for [`Tree::check_invariants`]. Values in the subtree must lie strictly
/// between `lower` and `upper`. Returns the subtree's height and node count.
fn check<'a, T>(
    link: &'a Link<T>,
    depth: usize,
    lower: Option<&'a T>,
    upper: Option<&'a T>,
) -> Result<(usize, usize), InvariantViolation>
where
    T: Ord,
{
    let node = match link {
        Some(node) => node,
        None => return Ok((0, 0)),
    };

    let above_lower = lower.map_or(true, |lower| node.value > *lower);
    let below_upper = upper.map_or(true, |upper| node.value < *upper);
    if !(above_lower && below_upper) {
        return Err(InvariantViolation::OutOfOrder { depth });
    }

    let (left_height, left_count) = check(&node.left, depth + 1, lower, Some(&node.value))?;
    let (right_height, right_count) = check(&node.right, depth + 1, Some(&node.value), upper)?;

    let actual = left_height.max(right_height) + 1;
    if node.height != actual {
        return Err(InvariantViolation::StaleHeight {
            depth,
            cached: node.height,
            actual,
        });
    }

    let balance_factor = left_height as isize - right_height as isize;
    if balance_factor.abs() > 1 {
        return Err(InvariantViolation::Unbalanced {
            depth,
            balance_factor,
        });
    }

    Ok((actual, left_count + right_count + 1))
}
