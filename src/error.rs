use thiserror::Error;

/// A broken tree invariant found by [`Tree::check_invariants`][crate::Tree::check_invariants].
///
/// Depths count from the root, which is at depth 0.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    /// A node's value is not strictly between the bounds set by its ancestors.
    #[error("value at depth {depth} is out of order with an ancestor")]
    OutOfOrder {
        /// Depth of the offending node.
        depth: usize,
    },

    /// A node's subtrees differ in height by more than one.
    #[error("node at depth {depth} has balance factor {balance_factor}")]
    Unbalanced {
        /// Depth of the offending node.
        depth: usize,
        /// Left height minus right height.
        balance_factor: isize,
    },

    /// A node's cached height doesn't match the shape of its subtree.
    #[error("node at depth {depth} caches height {cached} but its subtree is {actual} tall")]
    StaleHeight {
        /// Depth of the offending node.
        depth: usize,
        /// The height stored in the node.
        cached: usize,
        /// The height computed from its children.
        actual: usize,
    },

    /// The tree's length doesn't match the number of nodes it holds.
    #[error("tree reports {reported} values but holds {counted}")]
    LenMismatch {
        /// What [`Tree::len`][crate::Tree::len] returns.
        reported: usize,
        /// How many nodes were actually visited.
        counted: usize,
    },
}
