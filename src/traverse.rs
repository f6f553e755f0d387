use std::iter::FusedIterator;

use crate::node::Node;

/// The order in which [`Tree::traverse`][crate::Tree::traverse] visits values.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// A node, then its left subtree, then its right subtree.
    PreOrder,
    /// The left subtree, then the node, then the right subtree. This yields values in ascending
    /// order.
    InOrder,
    /// The left subtree, then the right subtree, then the node.
    PostOrder,
}

/// A pending step of a traversal.
enum Visit<'a, T> {
    /// Expand this subtree into its value and children.
    Subtree(&'a Node<T>),
    /// Yield this value.
    Value(&'a T),
}

/// A lazy walk over the values of a [`Tree`][crate::Tree], created by
/// [`Tree::traverse`][crate::Tree::traverse].
///
/// Instead of recursing, the walk keeps a stack of pending visits. Expanding a subtree pushes its
/// value and children in the reverse of the order they should come out, so the stack never holds
/// more than a few entries per level of the tree.
pub struct Traverse<'a, T> {
    order: Order,
    stack: Vec<Visit<'a, T>>,
    remaining: usize,
}

impl<'a, T> Traverse<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, len: usize, order: Order) -> Self {
        Self {
            order,
            stack: root.map(Visit::Subtree).into_iter().collect(),
            remaining: len,
        }
    }

    fn push_subtree(&mut self, node: Option<&'a Node<T>>) {
        if let Some(node) = node {
            self.stack.push(Visit::Subtree(node));
        }
    }

    fn expand(&mut self, node: &'a Node<T>) {
        let value = Visit::Value(node.value());
        match self.order {
            Order::PreOrder => {
                self.push_subtree(node.right());
                self.push_subtree(node.left());
                self.stack.push(value);
            }
            Order::InOrder => {
                self.push_subtree(node.right());
                self.stack.push(value);
                self.push_subtree(node.left());
            }
            Order::PostOrder => {
                self.stack.push(value);
                self.push_subtree(node.right());
                self.push_subtree(node.left());
            }
        }
    }
}

impl<'a, T> Iterator for Traverse<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.stack.pop()? {
                Visit::Value(value) => {
                    self.remaining -= 1;
                    return Some(value);
                }
                Visit::Subtree(node) => self.expand(node),
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Traverse<'_, T> {}

impl<T> FusedIterator for Traverse<'_, T> {}
