/// An owned, possibly empty, subtree. Rotations move these between slots.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A `Node` holds a value and owns its two children. Nodes are only created and rewired by
/// [`Tree`][crate::Tree]; this type exists publicly so the shape of a tree can be inspected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,

    /// How many levels are in the subtree rooted at this node.
    /// A node with no children has a height of 1.
    pub(crate) height: usize,
}

impl<T> Node<T> {
    /// Construct a new leaf `Node` holding `value`.
    pub(crate) fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
            height: 1,
        })
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The left child, holding values less than this node's.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The right child, holding values greater than this node's.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// How many levels are in the subtree rooted at this node.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The height of the left subtree minus the height of the right subtree. Anything outside
    /// `-1..=1` means this node needs rebalancing.
    pub fn balance_factor(&self) -> isize {
        height(&self.left) as isize - height(&self.right) as isize
    }

    /// Recompute this node's height from its children. Children must already be correct.
    pub(crate) fn fix_height(&mut self) {
        self.height = height(&self.left).max(height(&self.right)) + 1;
    }
}

/// Gets the height of a possibly empty subtree.
pub(crate) fn height<T>(link: &Link<T>) -> usize {
    link.as_ref().map_or(0, |n| n.height)
}
