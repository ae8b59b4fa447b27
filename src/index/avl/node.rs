//! AvlNode - one node of the price-ordered tree.
//!
//! An [`AvlNode`] holds a [`Product`] plus the structure the tree needs:
//! - two exclusively owned children (no parent pointers, no aliasing)
//! - a cached subtree height for O(1) balance checks
//!
//! Rotations live here too; they are pure ownership shuffles between a
//! node and one of its children.

use crate::catalog::Product;

/// An owned, optional subtree.
///
/// Restructuring works by taking a `Link` out of its parent, rebuilding
/// it, and handing the new subtree root back. That is how "rebalance on
/// the way back up" is expressed without parent pointers.
pub(crate) type Link = Option<Box<AvlNode>>;

/// A node in the price-ordered AVL tree.
#[derive(Debug)]
pub(crate) struct AvlNode {
    /// The stored record. Its `price` field is this node's ordering key.
    pub product: Product,

    /// Subtree of strictly smaller prices.
    pub left: Link,

    /// Subtree of strictly larger prices.
    pub right: Link,

    /// Cached height of the subtree rooted here. A leaf has height 1;
    /// an absent child contributes 0.
    pub height: u32,
}

impl AvlNode {
    /// Create a new leaf node.
    pub fn new(product: Product) -> Box<Self> {
        Box::new(Self {
            product,
            left: None,
            right: None,
            height: 1,
        })
    }

    /// Height of an optional subtree (absent = 0).
    #[inline]
    pub fn link_height(link: &Link) -> u32 {
        link.as_deref().map_or(0, |n| n.height)
    }

    /// Recompute this node's cached height from its children.
    ///
    /// Must be called after any change to `left` or `right`, child
    /// before parent when both changed.
    #[inline]
    pub fn update_height(&mut self) {
        self.height = 1 + Self::link_height(&self.left).max(Self::link_height(&self.right));
    }

    /// Balance factor: `height(left) - height(right)`.
    ///
    /// The AVL invariant keeps this in `-1..=1` between operations.
    #[inline]
    pub fn balance_factor(&self) -> i32 {
        Self::link_height(&self.left) as i32 - Self::link_height(&self.right) as i32
    }

    /// The node holding the smallest price in this subtree.
    pub fn min_node(&self) -> &AvlNode {
        let mut current = self;
        while let Some(left) = current.left.as_deref() {
            current = left;
        }
        current
    }

    /// The node holding the largest price in this subtree.
    pub fn max_node(&self) -> &AvlNode {
        let mut current = self;
        while let Some(right) = current.right.as_deref() {
            current = right;
        }
        current
    }
}

/// Right rotation around `y`: its left child `x` takes its place.
///
/// `x`'s former right subtree becomes `y`'s new left subtree. Heights
/// are recomputed child (`y`) before parent (`x`).
///
/// ```text
///       y                x
///      / \              / \
///     x   C    ──▶     A   y
///    / \                  / \
///   A   B                B   C
/// ```
pub(crate) fn rotate_right(mut y: Box<AvlNode>) -> Box<AvlNode> {
    let mut x = y.left.take().expect("right rotation requires a left child");
    y.left = x.right.take();
    y.update_height();
    x.right = Some(y);
    x.update_height();
    x
}

/// Left rotation around `x`: its right child `y` takes its place.
///
/// Mirror image of [`rotate_right`].
pub(crate) fn rotate_left(mut x: Box<AvlNode>) -> Box<AvlNode> {
    let mut y = x.right.take().expect("left rotation requires a right child");
    x.right = y.left.take();
    x.update_height();
    y.left = Some(x);
    y.update_height();
    y
}
