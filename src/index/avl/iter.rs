//! Pruned in-order traversal over a closed price interval.

use crate::catalog::Product;
use crate::common::Price;
use crate::index::avl::node::AvlNode;

/// Iterator over all products with `min <= price <= max`, ascending.
///
/// Produced by [`crate::PriceIndex::products_in_range`]. The traversal
/// is a standard explicit-stack in-order walk with two prunes:
/// - a subtree is never entered from the left when its root's price is
///   already below `min` (everything further left is smaller still),
/// - the walk stops outright at the first price above `max` (in-order
///   means every later price is larger).
///
/// On a balanced tree with `k` matches this visits O(log n + k) nodes
/// instead of O(n).
///
/// The iterator borrows the tree; it is finite and non-restartable.
pub struct RangeIter<'a> {
    /// Pending left spine, smallest price on top.
    stack: Vec<&'a AvlNode>,
    min: Price,
    max: Price,
}

impl<'a> RangeIter<'a> {
    pub(crate) fn new(root: Option<&'a AvlNode>, min: Price, max: Price) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            min,
            max,
        };
        iter.push_left_spine(root);
        iter
    }

    /// Descend from `link` toward the smallest in-range price, stacking
    /// every node still to be visited. Nodes below `min` are skipped
    /// together with their entire left subtrees.
    fn push_left_spine(&mut self, mut link: Option<&'a AvlNode>) {
        while let Some(node) = link {
            if node.product.price >= self.min {
                self.stack.push(node);
                link = node.left.as_deref();
            } else {
                link = node.right.as_deref();
            }
        }
    }
}

impl<'a> Iterator for RangeIter<'a> {
    type Item = &'a Product;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if node.product.price > self.max {
            // In-order: everything still on the stack is larger.
            self.stack.clear();
            return None;
        }
        self.push_left_spine(node.right.as_deref());
        Some(&node.product)
    }
}

impl std::iter::FusedIterator for RangeIter<'_> {}
