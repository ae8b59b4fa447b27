//! PriceIndex - the price-ordered AVL index.
//!
//! The [`PriceIndex`] provides:
//! - O(log n) insert, remove, and price update
//! - O(log n) min/max price lookup
//! - O(log n + k) range queries in ascending price order
//! - O(1) lookup by product code through a secondary map

use std::cmp::Ordering;
use std::collections::HashMap;

use tracing::{debug, trace};

use crate::catalog::Product;
use crate::common::{Error, Price, ProductCode, Result};
use crate::index::avl::iter::RangeIter;
use crate::index::avl::node::{rotate_left, rotate_right, AvlNode, Link};
use crate::index::avl::stats::IndexStats;

/// An in-memory index over products, ordered by price.
///
/// # Architecture
/// ```text
/// ┌───────────────────────────────────────────────────────────┐
/// │                       PriceIndex                          │
/// │  ┌────────────────────┐   ┌───────────────────────────┐   │
/// │  │  codes             │   │  root: AVL tree on price  │   │
/// │  │  Code → Price      │──▶│        (150)              │   │
/// │  └────────────────────┘   │       /     \             │   │
/// │                           │    (100)   (200)          │   │
/// │  ┌────────────────────┐   │    /   \       \          │   │
/// │  │  stats, len        │   │ (50)  (120)   (250)       │   │
/// │  └────────────────────┘   └───────────────────────────┘   │
/// └───────────────────────────────────────────────────────────┘
/// ```
///
/// The tree is keyed by `price` alone. Codes are resolved to prices
/// through the `codes` map first, so every traversal descends by the
/// tree's real key; the map is kept in lockstep with the tree by every
/// mutating operation.
///
/// # Invariants
/// After every public operation:
/// - strict BST order on price (left < node < right)
/// - AVL balance: `|height(left) - height(right)| <= 1` everywhere
/// - every cached height equals the true subtree height
/// - no two nodes share a price, no two products share a code
/// - `codes` maps each stored product's code to its current price
///
/// # Thread Safety
/// None by design. All mutation goes through `&mut self`; callers that
/// share an index across threads must wrap it in their own lock.
///
/// # Usage
/// ```
/// use pricedex::{Price, PriceIndex, Product};
///
/// let mut index = PriceIndex::new();
/// index.insert(Product::new("SKU-1", "Espresso", Price::from_minor(350)))?;
/// index.insert(Product::new("SKU-2", "Filter", Price::from_minor(250)))?;
///
/// let cheapest = index.min_price_product().unwrap();
/// assert_eq!(cheapest.code.as_str(), "SKU-2");
/// # Ok::<(), pricedex::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct PriceIndex {
    /// Root of the price-ordered tree; owns every node.
    root: Link,

    /// Secondary lookup: product code to its current price.
    codes: HashMap<ProductCode, Price>,

    /// Number of stored products.
    len: usize,

    /// Operation counters.
    stats: IndexStats,
}

impl PriceIndex {
    /// Create a new, empty index.
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Public API: mutation
    // ========================================================================

    /// Insert a product, keyed by its price.
    ///
    /// Every node touched on the way back out of the recursion has its
    /// height recomputed and is rebalanced, so the tree stays within the
    /// AVL bound.
    ///
    /// # Errors
    /// - [`Error::DuplicatePrice`] if a product with the same price is
    ///   already stored
    /// - [`Error::DuplicateCode`] if a product with the same code is
    ///   already stored
    ///
    /// On error the index is left untouched.
    pub fn insert(&mut self, product: Product) -> Result<()> {
        if self.codes.contains_key(&product.code) {
            return Err(Error::DuplicateCode(product.code));
        }
        if self.find_by_price(product.price).is_some() {
            return Err(Error::DuplicatePrice(product.price));
        }

        debug!(code = %product.code, price = %product.price, "insert");
        self.codes.insert(product.code.clone(), product.price);
        let root = self.root.take();
        self.root = Some(self.insert_at(root, product));
        self.len += 1;
        self.stats.inserts += 1;
        Ok(())
    }

    /// Remove the product with the given code.
    ///
    /// Returns `true` if a product was removed, `false` if the code was
    /// not present. Absence is not an error: removing an unknown code
    /// leaves the index untouched.
    pub fn remove(&mut self, code: &ProductCode) -> bool {
        let Some(&price) = self.codes.get(code) else {
            return false;
        };

        debug!(%code, %price, "remove");
        let root = self.root.take();
        let (root, removed) = self.remove_at(root, price);
        self.root = root;
        debug_assert!(removed.is_some(), "code map pointed at a missing node");

        self.codes.remove(code);
        self.len -= 1;
        self.stats.removes += 1;
        true
    }

    /// Change the price of the product with the given code.
    ///
    /// The ordering key cannot be rewritten in place without breaking
    /// BST order, so this is a remove at the old price followed by a
    /// reinsert at the new one, O(log n) each. Updating to the current
    /// price is a no-op.
    ///
    /// # Errors
    /// - [`Error::ProductNotFound`] if the code is unknown
    /// - [`Error::DuplicatePrice`] if another product already holds
    ///   `new_price`
    ///
    /// On error the index is left untouched.
    pub fn update_price(&mut self, code: &ProductCode, new_price: Price) -> Result<()> {
        let Some(&old_price) = self.codes.get(code) else {
            return Err(Error::ProductNotFound(code.clone()));
        };
        if new_price == old_price {
            return Ok(());
        }
        if self.find_by_price(new_price).is_some() {
            return Err(Error::DuplicatePrice(new_price));
        }

        debug!(%code, %old_price, %new_price, "update_price");
        let root = self.root.take();
        let (root, removed) = self.remove_at(root, old_price);
        self.root = root;
        let mut product = removed.expect("code map pointed at a missing node");

        product.price = new_price;
        self.codes.insert(code.clone(), new_price);
        let root = self.root.take();
        self.root = Some(self.insert_at(root, product));
        self.stats.updates += 1;
        Ok(())
    }

    // ========================================================================
    // Public API: queries
    // ========================================================================

    /// The product with the lowest price, or `None` if the index is empty.
    pub fn min_price_product(&self) -> Option<&Product> {
        self.root.as_deref().map(|n| &n.min_node().product)
    }

    /// The product with the highest price, or `None` if the index is empty.
    pub fn max_price_product(&self) -> Option<&Product> {
        self.root.as_deref().map(|n| &n.max_node().product)
    }

    /// Look up a product by code.
    pub fn get(&self, code: &ProductCode) -> Option<&Product> {
        let price = *self.codes.get(code)?;
        let product = self.find_by_price(price);
        debug_assert!(product.is_some(), "code map pointed at a missing node");
        product
    }

    /// Iterate over all products with `min <= price <= max`, ascending
    /// by price. The bounds are inclusive on both ends.
    pub fn products_in_range(&self, min: Price, max: Price) -> RangeIter<'_> {
        RangeIter::new(self.root.as_deref(), min, max)
    }

    /// Iterate over all products in ascending price order.
    pub fn iter(&self) -> RangeIter<'_> {
        self.products_in_range(Price::MIN, Price::MAX)
    }

    /// Number of stored products.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check whether the index is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Height of the tree (0 when empty).
    ///
    /// Bounded by `1.44 * log2(len + 2)`; see
    /// [`crate::common::config::AVL_HEIGHT_FACTOR`].
    #[inline]
    pub fn height(&self) -> u32 {
        AvlNode::link_height(&self.root)
    }

    /// A snapshot of the operation counters.
    #[inline]
    pub fn stats(&self) -> IndexStats {
        self.stats
    }

    // ========================================================================
    // Internal: recursive tree operations
    // ========================================================================

    /// Descend by price, with all duplicates already rejected by the
    /// caller, so the recursion itself cannot fail.
    fn insert_at(&mut self, link: Link, product: Product) -> Box<AvlNode> {
        let Some(mut node) = link else {
            return AvlNode::new(product);
        };

        debug_assert_ne!(product.price, node.product.price);
        if product.price < node.product.price {
            let left = node.left.take();
            node.left = Some(self.insert_at(left, product));
        } else {
            let right = node.right.take();
            node.right = Some(self.insert_at(right, product));
        }

        node.update_height();
        self.rebalance(node)
    }

    /// Remove the node holding `price`, returning the rebuilt subtree
    /// and the evicted payload (`None` if the price was absent).
    fn remove_at(&mut self, link: Link, price: Price) -> (Link, Option<Product>) {
        let Some(mut node) = link else {
            return (None, None);
        };

        let removed = match price.cmp(&node.product.price) {
            Ordering::Less => {
                let left = node.left.take();
                let (left, removed) = self.remove_at(left, price);
                node.left = left;
                removed
            }
            Ordering::Greater => {
                let right = node.right.take();
                let (right, removed) = self.remove_at(right, price);
                node.right = right;
                removed
            }
            Ordering::Equal => match (node.left.take(), node.right.take()) {
                // At most one child: splice the node out and promote it.
                (None, right) => return (right, Some(node.product)),
                (left, None) => return (left, Some(node.product)),
                // Two children: the in-order successor (leftmost of the
                // right subtree) replaces this node's payload, then its
                // original slot is removed from the right subtree.
                (left, Some(right)) => {
                    node.left = left;
                    let successor = right.min_node().product.clone();
                    let evicted = std::mem::replace(&mut node.product, successor);
                    let successor_price = node.product.price;
                    let (right, _) = self.remove_at(Some(right), successor_price);
                    node.right = right;
                    Some(evicted)
                }
            },
        };

        node.update_height();
        (Some(self.rebalance(node)), removed)
    }

    /// Find a product by exact price, descending from the root.
    fn find_by_price(&self, price: Price) -> Option<&Product> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match price.cmp(&node.product.price) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(&node.product),
            };
        }
        None
    }

    // ========================================================================
    // Internal: rebalancing
    // ========================================================================

    /// Restore the AVL invariant at `node`.
    ///
    /// Assumes both subtrees are balanced and `node`'s height cache is
    /// current; one structural change can put the factor at most one
    /// step past the bound, so a single or double rotation always fixes
    /// it.
    fn rebalance(&mut self, mut node: Box<AvlNode>) -> Box<AvlNode> {
        let factor = node.balance_factor();

        if factor > 1 {
            // Left-heavy. A right-leaning left child is the LR case:
            // rotate it left first so a single right rotation finishes.
            if node.left.as_deref().map_or(0, AvlNode::balance_factor) < 0 {
                let left = node.left.take().expect("left-heavy node has a left child");
                node.left = Some(rotate_left(left));
                self.stats.rotations += 1;
            }
            trace!(price = %node.product.price, "rotate right");
            self.stats.rotations += 1;
            return rotate_right(node);
        }

        if factor < -1 {
            // Right-heavy, mirror of the above.
            if node.right.as_deref().map_or(0, AvlNode::balance_factor) > 0 {
                let right = node
                    .right
                    .take()
                    .expect("right-heavy node has a right child");
                node.right = Some(rotate_right(right));
                self.stats.rotations += 1;
            }
            trace!(price = %node.product.price, "rotate left");
            self.stats.rotations += 1;
            return rotate_left(node);
        }

        node
    }
}

impl<'a> IntoIterator for &'a PriceIndex {
    type Item = &'a Product;
    type IntoIter = RangeIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
