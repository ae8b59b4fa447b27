//! Product - the record stored at each index node.

use std::fmt;

use crate::common::{Price, ProductCode};

/// A catalog product.
///
/// Plain value record with no behavior beyond field access. Two notions
/// of identity coexist and are never reconciled here:
/// - the *code* identifies the product for lookups,
/// - the *price* orders the product inside the tree.
///
/// The index enforces uniqueness of both at insert time.
///
/// # Example
/// ```
/// use pricedex::{Price, Product};
///
/// let product = Product::new("SKU-1", "Espresso", Price::from_minor(350));
/// assert_eq!(product.code.as_str(), "SKU-1");
/// assert_eq!(product.price, Price::from_minor(350));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    /// Unique identifier, key of the secondary lookup.
    pub code: ProductCode,

    /// Display name; carries no semantics for the index.
    pub name: String,

    /// Ordering key of the tree.
    pub price: Price,
}

impl Product {
    /// Create a new product.
    pub fn new(code: impl Into<ProductCode>, name: impl Into<String>, price: Price) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            price,
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) @ {}", self.name, self.code, self.price)
    }
}
