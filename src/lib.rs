//! pricedex - an in-memory product catalog index ordered by price.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         pricedex                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────┐   │
//! │  │                 Index Layer (index/)                 │   │
//! │  │   PriceIndex: AVL tree on price + code → price map   │   │
//! │  │   insert · remove · update_price · min/max · range   │   │
//! │  └─────────────────────────────────────────────────────┘   │
//! │                            ↓                                │
//! │  ┌─────────────────────────────────────────────────────┐   │
//! │  │               Catalog Layer (catalog/)               │   │
//! │  │            Product { code, name, price }             │   │
//! │  └─────────────────────────────────────────────────────┘   │
//! │                            ↓                                │
//! │  ┌─────────────────────────────────────────────────────┐   │
//! │  │               Common Layer (common/)                 │   │
//! │  │        Price, ProductCode, Error, constants          │   │
//! │  └─────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (Price, ProductCode, Error, config)
//! - [`catalog`] - The Product value type
//! - [`index`] - The price-ordered AVL index
//!
//! # Quick Start
//! ```
//! use pricedex::{Price, PriceIndex, Product};
//!
//! let mut index = PriceIndex::new();
//! index.insert(Product::new("SKU-1", "Espresso", Price::from_minor(350)))?;
//! index.insert(Product::new("SKU-2", "Filter", Price::from_minor(250)))?;
//! index.insert(Product::new("SKU-3", "Cold Brew", Price::from_minor(450)))?;
//!
//! // Cheapest and priciest products, O(log n) each.
//! assert_eq!(index.min_price_product().unwrap().code.as_str(), "SKU-2");
//! assert_eq!(index.max_price_product().unwrap().code.as_str(), "SKU-3");
//!
//! // Everything between 3.00 and 4.00, ascending by price.
//! let mids: Vec<&str> = index
//!     .products_in_range(Price::from_minor(300), Price::from_minor(400))
//!     .map(|p| p.code.as_str())
//!     .collect();
//! assert_eq!(mids, ["SKU-1"]);
//! # Ok::<(), pricedex::Error>(())
//! ```

pub mod catalog;
pub mod common;
pub mod index;

// Re-export commonly used items at crate root for convenience
pub use common::config::PRICE_SCALE;
pub use common::{Error, Price, ProductCode, Result};

pub use catalog::Product;
pub use index::{IndexStats, PriceIndex, RangeIter};
