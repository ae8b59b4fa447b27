//! Catalog value types.
//!
//! The catalog side of the crate is deliberately thin: the only type is
//! [`Product`], the record stored at each index node.

mod product;

pub use product::Product;
