//! Common types and utilities shared across pricedex.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration constants
//! - Error types
//! - Key types ([`Price`], [`ProductCode`])

pub mod config;
pub mod error;
mod price;
mod product_code;

pub use error::{Error, Result};
pub use price::Price;
pub use product_code::ProductCode;
