//! Error types for pricedex.

use thiserror::Error;

use crate::common::{Price, ProductCode};

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write
/// `Result<T>`, like `std::io::Result`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in pricedex.
///
/// Every failure is local and non-retryable: an operation either
/// completes in full or is rejected before it touches the tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A product with the same price is already stored.
    ///
    /// Price is the tree's ordering key and must stay unique; the index
    /// never overwrites or merges payloads on a price collision.
    #[error("a product priced {0} already exists")]
    DuplicatePrice(Price),

    /// A product with the same code is already stored.
    ///
    /// Codes key the secondary lookup; a second product under the same
    /// code would leave one of the two unreachable.
    #[error("a product with code {0} already exists")]
    DuplicateCode(ProductCode),

    /// No product with the given code exists.
    #[error("no product with code {0}")]
    ProductNotFound(ProductCode),
}
