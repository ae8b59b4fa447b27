//! Product code identifier type.

use std::fmt;

/// Identifies a product in the catalog.
///
/// Codes are opaque strings (SKUs, article numbers). The index hashes
/// them for the secondary lookup; it never orders the tree by them.
///
/// # Example
/// ```
/// use pricedex::ProductCode;
///
/// let code = ProductCode::new("SKU-042");
/// assert_eq!(code.as_str(), "SKU-042");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductCode(String);

impl ProductCode {
    /// Create a new product code.
    #[inline]
    pub fn new(code: impl Into<String>) -> Self {
        ProductCode(code.into())
    }

    /// The code as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProductCode {
    fn from(code: &str) -> Self {
        ProductCode::new(code)
    }
}

impl From<String> for ProductCode {
    fn from(code: String) -> Self {
        ProductCode(code)
    }
}

impl fmt::Display for ProductCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
