//! Fixed-point price type.

use std::fmt;

use crate::common::config::PRICE_SCALE;

/// A product price in minor currency units (cents).
///
/// Prices are the ordering key of the index, so they must be totally
/// ordered, comparable for equality, and hashable. Floating point is none
/// of those (`NaN` breaks `Ord`), so prices are fixed-point `i64` values
/// in minor units.
///
/// # Example
/// ```
/// use pricedex::Price;
///
/// let price = Price::from_major(25);
/// assert_eq!(price.as_minor(), 2500);
/// assert!(price < Price::from_major(30));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Price(pub i64);

impl Price {
    /// Smallest representable price.
    pub const MIN: Price = Price(i64::MIN);

    /// Largest representable price.
    pub const MAX: Price = Price(i64::MAX);

    /// Create a price from minor units (cents).
    #[inline]
    pub fn from_minor(minor: i64) -> Self {
        Price(minor)
    }

    /// Create a price from whole major units (e.g. dollars).
    #[inline]
    pub fn from_major(major: i64) -> Self {
        Price(major * PRICE_SCALE)
    }

    /// The raw value in minor units.
    #[inline]
    pub fn as_minor(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let minor = self.0.unsigned_abs();
        let scale = PRICE_SCALE as u64;
        write!(f, "{}{}.{:02}", sign, minor / scale, minor % scale)
    }
}
