//! Configuration constants for pricedex.

/// Minor currency units per major unit (cents per dollar).
///
/// Prices are stored as fixed-point integers in minor units so they can
/// serve as a total ordering key. See [`crate::common::Price`].
pub const PRICE_SCALE: i64 = 100;

/// Worst-case height factor for a height-balanced tree.
///
/// An AVL tree with `n` nodes never grows taller than
/// `1.44 * log2(n + 2)`. The balance tests use this bound.
pub const AVL_HEIGHT_FACTOR: f64 = 1.44;
