//! Index structures.
//!
//! One index lives here today: the price-ordered AVL tree. The module
//! keeps its own namespace so alternative structures (e.g. a skip list)
//! could sit alongside it without touching the public surface.

pub mod avl;

pub use avl::{IndexStats, PriceIndex, RangeIter};
