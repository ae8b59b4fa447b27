//! Price-ordered AVL tree index.
//!
//! # Components
//! - [`PriceIndex`] - the public operation set
//! - [`RangeIter`] - pruned in-order range traversal
//! - [`IndexStats`] - operation counters
//! - `node` - tree nodes and rotations (internal)

mod iter;
mod node;
mod stats;
mod tree;

pub use iter::RangeIter;
pub use stats::IndexStats;
pub use tree::PriceIndex;
