//! B-tree index implementation.
//!
//! An in-memory B-tree of configurable order `m`. Every node except the
//! root holds between `ceil(m/2) - 1` and `m - 1` keys, internal nodes
//! have one more child than keys, and all leaves sit at the same depth.
//!
//! # Components
//! - [`BTree`] - The tree handle (lookup, insert, delete, validation)
//! - [`TreeStats`] - Split/borrow/merge counters
//! - `node` / `arena` - Node storage addressed by [`NodeId`](crate::NodeId)
//! - `insert` - Overflow splitting, possibly promoting a new root
//! - `delete` - Successor replacement, borrowing, merging, root collapse

mod arena;
mod delete;
mod insert;
mod node;
mod stats;
mod tree;
mod validate;

pub use stats::TreeStats;
pub use tree::BTree;
