//! Index structures.
//!
//! - [`btree`] - Single-threaded B-tree of configurable order
//! - [`SharedBTree`] - Lock-guarded handle for sharing a tree across threads

pub mod btree;
mod shared;

pub use btree::{BTree, TreeStats};
pub use shared::SharedBTree;
