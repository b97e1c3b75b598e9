//! InterchangeDB index layer - an in-memory B-tree of configurable order.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Index Layer (index/)                        │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │        SharedBTree  (Arc<RwLock<BTree>>, optional)      │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                    BTree<K: Ord>                         │   │
//! │  │   get / insert ─▶ split        delete ─▶ borrow | merge  │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │          NodeArena  (Vec<Node> + free list)              │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (TreeConfig, NodeId, Error)
//! - [`index`] - Index structures (B-tree, shared handle)
//!
//! # Quick Start
//! ```
//! use interchange_index::BTree;
//!
//! let mut tree = BTree::new(5);
//! tree.insert(4);
//! tree.insert_multiple([20, 44, 89, 96, 25, 30, 33, 60, 75]);
//!
//! assert_eq!(tree.get(&30), Some(&30));
//! assert!(tree.delete(&44));
//! assert!(!tree.delete(&99));
//! tree.validate().unwrap();
//! ```

pub mod common;
pub mod index;

// Re-export commonly used items at crate root for convenience
pub use common::config::{DEFAULT_ORDER, MIN_ORDER};
pub use common::{Error, NodeId, Result, TreeConfig};

pub use index::{BTree, SharedBTree, TreeStats};
