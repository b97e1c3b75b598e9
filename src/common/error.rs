//! Error types for the index layer.

use thiserror::Error;

use crate::common::NodeId;

/// Result of an index operation that can fail, using the crate [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// All errors reported by the index layer.
///
/// A missing key is not an error: lookups return `Option` and deletes
/// return `bool`. Apart from [`Error::InvalidOrder`], every variant describes
/// a broken structural invariant found by `BTree::validate`, which means a
/// bug in the tree itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The requested order is below `MIN_ORDER`.
    #[error("B-tree order must be at least 3, got {order}")]
    InvalidOrder { order: usize },

    /// Keys inside a node are not strictly ascending.
    #[error("{node} keys are not strictly ascending")]
    UnsortedKeys { node: NodeId },

    /// A node holds fewer or more keys than its bounds allow.
    #[error("{node} holds {len} keys, allowed range is [{min}, {max}]")]
    KeyCountOutOfRange {
        node: NodeId,
        len: usize,
        min: usize,
        max: usize,
    },

    /// An internal node does not have exactly one more child than keys.
    #[error("{node} has {keys} keys but {children} children")]
    ChildCountMismatch {
        node: NodeId,
        keys: usize,
        children: usize,
    },

    /// Leaves were found at different depths.
    #[error("{node} is a leaf at depth {found}, expected depth {expected}")]
    UnevenLeafDepth {
        node: NodeId,
        expected: usize,
        found: usize,
    },

    /// A child's parent back-reference does not point at the node listing it,
    /// or a child is listed more than once.
    #[error("{node} has an inconsistent parent link")]
    ParentMismatch { node: NodeId },

    /// A key lies outside the range given by the separators in its parent.
    #[error("{node} holds a key outside the range of its parent separators")]
    KeyOutOfBounds { node: NodeId },

    /// A live node is not reachable from the root.
    #[error("{node} is live but unreachable from the root")]
    UnreachableNode { node: NodeId },

    /// The recorded key count disagrees with the keys actually stored.
    #[error("tree records {recorded} keys but stores {counted}")]
    LengthMismatch { recorded: usize, counted: usize },
}
