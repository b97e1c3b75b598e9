//! Node identifier type.

use std::fmt;

/// Handle to a node slot in a B-tree's arena.
///
/// Ids are only meaningful for the tree that issued them. A slot released
/// by a merge may be handed out again by a later split, so an id must not
/// be held across top-level operations.
///
/// # Example
/// ```
/// use interchange_index::NodeId;
///
/// let id = NodeId::new(5);
/// assert_eq!(id.index(), 5);
/// assert_eq!(id.to_string(), "Node(5)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl NodeId {
    #[inline]
    pub fn new(slot: usize) -> Self {
        NodeId(slot)
    }

    /// Arena slot this id refers to.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({})", self.0)
    }
}
