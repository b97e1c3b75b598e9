//! B-tree node and in-node search.

use crate::common::NodeId;

/// A single B-tree node.
///
/// `children` is empty for a leaf and holds exactly `keys.len() + 1` ids
/// for an internal node. Child `i` covers the keys between `keys[i - 1]`
/// and `keys[i]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Node<K> {
    /// Keys in strictly ascending order.
    pub(crate) keys: Vec<K>,

    /// Child node ids, owned through the arena.
    pub(crate) children: Vec<NodeId>,

    /// Back-reference to the parent, `None` exactly for the root.
    pub(crate) parent: Option<NodeId>,
}

impl<K> Node<K> {
    /// Create an empty leaf.
    ///
    /// Nothing is reserved up front: the order may be far larger than any
    /// node ever gets, so key storage grows with use.
    pub(crate) fn leaf(parent: Option<NodeId>) -> Self {
        Self {
            keys: Vec::new(),
            children: Vec::new(),
            parent,
        }
    }

    /// Create an internal node from its keys and child ids.
    pub(crate) fn internal(keys: Vec<K>, children: Vec<NodeId>, parent: Option<NodeId>) -> Self {
        debug_assert_eq!(children.len(), keys.len() + 1);
        Self {
            keys,
            children,
            parent,
        }
    }

    #[inline]
    pub(crate) fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Whether the child list matches the key list.
    #[inline]
    pub(crate) fn is_well_formed(&self) -> bool {
        self.is_leaf() || self.children.len() == self.keys.len() + 1
    }
}

impl<K: Ord> Node<K> {
    /// Binary search this node's keys.
    ///
    /// `Ok(i)` means `keys[i] == key`. `Err(i)` is the sorted insertion
    /// point, which is also the index of the child whose range holds `key`.
    #[inline]
    pub(crate) fn find(&self, key: &K) -> Result<usize, usize> {
        self.keys.binary_search(key)
    }
}
