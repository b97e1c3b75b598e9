//! The B-tree handle: construction, lookup and traversal.

use std::fmt;

use crate::common::{NodeId, Result, TreeConfig};
use crate::index::btree::arena::NodeArena;
use crate::index::btree::node::Node;
use crate::index::btree::stats::TreeStats;

/// An in-memory B-tree of configurable order over unique keys.
///
/// # Architecture
/// ```text
/// ┌───────────────────────────────────────────────────────────┐
/// │                        BTree<K>                           │
/// │  ┌────────────┐  ┌────────────────────────────────────┐   │
/// │  │   root     │  │        arena: NodeArena<K>         │   │
/// │  │  NodeId    │─▶│  [Node0] [Node1] [Node2] ...       │   │
/// │  └────────────┘  └────────────────────────────────────┘   │
/// │  ┌────────────┐  ┌────────────┐  ┌────────────┐           │
/// │  │  config    │  │    len     │  │   stats    │           │
/// │  │ m/min/max  │  │   usize    │  │ TreeStats  │           │
/// │  └────────────┘  └────────────┘  └────────────┘           │
/// └───────────────────────────────────────────────────────────┘
/// ```
///
/// # Thread Safety
/// None. Every operation runs to completion under `&self` or `&mut self`;
/// use [`SharedBTree`](crate::index::SharedBTree) to share a tree between
/// threads.
///
/// # Example
/// ```
/// use interchange_index::BTree;
///
/// let mut tree = BTree::new(5);
/// tree.insert_multiple([20, 4, 44, 89]);
///
/// assert_eq!(tree.get(&44), Some(&44));
/// assert!(tree.delete(&44));
/// assert!(!tree.delete(&44));
/// assert_eq!(tree.in_order(), vec![&4, &20, &89]);
/// ```
#[derive(Clone)]
pub struct BTree<K> {
    /// Order parameters (immutable after construction).
    pub(crate) config: TreeConfig,

    /// Owns every node of the tree.
    pub(crate) arena: NodeArena<K>,

    /// The root node. Always live, possibly an empty leaf.
    pub(crate) root: NodeId,

    /// Number of keys stored.
    pub(crate) len: usize,

    /// Structural change counters.
    pub(crate) stats: TreeStats,
}

impl<K: Ord> BTree<K> {
    /// Create an empty tree of order `order`.
    ///
    /// # Panics
    /// Panics if `order < 3`. Use [`BTree::try_new`] when the order comes
    /// from outside input.
    pub fn new(order: usize) -> Self {
        match TreeConfig::new(order) {
            Ok(config) => Self::with_config(config),
            Err(e) => panic!("{}", e),
        }
    }

    /// Create an empty tree of order `order`.
    ///
    /// # Errors
    /// - `Error::InvalidOrder` if `order < 3`
    pub fn try_new(order: usize) -> Result<Self> {
        TreeConfig::new(order).map(Self::with_config)
    }

    /// Create an empty tree from already-validated parameters.
    pub fn with_config(config: TreeConfig) -> Self {
        let mut arena = NodeArena::new();
        let root = arena.allocate(Node::leaf(None));
        Self {
            config,
            arena,
            root,
            len: 0,
            stats: TreeStats::default(),
        }
    }

    // ========================================================================
    // Public API: Lookup
    // ========================================================================

    /// Return the stored key equal to `key`, if any.
    pub fn get(&self, key: &K) -> Option<&K> {
        self.locate(key).map(|(id, i)| &self.arena[id].keys[i])
    }

    /// Whether `key` is stored.
    pub fn contains(&self, key: &K) -> bool {
        self.locate(key).is_some()
    }

    /// Smallest key in the tree.
    pub fn first(&self) -> Option<&K> {
        let mut id = self.root;
        while let Some(&child) = self.arena[id].children.first() {
            id = child;
        }
        self.arena[id].keys.first()
    }

    /// Largest key in the tree.
    pub fn last(&self) -> Option<&K> {
        let mut id = self.root;
        while let Some(&child) = self.arena[id].children.last() {
            id = child;
        }
        self.arena[id].keys.last()
    }

    /// Find the node holding `key` and its index within that node.
    pub(crate) fn locate(&self, key: &K) -> Option<(NodeId, usize)> {
        let mut id = self.root;
        loop {
            let node = &self.arena[id];
            match node.find(key) {
                Ok(i) => return Some((id, i)),
                Err(_) if node.is_leaf() => return None,
                Err(i) => id = node.children[i],
            }
        }
    }

    /// Position of `id` in its parent's child list, or `None` for the root.
    pub(crate) fn index_in_parent(&self, id: NodeId) -> Option<(NodeId, usize)> {
        let parent = self.arena[id].parent?;
        match self.arena[parent].children.iter().position(|&c| c == id) {
            Some(i) => Some((parent, i)),
            None => panic!("{} missing from child list of {}", id, parent),
        }
    }
}

impl<K> BTree<K> {
    // ========================================================================
    // Public API: Shape and configuration
    // ========================================================================

    /// Number of keys stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no keys.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Order parameters of this tree.
    #[inline]
    pub fn config(&self) -> TreeConfig {
        self.config
    }

    /// Maximum number of children per node.
    #[inline]
    pub fn order(&self) -> usize {
        self.config.order()
    }

    #[inline]
    pub fn min_keys(&self) -> usize {
        self.config.min_keys()
    }

    #[inline]
    pub fn max_keys(&self) -> usize {
        self.config.max_keys()
    }

    /// Number of levels; a lone root counts as one.
    pub fn height(&self) -> usize {
        let mut height = 1;
        let mut id = self.root;
        while let Some(&child) = self.arena[id].children.first() {
            id = child;
            height += 1;
        }
        height
    }

    /// Number of live nodes.
    pub fn node_count(&self) -> usize {
        self.arena.live_count()
    }

    /// Snapshot of the structural change counters.
    pub fn stats(&self) -> TreeStats {
        self.stats
    }

    /// Reset the structural change counters.
    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    /// Remove every key, leaving a single empty root.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = self.arena.allocate(Node::leaf(None));
        self.len = 0;
    }

    // ========================================================================
    // Public API: Traversal
    // ========================================================================

    /// All keys in ascending order.
    pub fn in_order(&self) -> Vec<&K> {
        let mut out = Vec::with_capacity(self.len);
        self.collect_in_order(self.root, &mut out);
        out
    }

    fn collect_in_order<'a>(&'a self, id: NodeId, out: &mut Vec<&'a K>) {
        let node = &self.arena[id];
        if node.is_leaf() {
            out.extend(node.keys.iter());
            return;
        }
        for (i, key) in node.keys.iter().enumerate() {
            self.collect_in_order(node.children[i], out);
            out.push(key);
        }
        if let Some(&last) = node.children.last() {
            self.collect_in_order(last, out);
        }
    }

    /// Keys of every node, grouped by level from the root down.
    fn levels(&self) -> Vec<Vec<&[K]>> {
        let mut levels = Vec::new();
        let mut frontier = vec![self.root];
        while !frontier.is_empty() {
            levels.push(
                frontier
                    .iter()
                    .map(|&id| self.arena[id].keys.as_slice())
                    .collect(),
            );
            frontier = frontier
                .iter()
                .flat_map(|&id| self.arena[id].children.iter().copied())
                .collect();
        }
        levels
    }
}

impl<K: Ord> Default for BTree<K> {
    fn default() -> Self {
        Self::with_config(TreeConfig::default())
    }
}

impl<K: fmt::Debug> fmt::Debug for BTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BTree")
            .field("order", &self.config.order())
            .field("len", &self.len)
            .field("levels", &self.levels())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Error;

    #[test]
    fn test_new_tree_is_single_empty_root() {
        let tree: BTree<u32> = BTree::new(4);
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.height(), 1);
        assert_eq!(tree.node_count(), 1);
        assert_eq!(tree.get(&1), None);
        assert_eq!(tree.first(), None);
        assert_eq!(tree.last(), None);
    }

    #[test]
    #[should_panic(expected = "B-tree order must be at least 3")]
    fn test_new_rejects_small_order() {
        let _tree: BTree<u32> = BTree::new(2);
    }

    #[test]
    fn test_try_new_reports_invalid_order() {
        let result: Result<BTree<u32>> = BTree::try_new(1);
        assert!(matches!(result, Err(Error::InvalidOrder { order: 1 })));
        assert!(BTree::<u32>::try_new(3).is_ok());
    }

    #[test]
    fn test_config_accessors() {
        let tree: BTree<u32> = BTree::new(6);
        assert_eq!(tree.order(), 6);
        assert_eq!(tree.min_keys(), 2);
        assert_eq!(tree.max_keys(), 5);
        assert_eq!(tree.config(), TreeConfig::new(6).unwrap());

        let tree: BTree<u32> = BTree::default();
        assert_eq!(tree.order(), 5);
    }

    #[test]
    fn test_first_last_and_height() {
        let mut tree = BTree::new(3);
        tree.insert_multiple([5, 1, 9, 3, 7]);
        assert_eq!(tree.first(), Some(&1));
        assert_eq!(tree.last(), Some(&9));
        assert!(tree.height() > 1);
    }

    #[test]
    fn test_clear() {
        let mut tree = BTree::new(3);
        tree.insert_multiple(0..50);
        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(tree.node_count(), 1);
        assert_eq!(tree.height(), 1);
        assert!(tree.in_order().is_empty());

        tree.insert(8);
        assert_eq!(tree.get(&8), Some(&8));
    }

    #[test]
    fn test_debug_lists_levels() {
        let mut tree = BTree::new(3);
        tree.insert_multiple([1, 2, 3]);
        let dump = format!("{:?}", tree);
        assert!(dump.contains("order: 3"));
        assert!(dump.contains("[[[2]], [[1], [3]]]"));
    }
}
