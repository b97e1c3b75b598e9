//! Structural change counters for a B-tree.

use std::fmt;

/// Counts of the rebalancing work a tree has done.
///
/// The tree is single-writer, so these are plain counters updated under
/// `&mut self`. The value returned by `BTree::stats` is a copy that can be
/// printed or compared freely.
///
/// # Example
/// ```
/// use interchange_index::BTree;
///
/// let mut tree = BTree::new(3);
/// tree.insert_multiple([1, 2, 3]);
///
/// let stats = tree.stats();
/// assert_eq!(stats.splits, 1);
/// assert_eq!(stats.root_promotions, 1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeStats {
    /// Nodes split because they overflowed (root splits included).
    pub splits: u64,

    /// Splits that created a new root, growing the tree by one level.
    pub root_promotions: u64,

    /// Underflows fixed by taking a key from the left sibling.
    pub borrows_left: u64,

    /// Underflows fixed by taking a key from the right sibling.
    pub borrows_right: u64,

    /// Sibling pairs merged into one node.
    pub merges: u64,

    /// Merges that emptied the root, shrinking the tree by one level.
    pub root_collapses: u64,
}

impl TreeStats {
    /// Total borrow operations in either direction.
    pub fn borrows(&self) -> u64 {
        self.borrows_left + self.borrows_right
    }

    /// Reset all counters to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl fmt::Display for TreeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ splits: {}, root_promotions: {}, borrows: {}, merges: {}, root_collapses: {} }}",
            self.splits,
            self.root_promotions,
            self.borrows(),
            self.merges,
            self.root_collapses
        )
    }
}
