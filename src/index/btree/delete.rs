//! Deletion, underflow rebalancing and node merging.
//!
//! Keys are always physically removed from a leaf. A key held by an
//! internal node is overwritten by its in-order successor, and the
//! successor is removed from its leaf instead. The leaf that lost a key is
//! then rebalanced:
//!
//! ```text
//! underflow ─▶ left sibling has surplus?  ─yes─▶ borrow from left
//!                 │ no
//!                 ▼
//!              right sibling has surplus? ─yes─▶ borrow from right
//!                 │ no
//!                 ▼
//!              merge with left (or right if no left) ─▶ parent may underflow
//! ```

use tracing::{debug, trace};

use crate::common::NodeId;
use crate::index::btree::tree::BTree;

impl<K: Ord> BTree<K> {
    /// Delete `key`. Returns `true` if it was present.
    pub fn delete(&mut self, key: &K) -> bool {
        self.remove(key).is_some()
    }

    /// Remove `key` and return the stored key, or `None` if absent.
    pub fn remove(&mut self, key: &K) -> Option<K> {
        let (id, i) = self.locate(key)?;

        let removed = if self.arena[id].is_leaf() {
            let removed = self.arena[id].keys.remove(i);
            self.rebalance(id);
            removed
        } else {
            let leaf = self.successor_leaf(id, i);
            let successor = self.arena[leaf].keys.remove(0);
            let removed = std::mem::replace(&mut self.arena[id].keys[i], successor);
            self.rebalance(leaf);
            removed
        };

        self.len -= 1;
        Some(removed)
    }

    /// Leaf holding the in-order successor of `keys[index]` in node `id`.
    fn successor_leaf(&self, id: NodeId, index: usize) -> NodeId {
        let mut leaf = self.arena[id].children[index + 1];
        while let Some(&child) = self.arena[leaf].children.first() {
            leaf = child;
        }
        leaf
    }

    /// Restore the minimum key count of `id`, walking up while merges
    /// leave the parent short as well.
    fn rebalance(&mut self, mut id: NodeId) {
        let min_keys = self.config.min_keys();

        loop {
            if self.arena[id].keys.len() >= min_keys {
                return;
            }
            let Some((parent, index)) = self.index_in_parent(id) else {
                // Root has no lower bound
                return;
            };

            let siblings = &self.arena[parent].children;
            let left = index.checked_sub(1).map(|i| siblings[i]);
            let right = siblings.get(index + 1).copied();

            if let Some(left) = left.filter(|&l| self.arena[l].keys.len() > min_keys) {
                self.borrow_from_left(parent, index, left, id);
                return;
            }
            if let Some(right) = right.filter(|&r| self.arena[r].keys.len() > min_keys) {
                self.borrow_from_right(parent, index, id, right);
                return;
            }

            let separator = match (left, right) {
                (Some(_), _) => index - 1,
                (None, Some(_)) => index,
                (None, None) => unreachable!("{} has a parent but no siblings", id),
            };
            match self.merge(parent, separator) {
                Some(next) => id = next,
                None => return,
            }
        }
    }

    /// Rotate the last key of `left` through the parent into `node`.
    fn borrow_from_left(&mut self, parent: NodeId, index: usize, left: NodeId, node: NodeId) {
        let sibling = &mut self.arena[left];
        let key = sibling.keys.remove(sibling.keys.len() - 1);
        let child = if sibling.is_leaf() {
            None
        } else {
            Some(sibling.children.remove(sibling.children.len() - 1))
        };

        let separator = std::mem::replace(&mut self.arena[parent].keys[index - 1], key);

        let n = &mut self.arena[node];
        n.keys.insert(0, separator);
        if let Some(child) = child {
            n.children.insert(0, child);
            self.arena[child].parent = Some(node);
        }

        debug_assert!(self.arena[left].is_well_formed());
        debug_assert!(self.arena[node].is_well_formed());
        self.stats.borrows_left += 1;
        trace!(node = %node, sibling = %left, "borrowed from left sibling");
    }

    /// Rotate the first key of `right` through the parent into `node`.
    fn borrow_from_right(&mut self, parent: NodeId, index: usize, node: NodeId, right: NodeId) {
        let sibling = &mut self.arena[right];
        let key = sibling.keys.remove(0);
        let child = if sibling.is_leaf() {
            None
        } else {
            Some(sibling.children.remove(0))
        };

        let separator = std::mem::replace(&mut self.arena[parent].keys[index], key);

        let n = &mut self.arena[node];
        n.keys.push(separator);
        if let Some(child) = child {
            n.children.push(child);
            self.arena[child].parent = Some(node);
        }

        debug_assert!(self.arena[right].is_well_formed());
        debug_assert!(self.arena[node].is_well_formed());
        self.stats.borrows_right += 1;
        trace!(node = %node, sibling = %right, "borrowed from right sibling");
    }

    /// Merge `children[separator + 1]` of `parent` into `children[separator]`,
    /// pulling the separating key down between them.
    ///
    /// Returns the parent if it must be rebalanced next. If the parent was
    /// the root and is left without keys, the merged node becomes the root
    /// and `None` is returned.
    fn merge(&mut self, parent: NodeId, separator: usize) -> Option<NodeId> {
        let p = &mut self.arena[parent];
        let key = p.keys.remove(separator);
        let right = p.children.remove(separator + 1);
        let left = p.children[separator];

        let absorbed = self.arena.release(right);
        for &child in &absorbed.children {
            self.arena[child].parent = Some(left);
        }

        let l = &mut self.arena[left];
        l.keys.push(key);
        l.keys.extend(absorbed.keys);
        l.children.extend(absorbed.children);
        debug_assert!(l.is_well_formed());

        self.stats.merges += 1;
        trace!(node = %left, absorbed = %right, parent = %parent, "merged siblings");

        let p = &self.arena[parent];
        if p.parent.is_none() && p.keys.is_empty() {
            debug_assert_eq!(p.children, vec![left]);
            self.arena.release(parent);
            self.arena[left].parent = None;
            self.root = left;
            self.stats.root_collapses += 1;
            debug!(root = %left, height = self.height(), "collapsed empty root");
            None
        } else {
            Some(parent)
        }
    }
}
