//! Structural invariant checks.
//!
//! [`BTree::validate`] walks the whole tree and reports the first broken
//! invariant. A correct tree never fails it; the checks exist for tests and
//! for callers that want to assert the index is sound.

use std::collections::HashSet;

use crate::common::{Error, NodeId, Result};
use crate::index::btree::tree::BTree;

/// Walk state shared across the recursive check.
struct Walk {
    visited: HashSet<NodeId>,
    leaf_depth: Option<usize>,
    keys: usize,
}

impl<K: Ord> BTree<K> {
    /// Check every structural invariant of the tree.
    ///
    /// - keys in each node strictly ascending
    /// - non-root nodes hold `[min_keys, max_keys]` keys, the root at most
    ///   `max_keys` (and at least one if it has children)
    /// - internal nodes have exactly one more child than keys
    /// - every leaf at the same depth
    /// - parent links agree with child lists, each child listed once
    /// - every key lies between the separators bounding its subtree
    /// - every live node is reachable from the root
    /// - the recorded length matches the stored keys
    ///
    /// # Errors
    /// The first violation found, as one of the structural `Error` variants.
    pub fn validate(&self) -> Result<()> {
        if self.arena[self.root].parent.is_some() {
            return Err(Error::ParentMismatch { node: self.root });
        }

        let mut walk = Walk {
            visited: HashSet::new(),
            leaf_depth: None,
            keys: 0,
        };
        self.check_node(self.root, 0, None, None, &mut walk)?;

        if walk.keys != self.len {
            return Err(Error::LengthMismatch {
                recorded: self.len,
                counted: walk.keys,
            });
        }
        if let Some(node) = self.arena.live_ids().find(|id| !walk.visited.contains(id)) {
            return Err(Error::UnreachableNode { node });
        }
        Ok(())
    }

    fn check_node(
        &self,
        id: NodeId,
        depth: usize,
        lower: Option<&K>,
        upper: Option<&K>,
        walk: &mut Walk,
    ) -> Result<()> {
        if !walk.visited.insert(id) {
            return Err(Error::ParentMismatch { node: id });
        }
        let node = &self.arena[id];
        let len = node.keys.len();

        if node.keys.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(Error::UnsortedKeys { node: id });
        }

        let min = match (node.parent, node.is_leaf()) {
            (Some(_), _) => self.config.min_keys(),
            (None, true) => 0,
            (None, false) => 1,
        };
        let max = self.config.max_keys();
        if len < min || len > max {
            return Err(Error::KeyCountOutOfRange { node: id, len, min, max });
        }

        let below_upper = |k: &K| upper.map_or(true, |u| k < u);
        let above_lower = |k: &K| lower.map_or(true, |l| k > l);
        if !node.keys.iter().all(|k| above_lower(k) && below_upper(k)) {
            return Err(Error::KeyOutOfBounds { node: id });
        }
        walk.keys += len;

        if node.is_leaf() {
            let expected = *walk.leaf_depth.get_or_insert(depth);
            if expected != depth {
                return Err(Error::UnevenLeafDepth {
                    node: id,
                    expected,
                    found: depth,
                });
            }
            return Ok(());
        }

        if node.children.len() != len + 1 {
            return Err(Error::ChildCountMismatch {
                node: id,
                keys: len,
                children: node.children.len(),
            });
        }

        for (i, &child) in node.children.iter().enumerate() {
            if self.arena[child].parent != Some(id) {
                return Err(Error::ParentMismatch { node: child });
            }
            let child_lower = if i == 0 { lower } else { node.keys.get(i - 1) };
            let child_upper = if i == len { upper } else { node.keys.get(i) };
            self.check_node(child, depth + 1, child_lower, child_upper, walk)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::btree::node::Node;

    fn sample() -> BTree<u32> {
        let mut tree = BTree::new(3);
        tree.insert_multiple(1..=7);
        tree
    }

    #[test]
    fn test_valid_tree_passes() {
        sample().validate().unwrap();
        BTree::<u32>::new(5).validate().unwrap();
    }

    #[test]
    fn test_detects_unsorted_keys() {
        let mut tree = BTree::new(5);
        tree.insert_multiple([1, 2, 3]);
        tree.arena[tree.root].keys.swap(0, 2);
        assert_eq!(
            tree.validate(),
            Err(Error::UnsortedKeys { node: tree.root })
        );
    }

    #[test]
    fn test_detects_underfull_node() {
        let mut tree = sample();
        let leaf = tree.arena[tree.arena[tree.root].children[0]].children[0];
        tree.arena[leaf].keys.clear();
        tree.len -= 1;
        assert!(matches!(
            tree.validate(),
            Err(Error::KeyCountOutOfRange { node, len: 0, .. }) if node == leaf
        ));
    }

    #[test]
    fn test_detects_key_out_of_bounds() {
        let mut tree = sample();
        let leaf = tree.arena[tree.arena[tree.root].children[0]].children[0];
        tree.arena[leaf].keys[0] = 100;
        assert_eq!(tree.validate(), Err(Error::KeyOutOfBounds { node: leaf }));
    }

    #[test]
    fn test_detects_broken_parent_link() {
        let mut tree = sample();
        let child = tree.arena[tree.root].children[1];
        tree.arena[child].parent = None;
        assert_eq!(tree.validate(), Err(Error::ParentMismatch { node: child }));
    }

    #[test]
    fn test_detects_child_count_mismatch() {
        let mut tree = sample();
        let root = tree.root;
        tree.arena[root].children.pop();
        assert!(matches!(
            tree.validate(),
            Err(Error::ChildCountMismatch { keys: 1, children: 1, .. })
        ));
    }

    #[test]
    fn test_detects_uneven_leaf_depth() {
        let mut tree = sample();
        // Right subtree [6] -> [5] [7] becomes a leaf one level too high
        let right = tree.arena[tree.root].children[1];
        tree.arena[right].children.clear();

        assert_eq!(
            tree.validate(),
            Err(Error::UnevenLeafDepth {
                node: right,
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn test_detects_unreachable_node() {
        let mut tree = sample();
        let stray = tree.arena.allocate(Node::leaf(None));

        assert_eq!(tree.validate(), Err(Error::UnreachableNode { node: stray }));
    }

    #[test]
    fn test_detects_length_mismatch() {
        let mut tree = sample();
        tree.len = 3;
        assert_eq!(
            tree.validate(),
            Err(Error::LengthMismatch {
                recorded: 3,
                counted: 7
            })
        );
    }
}
