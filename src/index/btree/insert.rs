//! Insertion and overflow splitting.

use tracing::{debug, trace};

use crate::common::NodeId;
use crate::index::btree::node::Node;
use crate::index::btree::tree::BTree;

impl<K: Ord> BTree<K> {
    /// Insert `key`.
    ///
    /// Returns `true` if the key was added. If an equal key is already
    /// stored this is a no-op returning `false`; the tree is unchanged.
    pub fn insert(&mut self, key: K) -> bool {
        let mut id = self.root;
        let leaf_index = loop {
            let node = &self.arena[id];
            match node.find(&key) {
                Ok(_) => return false,
                Err(i) if node.is_leaf() => break i,
                Err(i) => id = node.children[i],
            }
        };

        self.arena[id].keys.insert(leaf_index, key);
        self.len += 1;
        self.split(id);
        true
    }

    /// Insert every key from `keys` in order. Duplicates are skipped.
    pub fn insert_multiple<I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = K>,
    {
        for key in keys {
            self.insert(key);
        }
    }

    /// Split `id` while it overflows, promoting the middle key upward.
    ///
    /// Walks parent links until a node fits, or until the root itself is
    /// split and a new root holding one key is created above it.
    fn split(&mut self, mut id: NodeId) {
        let mid = self.config.split_index();

        while self.arena[id].keys.len() > self.config.max_keys() {
            let node = &mut self.arena[id];

            // keys:     [0, mid) stay | mid promoted | (mid, end] move right
            // children: [0, mid] stay | (mid, end] move right
            let mut right_keys = node.keys.split_off(mid);
            let promoted = right_keys.remove(0);
            let right_children = if node.is_leaf() {
                Vec::new()
            } else {
                node.children.split_off(mid + 1)
            };
            let parent = node.parent;

            let right = self.arena.allocate(Node {
                keys: right_keys,
                children: right_children,
                parent,
            });
            for i in 0..self.arena[right].children.len() {
                let child = self.arena[right].children[i];
                self.arena[child].parent = Some(right);
            }
            self.stats.splits += 1;

            debug_assert!(self.arena[id].is_well_formed());
            debug_assert!(self.arena[right].is_well_formed());

            match self.index_in_parent(id) {
                Some((parent, i)) => {
                    trace!(node = %id, right = %right, parent = %parent, "split node");
                    let p = &mut self.arena[parent];
                    p.keys.insert(i, promoted);
                    p.children.insert(i + 1, right);
                    debug_assert!(p.is_well_formed());
                    id = parent;
                }
                None => {
                    let root = self
                        .arena
                        .allocate(Node::internal(vec![promoted], vec![id, right], None));

                    self.arena[id].parent = Some(root);
                    self.arena[right].parent = Some(root);
                    self.root = root;
                    self.stats.root_promotions += 1;

                    debug!(root = %root, height = self.height(), "promoted new root");
                    return;
                }
            }
        }
    }
}
