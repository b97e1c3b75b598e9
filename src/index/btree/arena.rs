//! Node arena - owns every node of one tree.
//!
//! Nodes are addressed by [`NodeId`]. Parents list their children's ids,
//! so ownership runs strictly top-down from the tree; the `parent` field
//! of a node is only a lookup aid.

use std::ops::{Index, IndexMut};

use crate::common::NodeId;
use crate::index::btree::node::Node;

/// Slot storage for the nodes of a single B-tree.
///
/// # Architecture
/// ```text
/// ┌──────────────────────────────────────────────┐
/// │                  NodeArena                   │
/// │  slots: Vec<Option<Node>>                    │
/// │   [Node0] [None] [Node2] [Node3] ...         │
/// │  free_list: Vec<NodeId>  (LIFO, reused)      │
/// └──────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone)]
pub(crate) struct NodeArena<K> {
    /// Node storage. `None` marks a released slot.
    slots: Vec<Option<Node<K>>>,

    /// Released slots, reused before the vector grows.
    free_list: Vec<NodeId>,
}

impl<K> NodeArena<K> {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_list: Vec::new(),
        }
    }

    /// Store a node and return its id.
    pub(crate) fn allocate(&mut self, node: Node<K>) -> NodeId {
        match self.free_list.pop() {
            Some(id) => {
                debug_assert!(self.slots[id.index()].is_none(), "{} is still live", id);
                self.slots[id.index()] = Some(node);
                id
            }
            None => {
                self.slots.push(Some(node));
                NodeId::new(self.slots.len() - 1)
            }
        }
    }

    /// Take a node out of the arena, freeing its slot.
    ///
    /// # Panics
    /// Panics if `id` was already released.
    pub(crate) fn release(&mut self, id: NodeId) -> Node<K> {
        match self.slots.get_mut(id.index()).and_then(Option::take) {
            Some(node) => {
                self.free_list.push(id);
                node
            }
            None => panic!("release of dangling {}", id),
        }
    }

    /// Number of live nodes.
    pub(crate) fn live_count(&self) -> usize {
        self.slots.len() - self.free_list.len()
    }

    /// Ids of every live node, in slot order.
    pub(crate) fn live_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_some())
            .map(|(i, _)| NodeId::new(i))
    }

    /// Drop every node.
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free_list.clear();
    }
}

impl<K> Index<NodeId> for NodeArena<K> {
    type Output = Node<K>;

    #[inline]
    fn index(&self, id: NodeId) -> &Node<K> {
        match self.slots.get(id.index()) {
            Some(Some(node)) => node,
            _ => panic!("access to dangling {}", id),
        }
    }
}

impl<K> IndexMut<NodeId> for NodeArena<K> {
    #[inline]
    fn index_mut(&mut self, id: NodeId) -> &mut Node<K> {
        match self.slots.get_mut(id.index()) {
            Some(Some(node)) => node,
            _ => panic!("access to dangling {}", id),
        }
    }
}
