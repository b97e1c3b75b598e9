//! Thread-shareable B-tree handle.
//!
//! [`BTree`] mutates several nodes per operation and has no internal
//! locking. [`SharedBTree`] wraps it in a single `RwLock`, so each top-level
//! operation runs under one lock acquisition.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::common::{Result, TreeConfig};
use crate::index::btree::{BTree, TreeStats};

/// A cloneable, thread-safe handle to one B-tree.
///
/// # Thread Safety
/// - Lookups (`get`, `contains`, `len`, `validate`) take the read lock
/// - Mutations (`insert`, `delete`, `remove`, `clear`) take the write lock
///   for the whole operation, including every split or merge it causes
///
/// # Example
/// ```
/// use interchange_index::SharedBTree;
/// use std::thread;
///
/// let tree = SharedBTree::new(4);
/// let handles: Vec<_> = (0..4)
///     .map(|t| {
///         let tree = tree.clone();
///         thread::spawn(move || tree.insert_multiple(t * 100..t * 100 + 100))
///     })
///     .collect();
/// for h in handles {
///     h.join().unwrap();
/// }
/// assert_eq!(tree.len(), 400);
/// ```
pub struct SharedBTree<K> {
    inner: Arc<RwLock<BTree<K>>>,
}

impl<K: Ord> SharedBTree<K> {
    /// Create an empty shared tree of order `order`.
    ///
    /// # Panics
    /// Panics if `order < 3`.
    pub fn new(order: usize) -> Self {
        Self::from_tree(BTree::new(order))
    }

    /// Create an empty shared tree of order `order`.
    ///
    /// # Errors
    /// - `Error::InvalidOrder` if `order < 3`
    pub fn try_new(order: usize) -> Result<Self> {
        BTree::try_new(order).map(Self::from_tree)
    }

    /// Create an empty shared tree from validated parameters.
    pub fn with_config(config: TreeConfig) -> Self {
        Self::from_tree(BTree::with_config(config))
    }

    /// Take ownership of an existing tree.
    pub fn from_tree(tree: BTree<K>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(tree)),
        }
    }

    // ========================================================================
    // Read lock
    // ========================================================================

    /// Clone of the stored key equal to `key`, if any.
    pub fn get(&self, key: &K) -> Option<K>
    where
        K: Clone,
    {
        self.inner.read().get(key).cloned()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.inner.read().contains(key)
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    pub fn stats(&self) -> TreeStats {
        self.inner.read().stats()
    }

    /// Check the tree's structural invariants.
    pub fn validate(&self) -> Result<()> {
        self.inner.read().validate()
    }

    /// Run `f` with shared access to the tree.
    pub fn read<R>(&self, f: impl FnOnce(&BTree<K>) -> R) -> R {
        f(&self.inner.read())
    }

    // ========================================================================
    // Write lock
    // ========================================================================

    /// Insert `key`. Returns `false` if it was already present.
    pub fn insert(&self, key: K) -> bool {
        self.inner.write().insert(key)
    }

    /// Insert every key under a single write lock.
    pub fn insert_multiple<I>(&self, keys: I)
    where
        I: IntoIterator<Item = K>,
    {
        self.inner.write().insert_multiple(keys);
    }

    /// Delete `key`. Returns `true` if it was present.
    pub fn delete(&self, key: &K) -> bool {
        self.inner.write().delete(key)
    }

    /// Remove and return the stored key equal to `key`.
    pub fn remove(&self, key: &K) -> Option<K> {
        self.inner.write().remove(key)
    }

    pub fn clear(&self) {
        self.inner.write().clear();
    }

    /// Run `f` with exclusive access to the tree.
    pub fn write<R>(&self, f: impl FnOnce(&mut BTree<K>) -> R) -> R {
        f(&mut self.inner.write())
    }
}

impl<K> Clone for SharedBTree<K> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K: Ord> Default for SharedBTree<K> {
    fn default() -> Self {
        Self::from_tree(BTree::default())
    }
}
