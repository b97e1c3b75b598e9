//! Configuration for B-tree indexes.

use crate::common::{Error, Result};

/// Smallest order a B-tree may be built with.
///
/// With fewer than three children per node a split could not leave a key
/// on both sides of the promoted key.
pub const MIN_ORDER: usize = 3;

/// Order used by [`TreeConfig::default`].
pub const DEFAULT_ORDER: usize = 5;

/// Order parameters of a B-tree, fixed for the tree's lifetime.
///
/// # Derived bounds
/// For order `m`:
/// - `max_keys = m - 1`
/// - `min_keys = ceil(m / 2) - 1` (every node except the root)
///
/// # Example
/// ```
/// use interchange_index::TreeConfig;
///
/// let config = TreeConfig::new(5).unwrap();
/// assert_eq!(config.min_keys(), 2);
/// assert_eq!(config.max_keys(), 4);
/// assert!(TreeConfig::new(2).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeConfig {
    order: usize,
    min_keys: usize,
    max_keys: usize,
}

impl TreeConfig {
    /// Build the parameters for a tree of the given order.
    ///
    /// # Errors
    /// - `Error::InvalidOrder` if `order < MIN_ORDER`
    pub fn new(order: usize) -> Result<Self> {
        if order < MIN_ORDER {
            return Err(Error::InvalidOrder { order });
        }
        Ok(Self {
            order,
            min_keys: order.div_ceil(2) - 1,
            max_keys: order - 1,
        })
    }

    /// Maximum number of children of an internal node.
    #[inline]
    pub fn order(&self) -> usize {
        self.order
    }

    /// Minimum keys held by a non-root node.
    #[inline]
    pub fn min_keys(&self) -> usize {
        self.min_keys
    }

    /// Maximum keys held by any node.
    #[inline]
    pub fn max_keys(&self) -> usize {
        self.max_keys
    }

    /// Index of the key promoted when an overflowing node splits.
    #[inline]
    pub fn split_index(&self) -> usize {
        self.order / 2
    }
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            order: DEFAULT_ORDER,
            min_keys: DEFAULT_ORDER.div_ceil(2) - 1,
            max_keys: DEFAULT_ORDER - 1,
        }
    }
}
