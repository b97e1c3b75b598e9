//! B-tree scenario tests.
//!
//! Each test drives the public API and checks the structural invariants
//! with `BTree::validate` after every mutation.

use std::collections::BTreeSet;

use interchange_index::{BTree, Error};

/// Helper asserting structure and contents against a reference set.
fn assert_matches(tree: &BTree<i64>, expected: &BTreeSet<i64>) {
    tree.validate().unwrap();
    let keys: Vec<i64> = tree.in_order().into_iter().copied().collect();
    let want: Vec<i64> = expected.iter().copied().collect();
    assert_eq!(keys, want);
    assert_eq!(tree.len(), expected.len());
}

// ============================================================================
// Order 5: mixed inserts and deletes
// ============================================================================

#[test]
fn test_order_5_insert_then_delete() {
    let mut tree = BTree::new(5);
    tree.insert(4);
    tree.insert_multiple([
        20, 44, 89, 96, 25, 30, 33, 60, 75, 81, 85, 110, 120, 101, 150, 158, 130, 135, 138,
    ]);
    assert_eq!(tree.len(), 20);
    tree.validate().unwrap();

    assert!(tree.delete(&44));
    assert!(tree.delete(&138));
    assert!(!tree.delete(&99));

    assert_eq!(tree.get(&44), None);
    assert_eq!(tree.get(&138), None);
    assert_eq!(tree.get(&135), Some(&135));
    assert_eq!(tree.len(), 18);
    tree.validate().unwrap();
}

// ============================================================================
// Order 3: minimal valid order
// ============================================================================

#[test]
fn test_order_3_sequential_inserts() {
    let mut tree = BTree::new(3);
    let mut expected = BTreeSet::new();

    for key in 1..=5 {
        tree.insert(key);
        expected.insert(key);
        assert_matches(&tree, &expected);
        assert_eq!(tree.max_keys(), 2);
    }
    assert_eq!(tree.first(), Some(&1));
    assert_eq!(tree.last(), Some(&5));
}

#[test]
fn test_order_3_insert_and_drain_alternating_ends() {
    let mut tree = BTree::new(3);
    let mut expected: BTreeSet<i64> = (0..64).collect();
    tree.insert_multiple(0..64);
    assert_matches(&tree, &expected);

    let mut low = 0;
    let mut high = 63;
    while low <= high {
        assert!(tree.delete(&low));
        expected.remove(&low);
        assert_matches(&tree, &expected);
        if low != high {
            assert!(tree.delete(&high));
            expected.remove(&high);
            assert_matches(&tree, &expected);
        }
        low += 1;
        high -= 1;
    }

    assert!(tree.is_empty());
    assert_eq!(tree.node_count(), 1);
}

// ============================================================================
// Order 4: delete in reverse
// ============================================================================

#[test]
fn test_order_4_delete_in_reverse() {
    let mut tree = BTree::new(4);
    tree.insert_multiple(1..=20);
    let mut expected: BTreeSet<i64> = (1..=20).collect();
    assert_matches(&tree, &expected);

    for key in (1..=20).rev() {
        assert!(tree.delete(&key));
        expected.remove(&key);
        assert_matches(&tree, &expected);
        assert_eq!(tree.get(&key), None);
    }

    assert!(tree.is_empty());
    assert_eq!(tree.height(), 1);
    assert!(tree.stats().merges > 0);
}

#[test]
fn test_order_4_delete_internal_keys_first() {
    let mut tree = BTree::new(4);
    tree.insert_multiple(1..=40);
    let mut expected: BTreeSet<i64> = (1..=40).collect();

    // Multiples of 5 are spread over internal and leaf nodes
    for key in (5..=40).step_by(5) {
        assert!(tree.delete(&key));
        expected.remove(&key);
        assert_matches(&tree, &expected);
    }
}

// ============================================================================
// Configuration errors
// ============================================================================

#[test]
#[should_panic(expected = "B-tree order must be at least 3")]
fn test_order_2_is_fatal() {
    let _tree: BTree<i64> = BTree::new(2);
}

#[test]
fn test_order_2_try_new_reports_error() {
    assert!(matches!(
        BTree::<i64>::try_new(2),
        Err(Error::InvalidOrder { order: 2 })
    ));
}

#[test]
fn test_very_large_order_is_usable() {
    let mut tree = BTree::try_new(1usize << 40).unwrap();
    let mut expected: BTreeSet<i64> = (0..1000).collect();
    tree.insert_multiple((0..1000).rev());

    // Every key fits in the root leaf
    assert_eq!(tree.node_count(), 1);
    assert_eq!(tree.get(&500), Some(&500));
    assert!(tree.delete(&500));
    assert_eq!(tree.get(&500), None);

    expected.remove(&500);
    assert_matches(&tree, &expected);
}

// ============================================================================
// Edge cases
// ============================================================================

#[test]
fn test_single_key_delete_leaves_empty_root() {
    let mut tree = BTree::new(5);
    tree.insert(7);

    assert!(tree.delete(&7));

    assert!(tree.is_empty());
    assert_eq!(tree.node_count(), 1);
    assert_eq!(tree.height(), 1);
    assert!(tree.in_order().is_empty());
    tree.validate().unwrap();
}

#[test]
fn test_duplicate_insert_leaves_tree_unchanged() {
    let mut tree = BTree::new(4);
    tree.insert_multiple([8, 3, 5, 1, 9, 2]);
    let before = format!("{:?}", tree);

    tree.insert_multiple([3, 9, 1]);

    assert_eq!(format!("{:?}", tree), before);
    assert_eq!(tree.len(), 6);
}

#[test]
fn test_string_keys() {
    let mut tree = BTree::new(3);
    for word in ["pear", "apple", "fig", "kiwi", "banana", "cherry"] {
        tree.insert(word.to_string());
    }

    assert_eq!(tree.get(&"fig".to_string()).map(String::as_str), Some("fig"));
    assert!(tree.delete(&"apple".to_string()));
    let words: Vec<&str> = tree.in_order().into_iter().map(String::as_str).collect();
    assert_eq!(words, ["banana", "cherry", "fig", "kiwi", "pear"]);
    tree.validate().unwrap();
}

#[test]
fn test_rebuild_after_drain() {
    let mut tree = BTree::new(6);
    tree.insert_multiple(0..200);
    for key in 0..200 {
        assert!(tree.delete(&key));
    }
    assert!(tree.is_empty());

    tree.insert_multiple((0..100).rev());
    let expected: BTreeSet<i64> = (0..100).collect();
    assert_matches(&tree, &expected);
}
