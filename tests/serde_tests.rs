#![cfg(all(feature = "serde", feature = "storage"))]

//! Integration tests for serde support.
//!
//! Both of the crate's own stores serialize as a plain JSON array and
//! deserialize through sequence construction.

use rstest::rstest;
use setwise::prelude::*;

// =============================================================================
// InlineSet
// =============================================================================

#[rstest]
fn test_inline_set_json_roundtrip() {
    let set: InlineSet<i32> = set_of![3, 1, 2];

    let json = serde_json::to_string(&set).unwrap();
    let restored: InlineSet<i32> = serde_json::from_str(&json).unwrap();

    assert_eq!(json, "[3,1,2]");
    assert_eq!(set, restored);
}

#[rstest]
fn test_inline_set_deserialize_collapses_duplicates() {
    let restored: InlineSet<String> = serde_json::from_str(r#"["a","b","a"]"#).unwrap();

    assert_eq!(restored.len(), 2);
    assert_eq!(restored.as_slice(), &["a".to_string(), "b".to_string()]);
}

#[rstest]
fn test_inline_set_deserialize_rejects_non_sequence() {
    let result: Result<InlineSet<i32>, _> = serde_json::from_str(r#"{"a": 1}"#);

    assert!(result.is_err());
}

// =============================================================================
// SortedBag
// =============================================================================

#[rstest]
fn test_sorted_bag_json_roundtrip() {
    let bag: SortedBag<i32> = set_of![2, 1, 2];

    let json = serde_json::to_string(&bag).unwrap();
    let restored: SortedBag<i32> = serde_json::from_str(&json).unwrap();

    assert_eq!(json, "[1,2,2]");
    assert_eq!(bag, restored);
}

#[rstest]
fn test_sorted_bag_deserialize_sorts_input() {
    let restored: SortedBag<i32> = serde_json::from_str("[5,1,5,3]").unwrap();

    assert_eq!(restored.as_slice(), &[1, 3, 5, 5]);
    assert_eq!(restored.count(&5), 2);
}

#[rstest]
fn test_restored_set_answers_relations() {
    let restored: InlineSet<i32> = serde_json::from_str("[1,3,5]").unwrap();

    assert!(restored.is_strict_subset_iter([1, 3, 5, 7, 3]));
    assert!(!restored.is_strict_subset_iter([1, 3, 5, 3]));
}
