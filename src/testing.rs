//! Assertion helpers for tests over materialized sequences.
//!
//! - [`assert_seq_equal`] — exact, order-dependent comparison
//! - [`assert_seq_unordered_equal`] — order-independent comparison
//! - [`assert_kv_equal`] — key/value pairs compared after sorting by key

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

/// Assert that two materialized sequences are equal in order and content.
///
/// # Panics
///
/// Panics with a detailed message if the sequences differ in length or at
/// any position.
pub fn assert_seq_equal<T: Debug + PartialEq>(actual: &[T], expected: &[T]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "sequence length mismatch:\n  expected: {expected:?}\n  actual:   {actual:?}"
    );
    for (pos, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        assert_eq!(
            a, e,
            "sequence mismatch at position {pos}:\n  expected: {expected:?}\n  actual:   {actual:?}"
        );
    }
}

/// Assert that two materialized sequences hold the same values, ignoring
/// order.
///
/// # Panics
///
/// Panics if either sequence holds a value the other lacks, or the lengths
/// differ.
pub fn assert_seq_unordered_equal<T: Debug + Eq + Hash>(actual: &[T], expected: &[T]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "sequence length mismatch:\n  expected: {expected:?}\n  actual:   {actual:?}"
    );
    let actual_set: HashSet<_> = actual.iter().collect();
    let expected_set: HashSet<_> = expected.iter().collect();
    if actual_set != expected_set {
        let missing: Vec<_> = expected_set.difference(&actual_set).collect();
        let extra: Vec<_> = actual_set.difference(&expected_set).collect();
        panic!(
            "sequence content mismatch:\n  missing: {missing:?}\n  extra:   {extra:?}\n  expected: {expected:?}\n  actual:   {actual:?}"
        );
    }
}

/// Assert that two key/value pair sequences are equal once both are sorted
/// by key. Useful where key order is produced by hashing.
///
/// # Panics
///
/// Panics if the sorted sequences differ.
pub fn assert_kv_equal<K, V>(mut actual: Vec<(K, V)>, mut expected: Vec<(K, V)>)
where
    K: Debug + Ord,
    V: Debug + PartialEq,
{
    actual.sort_by(|a, b| a.0.cmp(&b.0));
    expected.sort_by(|a, b| a.0.cmp(&b.0));
    assert_eq!(
        actual.len(),
        expected.len(),
        "pair count mismatch:\n  expected: {expected:?}\n  actual:   {actual:?}"
    );
    for ((ak, av), (ek, ev)) in actual.iter().zip(expected.iter()) {
        assert!(
            ak == ek && av == ev,
            "pair mismatch:\n  expected: ({ek:?}, {ev:?})\n  actual:   ({ak:?}, {av:?})"
        );
    }
}
