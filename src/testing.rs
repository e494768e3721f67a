//! Assertion helpers for sequence tests.
//!
//! Used by the integration tests under `tests/`; exposed publicly so
//! downstream crates can reuse them when testing their own chains.

use std::fmt::Debug;

/// Panics unless `actual` and `expected` hold the same elements in the same
/// order.
pub fn assert_seq_equal<T>(actual: &[T], expected: &[T])
where
    T: PartialEq + Debug,
{
    assert_eq!(
        actual, expected,
        "sequences differ (order-sensitive comparison)"
    );
}

/// Order-insensitive comparison, for operators with no ordering guarantee
/// (e.g. `shuffled`).
pub fn assert_seq_unordered_equal<T>(actual: Vec<T>, expected: Vec<T>)
where
    T: Ord + Debug,
{
    let mut actual = actual;
    let mut expected = expected;
    actual.sort();
    expected.sort();
    assert_eq!(
        actual, expected,
        "sequences differ (order-insensitive comparison)"
    );
}
