//! Domain-specific assertion helpers for griot harnesses.
//!
//! These wrap `pretty_assertions` so that a failing comparison of result ids
//! shows a readable diff instead of two long record dumps.

use griot_core::search::Hit;
use griot_core::Record;

/// Ids of `records`, in order.
pub fn ids_of<T: Record>(records: &[T]) -> Vec<String> {
    records.iter().map(|r| r.id().to_string()).collect()
}

/// Ids of ranked search hits, in rank order.
pub fn hit_ids<T: Record>(hits: &[Hit<T>]) -> Vec<String> {
    hits.iter().map(|h| h.record.id().to_string()).collect()
}

/// Assert that a record slice holds exactly the given ids, in order.
///
/// ```rust
/// assert_ids!(groups, ["bamileke", "bamoun"]);
/// ```
#[macro_export]
macro_rules! assert_ids {
    ($records:expr, [$($id:expr),* $(,)?]) => {{
        let expected: Vec<String> = vec![$($id.to_string()),*];
        pretty_assertions::assert_eq!($crate::common::ids_of(&$records), expected);
    }};
}

/// Assert that ranked hits hold exactly the given ids, in rank order.
#[macro_export]
macro_rules! assert_hit_ids {
    ($hits:expr, [$($id:expr),* $(,)?]) => {{
        let expected: Vec<String> = vec![$($id.to_string()),*];
        pretty_assertions::assert_eq!($crate::common::hit_ids(&$hits), expected);
    }};
}
