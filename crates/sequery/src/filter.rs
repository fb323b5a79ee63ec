//! Filtering: Where, Distinct, Take, TakeWhile, Skip and SkipWhile.
//!
//! All operators materialize a new `Vec` and keep the relative input order of
//! surviving elements, except [`distinct`] whose output order is unspecified.

use std::collections::HashSet;
use std::hash::Hash;

/// Keeps every element satisfying `predicate`, in original order.
#[doc(alias = "where")]
pub fn filter<T, P>(seq: &[T], predicate: P) -> Vec<T>
where
    T: Clone,
    P: Fn(&T) -> bool,
{
    seq.iter().filter(|item| predicate(item)).cloned().collect()
}

/// Removes duplicate elements by value equality.
///
/// The result is collected through a hash set, so its order is NOT the input
/// order and may differ between runs. Callers needing a stable order should
/// sort afterwards.
pub fn distinct<T>(seq: &[T]) -> Vec<T>
where
    T: Clone + Eq + Hash,
{
    let unique: HashSet<T> = seq.iter().cloned().collect();

    #[cfg(feature = "tracing")]
    tracing::trace!(input = seq.len(), output = unique.len(), "distinct");

    unique.into_iter().collect()
}

/// The first `min(n, len)` elements.
pub fn take<T: Clone>(seq: &[T], n: usize) -> Vec<T> {
    seq[..n.min(seq.len())].to_vec()
}

/// The longest prefix whose elements all satisfy `predicate`.
///
/// Scanning stops at the first failing element; nothing after it is
/// evaluated.
pub fn take_while<T, P>(seq: &[T], predicate: P) -> Vec<T>
where
    T: Clone,
    P: Fn(&T) -> bool,
{
    let mut taken = Vec::new();
    for item in seq {
        if !predicate(item) {
            break;
        }
        taken.push(item.clone());
    }
    taken
}

/// Every element from position `n` onward.
pub fn skip<T: Clone>(seq: &[T], n: usize) -> Vec<T> {
    seq[n.min(seq.len())..].to_vec()
}

/// Drops each element satisfying `predicate`, testing every element on its
/// own.
///
/// Unlike [`take_while`] this does not stop at the first failure: an element
/// later in the sequence for which `predicate` holds again is dropped too.
/// `skip_while(&[1, 5, 2, 6], |x| *x < 3)` yields `[5, 6]`.
pub fn skip_while<T, P>(seq: &[T], predicate: P) -> Vec<T>
where
    T: Clone,
    P: Fn(&T) -> bool,
{
    let mut kept = Vec::new();
    for item in seq {
        if predicate(item) {
            continue;
        }
        kept.push(item.clone());
    }
    kept
}
