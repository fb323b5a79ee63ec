//! Sorting: OrderBy, OrderByDescending and Revert.
//!
//! Ordering is driven by a numeric sort key extracted from each element and
//! compared in its own type, so large `u64` or `i128` keys never collapse
//! into ties. [`Dir::Desc`] flips every key comparison, which orders elements
//! exactly as an ascending sort over negated keys would: it is not a reversed
//! ascending result, and elements with equal keys keep their input order in
//! both directions.

use std::cmp::Ordering;

use crate::numeric::Numeric;

/// Direction in which sort keys are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dir {
    /// Ascending order (smallest key first).
    #[default]
    Asc,
    /// Descending order (largest key first).
    Desc,
}

impl Dir {
    /// Orients the comparison of two keys.
    ///
    /// `Desc` turns "greater key" into "sorts earlier", the same effect as
    /// comparing negated keys. `Equal` stays `Equal` either way.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }

    /// Short name used in trace output.
    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Asc => "asc",
            Dir::Desc => "desc",
        }
    }
}

impl std::fmt::Display for Dir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sorts by `key` in the given direction.
///
/// Stable insertion sort over keys extracted once per element. An element
/// only moves past a neighbour whose key sorts strictly after its own, so
/// ties never swap. Keys that do not compare (NaN) never move. O(n²): fine
/// for the small in-memory sequences this crate targets, not for large
/// inputs.
pub fn order_by_dir<T, K, F>(seq: &[T], key: F, dir: Dir) -> Vec<T>
where
    T: Clone,
    K: Numeric,
    F: Fn(&T) -> K,
{
    #[cfg(feature = "tracing")]
    tracing::trace!(len = seq.len(), dir = %dir, "insertion sort");

    let mut keyed: Vec<(K, &T)> = seq.iter().map(|item| (key(item), item)).collect();

    for i in 1..keyed.len() {
        let current = keyed[i];
        let mut j = i;
        while j > 0 && sorts_after(keyed[j - 1].0, current.0, dir) {
            keyed[j] = keyed[j - 1];
            j -= 1;
        }
        keyed[j] = current;
    }

    keyed.into_iter().map(|(_, item)| item.clone()).collect()
}

fn sorts_after<K: Numeric>(left: K, right: K, dir: Dir) -> bool {
    left.partial_cmp(&right).map(|ordering| dir.apply(ordering)) == Some(Ordering::Greater)
}

/// Sorts ascending by `key`, keeping equal keys in input order.
pub fn order_by<T, K, F>(seq: &[T], key: F) -> Vec<T>
where
    T: Clone,
    K: Numeric,
    F: Fn(&T) -> K,
{
    order_by_dir(seq, key, Dir::Asc)
}

/// Sorts descending, as if by negated `key`.
///
/// Equal keys keep input order, exactly as in [`order_by`].
pub fn order_by_descending<T, K, F>(seq: &[T], key: F) -> Vec<T>
where
    T: Clone,
    K: Numeric,
    F: Fn(&T) -> K,
{
    order_by_dir(seq, key, Dir::Desc)
}

/// The sequence in reversed positional order.
pub fn revert<T: Clone>(seq: &[T]) -> Vec<T> {
    seq.iter().rev().cloned().collect()
}
