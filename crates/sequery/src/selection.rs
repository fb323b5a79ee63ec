//! Element selection: the First, Last, Single and ElementAt families.
//!
//! Each throwing operator returns a [`Result`]. Its `..._or_default`
//! counterpart is that same operator passed through [`or_default`], so the
//! two families cannot drift apart: whatever makes the throwing form fail
//! makes the defaulting form return `T::default()`.

use crate::error::{Result, SequenceError};

/// Maps any failure to the type's default value.
///
/// This is the single fallback used by every `..._or_default` operator. It
/// does not inspect the error kind.
pub fn or_default<T: Default>(result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(_err) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(error = %_err, "substituting default value");
            T::default()
        }
    }
}

/// Returns the element at position 0.
///
/// Fails with [`SequenceError::EmptySequence`] on an empty sequence.
pub fn first<T: Clone>(seq: &[T]) -> Result<T> {
    seq.first().cloned().ok_or(SequenceError::EmptySequence)
}

/// Returns the first element, or `T::default()` on failure.
pub fn first_or_default<T: Clone + Default>(seq: &[T]) -> T {
    or_default(first(seq))
}

/// Returns the first element satisfying `predicate`, scanning in order.
///
/// Fails with [`SequenceError::NoMatch`] when nothing matches.
pub fn first_where<T, P>(seq: &[T], predicate: P) -> Result<T>
where
    T: Clone,
    P: Fn(&T) -> bool,
{
    seq.iter()
        .find(|item| predicate(item))
        .cloned()
        .ok_or(SequenceError::NoMatch)
}

/// Returns the first matching element, or `T::default()` on failure.
pub fn first_or_default_where<T, P>(seq: &[T], predicate: P) -> T
where
    T: Clone + Default,
    P: Fn(&T) -> bool,
{
    or_default(first_where(seq, predicate))
}

/// Returns the element at the final position.
///
/// Fails with [`SequenceError::EmptySequence`] on an empty sequence.
pub fn last<T: Clone>(seq: &[T]) -> Result<T> {
    seq.last().cloned().ok_or(SequenceError::EmptySequence)
}

/// Returns the last element, or `T::default()` on failure.
pub fn last_or_default<T: Clone + Default>(seq: &[T]) -> T {
    or_default(last(seq))
}

/// Filters by `predicate`, then returns the final surviving element.
///
/// The predicate sees every element. When nothing survives this fails the
/// same way [`last`] does on an empty sequence, with
/// [`SequenceError::EmptySequence`] rather than [`SequenceError::NoMatch`].
pub fn last_where<T, P>(seq: &[T], predicate: P) -> Result<T>
where
    T: Clone,
    P: Fn(&T) -> bool,
{
    seq.iter()
        .filter(|item| predicate(item))
        .last()
        .cloned()
        .ok_or(SequenceError::EmptySequence)
}

/// Returns the last matching element, or `T::default()` on failure.
pub fn last_or_default_where<T, P>(seq: &[T], predicate: P) -> T
where
    T: Clone + Default,
    P: Fn(&T) -> bool,
{
    or_default(last_where(seq, predicate))
}

/// Returns the only element.
///
/// Fails with [`SequenceError::NotExactlyOne`] when the sequence holds zero
/// or more than one element.
pub fn single<T: Clone>(seq: &[T]) -> Result<T> {
    match seq {
        [only] => Ok(only.clone()),
        _ => Err(SequenceError::NotExactlyOne { found: seq.len() }),
    }
}

/// Returns the only element, or `T::default()` on failure.
pub fn single_or_default<T: Clone + Default>(seq: &[T]) -> T {
    or_default(single(seq))
}

/// Returns the only element satisfying `predicate`.
///
/// Fails with [`SequenceError::NotExactlyOne`] when zero or several match.
pub fn single_where<T, P>(seq: &[T], predicate: P) -> Result<T>
where
    T: Clone,
    P: Fn(&T) -> bool,
{
    let matching: Vec<&T> = seq.iter().filter(|item| predicate(item)).collect();
    match matching.as_slice() {
        [only] => Ok((*only).clone()),
        _ => Err(SequenceError::NotExactlyOne {
            found: matching.len(),
        }),
    }
}

/// Returns the only matching element, or `T::default()` on failure.
pub fn single_or_default_where<T, P>(seq: &[T], predicate: P) -> T
where
    T: Clone + Default,
    P: Fn(&T) -> bool,
{
    or_default(single_where(seq, predicate))
}

/// Returns the element at zero-based `index`.
///
/// Fails with [`SequenceError::IndexOutOfRange`] when `index >= len`.
pub fn element_at<T: Clone>(seq: &[T], index: usize) -> Result<T> {
    seq.get(index)
        .cloned()
        .ok_or(SequenceError::IndexOutOfRange {
            index,
            len: seq.len(),
        })
}

/// Returns the element at `index`, or `T::default()` on failure.
pub fn element_at_or_default<T: Clone + Default>(seq: &[T], index: usize) -> T {
    or_default(element_at(seq, index))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMPTY: [i32; 0] = [];

    #[test]
    fn first_and_last() {
        let items = [4, 7, 9];
        assert_eq!(first(&items), Ok(4));
        assert_eq!(last(&items), Ok(9));
        assert_eq!(first(&EMPTY), Err(SequenceError::EmptySequence));
        assert_eq!(last(&EMPTY), Err(SequenceError::EmptySequence));
    }

    #[test]
    fn first_where_scans_in_order() {
        let items = [1, 8, 3, 10];
        assert_eq!(first_where(&items, |x| *x > 5), Ok(8));
        assert_eq!(first_where(&items, |x| *x > 50), Err(SequenceError::NoMatch));
    }

    #[test]
    fn last_where_takes_final_survivor() {
        let items = [1, 8, 3, 10, 2];
        assert_eq!(last_where(&items, |x| *x > 5), Ok(10));
        assert_eq!(last_where(&items, |x| *x < 3), Ok(2));
    }

    #[test]
    fn last_where_without_match_is_empty_sequence() {
        let items = [1, 2, 3];
        assert_eq!(
            last_where(&items, |x| *x > 5),
            Err(SequenceError::EmptySequence)
        );
    }

    #[test]
    fn single_requires_exactly_one() {
        assert_eq!(single(&[5]), Ok(5));
        assert_eq!(
            single(&EMPTY),
            Err(SequenceError::NotExactlyOne { found: 0 })
        );
        assert_eq!(
            single(&[1, 2]),
            Err(SequenceError::NotExactlyOne { found: 2 })
        );
    }

    #[test]
    fn single_where_counts_matches() {
        let items = [1, 2, 3, 4];
        assert_eq!(single_where(&items, |x| *x == 3), Ok(3));
        assert_eq!(
            single_where(&items, |x| *x % 2 == 0),
            Err(SequenceError::NotExactlyOne { found: 2 })
        );
        assert_eq!(
            single_where(&items, |x| *x > 10),
            Err(SequenceError::NotExactlyOne { found: 0 })
        );
    }

    #[test]
    fn element_at_bounds() {
        let items = ['a', 'b', 'c'];
        assert_eq!(element_at(&items, 0), Ok('a'));
        assert_eq!(element_at(&items, 2), Ok('c'));
        assert_eq!(
            element_at(&items, 3),
            Err(SequenceError::IndexOutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn or_default_variants_never_fail() {
        assert_eq!(first_or_default(&EMPTY), 0);
        assert_eq!(last_or_default(&EMPTY), 0);
        assert_eq!(single_or_default(&[1, 2]), 0);
        assert_eq!(element_at_or_default(&[1, 2], 9), 0);
        assert_eq!(first_or_default_where(&[1, 2], |x| *x > 2), 0);
        assert_eq!(last_or_default_where(&[1, 2], |x| *x > 2), 0);
        assert_eq!(single_or_default_where(&[2, 2], |x| *x == 2), 0);
    }

    #[test]
    fn or_default_variants_pass_through_success() {
        assert_eq!(first_or_default(&[3, 4]), 3);
        assert_eq!(last_or_default(&[3, 4]), 4);
        assert_eq!(single_or_default_where(&[3, 4], |x| *x == 4), 4);
    }

    #[test]
    fn or_default_for_strings_is_empty() {
        let names: Vec<String> = Vec::new();
        assert_eq!(first_or_default(&names), String::new());
        assert_eq!(or_default::<Option<u8>>(Err(SequenceError::NoMatch)), None);
    }
}
