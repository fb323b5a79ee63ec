//! Fluent, chainable sequence wrapper.
//!
//! [`Seq`] owns a materialized sequence and exposes every operator as a
//! method. Methods borrow `self` and return fresh values, so a `Seq` can be
//! queried repeatedly and shared between independent calls.

use std::hash::Hash;

use crate::error::Result;
use crate::numeric::Numeric;
use crate::ordering::Dir;
use crate::{aggregate, filter, ordering, projection, selection};

/// An ordered, finite sequence of elements.
///
/// # Example
///
/// ```
/// use sequery::Seq;
///
/// let seq = Seq::from(vec![5, 3, 8, 1, 9, 3]);
///
/// let top = seq
///     .filter(|x| *x > 2)
///     .order_by(|x| *x)
///     .take(3);
///
/// assert_eq!(top, vec![3, 3, 5]);
/// assert_eq!(top.sum(), 11);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Seq<T> {
    items: Vec<T>,
}

impl<T> Seq<T> {
    /// Wraps an existing vector.
    pub fn new(items: Vec<T>) -> Self {
        Seq { items }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the sequence has no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over the elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Borrows the elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Unwraps into the underlying vector.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    // ========================================================================
    // Aggregation
    // ========================================================================

    /// Total number of elements.
    pub fn count(&self) -> usize {
        aggregate::count(&self.items)
    }

    /// Number of elements satisfying `predicate`.
    pub fn count_where<P>(&self, predicate: P) -> usize
    where
        P: Fn(&T) -> bool,
    {
        aggregate::count_where(&self.items, predicate)
    }

    /// Projects each element to a number and averages the results.
    pub fn average_by<N, F>(&self, transform: F) -> Result<f64>
    where
        N: Numeric,
        F: Fn(&T) -> N,
    {
        aggregate::average_by(&self.items, transform)
    }

    // ========================================================================
    // Projection
    // ========================================================================

    /// Maps every element through `transform`.
    #[doc(alias = "map")]
    pub fn select<R, F>(&self, transform: F) -> Seq<R>
    where
        F: Fn(&T) -> R,
    {
        Seq::new(projection::select(&self.items, transform))
    }
}

impl<T: Clone> Seq<T> {
    // ========================================================================
    // Element selection
    // ========================================================================

    /// First element; fails on an empty sequence.
    pub fn first(&self) -> Result<T> {
        selection::first(&self.items)
    }

    /// First element, or `T::default()`.
    pub fn first_or_default(&self) -> T
    where
        T: Default,
    {
        selection::first_or_default(&self.items)
    }

    /// First element satisfying `predicate`; fails when nothing matches.
    pub fn first_where<P>(&self, predicate: P) -> Result<T>
    where
        P: Fn(&T) -> bool,
    {
        selection::first_where(&self.items, predicate)
    }

    /// First element satisfying `predicate`, or `T::default()`.
    pub fn first_or_default_where<P>(&self, predicate: P) -> T
    where
        T: Default,
        P: Fn(&T) -> bool,
    {
        selection::first_or_default_where(&self.items, predicate)
    }

    /// Last element; fails on an empty sequence.
    pub fn last(&self) -> Result<T> {
        selection::last(&self.items)
    }

    /// Last element, or `T::default()`.
    pub fn last_or_default(&self) -> T
    where
        T: Default,
    {
        selection::last_or_default(&self.items)
    }

    /// Last element satisfying `predicate`.
    pub fn last_where<P>(&self, predicate: P) -> Result<T>
    where
        P: Fn(&T) -> bool,
    {
        selection::last_where(&self.items, predicate)
    }

    /// Last element satisfying `predicate`, or `T::default()`.
    pub fn last_or_default_where<P>(&self, predicate: P) -> T
    where
        T: Default,
        P: Fn(&T) -> bool,
    {
        selection::last_or_default_where(&self.items, predicate)
    }

    /// The only element; fails unless there is exactly one.
    pub fn single(&self) -> Result<T> {
        selection::single(&self.items)
    }

    /// The only element, or `T::default()`.
    pub fn single_or_default(&self) -> T
    where
        T: Default,
    {
        selection::single_or_default(&self.items)
    }

    /// The only element satisfying `predicate`.
    pub fn single_where<P>(&self, predicate: P) -> Result<T>
    where
        P: Fn(&T) -> bool,
    {
        selection::single_where(&self.items, predicate)
    }

    /// The only element satisfying `predicate`, or `T::default()`.
    pub fn single_or_default_where<P>(&self, predicate: P) -> T
    where
        T: Default,
        P: Fn(&T) -> bool,
    {
        selection::single_or_default_where(&self.items, predicate)
    }

    /// Element at `index`; fails when out of range.
    pub fn element_at(&self, index: usize) -> Result<T> {
        selection::element_at(&self.items, index)
    }

    /// Element at `index`, or `T::default()`.
    pub fn element_at_or_default(&self, index: usize) -> T
    where
        T: Default,
    {
        selection::element_at_or_default(&self.items, index)
    }

    // ========================================================================
    // Filtering
    // ========================================================================

    /// Keeps elements satisfying `predicate`, in order.
    #[doc(alias = "where")]
    pub fn filter<P>(&self, predicate: P) -> Seq<T>
    where
        P: Fn(&T) -> bool,
    {
        Seq::new(filter::filter(&self.items, predicate))
    }

    /// Removes duplicates. The resulting order is unspecified.
    pub fn distinct(&self) -> Seq<T>
    where
        T: Eq + Hash,
    {
        Seq::new(filter::distinct(&self.items))
    }

    /// The first `n` elements (or all of them if there are fewer).
    pub fn take(&self, n: usize) -> Seq<T> {
        Seq::new(filter::take(&self.items, n))
    }

    /// The longest prefix satisfying `predicate`.
    pub fn take_while<P>(&self, predicate: P) -> Seq<T>
    where
        P: Fn(&T) -> bool,
    {
        Seq::new(filter::take_while(&self.items, predicate))
    }

    /// Everything from position `n` onward.
    pub fn skip(&self, n: usize) -> Seq<T> {
        Seq::new(filter::skip(&self.items, n))
    }

    /// Drops every element satisfying `predicate`, each tested on its own.
    pub fn skip_while<P>(&self, predicate: P) -> Seq<T>
    where
        P: Fn(&T) -> bool,
    {
        Seq::new(filter::skip_while(&self.items, predicate))
    }

    // ========================================================================
    // Sorting
    // ========================================================================

    /// Stable ascending sort by a numeric key.
    pub fn order_by<K, F>(&self, key: F) -> Seq<T>
    where
        K: Numeric,
        F: Fn(&T) -> K,
    {
        Seq::new(ordering::order_by(&self.items, key))
    }

    /// Descending sort by negated key; ties keep input order.
    pub fn order_by_descending<K, F>(&self, key: F) -> Seq<T>
    where
        K: Numeric,
        F: Fn(&T) -> K,
    {
        Seq::new(ordering::order_by_descending(&self.items, key))
    }

    /// Sorts by a numeric key in the given direction.
    pub fn order_by_dir<K, F>(&self, key: F, dir: Dir) -> Seq<T>
    where
        K: Numeric,
        F: Fn(&T) -> K,
    {
        Seq::new(ordering::order_by_dir(&self.items, key, dir))
    }

    /// Reversed positional order.
    pub fn revert(&self) -> Seq<T> {
        Seq::new(ordering::revert(&self.items))
    }
}

impl<N: Numeric> Seq<N> {
    /// Sum of all elements; zero when empty.
    pub fn sum(&self) -> N {
        aggregate::sum(&self.items)
    }

    /// Arithmetic mean (truncated for integer elements); fails on an empty
    /// sequence.
    pub fn average(&self) -> Result<f64> {
        aggregate::average(&self.items)
    }

    /// Smallest element; fails on an empty sequence.
    pub fn min(&self) -> Result<N> {
        aggregate::min(&self.items)
    }

    /// Largest element; fails on an empty sequence.
    pub fn max(&self) -> Result<N> {
        aggregate::max(&self.items)
    }
}

impl<T> From<Vec<T>> for Seq<T> {
    fn from(items: Vec<T>) -> Self {
        Seq::new(items)
    }
}

impl<T, const N: usize> From<[T; N]> for Seq<T> {
    fn from(items: [T; N]) -> Self {
        Seq::new(Vec::from(items))
    }
}

impl<T: Clone> From<&[T]> for Seq<T> {
    fn from(items: &[T]) -> Self {
        Seq::new(items.to_vec())
    }
}

impl<T> From<Seq<T>> for Vec<T> {
    fn from(seq: Seq<T>) -> Self {
        seq.items
    }
}

impl<T> FromIterator<T> for Seq<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Seq::new(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for Seq<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Seq<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> AsRef<[T]> for Seq<T> {
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}

impl<T: PartialEq> PartialEq<Vec<T>> for Seq<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        self.items == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SequenceError;

    #[test]
    fn chain_filter_order_take_sum() {
        let seq = Seq::from([5, 3, 8, 1, 9, 3]);
        let filtered = seq.filter(|x| *x > 2);
        assert_eq!(filtered, vec![5, 3, 8, 9, 3]);
        let ordered = filtered.order_by(|x| *x);
        assert_eq!(ordered, vec![3, 3, 5, 8, 9]);
        let taken = ordered.take(3);
        assert_eq!(taken, vec![3, 3, 5]);
        assert_eq!(taken.sum(), 11);
    }

    #[test]
    fn input_is_left_untouched() {
        let seq = Seq::from(vec![3, 1, 2]);
        let _ = seq.order_by(|x| *x).revert().skip(1);
        assert_eq!(seq, vec![3, 1, 2]);
    }

    #[test]
    fn select_changes_element_type() {
        let lengths = Seq::from(["a", "bbb", "cc"]).select(|s| s.len());
        assert_eq!(lengths, vec![1, 3, 2]);
        assert_eq!(lengths.max(), Ok(3));
        assert_eq!(lengths.average(), Ok(2.0));
    }

    #[test]
    fn selection_methods() {
        let seq: Seq<i32> = (1..=4).collect();
        assert_eq!(seq.first(), Ok(1));
        assert_eq!(seq.last(), Ok(4));
        assert_eq!(seq.element_at(2), Ok(3));
        assert_eq!(seq.single_where(|x| *x == 2), Ok(2));
        assert_eq!(
            seq.single(),
            Err(SequenceError::NotExactlyOne { found: 4 })
        );
        assert_eq!(seq.single_or_default(), 0);
    }

    #[test]
    fn empty_seq_defaults() {
        let seq: Seq<String> = Seq::default();
        assert!(seq.is_empty());
        assert_eq!(seq.first_or_default(), "");
        assert_eq!(seq.last_or_default_where(|s| s.is_empty()), "");
        assert_eq!(seq.element_at_or_default(0), "");
    }

    #[test]
    fn descending_via_dir() {
        let seq = Seq::from([2, 9, 4]);
        assert_eq!(seq.order_by_dir(|x| *x, Dir::Desc), vec![9, 4, 2]);
        assert_eq!(seq.order_by_descending(|x| *x), vec![9, 4, 2]);
    }

    #[test]
    fn iteration() {
        let seq = Seq::from(vec!['x', 'y']);
        let borrowed: Vec<&char> = (&seq).into_iter().collect();
        assert_eq!(borrowed, vec![&'x', &'y']);
        let owned: Vec<char> = seq.into_iter().collect();
        assert_eq!(owned, vec!['x', 'y']);
    }
}
