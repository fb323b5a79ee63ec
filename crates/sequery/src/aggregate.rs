//! Aggregation: Sum, Average, Min, Max and Count.
//!
//! Empty-input policy:
//!
//! | Operator | Empty sequence |
//! |----------|----------------|
//! | `sum` | `Numeric::ZERO` |
//! | `count`, `count_where` | `0` |
//! | `average`, `average_by` | `Err(EmptySequence)` |
//! | `min`, `max` | `Err(EmptySequence)` |
//!
//! `min` and `max` never leak their starting sentinel.

use crate::error::{Result, SequenceError};
use crate::numeric::Numeric;

/// Adds every element in sequence order, starting from zero.
pub fn sum<N: Numeric>(seq: &[N]) -> N {
    let mut total = N::ZERO;
    for value in seq {
        total = total + *value;
    }
    total
}

/// Arithmetic mean, `sum / count`.
///
/// Elements are accumulated as `f64`, so the sum cannot overflow the element
/// type. For integral element types the quotient is truncated toward zero,
/// like integer division: `average(&[1, 2])` is `1.0`, while
/// `average(&[1.0, 2.0])` is `1.5`.
pub fn average<N: Numeric>(seq: &[N]) -> Result<f64> {
    let mean = mean_f64(seq.iter().map(|value| value.to_f64()), seq.len())?;
    Ok(if N::INTEGRAL { mean.trunc() } else { mean })
}

/// Projects every element through `transform`, then averages the results.
///
/// The projected values are summed as `f64` and never truncated, whatever
/// their type.
pub fn average_by<T, N, F>(seq: &[T], transform: F) -> Result<f64>
where
    N: Numeric,
    F: Fn(&T) -> N,
{
    mean_f64(seq.iter().map(|item| transform(item).to_f64()), seq.len())
}

fn mean_f64(values: impl Iterator<Item = f64>, len: usize) -> Result<f64> {
    if len == 0 {
        return Err(SequenceError::EmptySequence);
    }
    let mut total = 0.0;
    for value in values {
        total += value;
    }
    Ok(total / len as f64)
}

/// Total number of elements.
pub fn count<T>(seq: &[T]) -> usize {
    seq.len()
}

/// Number of elements satisfying `predicate`.
pub fn count_where<T, P>(seq: &[T], predicate: P) -> usize
where
    P: Fn(&T) -> bool,
{
    seq.iter().filter(|item| predicate(item)).count()
}

/// Smallest element.
///
/// Fails with [`SequenceError::EmptySequence`] on an empty sequence. NaN
/// values are skipped; when no element improves on the starting sentinel
/// (e.g. all NaN) the first element is returned instead.
pub fn min<N: Numeric>(seq: &[N]) -> Result<N> {
    let first = *seq.first().ok_or(SequenceError::EmptySequence)?;
    let mut lowest = N::MAX;
    let mut improved = false;
    for value in seq {
        if *value < lowest {
            lowest = *value;
            improved = true;
        }
    }
    Ok(if improved { lowest } else { first })
}

/// Largest element.
///
/// Fails with [`SequenceError::EmptySequence`] on an empty sequence. NaN
/// values are skipped; when no element improves on the starting sentinel
/// (e.g. all NaN) the first element is returned instead.
pub fn max<N: Numeric>(seq: &[N]) -> Result<N> {
    let first = *seq.first().ok_or(SequenceError::EmptySequence)?;
    let mut highest = N::MIN;
    let mut improved = false;
    for value in seq {
        if *value > highest {
            highest = *value;
            improved = true;
        }
    }
    Ok(if improved { highest } else { first })
}
