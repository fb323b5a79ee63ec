//! Sequery - Composable query operators over in-memory sequences.
//!
//! Sequery provides a small set of eager, stateless operators over ordered,
//! finite sequences. It supports:
//!
//! - Element selection: `first`, `last`, `single`, `element_at`, each with an
//!   `..._or_default` fallback
//! - Aggregation: `sum`, `average`, `min`, `max`, `count`
//! - Filtering: `filter` (Where), `distinct`, `take`, `take_while`, `skip`,
//!   `skip_while`
//! - Projection: `select`
//! - Sorting: `order_by`, `order_by_descending`, `revert`
//!
//! Every operator is available as a free function over a borrowed slice and
//! as a method on [`Seq`], which wraps results so calls chain.
//!
//! # Quick Start
//!
//! ```rust
//! use sequery::{filter, ordering, aggregate, Seq};
//!
//! // Free functions work on any slice
//! let data = [5, 3, 8, 1, 9, 3];
//! let big = filter::filter(&data, |x| *x > 2);
//! let sorted = ordering::order_by(&big, |x| *x);
//! assert_eq!(aggregate::sum(&filter::take(&sorted, 3)), 11);
//!
//! // Or chain through Seq
//! let total = Seq::from(data)
//!     .filter(|x| *x > 2)
//!     .order_by(|x| *x)
//!     .take(3)
//!     .sum();
//! assert_eq!(total, 11);
//! ```
//!
//! # Failure Semantics
//!
//! Operators that need an element return [`Result`]. Each has an
//! `..._or_default` twin that runs it and replaces *any* error with
//! `T::default()`:
//!
//! ```rust
//! use sequery::{Seq, SequenceError};
//!
//! let empty: Seq<i32> = Seq::default();
//! assert_eq!(empty.first(), Err(SequenceError::EmptySequence));
//! assert_eq!(empty.first_or_default(), 0);
//! ```
//!
//! | Error | Raised by |
//! |-------|-----------|
//! | `EmptySequence` | `first`, `last`, `last_where`, `average`, `min`, `max` |
//! | `NoMatch` | `first_where` |
//! | `NotExactlyOne` | `single`, `single_where` |
//! | `IndexOutOfRange` | `element_at` |
//!
//! # Ordering Guarantees
//!
//! All filtering and projection operators keep the input order of surviving
//! elements, except `distinct`, whose output order is unspecified. Sorting is
//! stable in both directions.
//!
//! # Features
//!
//! - `tracing`: emit `tracing` events when sorting, deduplicating, and when an
//!   `..._or_default` operator suppresses an error.

pub mod aggregate;
mod error;
pub mod filter;
mod numeric;
pub mod ordering;
pub mod projection;
mod seq;
pub mod selection;

// Re-export public API
pub use error::{Result, SequenceError};
pub use numeric::Numeric;
pub use ordering::Dir;
pub use seq::Seq;
