//! Numeric capability used by the aggregation and ordering operators.
//!
//! [`Numeric`] bundles what `sum`, `average`, `min`, `max` and the sort-key
//! extractors need from a number: an additive identity, the representable
//! extremes, addition, ordering, whether it is integral, and a lossy
//! conversion to `f64`. Sort keys are compared in their own type, never
//! through `f64`.

use std::ops::Add;

/// A primitive numeric type usable in aggregations and as a sort key.
///
/// Implemented for every primitive integer and floating point type.
///
/// # Example
///
/// ```
/// use sequery::Numeric;
///
/// assert_eq!(<i32 as Numeric>::ZERO, 0);
/// assert_eq!(<u8 as Numeric>::MAX, 255);
/// assert_eq!(7u16.to_f64(), 7.0);
/// ```
pub trait Numeric: Copy + PartialOrd + Add<Output = Self> {
    /// Additive identity, the starting accumulator of `sum`.
    const ZERO: Self;
    /// Smallest representable value, the starting accumulator of `max`.
    const MIN: Self;
    /// Largest representable value, the starting accumulator of `min`.
    const MAX: Self;
    /// `true` for integer types, whose `average` truncates toward zero.
    const INTEGRAL: bool;

    /// Converts the value to `f64` for averaging.
    fn to_f64(self) -> f64;
}

macro_rules! impl_numeric {
    ($integral:expr => $($t:ty),* $(,)?) => {
        $(
            impl Numeric for $t {
                const ZERO: Self = 0 as $t;
                const MIN: Self = <$t>::MIN;
                const MAX: Self = <$t>::MAX;
                const INTEGRAL: bool = $integral;

                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_numeric!(true => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_numeric!(false => f32, f64);
