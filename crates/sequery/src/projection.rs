//! Projection: Select.

/// Maps every element through `transform`, preserving order and length.
///
/// `transform` runs exactly once per element, front to back.
#[doc(alias = "map")]
pub fn select<T, R, F>(seq: &[T], transform: F) -> Vec<R>
where
    F: Fn(&T) -> R,
{
    let mut projected = Vec::with_capacity(seq.len());
    for item in seq {
        projected.push(transform(item));
    }
    projected
}
