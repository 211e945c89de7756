use num_traits::Float;

/// Return `(min, max)` over a slice of values, or `None` for an empty slice.
pub(crate) fn extent<D: Float>(values: &[D]) -> Option<(D, D)> {
    let mut iter = values.iter().copied();
    let first = iter.next()?;

    let mut lo = first;
    let mut hi = first;
    for v in iter {
        if v < lo {
            lo = v;
        }
        if v > hi {
            hi = v;
        }
    }
    Some((lo, hi))
}
