//! Default three-way comparison for naturally-ordered types.

use std::cmp::Ordering;

/// Compares two values by their natural `PartialOrd` ordering.
///
/// This is the comparator [`min`](crate::reducers::min) and
/// [`max`](crate::reducers::max) fall back to when no explicit comparator is
/// supplied. Incomparable pairs (for example a float `NaN` against anything)
/// degrade to `Ordering::Equal`, which under `min`/`max` keeps the
/// earlier-seen accumulator. Types without a natural order do not implement
/// `PartialOrd` and are rejected at compile time; supply
/// [`min_by`](crate::reducers::min_by) /
/// [`max_by`](crate::reducers::max_by) with an explicit comparator instead.
///
/// # Examples
///
/// ```rust
/// use std::cmp::Ordering;
/// use refold::reducers::natural_order;
///
/// assert_eq!(natural_order(&1, &2), Ordering::Less);
/// assert_eq!(natural_order(&"b", &"a"), Ordering::Greater);
/// assert_eq!(natural_order(&f64::NAN, &1.0), Ordering::Equal);
/// ```
#[inline]
pub fn natural_order<T: PartialOrd>(a: &T, b: &T) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}
