//! Arithmetic reducers: sums, extrema, and per-key sums.
//!
//! Every factory here returns a [`Reducer`] ready for `Iterator::fold`.
//! The scalar reducers (`sum`, `sum_of`, `min`, `max`) return a fresh
//! accumulator value from every call; [`sum_by`] mutates and returns the
//! same map instance.
//!
//! # Examples
//!
//! ```rust
//! use refold::prelude::*;
//!
//! let total = [1, 2, 3].iter().fold(0, sum());
//! assert_eq!(total, 6);
//!
//! let orders = [("food", 12.5), ("tools", 40.0), ("food", 7.5)];
//! let by_category = orders
//!     .iter()
//!     .fold(empty_map(), sum_by(|o: &(&str, f64)| o.0, |o| o.1));
//! assert_eq!(by_category.get("food"), Some(&20.0));
//! ```

use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};
use std::ops::{Add, AddAssign};

use super::ordering::natural_order;
use super::reducer::Reducer;

// =============================================================================
// Sums
// =============================================================================

/// Creates a reducer that sums elements that are themselves numeric.
///
/// The combining rule is `accumulator + *element`; arithmetic follows the
/// element type's native semantics (floats propagate `NaN` and infinities,
/// integers overflow the way the build profile dictates). The caller
/// supplies the seed, normally zero.
///
/// For elements that merely *contain* a numeric field, use [`sum_of`].
///
/// # Examples
///
/// ```rust
/// use refold::reducers::sum;
///
/// let total = [1, 2, 3, 4, 5].iter().fold(0, sum());
/// assert_eq!(total, 15);
///
/// let empty: [f64; 0] = [];
/// assert_eq!(empty.iter().fold(0.0, sum()), 0.0);
/// ```
pub fn sum<N>() -> impl Reducer<N, N>
where
    N: Add<Output = N> + Copy,
{
    |accumulator: N, element: &N| accumulator + *element
}

/// Creates a reducer that sums a numeric value extracted from each element.
///
/// # Arguments
///
/// * `value_fn` - Extracts the value to add from each element
///
/// # Examples
///
/// ```rust
/// use refold::reducers::sum_of;
///
/// struct Item {
///     value: i64,
/// }
///
/// let items = [Item { value: 1 }, Item { value: 2 }];
/// let total = items.iter().fold(0, sum_of(|item: &Item| item.value));
/// assert_eq!(total, 3);
/// ```
pub fn sum_of<T, N, F>(mut value_fn: F) -> impl Reducer<T, N>
where
    N: Add<Output = N>,
    F: FnMut(&T) -> N,
{
    move |accumulator: N, element: &T| accumulator + value_fn(element)
}

/// Creates a reducer that sums extracted values grouped by an extracted key.
///
/// The accumulator is a `HashMap` from key to running sum; a key seen for
/// the first time starts from the value type's zero (`Default`). The same
/// map instance is mutated and returned on every call. The map is generic
/// over its hasher, so a plain [`empty_map`](crate::collections::empty_map)
/// seed and the feature-gated `fx_map`/`a_map` seeds all work.
///
/// # Arguments
///
/// * `key_fn` - Extracts the grouping key from each element
/// * `value_fn` - Extracts the value to add from each element
///
/// # Examples
///
/// ```rust
/// use refold::prelude::*;
///
/// let sales = [("A", 100), ("B", 200), ("A", 150)];
/// let totals = sales
///     .iter()
///     .fold(empty_map(), sum_by(|s: &(&str, i32)| s.0, |s| s.1));
///
/// assert_eq!(totals.get("A"), Some(&250));
/// assert_eq!(totals.get("B"), Some(&200));
/// ```
pub fn sum_by<T, K, N, S, KF, VF>(
    mut key_fn: KF,
    mut value_fn: VF,
) -> impl Reducer<T, HashMap<K, N, S>>
where
    K: Eq + Hash,
    N: AddAssign + Default,
    S: BuildHasher,
    KF: FnMut(&T) -> K,
    VF: FnMut(&T) -> N,
{
    move |mut accumulator: HashMap<K, N, S>, element: &T| {
        let key = key_fn(element);
        let value = value_fn(element);
        *accumulator.entry(key).or_default() += value;
        accumulator
    }
}

// =============================================================================
// Extrema
// =============================================================================

/// Creates a reducer that keeps the smallest element under natural ordering.
///
/// The accumulator is the running minimum *element itself*, not a derived
/// scalar, so the caller seeds the fold with the first element (there is no
/// built-in empty-sequence fallback; reducing an empty sequence is the
/// caller's error condition). Only a strictly smaller element replaces the
/// accumulator: among ties, and for incomparable pairs such as float `NaN`,
/// the earlier-seen element is kept.
///
/// Requires `T: PartialOrd`; types without a natural order must use
/// [`min_by`] with an explicit comparator.
///
/// # Examples
///
/// ```rust
/// use refold::reducers::min;
///
/// let values = [3, 1, 2];
/// let smallest = values[1..].iter().fold(values[0], min());
/// assert_eq!(smallest, 1);
/// ```
pub fn min<T>() -> impl Reducer<T, T>
where
    T: PartialOrd + Clone,
{
    min_by(natural_order)
}

/// Creates a reducer that keeps the smallest element under a comparator.
///
/// # Arguments
///
/// * `compare` - Three-way comparison between two elements
///
/// # Examples
///
/// ```rust
/// use refold::reducers::min_by;
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Person {
///     age: u32,
/// }
///
/// let people = [Person { age: 30 }, Person { age: 25 }, Person { age: 40 }];
/// let youngest = people[1..]
///     .iter()
///     .fold(people[0].clone(), min_by(|a: &Person, b| a.age.cmp(&b.age)));
/// assert_eq!(youngest, Person { age: 25 });
/// ```
pub fn min_by<T, F>(mut compare: F) -> impl Reducer<T, T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    move |accumulator: T, element: &T| {
        if compare(element, &accumulator) == Ordering::Less {
            element.clone()
        } else {
            accumulator
        }
    }
}

/// Creates a reducer that keeps the largest element under natural ordering.
///
/// Mirror image of [`min`]: only a strictly greater element replaces the
/// accumulator, so ties keep the earlier-seen element, and the caller seeds
/// the fold with the first element.
///
/// # Examples
///
/// ```rust
/// use refold::reducers::max;
///
/// let values = [3.5, 1.0, 2.25];
/// let largest = values[1..].iter().fold(values[0], max());
/// assert_eq!(largest, 3.5);
/// ```
pub fn max<T>() -> impl Reducer<T, T>
where
    T: PartialOrd + Clone,
{
    max_by(natural_order)
}

/// Creates a reducer that keeps the largest element under a comparator.
///
/// # Arguments
///
/// * `compare` - Three-way comparison between two elements
///
/// # Examples
///
/// ```rust
/// use refold::reducers::max_by;
///
/// let words = ["fold", "reduce", "scan"];
/// let longest = words[1..]
///     .iter()
///     .fold(words[0], max_by(|a: &&str, b| a.len().cmp(&b.len())));
/// assert_eq!(longest, "reduce");
/// ```
pub fn max_by<T, F>(mut compare: F) -> impl Reducer<T, T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    move |accumulator: T, element: &T| {
        if compare(element, &accumulator) == Ordering::Greater {
            element.clone()
        } else {
            accumulator
        }
    }
}

// =============================================================================
// Tests
// =============================================================================


// =============================================================================
// Property-Based Tests
// =============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;
    use crate::collections::empty_map;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_sum_matches_iterator_sum(values in prop::collection::vec(-1000i64..1000, 0..50)) {
            let folded = values.iter().fold(0, sum());
            let direct: i64 = values.iter().sum();
            prop_assert_eq!(folded, direct);
        }

        #[test]
        fn prop_sum_is_permutation_invariant(values in prop::collection::vec(-1000i64..1000, 0..50)) {
            let forward = values.iter().fold(0, sum());
            let backward = values.iter().rev().fold(0, sum());
            prop_assert_eq!(forward, backward);
        }

        #[test]
        fn prop_min_matches_iterator_min(values in prop::collection::vec(any::<i32>(), 1..50)) {
            let folded = values[1..].iter().fold(values[0], min());
            prop_assert_eq!(Some(folded), values.iter().copied().min());
        }

        #[test]
        fn prop_max_matches_iterator_max(values in prop::collection::vec(any::<i32>(), 1..50)) {
            let folded = values[1..].iter().fold(values[0], max());
            prop_assert_eq!(Some(folded), values.iter().copied().max());
        }

        #[test]
        fn prop_sum_by_totals_match_global_sum(
            values in prop::collection::vec((0u8..5, -1000i64..1000), 0..50)
        ) {
            let per_key = values
                .iter()
                .fold(empty_map(), sum_by(|pair: &(u8, i64)| pair.0, |pair| pair.1));
            let grouped_total: i64 = per_key.values().copied().fold(0, |a, b| a + b);
            let direct_total: i64 = values.iter().map(|pair| pair.1).sum();
            prop_assert_eq!(grouped_total, direct_total);
        }
    }
}
