//! Counting reducers: whole-sequence and per-key occurrence counts.

use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

use super::reducer::Reducer;

/// Creates a reducer that counts elements, ignoring their contents.
///
/// The combining rule is `accumulator + 1`; the seed is normally `0`.
///
/// # Examples
///
/// ```rust
/// use refold::reducers::count;
///
/// let how_many = ["a", "b", "c"].iter().fold(0, count());
/// assert_eq!(how_many, 3);
/// ```
///
/// Combined with [`group_by`](crate::reducers::group_by) it counts per
/// group:
///
/// ```rust
/// use refold::prelude::*;
///
/// let categories = ["A", "B", "A", "C"];
/// let per_category = categories
///     .iter()
///     .fold(empty_map(), group_by(|category: &&str| *category, count(), 0));
/// assert_eq!(per_category.get("A"), Some(&2));
/// ```
pub fn count<T>() -> impl Reducer<T, usize> {
    |accumulator: usize, _element: &T| accumulator + 1
}

/// Creates a reducer that counts occurrences grouped by an extracted key.
///
/// The accumulator is a `HashMap` from key to occurrence count; the same
/// map instance is mutated and returned on every call.
///
/// # Arguments
///
/// * `key_fn` - Extracts the grouping key from each element
///
/// # Examples
///
/// ```rust
/// use refold::prelude::*;
///
/// let items = ["A", "B", "A", "C"];
/// let counts = items.iter().fold(empty_map(), count_by(|item: &&str| *item));
///
/// assert_eq!(counts.get("A"), Some(&2));
/// assert_eq!(counts.get("B"), Some(&1));
/// assert_eq!(counts.get("C"), Some(&1));
/// ```
pub fn count_by<T, K, S, KF>(mut key_fn: KF) -> impl Reducer<T, HashMap<K, usize, S>>
where
    K: Eq + Hash,
    S: BuildHasher,
    KF: FnMut(&T) -> K,
{
    move |mut accumulator: HashMap<K, usize, S>, element: &T| {
        *accumulator.entry(key_fn(element)).or_default() += 1;
        accumulator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collections::empty_map;
    use rstest::rstest;

    #[rstest]
    fn count_returns_sequence_length() {
        assert_eq!([1, 2, 3, 4, 5].iter().fold(0, count()), 5);
    }

    #[rstest]
    fn count_over_empty_sequence_returns_seed() {
        let empty: [i32; 0] = [];
        assert_eq!(empty.iter().fold(0, count()), 0);
    }

    #[rstest]
    fn count_by_tallies_per_key() {
        let items = ["A", "B", "A", "C"];
        let counts = items.iter().fold(empty_map(), count_by(|item: &&str| *item));

        assert_eq!(counts.len(), 3);
        assert_eq!(counts.get("A"), Some(&2));
        assert_eq!(counts.get("B"), Some(&1));
        assert_eq!(counts.get("C"), Some(&1));
    }

    #[rstest]
    fn count_by_treats_option_keys_as_distinct_groups() {
        let items = [Some("x"), None, Some("x"), None, None];
        let counts = items
            .iter()
            .fold(empty_map(), count_by(|item: &Option<&str>| *item));

        assert_eq!(counts.get(&Some("x")), Some(&2));
        assert_eq!(counts.get(&None), Some(&3));
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_count_equals_len(values in prop::collection::vec(any::<i32>(), 0..100)) {
            prop_assert_eq!(values.iter().fold(0, count()), values.len());
        }
    }
}
