//! Inference-friendly seed constructors for keyed folds.
//!
//! A bare `HashMap::new()` handed to `Iterator::fold` often leaves the
//! compiler without enough context to pin the key and value types before
//! the reducer is examined. These helpers exist to name that intent at the
//! call site; each is nothing more than the corresponding `new`/`default`.
//!
//! With the `fxhash` or `ahash` feature enabled, `fx_map` / `a_map` build
//! seeds backed by a faster hasher. Every keyed fold in
//! [`reducers`](crate::reducers) is generic over the map's hasher, so these
//! seeds drop straight in.

use std::collections::{BTreeMap, HashMap, HashSet};

/// Creates an empty `HashMap` seed.
///
/// # Examples
///
/// ```rust
/// use refold::prelude::*;
///
/// let counts = ["a", "b", "a"]
///     .iter()
///     .fold(empty_map(), count_by(|item: &&str| *item));
/// assert_eq!(counts.get("a"), Some(&2));
/// ```
#[must_use]
pub fn empty_map<K, V>() -> HashMap<K, V> {
    HashMap::new()
}

/// Creates an empty ordered, string-keyed record seed for
/// [`to_record`](crate::reducers::to_record).
#[must_use]
pub fn empty_record<V>() -> BTreeMap<String, V> {
    BTreeMap::new()
}

/// Creates an empty `HashSet` seed.
#[must_use]
pub fn empty_set<T>() -> HashSet<T> {
    HashSet::new()
}

/// Creates an empty `Vec` seed.
#[must_use]
pub fn empty_vec<T>() -> Vec<T> {
    Vec::new()
}

/// A `HashMap` backed by the `rustc-hash` Fx hasher.
#[cfg(feature = "fxhash")]
pub type FxMap<K, V> = HashMap<K, V, rustc_hash::FxBuildHasher>;

/// Creates an empty [`FxMap`] seed.
///
/// # Examples
///
/// ```rust
/// use refold::prelude::*;
///
/// let totals = [("A", 1), ("A", 2)]
///     .iter()
///     .fold(fx_map(), sum_by(|pair: &(&str, i32)| pair.0, |pair| pair.1));
/// assert_eq!(totals.get("A"), Some(&3));
/// ```
#[cfg(feature = "fxhash")]
#[must_use]
pub fn fx_map<K, V>() -> FxMap<K, V> {
    FxMap::default()
}

/// A `HashMap` backed by the `ahash` hasher.
#[cfg(feature = "ahash")]
pub type AMap<K, V> = HashMap<K, V, ahash::RandomState>;

/// Creates an empty [`AMap`] seed.
#[cfg(feature = "ahash")]
#[must_use]
pub fn a_map<K, V>() -> AMap<K, V> {
    AMap::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn seeds_start_empty() {
        assert!(empty_map::<u32, &str>().is_empty());
        assert!(empty_record::<i32>().is_empty());
        assert!(empty_set::<u8>().is_empty());
        assert!(empty_vec::<String>().is_empty());
    }

    #[cfg(feature = "fxhash")]
    #[rstest]
    fn fx_map_seeds_keyed_folds() {
        use crate::reducers::sum_by;

        let totals = [("A", 1), ("B", 2), ("A", 3)]
            .iter()
            .fold(fx_map(), sum_by(|pair: &(&str, i32)| pair.0, |pair| pair.1));
        assert_eq!(totals.get("A"), Some(&4));
    }

    #[cfg(feature = "ahash")]
    #[rstest]
    fn a_map_seeds_keyed_folds() {
        use crate::reducers::count_by;

        let counts = [1, 1, 2]
            .iter()
            .fold(a_map(), count_by(|value: &i32| *value));
        assert_eq!(counts.get(&1), Some(&2));
    }
}
