//! Map-building reducers with a configurable duplicate-key policy.

use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

use super::reducer::Reducer;

/// Policy for a key that appears more than once in the input.
///
/// # Examples
///
/// ```rust
/// use refold::prelude::*;
///
/// let entries = [(1, "old"), (1, "new")];
///
/// let last = entries
///     .iter()
///     .fold(empty_map(), to_map_with(|e: &(i32, &str)| e.0, |e| e.1, DuplicateStrategy::Last));
/// assert_eq!(last.get(&1), Some(&"new"));
///
/// let first = entries
///     .iter()
///     .fold(empty_map(), to_map_with(|e: &(i32, &str)| e.0, |e| e.1, DuplicateStrategy::First));
/// assert_eq!(first.get(&1), Some(&"old"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DuplicateStrategy {
    /// The earliest occurrence wins; later writes for an existing key are
    /// no-ops.
    First,
    /// The latest occurrence wins; later writes overwrite earlier ones.
    #[default]
    Last,
}

/// Creates a reducer that collects elements into a key/value map.
///
/// Shorthand for [`to_map_with`] under the default
/// [`DuplicateStrategy::Last`]. The same map instance is mutated and
/// returned on every call; the caller owns the seed (usually
/// [`empty_map`](crate::collections::empty_map)).
///
/// # Arguments
///
/// * `key_fn` - Extracts the map key from each element
/// * `value_fn` - Extracts the map value from each element
///
/// # Examples
///
/// ```rust
/// use refold::prelude::*;
///
/// struct User {
///     id: u32,
///     name: &'static str,
/// }
///
/// let users = [User { id: 1, name: "Alice" }, User { id: 2, name: "Bob" }];
/// let by_id = users
///     .iter()
///     .fold(empty_map(), to_map(|user: &User| user.id, |user| user.name));
///
/// assert_eq!(by_id.get(&1), Some(&"Alice"));
/// assert_eq!(by_id.get(&2), Some(&"Bob"));
/// ```
pub fn to_map<T, K, V, S, KF, VF>(key_fn: KF, value_fn: VF) -> impl Reducer<T, HashMap<K, V, S>>
where
    K: Eq + Hash,
    S: BuildHasher,
    KF: FnMut(&T) -> K,
    VF: FnMut(&T) -> V,
{
    to_map_with(key_fn, value_fn, DuplicateStrategy::Last)
}

/// Creates a reducer that collects elements into a key/value map with an
/// explicit duplicate-key policy.
///
/// Under [`DuplicateStrategy::First`] the value extractor is still
/// evaluated for a duplicate key; only the write is skipped. Extractors are
/// expected to be side-effect free either way.
///
/// # Arguments
///
/// * `key_fn` - Extracts the map key from each element
/// * `value_fn` - Extracts the map value from each element
/// * `strategy` - What to do when a key repeats
///
/// # Examples
///
/// ```rust
/// use refold::prelude::*;
///
/// let readings = [("sensor-1", 20), ("sensor-1", 22), ("sensor-2", 18)];
/// let initial_readings = readings.iter().fold(
///     empty_map(),
///     to_map_with(|r: &(&str, i32)| r.0, |r| r.1, DuplicateStrategy::First),
/// );
///
/// assert_eq!(initial_readings.get("sensor-1"), Some(&20));
/// assert_eq!(initial_readings.len(), 2);
/// ```
pub fn to_map_with<T, K, V, S, KF, VF>(
    mut key_fn: KF,
    mut value_fn: VF,
    strategy: DuplicateStrategy,
) -> impl Reducer<T, HashMap<K, V, S>>
where
    K: Eq + Hash,
    S: BuildHasher,
    KF: FnMut(&T) -> K,
    VF: FnMut(&T) -> V,
{
    move |mut accumulator: HashMap<K, V, S>, element: &T| {
        let key = key_fn(element);
        let value = value_fn(element);

        if strategy == DuplicateStrategy::First && accumulator.contains_key(&key) {
            return accumulator;
        }

        accumulator.insert(key, value);
        accumulator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collections::empty_map;
    use rstest::rstest;

    fn entries() -> Vec<(u32, &'static str)> {
        vec![(1, "Alice"), (2, "Bob"), (1, "Amelia")]
    }

    #[rstest]
    fn to_map_collects_key_value_pairs() {
        let users = [(1u32, "Alice"), (2, "Bob")];
        let by_id = users
            .iter()
            .fold(empty_map(), to_map(|user: &(u32, &str)| user.0, |user| user.1));

        assert_eq!(by_id.len(), 2);
        assert_eq!(by_id.get(&1), Some(&"Alice"));
        assert_eq!(by_id.get(&2), Some(&"Bob"));
    }

    #[rstest]
    fn to_map_defaults_to_last_wins() {
        let by_id = entries()
            .iter()
            .fold(empty_map(), to_map(|user: &(u32, &str)| user.0, |user| user.1));

        assert_eq!(by_id.len(), 2);
        assert_eq!(by_id.get(&1), Some(&"Amelia"));
    }

    #[rstest]
    fn to_map_with_first_keeps_earliest_value() {
        let by_id = entries().iter().fold(
            empty_map(),
            to_map_with(|user: &(u32, &str)| user.0, |user| user.1, DuplicateStrategy::First),
        );

        assert_eq!(by_id.len(), 2);
        assert_eq!(by_id.get(&1), Some(&"Alice"));
    }

    #[rstest]
    fn to_map_size_equals_distinct_key_count() {
        for strategy in [DuplicateStrategy::First, DuplicateStrategy::Last] {
            let by_id = entries().iter().fold(
                empty_map(),
                to_map_with(|user: &(u32, &str)| user.0, |user| user.1, strategy),
            );
            assert_eq!(by_id.len(), 2);
        }
    }

    #[rstest]
    fn to_map_over_empty_sequence_yields_empty_map() {
        let empty: [(u32, &str); 0] = [];
        let by_id = empty
            .iter()
            .fold(empty_map(), to_map(|user: &(u32, &str)| user.0, |user| user.1));
        assert!(by_id.is_empty());
    }

    #[rstest]
    fn duplicate_strategy_defaults_to_last() {
        assert_eq!(DuplicateStrategy::default(), DuplicateStrategy::Last);
    }
}
