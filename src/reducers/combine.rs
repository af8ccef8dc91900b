//! The composition layer: multi-field aggregation and per-group folding.
//!
//! This module holds the two combinators that consume *other* reducers as
//! configuration:
//!
//! - [`aggregate!`](crate::aggregate) lifts a set of named single-field
//!   reducers into one reducer over a composite struct accumulator.
//! - [`group_by`] (alias [`reduce_by`]) lifts any reducer into a per-group
//!   reducer keyed by a derived key.
//!
//! They compose freely: the inner reducer of `group_by` can be a primitive
//! fold, a keyed fold, the output of `aggregate!`, or any hand-written
//! closure of the [`Reducer`] shape.

use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

use super::reducer::Reducer;

/// Builds a reducer that updates several named fields of a struct
/// accumulator at once, in a single pass.
///
/// `aggregate!(Stats { total: sum_of(...), count: count() })` expands to a
/// closure `FnMut(Stats, &T) -> Stats`. On each call, every named field's
/// reducer receives that field's current value and the element; the struct
/// is rebuilt with functional record update, so fields *not* named pass
/// through by identity, letting the accumulator carry metadata the
/// reducers never touch.
///
/// # Semantics
///
/// - Fields are updated in declaration order.
/// - Every field reducer reads only the pre-call composite; fields never
///   see each other's updated values within one call.
/// - A panicking field reducer propagates; no partially-updated struct is
///   produced.
///
/// # Requirements
///
/// - The struct name must be a bare identifier in scope (`use` it if it
///   lives in another module).
/// - The struct must not implement `Drop`: the expansion moves fields out
///   of the incoming accumulator piecewise.
///
/// # Examples
///
/// ## Several statistics in one pass
///
/// ```rust
/// use refold::aggregate;
/// use refold::reducers::{count, sum_of};
///
/// struct Transaction {
///     sales: i64,
///     cost: i64,
/// }
///
/// #[derive(Debug, PartialEq)]
/// struct Totals {
///     sales: i64,
///     cost: i64,
///     transactions: usize,
/// }
///
/// let ledger = [
///     Transaction { sales: 100, cost: 60 },
///     Transaction { sales: 200, cost: 120 },
/// ];
///
/// let totals = ledger.iter().fold(
///     Totals { sales: 0, cost: 0, transactions: 0 },
///     aggregate!(Totals {
///         sales: sum_of(|t: &Transaction| t.sales),
///         cost: sum_of(|t: &Transaction| t.cost),
///         transactions: count(),
///     }),
/// );
///
/// assert_eq!(totals, Totals { sales: 300, cost: 180, transactions: 2 });
/// ```
///
/// ## Pass-through fields
///
/// ```rust
/// use refold::aggregate;
/// use refold::reducers::sum;
///
/// #[derive(Debug, PartialEq)]
/// struct Report {
///     total: i32,
///     label: &'static str,
/// }
///
/// let seed = Report { total: 0, label: "quarterly" };
/// let report = [1, 2, 3]
///     .iter()
///     .fold(seed, aggregate!(Report { total: sum() }));
///
/// // `label` was never touched by a reducer.
/// assert_eq!(report, Report { total: 6, label: "quarterly" });
/// ```
#[macro_export]
macro_rules! aggregate {
    ($record:ident { $($field:ident : $reducer:expr),+ $(,)? }) => {{
        $(let mut $field = $reducer;)+
        move |accumulator: $record, element: &_| {
            #[allow(clippy::needless_update)]
            let updated = $record {
                $($field: ($field)(accumulator.$field, element),)+
                ..accumulator
            };
            updated
        }
    }};
}

/// Creates a reducer that groups elements by a derived key and folds each
/// group independently through an inner reducer.
///
/// The accumulator is a `HashMap` from key to per-group sub-accumulator.
/// For each element: derive the key, fetch the group's current
/// sub-accumulator — a key seen for the first time starts from a fresh
/// clone of `initial` — apply the inner reducer, and store the result back.
/// The same map instance is mutated and returned on every call.
///
/// `group_by` is agnostic to the inner reducer: [`sum`](crate::reducers::sum),
/// [`count`](crate::reducers::count), [`min`](crate::reducers::min), the
/// output of [`aggregate!`](crate::aggregate), another `group_by`, or any
/// closure of the [`Reducer`] shape all work. Because every new group is
/// seeded from its own clone, container-building inner reducers are safe:
/// no state is ever shared between groups.
///
/// Keys use the map's `Eq + Hash` equality. `Option<K>` keys make `None` a
/// valid group distinct from every `Some`. An empty input yields an empty
/// map, never the seed.
///
/// # Arguments
///
/// * `key_fn` - Extracts the grouping key from each element
/// * `reducer` - Folds the elements of one group
/// * `initial` - Seed cloned for each newly-seen group
///
/// # Examples
///
/// ```rust
/// use refold::prelude::*;
///
/// struct Sale {
///     category: &'static str,
///     value: i64,
/// }
///
/// let sales = [
///     Sale { category: "A", value: 100 },
///     Sale { category: "B", value: 200 },
///     Sale { category: "A", value: 150 },
/// ];
///
/// let totals = sales.iter().fold(
///     empty_map(),
///     group_by(|sale: &Sale| sale.category, sum_of(|sale: &Sale| sale.value), 0),
/// );
///
/// assert_eq!(totals.len(), 2);
/// assert_eq!(totals.get("A"), Some(&250));
/// assert_eq!(totals.get("B"), Some(&200));
/// ```
pub fn group_by<T, K, V, S, KF, R>(
    mut key_fn: KF,
    mut reducer: R,
    initial: V,
) -> impl Reducer<T, HashMap<K, V, S>>
where
    K: Eq + Hash,
    V: Clone,
    S: BuildHasher,
    KF: FnMut(&T) -> K,
    R: Reducer<T, V>,
{
    move |mut accumulator: HashMap<K, V, S>, element: &T| {
        let key = key_fn(element);
        let current = accumulator
            .remove(&key)
            .unwrap_or_else(|| initial.clone());
        accumulator.insert(key, reducer(current, element));
        accumulator
    }
}

/// Alias for [`group_by`], named for the fold it performs per key.
///
/// # Examples
///
/// ```rust
/// use refold::prelude::*;
///
/// let categories = ["A", "B", "A", "C"];
/// let counts = categories
///     .iter()
///     .fold(empty_map(), reduce_by(|category: &&str| *category, count(), 0));
///
/// assert_eq!(counts.get("A"), Some(&2));
/// ```
pub fn reduce_by<T, K, V, S, KF, R>(
    key_fn: KF,
    reducer: R,
    initial: V,
) -> impl Reducer<T, HashMap<K, V, S>>
where
    K: Eq + Hash,
    V: Clone,
    S: BuildHasher,
    KF: FnMut(&T) -> K,
    R: Reducer<T, V>,
{
    group_by(key_fn, reducer, initial)
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
    use crate::reducers::sum_of;
    use proptest::prelude::*;
    use std::collections::HashSet;

    proptest! {
        #[test]
        fn prop_group_by_key_set_equals_distinct_keys(
            pairs in prop::collection::vec((0u8..6, -100i64..100), 0..60)
        ) {
            let grouped = pairs.iter().fold(
                empty_map(),
                group_by(|pair: &(u8, i64)| pair.0, sum_of(|pair: &(u8, i64)| pair.1), 0),
            );
            let distinct: HashSet<u8> = pairs.iter().map(|pair| pair.0).collect();
            let keys: HashSet<u8> = grouped.keys().copied().collect();
            prop_assert_eq!(keys, distinct);
        }

        #[test]
        fn prop_each_group_equals_its_own_fold(
            pairs in prop::collection::vec((0u8..6, -100i64..100), 0..60)
        ) {
            let grouped = pairs.iter().fold(
                empty_map(),
                group_by(|pair: &(u8, i64)| pair.0, sum_of(|pair: &(u8, i64)| pair.1), 0),
            );
            for (key, group_sum) in &grouped {
                let alone: i64 = pairs
                    .iter()
                    .filter(|pair| pair.0 == *key)
                    .fold(0, |accumulator, pair| accumulator + pair.1);
                prop_assert_eq!(*group_sum, alone);
            }
        }
    }
}
