//! String-keyed record reducers.

use std::collections::BTreeMap;

use super::reducer::Reducer;

/// Creates a reducer that collects elements into an ordered, string-keyed
/// record.
///
/// The accumulator is a `BTreeMap<String, V>`: deterministically ordered
/// and restricted to string keys, the plain-record counterpart of
/// [`to_map`](crate::reducers::to_map). Duplicate keys are always
/// last-wins; there is no strategy option here. The same mapping instance
/// is mutated and returned on every call.
///
/// # Arguments
///
/// * `key_fn` - Extracts the string key from each element
/// * `value_fn` - Extracts the value from each element
///
/// # Examples
///
/// ```rust
/// use refold::prelude::*;
///
/// let users = [(1, "Alice"), (2, "Bob")];
/// let record = users.iter().fold(
///     empty_record(),
///     to_record(|user: &(i32, &str)| user.0.to_string(), |user| user.1),
/// );
///
/// assert_eq!(record.get("1"), Some(&"Alice"));
/// assert_eq!(record.get("2"), Some(&"Bob"));
/// ```
pub fn to_record<T, V, KF, VF>(
    mut key_fn: KF,
    mut value_fn: VF,
) -> impl Reducer<T, BTreeMap<String, V>>
where
    KF: FnMut(&T) -> String,
    VF: FnMut(&T) -> V,
{
    move |mut accumulator: BTreeMap<String, V>, element: &T| {
        accumulator.insert(key_fn(element), value_fn(element));
        accumulator
    }
}
