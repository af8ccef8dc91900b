//! Reducer factories for `Iterator::fold`.
//!
//! Every function in this module is a *factory*: it takes configuration
//! (extractors, a comparator, a duplicate-key policy) and returns a
//! [`Reducer`] — a combining function `(accumulator, element) ->
//! accumulator` whose accumulator shape is fixed at construction time.
//! The caller drives the pass with `Iterator::fold`; no factory ever
//! iterates on its own.
//!
//! ## Accumulator shapes
//!
//! - Scalar, returned by value each call: [`sum`], [`sum_of`], [`count`],
//!   [`min`], [`max`], [`min_by`], [`max_by`]
//! - Associative container, mutated in place and returned: [`to_map`],
//!   [`to_map_with`], [`to_record`], [`sum_by`], [`count_by`],
//!   [`group_by`], [`reduce_by`]
//! - Composite struct with value semantics: the
//!   [`aggregate!`](crate::aggregate) macro
//!
//! ## Composition
//!
//! [`group_by`] and [`aggregate!`](crate::aggregate) consume other
//! reducers as configuration; everything else is a leaf. The inner reducer
//! of `group_by` can be any value of the [`Reducer`] shape, including
//! another `group_by` or an `aggregate!` output.
//!
//! # Examples
//!
//! ```rust
//! use refold::prelude::*;
//!
//! let items = [("A", 100), ("B", 200), ("A", 150)];
//!
//! let grand_total = items.iter().fold(0, sum_of(|item: &(&str, i32)| item.1));
//! assert_eq!(grand_total, 450);
//!
//! let per_category = items
//!     .iter()
//!     .fold(empty_map(), group_by(|item: &(&str, i32)| item.0, count(), 0));
//! assert_eq!(per_category.get("A"), Some(&2));
//! ```

mod combine;
mod counting;
mod map;
mod math;
mod ordering;
mod record;
mod reducer;

pub use combine::{group_by, reduce_by};
pub use counting::{count, count_by};
pub use map::{DuplicateStrategy, to_map, to_map_with};
pub use math::{max, max_by, min, min_by, sum, sum_by, sum_of};
pub use ordering::natural_order;
pub use record::to_record;
pub use reducer::Reducer;
