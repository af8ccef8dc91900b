//! # refold
//!
//! Composable reducers for single-pass aggregation over `Iterator::fold`.
//!
//! ## Overview
//!
//! This library provides factory functions that build *reducers*: binary
//! combining functions of the shape `(accumulator, element) -> accumulator`,
//! ready to be handed to `Iterator::fold`. Each factory fixes the shape of
//! its accumulator at construction time, so one left-to-right pass over a
//! sequence can compute one or several statistics without a hand-written
//! loop. It includes:
//!
//! - **Primitive folds**: [`sum`], [`sum_of`], [`count`], [`min`], [`max`]
//!   and their explicit-comparator forms [`min_by`], [`max_by`]
//! - **Keyed folds**: [`to_map`], [`to_record`], [`sum_by`], [`count_by`]
//! - **Composition**: the [`aggregate!`] macro for multi-field statistics
//!   over a caller-defined struct, and [`group_by`] / [`reduce_by`] for
//!   per-group re-application of any reducer
//! - **Seed helpers**: inference-friendly empty-container constructors in
//!   [`collections`]
//!
//! [`sum`]: reducers::sum
//! [`sum_of`]: reducers::sum_of
//! [`count`]: reducers::count
//! [`min`]: reducers::min
//! [`max`]: reducers::max
//! [`min_by`]: reducers::min_by
//! [`max_by`]: reducers::max_by
//! [`to_map`]: reducers::to_map
//! [`to_record`]: reducers::to_record
//! [`sum_by`]: reducers::sum_by
//! [`count_by`]: reducers::count_by
//! [`group_by`]: reducers::group_by
//! [`reduce_by`]: reducers::reduce_by
//!
//! ## Feature Flags
//!
//! - `fxhash`: `FxMap` seed type backed by `rustc-hash` for faster keyed folds
//! - `ahash`: `AMap` seed type backed by `ahash`
//!
//! ## Example
//!
//! ```rust
//! use refold::prelude::*;
//!
//! let sales = [("A", 100), ("B", 200), ("A", 150)];
//!
//! let totals = sales
//!     .iter()
//!     .fold(empty_map(), group_by(|s: &(&str, i32)| s.0, sum_of(|s: &(&str, i32)| s.1), 0));
//!
//! assert_eq!(totals.get("A"), Some(&250));
//! assert_eq!(totals.get("B"), Some(&200));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports every reducer factory and seed helper.
///
/// # Usage
///
/// ```rust
/// use refold::prelude::*;
/// ```
pub mod prelude {
    pub use crate::collections::*;
    pub use crate::reducers::*;
}

pub mod collections;
pub mod reducers;
