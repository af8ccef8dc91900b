//! The combining-function contract shared by every factory in this crate.

/// A binary combining function `(accumulator, element) -> accumulator`.
///
/// This is the shape `Iterator::fold` expects when folding over references,
/// and the shape every factory in this crate returns. The element is passed
/// by reference so that a single element can be shown to several reducers
/// (see [`aggregate!`](crate::aggregate)) and so the same reducer works over
/// `slice.iter()` without cloning.
///
/// The trait is blanket-implemented for every closure of the right shape;
/// there is nothing to implement by hand. A reducer must not depend on any
/// element other than the one passed to the current call.
///
/// # Examples
///
/// ```rust
/// use refold::reducers::Reducer;
///
/// fn fold_all<T, A>(items: &[T], seed: A, mut reducer: impl Reducer<T, A>) -> A {
///     items.iter().fold(seed, |accumulator, element| reducer(accumulator, element))
/// }
///
/// let total = fold_all(&[1, 2, 3], 0, |accumulator: i32, element: &i32| {
///     accumulator + element
/// });
/// assert_eq!(total, 6);
/// ```
pub trait Reducer<T, Acc>: FnMut(Acc, &T) -> Acc {}

impl<T, Acc, F> Reducer<T, Acc> for F where F: FnMut(Acc, &T) -> Acc {}
