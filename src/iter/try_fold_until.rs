use std::ops::ControlFlow;

/// Folds every item into an accumulator with a fallible function, stopping as soon as
/// `stop` returns `true` for the accumulated value or `combine` returns an error.
///
/// This is the free-function form of [`SeqExt::try_fold_until()`]. See its documentation for more.
///
/// # Examples
///
/// ```
/// use weblinq::try_fold_until;
///
/// let total = try_fold_until(["4", "8", "15"], 0, |sum, s| s.parse().map(|n: i32| sum + n), |_| false);
/// assert_eq!(total, Ok(27));
///
/// let total = try_fold_until(["4", "x", "15"], 0, |sum, s| s.parse().map(|n: i32| sum + n), |_| false);
/// assert!(total.is_err());
/// ```
///
/// [`SeqExt::try_fold_until()`]: crate::SeqExt::try_fold_until
pub fn try_fold_until<I, A, E, F, P>(source: I, seed: A, mut combine: F, mut stop: P) -> Result<A, E>
where
    I: IntoIterator,
    F: FnMut(A, I::Item) -> Result<A, E>,
    P: FnMut(&A) -> bool,
{
    match source.into_iter().try_fold(seed, |accum, item| match combine(accum, item) {
        Ok(accum) if stop(&accum) => ControlFlow::Break(Ok(accum)),
        Ok(accum) => ControlFlow::Continue(accum),
        Err(err) => ControlFlow::Break(Err(err)),
    }) {
        ControlFlow::Continue(accum) => Ok(accum),
        ControlFlow::Break(res) => res,
    }
}
