use std::ops::ControlFlow;

/// Folds every item into an accumulator, stopping as soon as `stop` returns `true`
/// for the accumulated value.
///
/// This is the free-function form of [`SeqExt::fold_until()`]. See its documentation for more.
///
/// # Examples
///
/// ```
/// use weblinq::fold_until;
///
/// // Keep taking squares until their sum exceeds 20.
/// let sum = fold_until((1..).map(|n| n * n), 0, |sum, sq| sum + sq, |&sum| sum > 20);
///
/// assert_eq!(sum, 1 + 4 + 9 + 16);
/// ```
///
/// [`SeqExt::fold_until()`]: crate::SeqExt::fold_until
pub fn fold_until<I, A, F, P>(source: I, seed: A, mut combine: F, mut stop: P) -> A
where
    I: IntoIterator,
    F: FnMut(A, I::Item) -> A,
    P: FnMut(&A) -> bool,
{
    // `try_fold()` rather than a `for` loop so that adaptors with internal iteration
    // (`Chain`, `FlatMap`, ...) stay fast.
    match source.into_iter().try_fold(seed, |accum, item| {
        let accum = combine(accum, item);
        if stop(&accum) {
            ControlFlow::Break(accum)
        } else {
            ControlFlow::Continue(accum)
        }
    }) {
        ControlFlow::Continue(accum) | ControlFlow::Break(accum) => accum,
    }
}
