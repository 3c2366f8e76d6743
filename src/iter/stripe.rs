use alloc::vec::Vec;

use crate::Error;

/// Deals the items of `source` round-robin into `count` stripes.
///
/// This is the free-function form of [`SeqExt::stripe()`]. See its documentation for more.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `count` is zero,
/// or if `count` stripes cannot be allocated.
/// Nothing is pulled from `source` in either case.
///
/// # Examples
///
/// ```
/// use weblinq::stripe;
///
/// assert_eq!(stripe(0..7, 3)?, [vec![0, 3, 6], vec![1, 4], vec![2, 5]]);
/// # Ok::<(), weblinq::Error>(())
/// ```
///
/// [`SeqExt::stripe()`]: crate::SeqExt::stripe
pub fn stripe<I>(source: I, count: usize) -> Result<Vec<Vec<I::Item>>, Error>
where
    I: IntoIterator,
{
    if count == 0 {
        return Err(Error::zero("count"));
    }

    let mut stripes: Vec<Vec<I::Item>> = Vec::new();
    stripes
        .try_reserve_exact(count)
        .map_err(|_| Error::too_large("count"))?;
    stripes.resize_with(count, Vec::new);

    for (index, item) in source.into_iter().enumerate() {
        stripes[index % count].push(item);
    }

    Ok(stripes)
}
