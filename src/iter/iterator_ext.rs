#[cfg(feature = "alloc")]
use alloc::vec::Vec;

#[cfg(feature = "alloc")]
use super::{ChunkBySize, GroupAdjacent};
#[cfg(feature = "alloc")]
use crate::Error;

/// Extends [`Iterator`] with the operators of this crate.
///
/// This trait is automatically implemented for all [`Iterator`] types.
/// To use its methods, import it (or [`prelude`](crate::prelude)).
pub trait SeqExt: Iterator {
    /// Folds every item into an accumulator, stopping as soon as `stop`
    /// returns `true` for the accumulated value.
    ///
    /// Starting from `seed`, every item is folded in with `combine`,
    /// then `stop` looks at the new accumulated value. The first time it returns `true`,
    /// the fold ends and no further item is pulled.
    /// If the iterator runs out first, the final accumulated value is returned.
    ///
    /// `stop` is never asked about `seed` itself: at least one item, if there is any,
    /// is always folded in. An empty iterator returns `seed`
    /// without calling either closure.
    ///
    /// This method borrows the iterator mutably, so whatever is left after stopping
    /// can still be consumed. Unbounded iterators such as `0..` are fine
    /// as long as `stop` eventually returns `true`.
    ///
    /// If `stop` never returns `true`, this is the same as [`Iterator::fold()`].
    ///
    /// # Examples
    ///
    /// ```
    /// use weblinq::prelude::*;
    ///
    /// let mut lines = ["GET / HTTP/1.1", "Host: a", "Accept: */*", "", "<body>"].into_iter();
    ///
    /// let head = lines.fold_until(
    ///     vec![],
    ///     |mut head, line| {
    ///         head.push(line);
    ///         head
    ///     },
    ///     |head| head.last().is_some_and(|line| line.is_empty()),
    /// );
    ///
    /// assert_eq!(head, ["GET / HTTP/1.1", "Host: a", "Accept: */*", ""]);
    /// assert_eq!(lines.next(), Some("<body>"));
    /// ```
    #[inline]
    fn fold_until<A, F, P>(&mut self, seed: A, combine: F, stop: P) -> A
    where
        F: FnMut(A, Self::Item) -> A,
        P: FnMut(&A) -> bool,
    {
        super::fold_until(self, seed, combine, stop)
    }

    /// Folds every item into an accumulator with a fallible function, stopping as soon as
    /// `stop` returns `true` for the accumulated value or `combine` fails.
    ///
    /// This is [`fold_until()`](SeqExt::fold_until) for a `combine` returning [`Result`].
    /// The first error is returned exactly as `combine` produced it,
    /// and nothing after the failing item is pulled.
    ///
    /// This fits pulling every page of a paged API when the number of pages is
    /// only known after the first response: iterate over page numbers (or just `0..`),
    /// fetch in `combine`, and check for the last page in `stop`.
    ///
    /// # Examples
    ///
    /// ```
    /// use weblinq::prelude::*;
    ///
    /// struct Page { items: Vec<u32>, has_more: bool }
    ///
    /// fn fetch(page: u32) -> Result<Page, String> {
    ///     match page {
    ///         0 | 1 => Ok(Page { items: vec![page * 10, page * 10 + 1], has_more: true }),
    ///         2 => Ok(Page { items: vec![20], has_more: false }),
    ///         _ => Err(format!("page {page} does not exist")),
    ///     }
    /// }
    ///
    /// let (items, _) = (0..).try_fold_until(
    ///     (vec![], true),
    ///     |(mut items, _), page| {
    ///         let page = fetch(page)?;
    ///         items.extend(page.items);
    ///         Ok::<_, String>((items, page.has_more))
    ///     },
    ///     |&(_, has_more)| !has_more,
    /// )?;
    ///
    /// assert_eq!(items, [0, 1, 10, 11, 20]);
    ///
    /// // Asking for one page past the end fails.
    /// let res = (1..=3).try_fold_until((), |(), page| fetch(page).map(drop), |_| false);
    /// assert_eq!(res, Err("page 3 does not exist".to_owned()));
    /// # Ok::<(), String>(())
    /// ```
    #[inline]
    fn try_fold_until<A, E, F, P>(&mut self, seed: A, combine: F, stop: P) -> Result<A, E>
    where
        F: FnMut(A, Self::Item) -> Result<A, E>,
        P: FnMut(&A) -> bool,
    {
        super::try_fold_until(self, seed, combine, stop)
    }

    /// Creates an iterator that yields runs of items where every item is adjacent
    /// to the one right before it.
    ///
    /// `adjacent` is called with `(previous, current)` for every pair of consecutive items.
    /// If it returns `true`, `current` joins the group of `previous`.
    /// Otherwise, the group is yielded and `current` starts a new one.
    ///
    /// The comparison is always made against the immediately preceding item,
    /// not against the first item of the group. A group can therefore drift far
    /// away from where it started, as long as every step is small enough.
    ///
    /// Groups are produced lazily: to yield a group, the iterator pulls its items
    /// plus the one item that proves the group is over.
    /// Concatenating every group gives back the original items in order.
    /// An empty iterator yields no group.
    ///
    /// This is the iterator counterpart of [`slice::chunk_by()`].
    ///
    /// # Examples
    ///
    /// ```
    /// use weblinq::prelude::*;
    ///
    /// let runs: Vec<_> = [1, 2, 3, 10, 11, 20]
    ///     .into_iter()
    ///     .group_adjacent(|prev, curr| curr - prev == 1)
    ///     .collect();
    ///
    /// assert_eq!(runs, [vec![1, 2, 3], vec![10, 11], vec![20]]);
    /// ```
    ///
    /// The key drifts:
    ///
    /// ```
    /// use weblinq::prelude::*;
    ///
    /// let mut temps = [20.0, 20.3, 20.7, 21.0, 25.0_f32]
    ///     .into_iter()
    ///     .group_adjacent(|prev, curr| (curr - prev).abs() < 0.5);
    ///
    /// assert_eq!(temps.next(), Some(vec![20.0, 20.3, 20.7, 21.0]));
    /// assert_eq!(temps.next(), Some(vec![25.0]));
    /// assert_eq!(temps.next(), None);
    /// ```
    #[cfg(feature = "alloc")]
    #[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
    #[inline]
    fn group_adjacent<F>(self, adjacent: F) -> GroupAdjacent<Self, F>
    where
        Self: Sized,
        F: FnMut(&Self::Item, &Self::Item) -> bool,
    {
        GroupAdjacent::new(self, adjacent)
    }

    /// Creates an iterator that yields chunks of `size` items.
    ///
    /// Every chunk but the last has exactly `size` items. The last one has between
    /// `1` and `size` items. No empty chunk is ever yielded, so an empty iterator
    /// yields nothing and a length that is a multiple of `size` yields no trailing chunk.
    ///
    /// Chunks are produced lazily, pulling exactly the items of the chunk.
    ///
    /// This is the iterator counterpart of [`slice::chunks()`]. If `size` is known to
    /// be non-zero, [`ChunkBySize::new()`] is the infallible alternative.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `size` is zero.
    /// Nothing is pulled from the iterator in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use weblinq::prelude::*;
    ///
    /// let chunks: Vec<_> = (1..=5).chunk_by_size(2)?.collect();
    /// assert_eq!(chunks, [vec![1, 2], vec![3, 4], vec![5]]);
    ///
    /// let chunks: Vec<_> = (1..=4).chunk_by_size(2)?.collect();
    /// assert_eq!(chunks, [vec![1, 2], vec![3, 4]]);
    ///
    /// assert!((1..=4).chunk_by_size(0).is_err());
    /// # Ok::<(), weblinq::Error>(())
    /// ```
    #[cfg(feature = "alloc")]
    #[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
    #[inline]
    fn chunk_by_size(self, size: usize) -> Result<ChunkBySize<Self>, Error>
    where
        Self: Sized,
    {
        super::chunk_by_size(self, size)
    }

    /// Deals the items round-robin into `count` stripes:
    /// the item at position `i` lands in stripe `i % count`.
    ///
    /// Exactly `count` stripes are returned, and some may be empty.
    /// Unlike [`chunk_by_size()`](SeqExt::chunk_by_size), the first stripe is only complete
    /// once the iterator is exhausted, so this method is eager and the iterator must be finite.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `count` is zero,
    /// or if `count` stripes cannot be allocated.
    /// Nothing is pulled from the iterator in either case.
    ///
    /// # Examples
    ///
    /// ```
    /// use weblinq::prelude::*;
    ///
    /// let [odd, even]: [Vec<_>; 2] = (1..=7).stripe(2)?.try_into().unwrap();
    ///
    /// assert_eq!(odd, [1, 3, 5, 7]);
    /// assert_eq!(even, [2, 4, 6]);
    /// # Ok::<(), weblinq::Error>(())
    /// ```
    #[cfg(feature = "alloc")]
    #[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
    #[inline]
    fn stripe(self, count: usize) -> Result<Vec<Vec<Self::Item>>, Error>
    where
        Self: Sized,
    {
        super::stripe(self, count)
    }
}

impl<I: Iterator + ?Sized> SeqExt for I {}
