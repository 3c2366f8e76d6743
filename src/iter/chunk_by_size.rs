use alloc::vec::Vec;
use std::{iter::FusedIterator, num::NonZeroUsize};

use crate::{Error, assert_iterator};

/// An [`Iterator`] that splits the underlying iterator into chunks of a fixed size.
///
/// This `struct` is created by [`SeqExt::chunk_by_size()`], [`chunk_by_size()`] or
/// [`ChunkBySize::new()`]. See the first one's documentation for more.
///
/// [`SeqExt::chunk_by_size()`]: crate::SeqExt::chunk_by_size
#[derive(Debug, Clone)]
pub struct ChunkBySize<I> {
    iter: I,
    size: NonZeroUsize,
    // Set once a short chunk reveals that `iter` is exhausted.
    done: bool,
}

/// Splits `source` into chunks of `size` items. The last chunk may be shorter.
///
/// This is the free-function form of [`SeqExt::chunk_by_size()`]. See its documentation for more.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `size` is zero.
///
/// # Examples
///
/// ```
/// use weblinq::chunk_by_size;
///
/// let chunks: Vec<_> = chunk_by_size([1, 2, 3, 4], 2)?.collect();
/// assert_eq!(chunks, [[1, 2], [3, 4]]);
///
/// assert!(chunk_by_size([1, 2, 3, 4], 0).is_err());
/// # Ok::<(), weblinq::Error>(())
/// ```
///
/// [`SeqExt::chunk_by_size()`]: crate::SeqExt::chunk_by_size
#[inline]
pub fn chunk_by_size<I>(source: I, size: usize) -> Result<ChunkBySize<I::IntoIter>, Error>
where
    I: IntoIterator,
{
    let size = NonZeroUsize::new(size).ok_or(Error::zero("size"))?;
    Ok(ChunkBySize::new(source.into_iter(), size))
}

impl<I: Iterator> ChunkBySize<I> {
    /// Creates a new instance of this iterator with a chunk size that cannot be zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::num::NonZeroUsize;
    /// use weblinq::ChunkBySize;
    ///
    /// let mut chunks = ChunkBySize::new("abcde".chars(), NonZeroUsize::new(3).unwrap());
    ///
    /// assert_eq!(chunks.next(), Some(vec!['a', 'b', 'c']));
    /// assert_eq!(chunks.next(), Some(vec!['d', 'e']));
    /// assert_eq!(chunks.next(), None);
    /// ```
    #[inline]
    pub const fn new(iter: I, size: NonZeroUsize) -> Self {
        assert_iterator(Self {
            iter,
            size,
            done: false,
        })
    }

    /// Returns the size of every chunk but possibly the last one.
    #[inline]
    pub const fn size(&self) -> NonZeroUsize {
        self.size
    }
}

impl<I: Iterator> Iterator for ChunkBySize<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let size = self.size.get();
        // Trust the hint only as far as the lower bound goes, so that a huge `size`
        // doesn't allocate upfront.
        let mut chunk = Vec::with_capacity(size.min(self.iter.size_hint().0));
        chunk.extend(self.iter.by_ref().take(size));

        if chunk.len() < size {
            self.done = true;
        }

        if chunk.is_empty() { None } else { Some(chunk) }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }

        let size = self.size.get();
        let (lower, upper) = self.iter.size_hint();
        (lower.div_ceil(size), upper.map(|upper| upper.div_ceil(size)))
    }
}

impl<I: ExactSizeIterator> ExactSizeIterator for ChunkBySize<I> {}

impl<I: Iterator> FusedIterator for ChunkBySize<I> {}

#[cfg(all(test, feature = "std"))]
mod tests {
    use std::cell::Cell;

    use crate::prelude::*;
    use crate::test_utils::{Gappy, Tally};
    use crate::{Error, chunk_by_size};

    #[test]
    fn trailing_short_chunk() {
        let chunks: Vec<_> = [1, 2, 3, 4, 5].into_iter().chunk_by_size(2).unwrap().collect();

        assert_eq!(chunks, [vec![1, 2], vec![3, 4], vec![5]]);
    }

    #[test]
    fn no_trailing_empty_chunk() {
        let chunks: Vec<_> = [1, 2, 3, 4].into_iter().chunk_by_size(2).unwrap().collect();

        assert_eq!(chunks, [vec![1, 2], vec![3, 4]]);
    }

    #[test]
    fn shorter_than_size() {
        let chunks: Vec<_> = chunk_by_size([1, 2], 3).unwrap().collect();

        assert_eq!(chunks, [vec![1, 2]]);
    }

    #[test]
    fn empty_source() {
        let mut chunks = chunk_by_size(Vec::<u8>::new(), 3).unwrap();

        assert_eq!(chunks.size_hint(), (0, Some(0)));
        assert_eq!(chunks.next(), None);
    }

    #[test]
    fn zero_size_is_rejected_before_pulling() {
        let pulled = Cell::new(0);
        let res = Tally::new(0.., &pulled).chunk_by_size(0);

        assert!(matches!(
            res,
            Err(Error::InvalidArgument { name: "size", .. })
        ));
        assert_eq!(pulled.get(), 0);
    }

    #[test]
    fn pulls_lazily() {
        let pulled = Cell::new(0);
        let mut chunks = Tally::new(0.., &pulled).chunk_by_size(4).unwrap();

        assert_eq!(pulled.get(), 0);
        assert_eq!(chunks.next(), Some(vec![0, 1, 2, 3]));
        // No look-ahead needed: a full chunk ends by itself.
        assert_eq!(pulled.get(), 4);
        assert_eq!(chunks.next(), Some(vec![4, 5, 6, 7]));
        assert_eq!(pulled.get(), 8);
    }

    #[test]
    fn huge_size_does_not_preallocate() {
        let chunks: Vec<_> = (0..3).chunk_by_size(usize::MAX).unwrap().collect();

        assert_eq!(chunks, [vec![0, 1, 2]]);
    }

    #[test]
    fn fused_over_gappy_source() {
        let mut chunks = Gappy::new([Some(1), None, Some(2), Some(3)])
            .chunk_by_size(2)
            .unwrap();

        assert_eq!(chunks.next(), Some(vec![1]));
        assert_eq!(chunks.next(), None);
        assert_eq!(chunks.next(), None);
    }

    #[test]
    fn exact_len() {
        let chunks = (0..10).chunk_by_size(3).unwrap();

        assert_eq!(chunks.len(), 4);
        assert_eq!(chunks.size().get(), 3);
    }
}
