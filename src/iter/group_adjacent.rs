use alloc::vec::Vec;
use std::{fmt::Debug, iter::FusedIterator, mem};

use crate::assert_iterator;

/// An [`Iterator`] that splits the underlying iterator into runs of adjacent items.
///
/// This `struct` is created by [`SeqExt::group_adjacent()`] or [`group_adjacent()`].
/// See the former's documentation for more.
///
/// [`SeqExt::group_adjacent()`]: crate::SeqExt::group_adjacent
pub struct GroupAdjacent<I: Iterator, F> {
    iter: I,
    adjacent: F,
    state: State<I::Item>,
}

enum State<T> {
    NotStarted,
    // The item that broke the previous group. It opens the next one.
    Pending(T),
    Done,
}

/// Splits `source` into runs of items where each item is adjacent to the one right before it.
///
/// This is the free-function form of [`SeqExt::group_adjacent()`]. See its documentation for more.
///
/// # Examples
///
/// ```
/// use weblinq::group_adjacent;
///
/// let words: Vec<_> = group_adjacent("a bb cc d ee".split(' '), |a, b| a.len() == b.len()).collect();
///
/// assert_eq!(words, [vec!["a"], vec!["bb", "cc"], vec!["d"], vec!["ee"]]);
/// ```
///
/// [`SeqExt::group_adjacent()`]: crate::SeqExt::group_adjacent
#[inline]
pub fn group_adjacent<I, F>(source: I, adjacent: F) -> GroupAdjacent<I::IntoIter, F>
where
    I: IntoIterator,
    F: FnMut(&I::Item, &I::Item) -> bool,
{
    GroupAdjacent::new(source.into_iter(), adjacent)
}

impl<I, F> GroupAdjacent<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item, &I::Item) -> bool,
{
    /// Creates a new instance of this iterator with a predicate
    /// deciding whether `(previous, current)` belong to the same group.
    #[inline]
    pub fn new(iter: I, adjacent: F) -> Self {
        assert_iterator(Self {
            iter,
            adjacent,
            state: State::NotStarted,
        })
    }
}

impl<I, F> Iterator for GroupAdjacent<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item, &I::Item) -> bool,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        // Leave `Done` behind. Only a broken group brings us back to `Pending`.
        let first = match mem::replace(&mut self.state, State::Done) {
            State::NotStarted => self.iter.next()?,
            State::Pending(item) => item,
            State::Done => return None,
        };

        // `prev` is the last item of the group, kept out of `group` until the group closes.
        let mut group = Vec::new();
        let mut prev = first;
        for item in self.iter.by_ref() {
            if !(self.adjacent)(&prev, &item) {
                group.push(prev);
                self.state = State::Pending(item);
                return Some(group);
            }

            group.push(mem::replace(&mut prev, item));
        }

        group.push(prev);
        Some(group)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        match self.state {
            // Every item may open its own group.
            State::NotStarted => (lower.min(1), upper),
            State::Pending(_) => (1, upper.and_then(|upper| upper.checked_add(1))),
            State::Done => (0, Some(0)),
        }
    }
}

impl<I, F> FusedIterator for GroupAdjacent<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item, &I::Item) -> bool,
{
}

impl<I, F> Clone for GroupAdjacent<I, F>
where
    I: Iterator<Item: Clone> + Clone,
    F: Clone,
{
    fn clone(&self) -> Self {
        Self {
            iter: self.iter.clone(),
            adjacent: self.adjacent.clone(),
            state: match self.state {
                State::NotStarted => State::NotStarted,
                State::Pending(ref item) => State::Pending(item.clone()),
                State::Done => State::Done,
            },
        }
    }
}

impl<I, F> Debug for GroupAdjacent<I, F>
where
    I: Iterator<Item: Debug> + Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let pending = if let State::Pending(ref item) = self.state {
            Some(item)
        } else {
            None
        };

        f.debug_struct("GroupAdjacent")
            .field("iter", &self.iter)
            .field("pending", &pending)
            .field("done", &matches!(self.state, State::Done))
            .finish()
    }
}


#[cfg(all(test, feature = "std"))]
mod proptests {
    use proptest::collection::vec as propvec;
    use proptest::prelude::*;
    use proptest::test_runner::TestCaseResult;

    use crate::prelude::*;

    proptest! {
        #[test]
        fn agrees_with_slice_chunk_by(
            nums in propvec(0..4_u8, ..=12),
        ) {
            agrees_with_slice_chunk_by_impl(nums)?;
        }

        #[test]
        fn size_hint_bounds_group_count(
            nums in propvec(0..4_u8, ..=12),
            advance in ..=3_usize,
        ) {
            size_hint_bounds_group_count_impl(nums, advance)?;
        }
    }

    fn agrees_with_slice_chunk_by_impl(nums: Vec<u8>) -> TestCaseResult {
        let preds: [fn(&u8, &u8) -> bool; 3] = [|a, b| a == b, |a, b| a <= b, |_, _| false];

        for pred in preds {
            let groups: Vec<_> = nums.iter().copied().group_adjacent(pred).collect();
            let expected: Vec<_> = nums.chunk_by(pred).map(<[u8]>::to_vec).collect();

            prop_assert_eq!(&groups, &expected);
            prop_assert_eq!(groups.concat(), nums.clone());
        }

        Ok(())
    }

    fn size_hint_bounds_group_count_impl(nums: Vec<u8>, advance: usize) -> TestCaseResult {
        let mut groups = nums.iter().group_adjacent(|a, b| a == b);
        for _ in 0..advance {
            groups.next();
        }

        let (lower, upper) = groups.size_hint();
        let remaining = groups.count();

        prop_assert!(lower <= remaining, "lower bound {lower} > {remaining}");
        prop_assert!(
            upper.is_none_or(|upper| remaining <= upper),
            "upper bound {upper:?} < {remaining}"
        );
        Ok(())
    }
}
