//! Early-stopping folds, adjacent grouping and fixed-size chunking for iterators.
//!
//! [`Iterator`] already knows how to [`fold`](Iterator::fold) and [`try_fold`](Iterator::try_fold),
//! and slices know how to [`chunk_by`](slice::chunk_by) and [`chunks`](slice::chunks).
//! This crate brings the same shapes to *any* iterator, including unbounded and single-pass ones.
//!
//! - [`fold_until()`](SeqExt::fold_until): accumulates until a predicate over the
//!   accumulated value says "enough".
//! - [`group_adjacent()`](SeqExt::group_adjacent): lazily splits an iterator into runs
//!   of neighbours that "belong together".
//! - [`chunk_by_size()`](SeqExt::chunk_by_size): lazily splits an iterator into
//!   chunks of a fixed size.
//!
//! # Motivation
//!
//! Suppose we pull records from a paged web API. We don't know how many pages there are
//! until we have fetched the first one. The usual answer is a `loop` with a handful of
//! mutable variables that live outside of it:
//!
//! ```
//! # struct Page { records: Vec<u32>, next: Option<u32> }
//! # fn fetch(token: u32) -> Page {
//! #     let records = (token * 3..token * 3 + 3).collect();
//! #     Page { records, next: (token < 2).then_some(token + 1) }
//! # }
//! let mut records = vec![];
//! let mut token = 0;
//! loop {
//!     let page = fetch(token);
//!     records.extend(page.records);
//!     match page.next {
//!         Some(next) => token = next,
//!         None => break,
//!     }
//! }
//!
//! assert_eq!(records, [0, 1, 2, 3, 4, 5, 6, 7, 8]);
//! ```
//!
//! With [`fold_until()`](SeqExt::fold_until), the state lives in the accumulator
//! and the termination condition is stated once:
//!
//! ```
//! use weblinq::prelude::*;
//!
//! # struct Page { records: Vec<u32>, next: Option<u32> }
//! # fn fetch(token: u32) -> Page {
//! #     let records = (token * 3..token * 3 + 3).collect();
//! #     Page { records, next: (token < 2).then_some(token + 1) }
//! # }
//! let (records, _) = (0..).fold_until(
//!     (vec![], Some(0)),
//!     |(mut records, token), _| {
//!         let page = fetch(token.unwrap_or_default());
//!         records.extend(page.records);
//!         (records, page.next)
//!     },
//!     |(_, next)| next.is_none(),
//! );
//!
//! assert_eq!(records, [0, 1, 2, 3, 4, 5, 6, 7, 8]);
//! ```
//!
//! When fetching can fail, [`try_fold_until()`](SeqExt::try_fold_until) hands back
//! the first error untouched.
//!
//! # Grouping
//!
//! ```
//! use weblinq::prelude::*;
//!
//! let runs: Vec<_> = [1, 2, 3, 10, 11, 20]
//!     .into_iter()
//!     .group_adjacent(|prev, curr| curr - prev == 1)
//!     .collect();
//!
//! assert_eq!(runs, [vec![1, 2, 3], vec![10, 11], vec![20]]);
//!
//! let chunks: Vec<_> = (1..=5).chunk_by_size(2)?.collect();
//!
//! assert_eq!(chunks, [vec![1, 2], vec![3, 4], vec![5]]);
//! # Ok::<(), weblinq::Error>(())
//! ```
//!
//! # Features
//!
//! - `std` (default): implies `alloc`.
//! - `alloc`: enables the operators that yield [`Vec`]s.
//!   Without it, only [`fold_until()`](SeqExt::fold_until) and
//!   [`try_fold_until()`](SeqExt::try_fold_until) are available.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(not(feature = "std"))]
extern crate core as std;

mod error;
pub mod iter;
pub mod prelude;
#[cfg(all(test, feature = "std"))]
mod test_utils;

pub use error::*;
pub use iter::*;

#[cfg(feature = "alloc")]
#[inline(always)]
pub(crate) const fn assert_iterator<I: Iterator>(iter: I) -> I {
    iter
}
