//! The operators of this crate.
//!
//! Every operator is available both as a method of [`SeqExt`] and as a free function
//! taking any [`IntoIterator`].

#[cfg(feature = "alloc")]
mod chunk_by_size;
mod fold_until;
#[cfg(feature = "alloc")]
mod group_adjacent;
mod iterator_ext;
#[cfg(feature = "alloc")]
mod stripe;
mod try_fold_until;

#[cfg(feature = "alloc")]
pub use chunk_by_size::*;
pub use fold_until::*;
#[cfg(feature = "alloc")]
pub use group_adjacent::*;
pub use iterator_ext::*;
#[cfg(feature = "alloc")]
pub use stripe::*;
pub use try_fold_until::*;
