//! Re-exports commonly used items from this crate.
//!
//! This module is intended to be imported with a wildcard, providing
//! convenient access to the extension methods.
//!
//! # Example
//!
//! ```
//! use weblinq::prelude::*;
//!
//! assert_eq!((1..).fold_until(0, |sum, num| sum + num, |&sum| sum > 10), 15);
//! ```

pub use crate::iter::SeqExt;
