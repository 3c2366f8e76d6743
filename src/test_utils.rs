use std::cell::Cell;

/// An [`Iterator`] that records how many items have been pulled from the underlying iterator.
///
/// The counter is borrowed, so it can still be read after the iterator
/// has been moved into an adaptor.
pub struct Tally<'a, I> {
    iter: I,
    pulled: &'a Cell<usize>,
}

impl<'a, I> Tally<'a, I> {
    pub fn new(iter: I, pulled: &'a Cell<usize>) -> Self {
        Self { iter, pulled }
    }
}

impl<I: Iterator> Iterator for Tally<'_, I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.iter.next()?;
        self.pulled.set(self.pulled.get() + 1);
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

/// A non-fused [`Iterator`] that yields `None` wherever the underlying iterator yields `None`,
/// and keeps going afterwards.
///
/// Used to check that adaptors fuse themselves.
pub struct Gappy<I>(I);

impl<I> Gappy<I> {
    pub fn new(iter: impl IntoIterator<IntoIter = I>) -> Self {
        Self(iter.into_iter())
    }
}

impl<T, I: Iterator<Item = Option<T>>> Iterator for Gappy<I> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().flatten()
    }
}
