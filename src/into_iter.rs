use std::iter::FusedIterator;

use super::RingDeque;

/// An owning iterator over the elements of a `RingDeque`.
///
/// This `struct` is created by the [`into_iter`] method on [`RingDeque`] (provided by the
/// [`IntoIterator`] trait). See it's documentation for more information.
///
/// [`into_iter`]: RingDeque::into_iter
/// [`IntoIterator`]: core::iter::IntoIterator
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    inner: RingDeque<T>,
}

impl<T> IntoIter<T> {
    pub(super) fn new(inner: RingDeque<T>) -> Self {
        IntoIter { inner }
    }
}

impl<T: Default> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.inner.is_empty() {
            None
        } else {
            Some(self.inner.shift())
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.inner.len();
        (len, Some(len))
    }
}

impl<T: Default> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.inner.is_empty() {
            None
        } else {
            Some(self.inner.pop())
        }
    }
}

impl<T: Default> ExactSizeIterator for IntoIter<T> {}

impl<T: Default> FusedIterator for IntoIter<T> {}
