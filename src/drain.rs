use std::iter::FusedIterator;

use super::RingDeque;

/// A draining iterator over the elements of a `RingDeque`.
///
/// This `struct` is created by the [`drain`] method on [`RingDeque`]. See it's
/// documentation for more information.
///
/// [`drain`]: RingDeque::drain
#[derive(Debug)]
pub struct Drain<'a, T: Default> {
    inner: &'a mut RingDeque<T>,
}

impl<'a, T: Default> Drain<'a, T> {
    pub(super) fn new(deque: &'a mut RingDeque<T>) -> Self {
        Self { inner: deque }
    }
}

impl<T: Default> Iterator for Drain<'_, T> {
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

impl<T: Default> DoubleEndedIterator for Drain<'_, T> {
    fn next_back(&mut self) -> Option<T> {
        if self.inner.is_empty() {
            None
        } else {
            Some(self.inner.pop())
        }
    }
}

impl<T: Default> ExactSizeIterator for Drain<'_, T> {}

impl<T: Default> FusedIterator for Drain<'_, T> {}

impl<T: Default> Drop for Drain<'_, T> {
    fn drop(&mut self) {
        // elements that were not yielded are dropped here
        self.inner.clear();
    }
}
