//! A growable double-ended queue backed by a ring buffer.
//!
//! `RingDeque` keeps its elements in a single buffer whose length is always a power of two. Two
//! cursors count how many elements were ever written and read, and the physical slot of a cursor
//! is found by masking it with `capacity - 1`:
//! ```text
//!          write & mask            read & mask
//!                |                       |
//!                v                       v
//! +---+---+---+---+---+---+---+---+---+---+---+---+---+---+---+---+
//! | 8 | 9 |10 |   |   |   |   |   |   | 0 | 1 | 2 | 3 | 4 | 5 | 6 |
//! +---+---+---+---+---+---+---+---+---+---+---+---+---+---+---+---+
//! ```
//!
//! Elements are pushed at the tail and removed from either end with [`shift`] (head) or
//! [`pop`] (tail). When the buffer is full the contents are unwrapped into a new buffer of at
//! least twice the size, so pushing is amortized *O(1)*. The capacity starts at 8 and never
//! shrinks.
//!
//! Removing an element leaves `T::default()` in its slot, so the deque never holds on to values
//! it has handed out. For the same reason an empty deque answers [`shift`] and [`pop`] with
//! `T::default()` instead of `None`. Check [`is_empty`] first if a stored default has to be
//! told apart from an empty deque.
//!
//! ```
//! use ringdeque::RingDeque;
//!
//! let mut deque = RingDeque::new();
//! deque.push(1);
//! deque.push(2);
//! deque.push(3);
//! assert_eq!(deque.shift(), 1);
//! assert_eq!(deque.pop(), 3);
//! assert_eq!(deque.shift(), 2);
//! assert!(deque.is_empty());
//! assert_eq!(deque.shift(), 0);
//! ```
//!
//! [`shift`]: RingDeque::shift
//! [`pop`]: RingDeque::pop
//! [`is_empty`]: RingDeque::is_empty

#![forbid(unsafe_code)]

use core::hash::{Hash, Hasher};

use std::fmt;
use std::iter::Chain;
use std::mem;
use std::slice;

#[macro_use]
mod macros;

mod drain;
mod into_iter;

pub use drain::Drain;
pub use into_iter::IntoIter;


pub type Iter<'a, T> = Chain<slice::Iter<'a, T>, slice::Iter<'a, T>>;

pub type IterMut<'a, T> = Chain<slice::IterMut<'a, T>, slice::IterMut<'a, T>>;

/// Smallest number of slots the deque allocates.
const MIN_CAPACITY: u64 = 8;

/// A double-ended queue implemented with a growable ring buffer.
///
/// See the [module-level documentation](./index.html) for more details.
#[derive(Clone)]
pub struct RingDeque<T> {
    // Read and write are logical cursors, the physical slot of a cursor is `cursor & mask`.
    // The elements live in the logical range [read, write), so write - read is the length.
    // Both cursors use wrapping arithmetic and are reset to 0 whenever the buffer grows.
    // buf.len() is either 0 or a power of two >= MIN_CAPACITY, and mask == buf.len() - 1.
    // Every slot outside [read, write) holds T::default().
    buf: Vec<T>,
    read: u64,
    write: u64,
    mask: u64,
}

impl<T> RingDeque<T> {
    /// Creates an empty deque. No memory is allocated until the first push.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingDeque;
    ///
    /// let deque: RingDeque<i32> = RingDeque::new();
    /// assert_eq!(deque.capacity(), 0);
    /// ```
    pub const fn new() -> Self {
        Self { buf: Vec::new(), read: 0, write: 0, mask: 0 }
    }

    /// Returns the number of elements the deque can hold without reallocating.
    /// This is always zero or a power of two.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ringdeque::RingDeque;
    /// let deque: RingDeque<i32> = RingDeque::with_capacity(10);
    /// assert_eq!(deque.capacity(), 16);
    /// ```
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Returns the number of elements in the deque.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ringdeque::RingDeque;
    /// let deque = RingDeque::from([1, 2, 3]);
    /// assert_eq!(deque.len(), 3);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        // the length never exceeds buf.len() so it always fits
        self.write.wrapping_sub(self.read) as usize
    }

    /// Returns wether the deque is empty or not.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ringdeque::RingDeque;
    /// let mut deque = RingDeque::new();
    /// assert!(deque.is_empty());
    /// deque.push(42);
    /// assert!(!deque.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.read == self.write
    }

    /// Provides a reference to the element at the head of the deque, or `None` if it is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ringdeque::RingDeque;
    /// let mut deque = RingDeque::new();
    /// assert_eq!(deque.front(), None);
    /// deque.push(1);
    /// deque.push(2);
    /// assert_eq!(deque.front(), Some(&1));
    /// ```
    pub fn front(&self) -> Option<&T> {
        if self.is_empty() {
            None
        } else {
            Some(&self.buf[self.slot(self.read)])
        }
    }

    /// Provides a reference to the element at the tail of the deque, or `None` if it is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ringdeque::RingDeque;
    /// let mut deque = RingDeque::new();
    /// assert_eq!(deque.back(), None);
    /// deque.push(1);
    /// deque.push(2);
    /// assert_eq!(deque.back(), Some(&2));
    /// ```
    pub fn back(&self) -> Option<&T> {
        if self.is_empty() {
            None
        } else {
            Some(&self.buf[self.slot(self.write.wrapping_sub(1))])
        }
    }

    /// Returns a pair of slices which contain, in order, the contents of the deque. The second
    /// slice is only non-empty if the contents wrap around the end of the buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ringdeque::RingDeque;
    /// let mut deque = RingDeque::new();
    /// deque.extend(0..8);
    /// assert_eq!(deque.as_slices(), (&[0, 1, 2, 3, 4, 5, 6, 7][..], &[][..]));
    ///
    /// deque.shift();
    /// deque.shift();
    /// deque.push(8);
    /// assert_eq!(deque.as_slices(), (&[2, 3, 4, 5, 6, 7][..], &[8][..]));
    /// ```
    pub fn as_slices(&self) -> (&[T], &[T]) {
        let len = self.len();
        let (wrapped, front) = self.buf.split_at(self.slot(self.read));
        if front.len() >= len {
            (&front[..len], &wrapped[..0])
        } else {
            let back_len = len - front.len();
            (front, &wrapped[..back_len])
        }
    }

    /// Returns a mutable pair of slices which contain, in order, the contents of the deque.
    ///
    /// See the non-mutable version [`as_slices`] for details and examples.
    ///
    /// [`as_slices`]: RingDeque::as_slices
    pub fn as_mut_slices(&mut self) -> (&mut [T], &mut [T]) {
        let len = self.len();
        let head = self.slot(self.read);
        let (wrapped, front) = self.buf.split_at_mut(head);
        if front.len() >= len {
            (&mut front[..len], &mut wrapped[..0])
        } else {
            let back_len = len - front.len();
            (front, &mut wrapped[..back_len])
        }
    }

    /// Returns a front-to-back iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ringdeque::RingDeque;
    /// let deque = RingDeque::from([5, 3, 4]);
    /// assert_eq!(deque.iter().collect::<Vec<_>>(), [&5, &3, &4]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        let (front, back) = self.as_slices();
        front.iter().chain(back.iter())
    }

    /// Returns a front-to-back iterator that returns mutable references.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ringdeque::RingDeque;
    /// let mut deque = RingDeque::from([5, 3, 4]);
    /// deque.iter_mut().for_each(|el| *el -= 2);
    /// assert_eq!(deque, [3, 1, 2]);
    /// ```
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let (front, back) = self.as_mut_slices();
        front.iter_mut().chain(back.iter_mut())
    }

    #[inline]
    fn slot(&self, cursor: u64) -> usize {
        (cursor & self.mask) as usize
    }

    #[inline]
    fn remaining_cap(&self) -> usize {
        self.capacity() - self.len()
    }
}

impl<T: Default> RingDeque<T> {
    /// Creates an empty deque with space for at least `capacity` elements.
    ///
    /// The capacity is rounded up to a power of two, and to at least 8 unless it is zero.
    ///
    /// # Panics
    ///
    /// Panics if the rounded capacity overflows.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ringdeque::RingDeque;
    /// let deque: RingDeque<i32> = RingDeque::with_capacity(3);
    /// assert_eq!(deque.capacity(), 8);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        let mut deque = Self::new();
        deque.reserve(capacity);
        deque
    }

    /// Reserves capacity for at least `additional` more elements. Does nothing if the capacity
    /// is already sufficient, otherwise the contents are moved into a new, larger buffer.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity overflows.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ringdeque::RingDeque;
    /// let mut deque = RingDeque::from([1, 2, 3, 4]);
    /// deque.reserve(10);
    /// assert_eq!(deque.capacity(), 16);
    /// ```
    pub fn reserve(&mut self, additional: usize) {
        if self.remaining_cap() >= additional {
            return;
        }
        let len = self.len();
        let buf = self.linearise(additional);
        self.adopt(buf, len);
    }

    /// Appends an element to the tail of the deque, growing the buffer if it is full.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ringdeque::RingDeque;
    /// let mut deque = RingDeque::new();
    /// deque.push(1);
    /// deque.push(2);
    /// assert_eq!(deque, [1, 2]);
    /// ```
    pub fn push(&mut self, value: T) {
        if self.remaining_cap() >= 1 {
            let index = self.slot(self.write);
            self.buf[index] = value;
            self.write = self.write.wrapping_add(1);
            return;
        }

        let len = self.len();
        let mut buf = self.linearise(1);
        buf[len] = value;
        self.adopt(buf, len + 1);
    }

    /// Removes the element at the head of the deque and returns it. Returns `T::default()` if the
    /// deque is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ringdeque::RingDeque;
    /// let mut deque = RingDeque::from([1, 2]);
    /// assert_eq!(deque.shift(), 1);
    /// assert_eq!(deque.shift(), 2);
    /// assert_eq!(deque.shift(), 0);
    /// ```
    pub fn shift(&mut self) -> T {
        if self.is_empty() {
            return T::default();
        }

        let index = self.slot(self.read);
        self.read = self.read.wrapping_add(1);
        mem::take(&mut self.buf[index])
    }

    /// Removes the element at the tail of the deque and returns it. Returns `T::default()` if the
    /// deque is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ringdeque::RingDeque;
    /// let mut deque = RingDeque::from([1, 2]);
    /// assert_eq!(deque.pop(), 2);
    /// assert_eq!(deque.pop(), 1);
    /// assert_eq!(deque.pop(), 0);
    /// ```
    pub fn pop(&mut self) -> T {
        if self.is_empty() {
            return T::default();
        }

        self.write = self.write.wrapping_sub(1);
        let index = self.slot(self.write);
        mem::take(&mut self.buf[index])
    }

    /// Removes all elements. The capacity is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ringdeque::RingDeque;
    /// let mut deque = RingDeque::from([1, 2, 3]);
    /// deque.clear();
    /// assert!(deque.is_empty());
    /// assert_eq!(deque.capacity(), 8);
    /// ```
    pub fn clear(&mut self) {
        while !self.is_empty() {
            self.shift();
        }
    }

    /// Removes all elements from the deque and returns them as a front-to-back iterator.
    ///
    /// The deque is empty afterwards even if the iterator is dropped before it is exhausted.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ringdeque::RingDeque;
    /// let mut deque = RingDeque::from([1, 2, 3]);
    /// let drained = deque.drain().collect::<Vec<_>>();
    /// assert_eq!(drained, [1, 2, 3]);
    /// assert!(deque.is_empty());
    /// ```
    pub fn drain(&mut self) -> Drain<'_, T> {
        Drain::new(self)
    }

    /// Unwraps the contents into a new buffer with room for at least `n` more elements.
    ///
    /// The returned buffer is completely filled, its length is the new power of two capacity.
    /// The elements occupy its first `self.len()` slots in logical order, every other slot holds
    /// `T::default()`. The slots of the old buffer are left holding defaults as well.
    fn linearise(&mut self, n: usize) -> Vec<T> {
        let length = self.write.wrapping_sub(self.read);
        let need = length.checked_add(n as u64).unwrap_or_else(|| capacity_overflow());
        let capacity = usize::try_from(grown_capacity(need)).unwrap_or_else(|_| capacity_overflow());

        // allocate before touching any element so a failure leaves the deque as it was
        let mut buf = Vec::with_capacity(capacity);
        buf.resize_with(capacity, T::default);

        let (front, back) = self.as_mut_slices();
        let (buf_front, buf_back) = buf.split_at_mut(front.len());
        buf_front.swap_with_slice(front);
        buf_back[..back.len()].swap_with_slice(back);
        buf
    }

    /// Replaces the buffer with one returned by `linearise` that holds `len` elements.
    fn adopt(&mut self, buf: Vec<T>, len: usize) {
        debug_assert!(buf.len().is_power_of_two());
        debug_assert!(len <= buf.len());
        self.mask = buf.len() as u64 - 1;
        self.buf = buf;
        self.read = 0;
        self.write = len as u64;
    }
}

/// Rounds `need` up to the next power of two, but never below `MIN_CAPACITY`.
fn grown_capacity(need: u64) -> u64 {
    match need.checked_next_power_of_two() {
        Some(capacity) => capacity.max(MIN_CAPACITY),
        None => capacity_overflow(),
    }
}

#[cold]
fn capacity_overflow() -> ! {
    panic!("capacity overflow");
}

impl<T: fmt::Debug> fmt::Debug for RingDeque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

impl<T> Default for RingDeque<T> {
    /// Creates an empty deque.
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Default> Extend<T> for RingDeque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.reserve(lower);
        for element in iter {
            self.push(element);
        }
    }
}

impl<'a, T: 'a + Copy + Default> Extend<&'a T> for RingDeque<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T: Default> From<Vec<T>> for RingDeque<T> {
    /// Moves the elements of a [`Vec<T>`] into a new deque. The vector's buffer is not reused
    /// because its capacity is in general not a power of two.
    fn from(other: Vec<T>) -> Self {
        other.into_iter().collect()
    }
}

impl<T: Default> From<RingDeque<T>> for Vec<T> {
    /// Turns a [`RingDeque<T>`] into a [`Vec<T>`] with the elements in front-to-back order.
    ///
    /// [`RingDeque<T>`]: crate::RingDeque
    fn from(other: RingDeque<T>) -> Self {
        other.into_iter().collect()
    }
}

impl<T: Default, const N: usize> From<[T; N]> for RingDeque<T> {
    /// Converts a `[T; N]` into a `RingDeque<T>`.
    fn from(arr: [T; N]) -> Self {
        let mut deque = Self::with_capacity(N);
        deque.extend(arr);
        deque
    }
}

impl<T: Default> FromIterator<T> for RingDeque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Self::new();
        deque.extend(iter);
        deque
    }
}

impl<T: Hash> Hash for RingDeque<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        self.iter().for_each(|elem| elem.hash(state));
    }
}

impl<T: Default> IntoIterator for RingDeque<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Consumes the deque into a front-to-back iterator yielding elements by value.
    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a RingDeque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut RingDeque<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

impl<T: PartialEq> PartialEq for RingDeque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for RingDeque<T> {}

__impl_slice_eq! { [] RingDeque<T>, Vec<U>, }
__impl_slice_eq! { [] RingDeque<T>, &[U], }
__impl_slice_eq! { [] RingDeque<T>, &mut [U], }
__impl_slice_eq! { [const N: usize] RingDeque<T>, [U; N], }
__impl_slice_eq! { [const N: usize] RingDeque<T>, &[U; N], }
__impl_slice_eq! { [const N: usize] RingDeque<T>, &mut [U; N], }
