// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`DynamicArray`](crate::DynamicArray).
//!
//! - `IntoIter<T>` yields by value and supports `DoubleEndedIterator`,
//!   `ExactSizeIterator`, and `FusedIterator`. Elements it never yields are
//!   dropped with it, and it frees the buffer.
//! - `&DynamicArray` and `&mut DynamicArray` iterate as slices.

// Crate imports
use crate::{raw::RawBuf, vec::DynamicArray};

// Core imports
use core::{fmt, iter::FusedIterator, mem::ManuallyDrop, ptr};

/// Owned iterator returned by `DynamicArray::into_iter()`.
///
/// Yields elements by value from front to back and supports double-ended
/// iteration via [`DoubleEndedIterator`].
pub struct IntoIter<T> {
    // Slots `[front, back)` are live; everything else is moved out or uninitialized.
    pub(crate) buf: RawBuf<T>,
    pub(crate) front: usize,
    pub(crate) back: usize, // exclusive
}

impl<T> IntoIter<T> {
    /// Returns the elements not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `[front, back)` is live and within the buffer.
        unsafe {
            core::slice::from_raw_parts(self.buf.ptr().add(self.front), self.back - self.front)
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        if self.front < self.back {
            let i = self.front;
            self.front += 1;
            // SAFETY: slot `i` was live and is now outside `[front, back)`.
            Some(unsafe { ptr::read(self.buf.ptr().add(i)) })
        } else {
            None
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.back - self.front;
        (rem, Some(rem))
    }
    fn nth(&mut self, n: usize) -> Option<T> {
        let skip = n.min(self.back - self.front);
        let start = self.front;
        self.front += skip;
        // SAFETY: `[start, start + skip)` was live and is now outside
        // `[front, back)`, so each skipped element is dropped exactly once.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.buf.ptr().add(start),
                skip,
            ));
        }
        self.next()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.front < self.back {
            self.back -= 1;
            // SAFETY: slot `back` was live and is now outside `[front, back)`.
            Some(unsafe { ptr::read(self.buf.ptr().add(self.back)) })
        } else {
            None
        }
    }
}
impl<T> FusedIterator for IntoIter<T> {}
impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let rem = self.back - self.front;
        let start = self.front;
        self.front = self.back;
        // SAFETY: `[start, start + rem)` is exactly the set of live slots left.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.buf.ptr().add(start),
                rem,
            ));
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
impl<'a, T> IntoIterator for &'a mut DynamicArray<T> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        let this = ManuallyDrop::new(self);
        // SAFETY: `this` is never dropped, so ownership of the buffer (and of
        // the live prefix) moves into the iterator exactly once.
        let buf = unsafe { ptr::read(&this.buf) };
        IntoIter {
            buf,
            front: 0,
            back: this.len,
        }
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut a = Self::new();
        a.extend(iter);
        a
    }
}
