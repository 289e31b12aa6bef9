// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `DynamicArray` type and its inherent API.
//!
//! `DynamicArray<T>` is a growable vector backed by one exclusively owned heap
//! buffer. It tracks a logical length separately from the allocated capacity
//! and doubles the capacity whenever an append finds the buffer full.
//! Methods generally mirror slice/vector semantics, with fallible variants for
//! every operation that may allocate.

mod access;
mod clone;
mod extend;
mod from;
mod grow;
mod new;
mod pop;
mod push;
mod slice;
mod take;

// Crate imports
use crate::raw::RawBuf;

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    fmt,
    hash::{Hash, Hasher},
    ops::{Deref, DerefMut},
    ptr,
};

/// A growable, contiguous, heap-allocated array.
///
/// `DynamicArray<T>` owns a buffer of `capacity()` slots and tracks a logical
/// length `len ∈ 0..=capacity`. Conceptually it is a slice view over the
/// initialized prefix of a buffer that grows on demand:
///
/// - the buffer is a single heap allocation, never shared;
/// - capacity starts at 1 and only ever doubles;
/// - a `DynamicArray` is moved in O(1) (the buffer pointer moves, not the elements);
/// - cloning is a deep copy with the same capacity as the source.
///
/// # Layout and invariants
///
/// Internally, `DynamicArray<T>` maintains:
///
/// - a raw buffer of `capacity >= 1` slots; and
/// - a logical length `len` with `0 <= len <= capacity`.
///
/// Only the prefix `buf[..len]` is initialized and visible through safe APIs.
/// Methods such as [`as_slice`](Self::as_slice), [`as_mut_slice`](Self::as_mut_slice),
/// indexing, and iteration are all restricted to this prefix. Each element is
/// dropped exactly once: when it is removed, when the array is cleared, or when
/// the array itself is dropped.
///
/// # Complexity characteristics
///
/// - [`push_back`](Self::push_back) and [`emplace_back`](Self::emplace_back)
///   are amortized `O(1)`: growth doubles the capacity, so the total work over
///   `N` appends is `O(N)`.
/// - [`pop_back`](Self::pop_back) is `O(1)`.
/// - [`pop_front`](Self::pop_front) is `O(len)`: it shifts the tail left.
/// - [`clear`](Self::clear) is `O(len)` in drops and never reallocates.
///
/// # Error safety
///
/// A growth that fails leaves the buffer, the length, and the capacity exactly
/// as they were. The fallible `try_*` methods report the failure as an
/// [`Error`](crate::Error); the infallible ones abort through the standard
/// allocation-error handler.
///
/// # Examples
///
/// ```rust
/// use dynamic_array::DynamicArray;
///
/// let mut a: DynamicArray<String> = DynamicArray::new();
/// a.push_back("one".to_owned());
/// a.emplace_back(|| "two".to_owned());
/// assert_eq!(a.len(), 2);
/// assert_eq!(a.back(), "two");
///
/// let b = a.clone();
/// assert_eq!(a, b);
/// ```
pub struct DynamicArray<T> {
    pub(crate) buf: RawBuf<T>,
    pub(crate) len: usize,
}

impl<T> DynamicArray<T> {
    /// Returns the number of allocated slots, live or not.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Returns the current logical length.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Same as [`len`](Self::len).
    #[inline]
    pub const fn size(&self) -> usize {
        self.len
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    #[doc(alias = "empty")]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if the next append will grow the buffer.
    #[inline]
    pub const fn is_full(&self) -> bool {
        self.len == self.buf.capacity()
    }

    /// Returns `Some(&T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        self.as_slice().get(i)
    }

    /// Returns `Some(&mut T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(i)
    }

    // iterators
    /// Shorthand for `self.as_slice().iter()`.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Shorthand for `self.as_mut_slice().iter_mut()`.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Drops every live element and sets `len = 0`. The capacity is kept.
    pub fn clear(&mut self) {
        let len = self.len;
        // Shrink first so a panicking `Drop` cannot lead to a second drop.
        self.len = 0;
        // SAFETY: `[0, len)` was live; it is now outside the logical prefix and
        // is dropped exactly once here.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.buf.ptr(), len));
        }
    }

    /// Returns `true` if the array contains `x` (linear search on the initialized prefix).
    #[inline]
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().contains(x)
    }
}

impl<T> Drop for DynamicArray<T> {
    fn drop(&mut self) {
        // SAFETY: `[0, len)` is live and this is the last access to it. The
        // buffer itself is freed by `RawBuf`'s own `Drop`.
        unsafe { ptr::drop_in_place(self.as_mut_slice()) }
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicArray")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T: PartialEq<U>, U> PartialEq<DynamicArray<U>> for DynamicArray<T> {
    fn eq(&self, other: &DynamicArray<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: PartialEq<U>, U> PartialEq<[U]> for DynamicArray<T> {
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}
impl<T: PartialEq<U>, U> PartialEq<&[U]> for DynamicArray<T> {
    fn eq(&self, other: &&[U]) -> bool {
        self.as_slice() == *other
    }
}
impl<T: PartialEq<U>, U, const N: usize> PartialEq<[U; N]> for DynamicArray<T> {
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == &other[..]
    }
}
impl<T: Eq> Eq for DynamicArray<T> {}
impl<T: Ord> Ord for DynamicArray<T> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
impl<T: PartialOrd> PartialOrd for DynamicArray<T> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}
impl<T: Hash> Hash for DynamicArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T> Deref for DynamicArray<T> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl<T> DerefMut for DynamicArray<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for DynamicArray<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T> AsMut<[T]> for DynamicArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

// Borrow ergonomics (treat as a slice)
impl<T> Borrow<[T]> for DynamicArray<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T> BorrowMut<[T]> for DynamicArray<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}
