// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::DynamicArray;

// Core imports
use core::ptr;

impl<T> DynamicArray<T> {
    /// Removes and returns the last element, or `None` if the array is empty.
    ///
    /// Popping an empty array is a no-op. The capacity is kept.
    #[inline]
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: the old last slot `len` was live; it is now outside the
        // logical prefix, so ownership moves out exactly once.
        Some(unsafe { ptr::read(self.buf.ptr().add(self.len)) })
    }

    /// Removes and returns the first element, shifting the rest one slot left.
    ///
    /// `O(len)`. Returns `None` (and does nothing) if the array is empty.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let len = self.len;
        let base = self.buf.ptr();
        // SAFETY: slot 0 is live and is moved out once; the tail `[1, len)` is
        // then shifted onto `[0, len - 1)` with an overlap-safe copy, leaving
        // slot `len - 1` logically uninitialized.
        let out = unsafe {
            let out = ptr::read(base);
            ptr::copy(base.add(1), base, len - 1);
            out
        };
        self.len = len - 1;
        Some(out)
    }
}
