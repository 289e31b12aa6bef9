// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::DynamicArray;

// Core imports
use core::mem;

impl<T> DynamicArray<T> {
    /// Moves the contents out, leaving `self` empty with capacity 1.
    ///
    /// The buffer, length and capacity are handed over as-is; no element is
    /// copied. `self` gets its own freshly allocated one-slot buffer.
    #[inline]
    #[must_use = "use `clear` to drop the contents in place"]
    pub fn take(&mut self) -> Self {
        mem::replace(self, Self::new())
    }

    /// Drops the current contents and takes over `other`'s buffer, leaving
    /// `other` empty with capacity 1.
    #[inline]
    pub fn move_from(&mut self, other: &mut Self) {
        *self = other.take();
    }
}
