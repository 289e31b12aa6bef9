// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, raw, vec::DynamicArray};

impl<T> DynamicArray<T> {
    /// Appends `value`, doubling the capacity first if the array is full.
    ///
    /// Amortized `O(1)`. Aborts on allocation failure; see
    /// [`try_push_back`](Self::try_push_back).
    #[inline]
    #[track_caller]
    pub fn push_back(&mut self, value: T) {
        if let Err(e) = self.try_push_back(value) {
            raw::handle_error(e);
        }
    }

    /// Appends `value`, returning an error if the buffer had to grow and could not.
    ///
    /// On error the array is unchanged and `value` is dropped.
    #[inline]
    pub fn try_push_back(&mut self, value: T) -> Result<(), Error> {
        self.try_emplace_back(|| value).map(|_| ())
    }

    /// Appends the value produced by `make`, writing it directly into the new
    /// slot, and returns a mutable reference to it.
    ///
    /// The array grows before `make` runs. If `make` panics the length is unchanged.
    #[inline]
    #[track_caller]
    pub fn emplace_back<F>(&mut self, make: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        match self.try_emplace_back(make) {
            Ok(slot) => slot,
            Err(e) => raw::handle_error(e),
        }
    }

    /// Fallible variant of [`emplace_back`](Self::emplace_back).
    ///
    /// `make` is not called when growth fails.
    pub fn try_emplace_back<F>(&mut self, make: F) -> Result<&mut T, Error>
    where
        F: FnOnce() -> T,
    {
        if self.is_full() {
            self.try_expand()?;
        }

        let len = self.len;
        // SAFETY: `len < capacity` after the expansion above, so the slot is in
        // bounds and uninitialized.
        let slot = unsafe {
            let slot = self.buf.ptr().add(len);
            slot.write(make());
            &mut *slot
        };
        self.len = len + 1;
        Ok(slot)
    }
}
