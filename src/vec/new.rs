// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, raw::RawBuf, vec::DynamicArray};

impl<T> DynamicArray<T> {
    /// Constructs an empty array backed by a single uninitialized slot.
    ///
    /// Aborts through [`handle_alloc_error`](alloc::alloc::handle_alloc_error)
    /// if that slot cannot be allocated; see [`try_new`](Self::try_new).
    #[inline]
    pub fn new() -> Self {
        Self {
            buf: RawBuf::with_capacity(1),
            len: 0,
        }
    }

    /// Fallible variant of [`new`](Self::new).
    #[inline]
    pub fn try_new() -> Result<Self, Error> {
        Ok(Self {
            buf: RawBuf::try_with_capacity(1)?,
            len: 0,
        })
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}
