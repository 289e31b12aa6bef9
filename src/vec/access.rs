// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::DynamicArray};

impl<T> DynamicArray<T> {
    /// Bounds-checked access to element `index`.
    ///
    /// Returns [`Error::OutOfRange`] when `index >= len`.
    #[inline]
    pub fn at(&self, index: usize) -> Result<&T, Error> {
        let len = self.len;
        self.as_slice()
            .get(index)
            .ok_or(Error::OutOfRange { index, len })
    }

    /// Mutable variant of [`at`](Self::at).
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(Error::OutOfRange { index, len })
    }

    /// Returns the first element.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty. Use `first()` for the checked form.
    #[inline]
    #[track_caller]
    pub fn front(&self) -> &T {
        match self.as_slice().first() {
            Some(x) => x,
            None => empty_access("front"),
        }
    }

    /// Mutable variant of [`front`](Self::front).
    #[inline]
    #[track_caller]
    pub fn front_mut(&mut self) -> &mut T {
        match self.as_mut_slice().first_mut() {
            Some(x) => x,
            None => empty_access("front_mut"),
        }
    }

    /// Returns the last element.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty. Use `last()` for the checked form.
    #[inline]
    #[track_caller]
    pub fn back(&self) -> &T {
        match self.as_slice().last() {
            Some(x) => x,
            None => empty_access("back"),
        }
    }

    /// Mutable variant of [`back`](Self::back).
    #[inline]
    #[track_caller]
    pub fn back_mut(&mut self) -> &mut T {
        match self.as_mut_slice().last_mut() {
            Some(x) => x,
            None => empty_access("back_mut"),
        }
    }
}

#[cold]
#[track_caller]
fn empty_access(method: &str) -> ! {
    panic!("DynamicArray::{method} called on an empty array")
}
