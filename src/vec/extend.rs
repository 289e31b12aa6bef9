// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, raw, vec::DynamicArray};

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T: Clone> DynamicArray<T> {
    /// Appends clones of every element of `src`.
    ///
    /// Room is reserved up front, so an allocation failure leaves the array
    /// unchanged and no element is cloned.
    pub fn try_extend_from_slice(&mut self, src: &[T]) -> Result<(), Error> {
        self.try_reserve(src.len())?;
        for item in src {
            let len = self.len;
            // SAFETY: the reservation above guarantees `len < capacity` for
            // every element of `src`.
            unsafe { self.buf.ptr().add(len).write(item.clone()) };
            self.len = len + 1;
        }
        Ok(())
    }

    /// Infallible variant of [`try_extend_from_slice`](Self::try_extend_from_slice).
    #[track_caller]
    pub fn extend_from_slice(&mut self, src: &[T]) {
        if let Err(e) = self.try_extend_from_slice(src) {
            raw::handle_error(e);
        }
    }
}
