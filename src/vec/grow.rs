// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::Error,
    raw::{self, RawBuf},
    vec::DynamicArray,
};

impl<T> DynamicArray<T> {
    /// Doubles the capacity, keeping every live element at its index.
    ///
    /// On error the array is unchanged.
    pub(crate) fn try_expand(&mut self) -> Result<(), Error> {
        let new_cap = next_capacity(self.capacity())?;
        self.buf.try_grow_to(new_cap)
    }

    /// Makes room for at least `additional` more elements.
    ///
    /// The capacity is doubled as many times as needed, so it stays
    /// `capacity() * 2^k` for some `k`; a single reallocation is made.
    ///
    /// Returns [`Error::CapacityOverflow`] or [`Error::OutOfMemory`] and leaves
    /// the array unchanged on failure.
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), Error> {
        let required = self
            .len
            .checked_add(additional)
            .ok_or(Error::CapacityOverflow)?;

        let mut new_cap = self.capacity();
        while new_cap < required {
            new_cap = next_capacity(new_cap)?;
        }
        self.buf.try_grow_to(new_cap)
    }

    /// Infallible variant of [`try_reserve`](Self::try_reserve).
    ///
    /// # Panics
    ///
    /// Panics on capacity overflow; aborts on allocation failure.
    #[track_caller]
    pub fn reserve(&mut self, additional: usize) {
        if let Err(e) = self.try_reserve(additional) {
            raw::handle_error(e);
        }
    }

    /// Allocates a fresh, empty array with exactly `cap.max(1)` slots.
    pub(crate) fn try_with_exact_capacity(cap: usize) -> Result<Self, Error> {
        Ok(Self {
            buf: RawBuf::try_with_capacity(cap)?,
            len: 0,
        })
    }
}

fn next_capacity(cap: usize) -> Result<usize, Error> {
    cap.max(1).checked_mul(2).ok_or(Error::CapacityOverflow)
}

#[cfg(test)]
mod tests {
    use crate::{DynamicArray, Error};

    #[test]
    fn test_reserve_doubles_until_it_fits() {
        let mut a: DynamicArray<u8> = DynamicArray::new();
        a.reserve(5);
        assert_eq!(a.capacity(), 8);
        assert!(a.is_empty());

        // Already enough room: nothing changes.
        a.reserve(8);
        assert_eq!(a.capacity(), 8);

        a.push_back(1);
        a.reserve(8);
        assert_eq!(a.capacity(), 16);
    }

    #[test]
    fn test_try_reserve_overflow_leaves_array_unchanged() {
        let mut a: DynamicArray<u32> = [1, 2, 3].into();
        let cap = a.capacity();

        assert_eq!(a.try_reserve(usize::MAX), Err(Error::CapacityOverflow));
        assert_eq!(a.try_reserve(usize::MAX / 2), Err(Error::CapacityOverflow));
        assert_eq!(a.capacity(), cap);
        assert_eq!(a.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_try_expand_doubles_once() {
        let mut a: DynamicArray<u16> = DynamicArray::new();
        a.try_expand().unwrap();
        assert_eq!(a.capacity(), 2);
        a.try_expand().unwrap();
        assert_eq!(a.capacity(), 4);
    }

    #[test]
    #[should_panic(expected = "capacity overflow")]
    fn test_reserve_panics_on_overflow() {
        let mut a: DynamicArray<u64> = DynamicArray::new();
        a.reserve(usize::MAX);
    }
}
