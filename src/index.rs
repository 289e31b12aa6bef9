// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for [`DynamicArray`](crate::DynamicArray).
//!
//! `Index` and `IndexMut` mirror slice behavior:
//! - panics on out-of-bounds;
//! - supports every slice index form (`usize` and all range types);
//! - views are restricted to the initialized prefix `[0..len)`.

// Crate imports
use crate::vec::DynamicArray;

// Core imports
use core::{
    ops::{Index, IndexMut},
    slice::SliceIndex,
};

impl<T, I: SliceIndex<[T]>> Index<I> for DynamicArray<T> {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        Index::index(self.as_slice(), index)
    }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for DynamicArray<T> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        IndexMut::index_mut(self.as_mut_slice(), index)
    }
}
