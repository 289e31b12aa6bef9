// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::DynamicArray;

impl<T, const N: usize> From<[T; N]> for DynamicArray<T> {
    fn from(src: [T; N]) -> Self {
        let mut out = Self::new();
        out.extend(src);
        out
    }
}

impl<T: Clone> From<&[T]> for DynamicArray<T> {
    fn from(src: &[T]) -> Self {
        let mut out = Self::new();
        out.extend_from_slice(src);
        out
    }
}
