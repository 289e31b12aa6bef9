// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Human-readable dump of a [`DynamicArray`](crate::DynamicArray).
//!
//! The dump is a formatting adapter: it writes a header line with the length
//! and capacity, then every live element separated by a space. An empty array
//! renders a one-line notice instead.

// Crate imports
use crate::vec::DynamicArray;

// Core imports
use core::fmt;

/// `Display` adapter returned by [`DynamicArray::dump`].
pub struct Dump<'a, T>(&'a DynamicArray<T>);

impl<T: fmt::Display> fmt::Display for Dump<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arr = self.0;
        if arr.is_empty() {
            return f.write_str("DynamicArray is empty");
        }
        writeln!(
            f,
            "DynamicArray (len = {}, capacity = {}):",
            arr.len(),
            arr.capacity()
        )?;
        for item in arr {
            write!(f, " {item}")?;
        }
        Ok(())
    }
}

impl<T> DynamicArray<T> {
    /// Returns a [`Display`](fmt::Display) adapter rendering the live elements.
    ///
    /// ```rust
    /// use dynamic_array::DynamicArray;
    ///
    /// let a = DynamicArray::from([1, 2, 3]);
    /// assert_eq!(a.dump().to_string(), "DynamicArray (len = 3, capacity = 4):\n 1 2 3");
    /// ```
    #[inline]
    pub fn dump(&self) -> Dump<'_, T> {
        Dump(self)
    }

    /// Writes the [`dump`](Self::dump) to standard output.
    #[cfg(feature = "std")]
    pub fn print(&self)
    where
        T: fmt::Display,
    {
        std::println!("{}", self.dump());
    }
}

impl<T: fmt::Display> fmt::Display for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.dump(), f)
    }
}
