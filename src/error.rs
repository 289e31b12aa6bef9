// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for `DynamicArray`.
//!
//! These errors represent allocation and bounds conditions.
//! They are `Copy` and implement `core::error::Error`.

// Core imports
use core::{alloc::Layout, error::Error as CoreError, fmt};

/// Errors returned by fallible operations on [`DynamicArray`](crate::DynamicArray).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The allocator could not satisfy a request for `layout`.
    ///
    /// The array that attempted the allocation is left unchanged.
    OutOfMemory {
        /// The layout that was passed to the allocator.
        layout: Layout,
    },
    /// The requested capacity does not fit in `isize::MAX` bytes.
    CapacityOverflow,
    /// A checked accessor was called with `index >= len`.
    OutOfRange {
        /// The requested index.
        index: usize,
        /// The length of the array at the time of the call.
        len: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfMemory { layout } => {
                write!(f, "memory allocation of {} bytes failed", layout.size())
            }
            Self::CapacityOverflow => f.write_str("capacity overflow"),
            Self::OutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
        }
    }
}

impl CoreError for Error {}
