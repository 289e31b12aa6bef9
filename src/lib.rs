// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `dynamic-array`
//!
//! A growable, heap-backed, contiguous array type with **doubling growth** and
//! **fallible allocation** on every growth path.
//!
//! The core type, [`DynamicArray<T>`], owns a single heap buffer of
//! `capacity()` slots and tracks a logical length `len ∈ 0..=capacity`. Only the
//! prefix `[0..len)` is initialized; the tail is never read.
//!
//! ## Capacity law
//!
//! - A new array has `len() == 0` and `capacity() == 1`. The array is never
//!   backed by a zero-capacity buffer.
//! - When an append finds `len() == capacity()`, the capacity doubles.
//!   After `N` pushes on a fresh array, `capacity() == max(N, 1).next_power_of_two()`.
//! - Capacity never shrinks implicitly: [`DynamicArray::clear`],
//!   [`DynamicArray::pop_back`] and [`DynamicArray::pop_front`] keep the buffer.
//!
//! ## Fallible vs infallible operations
//!
//! Every operation that may allocate comes in two flavors:
//!
//! - **Fallible** (`try_*`): return [`Error::OutOfMemory`] or
//!   [`Error::CapacityOverflow`] and leave the array unchanged (e.g.
//!   [`DynamicArray::try_push_back`], [`DynamicArray::try_emplace_back`],
//!   [`DynamicArray::try_reserve`], [`DynamicArray::try_clone`],
//!   [`DynamicArray::try_new`]).
//! - **Infallible**: abort through [`alloc::alloc::handle_alloc_error`] on
//!   allocation failure and panic on capacity overflow, like `Vec` (e.g.
//!   [`DynamicArray::push_back`], [`DynamicArray::emplace_back`],
//!   [`DynamicArray::reserve`], [`Clone`], [`DynamicArray::new`]).
//!
//! ## Range and indexing behavior
//!
//! - Indexing (`a[i]`, `a[start..end]`, …) **panics** on out-of-bounds, exactly
//!   like built-in slices. Unchecked access goes through the slice method
//!   `get_unchecked` (reachable through `Deref<Target = [T]>`).
//! - [`DynamicArray::at`] / [`DynamicArray::at_mut`] return
//!   [`Error::OutOfRange`] instead of panicking.
//! - [`DynamicArray::front`] / [`DynamicArray::back`] panic on an empty array;
//!   use `first()` / `last()` for the `Option` form.
//!
//! ## Features
//!
//! - `std` (default): enables [`DynamicArray::print`]. Without it the crate is
//!   `no_std` and only needs `alloc`.
//! - `serde`: `Serialize` / `Deserialize` for `DynamicArray<T>` as a sequence.
//! - `log`: emits `trace`/`debug` records for buffer allocation and growth.
//!
//! ## Example
//!
//! ```rust
//! use dynamic_array::DynamicArray;
//!
//! let mut a = DynamicArray::new();
//! a.push_back(1);
//! a.push_back(2);
//! a.push_back(3);
//! assert_eq!(a.as_slice(), &[1, 2, 3]);
//! assert_eq!(a.capacity(), 4);
//!
//! assert_eq!(a.pop_front(), Some(1));
//! assert!(a.at(5).is_err());
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(unsafe_op_in_unsafe_fn)]

extern crate alloc;

// Logging shims. These compile to nothing unless the `log` feature is on.
macro_rules! trace {
    ($($arg:tt)+) => {{
        #[cfg(feature = "log")]
        ::log::trace!($($arg)+);
    }};
}

macro_rules! debug {
    ($($arg:tt)+) => {{
        #[cfg(feature = "log")]
        ::log::debug!($($arg)+);
    }};
}

// Modules
mod error;
mod index;
mod iter;
mod raw;
mod render;
#[cfg(feature = "serde")]
mod serde;
#[cfg(test)]
mod testing;
mod vec;

// Public exports (crate API surface)
pub use error::Error;
pub use iter::IntoIter;
pub use render::Dump;
pub use vec::DynamicArray;
