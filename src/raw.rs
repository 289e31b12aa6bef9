// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The owned heap buffer behind [`DynamicArray`](crate::DynamicArray).
//!
//! `RawBuf<T>` owns `cap` contiguous slots of `T` and nothing else: it never
//! reads, writes or drops elements. Tracking which slots are live is the job
//! of the owning container.

// Crate imports
use crate::error::Error;

// Alloc imports
use alloc::alloc::{self as heap, Layout};

// Core imports
use core::{marker::PhantomData, mem, ptr::NonNull};

// Invariants:
// - `cap >= 1`.
// - For sized `T`, `ptr` was returned by the global allocator for
//   `Layout::array::<T>(cap)` and is freed exactly once, in `Drop`.
// - For zero-sized `T`, `ptr` is dangling and `cap` is purely logical.
pub(crate) struct RawBuf<T> {
    ptr: NonNull<T>,
    cap: usize,
    _marker: PhantomData<T>,
}

// SAFETY: `RawBuf<T>` uniquely owns its allocation, like `Box<[T]>`.
unsafe impl<T: Send> Send for RawBuf<T> {}
// SAFETY: shared access hands out nothing beyond what `&[T]` would.
unsafe impl<T: Sync> Sync for RawBuf<T> {}

impl<T> RawBuf<T> {
    const IS_ZST: bool = mem::size_of::<T>() == 0;

    /// Allocates `cap.max(1)` uninitialized slots.
    pub(crate) fn try_with_capacity(cap: usize) -> Result<Self, Error> {
        let cap = cap.max(1);
        if Self::IS_ZST {
            return Ok(Self {
                ptr: NonNull::dangling(),
                cap,
                _marker: PhantomData,
            });
        }

        let layout = layout_for::<T>(cap)?;
        // SAFETY: `layout` has a non-zero size since `T` is sized and `cap >= 1`.
        let raw = unsafe { heap::alloc(layout) };
        let Some(ptr) = NonNull::new(raw.cast::<T>()) else {
            debug!("allocation of {} bytes failed", layout.size());
            return Err(Error::OutOfMemory { layout });
        };
        trace!("allocated buffer of {} slots ({} bytes)", cap, layout.size());

        Ok(Self {
            ptr,
            cap,
            _marker: PhantomData,
        })
    }

    /// Infallible wrapper over [`try_with_capacity`](Self::try_with_capacity).
    pub(crate) fn with_capacity(cap: usize) -> Self {
        Self::try_with_capacity(cap).unwrap_or_else(|e| handle_error(e))
    }

    #[inline]
    pub(crate) const fn ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    #[inline]
    pub(crate) const fn capacity(&self) -> usize {
        self.cap
    }

    /// Reallocates to exactly `new_cap` slots, moving the bytes of the old
    /// allocation over.
    ///
    /// On error nothing changes: the old allocation is still owned and still
    /// holds every slot it held before.
    pub(crate) fn try_grow_to(&mut self, new_cap: usize) -> Result<(), Error> {
        debug_assert!(new_cap >= self.cap);
        if new_cap == self.cap {
            return Ok(());
        }
        if Self::IS_ZST {
            self.cap = new_cap;
            return Ok(());
        }

        let old = layout_for::<T>(self.cap)?;
        let new = layout_for::<T>(new_cap)?;
        // SAFETY: `ptr` was allocated by the global allocator with `old`, and
        // `new.size()` is non-zero and at most `isize::MAX` (checked by `Layout::array`).
        let raw = unsafe { heap::realloc(self.ptr.as_ptr().cast(), old, new.size()) };
        let Some(ptr) = NonNull::new(raw.cast::<T>()) else {
            debug!(
                "growing buffer from {} to {} slots failed ({} bytes)",
                self.cap,
                new_cap,
                new.size()
            );
            return Err(Error::OutOfMemory { layout: new });
        };
        trace!("grew buffer from {} to {} slots", self.cap, new_cap);

        self.ptr = ptr;
        self.cap = new_cap;
        Ok(())
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        if Self::IS_ZST {
            return;
        }
        // The layout was valid when the buffer was allocated with this `cap`.
        if let Ok(layout) = layout_for::<T>(self.cap) {
            // SAFETY: `ptr` was allocated with `layout` and is freed only here.
            unsafe { heap::dealloc(self.ptr.as_ptr().cast(), layout) };
        }
    }
}

fn layout_for<T>(cap: usize) -> Result<Layout, Error> {
    Layout::array::<T>(cap).map_err(|_| Error::CapacityOverflow)
}

/// Sends allocation errors down the standard fatal path.
///
/// Used by the infallible twins of the `try_*` methods.
#[cold]
#[track_caller]
pub(crate) fn handle_error(err: Error) -> ! {
    match err {
        Error::OutOfMemory { layout } => heap::handle_alloc_error(layout),
        other => panic!("{other}"),
    }
}
