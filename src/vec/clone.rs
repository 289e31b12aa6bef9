// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, raw, vec::DynamicArray};

impl<T: Clone> DynamicArray<T> {
    /// Deep-copies the array into a fresh buffer of the same capacity.
    ///
    /// Returns [`Error::OutOfMemory`] if the new buffer cannot be allocated.
    /// If an element's `clone` panics, the elements cloned so far are dropped
    /// and the new buffer is released.
    pub fn try_clone(&self) -> Result<Self, Error> {
        let mut out = Self::try_with_exact_capacity(self.capacity())?;
        for item in self.iter() {
            // SAFETY: `out.len < self.len <= out.capacity()`, so the slot is in
            // bounds and uninitialized. `len` is bumped only after the write.
            unsafe { out.buf.ptr().add(out.len).write(item.clone()) };
            out.len += 1;
        }
        Ok(out)
    }
}

impl<T: Clone> Clone for DynamicArray<T> {
    #[track_caller]
    fn clone(&self) -> Self {
        self.try_clone().unwrap_or_else(|e| raw::handle_error(e))
    }

    /// Replaces the contents of `self` with a deep copy of `source`.
    ///
    /// The copy is built first; the old elements and buffer are released only
    /// once it exists.
    fn clone_from(&mut self, source: &Self) {
        *self = source.clone();
    }
}

#[cfg(test)]
mod tests {
    use crate::{DynamicArray, testing::Drops};
    use alloc::string::String;

    #[test]
    fn test_clone_keeps_len_and_capacity() {
        let mut a = DynamicArray::new();
        for i in 0..5 {
            a.push_back(i);
        }
        let c = a.clone();
        assert_eq!(c.len(), 5);
        assert_eq!(c.capacity(), 8);
        assert_eq!(c, a);
    }

    #[test]
    fn test_clone_is_independent_copy() {
        let mut a: DynamicArray<String> = DynamicArray::new();
        a.push_back("a".into());
        a.push_back("b".into());

        let mut c = a.clone();
        a[0].push('!');
        c[1].push('?');
        c.push_back("c".into());

        assert_eq!(a, ["a!", "b"]);
        assert_eq!(c, ["a", "b?", "c"]);
        assert_ne!(a.as_ptr(), c.as_ptr());
    }

    #[test]
    fn test_clone_from_replaces_and_drops_old_contents() {
        let drops = Drops::new();
        let mut dst = DynamicArray::new();
        dst.push_back(drops.track(1));
        dst.push_back(drops.track(2));
        dst.push_back(drops.track(3));

        let mut src = DynamicArray::new();
        src.push_back(drops.track(7));

        dst.clone_from(&src);
        assert_eq!(drops.get(), 3);
        assert_eq!(dst.len(), 1);
        assert_eq!(dst.capacity(), 1);
        assert_eq!(dst.front().id, 7);

        drop(dst);
        drop(src);
        assert_eq!(drops.get(), 5);
    }

    #[test]
    fn test_try_clone_of_empty() {
        let a: DynamicArray<String> = DynamicArray::new();
        let c = a.try_clone().unwrap();
        assert!(c.is_empty());
        assert_eq!(c.capacity(), 1);
    }

    #[test]
    fn test_clone_panic_drops_partial_copy() {
        use core::sync::atomic::{AtomicUsize, Ordering};

        static CLONES: AtomicUsize = AtomicUsize::new(0);
        static DROPS: AtomicUsize = AtomicUsize::new(0);

        struct Fragile;
        impl Clone for Fragile {
            fn clone(&self) -> Self {
                if CLONES.fetch_add(1, Ordering::SeqCst) == 2 {
                    panic!("clone failed");
                }
                Fragile
            }
        }
        impl Drop for Fragile {
            fn drop(&mut self) {
                DROPS.fetch_add(1, Ordering::SeqCst);
            }
        }

        let mut a = DynamicArray::new();
        for _ in 0..4 {
            a.push_back(Fragile);
        }
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| a.clone()));
        assert!(result.is_err());
        // The two successful clones were dropped with the partial copy.
        assert_eq!(DROPS.load(Ordering::SeqCst), 2);
        assert_eq!(a.len(), 4);
    }
}
