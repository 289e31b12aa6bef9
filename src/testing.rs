// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test helpers: an element type that records how often it was dropped.

// Alloc imports
use alloc::rc::Rc;

// Core imports
use core::cell::Cell;

/// Shared counter of drops for a family of [`Tracked`] values.
#[derive(Clone, Default)]
pub(crate) struct Drops(Rc<Cell<usize>>);

impl Drops {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn get(&self) -> usize {
        self.0.get()
    }

    pub(crate) fn track(&self, id: u32) -> Tracked {
        Tracked {
            id,
            drops: self.clone(),
        }
    }
}

/// Increments its [`Drops`] counter when dropped.
#[derive(Clone)]
pub(crate) struct Tracked {
    pub(crate) id: u32,
    drops: Drops,
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl core::fmt::Debug for Tracked {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Tracked({})", self.id)
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.drops.0.set(self.drops.0.get() + 1);
    }
}
