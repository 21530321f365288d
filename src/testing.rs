// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test helpers shared by the unit tests.

// Core imports
use core::{cell::Cell, fmt};

/// An element that counts its own drops into a shared counter.
pub(crate) struct Tracked<'a> {
    pub(crate) id: i32,
    drops: &'a Cell<usize>,
}

impl<'a> Tracked<'a> {
    pub(crate) fn new(id: i32, drops: &'a Cell<usize>) -> Self {
        Self { id, drops }
    }
}

impl Drop for Tracked<'_> {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

impl Clone for Tracked<'_> {
    fn clone(&self) -> Self {
        Self::new(self.id, self.drops)
    }
}

// identity is the id; the counter is shared bookkeeping
impl PartialEq for Tracked<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl fmt::Debug for Tracked<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tracked({})", self.id)
    }
}
