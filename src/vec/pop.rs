// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::StaticVec;

impl<T, const N: usize> StaticVec<T, N> {
    /// Removes and returns the last element; `None` (and no change) if empty.
    #[doc(alias = "pop_back")]
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            self.len -= 1;
            // SAFETY: Before decrementing, all elements in `buf[..old_len]` are
            // initialized by invariant, so `buf[self.len]` (the old last slot)
            // still holds a `T`; it is now past `len` and read exactly once.
            let out = unsafe { self.buf[self.len].assume_init_read() };
            Some(out)
        }
    }
}
