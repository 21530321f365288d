// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::{raise, Error},
    vec::StaticVec,
};

impl<T, const N: usize> StaticVec<T, N> {
    /// Appends `value`, or returns [`Error::CapacityExceeded`] if the vector
    /// is full (the value is dropped).
    #[doc(alias = "push_back")]
    #[inline]
    pub fn push(&mut self, value: T) -> Result<(), Error> {
        self.check_capacity(1)?;
        // SAFETY: `len < N` was just checked.
        unsafe { self.push_unchecked(value) };
        Ok(())
    }

    /// Appends the value returned by `f`, constructing it directly in the
    /// next free slot.
    ///
    /// The capacity check happens before `f` runs: on a full vector `f` is
    /// never called and [`Error::CapacityExceeded`] is returned.
    #[doc(alias = "emplace_back")]
    #[inline]
    pub fn push_with<F: FnOnce() -> T>(&mut self, f: F) -> Result<&mut T, Error> {
        self.check_capacity(1)?;
        let len = self.len;
        // `len` is bumped only after `f` returns, so an unwinding `f` leaves
        // the slot outside the live prefix.
        let slot = self.buf[len].write(f());
        self.len = len + 1;
        Ok(slot)
    }

    /// Writes `value` into slot `len` and grows the live prefix by one.
    ///
    /// # Safety
    ///
    /// `self.len < N` must hold.
    #[inline]
    pub(crate) unsafe fn push_unchecked(&mut self, value: T) {
        debug_assert!(self.len < N, "buffer capacity exceeded");
        // SAFETY: the caller guarantees `len < N`, so the slot exists and is
        // outside the live prefix.
        unsafe { self.buf.get_unchecked_mut(self.len) }.write(value);
        self.len += 1;
    }

    /// Appends items from `iter` until it runs dry or the vector is full.
    /// Returns the number of items appended; extra items are not pulled.
    pub(crate) fn extend_within_capacity<I: IntoIterator<Item = T>>(&mut self, iter: I) -> usize {
        let spare = N - self.len;
        let mut pushed = 0;
        for item in iter.into_iter().take(spare) {
            // SAFETY: at most `spare` items are taken, so `len < N` here.
            unsafe { self.push_unchecked(item) };
            pushed += 1;
        }
        pushed
    }

    /// Fails with [`Error::CapacityExceeded`] unless `additional` more
    /// elements fit.
    #[inline]
    pub(crate) fn check_capacity(&self, additional: usize) -> Result<(), Error> {
        match self.len.checked_add(additional) {
            Some(requested) if requested <= N => Ok(()),
            requested => raise(Error::CapacityExceeded {
                requested: requested.unwrap_or(usize::MAX),
                capacity: N,
            }),
        }
    }
}
