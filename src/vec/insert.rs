// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::{raise, Error},
    vec::StaticVec,
};

impl<T, const N: usize> StaticVec<T, N> {
    /// Inserts `value` at `index`, shifting `[index, len)` one slot right.
    ///
    /// Returns the index of the inserted element.
    ///
    /// - [`Error::OutOfRange`] if `index > len`.
    /// - [`Error::CapacityExceeded`] if the vector is full.
    ///
    /// On error the vector is unchanged.
    #[inline]
    pub fn insert(&mut self, index: usize, value: T) -> Result<usize, Error> {
        self.check_position(index)?;
        self.check_capacity(1)?;
        self.open_gap(index, 1).fill(value);
        Ok(index)
    }

    /// Inserts the value returned by `f` at `index`, constructing it directly
    /// in the opened slot.
    ///
    /// Both checks run before `f` is called. If `f` unwinds, the slot is
    /// closed again and the vector is left as it was.
    #[doc(alias = "emplace")]
    pub fn insert_with<F: FnOnce() -> T>(&mut self, index: usize, f: F) -> Result<usize, Error> {
        self.check_position(index)?;
        self.check_capacity(1)?;
        let mut gap = self.open_gap(index, 1);
        gap.fill(f());
        Ok(index)
    }

    /// Inserts every item of `iter` at `index`, in order.
    ///
    /// The announced length (`ExactSizeIterator::len`) is checked against the
    /// spare capacity before anything moves. An empty iterator is a no-op
    /// that succeeds whatever the capacity.
    ///
    /// If the iterator yields fewer items than it announced, or unwinds, the
    /// items already written stay and the unused slots are closed up. Items
    /// beyond the announced length are not pulled.
    pub fn insert_iter<I>(&mut self, index: usize, iter: I) -> Result<usize, Error>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        self.check_position(index)?;
        let iter = iter.into_iter();
        let count = iter.len();
        if count == 0 {
            return Ok(index);
        }
        self.check_capacity(count)?;

        let mut gap = self.open_gap(index, count);
        for item in iter.take(count) {
            gap.fill(item);
        }
        Ok(index)
    }
}

impl<T: Clone, const N: usize> StaticVec<T, N> {
    /// Inserts `count` clones of `value` at `index`.
    ///
    /// `count == 0` is a no-op returning `Ok(index)`.
    #[inline]
    pub fn insert_n(&mut self, index: usize, count: usize, value: T) -> Result<usize, Error> {
        self.insert_iter(index, core::iter::repeat_n(value, count))
    }

    /// Inserts clones of every element of `src` at `index`, in order.
    #[inline]
    pub fn insert_slice(&mut self, index: usize, src: &[T]) -> Result<usize, Error> {
        self.insert_iter(index, src.iter().cloned())
    }
}

impl<T, const N: usize> StaticVec<T, N> {
    /// Fails with [`Error::OutOfRange`] unless `index <= len`.
    #[inline]
    pub(crate) fn check_position(&self, index: usize) -> Result<(), Error> {
        if index > self.len {
            return raise(Error::OutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(())
    }
}
