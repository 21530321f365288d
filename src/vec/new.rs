// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::StaticVec};

// Core imports
use core::mem::MaybeUninit;

impl<T, const N: usize> StaticVec<T, N> {
    /// Constructs an empty vector. No slot is initialized.
    #[inline]
    pub const fn new() -> Self {
        Self {
            buf: [const { MaybeUninit::uninit() }; N],
            len: 0,
        }
    }
}

impl<T: Clone, const N: usize> StaticVec<T, N> {
    /// Constructs a vector holding `count` clones of `value`.
    ///
    /// Returns [`Error::CapacityExceeded`] if `count > N`.
    #[inline]
    pub fn from_elem(value: T, count: usize) -> Result<Self, Error> {
        let mut v = Self::new();
        v.assign_n(count, value)?;
        Ok(v)
    }

    /// Constructs a full vector (`len == N`) of clones of `value`.
    #[inline]
    pub fn filled(value: T) -> Self {
        let mut v = Self::new();
        v.extend_within_capacity(core::iter::repeat_n(value, N));
        v
    }
}

impl<T, const N: usize> Default for StaticVec<T, N> {
    fn default() -> Self {
        Self::new()
    }
}
