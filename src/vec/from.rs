// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::StaticVec};

impl<T, const N: usize> From<[T; N]> for StaticVec<T, N> {
    fn from(src: [T; N]) -> Self {
        let mut v = Self::new();
        v.extend_within_capacity(src);
        v
    }
}

impl<T: Clone, const N: usize> TryFrom<&[T]> for StaticVec<T, N> {
    type Error = Error;
    fn try_from(src: &[T]) -> Result<Self, Error> {
        let mut v = Self::new();
        v.assign_slice(src)?;
        Ok(v)
    }
}

impl<T, const N: usize> StaticVec<T, N> {
    /// Tries to construct from an iterator, erroring with
    /// [`Error::CapacityExceeded`] if it yields more than `N` items.
    ///
    /// Elements collected before the overflow are dropped with the partial
    /// vector. At most `N + 1` items are pulled.
    #[inline]
    pub fn try_from_iter<I: IntoIterator<Item = T>>(iter: I) -> Result<Self, Error> {
        let mut v = Self::new();
        v.assign_iter(iter)?;
        Ok(v)
    }
}
