// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for [`StaticVec`](crate::StaticVec).
//!
//! `Index` and `IndexMut` forward to the live slice, so they accept every
//! index form a slice does (`usize` and all range types) and panic the same
//! way on out-of-bounds or inverted ranges. Only `[0..len)` is reachable.

// Crate imports
use crate::vec::StaticVec;

// Core imports
use core::{
    ops::{Index, IndexMut},
    slice::SliceIndex,
};

impl<T, I: SliceIndex<[T]>, const N: usize> Index<I> for StaticVec<T, N> {
    type Output = I::Output;
    fn index(&self, index: I) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<T, I: SliceIndex<[T]>, const N: usize> IndexMut<I> for StaticVec<T, N> {
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.as_mut_slice()[index]
    }
}
