// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`StaticVec`](crate::StaticVec).
//!
//! - `IntoIter<T, N>` yields by value and supports `DoubleEndedIterator`,
//!   `ExactSizeIterator`, and `FusedIterator`. Items it never yields are
//!   dropped with it.
//! - `&StaticVec` and `&mut StaticVec` iterate as slices.

// Crate imports
use crate::vec::StaticVec;

// Core imports
use core::{fmt, iter::FusedIterator, ptr};

/// Owned iterator returned by `StaticVec::into_iter()`.
///
/// Yields elements by value from front to back and supports double-ended
/// iteration via [`DoubleEndedIterator`].
pub struct IntoIter<T, const N: usize> {
    // `v.len` is kept at 0 so the vector's own `Drop` never touches the
    // slots; `[front, back)` are the live ones.
    pub(crate) v: StaticVec<T, N>,
    pub(crate) front: usize,
    pub(crate) back: usize, // exclusive
}

impl<T, const N: usize> IntoIter<T, N> {
    /// Returns the elements not yet yielded, as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `[front, back)` holds the live, not-yet-yielded values.
        unsafe {
            core::slice::from_raw_parts(self.v.as_ptr().add(self.front), self.back - self.front)
        }
    }
}

impl<T, const N: usize> Iterator for IntoIter<T, N> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        if self.front < self.back {
            let i = self.front;
            self.front += 1;
            // SAFETY: `i` was inside `[front, back)`, which is live, and moving
            // `front` past it means it is read exactly once.
            Some(unsafe { self.v.buf[i].assume_init_read() })
        } else {
            None
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.back - self.front;
        (rem, Some(rem))
    }
}

impl<T, const N: usize> DoubleEndedIterator for IntoIter<T, N> {
    fn next_back(&mut self) -> Option<T> {
        if self.front < self.back {
            self.back -= 1;
            // SAFETY: the old `back - 1` was inside the live range and is now
            // outside it, so it is read exactly once.
            Some(unsafe { self.v.buf[self.back].assume_init_read() })
        } else {
            None
        }
    }
}
impl<T, const N: usize> FusedIterator for IntoIter<T, N> {}
impl<T, const N: usize> ExactSizeIterator for IntoIter<T, N> {}

impl<T, const N: usize> Drop for IntoIter<T, N> {
    fn drop(&mut self) {
        let (front, back) = (self.front, self.back);
        self.front = back;
        // SAFETY: `[front, back)` holds the values that were never yielded;
        // `front` was moved past them first so they are dropped exactly once.
        unsafe {
            let rest = ptr::slice_from_raw_parts_mut(self.v.as_mut_ptr().add(front), back - front);
            ptr::drop_in_place(rest);
        }
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for IntoIter<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a StaticVec<T, N> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
impl<'a, T, const N: usize> IntoIterator for &'a mut StaticVec<T, N> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
impl<T, const N: usize> IntoIterator for StaticVec<T, N> {
    type Item = T;
    type IntoIter = IntoIter<T, N>;
    fn into_iter(mut self) -> Self::IntoIter {
        let back = self.len;
        self.len = 0;
        IntoIter {
            front: 0,
            back,
            v: self,
        }
    }
}
