// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shift engine shared by insert and erase.
//!
//! Relocation swaps `MaybeUninit` slots, which is a bitwise move: the source
//! slot becomes logically uninitialized and no `Drop` runs.
//!
//! - [`StaticVec::open_gap`] shifts the suffix right and hands out a [`Gap`]
//!   to be filled with new elements.
//! - [`StaticVec::punch_hole`] detaches a run of live elements as a [`Hole`]
//!   whose contents the caller drops or reads out.
//!
//! Both guards lower `len` while they are alive and compact the suffix back
//! over whatever is left vacant when they are dropped, so `len` and the slot
//! contents agree on every exit path, unwinding included. If a guard is
//! leaked with `mem::forget`, the relocated suffix is leaked with it.

// Crate imports
use crate::vec::StaticVec;

// Core imports
use core::ptr;

impl<T, const N: usize> StaticVec<T, N> {
    /// Relocates `[at, len)` to `[at + width, len + width)` and returns the
    /// vacated run `[at, at + width)`.
    ///
    /// Callers check `at <= len` and `len + width <= N` beforehand.
    pub(crate) fn open_gap(&mut self, at: usize, width: usize) -> Gap<'_, T, N> {
        debug_assert!(at <= self.len);
        debug_assert!(self.len + width <= N);
        let len = self.len;

        // Highest index first: each destination is either past the old `len`
        // or was vacated by an earlier iteration.
        for src in (at..len).rev() {
            self.buf.swap(src, src + width);
        }
        self.len = at;

        Gap {
            vec: self,
            at,
            width,
            filled: 0,
            tail: len - at,
        }
    }

    /// Detaches the live run `[start, end)` from the vector.
    ///
    /// Callers check `start <= end <= len` beforehand.
    pub(crate) fn punch_hole(&mut self, start: usize, end: usize) -> Hole<'_, T, N> {
        debug_assert!(start <= end && end <= self.len);
        let tail = self.len - end;
        self.len = start;
        Hole {
            vec: self,
            start,
            end,
            tail,
        }
    }

    /// Moves the `tail` live slots at `[end, end + tail)` down to `start`,
    /// lowest index first, and makes them part of the live prefix again.
    ///
    /// `[start, end)` must be vacant.
    fn close_hole(&mut self, start: usize, end: usize, tail: usize) {
        if start != end {
            for offset in 0..tail {
                self.buf.swap(end + offset, start + offset);
            }
        }
        self.len = start + tail;
    }
}

/// Vacant slots opened in front of a relocated suffix.
///
/// Filled in order with [`Gap::fill`]. On drop, slots that were never filled
/// are closed up again.
pub(crate) struct Gap<'a, T, const N: usize> {
    vec: &'a mut StaticVec<T, N>,
    at: usize,
    width: usize,
    filled: usize,
    tail: usize,
}

impl<T, const N: usize> Gap<'_, T, N> {
    /// Returns `true` once every vacant slot holds a value.
    #[inline]
    pub(crate) fn is_full(&self) -> bool {
        self.filled == self.width
    }

    /// Writes `value` into the next vacant slot. The gap must not be full.
    #[inline]
    pub(crate) fn fill(&mut self, value: T) -> &mut T {
        assert!(!self.is_full(), "gap already filled");
        let slot = self.at + self.filled;
        self.filled += 1;
        self.vec.buf[slot].write(value)
    }
}

impl<T, const N: usize> Drop for Gap<'_, T, N> {
    fn drop(&mut self) {
        self.vec
            .close_hole(self.at + self.filled, self.at + self.width, self.tail);
    }
}

/// A run of elements detached from the live prefix, still holding values.
///
/// The owner either drops the values ([`Hole::drop_contents`]) or reads the
/// single value out ([`Hole::take_single`]); either way the suffix is
/// compacted over the run when the hole goes away.
pub(crate) struct Hole<'a, T, const N: usize> {
    vec: &'a mut StaticVec<T, N>,
    start: usize,
    end: usize,
    tail: usize,
}

impl<T, const N: usize> Hole<'_, T, N> {
    /// Drops every value in the hole, then closes it.
    ///
    /// A panicking `Drop` still gets the rest of the run dropped before the
    /// hole closes during unwinding.
    pub(crate) fn drop_contents(self) {
        let count = self.end - self.start;
        // SAFETY: `punch_hole` detached `[start, end)` while those slots were
        // live; `len` was lowered to `start`, so nothing else reads or drops them,
        // and closing the hole only overwrites them by swapping.
        unsafe {
            let run = ptr::slice_from_raw_parts_mut(self.vec.as_mut_ptr().add(self.start), count);
            ptr::drop_in_place(run);
        }
    }

    /// Reads the only value out of a one-slot hole, then closes it.
    pub(crate) fn take_single(self) -> T {
        assert_eq!(self.end - self.start, 1, "hole must span one slot");
        // SAFETY: the slot was live when detached and is read exactly once here;
        // afterwards it is treated as vacant.
        unsafe { self.vec.buf[self.start].assume_init_read() }
    }
}

impl<T, const N: usize> Drop for Hole<'_, T, N> {
    fn drop(&mut self) {
        self.vec.close_hole(self.start, self.end, self.tail);
    }
}
