// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Position handles bound to one [`StaticVec`].
//!
//! - [`Cursor`] borrows the vector shared. It is `Copy`, supports clamped
//!   random-access arithmetic (`+`, `-`, `+=`, `-=` with `isize`) and signed
//!   distance between two cursors.
//! - [`CursorMut`] borrows the vector exclusively. It moves the same way and
//!   can also write, insert, and erase at its position.
//!
//! Every move clamps the position to `[0, len]`: overshooting lands on the
//! end position and undershooting on the first one. Because a cursor holds a
//! borrow, the vector cannot change under it; a `CursorMut` keeps its index
//! meaningful across its own inserts and erases.

// Crate imports
use crate::{error::Error, vec::StaticVec};

// Core imports
use core::{
    cmp::Ordering,
    fmt,
    ops::{Add, AddAssign, Sub, SubAssign},
    ptr,
};

#[inline]
fn offset_clamped(index: usize, n: isize, len: usize) -> usize {
    index.saturating_add_signed(n).min(len)
}

#[inline]
fn find_from<T: PartialEq>(items: &[T], from: usize, value: &T) -> usize {
    items[from..]
        .iter()
        .position(|x| x == value)
        .map_or(items.len(), |p| from + p)
}

#[inline]
fn peek_at<T>(items: &[T], index: usize, n: isize) -> Option<&T> {
    index.checked_add_signed(n).and_then(|i| items.get(i))
}

/// A shared position in a [`StaticVec`].
///
/// Two cursors are equal when they point into the same vector at the same
/// index. Cursors into different vectors are unordered.
pub struct Cursor<'a, T, const N: usize> {
    vec: &'a StaticVec<T, N>,
    index: usize,
}

impl<'a, T, const N: usize> Cursor<'a, T, N> {
    #[inline]
    pub(crate) fn new(vec: &'a StaticVec<T, N>, index: usize) -> Self {
        Self {
            index: index.min(vec.len()),
            vec,
        }
    }

    /// Returns the index this cursor points at (`0..=len`).
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns `true` at the end position (`index == len`).
    #[inline]
    pub fn is_end(&self) -> bool {
        self.index == self.vec.len()
    }

    /// Reads the element under the cursor.
    ///
    /// Fails with [`Error::OutOfRange`] at the end position.
    #[doc(alias = "deref")]
    #[inline]
    pub fn get(&self) -> Result<&'a T, Error> {
        self.vec.at(self.index)
    }

    /// Reads the element `n` positions away, or `None` outside `[0, len)`.
    #[inline]
    pub fn peek(&self, n: isize) -> Option<&'a T> {
        peek_at(self.vec.as_slice(), self.index, n)
    }

    /// The elements from the cursor to the end.
    #[inline]
    pub fn as_slice(&self) -> &'a [T] {
        &self.vec.as_slice()[self.index..]
    }

    /// Steps forward one position, stopping at the end.
    #[inline]
    pub fn move_next(&mut self) {
        self.advance(1);
    }

    /// Steps back one position, stopping at the first element.
    #[inline]
    pub fn move_prev(&mut self) {
        self.advance(-1);
    }

    /// Moves `n` positions (backwards when negative), clamped to `[0, len]`.
    #[inline]
    pub fn advance(&mut self, n: isize) {
        self.index = offset_clamped(self.index, n, self.vec.len());
    }

    /// Returns a cursor at the first element equal to `value` at or after
    /// this position, or the end cursor if there is none.
    pub fn find(self, value: &T) -> Self
    where
        T: PartialEq,
    {
        Self {
            index: find_from(self.vec.as_slice(), self.index, value),
            vec: self.vec,
        }
    }
}

impl<T, const N: usize> Clone for Cursor<'_, T, N> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T, const N: usize> Copy for Cursor<'_, T, N> {}

impl<T, const N: usize> PartialEq for Cursor<'_, T, N> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.vec, other.vec) && self.index == other.index
    }
}
impl<T, const N: usize> Eq for Cursor<'_, T, N> {}

impl<T, const N: usize> PartialOrd for Cursor<'_, T, N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        ptr::eq(self.vec, other.vec).then(|| self.index.cmp(&other.index))
    }
}

impl<T, const N: usize> fmt::Debug for Cursor<'_, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("index", &self.index)
            .field("len", &self.vec.len())
            .finish()
    }
}

impl<T, const N: usize> AddAssign<isize> for Cursor<'_, T, N> {
    fn add_assign(&mut self, n: isize) {
        self.advance(n);
    }
}
impl<T, const N: usize> SubAssign<isize> for Cursor<'_, T, N> {
    fn sub_assign(&mut self, n: isize) {
        self.advance(n.saturating_neg());
    }
}
impl<T, const N: usize> Add<isize> for Cursor<'_, T, N> {
    type Output = Self;
    fn add(mut self, n: isize) -> Self {
        self += n;
        self
    }
}
impl<T, const N: usize> Sub<isize> for Cursor<'_, T, N> {
    type Output = Self;
    fn sub(mut self, n: isize) -> Self {
        self -= n;
        self
    }
}

/// Signed distance `self.index() - rhs.index()`.
///
/// Only meaningful for two cursors into the same vector. Distances beyond
/// `isize` (possible only with zero-sized elements) saturate at
/// `isize::MAX` / `-isize::MAX`.
impl<T, const N: usize> Sub for Cursor<'_, T, N> {
    type Output = isize;
    fn sub(self, rhs: Self) -> isize {
        debug_assert!(ptr::eq(self.vec, rhs.vec), "cursors into different vectors");
        let magnitude = |d: usize| isize::try_from(d).unwrap_or(isize::MAX);
        if self.index >= rhs.index {
            magnitude(self.index - rhs.index)
        } else {
            -magnitude(rhs.index - self.index)
        }
    }
}

/// An exclusive position in a [`StaticVec`] that can edit at its position.
///
/// After an insert the cursor points at the first inserted element; after an
/// erase it points at the element that slid into the erased position (or at
/// the end).
pub struct CursorMut<'a, T, const N: usize> {
    vec: &'a mut StaticVec<T, N>,
    index: usize,
}

impl<'a, T, const N: usize> CursorMut<'a, T, N> {
    #[inline]
    pub(crate) fn new(vec: &'a mut StaticVec<T, N>, index: usize) -> Self {
        let index = index.min(vec.len());
        Self { vec, index }
    }

    /// Returns the index this cursor points at (`0..=len`).
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns `true` at the end position.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.index == self.vec.len()
    }

    /// Reads the element under the cursor; [`Error::OutOfRange`] at the end.
    #[inline]
    pub fn get(&self) -> Result<&T, Error> {
        self.vec.at(self.index)
    }

    /// Mutable counterpart of [`get`](Self::get).
    #[inline]
    pub fn get_mut(&mut self) -> Result<&mut T, Error> {
        self.vec.at_mut(self.index)
    }

    /// Reads the element `n` positions away, or `None` outside `[0, len)`.
    #[inline]
    pub fn peek(&self, n: isize) -> Option<&T> {
        peek_at(self.vec.as_slice(), self.index, n)
    }

    /// A shared cursor at the same position.
    #[inline]
    pub fn as_cursor(&self) -> Cursor<'_, T, N> {
        Cursor::new(self.vec, self.index)
    }

    /// Steps forward one position, stopping at the end.
    #[inline]
    pub fn move_next(&mut self) {
        self.advance(1);
    }

    /// Steps back one position, stopping at the first element.
    #[inline]
    pub fn move_prev(&mut self) {
        self.advance(-1);
    }

    /// Moves `n` positions (backwards when negative), clamped to `[0, len]`.
    #[inline]
    pub fn advance(&mut self, n: isize) {
        self.index = offset_clamped(self.index, n, self.vec.len());
    }

    /// Moves to the first element equal to `value` at or after this
    /// position, or to the end if there is none.
    pub fn find(&mut self, value: &T)
    where
        T: PartialEq,
    {
        self.index = find_from(self.vec.as_slice(), self.index, value);
    }

    /// Inserts `value` before the cursor; the cursor then points at it.
    #[inline]
    pub fn insert(&mut self, value: T) -> Result<(), Error> {
        self.vec.insert(self.index, value)?;
        Ok(())
    }

    /// Inserts the value built by `f` before the cursor.
    #[doc(alias = "emplace")]
    #[inline]
    pub fn insert_with<F: FnOnce() -> T>(&mut self, f: F) -> Result<(), Error> {
        self.vec.insert_with(self.index, f)?;
        Ok(())
    }

    /// Inserts every item of `iter` before the cursor, in order.
    pub fn insert_iter<I>(&mut self, iter: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        self.vec.insert_iter(self.index, iter)?;
        Ok(())
    }

    /// Inserts `count` clones of `value` before the cursor.
    pub fn insert_n(&mut self, count: usize, value: T) -> Result<(), Error>
    where
        T: Clone,
    {
        self.vec.insert_n(self.index, count, value)?;
        Ok(())
    }

    /// Drops the element under the cursor. A no-op at the end.
    #[inline]
    pub fn erase(&mut self) {
        self.vec.erase(self.index);
    }

    /// Drops up to `count` elements starting at the cursor.
    #[inline]
    pub fn erase_n(&mut self, count: usize) {
        self.vec
            .erase_range(self.index..self.index.saturating_add(count));
    }

    /// Removes and returns the element under the cursor; `None` at the end.
    #[inline]
    pub fn remove(&mut self) -> Option<T> {
        self.vec.remove(self.index)
    }
}

impl<T, const N: usize> AddAssign<isize> for CursorMut<'_, T, N> {
    fn add_assign(&mut self, n: isize) {
        self.advance(n);
    }
}
impl<T, const N: usize> SubAssign<isize> for CursorMut<'_, T, N> {
    fn sub_assign(&mut self, n: isize) {
        self.advance(n.saturating_neg());
    }
}

impl<T, const N: usize> fmt::Debug for CursorMut<'_, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("index", &self.index)
            .field("len", &self.vec.len())
            .finish()
    }
}

impl<T, const N: usize> StaticVec<T, N> {
    /// A cursor at the first element (equal to [`end`](Self::end) when empty).
    #[inline]
    pub fn begin(&self) -> Cursor<'_, T, N> {
        Cursor::new(self, 0)
    }

    /// A cursor one past the last element.
    #[inline]
    pub fn end(&self) -> Cursor<'_, T, N> {
        Cursor::new(self, self.len)
    }

    /// A cursor at `index`, clamped to `len`.
    #[inline]
    pub fn cursor(&self, index: usize) -> Cursor<'_, T, N> {
        Cursor::new(self, index)
    }

    /// An editing cursor at the first element.
    #[inline]
    pub fn begin_mut(&mut self) -> CursorMut<'_, T, N> {
        CursorMut::new(self, 0)
    }

    /// An editing cursor one past the last element; inserting there appends.
    #[inline]
    pub fn end_mut(&mut self) -> CursorMut<'_, T, N> {
        let len = self.len;
        CursorMut::new(self, len)
    }

    /// An editing cursor at `index`, clamped to `len`.
    #[inline]
    pub fn cursor_mut(&mut self, index: usize) -> CursorMut<'_, T, N> {
        CursorMut::new(self, index)
    }

    /// A cursor at the first element equal to `value`, or [`end`](Self::end).
    #[inline]
    pub fn find(&self, value: &T) -> Cursor<'_, T, N>
    where
        T: PartialEq,
    {
        self.begin().find(value)
    }
}
