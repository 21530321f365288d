// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `StaticVec` type and its inherent API.
//!
//! `StaticVec<T, N>` is a fixed-capacity vector for arbitrary element types.
//! It stores elements inline in an uninitialized backing buffer and tracks a
//! logical length; the element lifetimes are managed by hand.
//!
//! No heap allocations are performed.

mod assign;
mod erase;
mod from;
mod insert;
mod new;
mod pop;
mod push;
mod shift;
mod slice;

// Crate imports
use crate::{
    error::{raise, Error},
    iter::IntoIter,
};

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    fmt,
    hash::{Hash, Hasher},
    mem::{self, MaybeUninit},
    ops::{Deref, DerefMut},
    ptr,
};

/// A fixed-capacity, stack-allocated vector.
///
/// `StaticVec<T, N>` stores its elements inline in a buffer of capacity `N`
/// and tracks a logical length `len ∈ 0..=N`:
///
/// - capacity is known at compile time (`N`) and never changes;
/// - the buffer is stored inline (typically on the stack);
/// - any `T` is accepted; elements are dropped exactly once, when they leave
///   the vector or when the vector itself is dropped;
/// - no heap allocations are performed.
///
/// # Layout and invariants
///
/// Internally, `StaticVec<T, N>` maintains:
///
/// - a backing buffer `[MaybeUninit<T>; N]`; and
/// - a logical length `len` with `0 <= len <= N`.
///
/// Slots `buf[..len]` hold live values; slots `buf[len..]` are uninitialized
/// and never read or dropped. Every mutating method moves `len` in lockstep
/// with the writes and drops it performs, so this holds after every call,
/// including calls that unwind out of user code (`Clone`, `Drop`, iterator
/// `next`, constructor closures).
///
/// # Checked vs unchecked access
///
/// - [`at`](StaticVec::at), [`front`](StaticVec::front) and
///   [`back`](StaticVec::back) return [`Error::OutOfRange`] on a bad index.
/// - Indexing (`v[i]`, `v[a..b]`) follows slice semantics and panics.
/// - Operations that would exceed `N` return [`Error::CapacityExceeded`]
///   and leave the vector unchanged.
///
/// With the `abort-on-error` feature, the two error cases terminate the
/// process instead of returning `Err`.
///
/// # Positions
///
/// Insert and erase take plain indices and return the index of the first
/// affected element. [`Cursor`](crate::Cursor) and
/// [`CursorMut`](crate::CursorMut) wrap the same positions in a handle with
/// clamped arithmetic.
///
/// # Examples
///
/// ```rust
/// use static_vec::StaticVec;
///
/// let mut v: StaticVec<i32, 8> = StaticVec::try_from(&[1, 2, 3][..]).unwrap();
/// v.insert(1, 45).unwrap();
/// assert_eq!(v.as_slice(), &[1, 45, 2, 3]);
///
/// v.insert_n(1, 3, 42).unwrap();
/// assert_eq!(v.as_slice(), &[1, 42, 42, 42, 45, 2, 3]);
///
/// v.erase_range(1..5);
/// assert_eq!(v.as_slice(), &[1, 2, 3]);
/// assert_eq!(v.to_string(), "{1, 2, 3}");
/// ```
pub struct StaticVec<T, const N: usize> {
    pub(crate) buf: [MaybeUninit<T>; N],
    pub(crate) len: usize,
}

impl<T, const N: usize> StaticVec<T, N> {
    /// The fixed capacity of this vector.
    pub const CAPACITY: usize = N;

    /// Returns the capacity of this vector (always `N`).
    #[doc(alias = "max_size")]
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns the current logical length (`0..=N`).
    #[doc(alias = "size")]
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if `len == 0`.
    #[doc(alias = "empty")]
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if `len == N`.
    #[inline]
    pub const fn is_full(&self) -> bool {
        self.len == N
    }

    /// Returns `N - len`, the number of additional elements that fit.
    #[inline]
    pub const fn spare_capacity(&self) -> usize {
        N - self.len
    }

    /// Returns the element at `index`, or [`Error::OutOfRange`] if
    /// `index >= len`.
    #[inline]
    pub fn at(&self, index: usize) -> Result<&T, Error> {
        if index >= self.len {
            return raise(Error::OutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(&self.as_slice()[index])
    }

    /// Mutable counterpart of [`at`](Self::at).
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        if index >= self.len {
            return raise(Error::OutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(&mut self.as_mut_slice()[index])
    }

    /// Returns the first element, or [`Error::OutOfRange`] when empty.
    #[inline]
    pub fn front(&self) -> Result<&T, Error> {
        self.at(0)
    }

    /// Returns the first element mutably, or [`Error::OutOfRange`] when empty.
    #[inline]
    pub fn front_mut(&mut self) -> Result<&mut T, Error> {
        self.at_mut(0)
    }

    /// Returns the last element, or [`Error::OutOfRange`] when empty.
    #[inline]
    pub fn back(&self) -> Result<&T, Error> {
        match self.len.checked_sub(1) {
            Some(last) => self.at(last),
            None => raise(Error::OutOfRange { index: 0, len: 0 }),
        }
    }

    /// Returns the last element mutably, or [`Error::OutOfRange`] when empty.
    #[inline]
    pub fn back_mut(&mut self) -> Result<&mut T, Error> {
        match self.len.checked_sub(1) {
            Some(last) => self.at_mut(last),
            None => raise(Error::OutOfRange { index: 0, len: 0 }),
        }
    }

    // iterators
    /// Shorthand for `self.as_slice().iter()`.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Shorthand for `self.as_mut_slice().iter_mut()`.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }
}

impl<T, const N: usize> StaticVec<T, N> {
    /// Drops every live element and sets `len = 0`.
    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Drops the elements past `new_len`; a no-op if `new_len >= len`.
    ///
    /// `len` is lowered before any element is dropped, so a panicking `Drop`
    /// cannot expose a dropped slot.
    pub fn truncate(&mut self, new_len: usize) {
        let old_len = self.len;
        if new_len >= old_len {
            return;
        }
        self.len = new_len;
        // SAFETY: `buf[new_len..old_len]` was live before `len` was lowered and is
        // now outside the live prefix, so nothing else will read or drop it.
        unsafe {
            let tail =
                ptr::slice_from_raw_parts_mut(self.as_mut_ptr().add(new_len), old_len - new_len);
            ptr::drop_in_place(tail);
        }
    }

    /// Moves the contents out into a new vector, leaving `self` empty.
    #[inline]
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Returns an iterator over the current contents **and empties `self`**.
    ///
    /// Elements not consumed by the iterator are dropped with it.
    #[inline]
    pub fn drain_all(&mut self) -> IntoIter<T, N> {
        self.take().into_iter()
    }
}

impl<T, const N: usize> Drop for StaticVec<T, N> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for StaticVec<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticVec")
            .field("len", &self.len)
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T: PartialEq, const N: usize> PartialEq for StaticVec<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: Eq, const N: usize> Eq for StaticVec<T, N> {}
impl<T: Ord, const N: usize> Ord for StaticVec<T, N> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
impl<T: PartialOrd, const N: usize> PartialOrd for StaticVec<T, N> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}
impl<T: Hash, const N: usize> Hash for StaticVec<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T, const N: usize> Deref for StaticVec<T, N> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl<T, const N: usize> DerefMut for StaticVec<T, N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T, const N: usize> AsRef<[T]> for StaticVec<T, N> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T, const N: usize> AsMut<[T]> for StaticVec<T, N> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

// Borrow ergonomics (treat as a slice)
impl<T, const N: usize> Borrow<[T]> for StaticVec<T, N> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T, const N: usize> BorrowMut<[T]> for StaticVec<T, N> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}
