// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `static-vec`
//!
//! A `no_std`, fixed-capacity, stack-allocated vector for **any** element
//! type.
//!
//! The core type, [`StaticVec<T, N>`], stores up to `N` elements inline and
//! tracks a logical length `len ∈ 0..=N`. Storage is an uninitialized
//! `[MaybeUninit<T>; N]` buffer: creating an empty vector constructs no
//! elements, and every element is dropped exactly once, when it leaves the
//! vector or when the vector goes away.
//!
//! ## When to use this crate
//!
//! This crate may be useful when:
//!
//! - You are in a `no_std` or embedded environment.
//! - You know the maximum number of elements at compile time.
//! - You want `Vec`-like insert/erase in the middle without touching the heap.
//!
//! It may not be the best fit if:
//!
//! - You need very large capacities or large element types.
//! - You frequently pass vectors by value (moving a `StaticVec` moves the
//!   entire `N`-slot buffer, not just the initialized prefix).
//!
//! ## Features
//!
//! - `serde`
//!   - Enables `Serialize` / `Deserialize` for `StaticVec<T, N>`.
//!   - Deserializing more than `N` elements is an error.
//!
//! - `std`
//!   - Links the standard library. Nothing else changes.
//!
//! - `abort-on-error` (implies `std`)
//!   - Checked failures ([`Error::OutOfRange`], [`Error::CapacityExceeded`])
//!     print the error to stderr and abort the process instead of returning
//!     `Err`. The signatures stay the same.
//!
//! ## High-level semantics
//!
//! - Capacity is fixed at compile time (`StaticVec::<T, N>::CAPACITY == N`).
//! - Only indices `< len` hold live elements.
//! - No heap allocations are performed.
//! - Operations that may exceed capacity return [`Error::CapacityExceeded`]
//!   and leave the vector unchanged (e.g. [`StaticVec::push`],
//!   [`StaticVec::insert_n`], [`StaticVec::assign_slice`],
//!   [`TryFrom<&[T]>`]). There is no truncating variant and no
//!   `FromIterator`; use [`StaticVec::try_from_iter`].
//! - Checked accessors ([`StaticVec::at`], [`StaticVec::front`],
//!   [`StaticVec::back`]) return [`Error::OutOfRange`].
//! - Indexing (`v[i]`, `v[a..b]`) panics out of bounds, like slices.
//! - [`StaticVec::erase`] and [`StaticVec::erase_range`] clamp instead of
//!   failing: erasing past the end is a no-op returning `len`.
//!
//! ## Cursors
//!
//! [`Cursor`] and [`CursorMut`] are positions bound to one vector by a borrow.
//! Their arithmetic clamps to `[0, len]`, and a `CursorMut` can insert and
//! erase at its position without ever being invalidated.
//!
//! ## Example
//!
//! ```rust
//! use static_vec::StaticVec;
//!
//! let mut v: StaticVec<String, 4> = StaticVec::new();
//! v.push("a".to_string()).unwrap();
//! v.push("c".to_string()).unwrap();
//! v.insert(1, "b".to_string()).unwrap();
//! assert_eq!(v.as_slice(), &["a", "b", "c"]);
//!
//! let mut cur = v.find(&"b".to_string()).index();
//! assert_eq!(cur, 1);
//! cur = v.erase(cur);
//! assert_eq!(v[cur], "c");
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]

#[cfg(test)]
extern crate alloc;

// Modules
mod cursor;
mod display;
mod error;
mod index;
mod iter;
#[cfg(feature = "serde")]
mod serde;
#[cfg(test)]
mod testing;
mod vec;

// Public exports (crate API surface)
pub use cursor::{Cursor, CursorMut};
pub use error::Error;
pub use iter::IntoIter;
pub use vec::StaticVec;
