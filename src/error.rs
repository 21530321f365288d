// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for `StaticVec`.
//!
//! Every checked operation reports failure through [`raise`], the single place
//! where the build decides between returning the error to the caller and
//! terminating the process (`abort-on-error` feature).

// Core imports
use core::{error::Error as CoreError, fmt};

/// Errors returned by checked operations on [`StaticVec`](crate::StaticVec).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A checked access (`at`, `front`, `back`, cursor reads) or an insert
    /// position fell outside the live range.
    OutOfRange {
        /// The offending index.
        index: usize,
        /// The length of the vector at the time of the call.
        len: usize,
    },
    /// The operation would need more than `N` live slots.
    CapacityExceeded {
        /// Number of live slots the operation would have needed.
        requested: usize,
        /// The fixed capacity `N`.
        capacity: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
            Self::CapacityExceeded {
                requested,
                capacity,
            } => write!(
                f,
                "capacity exceeded: {requested} elements requested, capacity {capacity}"
            ),
        }
    }
}

impl CoreError for Error {}

/// Reports `err` according to the build's error mode.
#[cfg(not(feature = "abort-on-error"))]
#[cold]
#[inline(never)]
pub(crate) fn raise<R>(err: Error) -> Result<R, Error> {
    Err(err)
}

/// Reports `err` according to the build's error mode.
#[cfg(feature = "abort-on-error")]
#[cold]
#[inline(never)]
pub(crate) fn raise<R>(err: Error) -> Result<R, Error> {
    std::eprintln!("static-vec: {err}");
    std::process::abort()
}
