// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::StaticVec;

impl<T, const N: usize> StaticVec<T, N> {
    /// Returns the live prefix `[0, len)` as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: By invariant, all elements in `buf[..self.len]` are initialized,
        // and `self.len <= N`, so this creates a valid shared slice of initialized `T`.
        unsafe { core::slice::from_raw_parts(self.as_ptr(), self.len) }
    }

    /// Returns the live prefix `[0, len)` as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: By invariant, all elements in `buf[..self.len]` are initialized,
        // and `self.len <= N`. We have exclusive access via `&mut self`, so it is
        // sound to create a mutable slice over `buf[..self.len]`.
        unsafe { core::slice::from_raw_parts_mut(self.as_mut_ptr(), self.len) }
    }

    /// Returns a raw pointer to the start of the backing storage.
    ///
    /// Only the first `len` elements are initialized. The pointer is
    /// invalidated by any mutation of the vector.
    #[doc(alias = "data")]
    #[inline]
    pub const fn as_ptr(&self) -> *const T {
        self.buf.as_ptr().cast::<T>()
    }

    /// Returns a mutable raw pointer to the start of the backing storage.
    ///
    /// Only the first `len` elements are initialized. Writing past `len`
    /// does not make those slots part of the vector.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_mut_ptr().cast::<T>()
    }
}

#[cfg(test)]
mod tests {
    use crate::StaticVec;

    #[test]
    fn test_as_ptr_and_as_mut_ptr() {
        let mut v: StaticVec<u16, 4> = StaticVec::from([10, 20, 30, 40]);
        assert_eq!(v.as_ptr(), v.as_slice().as_ptr());

        let p_mut = v.as_mut_ptr();
        let p_mut_slice = v.as_mut_slice().as_mut_ptr();
        assert_eq!(p_mut, p_mut_slice);

        v.as_mut_slice()[1] = 21;
        assert_eq!(v.as_slice(), &[10, 21, 30, 40]);
    }

    #[test]
    fn test_empty_slice_views() {
        let mut v: StaticVec<u16, 4> = StaticVec::new();
        assert!(v.as_slice().is_empty());
        assert!(v.as_mut_slice().is_empty());
    }
}
