// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::StaticVec;

// Core imports
use core::ops::{Bound, RangeBounds};

impl<T, const N: usize> StaticVec<T, N> {
    /// Drops the element at `index` and shifts the tail one slot left.
    ///
    /// Returns `index`, which now holds the following element (or equals
    /// `len` if the last element was erased). Erasing at or past `len` is a
    /// no-op returning `len`.
    #[inline]
    pub fn erase(&mut self, index: usize) -> usize {
        if index >= self.len {
            return self.len;
        }
        self.erase_range(index..index + 1)
    }

    /// Drops the elements in `range` and shifts the tail left over them.
    ///
    /// The end of the range is clamped to `len`. An empty or inverted range
    /// is a no-op returning `len`; otherwise exactly
    /// `min(end, len) - start` elements are dropped and `start` is returned.
    ///
    /// Unlike slice indexing this never panics on a bad range.
    ///
    /// # Examples
    /// ```
    /// # use static_vec::StaticVec;
    /// let mut v: StaticVec<_, 8> = StaticVec::try_from(&[1, 2, 3, 4, 5, 6, 7][..]).unwrap();
    /// assert_eq!(v.erase_range(2..5), 2);
    /// assert_eq!(v.as_slice(), &[1, 2, 6, 7]);
    /// ```
    pub fn erase_range<R: RangeBounds<usize>>(&mut self, range: R) -> usize {
        let len = self.len;

        let start = match range.start_bound() {
            Bound::Included(&i) => i,
            Bound::Excluded(&i) => i.saturating_add(1),
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&i) => i.saturating_add(1),
            Bound::Excluded(&i) => i,
            Bound::Unbounded => len,
        }
        .min(len);

        if start >= end {
            return len;
        }

        self.punch_hole(start, end).drop_contents();
        start
    }

    /// Removes and returns the element at `index`, shifting the tail left.
    ///
    /// Returns `None` if `index >= len`.
    #[inline]
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        Some(self.punch_hole(index, index + 1).take_single())
    }
}

#[cfg(test)]
mod tests {
    use crate::{testing::Tracked, StaticVec};
    use core::cell::Cell;

    #[test]
    fn test_erase_range_middle() {
        let mut v: StaticVec<i32, 16> = StaticVec::try_from(&[1, 2, 3, 4, 5, 6, 7][..]).unwrap();
        assert_eq!(v.erase_range(2..5), 2);
        assert_eq!(v.as_slice(), &[1, 2, 6, 7]);
    }

    #[test]
    fn test_erase_single_shifts_down() {
        let base = [10, 20, 30, 40];
        for pos in 0..base.len() {
            let mut v: StaticVec<i32, 4> = StaticVec::from(base);
            assert_eq!(v.erase(pos), pos);
            assert_eq!(v.len(), base.len() - 1);
            assert_eq!(&v[..pos], &base[..pos]);
            assert_eq!(&v[pos..], &base[pos + 1..]);
        }
    }

    #[test]
    fn test_erase_at_end_is_noop() {
        let mut v: StaticVec<i32, 4> = StaticVec::try_from(&[1, 2, 3][..]).unwrap();
        assert_eq!(v.erase(3), 3);
        assert_eq!(v.erase(17), 3);
        assert_eq!(v.as_slice(), &[1, 2, 3]);
    }

    #[test]
    #[allow(clippy::reversed_empty_ranges)]
    fn test_empty_and_inverted_ranges_are_noops() {
        let mut v: StaticVec<i32, 4> = StaticVec::try_from(&[1, 2, 3][..]).unwrap();
        assert_eq!(v.erase_range(1..1), 3);
        assert_eq!(v.erase_range(2..1), 3);
        assert_eq!(v.erase_range(5..9), 3);
        assert_eq!(v.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_erase_range_clamps_end_to_len() {
        let mut v: StaticVec<i32, 8> = StaticVec::try_from(&[1, 2, 3, 4][..]).unwrap();
        assert_eq!(v.erase_range(2..100), 2);
        assert_eq!(v.as_slice(), &[1, 2]);
        assert_eq!(v.erase_range(..), 0);
        assert!(v.is_empty());
    }

    #[test]
    fn test_erase_range_bound_forms() {
        let mut v: StaticVec<i32, 8> = StaticVec::try_from(&[0, 1, 2, 3, 4, 5][..]).unwrap();
        assert_eq!(v.erase_range(..=1), 0);
        assert_eq!(v.as_slice(), &[2, 3, 4, 5]);
        assert_eq!(v.erase_range(2..), 2);
        assert_eq!(v.as_slice(), &[2, 3]);
        assert_eq!(v.erase_range(1..=1), 1);
        assert_eq!(v.as_slice(), &[2]);
    }

    #[test]
    fn test_insert_then_erase_round_trips() {
        let base = [5, 4, 3, 2, 1];
        for pos in 0..=base.len() {
            let mut v: StaticVec<i32, 8> = StaticVec::try_from(&base[..]).unwrap();
            let at = v.insert(pos, 99).unwrap();
            v.erase(at);
            assert_eq!(v.as_slice(), &base);

            let at = v.insert_slice(pos, &[7, 8, 9]).unwrap();
            v.erase_range(at..at + 3);
            assert_eq!(v.as_slice(), &base);
        }
    }

    #[test]
    fn test_remove_returns_element() {
        let mut r: StaticVec<i32, 5> = StaticVec::from([1, 2, 3, 4, 5]);
        assert_eq!(r.remove(2), Some(3));
        assert_eq!(r.as_slice(), &[1, 2, 4, 5]);
        assert_eq!(r.remove(0), Some(1));
        assert_eq!(r.remove(r.len() - 1), Some(5));
        assert_eq!(r.as_slice(), &[2, 4]);
        assert_eq!(r.remove(8), None);
    }

    #[test]
    fn test_erase_drops_exactly_the_removed_elements() {
        let drops = Cell::new(0);
        let mut v: StaticVec<Tracked<'_>, 8> = StaticVec::new();
        for id in 0..7 {
            v.push(Tracked::new(id, &drops)).unwrap();
        }
        v.erase_range(2..5);
        assert_eq!(drops.get(), 3);
        v.erase(0);
        assert_eq!(drops.get(), 4);
        let ids: alloc::vec::Vec<_> = v.iter().map(|t| t.id).collect();
        assert_eq!(ids, [1, 5, 6]);

        let removed = v.remove(1).unwrap();
        assert_eq!(drops.get(), 4);
        assert_eq!(removed.id, 5);
        drop(removed);
        drop(v);
        assert_eq!(drops.get(), 7);
    }
}
