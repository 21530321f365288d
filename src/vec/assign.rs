// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Whole-content replacement: `assign_*`, `Clone`, and moves.

// Crate imports
use crate::{
    error::{raise, Error},
    vec::StaticVec,
};

impl<T, const N: usize> StaticVec<T, N> {
    /// Replaces the contents with the items of `iter`, in order.
    ///
    /// If the iterator's lower size bound already exceeds `N`, this returns
    /// [`Error::CapacityExceeded`] without pulling anything. Otherwise the
    /// items are collected into a fresh buffer that replaces the contents
    /// only once the iterator is exhausted; if it yields more than `N` items
    /// the error is returned and the vector is left unchanged. At most
    /// `N + 1` items are pulled, and the items already collected are dropped
    /// on failure.
    pub fn assign_iter<I: IntoIterator<Item = T>>(&mut self, iter: I) -> Result<(), Error> {
        let mut iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        if lower > N {
            return raise(Error::CapacityExceeded {
                requested: lower,
                capacity: N,
            });
        }

        let mut fresh = Self::new();
        fresh.extend_within_capacity(&mut iter);
        if iter.next().is_some() {
            return raise(Error::CapacityExceeded {
                requested: N + 1,
                capacity: N,
            });
        }
        *self = fresh;
        Ok(())
    }

    /// Move-assigns from `source`: drops the current contents, moves every
    /// element of `source` over in order, and leaves `source` empty.
    pub fn move_from(&mut self, source: &mut Self) {
        self.clear();
        self.extend_within_capacity(source.drain_all());
    }
}

impl<T: Clone, const N: usize> StaticVec<T, N> {
    /// Replaces the contents with `count` clones of `value`.
    ///
    /// Returns [`Error::CapacityExceeded`] if `count > N`, leaving the
    /// vector unchanged.
    pub fn assign_n(&mut self, count: usize, value: T) -> Result<(), Error> {
        if count > N {
            return raise(Error::CapacityExceeded {
                requested: count,
                capacity: N,
            });
        }
        self.clear();
        self.extend_within_capacity(core::iter::repeat_n(value, count));
        Ok(())
    }

    /// Replaces the contents with clones of `src`.
    ///
    /// Returns [`Error::CapacityExceeded`] if `src.len() > N`, leaving the
    /// vector unchanged.
    pub fn assign_slice(&mut self, src: &[T]) -> Result<(), Error> {
        if src.len() > N {
            return raise(Error::CapacityExceeded {
                requested: src.len(),
                capacity: N,
            });
        }
        self.clear();
        self.extend_within_capacity(src.iter().cloned());
        Ok(())
    }
}

impl<T: Clone, const N: usize> Clone for StaticVec<T, N> {
    fn clone(&self) -> Self {
        let mut out = Self::new();
        out.extend_within_capacity(self.iter().cloned());
        out
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.extend_within_capacity(source.iter().cloned());
    }
}

#[cfg(all(test, not(feature = "abort-on-error")))]
mod tests {
    use crate::{testing::Tracked, Error, StaticVec};
    use core::cell::Cell;

    #[test]
    fn test_copy_assignment_and_construction() {
        let v1: StaticVec<i32, 16> =
            StaticVec::try_from(&[23, 21, 83, 93, 148, 128, 304, 1][..]).unwrap();
        let mut v2: StaticVec<i32, 16> = StaticVec::new();
        v2.clone_from(&v1);
        assert_eq!(v2.len(), v1.len());
        assert_eq!(v1, v2);

        let v3 = v1.clone();
        assert_eq!(v3.as_slice(), v1.as_slice());
    }

    #[test]
    fn test_copy_is_independent() {
        let original: StaticVec<i32, 8> = StaticVec::try_from(&[1, 2, 3][..]).unwrap();
        let mut copy = original.clone();
        copy[0] = 100;
        copy.push(4).unwrap();
        copy.erase(1);
        assert_eq!(original.as_slice(), &[1, 2, 3]);
        assert_eq!(copy.as_slice(), &[100, 3, 4]);
    }

    #[test]
    fn test_move_from_empties_source() {
        let v1: StaticVec<i32, 16> =
            StaticVec::try_from(&[23, 21, 83, 93, 148, 128, 304, 1][..]).unwrap();
        let mut v2 = v1.clone();
        let mut v3: StaticVec<i32, 16> = StaticVec::try_from(&[5, 5][..]).unwrap();
        v3.move_from(&mut v2);

        assert_eq!(v2.len(), 0);
        assert_eq!(v3.len(), 8);
        assert_eq!(v1.as_slice(), v3.as_slice());
    }

    #[test]
    fn test_move_from_moves_without_dropping() {
        let drops = Cell::new(0);
        let mut src: StaticVec<Tracked<'_>, 4> = StaticVec::new();
        let mut dst: StaticVec<Tracked<'_>, 4> = StaticVec::new();
        src.push(Tracked::new(1, &drops)).unwrap();
        src.push(Tracked::new(2, &drops)).unwrap();
        dst.push(Tracked::new(9, &drops)).unwrap();

        dst.move_from(&mut src);
        // only the old destination content was dropped
        assert_eq!(drops.get(), 1);
        assert!(src.is_empty());
        let ids: alloc::vec::Vec<_> = dst.iter().map(|t| t.id).collect();
        assert_eq!(ids, [1, 2]);
    }

    #[test]
    fn test_assign_variants() {
        let mut v: StaticVec<i32, 4> = StaticVec::filled(42);
        v.assign_slice(&[3, 4, 5]).unwrap();
        assert_eq!(v.as_slice(), &[3, 4, 5]);

        v.assign_n(2, 8).unwrap();
        assert_eq!(v.as_slice(), &[8, 8]);

        v.assign_iter([1, 2, 3, 4]).unwrap();
        assert_eq!(v.as_slice(), &[1, 2, 3, 4]);

        v.assign_iter(core::iter::empty()).unwrap();
        assert!(v.is_empty());
    }

    #[test]
    fn test_assign_known_overflow_keeps_contents() {
        let mut v: StaticVec<i32, 3> = StaticVec::try_from(&[1, 2][..]).unwrap();
        assert_eq!(
            v.assign_n(4, 0),
            Err(Error::CapacityExceeded {
                requested: 4,
                capacity: 3
            })
        );
        assert!(v.assign_slice(&[9, 9, 9, 9]).is_err());
        assert!(v.assign_iter([1, 2, 3, 4, 5]).is_err());
        assert_eq!(v.as_slice(), &[1, 2]);
    }

    #[test]
    fn test_assign_iter_late_overflow_keeps_contents() {
        let mut v: StaticVec<i32, 3> = StaticVec::try_from(&[1, 2][..]).unwrap();
        let mut source = (10..=20).filter(|_| true);
        assert_eq!(
            v.assign_iter(&mut source),
            Err(Error::CapacityExceeded {
                requested: 4,
                capacity: 3
            })
        );
        assert_eq!(v.as_slice(), &[1, 2]);
        // N + 1 items pulled
        assert_eq!(source.next(), Some(14));
    }

    #[test]
    fn test_assign_iter_late_overflow_drops_each_element_once() {
        let drops = Cell::new(0);
        let mut v: StaticVec<Tracked<'_>, 2> =
            StaticVec::try_from_iter([Tracked::new(1, &drops)]).unwrap();
        let incoming = (10..13).map(|id| Tracked::new(id, &drops)).filter(|_| true);
        assert!(v.assign_iter(incoming).is_err());
        // two collected plus the one that overflowed, old contents untouched
        assert_eq!(drops.get(), 3);
        assert_eq!(v.len(), 1);
        assert_eq!(v[0].id, 1);

        v.assign_iter([Tracked::new(20, &drops), Tracked::new(21, &drops)])
            .unwrap();
        assert_eq!(drops.get(), 4);
        drop(v);
        assert_eq!(drops.get(), 6);
    }

    #[test]
    fn test_clone_from_drops_previous_contents() {
        let drops = Cell::new(0);
        let src: StaticVec<Tracked<'_>, 3> = StaticVec::try_from_iter([
            Tracked::new(1, &drops),
            Tracked::new(2, &drops),
        ])
        .unwrap();
        let mut dst: StaticVec<Tracked<'_>, 3> =
            StaticVec::try_from_iter([Tracked::new(7, &drops)]).unwrap();
        dst.clone_from(&src);
        assert_eq!(drops.get(), 1);
        assert_eq!(dst, src);
        drop(dst);
        drop(src);
        assert_eq!(drops.get(), 5);
    }
}
