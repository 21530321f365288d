// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`StaticVec`](crate::StaticVec).
//!
//! - **Serialize**: as a sequence of elements (length `len`).
//! - **Deserialize**: from any sequence up to capacity `N`.
//!
//! Elements are written straight into the uninitialized buffer as they are
//! deserialized, so `T: Deserialize<'de>` is the only bound. If the input
//! holds more than `N` elements, or an element fails to deserialize, the
//! elements read so far are dropped and an error is returned.

// Crate imports
use crate::vec::StaticVec;

// Core imports
use core::{fmt, marker::PhantomData};

// External imports - serde
use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};

impl<T: Serialize, const N: usize> Serialize for StaticVec<T, N> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        use ser::SerializeSeq;
        let sl = self.as_slice();
        let mut seq = s.serialize_seq(Some(sl.len()))?;
        for item in sl {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

struct VecVisitor<T, const N: usize>(PhantomData<T>);

impl<'de, T, const N: usize> de::Visitor<'de> for VecVisitor<T, N>
where
    T: Deserialize<'de>,
{
    type Value = StaticVec<T, N>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "array or sequence with at most {} elements", N)
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        if a.size_hint().is_some_and(|n| n > N) {
            return Err(de::Error::custom(format_args!(
                "too many elements (capacity {N})"
            )));
        }
        let mut out = StaticVec::<T, N>::new();
        while let Some(elem) = a.next_element::<T>()? {
            if out.is_full() {
                return Err(de::Error::custom(format_args!(
                    "too many elements (capacity {N})"
                )));
            }
            // SAFETY: `out` is not full, checked just above.
            unsafe { out.push_unchecked(elem) };
        }
        Ok(out)
    }
}

impl<'de, T, const N: usize> Deserialize<'de> for StaticVec<T, N>
where
    T: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(VecVisitor::<T, N>(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::StaticVec;
    use alloc::string::{String, ToString};

    #[test]
    fn test_serde_roundtrip_json() {
        let v: StaticVec<i32, 5> = StaticVec::try_from(&[1, 2, 3][..]).unwrap();
        let s = serde_json::to_string(&v).unwrap();
        assert_eq!(s, "[1,2,3]");
        let back: StaticVec<i32, 5> = serde_json::from_str(&s).unwrap();
        assert_eq!(back.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_deserialize_over_capacity_errors() {
        let err = serde_json::from_str::<StaticVec<i32, 3>>("[1,2,3,4]").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("too many elements (capacity 3)"), "msg: {msg}");
    }

    #[test]
    fn test_serde_roundtrip_empty_json() {
        let v: StaticVec<i32, 4> = StaticVec::default();
        let s = serde_json::to_string(&v).unwrap();
        assert_eq!(s, "[]");
        let back: StaticVec<i32, 4> = serde_json::from_str(&s).unwrap();
        assert!(back.is_empty());
    }

    #[test]
    fn test_owned_non_copy_elements() {
        let v: StaticVec<String, 3> =
            serde_json::from_str(r#"["alpha","beta"]"#).unwrap();
        assert_eq!(v.as_slice(), &["alpha".to_string(), "beta".to_string()]);
        assert_eq!(serde_json::to_string(&v).unwrap(), r#"["alpha","beta"]"#);

        let err = serde_json::from_str::<StaticVec<String, 1>>(r#"["a","b"]"#).unwrap_err();
        assert!(err.to_string().contains("capacity 1"));
    }

    #[test]
    fn test_deserialize_non_default_type() {
        use serde::{Deserialize, Serialize};

        #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
        struct NoDefault(i32);

        let v: StaticVec<NoDefault, 4> = serde_json::from_str("[1,2,3]").unwrap();
        assert_eq!(v.as_slice(), &[NoDefault(1), NoDefault(2), NoDefault(3)]);
    }

    #[test]
    fn serde_zst_roundtrip() {
        let v: StaticVec<(), 3> = StaticVec::try_from(&[(), ()][..]).unwrap();
        let s = serde_json::to_string(&v).unwrap();
        assert_eq!(s, "[null,null]");
        let back: StaticVec<(), 3> = serde_json::from_str(&s).unwrap();
        assert_eq!(back.len(), 2);
    }

    #[test]
    fn test_vecvisitor_expecting_message() {
        let err =
            serde_json::from_str::<StaticVec<i32, 4>>(r#"{"not":"an array"}"#).unwrap_err();
        let msg = err.to_string();
        assert!(
            msg.contains("array or sequence with at most 4 elements"),
            "unexpected error message: {msg}"
        );
    }
}
