// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Brace-list rendering: `{1, 2, 3}`, or `{}` when empty.

// Crate imports
use crate::vec::StaticVec;

// Core imports
use core::fmt;

impl<T: fmt::Display, const N: usize> fmt::Display for StaticVec<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            item.fmt(f)?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use crate::StaticVec;
    use alloc::string::ToString;

    #[test]
    fn test_renders_brace_list() {
        let v: StaticVec<i32, 8> = StaticVec::try_from(&[1, 45, 2, 3][..]).unwrap();
        assert_eq!(v.to_string(), "{1, 45, 2, 3}");
    }

    #[test]
    fn test_renders_empty_and_single() {
        let mut v: StaticVec<&str, 2> = StaticVec::new();
        assert_eq!(v.to_string(), "{}");
        v.push("a").unwrap();
        assert_eq!(v.to_string(), "{a}");
    }

    #[test]
    fn test_element_format_spec_is_forwarded() {
        let v: StaticVec<f64, 2> = StaticVec::from([1.0, 2.5]);
        assert_eq!(alloc::format!("{v:.1}"), "{1.0, 2.5}");
    }
}
