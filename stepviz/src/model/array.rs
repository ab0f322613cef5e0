// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Display, Formatter, Result},
          ops::Deref};

use serde::Serialize;

/// The integer type of every array element and search target.
pub type Value = i64;

/// An array of values together with its sorted flag.
///
/// The flag is a claim, not a computed property: it starts out `false` for every
/// array built with [`Array::from`] (including generated ones), and only
/// [`CountingSortSteps::into_sorted()`] hands out an array with the flag set. An array
/// that happens to be in ascending order is still demonstrated with a full counting
/// sort unless it went through the engine, or the caller explicitly vouches for it
/// with [`Array::new_sorted()`].
///
/// [`CountingSortSteps::into_sorted()`]: crate::CountingSortSteps::into_sorted
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Array {
    values: Vec<Value>,
    sorted: bool,
}

impl Array {
    /// Use this when the caller already knows the values are in ascending order. The
    /// binary search trusts the flag and does not re-verify it.
    #[must_use]
    pub fn new_sorted(values: Vec<Value>) -> Self {
        Self {
            values,
            sorted: true,
        }
    }

    #[must_use]
    pub fn is_sorted(&self) -> bool { self.sorted }

    #[must_use]
    pub fn as_slice(&self) -> &[Value] { &self.values }

    #[must_use]
    pub fn into_values(self) -> Vec<Value> { self.values }
}

impl From<Vec<Value>> for Array {
    fn from(values: Vec<Value>) -> Self {
        Self {
            values,
            sorted: false,
        }
    }
}

impl Deref for Array {
    type Target = [Value];

    fn deref(&self) -> &Self::Target { &self.values }
}

impl Display for Array {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "[")?;
        for (index, value) in self.values.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_vec_is_never_flagged_sorted() {
        let array = Array::from(vec![1, 2, 3]);
        assert!(!array.is_sorted());
        assert!(Array::new_sorted(vec![1, 2, 3]).is_sorted());
    }

    #[test]
    fn display_lists_values() {
        assert_eq!(Array::from(vec![5, 3, 1]).to_string(), "[5, 3, 1]");
        assert_eq!(Array::default().to_string(), "[]");
    }

    #[test]
    fn derefs_to_slice() {
        let array = Array::from(vec![4, 2]);
        assert_eq!(array.len(), 2);
        assert_eq!(array[1], 2);
    }
}
