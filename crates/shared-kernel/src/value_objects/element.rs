// crates/shared-kernel/src/value_objects/element.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// A single value of an input sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Element(i32);

impl Element {
    #[inline]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn value(self) -> i32 {
        self.0
    }
}

impl From<i32> for Element {
    fn from(value: i32) -> Self {
        Self::new(value)
    }
}

impl From<Element> for i32 {
    fn from(value: Element) -> Self {
        value.0
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
