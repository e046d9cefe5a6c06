// crates/shared-kernel/src/value_objects/counts.rs
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// Number of times an element occurs in a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Frequency(usize);

impl Frequency {
    pub const ZERO: Self = Self(0);

    #[inline]
    pub const fn new(value: usize) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    pub const fn value(self) -> usize {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Count one more occurrence.
    #[inline]
    pub fn increment(&mut self) {
        self.0 += 1;
    }
}

impl Default for Frequency {
    fn default() -> Self {
        Self::zero()
    }
}

impl Add for Frequency {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Add<usize> for Frequency {
    type Output = Self;

    fn add(self, rhs: usize) -> Self::Output {
        Self(self.0 + rhs)
    }
}

impl AddAssign for Frequency {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl AddAssign<usize> for Frequency {
    fn add_assign(&mut self, rhs: usize) {
        self.0 += rhs;
    }
}

impl Sum for Frequency {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, f| acc + f)
    }
}

impl<'a> Sum<&'a Frequency> for Frequency {
    fn sum<I: Iterator<Item = &'a Frequency>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl num_traits::Zero for Frequency {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl From<usize> for Frequency {
    fn from(value: usize) -> Self {
        Self::new(value)
    }
}

impl From<Frequency> for usize {
    fn from(value: Frequency) -> Self {
        value.0
    }
}

impl PartialEq<usize> for Frequency {
    fn eq(&self, other: &usize) -> bool {
        self.0 == *other
    }
}

impl PartialEq<Frequency> for usize {
    fn eq(&self, other: &Frequency) -> bool {
        *self == other.0
    }
}

mod display {
    use std::fmt;

    use super::Frequency;

    impl fmt::Display for Frequency {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.value())
        }
    }
}
