use freq_count_shared_kernel::{DomainError, DomainResult, Element};
use serde::{Deserialize, Serialize};

/// Inclusive bounds on the values a tally table accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValueRange {
    min: Element,
    max: Element,
}

impl ValueRange {
    /// Single decimal digits, `[0, 9]`.
    pub const DIGITS: Self = Self { min: Element::new(0), max: Element::new(9) };

    /// Build a range, rejecting `min > max`.
    pub fn new(min: impl Into<Element>, max: impl Into<Element>) -> DomainResult<Self> {
        let (min, max) = (min.into(), max.into());
        if min > max {
            return Err(DomainError::InvalidRange { min: min.value(), max: max.value() });
        }
        Ok(Self { min, max })
    }

    #[inline]
    pub fn contains(self, element: Element) -> bool {
        self.min <= element && element <= self.max
    }

    /// Reject `element` unless it lies within the bounds.
    pub fn check(self, element: Element) -> DomainResult<Element> {
        if self.contains(element) {
            Ok(element)
        } else {
            Err(DomainError::ValueOutOfRange {
                value: element.value(),
                min: self.min.value(),
                max: self.max.value(),
            })
        }
    }

    /// Every value in the range, ascending.
    pub fn iter(self) -> impl Iterator<Item = Element> {
        (self.min.value()..=self.max.value()).map(Element::new)
    }
}

impl Default for ValueRange {
    fn default() -> Self {
        Self::DIGITS
    }
}
