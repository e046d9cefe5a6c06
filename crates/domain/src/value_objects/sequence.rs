use freq_count_shared_kernel::Element;
use serde::{Deserialize, Serialize};

/// Values of the built-in sequence, in order.
pub const BUILTIN_VALUES: [i32; 10] = [1, 3, 9, 4, 1, 2, 5, 2, 5, 3];

/// Ordered, immutable sequence of elements to be tallied.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InputSequence(Vec<Element>);

impl InputSequence {
    pub fn from_values(values: &[i32]) -> Self {
        Self(values.iter().copied().map(Element::new).collect())
    }

    /// The sequence the program reports on.
    pub fn builtin() -> Self {
        Self::from_values(&BUILTIN_VALUES)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Element> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[Element] {
        &self.0
    }
}

impl FromIterator<Element> for InputSequence {
    fn from_iter<I: IntoIterator<Item = Element>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
