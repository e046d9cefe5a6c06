use std::collections::BTreeMap;

use freq_count_shared_kernel::{DomainResult, Element, Frequency};
use serde::{Deserialize, Serialize};

use crate::value_objects::{InputSequence, ValueRange};

/// One reported line: a value and how often it occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TallyRow {
    pub element: Element,
    pub frequency: Frequency,
}

/// Occurrence counts keyed by value.
///
/// Only nonzero counts are stored, so iteration yields exactly the rows a
/// report prints, in ascending order of value. A bounded table rejects any
/// element outside its [`ValueRange`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TallyTable {
    counts: BTreeMap<Element, Frequency>,
    range: Option<ValueRange>,
}

impl TallyTable {
    pub fn bounded(range: ValueRange) -> Self {
        Self { counts: BTreeMap::new(), range: Some(range) }
    }

    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Count one occurrence of `element`.
    ///
    /// # Errors
    /// Returns `DomainError::ValueOutOfRange` when the table is bounded and
    /// `element` falls outside it. The table is left unchanged in that case.
    pub fn record(&mut self, element: Element) -> DomainResult<()> {
        if let Some(range) = self.range {
            range.check(element)?;
        }
        self.counts.entry(element).or_default().increment();
        Ok(())
    }

    /// Occurrences of `element`; zero when it never occurred.
    pub fn get(&self, element: Element) -> Frequency {
        self.counts.get(&element).copied().unwrap_or_default()
    }

    /// Nonzero counts, ascending by value.
    pub fn iter(&self) -> impl Iterator<Item = (Element, Frequency)> + '_ {
        self.counts.iter().map(|(element, frequency)| (*element, *frequency))
    }

    pub fn rows(&self) -> Vec<TallyRow> {
        self.iter().map(|(element, frequency)| TallyRow { element, frequency }).collect()
    }

    /// Sum of all counts, equal to the number of recorded elements.
    pub fn total(&self) -> Frequency {
        self.counts.values().sum()
    }

    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub const fn range(&self) -> Option<ValueRange> {
        self.range
    }
}

/// Tally every element of `sequence`, in order.
///
/// With `range` set, the first element outside it aborts the count.
///
/// # Errors
/// Returns `DomainError::ValueOutOfRange` for the first offending element.
pub fn tally(sequence: &InputSequence, range: Option<ValueRange>) -> DomainResult<TallyTable> {
    let mut table = range.map_or_else(TallyTable::unbounded, TallyTable::bounded);
    for element in sequence.iter() {
        table.record(element)?;
    }
    log::debug!(
        "tallied {} elements into {} distinct values",
        sequence.len(),
        table.distinct()
    );
    Ok(table)
}
