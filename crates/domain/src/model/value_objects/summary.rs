use freq_count_shared_kernel::Frequency;
use serde::{Deserialize, Serialize};

use crate::model::TallyTable;

/// Totals over a tally table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub total: Frequency,
    pub distinct: usize,
}

impl Summary {
    pub fn from_table(table: &TallyTable) -> Self {
        Self { total: table.total(), distinct: table.distinct() }
    }
}
