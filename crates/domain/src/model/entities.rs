pub mod tally_table;

pub use tally_table::{TallyRow, TallyTable, tally};
