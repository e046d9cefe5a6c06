pub mod entities;
pub mod value_objects;

pub use entities::{TallyRow, TallyTable, tally};
pub use value_objects::Summary;
