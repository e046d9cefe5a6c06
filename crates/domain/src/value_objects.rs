//! Value objects for frequency counting.

pub mod range;
pub mod sequence;

pub use freq_count_shared_kernel::value_objects::{Element, Frequency};
pub use range::ValueRange;
pub use sequence::InputSequence;
