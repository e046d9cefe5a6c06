// crates/ports/src/source.rs
use freq_count_shared_kernel::{Element, Result};

/// Port supplying the ordered values to be tallied.
pub trait SequenceSource: Send + Sync {
    /// Short label used in logs and error context.
    fn name(&self) -> &str;

    fn load(&self) -> Result<Vec<Element>>;
}
