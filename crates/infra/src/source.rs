// crates/infra/src/source.rs
use freq_count_domain::InputSequence;
use freq_count_ports::source::SequenceSource;
use freq_count_shared_kernel::{Element, Result};

/// Source backed by the sequence compiled into the binary.
#[derive(Debug, Clone)]
pub struct BuiltinSequence {
    sequence: InputSequence,
}

impl BuiltinSequence {
    pub fn new() -> Self {
        Self { sequence: InputSequence::builtin() }
    }
}

impl Default for BuiltinSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl SequenceSource for BuiltinSequence {
    fn name(&self) -> &str {
        "builtin"
    }

    fn load(&self) -> Result<Vec<Element>> {
        Ok(self.sequence.as_slice().to_vec())
    }
}
