// crates/shared-kernel/src/value_objects/mod.rs
pub mod counts;
pub mod element;

pub use counts::Frequency;
pub use element::Element;
