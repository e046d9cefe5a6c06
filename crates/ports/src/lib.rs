//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`source`]: where the sequence to tally comes from
//! - [`report`]: where the finished frequency report goes
//!
//! These ports keep the use case independent of concrete adapters.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod report;
pub mod source;
