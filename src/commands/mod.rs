//! Command implementations for the `prdplan` binary
//!
//! Each analysis command reads a PRD, runs one engine (or all three for
//! `analyze`) and prints the report as text or JSON. Commands whose report
//! can be invalid return `false` so the binary can exit non-zero.

pub mod analyze;
pub mod common;
pub mod evaluate;
pub mod plan;
pub mod validate;

pub use common::CommandContext;
