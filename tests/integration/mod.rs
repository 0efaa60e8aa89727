//! Integration tests for prdplan
//!
//! These tests drive the public engines and the binary end to end:
//! combined analysis, config resolution and graph properties over
//! generated PRDs.

pub mod cli;
pub mod config_resolution;
pub mod end_to_end;
pub mod helpers;
pub mod properties;
