//! Testing infrastructure for invox integration tests.
//!
//! This crate provides utilities for writing robust integration tests:
//! - `TestWorld`: isolated data directory plus a CLI command runner
//! - `fixtures`: sample invoice documents

pub mod fixtures;
pub mod world;

pub use world::TestWorld;
