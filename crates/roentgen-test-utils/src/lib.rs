//! Test utilities for Roentgen development.
//!
//! Not published; shared by unit and integration tests across the
//! workspace.

#![forbid(unsafe_code)]

mod fixtures;

pub use fixtures::{DepositRecord, FixtureGrid};
