//! Shared library for `cgpa-analytics`
//! Contains the parsing, aggregation, and target-GPA core used by the CLI.

pub mod core;

pub use crate::core::config;

/// Returns the current version of the `cgpa-analytics` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
