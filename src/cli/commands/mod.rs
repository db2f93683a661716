//! CLI command handlers for `cgpa-analytics`.
//!
//! This module provides handlers for various CLI subcommands.
//! Each command is implemented in its own submodule.

pub mod analyze;
pub mod config;
pub mod target;
