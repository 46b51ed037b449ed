//! Command-line interface module.
//!
//! Provides argument parsing, the report command, and report rendering.

pub mod args;
pub mod commands;
pub mod report;
