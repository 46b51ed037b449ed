//! Report logic: title parsing, list rules, aggregation, and name resolution.

pub mod aggregate;
pub mod annotation;
pub mod classify;
pub mod identity;
pub mod pipeline;

pub use pipeline::{run, Summary};
