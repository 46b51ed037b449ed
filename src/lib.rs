//! Burndown: per-member hour reports for a Trello board.
//!
//! Card titles carry hour annotations, `(estimated)` and `[completed]`.
//! The library fetches a board through a [`api::BoardSource`], splits each
//! card's hours evenly across its assignees, and renders the totals per
//! member together with the share of done tickets.

pub mod api;
pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod error;
pub mod state;

pub use error::{BurndownError, Result};
