//! In-memory data model for one report run.
//!
//! Everything here is fetched fresh per run and dropped on exit.

mod board;
mod hours;

pub use board::{Board, Card, List, Member};
pub use hours::{Bucket, HoursLedger, HoursRecord};
