//! Remote board access.
//!
//! The report logic only talks to [`BoardSource`]; [`TrelloClient`] is the
//! HTTP implementation used by the binary, and tests substitute an in-memory
//! board.

mod client;

pub use client::TrelloClient;

use crate::error::Result;
use crate::state::{Board, Card, List, Member};

/// The four read operations the report needs from a board service.
pub trait BoardSource {
    /// Boards visible to the authenticated identity.
    fn boards(&self) -> Result<Vec<Board>>;

    /// Lists of a board, in board order.
    fn lists(&self, board_id: &str) -> Result<Vec<List>>;

    /// Cards of a list, in list order.
    fn cards(&self, list_id: &str) -> Result<Vec<Card>>;

    /// A member profile.
    fn member(&self, member_id: &str) -> Result<Member>;
}
