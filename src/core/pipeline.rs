//! The end-to-end report pipeline.
//!
//! boards -> target board -> tracked lists -> cards by bucket -> per-member
//! hours -> display names.

use tracing::{debug, info, warn};

use super::aggregate::aggregate;
use super::classify::ListRules;
use super::identity::{resolve_names, AliasTable};
use crate::api::BoardSource;
use crate::config::Settings;
use crate::error::{BurndownError, Result};
use crate::state::{Board, Bucket, Card, HoursLedger, List};

/// Everything the report prints.
#[derive(Debug, Clone, Default)]
pub struct Summary {
    /// Name of the board the numbers came from.
    pub board: String,
    /// Hour totals keyed by display name, in first-appearance order.
    pub members: HoursLedger,
    /// Cards in the done list.
    pub done_count: usize,
    /// Cards in all tracked lists, done included.
    pub total_count: usize,
    /// Cards skipped from hour totals because nobody is assigned.
    pub unassigned_count: usize,
}

/// Cards of the tracked lists, split by bucket.
#[derive(Debug, Clone, Default)]
pub struct TrackedCards {
    pub in_progress: Vec<Card>,
    pub done: Vec<Card>,
}

impl TrackedCards {
    #[must_use]
    pub fn total(&self) -> usize {
        self.in_progress.len() + self.done.len()
    }

    /// In-progress cards first, then done cards.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.in_progress.iter().chain(self.done.iter())
    }
}

/// First board whose name equals `name` exactly.
#[must_use]
pub fn find_board<'a>(boards: &'a [Board], name: &str) -> Option<&'a Board> {
    boards.iter().find(|board| board.name == name)
}

/// Fetches the cards of every tracked list in `lists`, in list order.
///
/// # Errors
///
/// Propagates the first failed card fetch.
pub fn collect_cards<S>(source: &S, lists: &[List], rules: &ListRules) -> Result<TrackedCards>
where
    S: BoardSource + ?Sized,
{
    let mut tracked = TrackedCards::default();
    for list in lists {
        let Some(bucket) = rules.classify(list) else {
            debug!(list = %list.name, "list not tracked");
            continue;
        };
        let cards = source.cards(&list.id)?;
        debug!(list = %list.name, ?bucket, cards = cards.len(), "fetched list");
        match bucket {
            Bucket::Done => tracked.done.extend(cards),
            Bucket::InProgress => tracked.in_progress.extend(cards),
        }
    }
    Ok(tracked)
}

/// Runs the full pipeline against `source`.
///
/// # Errors
///
/// Returns [`BurndownError::BoardNotFound`] when no board is named
/// `settings.board`, and propagates any remote fetch failure.
pub fn run<S>(source: &S, settings: &Settings) -> Result<Summary>
where
    S: BoardSource + ?Sized,
{
    let boards = source.boards()?;
    let board = find_board(&boards, &settings.board)
        .ok_or_else(|| BurndownError::BoardNotFound(settings.board.clone()))?;
    info!(board = %board.name, id = %board.id, "selected board");

    let lists = source.lists(&board.id)?;
    let rules = ListRules::from_settings(settings);
    let tracked = collect_cards(source, &lists, &rules)?;

    let aggregation = aggregate(tracked.iter());
    if !aggregation.unassigned.is_empty() {
        warn!(
            count = aggregation.unassigned.len(),
            "cards without assignees left out of hour totals"
        );
    }

    let aliases = AliasTable::new(settings.aliases.clone());
    let members = resolve_names(source, &aggregation.ledger, &aliases)?;

    Ok(Summary {
        board: board.name.clone(),
        members,
        done_count: tracked.done.len(),
        total_count: tracked.total(),
        unassigned_count: aggregation.unassigned.len(),
    })
}
