//! Per-member hour aggregation.

use tracing::{debug, warn};

use super::annotation::Annotations;
use crate::state::{Card, HoursLedger};

/// Result of folding a set of cards into per-member totals.
#[derive(Debug, Clone, Default)]
pub struct Aggregation {
    /// Totals keyed by member id, in first-appearance order.
    pub ledger: HoursLedger,
    /// Ids of cards that had no assignee and were left out of the totals.
    pub unassigned: Vec<String>,
}

impl Aggregation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one card, splitting its hours evenly across its assignees.
    ///
    /// A card without assignees has nobody to attribute hours to; it is
    /// recorded in [`Aggregation::unassigned`] and contributes nothing.
    pub fn add_card(&mut self, card: &Card) {
        let hours = Annotations::parse(&card.title);

        if card.member_ids.is_empty() {
            if hours != Annotations::default() {
                warn!(
                    card = %card.id,
                    title = %card.title,
                    "card has hours but no assignee, skipping"
                );
            }
            self.unassigned.push(card.id.clone());
            return;
        }

        debug!(
            card = %card.id,
            estimated = hours.estimated_hours(),
            completed = hours.completed_hours(),
            assignees = card.member_ids.len(),
            "attributing card"
        );

        for member_id in &card.member_ids {
            self.ledger.entry(member_id).add_share(
                hours.estimated_hours(),
                hours.completed_hours(),
                card.member_ids.len(),
            );
        }
    }
}

/// Folds `cards` into per-member totals.
pub fn aggregate<'a>(cards: impl IntoIterator<Item = &'a Card>) -> Aggregation {
    let mut aggregation = Aggregation::new();
    for card in cards {
        aggregation.add_card(card);
    }
    aggregation
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::HoursRecord;

    fn card(id: &str, title: &str, members: &[&str]) -> Card {
        Card {
            id: id.to_string(),
            title: title.to_string(),
            member_ids: members.iter().map(|m| (*m).to_string()).collect(),
        }
    }

    fn approx(a: &HoursRecord, b: &HoursRecord) -> bool {
        (a.estimated - b.estimated).abs() < 1e-9
            && (a.completed - b.completed).abs() < 1e-9
            && (a.remaining - b.remaining).abs() < 1e-9
    }

    #[test]
    fn test_even_split_across_two_assignees() {
        let result = aggregate(&[card("c1", "Build (4) [2]", &["ann", "bob"])]);

        let expected = HoursRecord {
            estimated: 2.0,
            completed: 1.0,
            remaining: 1.0,
        };
        assert_eq!(result.ledger.get("ann"), Some(&expected));
        assert_eq!(result.ledger.get("bob"), Some(&expected));
    }

    #[test]
    fn test_unassigned_card_is_skipped() {
        let result = aggregate(&[
            card("c1", "Orphan (8) [1]", &[]),
            card("c2", "Owned (2)", &["ann"]),
        ]);

        assert_eq!(result.unassigned, vec!["c1"]);
        assert_eq!(result.ledger.len(), 1);
        assert_eq!(result.ledger.total().estimated, 2.0);
    }

    #[test]
    fn test_unannotated_card_still_registers_member() {
        let result = aggregate(&[card("c1", "No hours yet", &["ann"])]);
        assert_eq!(result.ledger.get("ann"), Some(&HoursRecord::default()));
    }

    #[test]
    fn test_remaining_tracks_estimated_minus_completed() {
        let result = aggregate(&[
            card("c1", "A (3) [1]", &["ann", "bob", "cid"]),
            card("c2", "B (7.5) [2.5]", &["ann"]),
            card("c3", "C [4]", &["bob"]),
        ]);

        for (_, record) in result.ledger.iter() {
            assert!((record.remaining - (record.estimated - record.completed)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_order_independent() {
        let cards = [
            card("c1", "A (3) [1]", &["ann", "bob", "cid"]),
            card("c2", "B (7.5) [2.5]", &["ann"]),
            card("c3", "C [4]", &["bob", "ann"]),
            card("c4", "D (.5)", &["cid"]),
        ];
        let forward = aggregate(&cards);
        let reversed = aggregate(cards.iter().rev());
        let rotated = aggregate(cards.iter().cycle().skip(2).take(cards.len()));

        for other in [&reversed, &rotated] {
            assert_eq!(other.ledger.len(), forward.ledger.len());
            for (id, record) in forward.ledger.iter() {
                assert!(approx(record, other.ledger.get(id).unwrap()), "mismatch for {id}");
            }
        }
    }
}
