//! Hour accumulators keyed by member.

use std::collections::HashMap;

/// Which side of the completion ratio a tracked list feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    /// The done list; counts toward the done tickets.
    Done,
    /// Any other tracked list.
    InProgress,
}

impl Bucket {
    /// Check if cards in this bucket count as finished
    #[must_use]
    pub const fn is_done(self) -> bool {
        matches!(self, Self::Done)
    }
}

/// Running hour totals for one member.
///
/// `remaining` accumulates `(estimated - completed) / assignees` per card, so
/// it always equals `estimated - completed` up to float rounding.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HoursRecord {
    /// Planned hours.
    pub estimated: f64,
    /// Hours already worked.
    pub completed: f64,
    /// Planned hours not yet worked.
    pub remaining: f64,
}

impl HoursRecord {
    /// Adds one card's share: both values divided by `share_count`.
    ///
    /// `share_count` must be non-zero; the aggregator skips unassigned cards
    /// before calling this.
    pub fn add_share(&mut self, estimated: f64, completed: f64, share_count: usize) {
        debug_assert!(share_count > 0, "card share split across zero members");
        #[allow(clippy::cast_precision_loss)]
        let n = share_count as f64;
        self.estimated += estimated / n;
        self.completed += completed / n;
        self.remaining += (estimated - completed) / n;
    }

    /// Adds another record into this one.
    pub fn merge(&mut self, other: &HoursRecord) {
        self.estimated += other.estimated;
        self.completed += other.completed;
        self.remaining += other.remaining;
    }
}

/// Per-member totals that remember first-appearance order.
///
/// Iteration follows the order in which keys were first inserted, not any
/// sort order, so report output is stable for a stable board.
#[derive(Debug, Clone, Default)]
pub struct HoursLedger {
    entries: Vec<(String, HoursRecord)>,
    index: HashMap<String, usize>,
}

impl HoursLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mutable record for `key`, inserting a zeroed one on first sight.
    pub fn entry(&mut self, key: &str) -> &mut HoursRecord {
        let idx = match self.index.get(key) {
            Some(&idx) => idx,
            None => {
                self.entries.push((key.to_string(), HoursRecord::default()));
                let idx = self.entries.len() - 1;
                self.index.insert(key.to_string(), idx);
                idx
            }
        };
        &mut self.entries[idx].1
    }

    /// Record for `key`, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&HoursRecord> {
        self.index.get(key).map(|&idx| &self.entries[idx].1)
    }

    /// Entries in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &HoursRecord)> {
        self.entries.iter().map(|(key, record)| (key.as_str(), record))
    }

    /// Keys in first-appearance order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all records.
    #[must_use]
    pub fn total(&self) -> HoursRecord {
        let mut total = HoursRecord::default();
        for (_, record) in &self.entries {
            total.merge(record);
        }
        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_is_done() {
        assert!(Bucket::Done.is_done());
        assert!(!Bucket::InProgress.is_done());
    }

    #[test]
    fn test_add_share_splits_evenly() {
        let mut record = HoursRecord::default();
        record.add_share(4.0, 2.0, 2);
        assert_eq!(
            record,
            HoursRecord {
                estimated: 2.0,
                completed: 1.0,
                remaining: 1.0,
            }
        );
    }

    #[test]
    fn test_ledger_keeps_first_appearance_order() {
        let mut ledger = HoursLedger::new();
        ledger.entry("zed").add_share(1.0, 0.0, 1);
        ledger.entry("amy").add_share(1.0, 0.0, 1);
        ledger.entry("zed").add_share(1.0, 0.0, 1);

        assert_eq!(ledger.keys().collect::<Vec<_>>(), vec!["zed", "amy"]);
        assert_eq!(ledger.get("zed").map(|r| r.estimated), Some(2.0));
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn test_ledger_total() {
        let mut ledger = HoursLedger::new();
        ledger.entry("a").add_share(4.0, 2.0, 2);
        ledger.entry("b").add_share(3.0, 3.0, 1);

        let total = ledger.total();
        assert_eq!(total.estimated, 5.0);
        assert_eq!(total.completed, 4.0);
        assert_eq!(total.remaining, 1.0);
    }
}
