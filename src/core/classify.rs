//! Tracked-list and done-list classification.

use crate::config::Settings;
use crate::state::{Bucket, List};

/// Name rules deciding which lists count and which one is "done".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRules {
    exclude_marker: String,
    done_list: String,
}

impl ListRules {
    /// `done_list` is compared against lowercased list names, so it is
    /// lowercased here too.
    #[must_use]
    pub fn new(exclude_marker: impl Into<String>, done_list: &str) -> Self {
        Self {
            exclude_marker: exclude_marker.into(),
            done_list: done_list.to_lowercase(),
        }
    }

    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.exclude_marker.clone(), &settings.done_list)
    }

    /// A list is tracked unless its name contains the marker (case-sensitive).
    #[must_use]
    pub fn is_tracked(&self, list: &List) -> bool {
        !list.name.contains(&self.exclude_marker)
    }

    /// Bucket for a list, or `None` if the list is not tracked.
    #[must_use]
    pub fn classify(&self, list: &List) -> Option<Bucket> {
        if !self.is_tracked(list) {
            return None;
        }
        if list.name.to_lowercase() == self.done_list {
            Some(Bucket::Done)
        } else {
            Some(Bucket::InProgress)
        }
    }
}

impl Default for ListRules {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}
