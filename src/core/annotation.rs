//! Hour annotations embedded in card titles.
//!
//! A title carries estimated hours in parentheses and completed hours in
//! square brackets, e.g. `Design API (5) [2]`. When a title holds several
//! numeric groups of the same kind, the last one wins.

use std::sync::OnceLock;

use regex::Regex;

/// Signed decimal, leading digit optional: `3`, `2.5`, `.5`, `-1.25`, `+4`.
const NUMBER: &str = r"[-+]?(?:\d*\.\d+|\d+)";

static ESTIMATE_PATTERN: OnceLock<Regex> = OnceLock::new();
static COMPLETED_PATTERN: OnceLock<Regex> = OnceLock::new();

// The greedy leading `.*` makes the capture land on the final match.
fn estimate_pattern() -> &'static Regex {
    ESTIMATE_PATTERN.get_or_init(|| {
        Regex::new(&format!(r"(?s)^.*\(({NUMBER})\)")).expect("Invalid estimate pattern")
    })
}

fn completed_pattern() -> &'static Regex {
    COMPLETED_PATTERN.get_or_init(|| {
        Regex::new(&format!(r"(?s)^.*\[({NUMBER})\]")).expect("Invalid completed pattern")
    })
}

/// The two optional numbers found in a card title.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Annotations {
    /// Value of the last `(n)` group.
    pub estimated: Option<f64>,
    /// Value of the last `[n]` group.
    pub completed: Option<f64>,
}

impl Annotations {
    /// Extracts both annotations from `title`.
    ///
    /// Never fails: a missing or unparsable group is `None`.
    #[must_use]
    pub fn parse(title: &str) -> Self {
        Self {
            estimated: last_number(estimate_pattern(), title),
            completed: last_number(completed_pattern(), title),
        }
    }

    /// Estimated hours, zero when the title has none.
    #[must_use]
    pub fn estimated_hours(&self) -> f64 {
        self.estimated.unwrap_or(0.0)
    }

    /// Completed hours, zero when the title has none.
    #[must_use]
    pub fn completed_hours(&self) -> f64 {
        self.completed.unwrap_or(0.0)
    }
}

fn last_number(pattern: &Regex, title: &str) -> Option<f64> {
    pattern
        .captures(title)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|value| value.is_finite())
}
