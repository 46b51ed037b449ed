//! Board, list, card and member records as returned by the board API.

use serde::Deserialize;

/// A board visible to the authenticated identity.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Board {
    /// Remote identifier.
    pub id: String,
    /// Board title.
    #[serde(default)]
    pub name: String,
}

/// A column on a board. Lists arrive in board order.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct List {
    /// Remote identifier.
    pub id: String,
    /// Column title, used for tracking and done classification.
    #[serde(default)]
    pub name: String,
}

/// A ticket on a list.
///
/// The title may carry `(estimated)` and `[completed]` hour annotations.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Card {
    /// Remote identifier.
    pub id: String,
    /// Card title as shown on the board.
    #[serde(rename = "name", default)]
    pub title: String,
    /// Assigned member ids, possibly empty.
    #[serde(rename = "idMembers", default)]
    pub member_ids: Vec<String>,
}

/// A member profile.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Member {
    /// Remote identifier.
    pub id: String,
    /// Full name, when the member has set one.
    #[serde(rename = "fullName", default)]
    pub full_name: Option<String>,
    /// Login handle.
    #[serde(default)]
    pub username: Option<String>,
}

impl Member {
    /// Best human-readable name: full name, then username, then the raw id.
    ///
    /// Blank values count as missing.
    #[must_use]
    pub fn display_name(&self) -> &str {
        [self.full_name.as_deref(), self.username.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|name| !name.is_empty())
            .unwrap_or(self.id.as_str())
    }
}
