//! Member id to display name resolution.

use std::collections::HashMap;

use tracing::debug;

use crate::api::BoardSource;
use crate::error::Result;
use crate::state::{HoursLedger, Member};

/// Display-name corrections.
///
/// Keys match either a member id or a name as resolved from the profile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasTable {
    aliases: HashMap<String, String>,
}

impl AliasTable {
    #[must_use]
    pub fn new(aliases: HashMap<String, String>) -> Self {
        Self { aliases }
    }

    /// Final display name for `member`: an alias on its id, else an alias on
    /// its resolved name, else the resolved name.
    #[must_use]
    pub fn display_name(&self, member: &Member) -> String {
        let resolved = member.display_name();
        self.aliases
            .get(&member.id)
            .or_else(|| self.aliases.get(resolved))
            .map_or_else(|| resolved.to_string(), Clone::clone)
    }
}

/// Rekeys a ledger from member ids to display names.
///
/// Each id is looked up once, in ledger order. Ids that end up with the same
/// display name are merged into a single record.
///
/// # Errors
///
/// Propagates the first failed member lookup.
pub fn resolve_names<S>(
    source: &S,
    by_id: &HoursLedger,
    aliases: &AliasTable,
) -> Result<HoursLedger>
where
    S: BoardSource + ?Sized,
{
    let mut by_name = HoursLedger::new();
    for (member_id, record) in by_id.iter() {
        let member = source.member(member_id)?;
        let name = aliases.display_name(&member);
        debug!(member = member_id, name = %name, "resolved member");
        by_name.entry(&name).merge(record);
    }
    Ok(by_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(id: &str, full_name: Option<&str>, username: Option<&str>) -> Member {
        Member {
            id: id.to_string(),
            full_name: full_name.map(str::to_string),
            username: username.map(str::to_string),
        }
    }

    fn table(pairs: &[(&str, &str)]) -> AliasTable {
        AliasTable::new(
            pairs
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_no_alias_uses_profile_name() {
        let aliases = AliasTable::default();
        assert_eq!(aliases.display_name(&member("m1", Some("Ada"), None)), "Ada");
        assert_eq!(aliases.display_name(&member("m1", None, None)), "m1");
    }

    #[test]
    fn test_alias_on_resolved_name() {
        let aliases = table(&[("simonvdhende", "Simon Van Den Hende")]);
        let simon = member("m9", None, Some("simonvdhende"));
        assert_eq!(aliases.display_name(&simon), "Simon Van Den Hende");
    }

    #[test]
    fn test_alias_on_id_takes_precedence() {
        let aliases = table(&[("m1", "By Id"), ("Ada", "By Name")]);
        assert_eq!(aliases.display_name(&member("m1", Some("Ada"), None)), "By Id");
    }
}
