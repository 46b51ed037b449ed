//! Plain-text hours report.
//!
//! Prints one block per member in first-appearance order, the grand totals,
//! and the done ratio. All hour values use two decimals.

use std::io::{self, Write};

use crate::constants;
use crate::core::Summary;
use crate::state::HoursRecord;

// ── Public entry point ──────────────────────────────────────────────────────

/// Writes the full report for `summary` to `out`.
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn render<W: Write>(summary: &Summary, out: &mut W) -> io::Result<()> {
    let rule = "*".repeat(constants::REPORT_RULE_WIDTH);

    writeln!(out, "{rule}")?;
    for (name, hours) in summary.members.iter() {
        write_member(out, name, hours)?;
    }
    writeln!(out, "{rule}")?;

    write_totals(out, &summary.members.total())?;
    writeln!(out)?;
    writeln!(out, "{}", ratio_line(summary.done_count, summary.total_count))
}

/// `<done>/<total> tickets are done`
#[must_use]
pub fn ratio_line(done: usize, total: usize) -> String {
    format!("{done}/{total} {}", constants::MSG_TICKETS_DONE_SUFFIX)
}

/// Data-quality line for cards left out of the hour totals, if any.
#[must_use]
pub fn unassigned_notice(count: usize) -> Option<String> {
    (count > 0).then(|| format!("{count} {}", constants::MSG_UNASSIGNED_SUFFIX))
}

// ── Sections ────────────────────────────────────────────────────────────────

fn write_member<W: Write>(out: &mut W, name: &str, hours: &HoursRecord) -> io::Result<()> {
    writeln!(out, "{name}:")?;
    writeln!(out, "{}: {:.2}", constants::LABEL_HOURS_PLANNED, hours.estimated)?;
    writeln!(out, "{}: {:.2}", constants::LABEL_HOURS_WORKED, hours.completed)?;
    writeln!(out, "{}: {:.2}", constants::LABEL_HOURS_REMAINING, hours.remaining)?;
    writeln!(out)
}

fn write_totals<W: Write>(out: &mut W, total: &HoursRecord) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}: {:.2}", constants::LABEL_TOTAL_PLANNED, total.estimated)?;
    writeln!(out, "{}: {:.2}", constants::LABEL_TOTAL_WORKED, total.completed)?;
    writeln!(out, "{}: {:.2}", constants::LABEL_TOTAL_REMAINING, total.remaining)
}
