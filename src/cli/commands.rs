//! CLI command handlers.

use std::io::{self, Write};

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use crossterm::{cursor, execute, terminal};
use tracing::info;

use super::args::Args;
use super::report;
use crate::api::TrelloClient;
use crate::config::{Credentials, Settings};
use crate::core;

/// Loads configuration, runs the pipeline against the live API, and prints
/// the report to stdout.
///
/// Configuration is fully loaded before the first request is sent.
pub fn run_report(args: &Args) -> Result<()> {
    let credentials = Credentials::load(&args.auth)?;
    let settings = resolve_settings(args)?;

    let client = TrelloClient::new(&settings, credentials)?;
    let summary = core::run(&client, &settings)?;
    info!(
        board = %summary.board,
        members = summary.members.len(),
        done = summary.done_count,
        total = summary.total_count,
        "report ready"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.clear {
        clear_screen(&mut out)?;
    }
    report::render(&summary, &mut out).wrap_err("Failed to write report")?;
    out.flush()?;

    if let Some(notice) = report::unassigned_notice(summary.unassigned_count) {
        eprintln!("{notice}");
    }
    Ok(())
}

/// Settings file values with command-line overrides applied.
fn resolve_settings(args: &Args) -> Result<Settings> {
    let mut settings = Settings::load(args.config.as_deref())?;
    if let Some(board) = &args.board {
        settings.board.clone_from(board);
    }
    Ok(settings)
}

fn clear_screen<W: Write>(out: &mut W) -> Result<()> {
    execute!(
        out,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )
    .wrap_err("Failed to clear terminal")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::{Path, PathBuf};

    // Built by hand so BURNDOWN_* variables in the shell cannot leak in.
    fn args(board: Option<&str>, config: Option<&Path>, auth: &Path) -> Args {
        Args {
            board: board.map(str::to_string),
            config: config.map(Path::to_path_buf),
            auth: auth.to_path_buf(),
            clear: false,
            verbose: false,
            quiet: false,
        }
    }

    #[test]
    fn test_board_flag_overrides_settings_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "board = \"From File\"").unwrap();
        let auth = PathBuf::from("auth.json");

        let with_flag = args(Some("From Flag"), Some(file.path()), &auth);
        assert_eq!(resolve_settings(&with_flag).unwrap().board, "From Flag");

        let without_flag = args(None, Some(file.path()), &auth);
        assert_eq!(resolve_settings(&without_flag).unwrap().board, "From File");
    }

    #[test]
    fn test_missing_credentials_fail_before_network() {
        let dir = tempfile::tempdir().unwrap();
        let auth = dir.path().join("auth.json");
        let err = run_report(&args(None, None, &auth)).unwrap_err();
        assert!(err.to_string().contains("configuration error"));
    }

    #[test]
    fn test_clear_screen_emits_escape_sequence() {
        let mut buf = Vec::new();
        clear_screen(&mut buf).unwrap();
        assert!(buf.starts_with(b"\x1b["));
    }
}
