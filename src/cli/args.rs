//! Command-line argument definitions.

use std::path::PathBuf;

use clap::Parser;

use crate::constants;

/// Burndown - hours planned, worked and remaining per team member
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Board to report on (overrides the settings file)
    #[arg(short, long, env = "BURNDOWN_BOARD")]
    pub board: Option<String>,

    /// Settings file (defaults to <config dir>/burndown/config.toml)
    #[arg(short, long, env = "BURNDOWN_CONFIG")]
    pub config: Option<PathBuf>,

    /// JSON file holding the API `key` and `token`
    #[arg(short, long, env = "BURNDOWN_AUTH", default_value = constants::DEFAULT_AUTH_FILE)]
    pub auth: PathBuf,

    /// Clear the terminal before printing the report
    #[arg(long)]
    pub clear: bool,

    /// Log debug output to stderr
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Default tracing level for these flags.
    #[must_use]
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::ffi::OsStr;

    #[test]
    fn test_args_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_no_flags_runs_defaults() {
        let args = Args::try_parse_from(["burndown"]).unwrap();
        assert!(!args.clear);
        assert_eq!(args.log_level(), "warn");
    }

    #[test]
    fn test_auth_defaults_to_working_directory_file() {
        // Read from the definition; parsing would pick up BURNDOWN_AUTH.
        let command = Args::command();
        let auth = command
            .get_arguments()
            .find(|arg| arg.get_id() == "auth")
            .unwrap();
        let defaults: Vec<_> = auth.get_default_values().iter().map(|v| v.to_str()).collect();
        assert_eq!(defaults, vec![Some("auth.json")]);
        assert_eq!(auth.get_env(), Some(OsStr::new("BURNDOWN_AUTH")));
    }

    #[test]
    fn test_flags() {
        let args = Args::try_parse_from([
            "burndown", "--board", "Sprint 4", "--auth", "/tmp/a.json", "--clear", "-v",
        ])
        .unwrap();
        assert_eq!(args.board.as_deref(), Some("Sprint 4"));
        assert_eq!(args.auth, PathBuf::from("/tmp/a.json"));
        assert!(args.clear);
        assert_eq!(args.log_level(), "debug");
    }

    #[test]
    fn test_verbose_and_quiet_conflict() {
        assert!(Args::try_parse_from(["burndown", "-v", "-q"]).is_err());
    }
}
