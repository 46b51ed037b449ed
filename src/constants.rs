//! Application-wide constants and configuration values.
//!
//! This module defines all static values used throughout burndown,
//! including API endpoints, default board settings, file names, and the
//! fixed strings of the printed report.

use std::time::Duration;

// === Application Metadata ===

/// Application name (from Cargo.toml).
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
/// Current application version (from Cargo.toml).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// === Path Configuration ===

/// Default credentials file, resolved against the working directory.
pub const DEFAULT_AUTH_FILE: &str = "auth.json";
/// Name of the settings subdirectory under the platform config dir.
pub const CONFIG_DIR_NAME: &str = "burndown";
/// Name of the settings file.
pub const CONFIG_FILE_NAME: &str = "config.toml";

// === Environment ===

/// Overrides the tracing filter (e.g. `BURNDOWN_LOG=debug`).
pub const ENV_LOG_FILTER: &str = "BURNDOWN_LOG";

// === Board API ===

/// Base URL of the board REST API.
pub const DEFAULT_API_URL: &str = "https://api.trello.com/1";
/// Boards visible to the authenticated identity.
pub const PATH_MY_BOARDS: &str = "/members/me/boards";
/// Timeout for a single API request.
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

// === Board Defaults ===

/// Board selected when neither the settings file nor `--board` names one.
pub const DEFAULT_BOARD: &str = "Led's Run Kanban";
/// Lists whose name contains this marker are not tracked.
pub const DEFAULT_EXCLUDE_MARKER: &str = "NoBurn";
/// Lowercased name of the list that holds finished cards.
pub const DEFAULT_DONE_LIST: &str = "done";
/// Built-in display-name corrections (member id or resolved name -> display).
pub const DEFAULT_ALIASES: [(&str, &str); 1] = [("simonvdhende", "Simon Van Den Hende")];

// === Report ===

/// Width of the `*` rule framing the per-member section.
pub const REPORT_RULE_WIDTH: usize = 50;
pub const LABEL_HOURS_PLANNED: &str = "Hours planned";
pub const LABEL_HOURS_WORKED: &str = "Hours worked";
pub const LABEL_HOURS_REMAINING: &str = "Hours remaining";
pub const LABEL_TOTAL_PLANNED: &str = "Total hours planned";
pub const LABEL_TOTAL_WORKED: &str = "Total hours worked";
pub const LABEL_TOTAL_REMAINING: &str = "Total hours remaining";
pub const MSG_TICKETS_DONE_SUFFIX: &str = "tickets are done";
pub const MSG_UNASSIGNED_SUFFIX: &str = "ticket(s) without assignee left out of hour totals";

// === Error Messages ===

pub const ERR_HTTP_CLIENT_BUILD_FAILED: &str = "Failed to build HTTP client";
pub const ERR_NETWORK_REQUEST_FAILED: &str = "Network request failed";
pub const ERR_SERVER_ERROR: &str = "Server returned error: ";
pub const ERR_DECODE_FAILED: &str = "Unexpected payload";
pub const ERR_MISSING_FIELD: &str = "missing or empty field";
