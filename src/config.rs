//! Credential and settings loading.
//!
//! Credentials live in a small JSON file holding the API `key` and `token`.
//! Settings are an optional TOML file that names the board, the list rules,
//! and the display-name alias table. Both are read once at startup and passed
//! explicitly into the pipeline.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::constants;
use crate::error::{BurndownError, Result};

/// API credentials sent as query parameters on every request.
#[derive(Clone, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub token: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("key", &"<redacted>")
            .field("token", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    /// Reads credentials from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`BurndownError::Config`] if the file is missing, is not valid
    /// JSON, or has an empty `key` or `token`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| BurndownError::config(path, e))?;
        let credentials =
            Self::parse(&content).map_err(|reason| BurndownError::config(path, reason))?;
        debug!(path = %path.display(), "loaded credentials");
        Ok(credentials)
    }

    fn parse(content: &str) -> Result<Self, String> {
        let credentials: Self = serde_json::from_str(content).map_err(|e| e.to_string())?;
        for (field, value) in [("key", &credentials.key), ("token", &credentials.token)] {
            if value.trim().is_empty() {
                return Err(format!("{} `{field}`", constants::ERR_MISSING_FIELD));
            }
        }
        Ok(credentials)
    }
}

/// Settings file contents; every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct SettingsFile {
    api_url: Option<String>,
    board: Option<String>,
    exclude_marker: Option<String>,
    done_list: Option<String>,
    aliases: Option<HashMap<String, String>>,
}

/// Resolved run settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Base URL of the board API, without a trailing slash.
    pub api_url: String,
    /// Name of the board to report on.
    pub board: String,
    /// Lists whose name contains this substring are not tracked.
    pub exclude_marker: String,
    /// Lowercased name of the done list.
    pub done_list: String,
    /// Display-name corrections keyed by member id or resolved name.
    pub aliases: HashMap<String, String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: constants::DEFAULT_API_URL.to_string(),
            board: constants::DEFAULT_BOARD.to_string(),
            exclude_marker: constants::DEFAULT_EXCLUDE_MARKER.to_string(),
            done_list: constants::DEFAULT_DONE_LIST.to_string(),
            aliases: constants::DEFAULT_ALIASES
                .iter()
                .map(|(from, to)| ((*from).to_string(), (*to).to_string()))
                .collect(),
        }
    }
}

impl Settings {
    /// Loads settings from `explicit` if given, else from the default
    /// location under the platform config directory.
    ///
    /// A missing default file yields [`Settings::default`]; a missing explicit
    /// file is an error.
    ///
    /// # Errors
    ///
    /// Returns [`BurndownError::Config`] when a file exists but cannot be read
    /// or parsed, or when `explicit` points at nothing.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_file(path),
            None => match default_config_path() {
                Some(path) if path.is_file() => Self::load_file(&path),
                _ => {
                    debug!("no settings file, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    /// Loads settings from a specific TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`BurndownError::Config`] if the file cannot be read or parsed.
    pub fn load_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| BurndownError::config(path, e))?;
        let settings =
            Self::from_toml(&content).map_err(|reason| BurndownError::config(path, reason))?;
        debug!(path = %path.display(), board = %settings.board, "loaded settings");
        Ok(settings)
    }

    fn from_toml(content: &str) -> Result<Self, String> {
        let file: SettingsFile = toml::from_str(content).map_err(|e| e.to_string())?;
        let mut settings = Self::default();

        if let Some(api_url) = file.api_url {
            Url::parse(&api_url).map_err(|e| format!("invalid api_url {api_url:?}: {e}"))?;
            settings.api_url = api_url.trim_end_matches('/').to_string();
        }
        if let Some(board) = file.board {
            settings.board = board;
        }
        if let Some(marker) = file.exclude_marker {
            if marker.is_empty() {
                return Err("exclude_marker must not be empty".to_string());
            }
            settings.exclude_marker = marker;
        }
        if let Some(done_list) = file.done_list {
            settings.done_list = done_list.to_lowercase();
        }
        if let Some(aliases) = file.aliases {
            settings.aliases = aliases;
        }

        Ok(settings)
    }
}

/// `<config dir>/burndown/config.toml`, when the platform has a config dir.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| {
        dir.join(constants::CONFIG_DIR_NAME)
            .join(constants::CONFIG_FILE_NAME)
    })
}
