//! Blocking HTTP client for the Trello REST API.

use reqwest::blocking::Client;
use reqwest::header::{HeaderValue, ACCEPT};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::BoardSource;
use crate::config::{Credentials, Settings};
use crate::constants;
use crate::error::{BurndownError, Result};
use crate::state::{Board, Card, List, Member};

/// Board API client authenticated with key and token query parameters.
pub struct TrelloClient {
    http: Client,
    base_url: String,
    credentials: Credentials,
}

impl TrelloClient {
    /// Builds a client for the API at `settings.api_url`.
    ///
    /// # Errors
    ///
    /// Returns [`BurndownError::Fetch`] if the HTTP client cannot be built.
    pub fn new(settings: &Settings, credentials: Credentials) -> Result<Self> {
        let http = Client::builder()
            .timeout(constants::HTTP_TIMEOUT)
            .user_agent(format!("{}/{}", constants::APP_NAME, constants::APP_VERSION))
            .build()
            .map_err(|e| {
                BurndownError::fetch(
                    &settings.api_url,
                    format!("{}: {e}", constants::ERR_HTTP_CLIENT_BUILD_FAILED),
                )
            })?;

        Ok(Self {
            http,
            base_url: settings.api_url.trim_end_matches('/').to_string(),
            credentials,
        })
    }

    /// GETs `path` and decodes the JSON body.
    ///
    /// Errors name `path` only; the credentials never reach error text.
    fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        debug!(endpoint = path, "GET");

        let response = self
            .http
            .get(format!("{}{path}", self.base_url))
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .query(&[
                ("key", self.credentials.key.as_str()),
                ("token", self.credentials.token.as_str()),
            ])
            .send()
            .map_err(|e| {
                BurndownError::fetch(
                    path,
                    format!("{}: {}", constants::ERR_NETWORK_REQUEST_FAILED, e.without_url()),
                )
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(BurndownError::fetch(
                path,
                format!("{}{status}", constants::ERR_SERVER_ERROR),
            ));
        }

        response.json::<T>().map_err(|e| {
            BurndownError::fetch(
                path,
                format!("{}: {}", constants::ERR_DECODE_FAILED, e.without_url()),
            )
        })
    }
}

/// `/{collection}/{id}{suffix}` with `id` percent-encoded.
fn resource_path(collection: &str, id: &str, suffix: &str) -> String {
    format!("/{collection}/{}{suffix}", urlencoding::encode(id))
}

impl BoardSource for TrelloClient {
    fn boards(&self) -> Result<Vec<Board>> {
        self.get(constants::PATH_MY_BOARDS)
    }

    fn lists(&self, board_id: &str) -> Result<Vec<List>> {
        self.get(&resource_path("boards", board_id, "/lists"))
    }

    fn cards(&self, list_id: &str) -> Result<Vec<Card>> {
        self.get(&resource_path("lists", list_id, "/cards"))
    }

    fn member(&self, member_id: &str) -> Result<Member> {
        self.get(&resource_path("members", member_id, ""))
    }
}
