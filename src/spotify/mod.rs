//! # Spotify Integration Module
//!
//! Thin client for the three Spotify Web API endpoints podsearch needs:
//!
//! ```text
//! Presentation Layer (api, cli)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (client-credentials grant)
//!     ├── Show Search (one request per market)
//!     └── Episode Listing (offset/limit pages)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Failure policy
//!
//! Every outbound call is wrapped in a function returning an explicit
//! `Result` ([`auth::AuthError`] or [`SpotifyError`]). The policy functions on
//! top of those, [`SpotifyClient::search`] and [`SpotifyClient::list_episodes`],
//! log the failure and turn it into an empty result so the web layer always
//! has something to render. Nothing is retried.
//!
//! ## Tokens
//!
//! No token is ever cached. Each search market and each episode page fetches
//! a fresh token right before its request.

use std::{sync::Arc, time::Duration};

use reqwest::{Client, StatusCode};
use thiserror::Error;

use crate::config::Config;

pub mod auth;
pub mod episodes;
pub mod search;

pub use auth::AuthError;
pub use episodes::PAGE_SIZE;
pub use search::SEARCH_LIMIT;

/// Failure of a single API call after authentication was attempted.
#[derive(Debug, Error)]
pub enum SpotifyError {
    #[error("authentication failed: {0}")]
    Auth(#[from] AuthError),

    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("unexpected status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("invalid response body: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Shared handle for talking to Spotify.
///
/// Holds the process configuration and one pooled HTTP client. Cloning is
/// cheap; no per-request state lives here.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    http: Client,
    config: Arc<Config>,
}

impl SpotifyClient {
    /// Builds a client whose requests all time out after `config.request_timeout`.
    ///
    /// # Errors
    ///
    /// Fails only if the underlying TLS backend cannot be initialised.
    pub fn new(config: Arc<Config>) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.request_timeout.min(Duration::from_secs(5)))
            .build()?;

        Ok(SpotifyClient { http, config })
    }

    pub fn markets(&self) -> &[String] {
        &self.config.markets
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.config.api_url, path.trim_start_matches('/'))
    }

    /// Sends an authenticated GET and decodes a successful JSON body.
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        token: &str,
        query: &[(&str, String)],
    ) -> Result<T, SpotifyError> {
        tracing::debug!(url = %url, "Spotify API request");

        let response = self
            .http
            .get(url)
            .bearer_auth(token)
            .query(query)
            .send()
            .await
            .map_err(SpotifyError::Transport)?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("<failed to read body>"));
            return Err(SpotifyError::Status { status, body });
        }

        response.json::<T>().await.map_err(SpotifyError::Decode)
    }
}
