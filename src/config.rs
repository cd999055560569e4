//! Configuration management for podsearch.
//!
//! Configuration is read once at process start into a [`Config`] value which is
//! then handed by reference to everything that talks to Spotify. Nothing in the
//! crate reads credentials from the environment after that point.
//!
//! Values are resolved in this order:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use std::{env, fmt, path::PathBuf, time::Duration};

/// Markets queried by every search unless `PODSEARCH_MARKETS` says otherwise.
pub const DEFAULT_MARKETS: [&str; 4] = ["US", "IT", "DE", "RO"];

pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:5000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Looks for `podsearch/.env` inside the platform-specific local data
/// directory and creates the directory if it does not exist yet:
/// - Linux: `~/.local/share/podsearch/.env`
/// - macOS: `~/Library/Application Support/podsearch/.env`
/// - Windows: `%LOCALAPPDATA%/podsearch/.env`
///
/// Variables already present in the process environment are left untouched.
/// A missing file is not an error; credentials may come from the environment
/// alone.
///
/// # Errors
///
/// Returns an error string if the directory cannot be created or the file
/// exists but cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Path of the `.env` file read by [`load_env`].
pub fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("podsearch/.env");
    path
}

/// Process-wide settings, built once and shared immutably.
#[derive(Clone)]
pub struct Config {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub token_url: String,
    pub api_url: String,
    pub server_address: String,
    pub markets: Vec<String>,
    pub request_timeout: Duration,
}

impl Config {
    /// Builds the configuration from the process environment.
    ///
    /// Missing credentials do not prevent the server from starting; every
    /// token exchange will fail instead.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let request_timeout = match non_empty("PODSEARCH_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    tracing::warn!(value = %raw, "invalid PODSEARCH_TIMEOUT_SECS, using default");
                    Duration::from_secs(DEFAULT_TIMEOUT_SECS)
                }
            },
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Self {
            client_id: non_empty("SPOTIFY_API_AUTH_CLIENT_ID"),
            client_secret: non_empty("SPOTIFY_API_AUTH_CLIENT_SECRET"),
            token_url: non_empty("SPOTIFY_API_TOKEN_URL")
                .unwrap_or_else(|| DEFAULT_TOKEN_URL.to_string()),
            api_url: non_empty("SPOTIFY_API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            server_address: non_empty("SERVER_ADDRESS")
                .unwrap_or_else(|| DEFAULT_SERVER_ADDRESS.to_string()),
            markets: non_empty("PODSEARCH_MARKETS")
                .map(|raw| parse_markets(&raw))
                .filter(|markets| !markets.is_empty())
                .unwrap_or_else(default_markets),
            request_timeout,
        }
    }

    /// Client id and secret, if both are configured.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (&self.client_id, &self.client_secret) {
            (Some(id), Some(secret)) => Some((id.as_str(), secret.as_str())),
            _ => None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

// The secret never shows up in logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("client_id", &self.client_id)
            .field("client_secret", &self.client_secret.as_ref().map(|_| "***"))
            .field("token_url", &self.token_url)
            .field("api_url", &self.api_url)
            .field("server_address", &self.server_address)
            .field("markets", &self.markets)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

pub fn default_markets() -> Vec<String> {
    DEFAULT_MARKETS.iter().map(|m| m.to_string()).collect()
}

/// Parses a comma separated market list like `"us, it,DE"` into `["US", "IT", "DE"]`.
pub fn parse_markets(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|m| m.trim().to_ascii_uppercase())
        .filter(|m| !m.is_empty())
        .collect()
}
