use reqwest::StatusCode;
use thiserror::Error;

use crate::{spotify::SpotifyClient, types::Token};

/// Why no token could be obtained.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("client id or client secret is not configured")]
    MissingCredentials,

    #[error("token request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("token endpoint returned {status}: {body}")]
    Rejected { status: StatusCode, body: String },

    #[error("token response could not be decoded: {0}")]
    InvalidResponse(#[source] reqwest::Error),
}

impl SpotifyClient {
    /// Exchanges the configured client credentials for a bearer token.
    ///
    /// Performs a fresh round trip on every call; tokens are never cached or
    /// reused. Every failure is logged here and returned as an [`AuthError`]
    /// so callers can decide whether to skip, degrade, or report it.
    ///
    /// # Errors
    ///
    /// - [`AuthError::MissingCredentials`] if either credential is absent (no
    ///   request is sent)
    /// - [`AuthError::Transport`] on timeouts and connection errors
    /// - [`AuthError::Rejected`] on any status other than 200
    /// - [`AuthError::InvalidResponse`] if the body is not a token
    pub async fn obtain_token(&self) -> Result<Token, AuthError> {
        let Some((client_id, client_secret)) = self.config.credentials() else {
            tracing::error!("Cannot request token: Spotify client credentials are not configured");
            return Err(AuthError::MissingCredentials);
        };

        let response = self
            .http
            .post(&self.config.token_url)
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", client_id),
                ("client_secret", client_secret),
            ])
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Error getting token");
                AuthError::Transport(e)
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("<failed to read body>"));
            tracing::error!(status = %status, body = %body, "Error getting token");
            return Err(AuthError::Rejected { status, body });
        }

        response.json::<Token>().await.map_err(|e| {
            tracing::error!(error = %e, "Error decoding token response");
            AuthError::InvalidResponse(e)
        })
    }
}
