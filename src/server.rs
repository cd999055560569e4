use axum::{Router, routing::get};
use std::{net::SocketAddr, str::FromStr, sync::Arc};

use crate::{
    Res,
    api::{self, AppState},
    config::Config,
    spotify::SpotifyClient,
};

/// Builds the application router over `state`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(api::home))
        .route("/podcasts", get(api::podcasts))
        .route("/episodes/{show_id}", get(api::episodes))
        .route("/health", get(api::health))
        .with_state(state)
}

/// Binds `config.server_address` and serves until the process is stopped.
///
/// # Errors
///
/// Fails if the HTTP client cannot be built, the address does not parse, the
/// socket cannot be bound, or the server stops with an I/O error.
pub async fn start_api_server(config: Arc<Config>) -> Res<()> {
    let addr = SocketAddr::from_str(&config.server_address).map_err(|e| {
        format!(
            "Failed to parse server address '{}': {}",
            config.server_address, e
        )
    })?;

    if config.credentials().is_none() {
        tracing::warn!("Spotify client credentials are missing, searches will fail");
    }

    let spotify = SpotifyClient::new(Arc::clone(&config))?;
    let app = router(AppState::new(spotify));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, markets = ?config.markets, "podsearch listening");

    axum::serve(listener, app).await?;
    Ok(())
}
