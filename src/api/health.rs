use axum::{extract::State, response::Json};
use serde_json::{Value, json};

use crate::api::AppState;

/// Liveness check. Reports the version and the searched markets, never calls Spotify.
pub async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "markets": state.spotify.markets(),
    }))
}
