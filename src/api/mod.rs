//! # API Module
//!
//! HTTP endpoints served by podsearch.
//!
//! ## Endpoints
//!
//! - [`home`] - `GET /`, static landing page with the search form
//! - [`podcasts`] - `GET /podcasts?query=`, show search across all configured markets
//! - [`episodes`] - `GET /episodes/{show_id}?page=&query=`, one page of a show's episodes
//! - [`health`] - `GET /health`, status and version for monitoring
//!
//! Every endpoint is a read-only GET. Upstream failures never reach the
//! client as errors; they are rendered as empty result pages.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use axum::{Router, routing::get};
//! use podsearch::api::{self, AppState};
//!
//! let app = Router::new()
//!     .route("/", get(api::home))
//!     .route("/health", get(api::health))
//!     .with_state(state);
//! ```

mod episodes;
mod health;
mod home;
mod podcasts;
pub mod views;

use crate::spotify::SpotifyClient;

pub use episodes::episodes;
pub use health::health;
pub use home::home;
pub use podcasts::podcasts;

/// State shared by all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub spotify: SpotifyClient,
}

impl AppState {
    pub fn new(spotify: SpotifyClient) -> Self {
        AppState { spotify }
    }
}
