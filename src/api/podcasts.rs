use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    response::Html,
};

use crate::{api::AppState, api::views, types::SearchResults, utils};

/// Renders the search page, running a multi-market search when `query` is set.
///
/// A failed token exchange renders an authentication failure notice instead
/// of results. Markets that fail individually are skipped silently.
pub async fn podcasts(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Html<String> {
    let markets = state.spotify.markets();

    let Some(query) = utils::non_empty(params.get("query")) else {
        return Html(views::podcasts(None, &SearchResults::empty(markets), false));
    };

    if let Err(e) = state.spotify.obtain_token().await {
        tracing::warn!(query = %query, error = %e, "search aborted, no token");
        return Html(views::podcasts(
            Some(&query),
            &SearchResults::empty(markets),
            true,
        ));
    }

    let results = state.spotify.search(&query).await;
    tracing::info!(
        query = %query,
        shows = results.shows.len(),
        markets = results.markets.len(),
        "podcast search"
    );

    Html(views::podcasts(Some(&query), &results, false))
}
