use std::collections::HashMap;

use axum::{
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::{api::AppState, api::views, utils};

/// Renders one page of a show's episodes.
///
/// `query` only serves the "back to results" link, but it is required: without
/// it the request is redirected to the search page whatever the show id or
/// page look like.
pub async fn episodes(
    State(state): State<AppState>,
    Path(show_id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let Some(query) = utils::non_empty(params.get("query")) else {
        return Redirect::to("/podcasts").into_response();
    };

    let page = utils::parse_page(params.get("page").map(String::as_str));
    let episodes = state.spotify.list_episodes(&show_id, page).await;
    tracing::info!(
        show_id = %show_id,
        page,
        episodes = episodes.episodes.len(),
        has_next_page = episodes.has_next_page,
        "episode list"
    );

    Html(views::episodes(&show_id, &query, &episodes)).into_response()
}
