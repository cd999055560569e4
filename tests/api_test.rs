mod common;

use std::collections::HashMap;

use axum::{
    extract::{Path, Query, State},
    http::{StatusCode, header},
};
use common::*;
use podsearch::{api, server};
use wiremock::MockServer;

fn params(pairs: &[(&str, &str)]) -> Query<HashMap<String, String>> {
    Query(
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    )
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_home_renders_form() {
    let html = api::home().await.0;
    assert!(html.contains("<form action=\"/podcasts\""));
}

#[tokio::test]
async fn test_podcasts_without_query_calls_nothing() {
    let server = MockServer::start().await;
    let state = state_for(config_for(&server, &["US"]));

    let html = api::podcasts(State(state), params(&[])).await.0;

    assert!(html.contains("<form"));
    assert!(!html.contains("Could not authenticate"));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_podcasts_auth_failure() {
    let server = MockServer::start().await;
    mount_token_rejected(&server).await;
    let state = state_for(config_for(&server, &["US", "IT"]));

    let html = api::podcasts(State(state), params(&[("query", "news")])).await.0;

    assert!(html.contains("Could not authenticate with Spotify"));
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.path(), "/api/token");
}

#[tokio::test]
async fn test_podcasts_renders_results_in_order() {
    let server = MockServer::start().await;
    mount_token(&server).await;
    mount_search(
        &server,
        "US",
        vec![show_json("us1", "First US"), show_json("us2", "Second US")],
    )
    .await;
    mount_search(&server, "IT", vec![show_json("it1", "Primo IT")]).await;
    let state = state_for(config_for(&server, &["US", "IT"]));

    let html = api::podcasts(State(state), params(&[("query", "comedy")])).await.0;

    assert!(html.contains("markets: US, IT"));
    let first = html.find("First US").unwrap();
    let second = html.find("Second US").unwrap();
    let third = html.find("Primo IT").unwrap();
    assert!(first < second && second < third);
    assert!(html.contains("/episodes/it1?page=1&amp;query=comedy"));
}

#[tokio::test]
async fn test_episodes_without_query_redirects() {
    let server = MockServer::start().await;
    let state = state_for(config_for(&server, &["US"]));

    let response = api::episodes(
        State(state),
        Path("whatever".to_string()),
        params(&[("page", "not-a-number")]),
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/podcasts");
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_episodes_renders_requested_page() {
    let server = MockServer::start().await;
    mount_token(&server).await;
    mount_episodes(
        &server,
        "show1",
        20,
        vec![episode_json("ep21")],
        Some("https://api.spotify.com/v1/shows/show1/episodes?offset=30&limit=10"),
    )
    .await;
    let state = state_for(config_for(&server, &["US"]));

    let response = api::episodes(
        State(state),
        Path("show1".to_string()),
        params(&[("page", "3"), ("query", "true crime")]),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("ep21"));
    assert!(html.contains("Page 3"));
    assert!(html.contains("/episodes/show1?page=4&amp;query=true%20crime"));
    assert!(html.contains("/podcasts?query=true%20crime"));
}

#[tokio::test]
async fn test_episodes_upstream_failure_renders_empty_page() {
    let server = MockServer::start().await;
    mount_token_rejected(&server).await;
    let state = state_for(config_for(&server, &["US"]));

    let response = api::episodes(
        State(state),
        Path("show1".to_string()),
        params(&[("query", "news")]),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("No episodes found."));
    assert!(!html.contains("Next"));
}

#[tokio::test]
async fn test_health_reports_configuration() {
    let server = MockServer::start().await;
    let state = state_for(config_for(&server, &["US", "IT"]));

    let body = api::health(State(state)).await.0;

    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["markets"], serde_json::json!(["US", "IT"]));

    // nothing about credentials, nothing sent upstream
    let keys: Vec<&String> = body.as_object().unwrap().keys().collect();
    assert_eq!(keys.len(), 3);
    assert!(!body.to_string().contains("client"));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_router_serves_redirect_over_http() {
    let mock = MockServer::start().await;
    let state = state_for(config_for(&mock, &["US"]));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, server::router(state)).await.unwrap();
    });

    let http = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    let response = http
        .get(format!("http://{}/episodes/abc?page=2", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::SEE_OTHER);
    assert_eq!(response.headers()["location"], "/podcasts");

    let response = http.get(format!("http://{}/", addr)).send().await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert!(response.text().await.unwrap().contains("Podcast search"));
}
