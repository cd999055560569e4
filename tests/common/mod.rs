#![allow(dead_code)]

use std::{sync::Arc, time::Duration};

use podsearch::{api::AppState, config::Config, spotify::SpotifyClient};
use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_string_contains, header, method, path, query_param},
};

pub const TEST_TOKEN: &str = "test-token";

// Config pointing every endpoint at the mock server
pub fn config_for(server: &MockServer, markets: &[&str]) -> Config {
    Config {
        client_id: Some("client-id".to_string()),
        client_secret: Some("client-secret".to_string()),
        token_url: format!("{}/api/token", server.uri()),
        api_url: format!("{}/v1", server.uri()),
        server_address: "127.0.0.1:0".to_string(),
        markets: markets.iter().map(|m| m.to_string()).collect(),
        request_timeout: Duration::from_secs(5),
    }
}

pub fn client_for(config: Config) -> SpotifyClient {
    SpotifyClient::new(Arc::new(config)).unwrap()
}

pub fn state_for(config: Config) -> AppState {
    AppState::new(client_for(config))
}

pub fn show_json(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "external_urls": {"spotify": format!("https://open.spotify.com/show/{}", id)}
    })
}

pub fn episode_json(name: &str) -> Value {
    json!({
        "name": name,
        "external_urls": {"spotify": format!("https://open.spotify.com/episode/{}", name)}
    })
}

pub async fn mount_token(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/token"))
        .and(body_string_contains("grant_type=client_credentials"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": TEST_TOKEN,
            "token_type": "Bearer",
            "expires_in": 3600
        })))
        .mount(server)
        .await;
}

pub async fn mount_token_expecting(server: &MockServer, calls: u64) {
    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": TEST_TOKEN,
            "token_type": "Bearer",
            "expires_in": 3600
        })))
        .expect(calls)
        .mount(server)
        .await;
}

pub async fn mount_token_rejected(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(
            ResponseTemplate::new(400).set_body_string(r#"{"error":"invalid_client"}"#),
        )
        .mount(server)
        .await;
}

pub async fn mount_search(server: &MockServer, market: &str, shows: Vec<Value>) {
    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("type", "show"))
        .and(query_param("limit", "50"))
        .and(query_param("market", market))
        .and(header("Authorization", format!("Bearer {}", TEST_TOKEN).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "shows": {"items": shows, "next": null, "total": 0}
        })))
        .expect(1)
        .mount(server)
        .await;
}

pub async fn mount_search_failure(server: &MockServer, market: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("market", market))
        .respond_with(ResponseTemplate::new(status).set_body_string("upstream failure"))
        .expect(1)
        .mount(server)
        .await;
}

pub async fn mount_episodes(
    server: &MockServer,
    show_id: &str,
    offset: u64,
    episodes: Vec<Value>,
    next: Option<&str>,
) {
    Mock::given(method("GET"))
        .and(path(format!("/v1/shows/{}/episodes", show_id)))
        .and(query_param("limit", "10"))
        .and(query_param("offset", offset.to_string()))
        .and(header("Authorization", format!("Bearer {}", TEST_TOKEN).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": episodes,
            "next": next,
            "total": 0
        })))
        .expect(1)
        .mount(server)
        .await;
}
