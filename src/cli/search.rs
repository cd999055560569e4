use std::sync::Arc;

use tabled::Table;

use crate::{
    cli::{client, spinner},
    config::Config,
    error, success,
    types::ShowTableRow,
    warning,
};

pub async fn search(config: Arc<Config>, query: String, markets: Option<Vec<String>>) {
    let query = query.trim().to_string();
    if query.is_empty() {
        warning!("Nothing to search for, the query is empty.");
        return;
    }

    let spotify = client(config);
    let markets = markets
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| spotify.markets().to_vec());

    let pb = spinner(format!(
        "Searching podcasts in {} market(s)...",
        markets.len()
    ));

    if let Err(e) = spotify.obtain_token().await {
        pb.finish_and_clear();
        error!(
            concat!(
                "Authentication with Spotify failed. ",
                "Check SPOTIFY_API_AUTH_CLIENT_ID and SPOTIFY_API_AUTH_CLIENT_SECRET.\n Error: {}"
            ),
            e
        );
    }

    let results = spotify.search_in(&query, &markets).await;
    pb.finish_and_clear();

    if results.shows.is_empty() {
        warning!(
            "No podcasts found for '{}' in {}",
            query,
            results.markets.join(", ")
        );
        return;
    }

    let count = results.shows.len();
    let table_rows: Vec<ShowTableRow> = results
        .shows
        .into_iter()
        .map(|s| ShowTableRow {
            market: s.market,
            name: s.name,
            id: s.id,
            url: s.url,
        })
        .collect();

    println!("{}", Table::new(table_rows));
    success!(
        "Found {} show(s) in {}",
        count,
        results.markets.join(", ")
    );
}
