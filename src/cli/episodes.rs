use std::sync::Arc;

use tabled::Table;

use crate::{
    cli::{client, spinner},
    config::Config,
    info,
    types::EpisodeTableRow,
    utils,
    warning,
};

pub async fn episodes(config: Arc<Config>, show_id: String, page: u32) {
    let spotify = client(config);
    let page = page.clamp(1, utils::MAX_PAGE);

    let pb = spinner(format!("Fetching episodes page {}...", page));
    let result = spotify.list_episodes(&show_id, page).await;
    pb.finish_and_clear();

    if result.episodes.is_empty() {
        warning!("No episodes found for show {} on page {}", show_id, page);
        return;
    }

    let table_rows: Vec<EpisodeTableRow> = result
        .episodes
        .into_iter()
        .map(|e| EpisodeTableRow {
            name: e.name,
            url: e.url,
        })
        .collect();

    println!("{}", Table::new(table_rows));
    if result.has_next_page {
        info!(
            "Page {}. More episodes: podsearch episodes {} --page {}",
            page,
            show_id,
            page.saturating_add(1)
        );
    } else {
        info!("Page {}. This is the last page.", page);
    }
}
