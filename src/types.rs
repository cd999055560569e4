use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// Bearer token returned by the client-credentials grant.
///
/// Never cached: a token lives only as long as the request that fetched it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    #[serde(default)]
    pub expires_in: u64,
}

/// A podcast show found in one market.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Show {
    pub name: String,
    pub url: String,
    pub market: String,
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    pub name: String,
    pub url: String,
}

/// Outcome of a multi-market search: the records plus the markets that were queried.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchResults {
    pub shows: Vec<Show>,
    pub markets: Vec<String>,
}

impl SearchResults {
    pub fn empty(markets: &[String]) -> Self {
        SearchResults {
            shows: Vec::new(),
            markets: markets.to_vec(),
        }
    }

    pub fn into_shows(self) -> Vec<Show> {
        self.shows
    }
}

/// One page of a show's episode list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EpisodePage {
    pub episodes: Vec<Episode>,
    pub page: u32,
    pub has_next_page: bool,
}

impl EpisodePage {
    pub fn empty(page: u32) -> Self {
        EpisodePage {
            episodes: Vec::new(),
            page,
            has_next_page: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExternalUrls {
    #[serde(default)]
    pub spotify: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub shows: ShowsContainer,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShowsContainer {
    // Spotify returns `null` for shows unavailable in the requested market.
    pub items: Vec<Option<ShowItem>>,
    pub next: Option<String>,
    pub total: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShowItem {
    pub id: String,
    pub name: String,
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpisodesResponse {
    pub items: Vec<Option<EpisodeItem>>,
    pub next: Option<String>,
    pub total: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpisodeItem {
    pub name: String,
    pub external_urls: ExternalUrls,
}

#[derive(Tabled)]
pub struct ShowTableRow {
    pub market: String,
    pub name: String,
    pub id: String,
    pub url: String,
}

#[derive(Tabled)]
pub struct EpisodeTableRow {
    pub name: String,
    pub url: String,
}
