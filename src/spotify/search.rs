use crate::{
    spotify::{SpotifyClient, SpotifyError},
    types::{SearchResponse, SearchResults, Show},
};

/// Upper bound on shows requested per market (Spotify rejects anything above 50).
pub const SEARCH_LIMIT: u32 = 50;

impl SpotifyClient {
    /// Searches every configured market for shows matching `query`.
    ///
    /// See [`SpotifyClient::search_in`].
    pub async fn search(&self, query: &str) -> SearchResults {
        let markets = self.config.markets.clone();
        self.search_in(query, &markets).await
    }

    /// Searches `markets` in order and concatenates the shows found.
    ///
    /// Each market gets its own token and its own request, one after another.
    /// A market whose token or search request fails is logged and skipped; the
    /// remaining markets still contribute. Records keep market order first and
    /// API order second. The same show found in two markets yields two records.
    ///
    /// An empty query returns no shows without touching the network.
    pub async fn search_in(&self, query: &str, markets: &[String]) -> SearchResults {
        let mut results = SearchResults::empty(markets);
        if query.trim().is_empty() {
            return results;
        }

        for market in markets {
            match self.search_market(query, market).await {
                Ok(shows) => {
                    tracing::debug!(market = %market, count = shows.len(), "market searched");
                    results.shows.extend(shows);
                }
                Err(e) => {
                    tracing::warn!(
                        market = %market,
                        error = %e,
                        "Error fetching podcasts for market, skipping"
                    );
                }
            }
        }

        results
    }

    /// Runs a single show search scoped to one market.
    ///
    /// # Errors
    ///
    /// Returns [`SpotifyError::Auth`] if no token could be obtained, otherwise
    /// the transport, status, or decoding failure of the search request.
    pub async fn search_market(
        &self,
        query: &str,
        market: &str,
    ) -> Result<Vec<Show>, SpotifyError> {
        let token = self.obtain_token().await?;

        let url = self.api_url("search");
        let params = [
            ("q", query.to_string()),
            ("type", "show".to_string()),
            ("limit", SEARCH_LIMIT.to_string()),
            ("market", market.to_string()),
        ];

        let res = self
            .get_json::<SearchResponse>(&url, &token.access_token, &params)
            .await?;

        Ok(shows_from_response(res, market))
    }
}

/// Maps a search response to show records tagged with `market`.
pub fn shows_from_response(res: SearchResponse, market: &str) -> Vec<Show> {
    res.shows
        .items
        .into_iter()
        .flatten()
        .map(|item| Show {
            name: item.name,
            url: item.external_urls.spotify,
            market: market.to_string(),
            id: item.id,
        })
        .collect()
}
