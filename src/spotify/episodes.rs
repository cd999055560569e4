use crate::{
    spotify::{SpotifyClient, SpotifyError},
    types::{Episode, EpisodePage, EpisodesResponse},
    utils,
};

/// Episodes shown per page.
pub const PAGE_SIZE: u32 = 10;

impl SpotifyClient {
    /// Lists one page of a show's episodes.
    ///
    /// Any failure, including a failed token exchange, is logged and yields an
    /// empty page with `has_next_page == false`.
    pub async fn list_episodes(&self, show_id: &str, page: u32) -> EpisodePage {
        let page = page.clamp(1, utils::MAX_PAGE);
        match self.fetch_episodes(show_id, page).await {
            Ok(episodes) => episodes,
            Err(e) => {
                tracing::warn!(show_id = %show_id, page, error = %e, "Error fetching episodes");
                EpisodePage::empty(page)
            }
        }
    }

    /// Fetches page `page` (1-based, clamped to [`utils::MAX_PAGE`]) of `show_id`'s episodes.
    ///
    /// # Errors
    ///
    /// Returns [`SpotifyError::Auth`] if no token could be obtained, otherwise
    /// the transport, status, or decoding failure of the listing request.
    pub async fn fetch_episodes(
        &self,
        show_id: &str,
        page: u32,
    ) -> Result<EpisodePage, SpotifyError> {
        let page = page.clamp(1, utils::MAX_PAGE);
        let offset = utils::page_offset(page, PAGE_SIZE);

        let token = self.obtain_token().await?;

        let url = self.api_url(&format!("shows/{}/episodes", urlencoding::encode(show_id)));
        let params = [
            ("limit", PAGE_SIZE.to_string()),
            ("offset", offset.to_string()),
        ];

        let res = self
            .get_json::<EpisodesResponse>(&url, &token.access_token, &params)
            .await?;

        Ok(page_from_response(res, page))
    }
}

/// Maps a listing response to an episode page; a non-null `next` means another page exists.
pub fn page_from_response(res: EpisodesResponse, page: u32) -> EpisodePage {
    let has_next_page = res.next.is_some();
    let episodes = res
        .items
        .into_iter()
        .flatten()
        .map(|item| Episode {
            name: item.name,
            url: item.external_urls.spotify,
        })
        .collect();

    EpisodePage {
        episodes,
        page,
        has_next_page,
    }
}
