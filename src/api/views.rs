//! HTML rendering for the web pages.
//!
//! Every function here is a pure function of its arguments. All text coming
//! from the user or from Spotify is escaped before it reaches the markup.

use crate::{
    types::{EpisodePage, SearchResults},
    utils::{self, escape_html},
};

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
</head>
<body>
{body}
</body>
</html>
"#,
        title = escape_html(title),
        body = body
    )
}

fn search_form(query: &str) -> String {
    format!(
        r#"<form action="/podcasts" method="get">
<input type="text" name="query" value="{query}" placeholder="Search podcasts" required>
<button type="submit">Search</button>
</form>"#,
        query = escape_html(query)
    )
}

pub fn home() -> String {
    layout(
        "Podcast search",
        &format!(
            "<h1>Podcast search</h1>\n<p>Find shows on Spotify across several markets.</p>\n{}",
            search_form("")
        ),
    )
}

/// Search results page.
///
/// `query` is `None` when the page is opened without a search term.
/// `auth_failed` replaces the results with an authentication error notice.
pub fn podcasts(query: Option<&str>, results: &SearchResults, auth_failed: bool) -> String {
    let mut body = String::from("<h1>Podcasts</h1>\n");
    body.push_str(&search_form(query.unwrap_or_default()));
    body.push('\n');

    let Some(query) = query else {
        return layout("Podcasts", &body);
    };

    if auth_failed {
        body.push_str(
            r#"<p class="error">Could not authenticate with Spotify. Please try again later.</p>"#,
        );
        return layout("Podcasts", &body);
    }

    body.push_str(&format!(
        "<p>Results for <strong>{}</strong> in markets: {}</p>\n",
        escape_html(query),
        escape_html(&results.markets.join(", "))
    ));

    if results.shows.is_empty() {
        body.push_str("<p>No podcasts found.</p>\n");
        return layout("Podcasts", &body);
    }

    let encoded_query = urlencoding::encode(query);
    body.push_str("<ul>\n");
    for show in &results.shows {
        body.push_str(&format!(
            concat!(
                r#"<li><a href="{url}">{name}</a> <span class="market">[{market}]</span> "#,
                r#"<a href="/episodes/{id}?page=1&amp;query={query}">Episodes</a></li>"#,
            ),
            url = escape_html(&show.url),
            name = escape_html(&show.name),
            market = escape_html(&show.market),
            id = urlencoding::encode(&show.id),
            query = encoded_query,
        ));
        body.push('\n');
    }
    body.push_str("</ul>\n");

    layout("Podcasts", &body)
}

/// Episode list page with pagination links and a link back to the search.
pub fn episodes(show_id: &str, query: &str, page: &EpisodePage) -> String {
    let encoded_query = urlencoding::encode(query);
    let encoded_id = urlencoding::encode(show_id);

    let mut body = String::from("<h1>Episodes</h1>\n");
    body.push_str(&format!(
        "<p><a href=\"/podcasts?query={}\">Back to results for {}</a></p>\n",
        encoded_query,
        escape_html(query)
    ));

    if page.episodes.is_empty() {
        body.push_str("<p>No episodes found.</p>\n");
    } else {
        body.push_str("<ol>\n");
        for episode in &page.episodes {
            body.push_str(&format!(
                "<li><a href=\"{}\">{}</a></li>\n",
                escape_html(&episode.url),
                escape_html(&episode.name)
            ));
        }
        body.push_str("</ol>\n");
    }

    body.push_str(&format!("<p>Page {}</p>\n<nav>\n", page.page));
    if page.page > 1 {
        body.push_str(&format!(
            "<a href=\"/episodes/{}?page={}&amp;query={}\">Previous</a>\n",
            encoded_id,
            page.page - 1,
            encoded_query
        ));
    }
    if page.has_next_page && page.page < utils::MAX_PAGE {
        body.push_str(&format!(
            "<a href=\"/episodes/{}?page={}&amp;query={}\">Next</a>\n",
            encoded_id,
            page.page + 1,
            encoded_query
        ));
    }
    body.push_str("</nav>\n");

    layout("Episodes", &body)
}
