//! # CLI Module
//!
//! Terminal front end for podsearch. The same flows the web pages use are
//! available as subcommands, which makes it easy to check credentials and
//! markets without opening a browser.
//!
//! ## Commands
//!
//! - [`serve`] - Runs the web application on `SERVER_ADDRESS`
//! - [`search`] - Searches shows across markets and prints them as a table
//! - [`episodes`] - Prints one page of a show's episodes
//!
//! ## Usage Patterns
//!
//! ```bash
//! podsearch serve                              # Start the web app
//! podsearch search "true crime"                # Search all configured markets
//! podsearch search comedy --market US,GB       # Search specific markets
//! podsearch episodes 4rOoJ6Egrf8K2IrywzwOMk --page 2
//! ```
//!
//! Fatal problems (unbuildable HTTP client, failed authentication on an
//! explicit search) end the process through the `error!` macro. Upstream
//! failures for individual markets only produce warnings in the log.

mod episodes;
mod search;
mod serve;

use std::{sync::Arc, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};

use crate::{config::Config, error, spotify::SpotifyClient};

pub use episodes::episodes;
pub use search::search;
pub use serve::serve;

fn client(config: Arc<Config>) -> SpotifyClient {
    match SpotifyClient::new(config) {
        Ok(c) => c,
        Err(e) => error!("Cannot build HTTP client. Err: {}", e),
    }
}

fn spinner(message: String) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}
