use std::sync::Arc;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};
use tracing_subscriber::filter::EnvFilter;

use podsearch::{cli, config, config::Config, error};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run the web application
    Serve,

    /// Search podcasts across markets
    Search(SearchOptions),

    /// List episodes of a show
    Episodes(EpisodesOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct SearchOptions {
    /// Free-text search query
    pub query: String,

    /// Markets to search instead of the configured ones (e.g. US,GB)
    #[clap(long, value_delimiter = ',')]
    pub market: Option<Vec<String>>,
}

#[derive(Parser, Debug, Clone)]
pub struct EpisodesOptions {
    /// Spotify show id
    pub show_id: String,

    /// Page number, starting at 1
    #[clap(long, default_value_t = 1)]
    pub page: u32,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();
    let config = Arc::new(Config::from_env());
    tracing::debug!(config = ?config, "configuration loaded");

    match cli.command {
        Command::Serve => cli::serve(config).await,
        Command::Search(opt) => {
            let markets = opt.market.map(|m| config::parse_markets(&m.join(",")));
            cli::search(config, opt.query, markets).await
        }
        Command::Episodes(opt) => cli::episodes(config, opt.show_id, opt.page).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
