use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// Browse Star Wars films from the terminal.
#[derive(Debug, Parser)]
#[command(name = "moviebrowser", version)]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Films endpoint to fetch from (overrides config)
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Do not fetch automatically at startup
    #[arg(long)]
    pub no_fetch_on_start: bool,

    /// Fetch once and print the films as text, without the TUI
    #[arg(long, conflicts_with = "json")]
    pub print: bool,

    /// Fetch once and print the films as JSON, without the TUI
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Apply command line overrides on top of the loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(url) = &self.url {
            config.api.films_url = url.clone();
        }
        if self.no_fetch_on_start {
            config.ui.fetch_on_start = false;
        }
    }
}
