use std::path::PathBuf;

use clap::Parser;

/// ViewDeck: a window of named decks, each showing one web view at a time.
#[derive(Parser, Debug)]
#[command(name = "viewdeck", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error) or a full
    /// filter directive.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print the effective config as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
