use std::path::PathBuf;

use clap::Parser;

use crate::config::LogTarget;

#[derive(Parser, Debug)]
#[command(name = "hvadan")]
#[command(version)]
#[command(about = "Hvaðan ertu? Pick a country and get the Icelandic sentence")]
pub struct Cli {
    /// RON configuration file
    #[arg(short, long, default_value = "hvadan.ron")]
    pub config: PathBuf,

    /// Data source URL, tried in the order given (replaces configured sources)
    #[arg(short, long = "source", value_name = "URL")]
    pub sources: Vec<String>,

    /// Country to select (exact, case-sensitive)
    #[arg(long)]
    pub country: Option<String>,

    /// Language to select instead of the default
    #[arg(long, requires = "country")]
    pub language: Option<String>,

    /// Show only countries containing this text
    #[arg(long, conflicts_with = "country")]
    pub search: Option<String>,

    /// Print the loaded records as JSON
    #[arg(long)]
    pub json: bool,

    /// Retries after a failed load
    #[arg(long)]
    pub retries: Option<u32>,

    /// Log destination
    #[arg(long, value_enum)]
    pub log: Option<LogTarget>,
}
