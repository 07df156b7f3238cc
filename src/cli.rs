use clap::{Parser, Subcommand};
use std::path::PathBuf;

use macro_watch::application::dto::RenderFormat;
use macro_watch::config::{ServeOverrides, ShowOverrides, StoreKind};

/// Serve and render the latest macro stress snapshot
#[derive(Parser, Debug)]
#[command(name = "macro-watch")]
#[command(version)]
#[command(about = "Serve and render the latest macro stress snapshot", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the status endpoint and the dashboard page
    Serve(ServeArgs),
    /// Fetch the status endpoint once and render the dashboard
    Show(ShowArgs),
}

#[derive(clap::Args, Debug)]
pub struct ServeArgs {
    /// Path to a config file (defaults to ./macro-watch.config.yml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Address to listen on, e.g. 127.0.0.1:3000
    #[arg(short, long, value_name = "ADDR")]
    pub bind: Option<String>,

    /// Snapshot store: rest or memory
    #[arg(long, value_name = "KIND")]
    pub store: Option<StoreKind>,

    /// JSON snapshot loaded into the memory store under macro:latest
    #[arg(long, value_name = "FILE")]
    pub seed: Option<PathBuf>,

    /// Status URL the dashboard page reads instead of the local store
    #[arg(long, value_name = "URL")]
    pub status_url: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Path to a config file (defaults to ./macro-watch.config.yml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Status endpoint to read
    #[arg(short, long, value_name = "URL")]
    pub url: Option<String>,

    /// Output format: terminal or html
    #[arg(short, long, default_value = "terminal")]
    pub format: RenderFormat,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Disable ANSI colours in terminal output
    #[arg(long)]
    pub no_color: bool,

    /// Exit with code 1 when the breach count reaches this value
    #[arg(long, value_name = "N")]
    pub alert_threshold: Option<u64>,

    /// Request timeout in seconds (no timeout by default)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl From<&ServeArgs> for ServeOverrides {
    fn from(args: &ServeArgs) -> Self {
        Self {
            bind: args.bind.clone(),
            store: args.store,
            seed: args.seed.clone(),
            status_url: args.status_url.clone(),
        }
    }
}

impl From<&ShowArgs> for ShowOverrides {
    fn from(args: &ShowArgs) -> Self {
        Self {
            url: args.url.clone(),
            timeout_secs: args.timeout,
            alert_threshold: args.alert_threshold,
        }
    }
}
