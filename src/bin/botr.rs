//! Command-line client for the BOTR video platform
//!
//! # Usage
//!
//! ```bash
//! botr upload holiday.mp4 --key XOqEAfxj --secret uA96CFtJa138E2T5GhKfngml \
//!     --title "Holiday" --tags "beach,summer"
//! ```
//!
//! Credentials may also come from `BOTR_API_KEY`/`BOTR_API_SECRET` or the
//! `[api]` section of the configuration file.

use botr::cli::{UploadArgs, run_upload};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(name = "botr")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Configuration file (defaults to <config dir>/botr/config.toml)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Upload the video at VIDEO_PATH
    Upload(UploadArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "error" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    debug!("botr v{}", botr::utils::VERSION);

    match cli.command {
        Command::Upload(args) => run_upload(args, cli.config.as_deref()).await,
    }
}
