use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dirscope")]
#[command(about = "Track directory contents across bounded point-in-time snapshots")]
#[command(version)]
pub struct Cli {
    /// Directory to track (defaults to the current directory)
    pub path: Option<PathBuf>,

    /// How many snapshots to retain before the oldest is evicted
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub capacity: Option<u64>,

    /// Capture a single snapshot, print it, and exit
    #[arg(long, default_value_t = false)]
    pub once: bool,

    /// Output as JSON instead of text (only with --once)
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Leave dot-prefixed entries out of snapshots
    #[arg(long, default_value_t = false)]
    pub skip_hidden: bool,

    /// Show detailed output including scan diagnostics
    #[arg(long, short = 'v', default_value_t = false)]
    pub verbose: bool,

    /// Read settings from this file instead of the default location
    #[arg(long)]
    pub config: Option<PathBuf>,
}
