pub mod board_config;
pub mod cli;

pub use board_config::{BoardConfig, ReportSettings};

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "board-report")]
#[command(about = "Builds a 1:1 report from a board's comments for a given date")]
pub struct CliConfig {
    /// Report date, as it appears in the comments (defaults to today in `dateFormat`)
    pub date: Option<String>,

    /// Path to the JSON or TOML configuration file
    #[arg(short, long, default_value = "config.json")]
    pub config: String,

    /// Directory the report is written to
    #[arg(long, default_value = "reports")]
    pub output_dir: String,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
