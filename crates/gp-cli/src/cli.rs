use crate::commands::Commands;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "greenport")]
#[command(about = "GreenPort - monitor your digital carbon footprint")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Projects API base URL (overrides config, e.g. http://localhost:8080/api)
    #[arg(long, global = true)]
    pub api: Option<String>,

    /// Debug logging on stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
