//! greenport - GreenPort dashboard CLI
//!
//! Log in (or explore as a guest), then browse projects and their carbon
//! footprint. Output is JSON on stdout; logs go to stderr.
//!
//! # Examples
//!
//! ```bash
//! # Explore with the demo account
//! greenport guest
//!
//! # List projects that are online
//! greenport projects --filter online --pretty
//!
//! # Metrics and CO2 trend for one project
//! greenport project 2 --refresh
//! ```

use gp_cli::{App, Cli, CliResult, Client, Dashboard, logger};
use gp_config::{Config, LogLevel};
use gp_session::{FileStore, RestoreOutcome, SessionStore};

use std::process::ExitCode;

use clap::Parser;
use log::{LevelFilter, debug};
use serde_json::Value;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Some(hint) = e.hint() {
                eprintln!();
                eprintln!("{}", hint);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliResult<String> {
    let mut config = Config::load()?;
    if let Some(api) = cli.api {
        config.api.base_url = api;
    }
    if cli.verbose {
        config.logging.level = LogLevel(LevelFilter::Debug);
    }
    config.validate()?;

    logger::initialize(&config.logging)?;
    config.log_summary();

    let storage = FileStore::new(config.session_dir()?);
    let mut session = SessionStore::new(storage).with_key(config.session.storage_key.as_str());
    if let RestoreOutcome::Corrupted { message } = session.restore() {
        debug!("Started logged out, saved session was unreadable: {message}");
    }

    let client = Client::new(&config.api.base_url, config.api.timeout())?;
    let dashboard = Dashboard::new(client, config.api.demo_fallback);

    let mut app = App::new(session, dashboard);
    let value = app.run(cli.command).await?;
    render(&value, cli.pretty)
}

fn render(value: &Value, pretty: bool) -> CliResult<String> {
    let output = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(output)
}
