//! tridigit TUI entry point.

use std::{fs::OpenOptions, sync::Mutex};

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use tridigit_tui::{Runtime, TerminalDriver, TerminalError, cli::Args};

/// Install a file logger if `--log-file` was given.
fn init_logging(args: &Args) -> Result<(), TerminalError> {
    let Some(path) = &args.log_file else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| TerminalError::LogFile { path: path.clone(), source })?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .with(filter)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(&args)?;

    let config = args.display_config();
    tracing::info!(interval = ?config.mirror_interval, angle = args.angle, "tridigit starting");

    let driver = TerminalDriver::new(args.terminal_config())?;
    Runtime::new(driver, config).run().await?;

    tracing::info!("tridigit stopped");
    Ok(())
}
