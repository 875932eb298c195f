mod cli_args;
mod render;
mod source;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use upcoming_events::{FixedClock, SocialNetworkQueries, SystemClock};

use cli_args::{Cli, OutputFormat};
use source::JsonFileSource;

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so stdout stays a clean digest. `RUST_LOG` overrides the
/// default `warn` level.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

async fn run(cli: Cli) -> Result<()> {
    info!(events = %cli.events.display(), future_days = cli.future_days, "listing upcoming events");

    let source = JsonFileSource::new(&cli.events);
    let digest = match cli.now {
        Some(millis) => {
            SocialNetworkQueries::new(source, FixedClock(millis))
                .find_upcoming_events(cli.future_days)
                .await
        }
        None => {
            SocialNetworkQueries::new(source, SystemClock)
                .find_upcoming_events(cli.future_days)
                .await
        }
    }
    .context("failed to list upcoming events")?;

    match cli.format {
        OutputFormat::Text => print!("{}", render::render_text(&digest)),
        OutputFormat::Json => {
            let json = render::render_json(&digest, cli.pretty).context("failed to encode digest")?;
            println!("{}", json);
        }
    }

    Ok(())
}
