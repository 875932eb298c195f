use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum, ValueHint};
use upcoming_events::EventInstant;

/// Print the upcoming-events digest for a list of observed events.
#[derive(Parser, Debug, Clone)]
#[command(name = "upcoming-events", version, about, long_about = None)]
pub struct Cli {
    /// JSON array of `{"label", "startDateTime"}` events; `-` reads stdin.
    #[arg(
        short,
        long,
        env = "UPCOMING_EVENTS_FILE",
        value_name = "PATH",
        value_hint = ValueHint::FilePath
    )]
    pub events: PathBuf,

    /// Calendar days to look ahead.
    #[arg(
        short = 'd',
        long,
        env = "UPCOMING_FUTURE_DAYS",
        default_value_t = 7,
        allow_negative_numbers = true,
        value_name = "DAYS"
    )]
    pub future_days: i64,

    /// Fix "now" (ISO-8601 or millis from epoch) instead of reading the system clock.
    #[arg(long, env = "UPCOMING_NOW", value_name = "TIMESTAMP", value_parser = parse_now)]
    pub now: Option<i64>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    #[arg(long, action = ArgAction::SetTrue)]
    pub pretty: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

fn parse_now(s: &str) -> Result<i64, String> {
    if let Ok(millis) = s.trim().parse::<i64>() {
        return Ok(millis);
    }
    EventInstant::parse(s)
        .map(|instant| instant.exact_millis)
        .map_err(|reason| format!("'{}': {}", s, reason))
}
