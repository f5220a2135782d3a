/// Main entry point for the health-insights report CLI
///
/// This binary loads a profile snapshot from JSON, runs the analytics
/// engine over it, and prints the dashboard report to stdout as JSON.
/// Logs go to stderr so the report stays pipeable.

use clap::Parser;
use chrono::NaiveDate;
use std::path::PathBuf;
use tracing::info;

use health_insights::{AnalyticsEngine, DashboardReport};

/// Command line arguments for the health-insights report CLI
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the profile snapshot JSON file
    #[arg(long)]
    profile: PathBuf,

    /// Run due-date comparisons against this date instead of today
    /// (ISO format, e.g. 2026-08-30)
    #[arg(long)]
    now: Option<NaiveDate>,

    /// Pretty-print the report JSON
    #[arg(long)]
    pretty: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Enable verbose output (implies debug)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Set up logging based on command line flags
    let log_level = if args.verbose {
        "debug"
    } else if args.debug {
        "info"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(format!("health_insights={}", log_level))
        .with_writer(std::io::stderr) // Send logs to stderr, not stdout
        .init();

    info!("Starting health-insights report run");

    let profile = health_insights::load_profile(&args.profile)?;

    let engine = match args.now {
        Some(today) => AnalyticsEngine::pinned(today),
        None => AnalyticsEngine::new(),
    };

    let report = DashboardReport::build(&engine, &profile);

    let output = if args.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{}", output);

    info!("Report complete for profile {}", profile.id);
    Ok(())
}
