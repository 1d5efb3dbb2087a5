//! Command line entry point for swim-scoring
//!
//! Loads a tournament snapshot, runs the scoring engine once and prints the
//! leaderboards and event standings.

use anyhow::{anyhow, Result};
use clap::Parser;
use std::path::PathBuf;
use swim_scoring::config::{validate_config, AppConfig, OutputFormat};
use swim_scoring::output::{
    format_event_standings, format_player_leaderboard, format_university_leaderboard, Report,
};
use swim_scoring::snapshot::TournamentSnapshot;
use swim_scoring::LeaderboardAggregator;
use tracing::{error, info};

/// Swim Scoring - event ranks, points and leaderboards for swim tournaments
#[derive(Parser)]
#[command(
    name = "swim-scoring",
    version,
    about = "Score a swim tournament snapshot and print its leaderboards",
    long_about = "Reads a JSON tournament snapshot (events, registrations and timings), \
                 ranks every event with competition ranking, awards points per rank and \
                 prints the player and university leaderboards."
)]
struct Args {
    /// Tournament snapshot file
    #[arg(value_name = "SNAPSHOT", help = "Path to the tournament snapshot (JSON)")]
    snapshot: PathBuf,

    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    /// Output format override
    #[arg(short, long, value_name = "FORMAT", help = "Output format (table, json)")]
    format: Option<OutputFormat>,

    /// Only print one event
    #[arg(short, long, value_name = "EVENT_ID", help = "Print the standings of one event only")]
    event: Option<String>,

    /// Score events one at a time
    #[arg(long, help = "Score events sequentially instead of in parallel")]
    sequential: bool,

    /// Enable debug mode
    #[arg(short, long, help = "Enable debug mode with verbose logging")]
    debug: bool,

    /// Dry run mode (validate config and snapshot, then exit)
    #[arg(long, help = "Validate configuration and snapshot without printing results")]
    dry_run: bool,
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load and merge configuration from file, environment and CLI arguments
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = match &args.config {
        Some(config_path) => AppConfig::from_file(config_path)?,
        None => AppConfig::from_env()?,
    };

    // Apply CLI overrides
    if let Some(log_level) = &args.log_level {
        config.service.log_level = log_level.clone();
    }

    if args.debug {
        config.service.log_level = "debug".to_string();
    }

    if let Some(format) = args.format {
        config.scoring.output_format = format;
    }

    if args.sequential {
        config.scoring.parallel = false;
    }

    validate_config(&config)?;
    Ok(config)
}

fn run(args: &Args, config: &AppConfig) -> Result<()> {
    let snapshot = TournamentSnapshot::load(&args.snapshot)?;
    info!(
        tournament = %snapshot.tournament.id,
        events = snapshot.events.len(),
        registrations = snapshot.registration_count(),
        "Loaded tournament snapshot"
    );

    let mut aggregator =
        LeaderboardAggregator::with_points_table(config.scoring.points_table.clone());
    if !config.scoring.parallel {
        aggregator = aggregator.sequential();
    }

    if let Some(event_id) = &args.event {
        let entries = snapshot
            .event(event_id)
            .ok_or_else(|| anyhow!("Event not found in snapshot: {}", event_id))?;
        let results = aggregator.score_events(std::slice::from_ref(entries))?;
        if args.dry_run {
            info!("Dry run completed - snapshot is valid");
            return Ok(());
        }

        match config.scoring.output_format {
            OutputFormat::Table => println!("{}", format_event_standings(entries, &results[0])),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&results[0])?),
        }
        return Ok(());
    }

    let standings = aggregator.standings(&snapshot.events, &snapshot.universities)?;
    if args.dry_run {
        info!("Dry run completed - snapshot is valid");
        return Ok(());
    }

    match config.scoring.output_format {
        OutputFormat::Table => {
            println!("{}", snapshot.tournament.name);
            println!();
            println!("Players");
            println!("{}", format_player_leaderboard(&standings.leaderboards));
            println!();
            println!("Universities");
            println!("{}", format_university_leaderboard(&standings.leaderboards));
            for (entries, results) in snapshot.events.iter().zip(&standings.events) {
                println!();
                println!("{}", format_event_standings(entries, results));
            }
        }
        OutputFormat::Json => {
            println!("{}", Report::new(&snapshot.tournament, &standings).to_json()?);
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Configuration error: {:#}", e);
        std::process::exit(1);
    });

    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!(
        service = %config.service.name,
        parallel = config.scoring.parallel,
        format = %config.scoring.output_format,
        "Starting scoring run"
    );

    if let Err(e) = run(&args, &config) {
        error!("Scoring failed: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
