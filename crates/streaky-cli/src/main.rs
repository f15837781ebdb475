use chrono::{DateTime, Local};
use clap::{Parser, Subcommand};
use streaky_core::Config;
use tracing_subscriber::EnvFilter;

mod commands;
mod common;

use common::Context;

#[derive(Parser)]
#[command(name = "streaky", version, about = "Streaky CLI")]
struct Cli {
    /// Treat this RFC 3339 instant as "now"
    #[arg(long, global = true, value_parser = common::parse_at)]
    at: Option<DateTime<Local>>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Daily challenge completion
    Challenge {
        #[command(subcommand)]
        action: commands::challenge::ChallengeAction,
    },
    /// Streak state
    Streak {
        #[command(subcommand)]
        action: commands::streak::StreakAction,
    },
    /// Per-habit completion counters
    Habit {
        #[command(subcommand)]
        action: commands::habit::HabitAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_env("STREAKY_LOG")
        .or_else(|_| EnvFilter::try_new(&config.log.level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    let config = Config::load_or_default();
    init_logging(&config);

    let ctx = Context {
        config,
        at: cli.at,
    };
    let result = match cli.command {
        Commands::Challenge { action } => commands::challenge::run(action, &ctx),
        Commands::Streak { action } => commands::streak::run(action, &ctx),
        Commands::Habit { action } => commands::habit::run(action, &ctx),
        Commands::Config { action } => commands::config::run(action, &ctx),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
