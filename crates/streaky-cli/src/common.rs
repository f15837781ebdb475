//! Shared plumbing for CLI commands: config, clock and tracker setup.

use chrono::{DateTime, Local};
use serde::Serialize;
use streaky_core::{Clock, Config, Database, FixedClock, StreakTracker, SystemClock};

/// Clock chosen by the global `--at` flag.
pub enum CliClock {
    System(SystemClock),
    Fixed(FixedClock),
}

impl CliClock {
    pub fn from_flag(at: Option<DateTime<Local>>) -> Self {
        match at {
            Some(at) => CliClock::Fixed(FixedClock::new(at)),
            None => CliClock::System(SystemClock),
        }
    }
}

impl Clock for CliClock {
    fn now(&self) -> DateTime<Local> {
        match self {
            CliClock::System(clock) => clock.now(),
            CliClock::Fixed(clock) => clock.now(),
        }
    }
}

pub type CliTracker = StreakTracker<Database, CliClock>;

/// Parse an RFC 3339 timestamp for `--at`.
pub fn parse_at(value: &str) -> Result<DateTime<Local>, String> {
    DateTime::parse_from_rfc3339(value)
        .map(|at| at.with_timezone(&Local))
        .map_err(|e| format!("expected an RFC 3339 timestamp: {e}"))
}

/// Everything a command needs.
pub struct Context {
    pub config: Config,
    pub at: Option<DateTime<Local>>,
}

impl Context {
    pub fn open_tracker(&self) -> Result<CliTracker, Box<dyn std::error::Error>> {
        let db = Database::open_named(&self.config.storage.database_file)?;
        Ok(StreakTracker::open(db, CliClock::from_flag(self.at)))
    }

    pub fn print<T: Serialize>(&self, value: &T) -> Result<(), Box<dyn std::error::Error>> {
        let json = if self.config.display.pretty_json {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        println!("{json}");
        Ok(())
    }
}
