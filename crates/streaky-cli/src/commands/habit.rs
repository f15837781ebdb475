use clap::Subcommand;
use serde::Serialize;

use crate::common::Context;

#[derive(Subcommand)]
pub enum HabitAction {
    /// Lifetime completion count for a habit
    Count {
        /// Habit ID
        id: String,
    },
    /// Add one completion to a habit's count
    Increment {
        /// Habit ID
        id: String,
    },
}

#[derive(Serialize)]
struct HabitCount<'a> {
    id: &'a str,
    count: u64,
}

pub fn run(action: HabitAction, ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let mut tracker = ctx.open_tracker()?;

    match action {
        HabitAction::Count { id } => {
            let count = tracker.completion_count(&id);
            ctx.print(&HabitCount { id: &id, count })?;
        }
        HabitAction::Increment { id } => {
            let count = tracker.increment_completion_count(&id);
            ctx.print(&HabitCount { id: &id, count })?;
        }
    }
    Ok(())
}
