use clap::Subcommand;

use crate::common::Context;

#[derive(Subcommand)]
pub enum StreakAction {
    /// Print current streak state as JSON
    Show,
}

pub fn run(action: StreakAction, ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let tracker = ctx.open_tracker()?;

    match action {
        StreakAction::Show => {
            ctx.print(&tracker.snapshot())?;
        }
    }
    Ok(())
}
