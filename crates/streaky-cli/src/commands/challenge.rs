use clap::Subcommand;
use serde::Serialize;
use streaky_core::{complete_challenge, Challenge, StaticEntitlement};

use crate::common::Context;

#[derive(Subcommand)]
pub enum ChallengeAction {
    /// Mark a challenge complete for today
    Complete {
        /// Challenge ID
        id: String,
        /// Challenge requires an active subscription
        #[arg(long)]
        premium: bool,
    },
    /// Check whether a challenge has ever been completed
    Status {
        /// Challenge ID
        id: String,
    },
    /// List completed challenge IDs
    List,
}

#[derive(Serialize)]
struct ChallengeStatus<'a> {
    id: &'a str,
    completed: bool,
}

pub fn run(action: ChallengeAction, ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let mut tracker = ctx.open_tracker()?;

    match action {
        ChallengeAction::Complete { id, premium } => {
            let challenge = if premium {
                Challenge::premium(id)
            } else {
                Challenge::free(id)
            };
            let entitlement = StaticEntitlement(ctx.config.entitlement.active);
            complete_challenge(&mut tracker, &challenge, &entitlement)?;
            ctx.print(&tracker.snapshot())?;
        }
        ChallengeAction::Status { id } => {
            ctx.print(&ChallengeStatus {
                completed: tracker.is_completed(&id),
                id: &id,
            })?;
        }
        ChallengeAction::List => {
            let ids: Vec<&str> = tracker.completed_ids().collect();
            ctx.print(&ids)?;
        }
    }
    Ok(())
}
