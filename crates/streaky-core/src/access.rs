//! Entitlement gate for premium challenges.
//!
//! Subscription status comes from an external billing provider. The tracker
//! never consults it; callers check access before recording a completion.

use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::error::AccessDenied;
use crate::storage::KeyValueStore;
use crate::tracker::StreakTracker;

/// A challenge as seen by the gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    pub id: String,
    pub is_free: bool,
}

impl Challenge {
    pub fn free(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            is_free: true,
        }
    }

    pub fn premium(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            is_free: false,
        }
    }
}

/// Source of the user's subscription status.
pub trait EntitlementProvider {
    fn has_active_entitlement(&self) -> bool;
}

/// Fixed entitlement answer, e.g. the last status cached in config.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StaticEntitlement(pub bool);

impl EntitlementProvider for StaticEntitlement {
    fn has_active_entitlement(&self) -> bool {
        self.0
    }
}

pub fn can_access_challenge<E: EntitlementProvider + ?Sized>(
    challenge: &Challenge,
    entitlements: &E,
) -> bool {
    challenge.is_free || entitlements.has_active_entitlement()
}

/// Mark `challenge` complete only if the user may access it.
///
/// Returns the streak after completion.
///
/// # Errors
/// Returns [`AccessDenied`] for a premium challenge without an entitlement;
/// the tracker is left untouched.
pub fn complete_challenge<S, C, E>(
    tracker: &mut StreakTracker<S, C>,
    challenge: &Challenge,
    entitlements: &E,
) -> Result<u32, AccessDenied>
where
    S: KeyValueStore,
    C: Clock,
    E: EntitlementProvider + ?Sized,
{
    if !can_access_challenge(challenge, entitlements) {
        tracing::debug!("access denied for premium challenge '{}'", challenge.id);
        return Err(AccessDenied {
            challenge_id: challenge.id.clone(),
        });
    }
    Ok(tracker.mark_complete(&challenge.id))
}
