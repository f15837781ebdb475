mod engine;
mod record;
mod rules;

pub use engine::{StreakTracker, TrackerSnapshot};
pub use record::{
    CompletionRecord, COMPLETED_IDS_KEY, COMPLETION_COUNTS_KEY, LAST_COMPLETION_KEY, STREAK_KEY,
};
pub use rules::{has_lapsed, streak_after_completion, DayGap};
