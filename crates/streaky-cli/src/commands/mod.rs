pub mod challenge;
pub mod config;
pub mod habit;
pub mod streak;
