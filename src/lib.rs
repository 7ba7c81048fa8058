// Chatwarden: context-aware chat moderation for live streams
//
// This is the library root. `moderation` holds the decision pipeline; the
// other modules are the plumbing that feeds it and reports its verdicts.

pub mod config;
pub mod models;
pub mod moderation;
pub mod output;
pub mod pipeline;
pub mod providers;
pub mod relay;
pub mod telemetry;

#[cfg(feature = "web")]
pub mod web;
