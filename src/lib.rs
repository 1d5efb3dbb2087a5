//! Swim Scoring - Ranks and leaderboards for swim tournaments
//!
//! This crate turns recorded event timings into per-event competition ranks,
//! awards points for each rank and aggregates them into player and university
//! leaderboards. The engine is pure: the same snapshot always yields the same
//! standings.

pub mod config;
pub mod error;
pub mod output;
pub mod scoring;
pub mod snapshot;
pub mod timing;
pub mod types;

// Re-export commonly used types and traits
pub use error::{Result, ScoringError};
pub use types::*;

// Re-export key components
pub use scoring::{
    build_leaderboard, score_event, EventScorer, LeaderboardAggregator, PointsTable,
    RankCalculator, UniversityDirectory,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
