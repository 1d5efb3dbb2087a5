//! Scoring engine
//!
//! Ranks event timings, converts ranks to points and aggregates the points
//! into tournament leaderboards. Everything here is a pure function of the
//! snapshot it is given.

pub mod event;
pub mod leaderboard;
pub mod points;
pub mod rank;

// Re-export commonly used types
pub use event::{score_event, EventResults, EventScorer};
pub use leaderboard::{
    build_leaderboard, LeaderboardAggregator, TournamentStandings, UniversityDirectory,
};
pub use points::{points, PointsTable, STANDARD_POINTS};
pub use rank::{competition_ranks, RankCalculator};
