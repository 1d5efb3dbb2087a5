//! Common types used throughout the scoring engine

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Unique identifier for players
pub type PlayerId = String;

/// Unique identifier for events within a tournament
pub type EventId = String;

/// Unique identifier for universities
pub type UniversityId = String;

/// Unique identifier for tournaments
pub type TournamentId = String;

/// Recorded elapsed time for a player in an event
///
/// `time_ms` is `None` when the player is registered but has not been timed yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingRecord {
    pub player_id: PlayerId,
    pub event_id: EventId,
    #[serde(default)]
    pub time_ms: Option<i64>,
}

impl TimingRecord {
    pub fn new(
        player_id: impl Into<PlayerId>,
        event_id: impl Into<EventId>,
        time_ms: Option<i64>,
    ) -> Self {
        Self {
            player_id: player_id.into(),
            event_id: event_id.into(),
            time_ms,
        }
    }
}

/// Association of a player to an event they compete in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub player_id: PlayerId,
    pub event_id: EventId,
    pub player_name: String,
    pub university_id: UniversityId,
    pub university_name: String,
}

/// A single timed competition within a tournament
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub name: String,
}

/// Snapshot of one event: its registrations and whatever timings exist so far
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventEntries {
    pub event: Event,
    #[serde(default)]
    pub registrations: Vec<Registration>,
    #[serde(default)]
    pub timings: Vec<TimingRecord>,
}

/// Placement of a player within one event
///
/// Every ranked value orders before `Unranked`, so sorting by `Rank` puts
/// untimed players last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Rank {
    Ranked(u32),
    Unranked,
}

impl Rank {
    /// Numeric rank, if any
    pub fn value(&self) -> Option<u32> {
        match self {
            Rank::Ranked(rank) => Some(*rank),
            Rank::Unranked => None,
        }
    }

    pub fn is_ranked(&self) -> bool {
        matches!(self, Rank::Ranked(_))
    }
}

impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rank {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Rank::Ranked(a), Rank::Ranked(b)) => a.cmp(b),
            (Rank::Ranked(_), Rank::Unranked) => Ordering::Less,
            (Rank::Unranked, Rank::Ranked(_)) => Ordering::Greater,
            (Rank::Unranked, Rank::Unranked) => Ordering::Equal,
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rank::Ranked(rank) => write!(f, "{}", rank),
            Rank::Unranked => write!(f, "-"),
        }
    }
}

/// Scored outcome of one registration in one event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedResult {
    pub player_id: PlayerId,
    pub time_ms: Option<i64>,
    pub rank: Rank,
    pub points: u32,
}

/// Player row of a tournament leaderboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerLeaderboardEntry {
    pub player_id: PlayerId,
    pub name: String,
    pub university_name: String,
    pub total_points: u32,
    pub rank: u32,
}

/// University row of a tournament leaderboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniversityLeaderboardEntry {
    pub university_id: UniversityId,
    pub name: String,
    pub total_points: u32,
    pub rank: u32,
}

/// Both leaderboards of a tournament
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaderboards {
    pub players: Vec<PlayerLeaderboardEntry>,
    pub universities: Vec<UniversityLeaderboardEntry>,
}

impl Leaderboards {
    /// True when nothing has been scored yet
    pub fn is_empty(&self) -> bool {
        self.players.is_empty() && self.universities.is_empty()
    }
}
