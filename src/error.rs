//! Error types for the scoring engine
//!
//! The engine reports snapshot problems through [`ScoringError`] so callers can
//! decide whether to skip an event or abort the whole computation. The host
//! layers (configuration, snapshot loading, the binary) wrap these in anyhow.

use crate::types::{EventId, PlayerId};

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, ScoringError>;

/// Errors raised while scoring events or building leaderboards
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoringError {
    #[error("Invalid timing for player {player_id} in event {event_id}: {time_ms} ms")]
    InvalidTiming {
        event_id: EventId,
        player_id: PlayerId,
        time_ms: i64,
    },

    #[error("Timing recorded for player {player_id} who is not registered for event {event_id}")]
    OrphanTiming {
        event_id: EventId,
        player_id: PlayerId,
    },

    #[error("Player {player_id} is registered more than once for event {event_id}")]
    DuplicateRegistration {
        event_id: EventId,
        player_id: PlayerId,
    },

    #[error("Player {player_id} has more than one timing in event {event_id}")]
    DuplicateTiming {
        event_id: EventId,
        player_id: PlayerId,
    },

    #[error("Registration of player {player_id} for event {found} cannot be scored as event {event_id}")]
    EventMismatch {
        event_id: EventId,
        player_id: PlayerId,
        found: EventId,
    },

    #[error("Point total for {id} exceeds {}", u32::MAX)]
    PointsOverflow { id: String },

    #[error("Cannot rank more than {} entries, got {count}", u32::MAX)]
    TooManyEntries { count: usize },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Invalid time value: {value}")]
    InvalidTimeFormat { value: String },
}

impl ScoringError {
    /// Event the error was raised for, if it concerns a single event
    pub fn event_id(&self) -> Option<&str> {
        match self {
            ScoringError::InvalidTiming { event_id, .. }
            | ScoringError::OrphanTiming { event_id, .. }
            | ScoringError::DuplicateRegistration { event_id, .. }
            | ScoringError::DuplicateTiming { event_id, .. }
            | ScoringError::EventMismatch { event_id, .. } => Some(event_id),
            ScoringError::PointsOverflow { .. }
            | ScoringError::TooManyEntries { .. }
            | ScoringError::Configuration { .. }
            | ScoringError::InvalidTimeFormat { .. } => None,
        }
    }
}
