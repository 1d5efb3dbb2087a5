//! Tournament snapshots
//!
//! A snapshot is the materialised input of one leaderboard computation: every
//! event of a tournament with its registrations and timings, plus the
//! university affiliation of each player. The storage layer exports it as
//! JSON; the engine never writes it back.

use crate::types::{EventEntries, PlayerId, TournamentId, UniversityId};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Tournament identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
}

/// Self-consistent input for one computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentSnapshot {
    pub tournament: Tournament,
    #[serde(default)]
    pub events: Vec<EventEntries>,
    /// University of every player, keyed by player id
    #[serde(default)]
    pub universities: HashMap<PlayerId, UniversityId>,
}

impl TournamentSnapshot {
    /// Parse a snapshot from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse tournament snapshot")
    }

    /// Load a snapshot from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read snapshot: {}", path.display()))?;
        Self::from_json(&contents)
            .with_context(|| format!("Invalid snapshot file: {}", path.display()))
    }

    /// Entries of a single event
    pub fn event(&self, event_id: &str) -> Option<&EventEntries> {
        self.events.iter().find(|entries| entries.event.id == event_id)
    }

    /// Total registrations across all events
    pub fn registration_count(&self) -> usize {
        self.events
            .iter()
            .map(|entries| entries.registrations.len())
            .sum()
    }
}
