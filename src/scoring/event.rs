//! Scoring of a single event
//!
//! Joins an event's registrations with its timings, ranks the timings and
//! awards points. Every registration produces exactly one result.

use crate::error::{Result, ScoringError};
use crate::scoring::points::PointsTable;
use crate::scoring::rank::RankCalculator;
use crate::types::{EventId, PlayerId, Rank, RankedResult, Registration, TimingRecord};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Scored results of one event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventResults {
    pub event_id: EventId,
    /// One result per registration, in registration order
    pub results: Vec<RankedResult>,
}

impl EventResults {
    /// Results in finishing order: fastest first, unranked last
    pub fn standings(&self) -> Vec<&RankedResult> {
        let mut standings: Vec<&RankedResult> = self.results.iter().collect();
        standings.sort_by_key(|result| result.rank);
        standings
    }

    /// Players sharing first place, if anyone has been timed
    pub fn winners(&self) -> Vec<&RankedResult> {
        self.results
            .iter()
            .filter(|result| result.rank == Rank::Ranked(1))
            .collect()
    }

    /// Result for a given player
    pub fn result_for(&self, player_id: &str) -> Option<&RankedResult> {
        self.results.iter().find(|result| result.player_id == player_id)
    }

    /// Number of players with a recorded time
    pub fn timed_count(&self) -> usize {
        self.results.iter().filter(|result| result.rank.is_ranked()).count()
    }
}

/// Scores one event's registrations against its timings
#[derive(Debug, Clone, Default)]
pub struct EventScorer {
    ranks: RankCalculator,
    points: PointsTable,
}

impl EventScorer {
    /// Create a scorer using the given points table
    pub fn new(points: PointsTable) -> Self {
        Self {
            ranks: RankCalculator::new(),
            points,
        }
    }

    pub fn points_table(&self) -> &PointsTable {
        &self.points
    }

    /// Score one event.
    ///
    /// The event is the one named by the first registration. Registrations
    /// without a timing record, or with an absent time, are unranked and score
    /// zero. A timing whose `(player_id, event_id)` pair has no registration is
    /// an [`ScoringError::OrphanTiming`].
    pub fn score(
        &self,
        registrations: &[Registration],
        timings: &[TimingRecord],
    ) -> Result<Vec<RankedResult>> {
        let event_id = registrations
            .first()
            .map(|registration| registration.event_id.as_str())
            .unwrap_or_default();
        self.score_as(event_id, registrations, timings)
    }

    /// Score one event and keep its id alongside the results.
    ///
    /// Every registration must belong to `event_id`.
    pub fn score_event(
        &self,
        event_id: &str,
        registrations: &[Registration],
        timings: &[TimingRecord],
    ) -> Result<EventResults> {
        Ok(EventResults {
            event_id: event_id.to_string(),
            results: self.score_as(event_id, registrations, timings)?,
        })
    }

    fn score_as(
        &self,
        event_id: &str,
        registrations: &[Registration],
        timings: &[TimingRecord],
    ) -> Result<Vec<RankedResult>> {
        let mut registered: HashSet<&str> = HashSet::with_capacity(registrations.len());
        for registration in registrations {
            if registration.event_id != event_id {
                return Err(ScoringError::EventMismatch {
                    event_id: event_id.to_string(),
                    player_id: registration.player_id.clone(),
                    found: registration.event_id.clone(),
                });
            }
            if !registered.insert(registration.player_id.as_str()) {
                return Err(ScoringError::DuplicateRegistration {
                    event_id: registration.event_id.clone(),
                    player_id: registration.player_id.clone(),
                });
            }
        }

        let mut times: HashMap<&str, Option<i64>> = HashMap::with_capacity(timings.len());
        for timing in timings {
            let player_id = timing.player_id.as_str();
            if timing.event_id != event_id || !registered.contains(player_id) {
                return Err(ScoringError::OrphanTiming {
                    event_id: timing.event_id.clone(),
                    player_id: timing.player_id.clone(),
                });
            }
            if times.insert(player_id, timing.time_ms).is_some() {
                return Err(ScoringError::DuplicateTiming {
                    event_id: timing.event_id.clone(),
                    player_id: timing.player_id.clone(),
                });
            }
        }

        let entries: Vec<(PlayerId, Option<i64>)> = registrations
            .iter()
            .map(|registration| {
                let time_ms = times
                    .get(registration.player_id.as_str())
                    .copied()
                    .flatten();
                (registration.player_id.clone(), time_ms)
            })
            .collect();

        let ranks = self.ranks.ranks_by_position(event_id, &entries)?;

        let results: Vec<RankedResult> = entries
            .into_iter()
            .zip(ranks)
            .map(|((player_id, time_ms), rank)| RankedResult {
                points: self.points.points(rank),
                player_id,
                time_ms,
                rank,
            })
            .collect();

        debug!(
            event_id,
            registrations = results.len(),
            timed = results.iter().filter(|r| r.rank.is_ranked()).count(),
            "Scored event"
        );

        Ok(results)
    }
}

/// Score one event with the standard points table
pub fn score_event(
    registrations: &[Registration],
    timings: &[TimingRecord],
) -> Result<Vec<RankedResult>> {
    EventScorer::default().score(registrations, timings)
}
