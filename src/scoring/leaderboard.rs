//! Tournament leaderboards
//!
//! Scores every event of a tournament and aggregates the points into a player
//! leaderboard and a university leaderboard. Events are independent, so they
//! can be scored on the rayon pool; aggregation starts only after every event
//! has been scored successfully.

use crate::error::{Result, ScoringError};
use crate::scoring::event::{EventResults, EventScorer};
use crate::scoring::points::PointsTable;
use crate::scoring::rank::competition_ranks;
use crate::types::{
    EventEntries, Leaderboards, PlayerId, PlayerLeaderboardEntry, UniversityId,
    UniversityLeaderboardEntry,
};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Lookup of the university a player belongs to
pub trait UniversityDirectory {
    fn university_of(&self, player_id: &str) -> Option<UniversityId>;
}

impl UniversityDirectory for HashMap<PlayerId, UniversityId> {
    fn university_of(&self, player_id: &str) -> Option<UniversityId> {
        self.get(player_id).cloned()
    }
}

impl<F> UniversityDirectory for F
where
    F: Fn(&str) -> Option<UniversityId>,
{
    fn university_of(&self, player_id: &str) -> Option<UniversityId> {
        self(player_id)
    }
}

/// Leaderboards together with the per-event results they were built from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentStandings {
    pub leaderboards: Leaderboards,
    /// Results for every event, in input order
    pub events: Vec<EventResults>,
}

/// Running total for one player while summing
#[derive(Debug)]
struct PlayerTally {
    player_id: PlayerId,
    name: String,
    university_id: UniversityId,
    university_name: String,
    total_points: u32,
}

/// Builds tournament leaderboards from per-event results
#[derive(Debug, Clone)]
pub struct LeaderboardAggregator {
    scorer: EventScorer,
    parallel: bool,
}

impl Default for LeaderboardAggregator {
    fn default() -> Self {
        Self::new(EventScorer::default())
    }
}

impl LeaderboardAggregator {
    /// Create an aggregator that scores events in parallel
    pub fn new(scorer: EventScorer) -> Self {
        Self {
            scorer,
            parallel: true,
        }
    }

    /// Create an aggregator from a points table
    pub fn with_points_table(points: PointsTable) -> Self {
        Self::new(EventScorer::new(points))
    }

    /// Score events on the calling thread instead of the rayon pool
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Score every event, failing on the first malformed event
    pub fn score_events(&self, events: &[EventEntries]) -> Result<Vec<EventResults>> {
        let score = |entries: &EventEntries| {
            self.scorer.score_event(
                &entries.event.id,
                &entries.registrations,
                &entries.timings,
            )
        };

        // The parallel collect joins every event; errors are then reported in
        // event order so the same snapshot always fails the same way.
        if self.parallel {
            let scored: Vec<Result<EventResults>> = events.par_iter().map(score).collect();
            scored.into_iter().collect()
        } else {
            events.iter().map(score).collect()
        }
    }

    /// Build both leaderboards for a tournament
    pub fn build<D>(&self, events: &[EventEntries], directory: &D) -> Result<Leaderboards>
    where
        D: UniversityDirectory + ?Sized,
    {
        Ok(self.standings(events, directory)?.leaderboards)
    }

    /// Build both leaderboards and keep the per-event results
    pub fn standings<D>(&self, events: &[EventEntries], directory: &D) -> Result<TournamentStandings>
    where
        D: UniversityDirectory + ?Sized,
    {
        let scored = self.score_events(events)?;
        let players = tally_players(events, &scored, directory)?;
        let universities = rank_universities(&players, events)?;
        let players = rank_players(players)?;

        debug!(
            events = events.len(),
            players = players.len(),
            universities = universities.len(),
            parallel = self.parallel,
            "Built tournament leaderboards"
        );

        Ok(TournamentStandings {
            leaderboards: Leaderboards {
                players,
                universities,
            },
            events: scored,
        })
    }
}

/// Sum points per player in first-encounter order
fn tally_players<D>(
    events: &[EventEntries],
    scored: &[EventResults],
    directory: &D,
) -> Result<Vec<PlayerTally>>
where
    D: UniversityDirectory + ?Sized,
{
    let mut tallies: Vec<PlayerTally> = Vec::new();
    let mut index: HashMap<PlayerId, usize> = HashMap::new();

    for (entries, results) in events.iter().zip(scored) {
        // Results are in registration order, so they line up with registrations
        for (registration, result) in entries.registrations.iter().zip(&results.results) {
            let position = match index.get(&result.player_id) {
                Some(position) => *position,
                None => {
                    let university_id = match directory.university_of(&registration.player_id) {
                        Some(university_id) => university_id,
                        None => {
                            warn!(
                                player_id = %registration.player_id,
                                university_id = %registration.university_id,
                                "Player missing from university directory, using registration"
                            );
                            registration.university_id.clone()
                        }
                    };
                    let university_name = if university_id == registration.university_id {
                        registration.university_name.clone()
                    } else {
                        university_name(events, &university_id)
                    };

                    tallies.push(PlayerTally {
                        player_id: result.player_id.clone(),
                        name: registration.player_name.clone(),
                        university_id,
                        university_name,
                        total_points: 0,
                    });
                    index.insert(result.player_id.clone(), tallies.len() - 1);
                    tallies.len() - 1
                }
            };

            let tally = &mut tallies[position];
            tally.total_points = add_points(tally.total_points, result.points, &tally.player_id)?;
        }
    }

    Ok(tallies)
}

fn add_points(total: u32, points: u32, id: &str) -> Result<u32> {
    total
        .checked_add(points)
        .ok_or_else(|| ScoringError::PointsOverflow { id: id.to_string() })
}

/// Display name of a university, taken from the first registration naming it
fn university_name(events: &[EventEntries], university_id: &str) -> String {
    events
        .iter()
        .flat_map(|entries| &entries.registrations)
        .find(|registration| registration.university_id == university_id)
        .map(|registration| registration.university_name.clone())
        .unwrap_or_else(|| university_id.to_string())
}

fn rank_players(mut tallies: Vec<PlayerTally>) -> Result<Vec<PlayerLeaderboardEntry>> {
    // Stable: equal totals keep first-encounter order
    tallies.sort_by(|a, b| b.total_points.cmp(&a.total_points));
    let ranks = competition_ranks(&tallies, |tally| tally.total_points)?;

    let players = tallies
        .into_iter()
        .zip(ranks)
        .map(|(tally, rank)| PlayerLeaderboardEntry {
            player_id: tally.player_id,
            name: tally.name,
            university_name: tally.university_name,
            total_points: tally.total_points,
            rank,
        })
        .collect();

    Ok(players)
}

fn rank_universities(
    players: &[PlayerTally],
    events: &[EventEntries],
) -> Result<Vec<UniversityLeaderboardEntry>> {
    let mut universities: Vec<UniversityLeaderboardEntry> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for player in players {
        let position = *index
            .entry(player.university_id.as_str())
            .or_insert_with(|| {
                let name = if player.university_name.is_empty() {
                    university_name(events, &player.university_id)
                } else {
                    player.university_name.clone()
                };
                universities.push(UniversityLeaderboardEntry {
                    university_id: player.university_id.clone(),
                    name,
                    total_points: 0,
                    rank: 0,
                });
                universities.len() - 1
            });

        let university = &mut universities[position];
        university.total_points = add_points(
            university.total_points,
            player.total_points,
            &university.university_id,
        )?;
    }

    universities.sort_by(|a, b| b.total_points.cmp(&a.total_points));
    let ranks = competition_ranks(&universities, |university| university.total_points)?;
    for (university, rank) in universities.iter_mut().zip(ranks) {
        university.rank = rank;
    }

    Ok(universities)
}

/// Build both leaderboards with the standard points table
pub fn build_leaderboard<D>(events: &[EventEntries], university_of: &D) -> Result<Leaderboards>
where
    D: UniversityDirectory + ?Sized,
{
    LeaderboardAggregator::default().build(events, university_of)
}
