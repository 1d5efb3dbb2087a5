//! Plain-text and JSON rendering of scoring results

use crate::scoring::{EventResults, TournamentStandings};
use crate::snapshot::Tournament;
use crate::timing::format_seconds;
use crate::types::{EventEntries, Leaderboards};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// JSON envelope written by the command line tool
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub tournament: &'a Tournament,
    pub generated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub standings: &'a TournamentStandings,
}

impl<'a> Report<'a> {
    pub fn new(tournament: &'a Tournament, standings: &'a TournamentStandings) -> Self {
        Self {
            tournament,
            generated_at: Utc::now(),
            standings,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Format the player leaderboard as a table
pub fn format_player_leaderboard(leaderboards: &Leaderboards) -> String {
    if leaderboards.players.is_empty() {
        return "No results yet.".to_string();
    }

    let name_width = leaderboards
        .players
        .iter()
        .map(|entry| entry.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Player".len());

    let mut lines = vec![format!(
        "{:>4}  {:<name_width$}  {:<24}  {:>6}",
        "Rank", "Player", "University", "Points"
    )];
    for entry in &leaderboards.players {
        lines.push(format!(
            "{:>4}  {:<name_width$}  {:<24}  {:>6}",
            entry.rank, entry.name, entry.university_name, entry.total_points
        ));
    }
    lines.join("\n")
}

/// Format the university leaderboard as a table
pub fn format_university_leaderboard(leaderboards: &Leaderboards) -> String {
    if leaderboards.universities.is_empty() {
        return "No results yet.".to_string();
    }

    let mut lines = vec![format!("{:>4}  {:<32}  {:>6}", "Rank", "University", "Points")];
    for entry in &leaderboards.universities {
        lines.push(format!(
            "{:>4}  {:<32}  {:>6}",
            entry.rank, entry.name, entry.total_points
        ));
    }
    lines.join("\n")
}

/// Format one event's results in finishing order
pub fn format_event_standings(entries: &EventEntries, results: &EventResults) -> String {
    let mut lines = vec![format!("{} ({})", entries.event.name, entries.event.id)];
    if results.results.is_empty() {
        lines.push("  No registrations.".to_string());
        return lines.join("\n");
    }

    for result in results.standings() {
        let name = entries
            .registrations
            .iter()
            .find(|registration| registration.player_id == result.player_id)
            .map(|registration| registration.player_name.as_str())
            .unwrap_or(result.player_id.as_str());
        let time = result
            .time_ms
            .map(format_seconds)
            .unwrap_or_else(|| "--".to_string());

        lines.push(format!(
            "  {:>3}  {:<24}  {:>9}  {:>3} pts",
            result.rank.to_string(),
            name,
            time,
            result.points
        ));
    }
    lines.join("\n")
}
