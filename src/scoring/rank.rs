//! Competition ranking of event timings
//!
//! Timed entries are ordered by ascending time and ranked with standard
//! competition ranking (1, 2, 2, 4). Untimed entries are unranked and always
//! placed after every timed entry.

use crate::error::{Result, ScoringError};
use crate::types::{PlayerId, Rank};
use tracing::trace;

/// Assign standard competition ranks to an already sorted sequence.
///
/// Entries whose key equals the previous entry's key share its rank; the next
/// distinct key jumps to its 1-based position. Fails with `TooManyEntries` when
/// a position does not fit in a `u32` rank.
pub fn competition_ranks<T, K, F>(sorted: &[T], key: F) -> Result<Vec<u32>>
where
    K: PartialEq,
    F: Fn(&T) -> K,
{
    let mut ranks = Vec::with_capacity(sorted.len());
    let mut previous: Option<K> = None;
    let mut current = 0u32;

    for (index, item) in sorted.iter().enumerate() {
        let item_key = key(item);
        if previous.as_ref() != Some(&item_key) {
            current = position_rank(index, sorted.len())?;
        }
        ranks.push(current);
        previous = Some(item_key);
    }

    Ok(ranks)
}

/// 1-based rank of the zero-based `index`
fn position_rank(index: usize, count: usize) -> Result<u32> {
    index
        .checked_add(1)
        .and_then(|position| u32::try_from(position).ok())
        .ok_or(ScoringError::TooManyEntries { count })
}

/// Ranks the timings of a single event
#[derive(Debug, Clone, Copy, Default)]
pub struct RankCalculator;

impl RankCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Rank `(player_id, time_ms)` entries of one event.
    ///
    /// Returns one `(player_id, rank)` pair per input entry in finishing order.
    /// Ties and untimed entries keep their input order.
    pub fn calculate(
        &self,
        event_id: &str,
        entries: &[(PlayerId, Option<i64>)],
    ) -> Result<Vec<(PlayerId, Rank)>> {
        let ranks = self.ranks_by_position(event_id, entries)?;

        let mut placed: Vec<(PlayerId, Rank)> = entries
            .iter()
            .map(|(player_id, _)| player_id.clone())
            .zip(ranks)
            .collect();
        // sort_by_key is stable: equal ranks stay in input order
        placed.sort_by_key(|(_, rank)| *rank);

        Ok(placed)
    }

    /// Rank entries of one event, returning `ranks[i]` for `entries[i]`.
    pub fn ranks_by_position(
        &self,
        event_id: &str,
        entries: &[(PlayerId, Option<i64>)],
    ) -> Result<Vec<Rank>> {
        let mut timed: Vec<(usize, i64)> = Vec::with_capacity(entries.len());

        for (index, (player_id, time_ms)) in entries.iter().enumerate() {
            match time_ms {
                Some(time_ms) if *time_ms < 0 => {
                    return Err(ScoringError::InvalidTiming {
                        event_id: event_id.to_string(),
                        player_id: player_id.clone(),
                        time_ms: *time_ms,
                    });
                }
                Some(time_ms) => timed.push((index, *time_ms)),
                None => {}
            }
        }

        timed.sort_by_key(|(_, time_ms)| *time_ms);
        let ranks = competition_ranks(&timed, |(_, time_ms)| *time_ms)?;

        trace!(
            event_id,
            timed = timed.len(),
            untimed = entries.len() - timed.len(),
            "Ranked event timings"
        );

        let mut placed = vec![Rank::Unranked; entries.len()];
        for ((index, _), rank) in timed.into_iter().zip(ranks) {
            placed[index] = Rank::Ranked(rank);
        }

        Ok(placed)
    }
}
