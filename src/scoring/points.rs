//! Rank to points mapping

use crate::error::{Result, ScoringError};
use crate::types::Rank;
use serde::{Deserialize, Serialize};

/// Points awarded for ranks 1 through 8
pub const STANDARD_POINTS: [u32; 8] = [10, 8, 7, 5, 4, 3, 2, 1];

/// Lookup table from rank to points
///
/// Entry `i` holds the points for rank `i + 1`. Ranks past the end of the
/// table, and unranked entries, score zero. Deserialization goes through
/// [`PointsTable::new`], so a loaded table is always valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u32>", into = "Vec<u32>")]
pub struct PointsTable {
    points: Vec<u32>,
}

impl PointsTable {
    /// The standard table: 10, 8, 7, 5, 4, 3, 2, 1
    pub fn standard() -> Self {
        Self {
            points: STANDARD_POINTS.to_vec(),
        }
    }

    /// Build a custom table, which must be non-empty and award
    /// non-increasing points
    pub fn new(points: Vec<u32>) -> Result<Self> {
        if points.is_empty() {
            return Err(ScoringError::Configuration {
                message: "Points table cannot be empty".to_string(),
            });
        }
        if points.windows(2).any(|pair| pair[1] > pair[0]) {
            return Err(ScoringError::Configuration {
                message: format!(
                    "Points table must not award more points to a lower rank: {:?}",
                    points
                ),
            });
        }

        Ok(Self { points })
    }

    /// Points for a placement
    pub fn points(&self, rank: Rank) -> u32 {
        match rank {
            Rank::Ranked(rank) if rank >= 1 => self
                .points
                .get(rank as usize - 1)
                .copied()
                .unwrap_or(0),
            _ => 0,
        }
    }

    /// Number of ranks that score points
    pub fn scoring_places(&self) -> usize {
        self.points.iter().filter(|points| **points > 0).count()
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.points
    }
}

impl TryFrom<Vec<u32>> for PointsTable {
    type Error = ScoringError;

    fn try_from(points: Vec<u32>) -> Result<Self> {
        Self::new(points)
    }
}

impl From<PointsTable> for Vec<u32> {
    fn from(table: PointsTable) -> Self {
        table.points
    }
}

impl Default for PointsTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Points for a placement under the standard table
pub fn points(rank: Rank) -> u32 {
    match rank {
        Rank::Ranked(rank @ 1..=8) => STANDARD_POINTS[rank as usize - 1],
        _ => 0,
    }
}
