//! Scoring configuration

use crate::scoring::PointsTable;
use serde::{Deserialize, Serialize};

/// How the host binary prints its results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format: {}", other)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Scoring engine settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringSettings {
    /// Score events on the rayon pool
    pub parallel: bool,
    /// Points for ranks 1, 2, 3, ...
    pub points_table: PointsTable,
    /// Output format of the command line tool
    pub output_format: OutputFormat,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            parallel: true,
            points_table: PointsTable::standard(),
            output_format: OutputFormat::Table,
        }
    }
}

/// Parse a comma separated points table such as `"10,8,7,5"`
pub fn parse_points_table(value: &str) -> crate::error::Result<PointsTable> {
    let points = value
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<u32>()
                .map_err(|_| crate::error::ScoringError::Configuration {
                    message: format!("Invalid points table entry: {:?}", part.trim()),
                })
        })
        .collect::<crate::error::Result<Vec<u32>>>()?;

    PointsTable::new(points)
}
