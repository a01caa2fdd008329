//! Standings records
//!
//! Race results are stored sparsely: a round/race with zero or blank points
//! has no [`RaceResult`]. An explicit zero and an empty cell are therefore
//! indistinguishable once parsed.

use std::fmt;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::entry::DriverEntry;
use crate::series::Series;

/// The two races of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RaceType {
    Sprint,
    Feature,
}

impl RaceType {
    /// Both race types in running order
    pub const ALL: [RaceType; 2] = [RaceType::Sprint, RaceType::Feature];

    pub fn as_str(self) -> &'static str {
        match self {
            RaceType::Sprint => "Sprint",
            RaceType::Feature => "Feature",
        }
    }
}

impl fmt::Display for RaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Points scored in one race
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaceResult {
    /// Round number, 1-based
    pub round: u8,
    pub race_type: RaceType,
    /// Always greater than zero
    pub points: u32,
}

/// A driver's line in a series standings sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingsEntry {
    /// Driver name, trimmed
    pub name: String,
    pub series: Series,
    pub total_points: i64,
    /// Ordered by round, sprint before feature
    pub race_results: Vec<RaceResult>,
    /// Position in the overall ranking, 0 when the driver is not ranked
    pub overall_rank: u32,
}

impl StandingsEntry {
    /// Points for a given race, 0 when no result was recorded
    pub fn points_for(&self, round: u8, race_type: RaceType) -> u32 {
        self.race_results
            .iter()
            .find(|r| r.round == round && r.race_type == race_type)
            .map_or(0, |r| r.points)
    }

    /// Whether the driver appears in the overall ranking
    pub fn is_ranked(&self) -> bool {
        self.overall_rank > 0
    }
}

/// Standings for all three series
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SeriesStandings {
    #[serde(rename = "LMP3")]
    pub lmp3: Vec<StandingsEntry>,
    #[serde(rename = "GT4")]
    pub gt4: Vec<StandingsEntry>,
    #[serde(rename = "GT3")]
    pub gt3: Vec<StandingsEntry>,
}

impl SeriesStandings {
    /// Iterate `(series, entries)` in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (Series, &[StandingsEntry])> + '_ {
        Series::ALL
            .into_iter()
            .map(move |series| (series, self[series].as_slice()))
    }

    /// Total number of entries across all series
    pub fn len(&self) -> usize {
        self.lmp3.len() + self.gt4.len() + self.gt3.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Index<Series> for SeriesStandings {
    type Output = Vec<StandingsEntry>;

    fn index(&self, series: Series) -> &Self::Output {
        match series {
            Series::Lmp3 => &self.lmp3,
            Series::Gt4 => &self.gt4,
            Series::Gt3 => &self.gt3,
        }
    }
}

impl IndexMut<Series> for SeriesStandings {
    fn index_mut(&mut self, series: Series) -> &mut Self::Output {
        match series {
            Series::Lmp3 => &mut self.lmp3,
            Series::Gt4 => &mut self.gt4,
            Series::Gt3 => &mut self.gt3,
        }
    }
}

/// Everything read from one workbook
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LeagueData {
    pub entries: Vec<DriverEntry>,
    pub standings: SeriesStandings,
}
