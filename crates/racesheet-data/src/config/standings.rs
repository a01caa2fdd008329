//! Standings sheet layout, one per series.
//!
//! Each standings sheet has a driver table on the left (name, optional car,
//! total, then a sprint/feature column pair per round) and an overall
//! ranking section to its right.

use racesheet_model::{Series, ROUND_COUNT};

/// Sprint and feature columns of one round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundColumns {
    pub round: u8,
    pub sprint: u32,
    pub feature: u32,
}

/// Columns of the overall ranking section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverallStandingsConfig {
    pub rank_column: u32,
    pub name_column: u32,
    pub car_column: Option<u32>,
    pub total_column: u32,
}

/// Standings layout for one series
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StandingsSheetConfig {
    pub series: Series,
    pub driver_column: u32,
    /// Only present for multi-make series
    pub car_column: Option<u32>,
    pub total_column: u32,
    pub round_columns: [RoundColumns; ROUND_COUNT as usize],
    pub overall_standings: OverallStandingsConfig,
}

/// Adjacent sprint/feature pairs for every round, starting at `first`
const fn rounds_from(first: u32) -> [RoundColumns; ROUND_COUNT as usize] {
    let mut rounds = [RoundColumns {
        round: 0,
        sprint: 0,
        feature: 0,
    }; ROUND_COUNT as usize];
    let mut i = 0;
    while i < rounds.len() {
        let sprint = first + 2 * i as u32;
        rounds[i] = RoundColumns {
            round: i as u8 + 1,
            sprint,
            feature: sprint + 1,
        };
        i += 1;
    }
    rounds
}

const LMP3: StandingsSheetConfig = StandingsSheetConfig {
    series: Series::Lmp3,
    driver_column: 1, // B
    car_column: None,
    total_column: 2,               // C
    round_columns: rounds_from(3), // D/E .. R/S
    overall_standings: OverallStandingsConfig {
        rank_column: 20, // U
        name_column: 21, // V
        car_column: None,
        total_column: 22, // W
    },
};

const GT4: StandingsSheetConfig = StandingsSheetConfig {
    series: Series::Gt4,
    driver_column: 1,              // B
    car_column: Some(2),           // C
    total_column: 3,               // D
    round_columns: rounds_from(4), // E/F .. S/T
    overall_standings: OverallStandingsConfig {
        rank_column: 21,      // V
        name_column: 22,      // W
        car_column: Some(23), // X
        total_column: 24,     // Y
    },
};

const GT3: StandingsSheetConfig = StandingsSheetConfig {
    series: Series::Gt3,
    ..GT4
};

impl StandingsSheetConfig {
    /// Every standings layout in declaration order
    pub const ALL: [StandingsSheetConfig; 3] = [LMP3, GT4, GT3];

    /// Layout for a series
    pub fn for_series(series: Series) -> &'static StandingsSheetConfig {
        match series {
            Series::Lmp3 => &LMP3,
            Series::Gt4 => &GT4,
            Series::Gt3 => &GT3,
        }
    }

    /// Name of the sheet this layout applies to
    pub fn sheet_name(&self) -> &'static str {
        self.series.standings_sheet()
    }
}
