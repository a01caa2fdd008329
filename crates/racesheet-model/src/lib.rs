//! racesheet-model - League data model
//!
//! This crate provides the typed records produced by `racesheet-data` when
//! it reads a league workbook, and consumed by the `racesheet` viewer.
//!
//! - [`Series`]: the three competition classes
//! - [`DriverEntry`]: one row of the entry list
//! - [`StandingsEntry`] and [`RaceResult`]: per-driver points
//! - [`SeriesStandings`]: standings keyed by series

pub mod entry;
pub mod series;
pub mod standings;

pub use entry::DriverEntry;
pub use series::{ParseSeriesError, Series};
pub use standings::{LeagueData, RaceResult, RaceType, SeriesStandings, StandingsEntry};

/// Number of rounds in a season
pub const ROUND_COUNT: u8 = 8;
