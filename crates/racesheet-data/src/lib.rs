//! # racesheet-data
//!
//! Reads a racing league workbook and turns its loosely structured sheets
//! into typed records from `racesheet-model`.
//!
//! ## Layout
//!
//! - **Entry List**: one column block per series, data from the 4th row
//! - **LMP3/GT4/GT3 Standings**: a driver table from the 3rd row with eight
//!   sprint/feature round pairs, plus an overall ranking section
//!
//! Reading is positional (see [`config`]). Blank rows and `Waitlist` rows are
//! skipped, malformed cells fall back to 0, `""` or `false`, and only missing
//! files or sheets are errors.
//!
//! ## Example
//!
//! ```rust,ignore
//! use racesheet_data::Workbook;
//!
//! let workbook = Workbook::open("league.xlsx")?;
//! let entries = workbook.load_entry_list()?;
//! let standings = workbook.load_standings()?;
//! ```

pub mod cell;
pub mod config;
pub mod entry_list;
pub mod error;
pub mod loader;
pub mod standings;

// Re-exports
pub use cell::{cell_value, parse_bool, parse_int, parse_points};
pub use config::{SeriesColumnConfig, StandingsSheetConfig, ENTRY_LIST_SHEET};
pub use entry_list::{parse_entry_list_sheet, parse_series_section};
pub use error::{DataError, Result};
pub use loader::{find_workbook, load_entry_list, load_league, load_standings, Workbook};
pub use standings::{parse_standings_sheet, race_points};

pub use racesheet_model as model;
