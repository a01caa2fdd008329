//! Positional layout of the league workbook.
//!
//! The workbook has no header detection: each series occupies fixed columns
//! in every sheet, and data rows start at fixed offsets. All indices are
//! 0-based (column B is 1).

mod series;
mod standings;

pub use series::{EntryColumns, SeriesColumnConfig, ENTRY_LIST_SHEET};
pub use standings::{OverallStandingsConfig, RoundColumns, StandingsSheetConfig};

/// First data row of the Entry List sheet (4th row)
pub const ENTRY_FIRST_ROW: u32 = 3;

/// First data row of a standings sheet (3rd row)
pub const STANDINGS_FIRST_ROW: u32 = 2;

/// First data row of a standings sheet's overall ranking section
pub const RANKING_FIRST_ROW: u32 = 3;

/// Rows are scanned up to, not including, this index.
///
/// Fixed ceiling rather than the sheet's declared extent; rows designed
/// below it are ignored.
pub const ROW_SCAN_LIMIT: u32 = 50;
