//! racesheet command-line interface
//!
//! Prints and browses a racing league's entry list and championship
//! standings read from its Excel workbook.
//!
//! ```text
//! racesheet entries league.xlsx --series GT4
//! racesheet standings --format json
//! racesheet view --standings
//! racesheet sheets league.xlsx
//! ```

pub mod app;
pub mod config;
pub mod path;
pub mod sort;
pub mod viewer;

pub use app::{
    entries_command, load_settings, locate_workbook, run_cli, sheets_command, standings_command,
    view_command, OutputFormat,
};
