//! Workbook loading.
//!
//! [`Workbook::open`] reads the sheets the league layout needs into memory
//! once; the load operations then run the extractors over that snapshot.
//! Missing files and missing sheets are the only failures.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use calamine::{open_workbook_auto, Data, Range, Reader};
use racesheet_model::{DriverEntry, LeagueData, Series, SeriesStandings};
use tracing::{debug, info};

use crate::config::{StandingsSheetConfig, ENTRY_LIST_SHEET};
use crate::entry_list::parse_entry_list_sheet;
use crate::error::{DataError, Result};
use crate::standings::parse_standings_sheet;

/// Extension of workbooks picked up by [`find_workbook`]
const WORKBOOK_EXTENSION: &str = "xlsx";

/// In-memory snapshot of a league workbook
#[derive(Debug, Clone)]
pub struct Workbook {
    /// Every sheet name, in workbook order
    sheet_names: Vec<String>,
    /// Sheets used by the league layout
    sheets: HashMap<String, Range<Data>>,
}

impl Workbook {
    /// Open a workbook file (xlsx, xlsm, xlsb, xls or ods)
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        if !path.is_file() {
            return Err(DataError::FileNotFound(path_str));
        }

        let mut workbook = open_workbook_auto(path)
            .map_err(|e| DataError::WorkbookOpen(format!("{}: {}", path_str, e)))?;

        let sheet_names = workbook.sheet_names().to_vec();
        let mut sheets = HashMap::new();

        for name in league_sheet_names() {
            if !sheet_names.iter().any(|n| n == name) {
                continue;
            }
            let range = workbook
                .worksheet_range(name)
                .map_err(|e| DataError::SheetRead {
                    sheet: name.to_string(),
                    reason: e.to_string(),
                })?;
            sheets.insert(name.to_string(), range);
        }

        info!(path = %path_str, sheets = sheet_names.len(), "opened workbook");
        Ok(Self {
            sheet_names,
            sheets,
        })
    }

    /// Build a workbook from already-loaded sheets
    pub fn from_sheets<I, S>(sheets: I) -> Self
    where
        I: IntoIterator<Item = (S, Range<Data>)>,
        S: Into<String>,
    {
        let mut sheet_names = Vec::new();
        let mut map = HashMap::new();
        for (name, range) in sheets {
            let name = name.into();
            sheet_names.push(name.clone());
            map.insert(name, range);
        }
        Self {
            sheet_names,
            sheets: map,
        }
    }

    /// Names of all sheets in the workbook
    pub fn sheet_names(&self) -> &[String] {
        &self.sheet_names
    }

    fn sheet(&self, name: &str) -> Option<&Range<Data>> {
        self.sheets.get(name)
    }

    /// Extract the driver roster of all three series
    pub fn load_entry_list(&self) -> Result<Vec<DriverEntry>> {
        let sheet = self
            .sheet(ENTRY_LIST_SHEET)
            .ok_or_else(|| DataError::MissingSheet(ENTRY_LIST_SHEET.to_string()))?;

        let entries = parse_entry_list_sheet(sheet);
        info!(count = entries.len(), "loaded entry list");
        Ok(entries)
    }

    /// Extract standings for every series.
    ///
    /// Fails naming every missing standings sheet if any is absent.
    pub fn load_standings(&self) -> Result<SeriesStandings> {
        let missing: Vec<String> = Series::ALL
            .iter()
            .map(|s| s.standings_sheet())
            .filter(|name| self.sheet(name).is_none())
            .map(str::to_string)
            .collect();
        if !missing.is_empty() {
            return Err(DataError::MissingSheets(missing));
        }

        let mut standings = SeriesStandings::default();
        for config in &StandingsSheetConfig::ALL {
            if let Some(sheet) = self.sheet(config.sheet_name()) {
                standings[config.series] = parse_standings_sheet(sheet, config);
            }
        }

        info!(count = standings.len(), "loaded standings");
        Ok(standings)
    }

    /// Extract both the entry list and the standings
    pub fn load_all(&self) -> Result<LeagueData> {
        Ok(LeagueData {
            entries: self.load_entry_list()?,
            standings: self.load_standings()?,
        })
    }
}

/// Sheets read by [`Workbook::open`]
fn league_sheet_names() -> impl Iterator<Item = &'static str> {
    std::iter::once(ENTRY_LIST_SHEET).chain(Series::ALL.into_iter().map(Series::standings_sheet))
}

/// Open a workbook and extract its entry list
pub fn load_entry_list(path: impl AsRef<Path>) -> Result<Vec<DriverEntry>> {
    Workbook::open(path)?.load_entry_list()
}

/// Open a workbook and extract its standings
pub fn load_standings(path: impl AsRef<Path>) -> Result<SeriesStandings> {
    Workbook::open(path)?.load_standings()
}

/// Open a workbook and extract everything
pub fn load_league(path: impl AsRef<Path>) -> Result<LeagueData> {
    Workbook::open(path)?.load_all()
}

/// First `.xlsx` file in `dir`, by file name.
///
/// Returns `None` when the directory does not exist or holds no workbook.
pub fn find_workbook(dir: impl AsRef<Path>) -> Option<PathBuf> {
    let dir = dir.as_ref();
    let read_dir = match fs::read_dir(dir) {
        Ok(read_dir) => read_dir,
        Err(e) => {
            debug!(dir = %dir.display(), error = %e, "workbook directory not readable");
            return None;
        }
    };

    let mut candidates: Vec<PathBuf> = read_dir
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case(WORKBOOK_EXTENSION))
        })
        .collect();
    candidates.sort();
    candidates.into_iter().next()
}
