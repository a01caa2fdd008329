//! Entry List extraction.
//!
//! The roster sheet holds one column block per series side by side. Each
//! block is scanned over the same bounded row window; blank and waitlist
//! rows are skipped without ending the scan.

use calamine::{Data, Range};
use racesheet_model::DriverEntry;
use tracing::debug;

use crate::cell::{cell_value, parse_bool, parse_count, parse_int, roster_name};
use crate::config::{SeriesColumnConfig, ENTRY_FIRST_ROW, ROW_SCAN_LIMIT};

/// Parse one series block of the Entry List sheet
pub fn parse_series_section(sheet: &Range<Data>, config: &SeriesColumnConfig) -> Vec<DriverEntry> {
    let columns = &config.columns;
    let mut entries = Vec::new();

    for row in ENTRY_FIRST_ROW..ROW_SCAN_LIMIT {
        let raw_name = cell_value(sheet, row, columns.name);
        let Some(name) = roster_name(&raw_name) else {
            if !raw_name.trim().is_empty() {
                debug!(series = %config.series, row, "skipping waitlist row");
            }
            continue;
        };

        let car_selection = match (config.fixed_car, columns.car) {
            (Some(car), _) => car.to_string(),
            (None, Some(col)) => cell_value(sheet, row, col),
            (None, None) => String::new(),
        };

        entries.push(DriverEntry {
            name: name.to_string(),
            iracing_number: parse_int(&cell_value(sheet, row, columns.iracing_number)),
            car_number: cell_value(sheet, row, columns.car_number),
            class: cell_value(sheet, row, columns.class),
            series: config.series,
            license_points: parse_count(&cell_value(sheet, row, columns.license_points)),
            protests: parse_count(&cell_value(sheet, row, columns.protests)),
            car_selection,
            car_swap: parse_bool(&cell_value(sheet, row, columns.car_swap)),
        });
    }

    debug!(series = %config.series, count = entries.len(), "parsed entry list section");
    entries
}

/// Parse the whole Entry List sheet, concatenating series in declaration order
pub fn parse_entry_list_sheet(sheet: &Range<Data>) -> Vec<DriverEntry> {
    SeriesColumnConfig::ALL
        .iter()
        .flat_map(|config| parse_series_section(sheet, config))
        .collect()
}
