//! Standings extraction.
//!
//! A standings sheet is read in two passes over the same bounded window:
//! first the overall ranking section into a name -> rank map, then the
//! driver table, joining each driver to its rank by trimmed name. The join
//! is exact; name variants between the two sections do not match.

use std::collections::HashMap;

use calamine::{Data, Range};
use racesheet_model::{RaceResult, RaceType, StandingsEntry};
use tracing::debug;

use crate::cell::{cell_value, parse_points, roster_name, try_parse_int};
use crate::config::{
    StandingsSheetConfig, RANKING_FIRST_ROW, ROW_SCAN_LIMIT, STANDINGS_FIRST_ROW,
};

/// Points in a cell; blank and non-numeric read as 0
pub fn race_points(sheet: &Range<Data>, row: u32, col: u32) -> i64 {
    parse_points(&cell_value(sheet, row, col))
}

/// Build the trimmed-name -> rank map from the overall ranking section.
///
/// Rows whose rank cell is not a non-negative number are left out.
pub(crate) fn parse_overall_rankings(
    sheet: &Range<Data>,
    config: &StandingsSheetConfig,
) -> HashMap<String, u32> {
    let section = &config.overall_standings;
    let mut rankings = HashMap::new();

    for row in RANKING_FIRST_ROW..ROW_SCAN_LIMIT {
        let raw_name = cell_value(sheet, row, section.name_column);
        let Some(name) = roster_name(&raw_name) else {
            continue;
        };

        let rank = try_parse_int(&cell_value(sheet, row, section.rank_column))
            .and_then(|rank| u32::try_from(rank).ok());
        if let Some(rank) = rank {
            rankings.insert(name.to_string(), rank);
        }
    }

    rankings
}

/// Non-zero results of one driver row, round-major, sprint before feature
fn race_results(sheet: &Range<Data>, row: u32, config: &StandingsSheetConfig) -> Vec<RaceResult> {
    let mut results = Vec::new();

    for round in &config.round_columns {
        for (race_type, col) in [
            (RaceType::Sprint, round.sprint),
            (RaceType::Feature, round.feature),
        ] {
            let points = race_points(sheet, row, col);
            if points > 0 {
                results.push(RaceResult {
                    round: round.round,
                    race_type,
                    points: u32::try_from(points).unwrap_or(u32::MAX),
                });
            }
        }
    }

    results
}

/// Parse one series standings sheet, in row order
pub fn parse_standings_sheet(
    sheet: &Range<Data>,
    config: &StandingsSheetConfig,
) -> Vec<StandingsEntry> {
    let rankings = parse_overall_rankings(sheet, config);
    let mut entries = Vec::new();

    for row in STANDINGS_FIRST_ROW..ROW_SCAN_LIMIT {
        let raw_name = cell_value(sheet, row, config.driver_column);
        let Some(name) = roster_name(&raw_name) else {
            continue;
        };

        entries.push(StandingsEntry {
            name: name.to_string(),
            series: config.series,
            total_points: race_points(sheet, row, config.total_column),
            race_results: race_results(sheet, row, config),
            overall_rank: rankings.get(name).copied().unwrap_or(0),
        });
    }

    debug!(
        series = %config.series,
        count = entries.len(),
        ranked = rankings.len(),
        "parsed standings sheet"
    );
    entries
}

#[cfg(test)]
mod tests {
    use calamine::Data;
    use racesheet_model::Series;

    use super::*;
    use crate::cell::tests::{sheet, text};

    fn lmp3() -> &'static StandingsSheetConfig {
        StandingsSheetConfig::for_series(Series::Lmp3)
    }

    fn num(n: f64) -> Data {
        Data::Float(n)
    }

    #[test]
    fn test_race_points() {
        let ws = sheet(&[
            (0, 0, num(25.0)),
            (1, 1, text("15")),
            (2, 2, text("")),
            (3, 3, text(" ")),
            (4, 4, text("ABC")),
        ]);

        assert_eq!(race_points(&ws, 0, 0), 25);
        assert_eq!(race_points(&ws, 1, 1), 15);
        assert_eq!(race_points(&ws, 2, 2), 0);
        assert_eq!(race_points(&ws, 3, 3), 0);
        assert_eq!(race_points(&ws, 4, 4), 0);
        assert_eq!(race_points(&ws, 10, 10), 0);
    }

    #[test]
    fn test_overall_rankings() {
        let ws = sheet(&[
            (3, 20, num(1.0)),
            (3, 21, text("John Doe")),
            (3, 22, num(120.0)),
            (4, 20, num(2.0)),
            (4, 21, text("Jane Smith")),
            (4, 22, num(115.0)),
        ]);

        let rankings = parse_overall_rankings(&ws, lmp3());

        assert_eq!(rankings.len(), 2);
        assert_eq!(rankings.get("John Doe"), Some(&1));
        assert_eq!(rankings.get("Jane Smith"), Some(&2));
    }

    #[test]
    fn test_rankings_skip_waitlist_and_blank_rows() {
        let ws = sheet(&[
            (3, 20, num(1.0)),
            (3, 21, text("John Doe")),
            (4, 21, text("Waitlist")),
            // row 5 blank
            (6, 20, num(2.0)),
            (6, 21, text("Jane Smith")),
        ]);

        let rankings = parse_overall_rankings(&ws, lmp3());

        assert_eq!(rankings.len(), 2);
        assert!(!rankings.contains_key("Waitlist"));
    }

    #[test]
    fn test_rankings_require_numeric_rank() {
        let ws = sheet(&[
            (3, 20, text("-")),
            (3, 21, text("No Rank")),
            (4, 21, text("Blank Rank")),
            (5, 20, text("3")),
            (5, 21, text("  Padded  ")),
        ]);

        let rankings = parse_overall_rankings(&ws, lmp3());

        assert_eq!(rankings.len(), 1);
        assert_eq!(rankings.get("Padded"), Some(&3));
    }

    #[test]
    fn test_rankings_ignore_row_above_section() {
        let ws = sheet(&[(2, 20, num(1.0)), (2, 21, text("Header Driver"))]);

        assert!(parse_overall_rankings(&ws, lmp3()).is_empty());
    }

    #[test]
    fn test_rankings_last_write_wins() {
        let ws = sheet(&[
            (3, 20, num(4.0)),
            (3, 21, text("John Doe")),
            (4, 20, num(5.0)),
            (4, 21, text("John Doe")),
        ]);

        assert_eq!(parse_overall_rankings(&ws, lmp3()).get("John Doe"), Some(&5));
    }

    #[test]
    fn test_complete_driver_entry() {
        let ws = sheet(&[
            (2, 1, text("John Doe")),
            (2, 2, num(120.0)),
            (2, 3, num(12.0)),
            (2, 4, num(25.0)),
            (2, 5, num(15.0)),
            (2, 6, num(28.0)),
            (2, 7, num(10.0)),
            (2, 8, num(30.0)),
            (3, 20, num(1.0)),
            (3, 21, text("John Doe")),
        ]);

        let entries = parse_standings_sheet(&ws, lmp3());

        assert_eq!(entries.len(), 1);
        let e = &entries[0];
        assert_eq!(e.name, "John Doe");
        assert_eq!(e.series, Series::Lmp3);
        assert_eq!(e.total_points, 120);
        assert_eq!(e.overall_rank, 1);
        assert_eq!(
            e.race_results,
            vec![
                RaceResult { round: 1, race_type: RaceType::Sprint, points: 12 },
                RaceResult { round: 1, race_type: RaceType::Feature, points: 25 },
                RaceResult { round: 2, race_type: RaceType::Sprint, points: 15 },
                RaceResult { round: 2, race_type: RaceType::Feature, points: 28 },
                RaceResult { round: 3, race_type: RaceType::Sprint, points: 10 },
                RaceResult { round: 3, race_type: RaceType::Feature, points: 30 },
            ]
        );
    }

    #[test]
    fn test_blank_sprint_omitted() {
        let ws = sheet(&[(2, 1, text("John Doe")), (2, 4, num(25.0))]);

        let entries = parse_standings_sheet(&ws, lmp3());

        assert_eq!(
            entries[0].race_results,
            vec![RaceResult {
                round: 1,
                race_type: RaceType::Feature,
                points: 25
            }]
        );
    }

    #[test]
    fn test_zero_and_negative_results_omitted() {
        let ws = sheet(&[
            (2, 1, text("John Doe")),
            (2, 3, num(0.0)),
            (2, 4, num(-5.0)),
            (2, 5, text("DNS")),
            (2, 18, num(8.0)),
        ]);

        let results = &parse_standings_sheet(&ws, lmp3())[0].race_results;

        assert_eq!(
            results,
            &vec![RaceResult {
                round: 8,
                race_type: RaceType::Feature,
                points: 8
            }]
        );
        assert!(results.iter().all(|r| r.points > 0));
    }

    #[test]
    fn test_results_ordered_by_round_then_race() {
        let mut cells = vec![(2, 1, text("Full Season"))];
        for col in 3..=18 {
            cells.push((2, col, num(1.0)));
        }
        let ws = sheet(&cells);

        let results = &parse_standings_sheet(&ws, lmp3())[0].race_results;

        assert_eq!(results.len(), 16);
        let keys: Vec<(u8, RaceType)> = results.iter().map(|r| (r.round, r.race_type)).collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn test_trimmed_name_joins_rank() {
        let ws = sheet(&[
            (2, 1, text("  John Doe  ")),
            (2, 2, num(120.0)),
            (3, 20, num(1.0)),
            (3, 21, text("John Doe")),
        ]);

        let entries = parse_standings_sheet(&ws, lmp3());

        assert_eq!(entries[0].name, "John Doe");
        assert_eq!(entries[0].overall_rank, 1);
    }

    #[test]
    fn test_join_is_case_sensitive() {
        let ws = sheet(&[
            (2, 1, text("john doe")),
            (3, 20, num(1.0)),
            (3, 21, text("John Doe")),
        ]);

        assert_eq!(parse_standings_sheet(&ws, lmp3())[0].overall_rank, 0);
    }

    #[test]
    fn test_unranked_driver_gets_zero() {
        let ws = sheet(&[(2, 1, text("New Driver")), (2, 2, num(10.0))]);

        let entries = parse_standings_sheet(&ws, lmp3());

        assert_eq!(entries[0].overall_rank, 0);
        assert_eq!(entries[0].total_points, 10);
    }

    #[test]
    fn test_invalid_total_is_zero() {
        let ws = sheet(&[(2, 1, text("John Doe")), (2, 2, text("ABC"))]);

        assert_eq!(parse_standings_sheet(&ws, lmp3())[0].total_points, 0);
    }

    #[test]
    fn test_waitlist_and_blank_rows_skipped() {
        let ws = sheet(&[
            (2, 1, text("John Doe")),
            (2, 2, num(120.0)),
            (3, 1, text("Waitlist")),
            (4, 1, text("Jane Smith")),
            (4, 2, num(115.0)),
            // row 6 blank
            (6, 1, text("Third Driver")),
            (3, 20, num(1.0)),
            (3, 21, text("John Doe")),
            (4, 20, num(2.0)),
            (4, 21, text("Jane Smith")),
        ]);

        let entries = parse_standings_sheet(&ws, lmp3());

        let got: Vec<(&str, u32)> = entries.iter().map(|e| (e.name.as_str(), e.overall_rank)).collect();
        assert_eq!(got, [("John Doe", 1), ("Jane Smith", 2), ("Third Driver", 0)]);
    }

    #[test]
    fn test_entries_keep_row_order_not_rank_order() {
        let ws = sheet(&[
            (2, 1, text("Second Place")),
            (3, 1, text("First Place")),
            (3, 20, num(1.0)),
            (3, 21, text("First Place")),
            (4, 20, num(2.0)),
            (4, 21, text("Second Place")),
        ]);

        let names: Vec<String> = parse_standings_sheet(&ws, lmp3())
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, ["Second Place", "First Place"]);
    }

    #[test]
    fn test_gt_layout_reads_shifted_columns() {
        let gt3 = StandingsSheetConfig::for_series(Series::Gt3);
        let ws = sheet(&[
            (2, 1, text("Jane Smith")),
            (2, 2, text("Porsche 992")),
            (2, 3, num(64.0)),
            (2, 4, num(14.0)),
            (2, 5, num(50.0)),
            (3, 21, num(3.0)),
            (3, 22, text("Jane Smith")),
            (3, 23, text("Porsche 992")),
        ]);

        let entries = parse_standings_sheet(&ws, gt3);

        assert_eq!(entries.len(), 1);
        let e = &entries[0];
        assert_eq!(e.series, Series::Gt3);
        assert_eq!(e.total_points, 64);
        assert_eq!(e.overall_rank, 3);
        assert_eq!(e.points_for(1, RaceType::Sprint), 14);
        assert_eq!(e.points_for(1, RaceType::Feature), 50);
    }
}
