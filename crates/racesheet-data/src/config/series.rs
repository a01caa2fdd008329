//! Entry List column blocks, one per series.

use racesheet_model::Series;

/// Name of the roster sheet
pub const ENTRY_LIST_SHEET: &str = "Entry List";

/// Car used by every LMP3 entry
const LMP3_CAR: &str = "Ligier";

/// Column offsets of one series block in the Entry List sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryColumns {
    pub car_number: u32,
    pub name: u32,
    pub iracing_number: u32,
    pub class: u32,
    pub license_points: u32,
    pub protests: u32,
    /// Car model column, absent for single-make series
    pub car: Option<u32>,
    pub car_swap: u32,
}

/// Entry List layout for one series
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesColumnConfig {
    pub series: Series,
    /// First column of the block
    pub start_col: u32,
    pub columns: EntryColumns,
    /// Car shared by every entry, overriding the car column
    pub fixed_car: Option<&'static str>,
}

const LMP3: SeriesColumnConfig = SeriesColumnConfig {
    series: Series::Lmp3,
    start_col: 1, // B
    columns: EntryColumns {
        car_number: 1,     // B
        name: 2,           // C
        iracing_number: 3, // D
        class: 5,          // F
        license_points: 6, // G
        protests: 7,       // H
        car: None,
        car_swap: 13, // N
    },
    fixed_car: Some(LMP3_CAR),
};

const GT4: SeriesColumnConfig = SeriesColumnConfig {
    series: Series::Gt4,
    start_col: 18, // S
    columns: EntryColumns {
        car_number: 18,     // S
        name: 19,           // T
        iracing_number: 20, // U
        class: 22,          // W
        license_points: 23, // X
        protests: 24,       // Y
        car: Some(30),      // AE
        car_swap: 32,       // AG
    },
    fixed_car: None,
};

const GT3: SeriesColumnConfig = SeriesColumnConfig {
    series: Series::Gt3,
    start_col: 34, // AI
    columns: EntryColumns {
        car_number: 34,     // AI
        name: 35,           // AJ
        iracing_number: 36, // AK
        class: 38,          // AM
        license_points: 39, // AN
        protests: 40,       // AO
        car: Some(45),      // AT
        car_swap: 46,       // AU
    },
    fixed_car: None,
};

impl SeriesColumnConfig {
    /// Every series block in declaration order
    pub const ALL: [SeriesColumnConfig; 3] = [LMP3, GT4, GT3];

    /// Layout for a series
    pub fn for_series(series: Series) -> &'static SeriesColumnConfig {
        match series {
            Series::Lmp3 => &LMP3,
            Series::Gt4 => &GT4,
            Series::Gt3 => &GT3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configs_follow_series_order() {
        let series: Vec<Series> = SeriesColumnConfig::ALL.iter().map(|c| c.series).collect();
        assert_eq!(series, Series::ALL.to_vec());
        for s in Series::ALL {
            assert_eq!(SeriesColumnConfig::for_series(s).series, s);
        }
    }

    #[test]
    fn test_lmp3_is_single_make() {
        let lmp3 = SeriesColumnConfig::for_series(Series::Lmp3);
        assert_eq!(lmp3.start_col, 1);
        assert_eq!(lmp3.columns.car, None);
        assert_eq!(lmp3.fixed_car, Some("Ligier"));
        assert_eq!(lmp3.columns.car_swap, 13);
    }

    #[test]
    fn test_gt_car_columns() {
        let gt4 = SeriesColumnConfig::for_series(Series::Gt4);
        assert_eq!(gt4.start_col, 18);
        assert_eq!(gt4.columns.car, Some(30));
        assert_eq!(gt4.fixed_car, None);

        let gt3 = SeriesColumnConfig::for_series(Series::Gt3);
        assert_eq!(gt3.start_col, 34);
        assert_eq!(gt3.columns.car, Some(45));
        assert_eq!(gt3.columns.car_swap, 46);
    }

    #[test]
    fn test_blocks_do_not_overlap() {
        for pair in SeriesColumnConfig::ALL.windows(2) {
            let c = &pair[0].columns;
            let last = [
                c.car_number,
                c.name,
                c.iracing_number,
                c.class,
                c.license_points,
                c.protests,
                c.car.unwrap_or(0),
                c.car_swap,
            ]
            .into_iter()
            .max()
            .unwrap();
            assert!(last < pair[1].start_col);
        }
    }

    #[test]
    fn test_name_follows_car_number() {
        for config in SeriesColumnConfig::ALL {
            assert_eq!(config.columns.car_number, config.start_col);
            assert_eq!(config.columns.name, config.start_col + 1);
        }
    }
}
