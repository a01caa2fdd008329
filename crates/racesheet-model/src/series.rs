//! Competition series
//!
//! A league runs exactly three series. Every sheet in the workbook lays out
//! each series in its own column block, so the series is the key for all
//! positional configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the three fixed competition classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Series {
    /// Le Mans Prototype 3, single make (Ligier)
    #[serde(rename = "LMP3")]
    Lmp3,
    /// GT4 class
    #[serde(rename = "GT4")]
    Gt4,
    /// GT3 class
    #[serde(rename = "GT3")]
    Gt3,
}

impl Series {
    /// All series in declaration order
    pub const ALL: [Series; 3] = [Series::Lmp3, Series::Gt4, Series::Gt3];

    /// Short tag used in the workbook and in output
    pub fn tag(self) -> &'static str {
        match self {
            Series::Lmp3 => "LMP3",
            Series::Gt4 => "GT4",
            Series::Gt3 => "GT3",
        }
    }

    /// Name of this series' standings sheet
    pub fn standings_sheet(self) -> &'static str {
        match self {
            Series::Lmp3 => "LMP3 Standings",
            Series::Gt4 => "GT4 Standings",
            Series::Gt3 => "GT3 Standings",
        }
    }
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Error returned when a string is not a series tag
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown series '{0}' (expected LMP3, GT4 or GT3)")]
pub struct ParseSeriesError(pub String);

impl FromStr for Series {
    type Err = ParseSeriesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Series::ALL
            .into_iter()
            .find(|series| series.tag().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseSeriesError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags() {
        assert_eq!(Series::Lmp3.tag(), "LMP3");
        assert_eq!(Series::Gt4.to_string(), "GT4");
        assert_eq!(Series::Gt3.standings_sheet(), "GT3 Standings");
    }

    #[test]
    fn test_declaration_order() {
        assert_eq!(Series::ALL, [Series::Lmp3, Series::Gt4, Series::Gt3]);
    }

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!("lmp3".parse::<Series>().unwrap(), Series::Lmp3);
        assert_eq!(" GT4 ".parse::<Series>().unwrap(), Series::Gt4);
        assert_eq!("Gt3".parse::<Series>().unwrap(), Series::Gt3);
        assert!("GTE".parse::<Series>().is_err());
    }

    #[test]
    fn test_serde_uses_tag() {
        let json = serde_json::to_string(&Series::Gt3).unwrap();
        assert_eq!(json, "\"GT3\"");
        let back: Series = serde_json::from_str("\"LMP3\"").unwrap();
        assert_eq!(back, Series::Lmp3);
    }
}
