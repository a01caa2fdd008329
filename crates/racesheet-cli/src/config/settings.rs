//! Configuration settings

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Config file looked up in the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "racesheet.toml";

/// Top-level settings structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Workbook lookup settings
    pub workbook: WorkbookSettings,
    /// Pager settings
    pub viewer: ViewerSettings,
}

impl Settings {
    /// Parse settings from a TOML string
    pub fn from_toml_str(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }
}

/// Where to find the league workbook
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WorkbookSettings {
    /// Directory scanned for the first `.xlsx` file when no path is given
    pub search_dir: PathBuf,
    /// Fixed workbook path, preferred over `search_dir`
    pub path: Option<PathBuf>,
}

impl Default for WorkbookSettings {
    fn default() -> Self {
        Self {
            search_dir: PathBuf::from("tmp"),
            path: None,
        }
    }
}

/// Pager configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewerSettings {
    /// Rows per page
    pub page_size: usize,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self { page_size: 20 }
    }
}
