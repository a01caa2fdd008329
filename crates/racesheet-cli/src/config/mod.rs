//! Configuration
//!
//! Settings are loaded from `racesheet.toml` in the working directory, or
//! from the file given with `--config`:
//!
//! ```toml
//! [workbook]
//! search_dir = "tmp"
//! path = "league.xlsx"
//!
//! [viewer]
//! page_size = 20
//! ```

mod settings;


pub use settings::{Settings, ViewerSettings, WorkbookSettings, DEFAULT_CONFIG_FILE};
