//! CLI Application logic
//!
//! Contains the command-line interface implementation.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, info, Level};
use tracing_subscriber::EnvFilter;

use racesheet_data::{find_workbook, load_entry_list, load_standings, Workbook};
use racesheet_model::{DriverEntry, Series, StandingsEntry};

use crate::config::{Settings, DEFAULT_CONFIG_FILE};
use crate::path::sanitize_path;
use crate::viewer::{render_table, run_pager, Pager};

/// Output format for listings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables
    #[default]
    Text,
    /// JSON for scripts and other tools
    Json,
}

#[derive(Parser)]
#[command(name = "racesheet")]
#[command(author, version, about = "Racing league entry lists and standings", long_about = None)]
struct Cli {
    /// Configuration file path (defaults to ./racesheet.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the entry list
    Entries {
        /// League workbook (.xlsx); searched for when omitted
        path: Option<String>,

        /// Only show one series (LMP3, GT4, GT3)
        #[arg(short, long)]
        series: Option<Series>,

        /// Output format (text or json)
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Print championship standings
    Standings {
        /// League workbook (.xlsx); searched for when omitted
        path: Option<String>,

        /// Only show one series (LMP3, GT4, GT3)
        #[arg(short, long)]
        series: Option<Series>,

        /// Output format (text or json)
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Browse entries or standings in a pager
    View {
        /// League workbook (.xlsx); searched for when omitted
        path: Option<String>,

        /// Show standings instead of the entry list
        #[arg(long)]
        standings: bool,

        /// Only show one series (LMP3, GT4, GT3)
        #[arg(short, long)]
        series: Option<Series>,
    },

    /// List the sheets in a workbook
    Sheets {
        /// League workbook (.xlsx); searched for when omitted
        path: Option<String>,
    },
}

/// Run the CLI application
///
/// Parses arguments, sets up logging and settings, and dispatches to the
/// appropriate command.
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let settings = load_settings(cli.config.as_deref())?;
    debug!(?settings, "settings loaded");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Entries {
            path,
            series,
            format,
        } => {
            let workbook = locate_workbook(path.as_deref(), &settings)?;
            entries_command(&workbook, series, format, &mut out)
        }
        Commands::Standings {
            path,
            series,
            format,
        } => {
            let workbook = locate_workbook(path.as_deref(), &settings)?;
            standings_command(&workbook, series, format, &mut out)
        }
        Commands::View {
            path,
            standings,
            series,
        } => {
            let workbook = locate_workbook(path.as_deref(), &settings)?;
            let stdin = io::stdin();
            view_command(
                &workbook,
                standings,
                series,
                settings.viewer.page_size,
                stdin.lock(),
                &mut out,
            )
        }
        Commands::Sheets { path } => {
            let workbook = locate_workbook(path.as_deref(), &settings)?;
            sheets_command(&workbook, &mut out)
        }
    }
}

/// Log to stderr at `warn`, raised by `-v`; `RUST_LOG` takes precedence
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Load settings from a config file or use defaults
pub fn load_settings(config_path: Option<&Path>) -> Result<Settings> {
    match config_path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            read_settings(path)
        }
        None => {
            let candidate = Path::new(DEFAULT_CONFIG_FILE);
            if candidate.exists() {
                read_settings(candidate)
            } else {
                Ok(Settings::default())
            }
        }
    }
}

fn read_settings(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    Settings::from_toml_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.display()))
}

/// Pick the workbook to load.
///
/// An explicit argument wins, then the configured `workbook.path`, then the
/// first `.xlsx` file in the configured search directory.
pub fn locate_workbook(arg: Option<&str>, settings: &Settings) -> Result<PathBuf> {
    if let Some(arg) = arg {
        return sanitize_path(arg).context("Failed to resolve workbook path");
    }

    if let Some(path) = &settings.workbook.path {
        return sanitize_path(&path.to_string_lossy()).context("Failed to resolve workbook path");
    }

    let dir = &settings.workbook.search_dir;
    match find_workbook(dir) {
        Some(found) => {
            info!(path = %found.display(), "using discovered workbook");
            Ok(found)
        }
        None => anyhow::bail!(
            "No .xlsx workbook found in {}; pass a workbook path",
            dir.display()
        ),
    }
}

/// Print the entry list as a table or JSON array
pub fn entries_command<W: Write>(
    path: &Path,
    series: Option<Series>,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    let entries: Vec<DriverEntry> = load_entry_list(path)
        .with_context(|| format!("Failed to load entry list: {}", path.display()))?
        .into_iter()
        .filter(|e| series.map_or(true, |s| e.series == s))
        .collect();

    match format {
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(&entries).context("Failed to serialize entries")?;
            writeln!(out, "{}", json)?;
        }
        OutputFormat::Text => {
            if entries.is_empty() {
                writeln!(out, "No entries found.")?;
            } else {
                write!(out, "{}", render_table(&entries))?;
                writeln!(out)?;
                writeln!(out, "{} entries", entries.len())?;
            }
        }
    }

    Ok(())
}

/// Print standings per series as tables or a JSON object keyed by series
pub fn standings_command<W: Write>(
    path: &Path,
    series: Option<Series>,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    let standings = load_standings(path)
        .with_context(|| format!("Failed to load standings: {}", path.display()))?;
    let selected = standings
        .iter()
        .filter(|(s, _)| series.map_or(true, |only| *s == only));

    match format {
        OutputFormat::Json => {
            let mut object = serde_json::Map::new();
            for (s, rows) in selected {
                let value = serde_json::to_value(rows).context("Failed to serialize standings")?;
                object.insert(s.tag().to_string(), value);
            }
            let json = serde_json::to_string_pretty(&object)
                .context("Failed to serialize standings")?;
            writeln!(out, "{}", json)?;
        }
        OutputFormat::Text => {
            for (i, (s, rows)) in selected.enumerate() {
                if i > 0 {
                    writeln!(out)?;
                }
                writeln!(out, "{} ({} drivers)", s.standings_sheet(), rows.len())?;
                if rows.is_empty() {
                    writeln!(out, "No standings found.")?;
                } else {
                    write!(out, "{}", render_table(rows))?;
                }
            }
        }
    }

    Ok(())
}

/// Open the pager over entries or standings, reading commands from `input`
pub fn view_command<R: BufRead, W: Write>(
    path: &Path,
    standings: bool,
    series: Option<Series>,
    page_size: usize,
    input: R,
    out: &mut W,
) -> Result<()> {
    if standings {
        let rows: Vec<StandingsEntry> = load_standings(path)
            .with_context(|| format!("Failed to load standings: {}", path.display()))?
            .iter()
            .filter(|(s, _)| series.map_or(true, |only| *s == only))
            .flat_map(|(_, rows)| rows.iter().cloned())
            .collect();
        let mut pager = Pager::new(rows, page_size);
        run_pager(&mut pager, input, out).context("Pager I/O failed")?;
    } else {
        let rows: Vec<DriverEntry> = load_entry_list(path)
            .with_context(|| format!("Failed to load entry list: {}", path.display()))?
            .into_iter()
            .filter(|e| series.map_or(true, |s| e.series == s))
            .collect();
        let mut pager = Pager::new(rows, page_size);
        run_pager(&mut pager, input, out).context("Pager I/O failed")?;
    }
    Ok(())
}

/// List the sheet names of a workbook
pub fn sheets_command<W: Write>(path: &Path, out: &mut W) -> Result<()> {
    let workbook = Workbook::open(path)
        .with_context(|| format!("Failed to open workbook: {}", path.display()))?;
    for name in workbook.sheet_names() {
        writeln!(out, "{}", name)?;
    }
    Ok(())
}
