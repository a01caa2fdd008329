//! Pager for entry list and standings tables
//!
//! The pager is a plain state machine over a list of rows: vertical scroll,
//! horizontal column offset, search matches and sort order. [`run_pager`]
//! drives it with one command per input line and prints the visible page
//! after each one, in the manner of `less`.
//!
//! | Command | Action |
//! |---------|--------|
//! | `j` / Enter | down one line |
//! | `k` | up one line |
//! | `f` / space | next page |
//! | `b` | previous page |
//! | `l` / `h` | scroll columns right / left |
//! | `g` / `G` | top / bottom |
//! | `/text`, `?text` | search forward / backward |
//! | `n` / `N` | next / previous match |
//! | `s COLUMN` | sort by column number or label, again to reverse |
//! | `q` | quit |

mod table;

use std::io::{self, BufRead, Write};

use tracing::debug;

pub use table::{fit, render_table, Column, TableRow};

use crate::sort::{sort_rows, SortDirection};

const HELP: &str = "j/k: line | f,space/b: page | l/h: columns | g/G: top/bottom | \
/text ?text: search | n/N: next/prev | s COL: sort | q: quit";

/// One pager command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    LineDown,
    LineUp,
    PageDown,
    PageUp,
    ColumnRight,
    ColumnLeft,
    Top,
    Bottom,
    Search(SearchDirection, String),
    NextMatch,
    PrevMatch,
    Sort(String),
    Quit,
}

impl Command {
    /// Parse one input line; `None` for unrecognized input
    pub fn parse(line: &str) -> Option<Command> {
        let line = line.trim_end_matches(['\r', '\n']);
        if line == " " {
            return Some(Command::PageDown);
        }
        if let Some(term) = line.strip_prefix('/') {
            return Some(Command::Search(SearchDirection::Forward, term.to_string()));
        }
        if let Some(term) = line.strip_prefix('?') {
            return Some(Command::Search(SearchDirection::Backward, term.to_string()));
        }

        let line = line.trim();
        if let Some(column) = line.strip_prefix("s ") {
            return Some(Command::Sort(column.trim().to_string()));
        }

        let command = match line {
            "" | "j" => Command::LineDown,
            "k" => Command::LineUp,
            "f" => Command::PageDown,
            "b" => Command::PageUp,
            "l" => Command::ColumnRight,
            "h" => Command::ColumnLeft,
            "g" => Command::Top,
            "G" => Command::Bottom,
            "n" => Command::NextMatch,
            "N" => Command::PrevMatch,
            "q" => Command::Quit,
            _ => return None,
        };
        Some(command)
    }
}

/// Search direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchDirection {
    Forward,
    Backward,
}

#[derive(Debug, Clone)]
struct Search {
    /// Row indices containing the term, ascending
    matches: Vec<usize>,
    /// Index into `matches`
    current: usize,
}

/// Pager state over rows of one record type
#[derive(Debug, Clone)]
pub struct Pager<T> {
    rows: Vec<T>,
    columns: Vec<Column>,
    page_size: usize,
    offset: usize,
    column_offset: usize,
    search: Option<Search>,
    sort: Option<(usize, SortDirection)>,
    message: Option<String>,
}

impl<T: TableRow> Pager<T> {
    pub fn new(rows: Vec<T>, page_size: usize) -> Self {
        Self {
            rows,
            columns: T::columns(),
            page_size: page_size.max(1),
            offset: 0,
            column_offset: 0,
            search: None,
            sort: None,
            message: None,
        }
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    /// Index of the first visible row
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Index of the first visible column
    pub fn column_offset(&self) -> usize {
        self.column_offset
    }

    /// Current sort column and direction
    pub fn sort(&self) -> Option<(usize, SortDirection)> {
        self.sort
    }

    /// Row indices matching the last search
    pub fn matches(&self) -> &[usize] {
        self.search.as_ref().map_or(&[], |s| s.matches.as_slice())
    }

    /// Row index of the current match
    pub fn current_match(&self) -> Option<usize> {
        self.search
            .as_ref()
            .and_then(|s| s.matches.get(s.current).copied())
    }

    /// Feedback from the last command, if any
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    fn max_offset(&self) -> usize {
        self.rows.len().saturating_sub(self.page_size)
    }

    fn scroll_to(&mut self, offset: usize) {
        self.offset = offset.min(self.max_offset());
    }

    /// Apply a command; returns `false` when the pager should close
    pub fn apply(&mut self, command: Command) -> bool {
        self.message = None;
        match command {
            Command::LineDown => self.scroll_to(self.offset + 1),
            Command::LineUp => self.scroll_to(self.offset.saturating_sub(1)),
            Command::PageDown => self.scroll_to(self.offset + self.page_size),
            Command::PageUp => self.scroll_to(self.offset.saturating_sub(self.page_size)),
            Command::ColumnRight => {
                let last = self.columns.len().saturating_sub(1);
                self.column_offset = (self.column_offset + 1).min(last);
            }
            Command::ColumnLeft => self.column_offset = self.column_offset.saturating_sub(1),
            Command::Top => self.offset = 0,
            Command::Bottom => self.offset = self.max_offset(),
            Command::Search(direction, term) => self.search(&term, direction),
            Command::NextMatch => self.step_match(true),
            Command::PrevMatch => self.step_match(false),
            Command::Sort(column) => match self.resolve_column(&column) {
                Some(index) => self.sort_by(index),
                None => self.message = Some(format!("Unknown column: {}", column)),
            },
            Command::Quit => return false,
        }
        true
    }

    /// Search rows for `term`, case-insensitively.
    ///
    /// Forward search lands on the first match at or after the current
    /// offset, backward search on the last match at or before it; both wrap.
    pub fn search(&mut self, term: &str, direction: SearchDirection) {
        if term.is_empty() {
            return;
        }

        let needle = term.to_lowercase();
        let matches: Vec<usize> = self
            .rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.search_text().to_lowercase().contains(&needle))
            .map(|(i, _)| i)
            .collect();
        debug!(term, matches = matches.len(), "search");

        if matches.is_empty() {
            self.search = None;
            self.message = Some(format!("Pattern not found: {}", term));
            return;
        }

        let current = match direction {
            SearchDirection::Forward => matches.iter().position(|&i| i >= self.offset).unwrap_or(0),
            SearchDirection::Backward => matches
                .iter()
                .rposition(|&i| i <= self.offset)
                .unwrap_or(matches.len() - 1),
        };

        self.scroll_to(matches[current]);
        self.search = Some(Search {
            matches,
            current,
        });
    }

    fn step_match(&mut self, forward: bool) {
        let Some(search) = self.search.as_mut() else {
            return;
        };
        let len = search.matches.len();
        search.current = if forward {
            (search.current + 1) % len
        } else {
            (search.current + len - 1) % len
        };
        let target = search.matches[search.current];
        self.scroll_to(target);
    }

    /// Column index from a 1-based number or a case-insensitive label
    fn resolve_column(&self, column: &str) -> Option<usize> {
        if let Ok(number) = column.parse::<usize>() {
            return (1..=self.columns.len()).contains(&number).then(|| number - 1);
        }
        self.columns
            .iter()
            .position(|c| c.label.eq_ignore_ascii_case(column))
    }

    /// Sort by a column, ascending first and reversing on repeat.
    ///
    /// Sorting clears search matches since row indices change.
    pub fn sort_by(&mut self, column: usize) {
        let direction = match self.sort {
            Some((current, direction)) if current == column => direction.toggled(),
            _ => SortDirection::Asc,
        };
        sort_rows(&mut self.rows, direction, |row| row.sort_value(column));
        self.sort = Some((column, direction));
        self.search = None;
    }

    /// Rows on the current page
    pub fn visible_rows(&self) -> &[T] {
        let end = (self.offset + self.page_size).min(self.rows.len());
        &self.rows[self.offset.min(end)..end]
    }

    /// Footer line
    pub fn status_line(&self) -> String {
        let total = self.rows.len();
        let first = if total == 0 { 0 } else { self.offset + 1 };
        let last = (self.offset + self.page_size).min(total);
        let mut status = format!("Showing {}-{} of {} entries", first, last, total);
        if let Some(search) = &self.search {
            status.push_str(&format!(
                " | Match {}/{}",
                search.current + 1,
                search.matches.len()
            ));
        }
        if let Some(message) = &self.message {
            status.push_str(" | ");
            status.push_str(message);
        }
        status
    }

    /// Render the current page: header, rows, footer and key help
    pub fn render(&self) -> String {
        let columns = &self.columns[self.column_offset..];
        let mut out = String::new();

        out.push_str("  ");
        for (i, column) in columns.iter().enumerate() {
            let index = self.column_offset + i;
            let label = match self.sort {
                Some((sorted, direction)) if sorted == index => {
                    format!("{} {}", column.label, direction.indicator())
                }
                _ => column.label.clone(),
            };
            out.push_str(&fit(&label, column.width));
        }
        out.push('\n');

        let current = self.current_match();
        for (i, row) in self.visible_rows().iter().enumerate() {
            let index = self.offset + i;
            let marker = if current == Some(index) {
                "> "
            } else if self.matches().contains(&index) {
                "* "
            } else {
                "  "
            };
            out.push_str(marker);
            for (j, column) in columns.iter().enumerate() {
                out.push_str(&fit(&row.cell(self.column_offset + j), column.width));
            }
            out.push('\n');
        }

        out.push_str(&self.status_line());
        out.push('\n');
        out.push_str(HELP);
        out.push('\n');
        out
    }
}

/// Run the pager over line commands from `input` until `q` or end of input
pub fn run_pager<T, R, W>(pager: &mut Pager<T>, input: R, mut output: W) -> io::Result<()>
where
    T: TableRow,
    R: BufRead,
    W: Write,
{
    write!(output, "{}", pager.render())?;
    write!(output, ":")?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        match Command::parse(&line) {
            Some(command) => {
                if !pager.apply(command) {
                    break;
                }
            }
            None => {
                writeln!(output, "Unknown command: {}", line.trim())?;
            }
        }
        write!(output, "{}", pager.render())?;
        write!(output, ":")?;
        output.flush()?;
    }

    writeln!(output)?;
    Ok(())
}
