//! Column definitions and fixed-width text rendering.

use racesheet_model::{DriverEntry, RaceType, StandingsEntry, ROUND_COUNT};

use crate::sort::SortValue;

/// A table column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub label: String,
    pub width: usize,
}

impl Column {
    fn new(label: impl Into<String>, width: usize) -> Self {
        Self {
            label: label.into(),
            width,
        }
    }
}

/// A record that can be shown as a table row
pub trait TableRow {
    /// Columns shared by every row of this type
    fn columns() -> Vec<Column>;

    /// Display text of one column
    fn cell(&self, column: usize) -> String;

    /// Value used when sorting by a column
    fn sort_value(&self, column: usize) -> SortValue;

    /// Text matched by search
    fn search_text(&self) -> String;
}

impl TableRow for DriverEntry {
    fn columns() -> Vec<Column> {
        vec![
            Column::new("Name", 25),
            Column::new("iRacing #", 12),
            Column::new("Car #", 10),
            Column::new("Class", 10),
            Column::new("Series", 10),
            Column::new("LP", 8),
            Column::new("Protests", 10),
            Column::new("Car", 15),
            Column::new("Swap", 8),
        ]
    }

    fn cell(&self, column: usize) -> String {
        match column {
            0 => self.name.clone(),
            1 => self.iracing_number.to_string(),
            2 => self.car_number.clone(),
            3 => self.class.clone(),
            4 => self.series.to_string(),
            5 => self.license_points.to_string(),
            6 => self.protests.to_string(),
            7 => self.car_selection.clone(),
            8 => String::from(if self.car_swap { "Yes" } else { "No" }),
            _ => String::new(),
        }
    }

    fn sort_value(&self, column: usize) -> SortValue {
        match column {
            1 => SortValue::Number(self.iracing_number),
            2 => SortValue::from_text(&self.car_number),
            5 => SortValue::Number(i64::from(self.license_points)),
            6 => SortValue::Number(i64::from(self.protests)),
            8 => SortValue::Bool(self.car_swap),
            _ => SortValue::Text(self.cell(column)),
        }
    }

    fn search_text(&self) -> String {
        (0..Self::columns().len())
            .map(|i| self.cell(i))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Round and race shown in a standings column, for columns past the fixed four
fn race_column(column: usize) -> Option<(u8, RaceType)> {
    let index = column.checked_sub(4)?;
    let round = u8::try_from(index / 2 + 1).ok()?;
    if round > ROUND_COUNT {
        return None;
    }
    let race_type = RaceType::ALL[index % 2];
    Some((round, race_type))
}

impl TableRow for StandingsEntry {
    fn columns() -> Vec<Column> {
        let mut columns = vec![
            Column::new("Name", 25),
            Column::new("Series", 8),
            Column::new("Total", 8),
            Column::new("Rank", 6),
        ];
        for round in 1..=ROUND_COUNT {
            columns.push(Column::new(format!("R{} Spr", round), 8));
            columns.push(Column::new(format!("R{} Ftr", round), 8));
        }
        columns
    }

    fn cell(&self, column: usize) -> String {
        match column {
            0 => self.name.clone(),
            1 => self.series.to_string(),
            2 => self.total_points.to_string(),
            3 => self.overall_rank.to_string(),
            _ => race_column(column)
                .map(|(round, race_type)| self.points_for(round, race_type).to_string())
                .unwrap_or_default(),
        }
    }

    fn sort_value(&self, column: usize) -> SortValue {
        match column {
            0 | 1 => SortValue::Text(self.cell(column)),
            2 => SortValue::Number(self.total_points),
            3 => SortValue::Number(i64::from(self.overall_rank)),
            _ => SortValue::Number(
                race_column(column)
                    .map_or(0, |(round, race_type)| i64::from(self.points_for(round, race_type))),
            ),
        }
    }

    fn search_text(&self) -> String {
        let mut parts = vec![
            self.name.clone(),
            self.series.to_string(),
            self.total_points.to_string(),
            self.overall_rank.to_string(),
        ];
        parts.extend(self.race_results.iter().map(|r| r.points.to_string()));
        parts.join(" ")
    }
}

/// Pad or truncate `text` to exactly `width` characters
pub fn fit(text: &str, width: usize) -> String {
    let truncated: String = text.chars().take(width).collect();
    format!("{:<width$}", truncated, width = width)
}

/// Render rows as a full fixed-width table, header first
pub fn render_table<T: TableRow>(rows: &[T]) -> String {
    let columns = T::columns();
    let mut out = String::new();

    let header: String = columns.iter().map(|c| fit(&c.label, c.width)).collect();
    out.push_str(header.trim_end());
    out.push('\n');
    let rule_width: usize = columns.iter().map(|c| c.width).sum();
    out.push_str(&"-".repeat(rule_width));
    out.push('\n');

    for row in rows {
        let line: String = columns
            .iter()
            .enumerate()
            .map(|(i, c)| fit(&row.cell(i), c.width))
            .collect();
        out.push_str(line.trim_end());
        out.push('\n');
    }

    out
}
