//! Sorting of table rows by a typed column value.

use std::cmp::Ordering;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    /// Header marker for a sorted column
    pub fn indicator(self) -> &'static str {
        match self {
            SortDirection::Asc => "^",
            SortDirection::Desc => "v",
        }
    }
}

/// A column value as seen by the comparator
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    Number(i64),
    Text(String),
    Bool(bool),
}

impl SortValue {
    /// Number if the text is a plain integer, text otherwise
    pub fn from_text(s: &str) -> Self {
        s.trim()
            .parse::<i64>()
            .map_or_else(|_| SortValue::Text(s.to_string()), SortValue::Number)
    }

    fn folded(&self) -> String {
        match self {
            SortValue::Number(n) => n.to_string(),
            SortValue::Text(s) => s.to_lowercase(),
            SortValue::Bool(b) => b.to_string(),
        }
    }
}

/// Compare two values.
///
/// Numbers compare numerically, text case-insensitively, booleans with
/// `false` first. Values of different kinds compare by their lowercase
/// string form.
pub fn compare(a: &SortValue, b: &SortValue, direction: SortDirection) -> Ordering {
    let ordering = match (a, b) {
        (SortValue::Number(x), SortValue::Number(y)) => x.cmp(y),
        (SortValue::Bool(x), SortValue::Bool(y)) => x.cmp(y),
        _ => a.folded().cmp(&b.folded()),
    };

    match direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}

/// Stable sort of `rows` by the value `key` extracts
pub fn sort_rows<T, F>(rows: &mut [T], direction: SortDirection, key: F)
where
    F: Fn(&T) -> SortValue,
{
    rows.sort_by(|a, b| compare(&key(a), &key(b), direction));
}
