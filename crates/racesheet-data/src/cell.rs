//! Cell access and value normalization.
//!
//! Every read from a worksheet goes through [`cell_value`], which reduces a
//! cell to its string form. The parsers below turn those strings into typed
//! values without ever failing: a malformed cell becomes a default so one
//! bad cell cannot abort a sheet.

use calamine::{Data, Range};

/// Sentinel name marking the end of a roster block
pub const WAITLIST: &str = "waitlist";

/// Read the cell at zero-based absolute `(row, col)` as a string.
///
/// Absent, empty, errored and out-of-range cells all read as `""`.
pub fn cell_value(sheet: &Range<Data>, row: u32, col: u32) -> String {
    sheet
        .get_value((row, col))
        .map(cell_to_string)
        .unwrap_or_default()
}

/// Convert a calamine cell to a string
pub fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            // Spreadsheets store every number as a float
            if f.fract() == 0.0 {
                format!("{:.0}", f)
            } else {
                f.to_string()
            }
        }
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => format!("{}", dt),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
    }
}

/// Interpret free text as a boolean.
///
/// True only for "true", "1" or "yes", ignoring case and surrounding
/// whitespace.
pub fn parse_bool(value: &str) -> bool {
    let normalized = value.trim().to_lowercase();
    matches!(normalized.as_str(), "true" | "1" | "yes")
}

/// Parse the leading integer of a string.
///
/// Leading whitespace and a sign are accepted, then digits are read up to
/// the first non-digit (`"12.7"` is 12, `"42abc"` is 42). Returns `None`
/// when no digit follows. Values beyond `i64` saturate.
pub fn try_parse_int(value: &str) -> Option<i64> {
    let s = value.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut result: i64 = 0;
    let mut seen = false;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        seen = true;
        let digit = i64::from(b - b'0');
        result = result.saturating_mul(10);
        result = if negative {
            result.saturating_sub(digit)
        } else {
            result.saturating_add(digit)
        };
    }

    seen.then_some(result)
}

/// Tolerant integer parser, 0 when the value is not a number
pub fn parse_int(value: &str) -> i64 {
    try_parse_int(value).unwrap_or(0)
}

/// Tolerant parser for non-negative counters; negatives clamp to 0
pub fn parse_count(value: &str) -> u32 {
    u32::try_from(parse_int(value).max(0)).unwrap_or(u32::MAX)
}

/// Points value of a cell; blank, whitespace and non-numeric read as 0
pub fn parse_points(value: &str) -> i64 {
    if value.trim().is_empty() {
        return 0;
    }
    parse_int(value)
}

/// Trimmed name of a roster row, or `None` for blank and waitlist rows
pub fn roster_name(raw: &str) -> Option<&str> {
    let name = raw.trim();
    if name.is_empty() || name.eq_ignore_ascii_case(WAITLIST) {
        None
    } else {
        Some(name)
    }
}
