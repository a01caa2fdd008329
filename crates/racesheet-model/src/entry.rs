//! Entry list records

use serde::{Deserialize, Serialize};

use crate::series::Series;

/// A driver's registration in one series, read from the Entry List sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverEntry {
    /// Driver name, trimmed and never the waitlist sentinel
    pub name: String,
    /// iRacing customer id (0 when the cell is not a number)
    #[serde(rename = "iRacingNumber")]
    pub iracing_number: i64,
    /// Car number as written in the sheet
    pub car_number: String,
    /// Class code
    pub class: String,
    pub series: Series,
    pub license_points: u32,
    pub protests: u32,
    /// Car model; fixed for single-make series
    pub car_selection: String,
    /// Whether the driver has requested a car swap
    pub car_swap: bool,
}
