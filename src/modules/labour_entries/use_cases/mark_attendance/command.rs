// Command data type for marking a labourer's attendance on one date.
//
// Purpose
// - Express a status button press (P, A, OT, H) for an entry and a date.
// - Carry the overtime form values; they are only read when the press moves
//   the day to OT.

use crate::modules::labour_entries::core::entry::EntryRef;
use crate::modules::labour_entries::core::status::AttendanceStatus;
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OvertimeInput {
    pub hours: Option<f64>,
    pub rate: Option<f64>,
}

impl OvertimeInput {
    pub fn new(hours: f64, rate: f64) -> Self {
        Self {
            hours: Some(hours),
            rate: Some(rate),
        }
    }

    /// Reads form text. Anything that does not parse as a number is missing.
    pub fn parse(hours: Option<&str>, rate: Option<&str>) -> Self {
        let number = |text: Option<&str>| text.and_then(|t| t.trim().parse::<f64>().ok());
        Self {
            hours: number(hours),
            rate: number(rate),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarkAttendance {
    pub entry: EntryRef,
    pub date: NaiveDate,
    pub action: AttendanceStatus,
    pub overtime: OvertimeInput,
}
