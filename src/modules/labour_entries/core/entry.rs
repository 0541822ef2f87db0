// Labour entry data model.
//
// Purpose
// - One worker's registration plus attendance history, in the exact shape the
//   document store persists. Field names are part of the wire contract.
//
// Invariants
// - At most one AttendanceRecord per date inside `attendance`.
// - A record carries `overtime` only while its status is OT.
//
// Boundaries
// - No input or output. Transitions live in the mark_attendance decider.

use crate::modules::labour_entries::core::status::AttendanceStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Overtime {
    pub hours: f64,
    pub rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    /// Advance payments made on this day. Opaque here and preserved verbatim.
    #[serde(default)]
    pub advances: Vec<serde_json::Value>,
    #[serde(default)]
    pub overtime: Option<Overtime>,
}

impl AttendanceRecord {
    pub fn new(date: NaiveDate, status: AttendanceStatus) -> Self {
        Self {
            date,
            status,
            advances: Vec::new(),
            overtime: None,
        }
    }
}

/// A labour entry before the store has assigned its id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLabourEntry {
    pub labour_name: String,
    pub salary_type: String,
    pub rate_per_day: f64,
    pub labour_category: String,
    pub aadhar_number: Option<String>,
    pub start_date: NaiveDate,
    pub additional_details: Option<String>,
    pub status: Option<AttendanceStatus>,
    #[serde(default)]
    pub attendance: Vec<AttendanceRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabourEntry {
    pub id: String,
    pub labour_name: String,
    pub salary_type: String,
    pub rate_per_day: f64,
    pub labour_category: String,
    pub aadhar_number: Option<String>,
    pub start_date: NaiveDate,
    pub additional_details: Option<String>,
    pub status: Option<AttendanceStatus>,
    #[serde(default)]
    pub attendance: Vec<AttendanceRecord>,
}

impl LabourEntry {
    pub fn from_new(id: impl Into<String>, entry: NewLabourEntry) -> Self {
        Self {
            id: id.into(),
            labour_name: entry.labour_name,
            salary_type: entry.salary_type,
            rate_per_day: entry.rate_per_day,
            labour_category: entry.labour_category,
            aadhar_number: entry.aadhar_number,
            start_date: entry.start_date,
            additional_details: entry.additional_details,
            status: entry.status,
            attendance: entry.attendance,
        }
    }

    pub fn record_for(&self, date: NaiveDate) -> Option<&AttendanceRecord> {
        self.attendance.iter().find(|record| record.date == date)
    }

    /// Returns the record for `date`, appending a new one with `status` when
    /// the date has none yet.
    pub fn record_for_mut_or_insert(
        &mut self,
        date: NaiveDate,
        status: AttendanceStatus,
    ) -> &mut AttendanceRecord {
        let index = match self.attendance.iter().position(|record| record.date == date) {
            Some(index) => index,
            None => {
                self.attendance.push(AttendanceRecord::new(date, status));
                self.attendance.len() - 1
            }
        };
        &mut self.attendance[index]
    }

    pub fn remove_record(&mut self, date: NaiveDate) {
        self.attendance.retain(|record| record.date != date);
    }

    pub fn status_on(&self, date: NaiveDate) -> Option<AttendanceStatus> {
        self.record_for(date).map(|record| record.status)
    }

    /// Sets the day-status from the record for `today`.
    pub fn refresh_status(&mut self, today: NaiveDate) {
        self.status = self.status_on(today);
    }

    pub fn with_status_on(mut self, today: NaiveDate) -> Self {
        self.refresh_status(today);
        self
    }
}

/// Fields to replace on a stored entry. `None` leaves a field untouched; the
/// nested options write an explicit null.
///
/// `attendance` must always be the full sequence since the store replaces the
/// whole field.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labour_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_per_day: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labour_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aadhar_number: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_details: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Option<AttendanceStatus>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attendance: Option<Vec<AttendanceRecord>>,
}

impl EntryPatch {
    /// Patch carrying the day-status and the complete attendance history.
    pub fn attendance_of(entry: &LabourEntry) -> Self {
        Self {
            status: Some(entry.status),
            attendance: Some(entry.attendance.clone()),
            ..Self::default()
        }
    }
}

/// How a caller points at an entry: by store id, or by the displayed name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryRef {
    Id(String),
    Name(String),
}

impl fmt::Display for EntryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryRef::Id(id) => write!(f, "id {id}"),
            EntryRef::Name(name) => write!(f, "name {name:?}"),
        }
    }
}
