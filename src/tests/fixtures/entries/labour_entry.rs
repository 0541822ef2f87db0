// Shared test fixtures for labour entries.
// The default entry is read from json/labour_entry.json, the wire shape the
// document store holds.

use crate::modules::labour_entries::core::entry::{AttendanceRecord, LabourEntry, NewLabourEntry};
use crate::modules::labour_entries::core::status::AttendanceStatus;
use chrono::NaiveDate;

pub const USER_ID: &str = "user-fixed-0001";

const LABOUR_ENTRY_JSON: &str = include_str!("../json/labour_entry.json");

pub struct NewLabourEntryBuilder {
    inner: NewLabourEntry,
}

impl Default for NewLabourEntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl NewLabourEntryBuilder {
    pub fn new() -> Self {
        Self {
            inner: serde_json::from_str(LABOUR_ENTRY_JSON).unwrap(),
        }
    }

    pub fn labour_name(mut self, v: impl Into<String>) -> Self {
        self.inner.labour_name = v.into();
        self
    }

    pub fn rate_per_day(mut self, v: f64) -> Self {
        self.inner.rate_per_day = v;
        self
    }

    pub fn status(mut self, v: Option<AttendanceStatus>) -> Self {
        self.inner.status = v;
        self
    }

    pub fn build(self) -> NewLabourEntry {
        self.inner
    }
}

pub struct LabourEntryBuilder {
    inner: LabourEntry,
}

impl Default for LabourEntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl LabourEntryBuilder {
    pub fn new() -> Self {
        Self {
            inner: LabourEntry::from_new("entry-fixed-0001", NewLabourEntryBuilder::new().build()),
        }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn labour_name(mut self, v: impl Into<String>) -> Self {
        self.inner.labour_name = v.into();
        self
    }

    pub fn status(mut self, v: Option<AttendanceStatus>) -> Self {
        self.inner.status = v;
        self
    }

    pub fn record(mut self, date: NaiveDate, status: AttendanceStatus) -> Self {
        self.inner.attendance.push(AttendanceRecord::new(date, status));
        self
    }

    pub fn build(self) -> LabourEntry {
        self.inner
    }
}

#[cfg(test)]
mod labour_entry_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_parses_the_json_fixture() {
        let entry = LabourEntryBuilder::default().build();
        assert_eq!(entry.id, "entry-fixed-0001");
        assert_eq!(entry.labour_name, "Ravi");
        assert_eq!(entry.rate_per_day, 650.0);
        assert_eq!(entry.status, None);
        assert!(entry.attendance.is_empty());
    }

    #[rstest]
    fn setters_override_fields() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        let entry = LabourEntryBuilder::new()
            .id("entry-0042")
            .labour_name("Suresh")
            .status(Some(AttendanceStatus::Absent))
            .record(date, AttendanceStatus::Absent)
            .build();
        assert_eq!(entry.id, "entry-0042");
        assert_eq!(entry.labour_name, "Suresh");
        assert_eq!(entry.status_on(date), Some(AttendanceStatus::Absent));

        let new_entry = NewLabourEntryBuilder::new().rate_per_day(700.0).build();
        assert_eq!(new_entry.rate_per_day, 700.0);
    }
}
