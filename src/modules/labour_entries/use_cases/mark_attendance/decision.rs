use crate::modules::labour_entries::core::entry::LabourEntry;
use crate::modules::labour_entries::core::status::AttendanceStatus;
use chrono::NaiveDate;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("overtime {0} is required")]
    MissingOvertime(&'static str),

    #[error("overtime {0} must be a positive number")]
    NonPositiveOvertime(&'static str),
}

/// The day-status change a decision applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub date: NaiveDate,
    pub from: Option<AttendanceStatus>,
    pub to: Option<AttendanceStatus>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Decision {
    Accepted {
        entry: LabourEntry,
        transition: Transition,
    },
    Rejected {
        reason: DecideError,
    },
}
