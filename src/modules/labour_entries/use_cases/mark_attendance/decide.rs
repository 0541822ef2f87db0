// Attendance state machine.
//
// Every (entry, date) pair is Unmarked or one of P, A, OT, H, and any state can
// move to any other. A press of the button that is already active clears the
// day; any other press moves the day to that status. Moving to OT requires
// positive overtime hours and rate, otherwise the press is rejected and the
// entry is left as it was.
//
// The date's AttendanceRecord follows the day state: it is removed when the
// day is cleared and located or created otherwise. Only an OT record carries
// overtime. The entry's day-status field always mirrors today's record, so a
// press on any date also drops a status left over from an earlier day.
//
// No input or output.

use crate::modules::labour_entries::core::entry::{LabourEntry, Overtime};
use crate::modules::labour_entries::core::status::AttendanceStatus;
use crate::modules::labour_entries::use_cases::mark_attendance::command::MarkAttendance;
use crate::modules::labour_entries::use_cases::mark_attendance::decision::{
    DecideError, Decision, Transition,
};
use chrono::NaiveDate;

pub fn next_status(
    current: Option<AttendanceStatus>,
    action: AttendanceStatus,
) -> Option<AttendanceStatus> {
    if current == Some(action) {
        None
    } else {
        Some(action)
    }
}

fn positive(value: Option<f64>, field: &'static str) -> Result<f64, DecideError> {
    let value = value.ok_or(DecideError::MissingOvertime(field))?;
    if !value.is_finite() || value <= 0.0 {
        return Err(DecideError::NonPositiveOvertime(field));
    }
    Ok(value)
}

pub fn validate_overtime(hours: Option<f64>, rate: Option<f64>) -> Result<Overtime, DecideError> {
    Ok(Overtime {
        hours: positive(hours, "hours")?,
        rate: positive(rate, "rate")?,
    })
}

/// Marks `date` as OT with the given overtime, leaving every other date alone.
pub fn attach_overtime(
    entry: &LabourEntry,
    date: NaiveDate,
    hours: Option<f64>,
    rate: Option<f64>,
) -> Result<LabourEntry, DecideError> {
    let overtime = validate_overtime(hours, rate)?;
    let mut next = entry.clone();
    let record = next.record_for_mut_or_insert(date, AttendanceStatus::Overtime);
    record.status = AttendanceStatus::Overtime;
    record.overtime = Some(overtime);
    Ok(next)
}

fn mark_day(entry: &LabourEntry, date: NaiveDate, status: AttendanceStatus) -> LabourEntry {
    let mut next = entry.clone();
    let record = next.record_for_mut_or_insert(date, status);
    record.status = status;
    record.overtime = None;
    next
}

fn clear_day(entry: &LabourEntry, date: NaiveDate) -> LabourEntry {
    let mut next = entry.clone();
    next.remove_record(date);
    next
}

pub fn decide_mark_attendance(
    entry: &LabourEntry,
    command: &MarkAttendance,
    today: NaiveDate,
) -> Decision {
    let date = command.date;
    let from = entry.status_on(date);
    let to = next_status(from, command.action);

    let mut next = match to {
        None => clear_day(entry, date),
        Some(AttendanceStatus::Overtime) => {
            match attach_overtime(entry, date, command.overtime.hours, command.overtime.rate) {
                Ok(next) => next,
                Err(reason) => return Decision::Rejected { reason },
            }
        }
        Some(status) => mark_day(entry, date, status),
    };
    next.refresh_status(today);

    Decision::Accepted {
        entry: next,
        transition: Transition { date, from, to },
    }
}
