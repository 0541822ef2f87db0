// Pure decision function for registration.
//
// Rules
// - Name, rate per day, category and start date are required.
// - Rate per day must be a finite, non-negative number.
// - Blank optional fields are stored as null.
// - A new entry starts unmarked with no attendance history.

use crate::modules::labour_entries::core::entry::NewLabourEntry;
use crate::modules::labour_entries::use_cases::register_labour::command::RegisterLabour;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RegisterError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("rate per day must be a non-negative number")]
    InvalidRate,
}

fn required(value: &str, field: &'static str) -> Result<String, RegisterError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(RegisterError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub fn decide_register(command: RegisterLabour) -> Result<NewLabourEntry, RegisterError> {
    let labour_name = required(&command.labour_name, "labourName")?;
    let rate_per_day = command
        .rate_per_day
        .ok_or(RegisterError::MissingField("ratePerDay"))?;
    if !rate_per_day.is_finite() || rate_per_day < 0.0 {
        return Err(RegisterError::InvalidRate);
    }
    let labour_category = required(&command.labour_category, "labourCategory")?;
    let start_date = command
        .start_date
        .ok_or(RegisterError::MissingField("startDate"))?;

    Ok(NewLabourEntry {
        labour_name,
        salary_type: command.salary_type.trim().to_string(),
        rate_per_day,
        labour_category,
        aadhar_number: optional(command.aadhar_number),
        start_date,
        additional_details: optional(command.additional_details),
        status: None,
        attendance: Vec::new(),
    })
}
