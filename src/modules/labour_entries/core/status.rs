use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Attendance mark for one labourer on one day. An unmarked day is `None`
/// wherever an `Option<AttendanceStatus>` appears.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttendanceStatus {
    #[serde(rename = "P")]
    Present,
    #[serde(rename = "A")]
    Absent,
    #[serde(rename = "OT")]
    Overtime,
    #[serde(rename = "H")]
    Halfday,
}

impl AttendanceStatus {
    pub const ALL: [AttendanceStatus; 4] = [
        AttendanceStatus::Present,
        AttendanceStatus::Absent,
        AttendanceStatus::Overtime,
        AttendanceStatus::Halfday,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "P",
            AttendanceStatus::Absent => "A",
            AttendanceStatus::Overtime => "OT",
            AttendanceStatus::Halfday => "H",
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown attendance action: {0:?}")]
pub struct UnknownStatus(pub String);

impl FromStr for AttendanceStatus {
    type Err = UnknownStatus;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code.trim() {
            "P" => Ok(AttendanceStatus::Present),
            "A" => Ok(AttendanceStatus::Absent),
            "OT" => Ok(AttendanceStatus::Overtime),
            "H" => Ok(AttendanceStatus::Halfday),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}
