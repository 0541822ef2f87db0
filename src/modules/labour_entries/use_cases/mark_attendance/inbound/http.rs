use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::modules::labour_entries::core::entry::EntryRef;
use crate::modules::labour_entries::core::status::AttendanceStatus;
use crate::modules::labour_entries::use_cases::mark_attendance::command::{
    MarkAttendance, OvertimeInput,
};
use crate::shared::core::primitives::today;
use crate::shell::http::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct MarkAttendanceBody {
    pub date: Option<NaiveDate>,
    pub action: AttendanceStatus,
    pub hours: Option<f64>,
    pub rate: Option<f64>,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<MarkAttendanceBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let today = today();
    let command = MarkAttendance {
        entry: EntryRef::Id(id),
        date: body.date.unwrap_or(today),
        action: body.action,
        overtime: OvertimeInput {
            hours: body.hours,
            rate: body.rate,
        },
    };

    match state.mark_handler.handle(command, today).await {
        Ok(entry) => Json(entry).into_response(),
        Err(e) => error_response(e),
    }
}
