use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::modules::labour_entries::use_cases::register_labour::command::RegisterLabour;
use crate::shell::http::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct RegisterLabourBody {
    pub labour_name: String,
    pub salary_type: String,
    pub rate_per_day: Option<f64>,
    pub labour_category: String,
    pub aadhar_number: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub additional_details: Option<String>,
}

impl From<RegisterLabourBody> for RegisterLabour {
    fn from(body: RegisterLabourBody) -> Self {
        Self {
            labour_name: body.labour_name,
            salary_type: body.salary_type,
            rate_per_day: body.rate_per_day,
            labour_category: body.labour_category,
            aadhar_number: body.aadhar_number,
            start_date: body.start_date,
            additional_details: body.additional_details,
        }
    }
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<RegisterLabourBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state.register_handler.handle(body.into()).await {
        Ok(entry) => (StatusCode::CREATED, Json(entry)).into_response(),
        Err(e) => error_response(e),
    }
}
