use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::modules::labour_entries::core::errors::AttendanceError;
use crate::shell::http::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct AddCategoryBody {
    pub name: String,
}

pub async fn list(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.categories.read().await.list())
}

pub async fn add(
    State(state): State<AppState>,
    body: Result<Json<AddCategoryBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let mut catalog = state.categories.write().await;
    let existed = catalog.contains(&body.name);
    match catalog.add(&body.name) {
        Ok(category) if existed => (StatusCode::OK, Json(category)).into_response(),
        Ok(category) => {
            tracing::info!(category = %category.value, "labour category added");
            (StatusCode::CREATED, Json(category)).into_response()
        }
        Err(e) => error_response(AttendanceError::InvalidInput(e.to_string())),
    }
}
