use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::shell::http::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct RemoveLabourParams {
    pub confirm: bool,
}

/// Without `confirm=true` nothing is deleted and 428 asks the caller to
/// confirm with the user first.
pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<RemoveLabourParams>,
) -> Response {
    let ticket = match state.remove_handler.request(&id).await {
        Ok(ticket) => ticket,
        Err(e) => return error_response(e),
    };

    if !params.confirm {
        let message = format!("confirm removal of {}", ticket.labour_name());
        state.remove_handler.cancel(ticket);
        return (
            StatusCode::PRECONDITION_REQUIRED,
            Json(serde_json::json!({ "message": message })),
        )
            .into_response();
    }

    match state.remove_handler.confirm(ticket).await {
        Ok(outcome) => Json(outcome).into_response(),
        Err(e) => error_response(e),
    }
}
