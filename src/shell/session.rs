// Sign the in-memory identity provider in and out. Stands in for the external
// authentication provider during local development.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct SignInBody {
    pub uid: String,
}

pub async fn sign_in(
    State(state): State<AppState>,
    body: Result<Json<SignInBody>, JsonRejection>,
) -> impl IntoResponse {
    let Ok(Json(body)) = body else {
        return StatusCode::UNPROCESSABLE_ENTITY;
    };
    let uid = body.uid.trim();
    if uid.is_empty() {
        return StatusCode::UNPROCESSABLE_ENTITY;
    }
    state.identity.sign_in(uid);
    StatusCode::NO_CONTENT
}

pub async fn sign_out(State(state): State<AppState>) -> impl IntoResponse {
    state.identity.sign_out();
    StatusCode::NO_CONTENT
}
