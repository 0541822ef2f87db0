use axum::{
    Extension, Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use tower_http::trace::TraceLayer;

use crate::modules::labour_entries::core::errors::AttendanceError;
use crate::modules::labour_entries::use_cases::list_labour_entries::inbound::http as list_http;
use crate::modules::labour_entries::use_cases::manage_categories::inbound::http as categories_http;
use crate::modules::labour_entries::use_cases::mark_attendance::inbound::http as mark_http;
use crate::modules::labour_entries::use_cases::register_labour::inbound::http as register_http;
use crate::modules::labour_entries::use_cases::remove_labour::inbound::http as remove_http;
use crate::shell::graphql::{build_schema, graphiql, graphql};
use crate::shell::session;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/labour-entries",
            get(list_http::list).post(register_http::handle),
        )
        .route(
            "/labour-entries/{id}",
            get(list_http::fetch).delete(remove_http::handle),
        )
        .route("/labour-entries/{id}/attendance", post(mark_http::handle))
        .route(
            "/labour-categories",
            get(categories_http::list).post(categories_http::add),
        )
        .route("/session", put(session::sign_in).delete(session::sign_out))
        .with_state(state)
}

/// Full application: REST routes, the GraphQL endpoint and request tracing.
pub fn app(state: AppState) -> Router {
    let schema = build_schema(state.clone());
    router(state)
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema))
        .layer(TraceLayer::new_for_http())
}

pub fn error_response(error: AttendanceError) -> Response {
    let status = match &error {
        AttendanceError::NoIdentity => StatusCode::UNAUTHORIZED,
        AttendanceError::NotFound(_) => StatusCode::NOT_FOUND,
        AttendanceError::InvalidInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
        AttendanceError::StoreFailure(_) => StatusCode::SERVICE_UNAVAILABLE,
    };
    (
        status,
        Json(serde_json::json!({ "message": error.to_string() })),
    )
        .into_response()
}
