use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::modules::labour_entries::core::errors::AttendanceError;
use crate::shared::core::primitives::today;
use crate::shell::http::error_response;
use crate::shell::state::AppState;

/// Always 200: a missing identity or a store failure shows as an empty list.
/// The day-status of every entry is read from today's record.
pub async fn list(State(state): State<AppState>) -> impl IntoResponse {
    let today = today();
    let entries: Vec<_> = state
        .entries
        .list()
        .await
        .into_iter()
        .map(|entry| entry.with_status_on(today))
        .collect();
    Json(entries)
}

pub async fn fetch(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.entries.fetch(&id).await {
        Some(entry) => Json(entry.with_status_on(today())).into_response(),
        None => error_response(AttendanceError::NotFound(format!("id {id}"))),
    }
}

#[cfg(test)]
mod list_labour_entries_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::modules::labour_entries::core::status::AttendanceStatus;
    use crate::shell::state::AppState;
    use crate::tests::fixtures::entries::labour_entry::NewLabourEntryBuilder;
    use crate::tests::fixtures::shell::make_app_state;

    use super::{fetch, list};

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/labour-entries", get(list))
            .route("/labour-entries/{id}", get(fetch))
            .with_state(state)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn it_should_return_200_with_empty_list_when_signed_out() {
        let response = app(make_app_state(false))
            .oneshot(Request::get("/labour-entries").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, serde_json::json!([]));
    }

    #[tokio::test]
    async fn it_should_list_the_stored_entries() {
        let state = make_app_state(true);
        let entry = state
            .entries
            .create(NewLabourEntryBuilder::new().build())
            .await
            .unwrap();

        let response = app(state)
            .oneshot(Request::get("/labour-entries").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json[0]["id"], serde_json::json!(entry.id));
        assert_eq!(json[0]["labourName"], serde_json::json!("Ravi"));
    }

    #[tokio::test]
    async fn it_should_not_serve_a_status_left_over_from_another_day() {
        let state = make_app_state(true);
        let entry = state
            .entries
            .create(
                NewLabourEntryBuilder::new()
                    .status(Some(AttendanceStatus::Overtime))
                    .build(),
            )
            .await
            .unwrap();

        let response = app(state)
            .oneshot(
                Request::get(format!("/labour-entries/{}", entry.id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], serde_json::Value::Null);
    }

    #[tokio::test]
    async fn it_should_return_404_for_an_unknown_entry() {
        let response = app(make_app_state(true))
            .oneshot(
                Request::get("/labour-entries/missing")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
