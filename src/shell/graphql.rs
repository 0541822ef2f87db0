use async_graphql::{EmptySubscription, ErrorExtensions, MergedObject, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::Extension;
use axum::response::Html;

use crate::modules::labour_entries::core::errors::AttendanceError;
pub use crate::modules::labour_entries::use_cases::list_labour_entries::inbound::graphql::QueryRoot;
use crate::modules::labour_entries::use_cases::mark_attendance::inbound::graphql::MarkAttendanceMutation;
use crate::modules::labour_entries::use_cases::register_labour::inbound::graphql::RegisterLabourMutation;
use crate::modules::labour_entries::use_cases::remove_labour::inbound::graphql::RemoveLabourMutation;
pub use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct MutationRoot(
    RegisterLabourMutation,
    MarkAttendanceMutation,
    RemoveLabourMutation,
);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}

/// Carries the error kind as `extensions.code` next to the message.
pub fn to_gql_error(error: AttendanceError) -> async_graphql::Error {
    let code = match &error {
        AttendanceError::NoIdentity => "NO_IDENTITY",
        AttendanceError::NotFound(_) => "NOT_FOUND",
        AttendanceError::InvalidInput(_) => "INVALID_INPUT",
        AttendanceError::StoreFailure(_) => "STORE_FAILURE",
    };
    async_graphql::Error::new(error.to_string()).extend_with(|_, e| e.set("code", code))
}

pub async fn graphql(
    Extension(schema): Extension<AppSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

pub async fn graphiql() -> Html<String> {
    use async_graphql::http::GraphiQLSource;
    Html(GraphiQLSource::build().endpoint("/gql").finish())
}
