use async_graphql::{Context, ID, Object, Result as GqlResult, SimpleObject};

use crate::modules::labour_entries::core::errors::AttendanceError;
use crate::shell::graphql::to_gql_error;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlRemoval {
    pub entry_id: ID,
    pub remaining: i64,
}

#[derive(Default)]
pub struct RemoveLabourMutation;

#[Object]
impl RemoveLabourMutation {
    /// Nothing is deleted unless `confirm` is true.
    async fn delete_labour(
        &self,
        context: &Context<'_>,
        id: ID,
        confirm: bool,
    ) -> GqlResult<GqlRemoval> {
        let state = context.data_unchecked::<AppState>();
        let ticket = state
            .remove_handler
            .request(&id)
            .await
            .map_err(to_gql_error)?;

        if !confirm {
            let message = format!("confirm removal of {}", ticket.labour_name());
            state.remove_handler.cancel(ticket);
            return Err(to_gql_error(AttendanceError::InvalidInput(message)));
        }

        let outcome = state
            .remove_handler
            .confirm(ticket)
            .await
            .map_err(to_gql_error)?;

        Ok(GqlRemoval {
            entry_id: ID(outcome.entry_id),
            remaining: outcome.remaining as i64,
        })
    }
}
