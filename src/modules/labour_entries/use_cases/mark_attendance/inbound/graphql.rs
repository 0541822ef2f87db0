use async_graphql::{Context, ID, Object, Result as GqlResult};
use chrono::NaiveDate;

use crate::modules::labour_entries::core::entry::EntryRef;
use crate::modules::labour_entries::core::errors::AttendanceError;
use crate::modules::labour_entries::core::status::AttendanceStatus;
use crate::modules::labour_entries::use_cases::list_labour_entries::inbound::graphql::GqlLabourEntry;
use crate::modules::labour_entries::use_cases::mark_attendance::command::{
    MarkAttendance, OvertimeInput,
};
use crate::shared::core::primitives::today;
use crate::shell::graphql::to_gql_error;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct MarkAttendanceMutation;

#[Object]
impl MarkAttendanceMutation {
    /// Presses a status button for one entry. The entry is picked by `id`, or
    /// by `labourName` when no id is given. `hours` and `rate` are the raw
    /// overtime form values.
    async fn mark_attendance(
        &self,
        context: &Context<'_>,
        id: Option<ID>,
        labour_name: Option<String>,
        action: String,
        date: Option<String>,
        hours: Option<String>,
        rate: Option<String>,
    ) -> GqlResult<GqlLabourEntry> {
        let state = context.data_unchecked::<AppState>();

        let entry = match (id, labour_name) {
            (Some(id), _) => EntryRef::Id(id.to_string()),
            (None, Some(name)) => EntryRef::Name(name),
            (None, None) => {
                return Err(to_gql_error(AttendanceError::InvalidInput(
                    "id or labourName is required".into(),
                )));
            }
        };
        let action = action
            .parse::<AttendanceStatus>()
            .map_err(|e| to_gql_error(AttendanceError::InvalidInput(e.to_string())))?;

        let today = today();
        let date = match date {
            Some(d) => d.trim().parse::<NaiveDate>().map_err(|_| {
                to_gql_error(AttendanceError::InvalidInput(format!(
                    "date {d:?} is not a date"
                )))
            })?,
            None => today,
        };

        let command = MarkAttendance {
            entry,
            date,
            action,
            overtime: OvertimeInput::parse(hours.as_deref(), rate.as_deref()),
        };

        let entry = state
            .mark_handler
            .handle(command, today)
            .await
            .map_err(to_gql_error)?;

        Ok(entry.into())
    }
}
