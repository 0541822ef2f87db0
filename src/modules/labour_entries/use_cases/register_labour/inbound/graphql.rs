use async_graphql::{Context, InputObject, Object, Result as GqlResult};
use chrono::NaiveDate;

use crate::modules::labour_entries::core::errors::AttendanceError;
use crate::modules::labour_entries::use_cases::list_labour_entries::inbound::graphql::GqlLabourEntry;
use crate::modules::labour_entries::use_cases::register_labour::command::RegisterLabour;
use crate::shell::graphql::to_gql_error;
use crate::shell::state::AppState;

#[derive(InputObject)]
pub struct RegisterLabourInput {
    pub labour_name: String,
    pub salary_type: String,
    pub rate_per_day: Option<f64>,
    pub labour_category: String,
    pub aadhar_number: Option<String>,
    /// ISO date, `YYYY-MM-DD`.
    pub start_date: Option<String>,
    pub additional_details: Option<String>,
}

impl TryFrom<RegisterLabourInput> for RegisterLabour {
    type Error = AttendanceError;

    fn try_from(input: RegisterLabourInput) -> Result<Self, Self::Error> {
        let start_date = input
            .start_date
            .filter(|d| !d.trim().is_empty())
            .map(|d| {
                d.trim().parse::<NaiveDate>().map_err(|_| {
                    AttendanceError::InvalidInput(format!("startDate {d:?} is not a date"))
                })
            })
            .transpose()?;

        Ok(Self {
            labour_name: input.labour_name,
            salary_type: input.salary_type,
            rate_per_day: input.rate_per_day,
            labour_category: input.labour_category,
            aadhar_number: input.aadhar_number,
            start_date,
            additional_details: input.additional_details,
        })
    }
}

#[derive(Default)]
pub struct RegisterLabourMutation;

#[Object]
impl RegisterLabourMutation {
    async fn register_labour(
        &self,
        context: &Context<'_>,
        input: RegisterLabourInput,
    ) -> GqlResult<GqlLabourEntry> {
        let state = context.data_unchecked::<AppState>();
        let command = RegisterLabour::try_from(input).map_err(to_gql_error)?;

        let entry = state
            .register_handler
            .handle(command)
            .await
            .map_err(to_gql_error)?;

        Ok(entry.into())
    }
}
