use async_graphql::{Context, ID, Object, Result as GqlResult, SimpleObject};

use crate::modules::labour_entries::core::categories::Category;
use crate::modules::labour_entries::core::entry::{AttendanceRecord, LabourEntry, Overtime};
use crate::shared::core::primitives::today;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlOvertime {
    pub hours: f64,
    pub rate: f64,
}

impl From<Overtime> for GqlOvertime {
    fn from(o: Overtime) -> Self {
        Self {
            hours: o.hours,
            rate: o.rate,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlAttendanceRecord {
    pub date: String,
    pub status: String,
    pub overtime: Option<GqlOvertime>,
}

impl From<AttendanceRecord> for GqlAttendanceRecord {
    fn from(r: AttendanceRecord) -> Self {
        Self {
            date: r.date.to_string(),
            status: r.status.to_string(),
            overtime: r.overtime.map(Into::into),
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlLabourEntry {
    pub id: ID,
    pub labour_name: String,
    pub salary_type: String,
    pub rate_per_day: f64,
    pub labour_category: String,
    pub aadhar_number: Option<String>,
    pub start_date: String,
    pub additional_details: Option<String>,
    pub status: Option<String>,
    pub attendance: Vec<GqlAttendanceRecord>,
}

impl From<LabourEntry> for GqlLabourEntry {
    fn from(e: LabourEntry) -> Self {
        Self {
            id: ID(e.id),
            labour_name: e.labour_name,
            salary_type: e.salary_type,
            rate_per_day: e.rate_per_day,
            labour_category: e.labour_category,
            aadhar_number: e.aadhar_number,
            start_date: e.start_date.to_string(),
            additional_details: e.additional_details,
            status: e.status.map(|s| s.to_string()),
            attendance: e.attendance.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlCategory {
    /// Stored on the entry as `labourCategory`.
    pub value: String,
    pub label: String,
}

impl From<Category> for GqlCategory {
    fn from(c: Category) -> Self {
        Self {
            value: c.value,
            label: c.label,
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn labour_entries(&self, context: &Context<'_>) -> GqlResult<Vec<GqlLabourEntry>> {
        let state = context.data_unchecked::<AppState>();
        let today = today();
        let list = state.entries.list().await;
        Ok(list
            .into_iter()
            .map(|entry| entry.with_status_on(today).into())
            .collect())
    }

    async fn labour_entry(
        &self,
        context: &Context<'_>,
        id: ID,
    ) -> GqlResult<Option<GqlLabourEntry>> {
        let state = context.data_unchecked::<AppState>();
        let entry = state.entries.fetch(&id).await;
        Ok(entry.map(|entry| entry.with_status_on(today()).into()))
    }

    async fn labour_categories(&self, context: &Context<'_>) -> GqlResult<Vec<GqlCategory>> {
        let state = context.data_unchecked::<AppState>();
        let catalog = state.categories.read().await;
        Ok(catalog.list().into_iter().map(Into::into).collect())
    }
}
