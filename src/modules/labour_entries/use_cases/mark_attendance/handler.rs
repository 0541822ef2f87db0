// Mark attendance handler orchestrates the write flow.
//
// Responsibilities
// - Resolve the entry by id or name through the entry store.
// - Call the decider with the command and today's date.
// - Persist the day-status and the full attendance sequence.
//
// A failure at any step leaves the stored entry untouched.

use crate::modules::labour_entries::adapters::outbound::entry_store::EntryStore;
use crate::modules::labour_entries::core::entry::{EntryPatch, LabourEntry};
use crate::modules::labour_entries::core::errors::AttendanceError;
use crate::modules::labour_entries::use_cases::mark_attendance::command::MarkAttendance;
use crate::modules::labour_entries::use_cases::mark_attendance::decide::decide_mark_attendance;
use crate::modules::labour_entries::use_cases::mark_attendance::decision::Decision;
use crate::shared::infrastructure::document_store::DocumentStore;
use crate::shared::infrastructure::identity::IdentityProvider;
use chrono::NaiveDate;
use std::sync::Arc;

pub struct MarkAttendanceHandler<TStore, TIdentity>
where
    TStore: DocumentStore + 'static,
    TIdentity: IdentityProvider + 'static,
{
    entries: Arc<EntryStore<TStore, TIdentity>>,
}

impl<TStore, TIdentity> MarkAttendanceHandler<TStore, TIdentity>
where
    TStore: DocumentStore + 'static,
    TIdentity: IdentityProvider + 'static,
{
    pub fn new(entries: Arc<EntryStore<TStore, TIdentity>>) -> Self {
        Self { entries }
    }

    pub async fn handle(
        &self,
        command: MarkAttendance,
        today: NaiveDate,
    ) -> Result<LabourEntry, AttendanceError> {
        if self.entries.identity().is_none() {
            tracing::warn!("no identity signed in, attendance not marked");
            return Err(AttendanceError::NoIdentity);
        }

        let Some(entry) = self.entries.resolve(&command.entry).await else {
            tracing::info!(entry = %command.entry, "labour entry not found");
            return Err(AttendanceError::NotFound(command.entry.to_string()));
        };

        match decide_mark_attendance(&entry, &command, today) {
            Decision::Accepted {
                entry: next,
                transition,
            } => {
                if !self
                    .entries
                    .update(&next.id, EntryPatch::attendance_of(&next))
                    .await
                {
                    return Err(AttendanceError::StoreFailure(format!(
                        "attendance for {} was not saved",
                        next.id
                    )));
                }
                match transition.to {
                    Some(status) => tracing::info!(
                        entry_id = %next.id,
                        labour_name = %next.labour_name,
                        date = %transition.date,
                        %status,
                        "attendance marked"
                    ),
                    None => tracing::info!(
                        entry_id = %next.id,
                        labour_name = %next.labour_name,
                        date = %transition.date,
                        "attendance cleared"
                    ),
                }
                Ok(next)
            }
            Decision::Rejected { reason } => {
                tracing::info!(entry_id = %entry.id, %reason, "attendance change rejected");
                Err(AttendanceError::InvalidInput(reason.to_string()))
            }
        }
    }
}
