// Two-step removal of a labour entry.
//
// `request` checks the entry exists and hands out a ticket naming it. Only
// `confirm` with that ticket deletes anything; `cancel` drops it. A ticket is
// bound to the identity that requested it.

use crate::modules::labour_entries::adapters::outbound::entry_store::EntryStore;
use crate::modules::labour_entries::core::errors::AttendanceError;
use crate::shared::infrastructure::document_store::DocumentStore;
use crate::shared::infrastructure::identity::IdentityProvider;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovalTicket {
    uid: String,
    entry_id: String,
    labour_name: String,
}

impl RemovalTicket {
    pub fn entry_id(&self) -> &str {
        &self.entry_id
    }

    pub fn labour_name(&self) -> &str {
        &self.labour_name
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemovalOutcome {
    pub entry_id: String,
    /// Entries the identity still owns after the removal.
    pub remaining: usize,
}

pub struct RemoveLabourHandler<TStore, TIdentity>
where
    TStore: DocumentStore + 'static,
    TIdentity: IdentityProvider + 'static,
{
    entries: Arc<EntryStore<TStore, TIdentity>>,
}

impl<TStore, TIdentity> RemoveLabourHandler<TStore, TIdentity>
where
    TStore: DocumentStore + 'static,
    TIdentity: IdentityProvider + 'static,
{
    pub fn new(entries: Arc<EntryStore<TStore, TIdentity>>) -> Self {
        Self { entries }
    }

    pub async fn request(&self, entry_id: &str) -> Result<RemovalTicket, AttendanceError> {
        let Some(identity) = self.entries.identity() else {
            return Err(AttendanceError::NoIdentity);
        };
        let entry = self
            .entries
            .fetch(entry_id)
            .await
            .ok_or_else(|| AttendanceError::NotFound(format!("id {entry_id}")))?;
        tracing::debug!(entry_id, "removal requested");
        Ok(RemovalTicket {
            uid: identity.uid,
            entry_id: entry.id,
            labour_name: entry.labour_name,
        })
    }

    pub async fn confirm(&self, ticket: RemovalTicket) -> Result<RemovalOutcome, AttendanceError> {
        match self.entries.identity() {
            Some(identity) if identity.uid == ticket.uid => {}
            Some(_) => {
                tracing::warn!(
                    entry_id = %ticket.entry_id,
                    "identity changed since removal was requested"
                );
                return Err(AttendanceError::NoIdentity);
            }
            None => return Err(AttendanceError::NoIdentity),
        }
        if !self.entries.delete(&ticket.entry_id).await {
            return Err(AttendanceError::StoreFailure(format!(
                "labour entry {} was not deleted",
                ticket.entry_id
            )));
        }
        let remaining = self.entries.list().await.len();
        tracing::info!(
            entry_id = %ticket.entry_id,
            labour_name = %ticket.labour_name,
            remaining,
            "labour entry removed"
        );
        Ok(RemovalOutcome {
            entry_id: ticket.entry_id,
            remaining,
        })
    }

    pub fn cancel(&self, ticket: RemovalTicket) {
        tracing::debug!(entry_id = %ticket.entry_id, "removal cancelled");
    }
}
