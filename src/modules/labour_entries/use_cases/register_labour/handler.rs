use crate::modules::labour_entries::adapters::outbound::entry_store::EntryStore;
use crate::modules::labour_entries::core::entry::LabourEntry;
use crate::modules::labour_entries::core::errors::AttendanceError;
use crate::modules::labour_entries::use_cases::register_labour::command::RegisterLabour;
use crate::modules::labour_entries::use_cases::register_labour::decide::decide_register;
use crate::shared::core::primitives::provisional_entry_id;
use crate::shared::infrastructure::document_store::DocumentStore;
use crate::shared::infrastructure::identity::IdentityProvider;
use std::sync::Arc;

pub struct RegisterLabourHandler<TStore, TIdentity>
where
    TStore: DocumentStore + 'static,
    TIdentity: IdentityProvider + 'static,
{
    entries: Arc<EntryStore<TStore, TIdentity>>,
}

impl<TStore, TIdentity> RegisterLabourHandler<TStore, TIdentity>
where
    TStore: DocumentStore + 'static,
    TIdentity: IdentityProvider + 'static,
{
    pub fn new(entries: Arc<EntryStore<TStore, TIdentity>>) -> Self {
        Self { entries }
    }

    pub async fn handle(&self, command: RegisterLabour) -> Result<LabourEntry, AttendanceError> {
        if self.entries.identity().is_none() {
            tracing::warn!("no identity signed in, labour not registered");
            return Err(AttendanceError::NoIdentity);
        }

        let new_entry = decide_register(command).map_err(|reason| {
            tracing::info!(%reason, "labour registration rejected");
            AttendanceError::InvalidInput(reason.to_string())
        })?;

        let provisional_id = provisional_entry_id();
        let labour_name = new_entry.labour_name.clone();
        let entry = self.entries.create(new_entry).await.ok_or_else(|| {
            AttendanceError::StoreFailure(format!(
                "labour entry {provisional_id} for {labour_name} was not saved"
            ))
        })?;

        tracing::info!(
            %provisional_id,
            entry_id = %entry.id,
            labour_name = %entry.labour_name,
            "labour entry registered"
        );
        Ok(entry)
    }
}
