// Entry store: labour entries owned by the current identity.
//
// Responsibilities
// - Wrap create, list, fetch, update and delete against the document store,
//   scoped to the collection "users/{uid}/labourEntries".
// - Never let a failure escape. Missing identity, missing documents and store
//   errors are logged and surface as an empty list, `None` or `false`.
//
// Boundaries
// - No business logic and no retries.

use crate::modules::labour_entries::adapters::outbound::document_mapper::{
    from_document, to_document,
};
use crate::modules::labour_entries::core::entry::{
    EntryPatch, EntryRef, LabourEntry, NewLabourEntry,
};
use crate::shared::infrastructure::document_store::DocumentStore;
use crate::shared::infrastructure::identity::{Identity, IdentityProvider};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

pub fn labour_entries_collection(identity: &Identity) -> String {
    format!("users/{}/labourEntries", identity.uid)
}

pub struct EntryStore<TStore, TIdentity>
where
    TStore: DocumentStore + 'static,
    TIdentity: IdentityProvider + 'static,
{
    documents: Arc<TStore>,
    identity: Arc<TIdentity>,
}

impl<TStore, TIdentity> EntryStore<TStore, TIdentity>
where
    TStore: DocumentStore + 'static,
    TIdentity: IdentityProvider + 'static,
{
    pub fn new(documents: Arc<TStore>, identity: Arc<TIdentity>) -> Self {
        Self {
            documents,
            identity,
        }
    }

    pub fn identity(&self) -> Option<Identity> {
        self.identity.current()
    }

    /// Lists every entry of the identity, waiting for the identity provider to
    /// settle first. Signed out yields an empty list without touching the store.
    pub async fn list(&self) -> Vec<LabourEntry> {
        let mut receiver = self.identity.subscribe();
        let settled = receiver
            .wait_for(|state| !state.is_resolving())
            .await
            .map(|state| state.identity().cloned());

        match settled {
            Ok(Some(identity)) => self.list_for(&identity).await,
            Ok(None) => {
                warn!("no identity signed in, returning no labour entries");
                Vec::new()
            }
            Err(e) => {
                warn!(error = %e, "identity provider closed, returning no labour entries");
                Vec::new()
            }
        }
    }

    async fn list_for(&self, identity: &Identity) -> Vec<LabourEntry> {
        let collection = labour_entries_collection(identity);
        match self.documents.list(&collection).await {
            Ok(documents) => {
                let entries: Vec<LabourEntry> = documents
                    .into_iter()
                    .filter_map(|document| match from_document(&document.id, document.fields) {
                        Ok(entry) => Some(entry),
                        Err(e) => {
                            warn!(
                                entry_id = %document.id,
                                error = %e,
                                "skipping unreadable labour entry"
                            );
                            None
                        }
                    })
                    .collect();
                debug!(uid = %identity.uid, count = entries.len(), "labour entries fetched");
                entries
            }
            Err(e) => {
                error!(uid = %identity.uid, error = %e, "error fetching labour entries");
                Vec::new()
            }
        }
    }

    /// Persists a new entry and returns it with the store-assigned id.
    pub async fn create(&self, entry: NewLabourEntry) -> Option<LabourEntry> {
        let Some(identity) = self.identity() else {
            warn!("no identity signed in, skipping labour entry save");
            return None;
        };
        let document = match to_document(&entry) {
            Ok(document) => document,
            Err(e) => {
                error!(error = %e, "labour entry could not be encoded");
                return None;
            }
        };
        match self
            .documents
            .create(&labour_entries_collection(&identity), document)
            .await
        {
            Ok(id) => {
                info!(uid = %identity.uid, entry_id = %id, "labour entry saved");
                Some(LabourEntry::from_new(id, entry))
            }
            Err(e) => {
                error!(uid = %identity.uid, error = %e, "error saving labour entry");
                None
            }
        }
    }

    pub async fn fetch(&self, id: &str) -> Option<LabourEntry> {
        let Some(identity) = self.identity() else {
            warn!(entry_id = %id, "no identity signed in, cannot fetch labour entry");
            return None;
        };
        match self
            .documents
            .get(&labour_entries_collection(&identity), id)
            .await
        {
            Ok(Some(fields)) => match from_document(id, fields) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!(entry_id = %id, error = %e, "labour entry is unreadable");
                    None
                }
            },
            Ok(None) => {
                warn!(entry_id = %id, "labour entry not found");
                None
            }
            Err(e) => {
                error!(entry_id = %id, error = %e, "error fetching labour entry");
                None
            }
        }
    }

    /// First entry whose displayed name matches exactly.
    pub async fn find_by_name(&self, name: &str) -> Option<LabourEntry> {
        let Some(identity) = self.identity() else {
            warn!(labour_name = %name, "no identity signed in, cannot look up labour entry");
            return None;
        };
        let found = self
            .list_for(&identity)
            .await
            .into_iter()
            .find(|entry| entry.labour_name == name);
        if found.is_none() {
            warn!(labour_name = %name, "labour entry not found");
        }
        found
    }

    pub async fn resolve(&self, entry: &EntryRef) -> Option<LabourEntry> {
        match entry {
            EntryRef::Id(id) => self.fetch(id).await,
            EntryRef::Name(name) => self.find_by_name(name).await,
        }
    }

    /// Replaces the patched fields. Returns whether the store accepted it.
    pub async fn update(&self, id: &str, patch: EntryPatch) -> bool {
        let Some(identity) = self.identity() else {
            warn!(entry_id = %id, "no identity signed in, skipping labour entry update");
            return false;
        };
        let fields = match to_document(&patch) {
            Ok(fields) => fields,
            Err(e) => {
                error!(entry_id = %id, error = %e, "labour entry patch could not be encoded");
                return false;
            }
        };
        match self
            .documents
            .update(&labour_entries_collection(&identity), id, fields)
            .await
        {
            Ok(()) => {
                debug!(entry_id = %id, "labour entry updated");
                true
            }
            Err(e) => {
                error!(entry_id = %id, error = %e, "error updating labour entry");
                false
            }
        }
    }

    /// Removes the entry and its attendance history. The caller confirms the
    /// deletion with the user beforehand.
    pub async fn delete(&self, id: &str) -> bool {
        let Some(identity) = self.identity() else {
            warn!(entry_id = %id, "no identity signed in, skipping labour entry delete");
            return false;
        };
        match self
            .documents
            .delete(&labour_entries_collection(&identity), id)
            .await
        {
            Ok(()) => {
                info!(entry_id = %id, "labour entry deleted");
                true
            }
            Err(e) => {
                error!(entry_id = %id, error = %e, "error deleting labour entry");
                false
            }
        }
    }
}
