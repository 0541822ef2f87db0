use crate::modules::labour_entries::core::categories::CategoryCatalog;
use crate::shared::infrastructure::document_store::in_memory::InMemoryDocumentStore;
use crate::shared::infrastructure::identity::in_memory::InMemoryIdentityProvider;
use crate::shell::state::AppState;
use crate::tests::fixtures::entries::labour_entry::USER_ID;
use std::sync::Arc;

pub fn make_app_state(signed_in: bool) -> AppState {
    let identity = if signed_in {
        InMemoryIdentityProvider::signed_in(USER_ID)
    } else {
        InMemoryIdentityProvider::new()
    };
    AppState::new(
        Arc::new(InMemoryDocumentStore::new()),
        Arc::new(identity),
        CategoryCatalog::seeded(["Mason", "Helper"]),
    )
}

pub fn make_offline_app_state() -> AppState {
    let mut documents = InMemoryDocumentStore::new();
    documents.toggle_offline();
    AppState::new(
        Arc::new(documents),
        Arc::new(InMemoryIdentityProvider::signed_in(USER_ID)),
        CategoryCatalog::new(),
    )
}
