use crate::modules::labour_entries::adapters::outbound::entry_store::EntryStore;
use crate::modules::labour_entries::core::categories::CategoryCatalog;
use crate::modules::labour_entries::use_cases::mark_attendance::handler::MarkAttendanceHandler;
use crate::modules::labour_entries::use_cases::register_labour::handler::RegisterLabourHandler;
use crate::modules::labour_entries::use_cases::remove_labour::handler::RemoveLabourHandler;
use crate::shared::infrastructure::document_store::in_memory::InMemoryDocumentStore;
use crate::shared::infrastructure::identity::in_memory::InMemoryIdentityProvider;
use std::sync::Arc;
use tokio::sync::RwLock;

pub type ShellEntryStore = EntryStore<InMemoryDocumentStore, InMemoryIdentityProvider>;
pub type ShellRegisterHandler =
    RegisterLabourHandler<InMemoryDocumentStore, InMemoryIdentityProvider>;
pub type ShellMarkHandler = MarkAttendanceHandler<InMemoryDocumentStore, InMemoryIdentityProvider>;
pub type ShellRemoveHandler = RemoveLabourHandler<InMemoryDocumentStore, InMemoryIdentityProvider>;

#[derive(Clone)]
pub struct AppState {
    pub identity: Arc<InMemoryIdentityProvider>,
    pub entries: Arc<ShellEntryStore>,
    pub register_handler: Arc<ShellRegisterHandler>,
    pub mark_handler: Arc<ShellMarkHandler>,
    pub remove_handler: Arc<ShellRemoveHandler>,
    pub categories: Arc<RwLock<CategoryCatalog>>,
}

impl AppState {
    pub fn new(
        documents: Arc<InMemoryDocumentStore>,
        identity: Arc<InMemoryIdentityProvider>,
        categories: CategoryCatalog,
    ) -> Self {
        let entries = Arc::new(EntryStore::new(documents, identity.clone()));
        Self {
            identity,
            register_handler: Arc::new(RegisterLabourHandler::new(entries.clone())),
            mark_handler: Arc::new(MarkAttendanceHandler::new(entries.clone())),
            remove_handler: Arc::new(RemoveLabourHandler::new(entries.clone())),
            entries,
            categories: Arc::new(RwLock::new(categories)),
        }
    }
}
