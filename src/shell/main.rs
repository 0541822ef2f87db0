use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use labour_attendance::modules::labour_entries::core::categories::CategoryCatalog;
use labour_attendance::shared::infrastructure::document_store::in_memory::InMemoryDocumentStore;
use labour_attendance::shared::infrastructure::identity::in_memory::InMemoryIdentityProvider;
use labour_attendance::shell::config::ShellConfig;
use labour_attendance::shell::http;
use labour_attendance::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = ShellConfig::from_env()?;

    // In-memory deps for now
    let identity = match &config.signed_in_uid {
        Some(uid) => InMemoryIdentityProvider::signed_in(uid.as_str()),
        None => InMemoryIdentityProvider::new(),
    };
    let state = AppState::new(
        Arc::new(InMemoryDocumentStore::new()),
        Arc::new(identity),
        CategoryCatalog::seeded(&config.default_categories),
    );

    tracing::info!(
        signed_in = config.signed_in_uid.is_some(),
        categories = config.default_categories.len(),
        "labour attendance shell ready"
    );
    tracing::info!("REST endpoint: http://{}/labour-entries", config.bind_addr);
    tracing::info!("GraphQL endpoint: http://{}/gql", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, http::app(state)).await?;
    Ok(())
}
