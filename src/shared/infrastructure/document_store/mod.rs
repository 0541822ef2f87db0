// Document store port: a namespaced collection of JSON documents keyed by a
// store-generated id.
//
// Responsibilities
// - Create (returns the generated id), list, get, whole-field update, delete.
// - Collections are plain path strings such as "users/{uid}/labourEntries".
//
// Boundaries
// - No retries. Callers decide how a failure is surfaced.
// - Update replaces the named top-level fields; it never merges inside a field.

pub mod in_memory;

use async_trait::async_trait;
use thiserror::Error;

pub type Document = serde_json::Map<String, serde_json::Value>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DocumentStoreError {
    #[error("document {id} not found in {collection}")]
    NotFound { collection: String, id: String },

    #[error("backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    pub id: String,
    pub fields: Document,
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn create(&self, collection: &str, document: Document)
    -> Result<String, DocumentStoreError>;

    async fn list(&self, collection: &str) -> Result<Vec<StoredDocument>, DocumentStoreError>;

    async fn get(&self, collection: &str, id: &str)
    -> Result<Option<Document>, DocumentStoreError>;

    /// Fails with `NotFound` when the document does not exist.
    async fn update(
        &self,
        collection: &str,
        id: &str,
        fields: Document,
    ) -> Result<(), DocumentStoreError>;

    /// Deleting a missing document succeeds.
    async fn delete(&self, collection: &str, id: &str) -> Result<(), DocumentStoreError>;
}
