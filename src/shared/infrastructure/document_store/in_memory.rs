use crate::shared::infrastructure::document_store::{
    Document, DocumentStore, DocumentStoreError, StoredDocument,
};
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;
use uuid::Uuid;

/// In memory document store for tests and local development.
///
/// Ids are UUID v7, so listing a collection yields documents in creation order.
#[derive(Default)]
pub struct InMemoryDocumentStore {
    collections: RwLock<HashMap<String, BTreeMap<String, Document>>>,
    calls: AtomicUsize,
    is_offline: bool,
    delay_ms: u64,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub fn set_delay_ms(&mut self, delay_ms: u64) {
        self.delay_ms = delay_ms;
    }

    /// Number of operations issued against the store, including failed ones.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn begin(&self) -> Result<(), DocumentStoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }
        if self.is_offline {
            return Err(DocumentStoreError::Backend("Document store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn create(
        &self,
        collection: &str,
        document: Document,
    ) -> Result<String, DocumentStoreError> {
        self.begin().await?;
        let id = Uuid::now_v7().to_string();
        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .insert(id.clone(), document);
        Ok(id)
    }

    async fn list(&self, collection: &str) -> Result<Vec<StoredDocument>, DocumentStoreError> {
        self.begin().await?;
        let guard = self.collections.read().await;
        Ok(guard
            .get(collection)
            .map(|documents| {
                documents
                    .iter()
                    .map(|(id, fields)| StoredDocument {
                        id: id.clone(),
                        fields: fields.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn get(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<Document>, DocumentStoreError> {
        self.begin().await?;
        let guard = self.collections.read().await;
        Ok(guard
            .get(collection)
            .and_then(|documents| documents.get(id))
            .cloned())
    }

    async fn update(
        &self,
        collection: &str,
        id: &str,
        fields: Document,
    ) -> Result<(), DocumentStoreError> {
        self.begin().await?;
        let mut guard = self.collections.write().await;
        let document = guard
            .get_mut(collection)
            .and_then(|documents| documents.get_mut(id))
            .ok_or_else(|| DocumentStoreError::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            })?;
        for (field, value) in fields {
            document.insert(field, value);
        }
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), DocumentStoreError> {
        self.begin().await?;
        if let Some(documents) = self.collections.write().await.get_mut(collection) {
            documents.remove(id);
        }
        Ok(())
    }
}

#[cfg(test)]
mod in_memory_document_store_tests {
    use super::*;
    use rstest::{fixture, rstest};
    use serde_json::json;

    const COLLECTION: &str = "users/user-fixed-0001/labourEntries";

    #[fixture]
    fn document() -> Document {
        json!({ "labourName": "Ravi", "ratePerDay": 650.0, "attendance": [] })
            .as_object()
            .cloned()
            .unwrap()
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_create_and_get_a_document(document: Document) {
        let store = InMemoryDocumentStore::new();
        let id = store.create(COLLECTION, document.clone()).await.unwrap();
        let stored = store.get(COLLECTION, &id).await.unwrap();
        assert_eq!(stored, Some(document));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_list_documents_in_creation_order(document: Document) {
        let store = InMemoryDocumentStore::new();
        let first = store.create(COLLECTION, document.clone()).await.unwrap();
        let second = store.create(COLLECTION, document).await.unwrap();
        let listed = store.list(COLLECTION).await.unwrap();
        let ids: Vec<_> = listed.into_iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![first, second]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_keep_collections_apart(document: Document) {
        let store = InMemoryDocumentStore::new();
        store.create(COLLECTION, document).await.unwrap();
        let other = store.list("users/someone-else/labourEntries").await.unwrap();
        assert!(other.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_replace_only_the_named_fields(document: Document) {
        let store = InMemoryDocumentStore::new();
        let id = store.create(COLLECTION, document).await.unwrap();
        let patch = json!({ "attendance": [{ "date": "2024-03-01", "status": "P" }] })
            .as_object()
            .cloned()
            .unwrap();
        store.update(COLLECTION, &id, patch).await.unwrap();

        let stored = store.get(COLLECTION, &id).await.unwrap().unwrap();
        assert_eq!(stored["labourName"], json!("Ravi"));
        assert_eq!(
            stored["attendance"],
            json!([{ "date": "2024-03-01", "status": "P" }])
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_to_update_a_missing_document() {
        let store = InMemoryDocumentStore::new();
        let result = store.update(COLLECTION, "missing", Document::new()).await;
        assert!(matches!(result, Err(DocumentStoreError::NotFound { .. })));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_delete_a_document(document: Document) {
        let store = InMemoryDocumentStore::new();
        let id = store.create(COLLECTION, document).await.unwrap();
        store.delete(COLLECTION, &id).await.unwrap();
        assert_eq!(store.get(COLLECTION, &id).await.unwrap(), None);
        assert!(store.delete(COLLECTION, &id).await.is_ok());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_apply_concurrent_updates_to_different_fields(document: Document) {
        let mut store = InMemoryDocumentStore::new();
        store.set_delay_ms(10);
        let id = store.create(COLLECTION, document).await.unwrap();
        let status = json!({ "status": "P" }).as_object().cloned().unwrap();
        let rate = json!({ "ratePerDay": 700.0 }).as_object().cloned().unwrap();

        let (a, b) = tokio::join!(
            store.update(COLLECTION, &id, status),
            store.update(COLLECTION, &id, rate)
        );
        assert!(a.is_ok() && b.is_ok());

        let stored = store.get(COLLECTION, &id).await.unwrap().unwrap();
        assert_eq!(stored["status"], json!("P"));
        assert_eq!(stored["ratePerDay"], json!(700.0));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_every_call_when_offline(document: Document) {
        let mut store = InMemoryDocumentStore::new();
        store.toggle_offline();
        let result = store.create(COLLECTION, document).await;
        assert_eq!(
            result,
            Err(DocumentStoreError::Backend("Document store offline".into()))
        );
        assert!(store.list(COLLECTION).await.is_err());
        assert_eq!(store.call_count(), 2);
    }
}
