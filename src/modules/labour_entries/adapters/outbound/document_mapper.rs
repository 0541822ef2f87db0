// Mapping between labour entries and store documents.
//
// The entry id is the document key and is never written into the document
// body; reading a document puts the key back as `id`.

use crate::modules::labour_entries::core::entry::LabourEntry;
use crate::shared::infrastructure::document_store::Document;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum MappingError {
    #[error("document is not an object")]
    NotAnObject,

    #[error(transparent)]
    Serde(#[from] serde_json::Error),
}

pub fn to_document<T: Serialize>(value: &T) -> Result<Document, MappingError> {
    match serde_json::to_value(value)? {
        Value::Object(mut fields) => {
            fields.remove("id");
            Ok(fields)
        }
        _ => Err(MappingError::NotAnObject),
    }
}

pub fn from_document(id: &str, mut fields: Document) -> Result<LabourEntry, MappingError> {
    fields.insert("id".to_string(), Value::String(id.to_string()));
    Ok(serde_json::from_value(Value::Object(fields))?)
}
