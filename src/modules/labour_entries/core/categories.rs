// User-extensible set of labour categories offered when registering labour.
//
// A category is stored under its trimmed, lower-cased value and keeps the label
// it was first added with.

use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CategoryError {
    #[error("category name must not be empty")]
    Empty,
}

#[derive(Debug, Clone, Default)]
pub struct CategoryCatalog {
    categories: BTreeMap<String, String>,
}

impl CategoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut catalog = Self::new();
        for label in labels {
            // blank seeds are skipped
            let _ = catalog.add(label.as_ref());
        }
        catalog
    }

    /// Adds a category; re-adding an existing one returns it unchanged.
    pub fn add(&mut self, name: &str) -> Result<Category, CategoryError> {
        let label = name.trim();
        if label.is_empty() {
            return Err(CategoryError::Empty);
        }
        let value = label.to_lowercase();
        let label = self
            .categories
            .entry(value.clone())
            .or_insert_with(|| label.to_string())
            .clone();
        Ok(Category { value, label })
    }

    pub fn contains(&self, value: &str) -> bool {
        self.categories.contains_key(&value.trim().to_lowercase())
    }

    pub fn list(&self) -> Vec<Category> {
        self.categories
            .iter()
            .map(|(value, label)| Category {
                value: value.clone(),
                label: label.clone(),
            })
            .collect()
    }
}
