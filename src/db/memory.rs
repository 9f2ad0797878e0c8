// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-process document store for local development and tests.

use crate::error::AppError;
use crate::models::Record;
use dashmap::DashMap;
use std::sync::Arc;

/// Collections held in memory, each in insertion order.
#[derive(Clone, Default)]
pub struct MemoryDb {
    collections: Arc<DashMap<String, Vec<Record>>>,
}

impl MemoryDb {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_record(&self, collection: &str, record: &Record) -> Result<(), AppError> {
        let mut docs = self.collections.entry(collection.to_string()).or_default();
        if docs.iter().any(|doc| doc.id == record.id) {
            return Err(AppError::Database(format!(
                "Document {} already exists in {}",
                record.id, collection
            )));
        }
        docs.push(record.clone());
        Ok(())
    }

    pub fn find_records(
        &self,
        collection: &str,
        filters: &[(String, String)],
    ) -> Result<Vec<Record>, AppError> {
        let Some(docs) = self.collections.get(collection) else {
            return Ok(Vec::new());
        };

        Ok(docs
            .iter()
            .filter(|doc| {
                filters
                    .iter()
                    .all(|(field, value)| doc.field_equals(field, value))
            })
            .cloned()
            .collect())
    }

    /// Number of documents in a collection.
    pub fn count(&self, collection: &str) -> usize {
        self.collections
            .get(collection)
            .map(|docs| docs.len())
            .unwrap_or(0)
    }
}
