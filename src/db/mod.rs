//! Database layer.
//!
//! [`DocumentStore`] is the one handle the rest of the crate sees. It is
//! built once at start-up and cloned into request handlers.

pub mod firestore;
pub mod memory;

pub use firestore::FirestoreDb;
pub use memory::MemoryDb;

use crate::error::AppError;
use crate::models::Record;

/// Shared document store, one collection per activity.
#[derive(Clone)]
pub enum DocumentStore {
    Firestore(FirestoreDb),
    Memory(MemoryDb),
}

impl DocumentStore {
    /// Append one record to a collection.
    pub async fn insert(&self, collection: &str, record: &Record) -> Result<(), AppError> {
        match self {
            DocumentStore::Firestore(db) => db.insert_record(collection, record).await,
            DocumentStore::Memory(db) => db.insert_record(collection, record),
        }
    }

    /// Records matching every `(field, value)` equality filter.
    pub async fn find(
        &self,
        collection: &str,
        filters: &[(String, String)],
    ) -> Result<Vec<Record>, AppError> {
        match self {
            DocumentStore::Firestore(db) => db.find_records(collection, filters).await,
            DocumentStore::Memory(db) => db.find_records(collection, filters),
        }
    }

    pub fn backend_name(&self) -> &'static str {
        match self {
            DocumentStore::Firestore(_) => "firestore",
            DocumentStore::Memory(_) => "memory",
        }
    }
}

impl From<FirestoreDb> for DocumentStore {
    fn from(db: FirestoreDb) -> Self {
        DocumentStore::Firestore(db)
    }
}

impl From<MemoryDb> for DocumentStore {
    fn from(db: MemoryDb) -> Self {
        DocumentStore::Memory(db)
    }
}
