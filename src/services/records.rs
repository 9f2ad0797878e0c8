// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Submission record service.
//!
//! Turns a raw JSON payload into a stored record:
//! 1. Coerce the payload against the activity's field schema
//! 2. Stamp a fresh `_id` and `createdAt`
//! 3. Insert exactly one document into the activity's collection
//!
//! Reads are a single equality query on the activity's identifier fields.

use crate::db::DocumentStore;
use crate::error::{AppError, Result};
use crate::models::schema::{coerce_fields, Fields};
use crate::models::{ActivityDef, Record};
use crate::time_utils::now_rfc3339;
use ring::rand::{SecureRandom, SystemRandom};

/// Random bytes in a record ID (hex-encoded to 24 chars).
const RECORD_ID_BYTES: usize = 12;

#[derive(Clone)]
pub struct RecordService {
    store: DocumentStore,
    rng: SystemRandom,
}

impl RecordService {
    pub fn new(store: DocumentStore) -> Self {
        Self {
            store,
            rng: SystemRandom::new(),
        }
    }

    pub fn store(&self) -> &DocumentStore {
        &self.store
    }

    /// Coerce and store one submission. Returns the stored record.
    ///
    /// Retries are not deduplicated: every call creates a new document.
    pub async fn submit(&self, activity: &ActivityDef, payload: &Fields) -> Result<Record> {
        let record = Record {
            id: self.new_record_id()?,
            fields: coerce_fields(activity.fields, payload),
            created_at: now_rfc3339(),
        };

        self.store.insert(activity.collection, &record).await?;

        tracing::info!(
            activity = activity.route,
            collection = activity.collection,
            record_id = %record.id,
            "Submission stored"
        );

        Ok(record)
    }

    /// Records of an activity, optionally narrowed by identifier fields.
    ///
    /// Pairs whose name is not an identifier of the activity are ignored.
    pub async fn list<'a, I>(&self, activity: &ActivityDef, params: I) -> Result<Vec<Record>>
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        let filters: Vec<(String, String)> = params
            .into_iter()
            .filter(|(name, _)| activity.is_identifier(name))
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();

        tracing::debug!(
            activity = activity.route,
            filters = ?filters,
            "Listing submissions"
        );

        self.store.find(activity.collection, &filters).await
    }

    fn new_record_id(&self) -> Result<String> {
        let mut bytes = [0u8; RECORD_ID_BYTES];
        self.rng
            .fill(&mut bytes)
            .map_err(|_| AppError::Internal(anyhow::anyhow!("Failed to generate record ID")))?;
        Ok(hex::encode(bytes))
    }
}
