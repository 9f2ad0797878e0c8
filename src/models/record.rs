// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Stored submission record.

use crate::models::schema::Fields;
use serde::{Deserialize, Serialize};

/// One stored submission, as written to and read from the document store.
///
/// Schema fields are flattened next to the two server-assigned fields, so
/// the JSON shape is `{ "_id": ..., <fields>, "createdAt": ... }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Server-assigned document ID (24 hex chars)
    #[serde(rename = "_id")]
    pub id: String,
    /// Coerced schema fields
    #[serde(flatten)]
    pub fields: Fields,
    /// Insertion time (RFC3339, UTC, milliseconds)
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl Record {
    /// Whether the record's text field `name` equals `value`.
    pub fn field_equals(&self, name: &str, value: &str) -> bool {
        self.fields
            .get(name)
            .and_then(|v| v.as_str())
            .is_some_and(|v| v == value)
    }
}
