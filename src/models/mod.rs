// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod activity;
pub mod record;
pub mod schema;

pub use activity::{ActivityDef, CATALOG};
pub use record::Record;
pub use schema::{FieldKind, FieldSpec, Fields, Literal};
