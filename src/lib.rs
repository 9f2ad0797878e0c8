// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Activity Responses: persistence API for interactive teaching activities
//!
//! Every activity posts small JSON submissions and reads them back for
//! review pages. This crate serves that contract for all activities from a
//! single schema-driven record store.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use services::RecordService;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub records: RecordService,
}
