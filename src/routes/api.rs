// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Submission and query routes, one pair per activity.

use crate::error::{AppError, Result};
use crate::models::{activity, ActivityDef, Record, CATALOG};
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Activity routes. `/api/activities` takes precedence over the
/// `{activity}` capture, so no activity may use that route.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/activities", get(list_activities))
        .route(
            "/api/{activity}",
            get(list_submissions).post(create_submission),
        )
}

fn lookup(route: &str) -> Result<&'static ActivityDef> {
    activity::find(route)
        .ok_or_else(|| AppError::NotFound(format!("Unknown activity: {}", route)))
}

// ─── Submissions ─────────────────────────────────────────────

/// Response for a stored submission.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SubmitResponse {
    pub message: String,
}

/// Store one submission for an activity.
async fn create_submission(
    State(state): State<Arc<AppState>>,
    Path(route): Path<String>,
    body: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<SubmitResponse>)> {
    let activity = lookup(&route)?;

    let Json(body) = body?;
    let Value::Object(payload) = body else {
        return Err(AppError::BadRequest(
            "Request body must be a JSON object".to_string(),
        ));
    };

    state.records.submit(activity, &payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(SubmitResponse {
            message: activity.success_message.to_string(),
        }),
    ))
}

/// Get an activity's submissions, filtered by any identifier query params.
async fn list_submissions(
    State(state): State<Arc<AppState>>,
    Path(route): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Vec<Record>>> {
    let activity = lookup(&route)?;
    let records = state.records.list(activity, &params).await?;
    Ok(Json(records))
}

// ─── Catalog ─────────────────────────────────────────────────

#[derive(Serialize, Clone, Debug)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct FieldSummary {
    pub name: String,
    pub kind: String,
}

#[derive(Serialize, Clone, Debug)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ActivitySummary {
    pub route: String,
    pub collection: String,
    pub identifiers: Vec<String>,
    /// Top-level fields only
    pub fields: Vec<FieldSummary>,
}

impl From<&ActivityDef> for ActivitySummary {
    fn from(activity: &ActivityDef) -> Self {
        Self {
            route: activity.route.to_string(),
            collection: activity.collection.to_string(),
            identifiers: activity.identifiers.iter().map(|s| s.to_string()).collect(),
            fields: activity
                .fields
                .iter()
                .map(|f| FieldSummary {
                    name: f.name.to_string(),
                    kind: f.kind.name().to_string(),
                })
                .collect(),
        }
    }
}

/// List every activity this server accepts submissions for.
async fn list_activities() -> Json<Vec<ActivitySummary>> {
    Json(CATALOG.iter().map(ActivitySummary::from).collect())
}
