//! HTTP request handlers.

use super::json::IndentedJson;
use super::types::HealthResponse;
use super::AppState;
use crate::admission;
use crate::error::Rejection;
use crate::store::Record;
use axum::{extract::State, http::StatusCode, Json};
use tracing::info;

/// Health check endpoint.
pub async fn health(State(state): State<AppState>) -> IndentedJson<HealthResponse> {
    let store = state.store.read().await;

    IndentedJson(HealthResponse {
        status: "ok".to_string(),
        record_count: store.count(),
    })
}

/// List all records, seed records first.
pub async fn list_records(State(state): State<AppState>) -> IndentedJson<Vec<Record>> {
    let store = state.store.read().await;
    IndentedJson(store.list().to_vec())
}

/// Validate a candidate record and admit it into the store.
pub async fn add_record(
    State(state): State<AppState>,
    Json(candidate): Json<Record>,
) -> Result<(StatusCode, IndentedJson<Record>), Rejection> {
    info!(phone = %candidate.phone, mail = %candidate.mail, "Admission request received");

    // Lookup and append happen under one write guard so concurrent
    // candidates cannot both pass the uniqueness checks.
    let mut store = state.store.write().await;
    let record = admission::admit(candidate, &mut store)?;

    Ok((StatusCode::CREATED, IndentedJson(record)))
}
