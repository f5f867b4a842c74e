//! JSON endpoint handlers

use crate::api::models::{DataEnvelope, HealthResponse};
use crate::data::{SalesRecord, UserRecord};
use crate::error::AppError;
use crate::AppState;
use axum::extract::State;
use axum::Json;
use chrono::{SecondsFormat, Utc};
use std::sync::Arc;

/// `GET /api/sales`: the full sales dataset.
pub async fn list_sales(
    State(state): State<Arc<AppState>>,
) -> Result<Json<DataEnvelope<SalesRecord>>, AppError> {
    Ok(Json(DataEnvelope::new(state.dataset.sales.clone())))
}

/// `GET /api/users`: the full user dataset.
pub async fn list_users(
    State(state): State<Arc<AppState>>,
) -> Result<Json<DataEnvelope<UserRecord>>, AppError> {
    Ok(Json(DataEnvelope::new(state.dataset.users.clone())))
}

/// `GET /health`: liveness probe with current time and process uptime.
pub async fn health_check(
    State(state): State<Arc<AppState>>,
) -> Result<Json<HealthResponse>, AppError> {
    Ok(Json(HealthResponse {
        status: "OK".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        uptime: state.started_at.elapsed().as_secs_f64(),
    }))
}
