use axum::{extract::State, Json};
use chrono::{SecondsFormat, Utc};
use serde_json::{json, Value};
use tracing::{debug, error, info};
use crate::api::AppState;
use crate::api::errors::ApiError;
use crate::api::extract::ApiJson;
use crate::api::models::SubmitScanRequest;
use crate::models::Scan;

pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "Navi Website Scanner API",
        "description": "Scores websites on accessibility, UX/UI and security",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
    }))
}

pub async fn submit_scan(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<SubmitScanRequest>,
) -> Result<Json<Scan>, ApiError> {
    let url = req.validated_url().map_err(|e| {
        debug!(url = %req.url, error = %e, "Rejected scan request");
        ApiError::from(e)
    })?;

    let assessment = state.scoring.assess(&url);
    debug!(
        strategy = state.scoring.strategy_name(),
        accessibility = assessment.scores.accessibility,
        ux_ui = assessment.scores.ux_ui,
        security = assessment.scores.security,
        "Scored URL"
    );

    let scan = state.db.insert_scan(req.url.trim(), &assessment).map_err(|e| {
        error!(url = %req.url, error = %e, "Scan failed");
        ApiError::internal("Scan failed", e)
    })?;

    info!(id = scan.id, url = %scan.url, "Scan recorded");
    Ok(Json(scan))
}

pub async fn list_scans(
    State(state): State<AppState>,
) -> Result<Json<Vec<Scan>>, ApiError> {
    state.db.list_scans()
        .map(Json)
        .map_err(|e| {
            error!(error = %e, "Failed to retrieve scans");
            ApiError::internal("Failed to retrieve scans", e)
        })
}
