use axum::{extract::State, Json};
use serde_json::{json, Value};
use tracing::{error, info};
use crate::api::AppState;
use crate::api::errors::ApiError;
use crate::api::extract::ApiJson;
use crate::api::models::{ReportIncidentRequest, ReportIncidentResponse};
use crate::models::{Incident, NewIncident};

pub async fn root() -> Json<Value> {
    Json(json!({"message": "Welcome to Navi MVP Backend!"}))
}

pub async fn report_incident(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<ReportIncidentRequest>,
) -> Result<Json<ReportIncidentResponse>, ApiError> {
    let new_incident = NewIncident::from(req);

    let incident = state.db.insert_incident(&new_incident).map_err(|e| {
        error!(error = %e, "Failed to report incident");
        ApiError::internal("Failed to report incident", e)
    })?;

    info!(id = incident.id, status = %incident.status, "Incident reported");
    Ok(Json(ReportIncidentResponse {
        message: "Incident reported successfully".to_string(),
        incident,
    }))
}

pub async fn list_incidents(
    State(state): State<AppState>,
) -> Result<Json<Vec<Incident>>, ApiError> {
    state.db.list_incidents()
        .map(Json)
        .map_err(|e| {
            error!(error = %e, "Failed to retrieve incidents");
            ApiError::internal("Failed to retrieve incidents", e)
        })
}
