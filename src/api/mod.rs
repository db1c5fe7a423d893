pub mod errors;
pub mod extract;
pub mod models;
pub mod routes;

use std::sync::Arc;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use crate::db::Database;
use crate::errors::NaviError;
use crate::scoring::{RandomScoring, ScoringStrategy};

/// Per-process state handed to every handler. The storage handle is built once
/// at startup and injected here.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub scoring: Arc<dyn ScoringStrategy>,
}

impl AppState {
    pub fn new(db: Database, scoring: Arc<dyn ScoringStrategy>) -> Self {
        Self { db, scoring }
    }
}

pub fn create_app_state(db_path: &str, seed: Option<u64>) -> Result<AppState, NaviError> {
    let db = Database::new(db_path)?;
    let scoring: Arc<dyn ScoringStrategy> = match seed {
        Some(seed) => Arc::new(RandomScoring::seeded(seed)),
        None => Arc::new(RandomScoring::new()),
    };
    Ok(AppState::new(db, scoring))
}

pub fn build_incident_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::incidents::root))
        .route("/report-incident", post(routes::incidents::report_incident))
        .route("/incidents", get(routes::incidents::list_incidents))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub fn build_scan_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::scans::root))
        .route("/scan", post(routes::scans::submit_scan))
        .route("/scans", get(routes::scans::list_scans))
        .route("/health", get(routes::scans::health_check))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
