use std::path::Path;
use crate::api;
use crate::cli::commands::ServeArgs;
use crate::config::{self, ServiceKind, DATABASE_ENV_VAR};
use crate::errors::NaviError;
use tracing::info;

pub async fn handle_serve(kind: ServiceKind, args: ServeArgs) -> Result<(), NaviError> {
    let config = config::load_config(args.config.as_deref().map(Path::new)).await?;
    let settings = config::resolve_settings(
        &config,
        kind,
        &args.overrides(),
        std::env::var(DATABASE_ENV_VAR).ok(),
    );

    info!(
        service = %kind,
        version = env!("CARGO_PKG_VERSION"),
        git = option_env!("GIT_HASH").unwrap_or("dev"),
        built = option_env!("BUILD_TIMESTAMP").unwrap_or("unknown"),
        db = %settings.db_path,
        "Starting API server"
    );

    let state = api::create_app_state(&settings.db_path, settings.seed)?;
    let app = match kind {
        ServiceKind::Incidents => api::build_incident_router(state),
        ServiceKind::Scans => api::build_scan_router(state),
    };

    let addr = settings.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| NaviError::Internal(format!("Server error: {}", e)))?;

    Ok(())
}
