use std::path::Path;
use crate::errors::NaviError;
use super::types::{NaviConfig, ServiceKind};
use super::schema::CONFIG_SCHEMA;
use tracing::{debug, warn};

const MAX_CONFIG_BYTES: u64 = 1_048_576;

pub async fn parse_config(path: &Path) -> Result<NaviConfig, NaviError> {
    if !path.exists() {
        return Err(NaviError::Config(format!("Config file not found: {}", path.display())));
    }

    let metadata = tokio::fs::metadata(path).await?;
    if metadata.len() > MAX_CONFIG_BYTES {
        return Err(NaviError::Config("Config file exceeds 1MB limit".into()));
    }

    let content = tokio::fs::read_to_string(path).await?;
    let yaml: serde_yaml::Value = serde_yaml::from_str(&content)?;

    // An empty file parses as null; treat it as an empty mapping.
    let yaml = if yaml.is_null() {
        serde_yaml::Value::Mapping(Default::default())
    } else {
        yaml
    };

    validate_schema(&yaml)?;

    let config: NaviConfig = serde_yaml::from_value(yaml)?;

    validate_conflicts(&config)?;

    debug!(path = %path.display(), "Loaded configuration");
    Ok(config)
}

/// Parse the file when one is given, otherwise start from defaults.
pub async fn load_config(path: Option<&Path>) -> Result<NaviConfig, NaviError> {
    match path {
        Some(p) => parse_config(p).await,
        None => Ok(NaviConfig::default()),
    }
}

/// Check the document against the JSON schema. Violations are logged, not fatal;
/// the typed parse and the conflict checks decide whether the file is usable.
fn validate_schema(yaml: &serde_yaml::Value) -> Result<(), NaviError> {
    let json_value: serde_json::Value = serde_json::to_value(yaml)
        .map_err(|e| NaviError::Config(format!("Config conversion error: {}", e)))?;

    let compiled = jsonschema::JSONSchema::compile(&CONFIG_SCHEMA)
        .map_err(|e| NaviError::Config(format!("Schema compilation error: {}", e)))?;

    let result = compiled.validate(&json_value);
    if let Err(errors) = result {
        for e in errors {
            warn!(validation_error = %e, path = %e.instance_path, "Config schema warning");
        }
    }

    Ok(())
}

/// Detect semantic conflicts in the parsed configuration.
fn validate_conflicts(config: &NaviConfig) -> Result<(), NaviError> {
    if let Some(path) = config.database_path() {
        if path.trim().is_empty() {
            return Err(NaviError::Config("database.path must not be empty".into()));
        }
    }

    for kind in [ServiceKind::Incidents, ServiceKind::Scans] {
        if let Some(service) = config.service(kind) {
            if service.port == Some(0) {
                return Err(NaviError::Config(format!("{}.port must be between 1 and 65535", kind)));
            }
            if service.host.as_deref().is_some_and(|h| h.trim().is_empty()) {
                return Err(NaviError::Config(format!("{}.host must not be empty", kind)));
            }
        }
    }

    let incidents = config.bind_address(ServiceKind::Incidents);
    let scans = config.bind_address(ServiceKind::Scans);
    if incidents == scans {
        return Err(NaviError::Config(format!(
            "incidents and scans cannot share the bind address {}:{}",
            incidents.0, incidents.1
        )));
    }

    Ok(())
}
