use thiserror::Error;

#[derive(Debug, Error)]
pub enum NaviError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid request: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl NaviError {
    /// Process exit code used by the CLI when a command fails with this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            NaviError::Config(_) | NaviError::Yaml(_) => 2,
            _ => 1,
        }
    }
}
