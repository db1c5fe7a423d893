use super::types::{NaviConfig, ServiceKind, DEFAULT_DATABASE_PATH};

/// Values given on the command line; these win over everything else.
#[derive(Debug, Clone, Default)]
pub struct ServeOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub db: Option<String>,
    pub seed: Option<u64>,
}

/// Effective settings for one service process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServeSettings {
    pub host: String,
    pub port: u16,
    pub db_path: String,
    pub seed: Option<u64>,
}

impl ServeSettings {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Precedence: command line, then the database environment variable, then
/// the config file, then defaults.
pub fn resolve_settings(
    config: &NaviConfig,
    kind: ServiceKind,
    overrides: &ServeOverrides,
    env_db: Option<String>,
) -> ServeSettings {
    let (host, port) = config.bind_address(kind);

    let db_path = overrides
        .db
        .clone()
        .or(env_db.filter(|v| !v.is_empty()))
        .or_else(|| config.database_path().map(str::to_string))
        .unwrap_or_else(|| DEFAULT_DATABASE_PATH.to_string());

    ServeSettings {
        host: overrides.host.clone().unwrap_or(host),
        port: overrides.port.unwrap_or(port),
        db_path,
        seed: overrides.seed.or_else(|| config.scoring_seed()),
    }
}
