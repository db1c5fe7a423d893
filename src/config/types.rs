use serde::{Deserialize, Serialize};

pub const DEFAULT_DATABASE_PATH: &str = "./navi.db";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DATABASE_ENV_VAR: &str = "NAVI_DATABASE";

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct NaviConfig {
    pub database: Option<DatabaseConfig>,
    pub incidents: Option<ServiceConfig>,
    pub scans: Option<ServiceConfig>,
    pub scoring: Option<ScoringConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct DatabaseConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ServiceConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ScoringConfig {
    /// Seed for reproducible placeholder scores.
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceKind {
    Incidents,
    Scans,
}

impl ServiceKind {
    pub fn default_port(self) -> u16 {
        match self {
            ServiceKind::Incidents => 8000,
            ServiceKind::Scans => 8001,
        }
    }
}

impl std::fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceKind::Incidents => write!(f, "incidents"),
            ServiceKind::Scans => write!(f, "scans"),
        }
    }
}

impl NaviConfig {
    pub fn service(&self, kind: ServiceKind) -> Option<&ServiceConfig> {
        match kind {
            ServiceKind::Incidents => self.incidents.as_ref(),
            ServiceKind::Scans => self.scans.as_ref(),
        }
    }

    pub fn database_path(&self) -> Option<&str> {
        self.database.as_ref().and_then(|d| d.path.as_deref())
    }

    /// Configured bind address for a service, falling back to defaults.
    pub fn bind_address(&self, kind: ServiceKind) -> (String, u16) {
        let service = self.service(kind);
        let host = service
            .and_then(|s| s.host.clone())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = service
            .and_then(|s| s.port)
            .unwrap_or_else(|| kind.default_port());
        (host, port)
    }

    pub fn scoring_seed(&self) -> Option<u64> {
        self.scoring.as_ref().and_then(|s| s.seed)
    }
}
