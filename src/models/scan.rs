use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Issue descriptions grouped by assessment category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanIssues {
    pub accessibility: Vec<String>,
    pub ux_ui: Vec<String>,
    pub security: Vec<String>,
}

/// The three category scores of an assessment, each in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scores {
    pub accessibility: u8,
    pub ux_ui: u8,
    pub security: u8,
}

/// What a scoring strategy produces for a URL, before it is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assessment {
    pub scores: Scores,
    pub issues: ScanIssues,
}

/// A persisted website scan record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scan {
    pub id: i64,
    pub url: String,
    pub accessibility_score: u8,
    pub ux_ui_score: u8,
    pub security_score: u8,
    pub issues: ScanIssues,
    pub timestamp: DateTime<Utc>,
}
