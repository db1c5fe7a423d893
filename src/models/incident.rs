use serde::{Deserialize, Serialize};

/// A user-reported incident. The status is a free-text label; no lifecycle is enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Incident {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub status: String,
}

/// Incident fields supplied by the reporter, before an id is assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIncident {
    pub title: String,
    pub description: String,
    pub status: String,
}
