use serde::{Deserialize, Serialize};
use url::Url;
use crate::errors::NaviError;
use crate::models::{Incident, NewIncident};

#[derive(Deserialize)]
pub struct ReportIncidentRequest {
    pub title: String,
    pub description: String,
    pub status: String,
}

impl From<ReportIncidentRequest> for NewIncident {
    fn from(req: ReportIncidentRequest) -> Self {
        NewIncident {
            title: req.title,
            description: req.description,
            status: req.status,
        }
    }
}

#[derive(Serialize)]
pub struct ReportIncidentResponse {
    pub message: String,
    pub incident: Incident,
}

#[derive(Deserialize)]
pub struct SubmitScanRequest {
    pub url: String,
}

impl SubmitScanRequest {
    /// Accept only absolute http(s) URLs that name a host.
    pub fn validated_url(&self) -> Result<Url, NaviError> {
        let raw = self.url.trim();
        let url = Url::parse(raw)
            .map_err(|e| NaviError::Validation(format!("url: invalid URL '{}': {}", self.url, e)))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(NaviError::Validation(format!(
                "url: unsupported scheme '{}', expected http or https",
                url.scheme()
            )));
        }
        if url.host_str().map_or(true, str::is_empty) {
            return Err(NaviError::Validation(format!("url: '{}' has no host", self.url)));
        }
        Ok(url)
    }
}
