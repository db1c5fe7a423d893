use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use rusqlite::types::Type;
use crate::errors::NaviError;
use crate::models::{Assessment, Scan, ScanIssues};
use super::Database;

/// Fixed-width RFC 3339 text, so lexical order in SQLite matches time order.
fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn conversion_error<E>(column: usize, err: E) -> rusqlite::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    rusqlite::Error::FromSqlConversionFailure(column, Type::Text, Box::new(err))
}

impl Database {
    /// Persist a scan in its own transaction. Nothing is written unless the
    /// commit succeeds.
    pub fn insert_scan(&self, url: &str, assessment: &Assessment) -> Result<Scan, NaviError> {
        let issues_json = serde_json::to_string(&assessment.issues)?;
        let timestamp = Utc::now().trunc_subsecs(6);
        let scores = assessment.scores;

        let mut conn = self.session()?;
        let tx = conn.transaction()
            .map_err(|e| NaviError::Database(format!("Failed to begin transaction: {}", e)))?;

        tx.execute(
            "INSERT INTO scans (url, accessibility_score, ux_ui_score, security_score, issues, timestamp) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            rusqlite::params![
                url,
                scores.accessibility,
                scores.ux_ui,
                scores.security,
                issues_json,
                format_timestamp(&timestamp),
            ],
        ).map_err(|e| NaviError::Database(format!("Failed to insert scan: {}", e)))?;
        let id = tx.last_insert_rowid();

        tx.commit()
            .map_err(|e| NaviError::Database(format!("Failed to commit scan: {}", e)))?;

        Ok(Scan {
            id,
            url: url.to_string(),
            accessibility_score: scores.accessibility,
            ux_ui_score: scores.ux_ui,
            security_score: scores.security,
            issues: assessment.issues.clone(),
            timestamp,
        })
    }

    /// All scans, newest first. Rows sharing a timestamp come back in reverse
    /// insertion order.
    pub fn list_scans(&self) -> Result<Vec<Scan>, NaviError> {
        let conn = self.session()?;
        let mut stmt = conn.prepare(
            "SELECT id, url, accessibility_score, ux_ui_score, security_score, issues, timestamp FROM scans ORDER BY timestamp DESC, id DESC"
        ).map_err(|e| NaviError::Database(format!("Query failed: {}", e)))?;

        let rows = stmt.query_map([], |row: &rusqlite::Row| {
            let issues_raw: String = row.get(5)?;
            let timestamp_raw: String = row.get(6)?;

            let issues: ScanIssues = serde_json::from_str(&issues_raw)
                .map_err(|e| conversion_error(5, e))?;
            let timestamp = DateTime::parse_from_rfc3339(&timestamp_raw)
                .map_err(|e| conversion_error(6, e))?
                .with_timezone(&Utc);

            Ok(Scan {
                id: row.get(0)?,
                url: row.get(1)?,
                accessibility_score: row.get(2)?,
                ux_ui_score: row.get(3)?,
                security_score: row.get(4)?,
                issues,
                timestamp,
            })
        }).map_err(|e| NaviError::Database(format!("Query error: {}", e)))?;

        let mut scans = Vec::new();
        for row in rows {
            scans.push(row.map_err(|e| NaviError::Database(format!("Row error: {}", e)))?);
        }
        Ok(scans)
    }

    pub fn count_scans(&self) -> Result<usize, NaviError> {
        let conn = self.session()?;
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM scans", [], |row: &rusqlite::Row| row.get(0))
            .map_err(|e| NaviError::Database(format!("Query error: {}", e)))?;
        Ok(count as usize)
    }
}
