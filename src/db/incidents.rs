use crate::errors::NaviError;
use crate::models::{Incident, NewIncident};
use super::Database;

impl Database {
    pub fn insert_incident(&self, incident: &NewIncident) -> Result<Incident, NaviError> {
        let conn = self.session()?;
        conn.execute(
            "INSERT INTO incidents (title, description, status) VALUES (?1, ?2, ?3)",
            rusqlite::params![incident.title, incident.description, incident.status],
        ).map_err(|e| NaviError::Database(format!("Failed to insert incident: {}", e)))?;

        Ok(Incident {
            id: conn.last_insert_rowid(),
            title: incident.title.clone(),
            description: incident.description.clone(),
            status: incident.status.clone(),
        })
    }

    pub fn list_incidents(&self) -> Result<Vec<Incident>, NaviError> {
        let conn = self.session()?;
        let mut stmt = conn.prepare(
            "SELECT id, title, description, status FROM incidents ORDER BY id"
        ).map_err(|e| NaviError::Database(format!("Query failed: {}", e)))?;

        let rows = stmt.query_map([], |row: &rusqlite::Row| {
            Ok(Incident {
                id: row.get(0)?,
                title: row.get(1)?,
                description: row.get(2)?,
                status: row.get(3)?,
            })
        }).map_err(|e| NaviError::Database(format!("Query error: {}", e)))?;

        let mut incidents = Vec::new();
        for row in rows {
            incidents.push(row.map_err(|e| NaviError::Database(format!("Row error: {}", e)))?);
        }
        Ok(incidents)
    }
}
