pub const CREATE_TABLES: &str = "
CREATE TABLE IF NOT EXISTS incidents (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    description TEXT NOT NULL,
    status TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS scans (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    url TEXT NOT NULL,
    accessibility_score INTEGER NOT NULL CHECK (accessibility_score BETWEEN 0 AND 100),
    ux_ui_score INTEGER NOT NULL CHECK (ux_ui_score BETWEEN 0 AND 100),
    security_score INTEGER NOT NULL CHECK (security_score BETWEEN 0 AND 100),
    issues TEXT NOT NULL,
    timestamp TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_incidents_title ON incidents(title);
CREATE INDEX IF NOT EXISTS idx_scans_timestamp ON scans(timestamp);
";
