/// Idempotent schema. `created_at` defaults to insertion time; rows are
/// append-only and never updated or deleted.
pub const DDL: &str = r#"
CREATE TABLE IF NOT EXISTS build_failures (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    job_name TEXT NOT NULL,
    build_number INTEGER NOT NULL,
    node_name TEXT,
    category TEXT NOT NULL,
    severity TEXT NOT NULL,
    summary TEXT,
    created_at DATETIME DEFAULT CURRENT_TIMESTAMP
);

CREATE INDEX IF NOT EXISTS idx_build_failures_created_at
    ON build_failures(created_at);
"#;
