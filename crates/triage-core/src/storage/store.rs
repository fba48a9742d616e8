use crate::model::{BuildFailure, NewFailure};
use anyhow::Context;
use rusqlite::{params, Connection};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Append-only store for analyzed build failures. Writers serialize on the
/// connection mutex and on SQLite's own single-writer semantics; no extra
/// application-level locking is added.
#[derive(Clone)]
pub struct Store {
    pub conn: Arc<Mutex<Connection>>,
}

impl Store {
    pub fn open(path: &Path) -> anyhow::Result<Self> {
        let conn = Connection::open(path).context("failed to open sqlite db")?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn memory() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory().context("failed to open in-memory sqlite db")?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn init_schema(&self) -> anyhow::Result<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute_batch(crate::storage::schema::DDL)?;
        Ok(())
    }

    /// Appends one immutable failure row and returns its id. Stamps
    /// `created_at` with the insertion time unless the caller supplied one.
    pub fn insert_failure(&self, rec: &NewFailure) -> anyhow::Result<i64> {
        if rec.job_name.is_empty() || rec.severity.is_empty() || rec.category.is_empty() {
            anyhow::bail!("refusing to persist record with empty job_name/severity/category");
        }
        let created_at = rec.created_at.clone().unwrap_or_else(now_timestamp);
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO build_failures
             (job_name, build_number, node_name, category, severity, summary, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                rec.job_name,
                rec.build_number,
                rec.node_name,
                rec.category,
                rec.severity,
                rec.summary,
                created_at
            ],
        )
        .context("failed to insert build failure")?;
        Ok(conn.last_insert_rowid())
    }

    pub fn get_failure(&self, id: i64) -> anyhow::Result<BuildFailure> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            "SELECT id, job_name, build_number, node_name, category, severity, summary, created_at
             FROM build_failures
             WHERE id = ?1",
        )?;
        let rec = stmt
            .query_row(params![id], row_to_failure)
            .with_context(|| format!("no build failure with id {}", id))?;
        Ok(rec)
    }

    /// Most recent records, newest first. `id` order equals insertion order.
    pub fn recent_failures(&self, limit: u32) -> anyhow::Result<Vec<BuildFailure>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            "SELECT id, job_name, build_number, node_name, category, severity, summary, created_at
             FROM build_failures
             ORDER BY id DESC
             LIMIT ?1",
        )?;
        let rows = stmt.query_map(params![limit], row_to_failure)?;
        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    /// Total row count plus each category's share of the total as a
    /// one-decimal percentage. An empty store yields `(0, {})` rather than
    /// dividing by zero.
    pub fn category_distribution(&self) -> anyhow::Result<(u64, BTreeMap<String, f64>)> {
        let conn = self.conn.lock().unwrap();
        let total: i64 = conn.query_row("SELECT COUNT(*) FROM build_failures", [], |r| r.get(0))?;
        if total == 0 {
            return Ok((0, BTreeMap::new()));
        }
        let mut stmt =
            conn.prepare("SELECT category, COUNT(*) FROM build_failures GROUP BY category")?;
        let rows =
            stmt.query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?)))?;
        let mut dist = BTreeMap::new();
        for r in rows {
            let (category, count) = r?;
            let pct = (count as f64 / total as f64) * 100.0;
            dist.insert(category, (pct * 10.0).round() / 10.0);
        }
        Ok((total as u64, dist))
    }
}

fn row_to_failure(row: &rusqlite::Row<'_>) -> rusqlite::Result<BuildFailure> {
    Ok(BuildFailure {
        id: row.get(0)?,
        job_name: row.get(1)?,
        build_number: row.get(2)?,
        node_name: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
        category: row.get(4)?,
        severity: row.get(5)?,
        summary: row.get::<_, Option<String>>(6)?.unwrap_or_default(),
        created_at: row.get(7)?,
    })
}

fn now_timestamp() -> String {
    chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
