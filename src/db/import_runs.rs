use crate::errors::ServerError;
use crate::ingest::RunSummary;
use rusqlite::{params, Connection};

#[derive(Debug)]
pub struct ImportRun {
    pub id: i64,
    pub source_path: String,
    pub started_at: i64,
    pub finished_at: Option<i64>,
    pub rows_processed: Option<i64>,
    pub rows_added: Option<i64>,
    pub rows_skipped: Option<i64>,
    pub success: bool,
    pub error_message: Option<String>,
}

pub fn start_import_run(conn: &Connection, source_path: &str, now: i64) -> Result<i64, ServerError> {
    conn.execute(
        "INSERT INTO import_runs (source_path, started_at, success) VALUES (?, ?, 0)",
        params![source_path, now],
    )
    .map_err(|e| ServerError::DbError(e.to_string()))?;
    Ok(conn.last_insert_rowid())
}

pub fn end_import_run(
    conn: &Connection,
    run_id: i64,
    now: i64,
    summary: &RunSummary,
    error: Option<String>,
) -> Result<(), ServerError> {
    conn.execute(
        "UPDATE import_runs SET finished_at = ?, rows_processed = ?, rows_added = ?, rows_skipped = ?, success = ?, error_message = ? WHERE id = ?",
        params![
            now,
            summary.processed,
            summary.added,
            summary.skipped,
            error.is_none(),
            error,
            run_id
        ],
    )
    .map_err(|e| ServerError::DbError(e.to_string()))?;
    Ok(())
}

pub fn get_recent_imports(conn: &Connection) -> Result<Vec<ImportRun>, ServerError> {
    let mut stmt = conn
        .prepare("SELECT id, source_path, started_at, finished_at, rows_processed, rows_added, rows_skipped, success, error_message FROM import_runs ORDER BY started_at DESC, id DESC LIMIT 50")
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let rows = stmt
        .query_map([], |row| {
            Ok(ImportRun {
                id: row.get(0)?,
                source_path: row.get(1)?,
                started_at: row.get(2)?,
                finished_at: row.get(3)?,
                rows_processed: row.get(4)?,
                rows_added: row.get(5)?,
                rows_skipped: row.get(6)?,
                success: row.get(7)?,
                error_message: row.get(8)?,
            })
        })
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let mut runs = Vec::new();
    for r in rows {
        runs.push(r.map_err(|e| ServerError::DbError(e.to_string()))?);
    }
    Ok(runs)
}
