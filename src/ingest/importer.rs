//! Drives a full import of a listing export into the database.
//!
//! Rows are decoded, checked against existing properties and inserted inside
//! a per-row savepoint, so a failing row only loses its own work. Additions
//! are committed every `batch_size` rows; a fatal error rolls back the open
//! batch and leaves earlier batches in place.

use crate::db::connection::Database;
use crate::db::import_runs::{end_import_run, start_import_run};
use crate::db::properties::{find_by_natural_key, insert_property};
use crate::domain::{NewProperty, NewPropertyImage};
use crate::errors::ServerError;
use crate::ingest::columns::ColumnMap;
use crate::ingest::decoder::{decode_row, Decoded, SkipReason};
use chrono::{NaiveDateTime, Utc};
use csv::{ReaderBuilder, StringRecord, StringRecordsIter};
use rusqlite::{Connection, Transaction};
use std::collections::BTreeMap;
use std::fs::File;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_BATCH_SIZE: usize = 100;

#[derive(Debug, Clone)]
pub struct ImportOptions {
    /// Successful additions per commit
    pub batch_size: usize,
    pub columns: ColumnMap,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            columns: ColumnMap::default(),
        }
    }
}

/// What happened to a single data row.
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    Added,
    Skipped(SkipReason),
    /// Unexpected failure; the row's pending work was rolled back.
    Failed(String),
}

/// Counts for one import run. Failed rows are counted as skipped; `added`
/// only counts committed properties.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    pub processed: usize,
    pub added: usize,
    pub skipped: usize,
    pub skip_reasons: BTreeMap<&'static str, usize>,
}

impl RunSummary {
    fn record(&mut self, outcome: &RowOutcome) {
        let label = match outcome {
            RowOutcome::Added => {
                self.added += 1;
                return;
            }
            RowOutcome::Skipped(reason) => reason.label(),
            RowOutcome::Failed(_) => "failed",
        };
        self.skipped += 1;
        *self.skip_reasons.entry(label).or_insert(0) += 1;
    }

    /// Rows added since `committed` were lost with their batch; they move
    /// from added to skipped so the counts still cover every processed row.
    fn roll_back_to(&mut self, committed: usize) {
        let lost = self.added.saturating_sub(committed);
        self.added = committed;
        if lost > 0 {
            self.skipped += lost;
            *self.skip_reasons.entry("rolled back").or_insert(0) += lost;
        }
    }

    fn log(&self) {
        log::info!("Total rows processed: {}", self.processed);
        log::info!("Properties added: {}", self.added);
        log::info!(
            "Rows skipped (errors, duplicates, or not SOLD): {}",
            self.skipped
        );
        for (reason, count) in &self.skip_reasons {
            log::info!("  {reason}: {count}");
        }
    }
}

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("CSV file not found at {}", .0.display())]
    SourceNotFound(PathBuf),
    /// Uncommitted work was rolled back; `summary` covers rows read so far.
    #[error("Import aborted after {} rows ({} added): {reason}", .summary.processed, .summary.added)]
    Aborted { summary: RunSummary, reason: String },
}

#[derive(Debug, Error)]
enum FatalError {
    #[error("CSV read failed: {0}")]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Db(#[from] ServerError),
}

impl From<rusqlite::Error> for FatalError {
    fn from(err: rusqlite::Error) -> Self {
        FatalError::Db(err.into())
    }
}

pub struct Importer<'a> {
    db: &'a Database,
    options: ImportOptions,
}

impl<'a> Importer<'a> {
    pub fn new(db: &'a Database, options: ImportOptions) -> Self {
        Self { db, options }
    }

    /// Imports every row of `path`. Returns the run summary, or an error when
    /// the file is missing or the run had to stop early.
    pub fn run(&self, path: &Path) -> Result<RunSummary, ImportError> {
        if !path.exists() {
            log::error!("Error: CSV file not found at {}", path.display());
            return Err(ImportError::SourceNotFound(path.to_path_buf()));
        }

        log::info!("Starting CSV load from: {}", path.display());
        let run_id = self.start_run(path);
        let mut summary = RunSummary::default();

        let failure = match self.import_file(path, &mut summary) {
            Ok(()) => None,
            Err(e) => {
                log::error!("An unexpected error occurred during CSV loading: {e}");
                Some(e.to_string())
            }
        };

        log::info!("CSV loading finished.");
        summary.log();
        self.finish_run(run_id, &summary, failure.clone());

        match failure {
            None => Ok(summary),
            Some(reason) => Err(ImportError::Aborted { summary, reason }),
        }
    }

    fn import_file(&self, path: &Path, summary: &mut RunSummary) -> Result<(), FatalError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(path)?;

        let header = reader.headers()?;
        log::info!("CSV Header: {:?}", header.iter().collect::<Vec<_>>());

        let mut records = reader.records();
        let now = Utc::now().naive_utc();

        self.db
            .with_conn(|conn| Ok(self.import_batches(conn, &mut records, summary, now)))?
    }

    fn import_batches(
        &self,
        conn: &mut Connection,
        records: &mut StringRecordsIter<'_, File>,
        summary: &mut RunSummary,
        now: NaiveDateTime,
    ) -> Result<(), FatalError> {
        loop {
            let committed = summary.added;
            let (added, exhausted) = match self.commit_batch(conn, records, summary, now) {
                Ok(batch) => batch,
                Err(e) => {
                    summary.roll_back_to(committed);
                    return Err(e);
                }
            };

            if added > 0 {
                log::info!(
                    "Committed batch of {added} properties. Total added: {}",
                    summary.added
                );
            }
            if exhausted {
                return Ok(());
            }
        }
    }

    fn commit_batch(
        &self,
        conn: &mut Connection,
        records: &mut StringRecordsIter<'_, File>,
        summary: &mut RunSummary,
        now: NaiveDateTime,
    ) -> Result<(usize, bool), FatalError> {
        let mut tx = conn.transaction()?;
        let batch = self.import_batch(&mut tx, records, summary, now)?;
        tx.commit()?;
        Ok(batch)
    }

    /// Processes rows until a full batch was added or the input ran out.
    /// Returns the number of additions and whether the input is exhausted.
    fn import_batch(
        &self,
        tx: &mut Transaction<'_>,
        records: &mut StringRecordsIter<'_, File>,
        summary: &mut RunSummary,
        now: NaiveDateTime,
    ) -> Result<(usize, bool), FatalError> {
        let batch_size = self.options.batch_size.max(1);
        let mut added = 0;

        while added < batch_size {
            let outcome = match records.next() {
                None => return Ok((added, true)),
                Some(Err(e)) if e.is_io_error() => return Err(e.into()),
                Some(Err(e)) => {
                    summary.processed += 1;
                    RowOutcome::Failed(format!("unreadable record: {e}"))
                }
                Some(Ok(record)) => {
                    summary.processed += 1;
                    self.process_row(tx, &record, now)
                }
            };

            log_outcome(summary.processed, &outcome);
            if outcome == RowOutcome::Added {
                added += 1;
            }
            summary.record(&outcome);
        }

        Ok((added, false))
    }

    fn process_row(
        &self,
        tx: &mut Transaction<'_>,
        record: &StringRecord,
        now: NaiveDateTime,
    ) -> RowOutcome {
        match decode_row(record, &self.options.columns) {
            Decoded::Skip(reason) => RowOutcome::Skipped(reason),
            Decoded::Listing { property, image } => {
                match stage_row(tx, &property, image.as_ref(), now) {
                    Ok(outcome) => outcome,
                    Err(e) => RowOutcome::Failed(e.to_string()),
                }
            }
        }
    }

    fn start_run(&self, path: &Path) -> Option<i64> {
        let source = path.display().to_string();
        let started = Utc::now().timestamp();
        match self
            .db
            .with_conn(|conn| start_import_run(conn, &source, started))
        {
            Ok(id) => Some(id),
            Err(e) => {
                log::warn!("Could not record import run: {e}");
                None
            }
        }
    }

    fn finish_run(&self, run_id: Option<i64>, summary: &RunSummary, error: Option<String>) {
        let Some(run_id) = run_id else {
            return;
        };
        let finished = Utc::now().timestamp();
        if let Err(e) = self
            .db
            .with_conn(|conn| end_import_run(conn, run_id, finished, summary, error))
        {
            log::warn!("Could not finalize import run {run_id}: {e}");
        }
    }
}

/// Dedup check and insert for one decoded row, inside its own savepoint.
/// Anything that goes wrong drops the savepoint, discarding only this row.
fn stage_row(
    tx: &mut Transaction<'_>,
    property: &NewProperty,
    image: Option<&NewPropertyImage>,
    now: NaiveDateTime,
) -> Result<RowOutcome, ServerError> {
    let sp = tx.savepoint()?;

    if let Some(key) = property.natural_key() {
        if find_by_natural_key(&sp, &key)?.is_some() {
            return Ok(RowOutcome::Skipped(SkipReason::Duplicate));
        }
    }

    insert_property(&sp, property, image, now)?;
    sp.commit()?;
    Ok(RowOutcome::Added)
}

fn log_outcome(row: usize, outcome: &RowOutcome) {
    match outcome {
        RowOutcome::Added => log::debug!("Row {row}: added"),
        RowOutcome::Skipped(reason @ (SkipReason::NotSold(_) | SkipReason::Duplicate)) => {
            log::debug!("Row {row}: {reason}, skipping.")
        }
        RowOutcome::Skipped(reason @ SkipReason::MalformedAddress(_)) => {
            log::error!("Row {row}: {reason}, skipping row.")
        }
        RowOutcome::Skipped(reason) => log::warn!("Row {row}: {reason}, skipping."),
        RowOutcome::Failed(detail) => {
            log::error!("Row {row}: Unexpected error processing row: {detail}")
        }
    }
}
