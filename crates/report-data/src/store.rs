//! Append-only result store.
//!
//! Persists one [`AnalysisRecord`] per saved analysis in a flat CSV file,
//! keyed by (start date, end date, worker). Records are never updated or
//! deleted; an append with an already-present key is rejected.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use report_core::error::Result;
use report_core::models::AnalysisRecord;
use tracing::{info, warn};

/// Outcome of an [`ResultStore::append`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendOutcome {
    /// The record was written to the store.
    Saved,
    /// A record with the same (start, end, worker) key already exists;
    /// nothing was written.
    Duplicate,
}

/// Flat-file store of saved analyses.
///
/// The file is created lazily with a header row on the first append. No
/// locking is performed; single-user, single-process usage is assumed.
#[derive(Debug, Clone)]
pub struct ResultStore {
    path: PathBuf,
}

impl ResultStore {
    /// Create a store handle for `path`. The file itself may not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The store's file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every stored record.
    ///
    /// A missing or empty file yields an empty list, not an error.
    pub fn load(&self) -> Result<Vec<AnalysisRecord>> {
        if !self.is_populated() {
            return Ok(Vec::new());
        }

        let mut rdr = csv::Reader::from_path(&self.path)?;
        let mut records = Vec::new();
        for result in rdr.deserialize::<AnalysisRecord>() {
            records.push(result?);
        }
        Ok(records)
    }

    /// Whether a record with exactly this (start, end, worker) key is
    /// already present.
    pub fn exists(&self, start_date: NaiveDate, end_date: NaiveDate, worker: &str) -> Result<bool> {
        Ok(self.load()?.iter().any(|r| {
            r.start_date == start_date && r.end_date == end_date && r.worker == worker
        }))
    }

    /// Append one record, creating the store with a header row if needed.
    ///
    /// A duplicate (start, end, worker) key is rejected as a warned no-op;
    /// the store is left untouched.
    pub fn append(&self, record: &AnalysisRecord) -> Result<AppendOutcome> {
        if self.exists(record.start_date, record.end_date, &record.worker)? {
            warn!(
                "Entry already exists for {} .. {} / {}; skipping save",
                record.start_date, record.end_date, record.worker
            );
            return Ok(AppendOutcome::Duplicate);
        }

        let write_header = !self.is_populated();
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(write_header)
            .from_writer(file);
        wtr.serialize(record)?;
        wtr.flush()?;

        info!(
            "Saved analysis for {} ({} .. {}) to {}",
            record.worker,
            record.start_date,
            record.end_date,
            self.path.display()
        );
        Ok(AppendOutcome::Saved)
    }

    /// Whether the store file exists and holds at least one byte.
    fn is_populated(&self) -> bool {
        std::fs::metadata(&self.path)
            .map(|m| m.len() > 0)
            .unwrap_or(false)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
