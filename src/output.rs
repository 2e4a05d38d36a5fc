//! Output types: per-page results, per-document reports, and run statistics.
//!
//! The batch driver never aborts on a recoverable failure; it records one
//! [`DocumentReport`] per input PDF and one [`PageResult`] per rendered page
//! so callers can inspect partial success rather than losing the whole run
//! to one bad file. Everything is serialisable for `--json` run summaries.

use crate::error::{PageError, RenderError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The outcome of processing one rendered page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResult {
    /// 1-based page index within the document.
    pub page: usize,
    /// The written output file, or the page-level error that skipped it.
    pub outcome: Result<PathBuf, PageError>,
}

impl PageResult {
    /// Whether this page produced an output file.
    pub fn is_written(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// The outcome of processing one input document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentReport {
    /// Path of the input PDF.
    pub document: PathBuf,
    /// Per-page results, or the document-level render failure that skipped
    /// the document entirely.
    pub outcome: Result<Vec<PageResult>, RenderError>,
}

impl DocumentReport {
    /// Number of pages that produced output files.
    pub fn pages_written(&self) -> usize {
        match &self.outcome {
            Ok(pages) => pages.iter().filter(|p| p.is_written()).count(),
            Err(_) => 0,
        }
    }

    /// Number of pages that failed at the page level.
    pub fn pages_failed(&self) -> usize {
        match &self.outcome {
            Ok(pages) => pages.iter().filter(|p| !p.is_written()).count(),
            Err(_) => 0,
        }
    }
}

/// Aggregate statistics and per-document reports for one batch run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Number of PDF files discovered in the input directory.
    pub documents_found: usize,
    /// Documents for which at least rendering succeeded.
    pub documents_converted: usize,
    /// Documents skipped entirely because rendering failed.
    pub documents_failed: usize,
    /// Output files written across all documents.
    pub pages_written: usize,
    /// Pages skipped because encoding or writing failed.
    pub pages_failed: usize,
    /// Wall-clock duration of the run in milliseconds.
    pub duration_ms: u64,
    /// One report per discovered document, in processing order.
    pub reports: Vec<DocumentReport>,
}

impl BatchSummary {
    /// Fold per-document reports into the aggregate counters.
    pub(crate) fn tally(reports: Vec<DocumentReport>, duration_ms: u64) -> Self {
        let documents_found = reports.len();
        let documents_failed = reports.iter().filter(|r| r.outcome.is_err()).count();
        Self {
            documents_found,
            documents_converted: documents_found - documents_failed,
            documents_failed,
            pages_written: reports.iter().map(|r| r.pages_written()).sum(),
            pages_failed: reports.iter().map(|r| r.pages_failed()).sum(),
            duration_ms,
            reports,
        }
    }
}
