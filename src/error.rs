//! Error types for the pdf2img library.
//!
//! Three distinct error types reflect the three failure tiers of a batch run:
//!
//! * [`BatchError`] — **Fatal**: the run cannot proceed at all (missing input
//!   directory, output directory not creatable, pdfium unavailable). Returned
//!   as `Err(BatchError)` from the top-level `run*` functions; nothing has
//!   been converted when one of these surfaces.
//!
//! * [`RenderError`] — **Document-level, recoverable**: one PDF could not be
//!   rendered (corrupt file, password-protected). Stored inside
//!   [`crate::output::DocumentReport`]; the batch continues with the next
//!   document.
//!
//! * [`PageError`] — **Page-level, recoverable**: encoding or writing one
//!   page failed. Stored inside [`crate::output::PageResult`]; remaining
//!   pages of the same document continue normally.
//!
//! The separation keeps each tier testable in isolation: callers inspect
//! explicit result values rather than intercepting a single flattened error
//! type after the fact.

use std::path::PathBuf;
use thiserror::Error;

/// All fatal errors returned by the pdf2img library.
///
/// Document- and page-level failures use [`RenderError`] and [`PageError`]
/// and are stored in the [`crate::output::BatchSummary`] rather than
/// propagated here.
#[derive(Debug, Error)]
pub enum BatchError {
    /// The configured input directory does not exist.
    #[error("Input folder not found: '{path}'\nCheck the path exists before running.")]
    InputDirMissing { path: PathBuf },

    /// The output directory could not be created.
    #[error("Failed to create output directory '{path}': {source}")]
    OutputDirCreateFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input directory exists but could not be enumerated.
    #[error("Failed to read input directory '{path}': {source}")]
    ReadDirFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Could not bind to a pdfium library.
    #[error(
        "Failed to bind to pdfium library: {0}\n\
         Install pdfium system-wide, or place libpdfium next to the executable."
    )]
    PdfiumBindingFailed(String),
}

/// A document-level error: rendering one PDF failed and all of its pages
/// are skipped. The batch continues with the next document.
#[derive(Debug, Clone, Error, serde::Serialize, serde::Deserialize)]
pub enum RenderError {
    /// The document is encrypted and cannot be opened without a password.
    #[error("'{path}' is password-protected")]
    PasswordProtected { path: PathBuf },

    /// The document could not be parsed at all.
    #[error("'{path}' could not be read: {detail}")]
    Corrupt { path: PathBuf, detail: String },

    /// One page failed to rasterise; treated as a document failure because
    /// the pipeline needs the full ordered page sequence.
    #[error("'{path}' page {page}: rasterisation failed: {detail}")]
    PageRender {
        path: PathBuf,
        page: usize,
        detail: String,
    },
}

/// A page-level error: one page could not be encoded or written.
///
/// Stored inside [`crate::output::PageResult`]; only that page is skipped.
#[derive(Debug, Clone, Error, serde::Serialize, serde::Deserialize)]
pub enum PageError {
    /// Encoding or writing the output file failed. The write is staged
    /// through a temp file, so a failure leaves no partial output behind.
    #[error("page {page}: failed to write '{path}': {detail}")]
    WriteFailed {
        page: usize,
        path: PathBuf,
        detail: String,
    },
}
