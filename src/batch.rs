//! Batch driver: enumerate the input directory and convert each document.
//!
//! The driver is strictly sequential — one document, one page at a time, in
//! sorted filename order. Only a missing input directory (or an output
//! directory that cannot be created) aborts the run; a document that fails to
//! render or a page that fails to write is recorded in the returned
//! [`BatchSummary`] and the batch moves on.

use crate::config::BatchConfig;
use crate::error::{BatchError, PageError, RenderError};
use crate::output::{BatchSummary, DocumentReport, PageResult};
use crate::pipeline::render::{PageRenderer, PdfiumRenderer};
use crate::pipeline::{trim, write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{error, info, warn};

/// Run a full batch conversion with the production pdfium renderer.
///
/// This is the primary entry point for the library.
///
/// # Returns
/// `Ok(BatchSummary)` on success, even if some documents or pages failed
/// (check `summary.documents_failed` / `summary.pages_failed`).
///
/// # Errors
/// Returns `Err(BatchError)` only for fatal errors: missing input directory,
/// output directory not creatable, or no pdfium library to bind.
pub fn run(config: &BatchConfig) -> Result<BatchSummary, BatchError> {
    let renderer = PdfiumRenderer::new()?;
    run_with_renderer(&renderer, config)
}

/// Run a full batch conversion with a caller-supplied renderer.
///
/// Used by tests to drive the trim/write pipeline with synthetic frames, and
/// by callers embedding a different rasterisation backend.
pub fn run_with_renderer(
    renderer: &dyn PageRenderer,
    config: &BatchConfig,
) -> Result<BatchSummary, BatchError> {
    let start = Instant::now();

    // Input must exist before any file is touched; the output directory is
    // only created once that is established.
    if !config.input_dir.is_dir() {
        return Err(BatchError::InputDirMissing {
            path: config.input_dir.clone(),
        });
    }
    std::fs::create_dir_all(&config.output_dir).map_err(|e| BatchError::OutputDirCreateFailed {
        path: config.output_dir.clone(),
        source: e,
    })?;

    let documents = discover_pdfs(&config.input_dir)?;
    if documents.is_empty() {
        info!("No PDFs found in {}", config.input_dir.display());
        return Ok(BatchSummary::tally(
            Vec::new(),
            start.elapsed().as_millis() as u64,
        ));
    }
    info!(
        "Found {} PDF(s) in {}",
        documents.len(),
        config.input_dir.display()
    );

    let mut reports = Vec::with_capacity(documents.len());
    for document in documents {
        info!("Converting: {}", document.display());
        let outcome = match process_document(renderer, config, &document) {
            Ok(pages) => Ok(pages),
            Err(e) => {
                error!("{e}");
                Err(e)
            }
        };
        reports.push(DocumentReport {
            document,
            outcome,
        });
    }

    let summary = BatchSummary::tally(reports, start.elapsed().as_millis() as u64);
    info!(
        "Done: {}/{} documents, {} page(s) written, {} page(s) failed, {}ms",
        summary.documents_converted,
        summary.documents_found,
        summary.pages_written,
        summary.pages_failed,
        summary.duration_ms
    );
    Ok(summary)
}

/// Convert one document: render all pages, then trim, normalise, and write
/// each page in order.
///
/// A render failure abandons the document (no partial pages are attempted);
/// a write failure skips only that page.
pub fn process_document(
    renderer: &dyn PageRenderer,
    config: &BatchConfig,
    pdf_path: &Path,
) -> Result<Vec<PageResult>, RenderError> {
    let frames = renderer.render(pdf_path, config.dpi)?;

    let stem = pdf_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string());

    let mut results = Vec::with_capacity(frames.len());
    for (i, frame) in frames.iter().enumerate() {
        let page = i + 1;

        let trimmed = if config.trim_borders {
            trim::trim_border(frame, config.border_color, config.trim_tolerance)
        } else {
            frame.clone()
        };
        let savable = write::normalize_mode(&trimmed);

        let out_path = config
            .output_dir
            .join(format!("{stem}_page_{page}.{}", config.extension));

        let outcome = match write::save_frame(&savable, &out_path, config.format) {
            Ok(()) => {
                info!("  Saved: {}", out_path.display());
                Ok(out_path)
            }
            Err(e) => {
                let err = PageError::WriteFailed {
                    page,
                    path: out_path,
                    detail: e.to_string(),
                };
                warn!("  {err}");
                Err(err)
            }
        };
        results.push(PageResult { page, outcome });
    }

    Ok(results)
}

/// Enumerate regular files in `dir` whose extension is `.pdf`
/// (case-insensitive), sorted lexicographically by filename.
///
/// Directories and symlinks to directories are skipped. Sorting makes output
/// ordering deterministic across runs; the filesystem offers no guarantee.
fn discover_pdfs(dir: &Path) -> Result<Vec<PathBuf>, BatchError> {
    let entries = std::fs::read_dir(dir).map_err(|e| BatchError::ReadDirFailed {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut pdfs: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file())
        .filter(|path| {
            path.extension()
                .map(|ext| ext.eq_ignore_ascii_case("pdf"))
                .unwrap_or(false)
        })
        .collect();

    pdfs.sort_by_key(|p| p.file_name().map(|n| n.to_os_string()));
    Ok(pdfs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discover_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.pdf"), b"%PDF-1.7").unwrap();
        std::fs::write(dir.path().join("a.PDF"), b"%PDF-1.7").unwrap();
        std::fs::write(dir.path().join("notes.txt"), b"not a pdf").unwrap();
        std::fs::create_dir(dir.path().join("folder.pdf")).unwrap();

        let found = discover_pdfs(dir.path()).unwrap();
        let names: Vec<_> = found
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.PDF", "b.pdf"]);
    }

    #[test]
    fn discover_missing_dir_fails() {
        let err = discover_pdfs(Path::new("/definitely/not/here"));
        assert!(matches!(err, Err(BatchError::ReadDirFailed { .. })));
    }
}
