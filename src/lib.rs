//! # pdf2img
//!
//! Batch-convert a directory of PDF files to per-page raster images,
//! optionally trimming uniform-colour borders from each page.
//!
//! ## Why this crate?
//!
//! Scanned and generated PDFs routinely carry wide black or white margins
//! around the page body. This crate rasterises every page via pdfium, crops
//! away anything within a tolerance of a configured background colour, and
//! writes one deterministically named image per page — useful for archival,
//! printing, or feeding pages to downstream image processing.
//!
//! ## Pipeline Overview
//!
//! ```text
//! input dir
//!  │
//!  ├─ 1. Discover  enumerate *.pdf files (case-insensitive, sorted)
//!  ├─ 2. Render    rasterise all pages via pdfium at the configured DPI
//!  ├─ 3. Trim      crop uniform borders with a luminance threshold
//!  ├─ 4. Normalise flatten to RGB/grayscale (no alpha in outputs)
//!  └─ 5. Write     atomic encode-and-save as {stem}_page_{n}.{ext}
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pdf2img::{run, BatchConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = BatchConfig::default(); // ./pdfs → ./images at 400 DPI
//!     let summary = run(&config)?;
//!     println!(
//!         "{} pages written, {} failed",
//!         summary.pages_written, summary.pages_failed
//!     );
//!     Ok(())
//! }
//! ```
//!
//! ## Error tiers
//!
//! | Tier | Type | Effect |
//! |------|------|--------|
//! | Fatal | [`BatchError`] | run aborts before conversion |
//! | Document | [`RenderError`] | one PDF skipped, batch continues |
//! | Page | [`PageError`] | one page skipped, document continues |
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `pdf2img` binary (clap + anyhow + tracing-subscriber) |
//!
//! Disable `cli` when using only the library:
//! ```toml
//! pdf2img = { version = "0.1", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod batch;
pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use batch::{process_document, run, run_with_renderer};
pub use config::{BatchConfig, BatchConfigBuilder, OutputFormat};
pub use error::{BatchError, PageError, RenderError};
pub use output::{BatchSummary, DocumentReport, PageResult};
pub use pipeline::render::{PageRenderer, PdfiumRenderer};
pub use pipeline::trim::trim_border;
