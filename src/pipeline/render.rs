//! PDF rasterisation: render every page of a document to `DynamicImage`.
//!
//! Rendering sits behind the [`PageRenderer`] trait so the trimming and
//! writing stages can be exercised with synthetic frames instead of a real
//! PDF engine. [`PdfiumRenderer`] is the production implementation.
//!
//! ## Why scale by `dpi / 72`?
//!
//! PDF page geometry is expressed in points, defined as 1/72 inch. pdfium
//! renders at native point resolution by default, so a 400 DPI request is a
//! uniform scale factor of `400 / 72 ≈ 5.56` applied to both axes.

use crate::error::{BatchError, RenderError};
use image::{DynamicImage, GenericImageView};
use pdfium_render::prelude::*;
use std::path::Path;
use tracing::{debug, info};

/// Capability interface for turning one PDF into an ordered page sequence.
///
/// Implementations must return frames strictly in page order, one per page,
/// or a [`RenderError`] that abandons the whole document.
pub trait PageRenderer {
    /// Rasterise every page of the document at `path` at `dpi`.
    fn render(&self, path: &Path, dpi: u32) -> Result<Vec<DynamicImage>, RenderError>;
}

/// Production renderer backed by the pdfium library.
pub struct PdfiumRenderer {
    pdfium: Pdfium,
}

impl PdfiumRenderer {
    /// Bind to a pdfium library: first next to the executable, then the
    /// system library path.
    pub fn new() -> Result<Self, BatchError> {
        let bindings = Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
            .or_else(|_| Pdfium::bind_to_system_library())
            .map_err(|e| BatchError::PdfiumBindingFailed(format!("{e:?}")))?;
        Ok(Self {
            pdfium: Pdfium::new(bindings),
        })
    }
}

impl PageRenderer for PdfiumRenderer {
    fn render(&self, path: &Path, dpi: u32) -> Result<Vec<DynamicImage>, RenderError> {
        let document = self
            .pdfium
            .load_pdf_from_file(path, None)
            .map_err(|e| classify_load_error(path, e))?;

        let pages = document.pages();
        info!("{}: {} pages", path.display(), pages.len());

        // Points are 1/72 inch; scale uniformly to the requested DPI.
        let render_config = PdfRenderConfig::new().scale_page_by_factor(dpi as f32 / 72.0);

        let mut frames = Vec::with_capacity(pages.len() as usize);
        for (idx, page) in pages.iter().enumerate() {
            let bitmap =
                page.render_with_config(&render_config)
                    .map_err(|e| RenderError::PageRender {
                        path: path.to_path_buf(),
                        page: idx + 1,
                        detail: format!("{e:?}"),
                    })?;
            let frame = bitmap.as_image();
            debug!(
                "rendered {} page {} → {}x{} px",
                path.display(),
                idx + 1,
                frame.width(),
                frame.height()
            );
            frames.push(frame);
        }

        Ok(frames)
    }
}

/// Map a pdfium load failure onto the document-level error taxonomy.
///
/// pdfium does not expose a structured "encrypted" error through the load
/// call, so password protection is detected from the error message.
fn classify_load_error(path: &Path, e: PdfiumError) -> RenderError {
    let detail = format!("{e:?}");
    if detail.to_ascii_lowercase().contains("password") {
        RenderError::PasswordProtected {
            path: path.to_path_buf(),
        }
    } else {
        RenderError::Corrupt {
            path: path.to_path_buf(),
            detail,
        }
    }
}
