//! Frame output: colour-mode normalisation and atomic encode-and-write.
//!
//! ## Why normalise before saving?
//!
//! pdfium hands back RGBA frames. Alpha channels confuse some downstream
//! viewers and are rejected outright by the JPEG encoder, so anything that is
//! not already plain RGB or 8-bit grayscale is flattened to RGB first.
//!
//! ## Why write through a temp file?
//!
//! A failed write must leave no half-written output behind. The frame is
//! encoded fully in memory, written to a `.tmp` sibling, then renamed into
//! place, so any failure along the way leaves either the old file or nothing.

use crate::config::OutputFormat;
use image::DynamicImage;
use std::borrow::Cow;
use std::io::Cursor;
use std::path::Path;
use tracing::debug;

/// Encode or I/O failure while writing one frame; the caller attaches
/// document and page context.
#[derive(Debug, thiserror::Error)]
pub enum FrameWriteError {
    #[error("encoding failed: {0}")]
    Encode(#[from] image::ImageError),
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

/// Flatten a frame to a directly-savable colour representation.
///
/// RGB and 8-bit grayscale frames pass through untouched; everything else
/// (RGBA, 16-bit, paletted-decoded variants) becomes RGB.
pub fn normalize_mode(frame: &DynamicImage) -> Cow<'_, DynamicImage> {
    match frame {
        DynamicImage::ImageRgb8(_) | DynamicImage::ImageLuma8(_) => Cow::Borrowed(frame),
        other => Cow::Owned(DynamicImage::ImageRgb8(other.to_rgb8())),
    }
}

/// Encode `frame` in `format` and write it to `path` atomically.
pub fn save_frame(
    frame: &DynamicImage,
    path: &Path,
    format: OutputFormat,
) -> Result<(), FrameWriteError> {
    let mut buf = Vec::new();
    frame.write_to(&mut Cursor::new(&mut buf), format.image_format())?;

    let tmp_path = path.with_extension("tmp");
    if let Err(e) = std::fs::write(&tmp_path, &buf) {
        // Leave nothing behind if the staging write itself failed part-way.
        let _ = std::fs::remove_file(&tmp_path);
        return Err(e.into());
    }
    if let Err(e) = std::fs::rename(&tmp_path, path) {
        let _ = std::fs::remove_file(&tmp_path);
        return Err(e.into());
    }

    debug!("wrote {} ({} bytes)", path.display(), buf.len());
    Ok(())
}
