//! Pipeline stages for PDF-to-image conversion.
//!
//! Each submodule implements exactly one transformation step. Keeping stages
//! separate makes each independently testable and lets us swap
//! implementations (e.g. a different rendering backend) without touching the
//! other stages.
//!
//! ## Data Flow
//!
//! ```text
//! render ──▶ trim ──▶ write
//! (pdfium)  (crop)   (normalise + encode + atomic save)
//! ```
//!
//! 1. [`render`] — rasterise every page of one document via pdfium, behind
//!    the [`render::PageRenderer`] capability trait
//! 2. [`trim`]   — crop uniform-colour borders with a luminance threshold
//! 3. [`write`]  — flatten the colour mode, encode, and write atomically

pub mod render;
pub mod trim;
pub mod write;
